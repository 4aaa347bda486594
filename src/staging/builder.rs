// ABOUTME: Per-iteration template file builder
// ABOUTME: Streams the source template through the renderer into the run workspace

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing::debug;

use super::error::{Result, StagingError};
use super::input_map::InputFileMap;
use super::renderer::TemplateRenderer;
use crate::scenario::{OtherSymbolSource, RunControlConfig};
use crate::workspace::RunLocations;

/// Top-level per-iteration entry point. Opens the configured template,
/// drives the renderer line by line, and writes the fully resolved
/// model file into the run workspace.
pub struct TemplateFileBuilder<'a> {
    run_control: &'a RunControlConfig,
    input_map: &'a InputFileMap,
    symbols: &'a dyn OtherSymbolSource,
    locations: &'a RunLocations,
}

impl<'a> TemplateFileBuilder<'a> {
    pub fn new(
        run_control: &'a RunControlConfig,
        input_map: &'a InputFileMap,
        symbols: &'a dyn OtherSymbolSource,
        locations: &'a RunLocations,
    ) -> Self {
        Self {
            run_control,
            input_map,
            symbols,
            locations,
        }
    }

    /// Render the model file for one iteration and return its path.
    ///
    /// The destination carries the same base name as the source template
    /// and is fully rewritten on every call. Line order and count are
    /// preserved.
    pub fn build(&self, iteration: i32) -> Result<PathBuf> {
        self.locations.ensure_workspace()?;

        let source = self
            .locations
            .template_source(&self.run_control.template_file_name);
        if !source.is_file() {
            return Err(StagingError::TemplateNotFound(source));
        }

        let target = self
            .locations
            .staged_file(&self.run_control.template_file_name);

        let renderer = TemplateRenderer::new(
            self.run_control,
            iteration,
            self.input_map,
            self.symbols,
            self.locations,
        );

        let reader = BufReader::new(File::open(&source)?);
        let mut writer = BufWriter::new(File::create(&target)?);

        for line in reader.lines() {
            let rendered = renderer.render_line(&line?)?;
            writeln!(writer, "{}", rendered)?;
        }

        writer.flush()?;

        debug!(
            "Rendered model file for iteration {}: {}",
            iteration,
            target.display()
        );

        Ok(target)
    }
}
