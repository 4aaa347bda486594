// ABOUTME: Three-pass symbol substitution over template lines
// ABOUTME: Resolves system, input-file, and other symbols and stages referenced files

use std::fs;
use std::path::Path;
use tracing::debug;

use super::error::{Result, StagingError};
use super::input_map::InputFileMap;
use super::symbols::OtherSymbolTable;
use crate::scenario::{OtherSymbolSource, RunControlConfig};
use crate::workspace::RunLocations;

/// Reserved system symbols. Matched as exact substrings, case-sensitive,
/// `%` delimiters included.
pub const ITERATION_SYMBOL: &str = "%SSIM_ITERATION%";
pub const TICKS_SYMBOL: &str = "%SSIM_TICKS%";
pub const VARIABLE_FILE_SYMBOL: &str = "%SSIM_VARIABLE_FILENAME%";
pub const VARIABLE_RASTER_FILE_SYMBOL: &str = "%SSIM_VARIABLE_RASTER_FILENAME%";

/// Workspace file names the variable output symbols resolve to.
pub const VARIABLE_FILE_NAME: &str = "OutputVariable.csv";
pub const VARIABLE_RASTER_FILE_NAME: &str = "OutputVariableRaster.csv";

/// Renders template lines for one iteration by applying three
/// substitution passes in a fixed order: reserved system symbols first,
/// then input-file symbols (staging referenced files into the workspace
/// as a side effect), then the other-symbols table as a catch-all.
///
/// The other-symbols pass runs last so it can also inspect text injected
/// by the earlier passes, and can never consume a reserved or
/// input-file token before it has been resolved.
pub struct TemplateRenderer<'a> {
    iteration: i32,
    iteration_text: String,
    tick_text: String,
    variable_file: String,
    variable_raster_file: String,
    input_map: &'a InputFileMap,
    symbols: &'a dyn OtherSymbolSource,
    locations: &'a RunLocations,
}

impl<'a> TemplateRenderer<'a> {
    pub fn new(
        run_control: &RunControlConfig,
        iteration: i32,
        input_map: &'a InputFileMap,
        symbols: &'a dyn OtherSymbolSource,
        locations: &'a RunLocations,
    ) -> Self {
        Self {
            iteration,
            iteration_text: iteration.to_string(),
            tick_text: run_control.tick_count().to_string(),
            variable_file: escaped_quoted(&locations.staged_file(VARIABLE_FILE_NAME)),
            variable_raster_file: escaped_quoted(&locations.staged_file(VARIABLE_RASTER_FILE_NAME)),
            input_map,
            symbols,
            locations,
        }
    }

    /// Transform one template line through all three passes, in order.
    pub fn render_line(&self, line: &str) -> Result<String> {
        let line = self.apply_system_symbols(line);
        let line = self.apply_input_file_symbols(&line)?;
        self.apply_other_symbols(&line)
    }

    fn apply_system_symbols(&self, line: &str) -> String {
        line.replace(ITERATION_SYMBOL, &self.iteration_text)
            .replace(TICKS_SYMBOL, &self.tick_text)
            .replace(VARIABLE_FILE_SYMBOL, &self.variable_file)
            .replace(VARIABLE_RASTER_FILE_SYMBOL, &self.variable_raster_file)
    }

    fn apply_input_file_symbols(&self, line: &str) -> Result<String> {
        let mut line = line.to_string();

        for record in self.input_map.records_for(self.iteration) {
            let token = format!("%{}%", record.symbol);

            // No filesystem access for records the line never mentions.
            if !line.contains(&token) {
                continue;
            }

            let staged = self.locations.staged_file(&record.filename);
            line = line.replace(&token, &escaped_quoted(&staged));

            self.stage_input_file(&record.symbol, &record.filename)?;
        }

        Ok(line)
    }

    fn apply_other_symbols(&self, line: &str) -> Result<String> {
        // Reloaded from the source on every pass rather than cached, so
        // replacements reflect the current configuration state.
        let table = OtherSymbolTable::from_rows(&self.symbols.other_symbols()?);
        Ok(table.apply(line))
    }

    /// Copy a source input file into the workspace unless a file of the
    /// same base name is already staged there.
    fn stage_input_file(&self, symbol: &str, filename: &str) -> Result<()> {
        let staged = self.locations.staged_file(filename);
        if staged.exists() {
            return Ok(());
        }

        let source = self.locations.input_file(filename);
        if !source.is_file() {
            return Err(StagingError::MissingInputFile {
                symbol: symbol.to_string(),
                path: source,
            });
        }

        fs::copy(&source, &staged).map_err(|e| StagingError::StageCopyFailed {
            symbol: symbol.to_string(),
            from: source.clone(),
            to: staged.clone(),
            source: e,
        })?;

        debug!(
            "Staged input file for '{}': {} -> {}",
            symbol,
            source.display(),
            staged.display()
        );

        Ok(())
    }
}

/// Quote a path and double its backslashes so it survives inside the
/// rendered model source as a string literal.
pub(crate) fn escaped_quoted(path: &Path) -> String {
    format!("\"{}\"", path.display().to_string().replace('\\', "\\\\"))
}
