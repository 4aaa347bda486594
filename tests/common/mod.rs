// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides a scenario fixture builder for setting up staging environments

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use simstage::scenario::{InputFileRow, OtherSymbolRow, RunControlSheet, Scenario};
use simstage::workspace::RunLocations;

/// An on-disk scenario with its source files and a workspace root,
/// living in temp directories for the duration of a test.
pub struct ScenarioFixture {
    pub scenario_dir: TempDir,
    pub workspace_root: TempDir,
    pub scenario_path: PathBuf,
}

impl ScenarioFixture {
    /// Locations wired the way the CLI wires them: inputs and template
    /// next to the scenario file, a run-scoped workspace under the root.
    pub fn locations(&self, run_id: &str) -> RunLocations {
        RunLocations::for_scenario(self.scenario_dir.path(), self.workspace_root.path(), run_id)
    }

    pub fn load(&self) -> Scenario {
        Scenario::from_file(&self.scenario_path).unwrap()
    }
}

pub struct ScenarioBuilder {
    run_control: RunControlSheet,
    input_files: Vec<InputFileRow>,
    other_symbols: Vec<OtherSymbolRow>,
    template_content: String,
    source_files: Vec<(String, String)>,
}

impl ScenarioBuilder {
    pub fn new() -> Self {
        Self {
            run_control: RunControlSheet {
                minimum_iteration: Some(1),
                maximum_iteration: Some(1),
                minimum_timestep: Some(1),
                maximum_timestep: Some(10),
                template_file: Some("model.nlogo".to_string()),
                experiment: Some("integration-test".to_string()),
            },
            input_files: Vec::new(),
            other_symbols: Vec::new(),
            template_content: "run %SSIM_ITERATION%\n".to_string(),
            source_files: Vec::new(),
        }
    }

    pub fn with_iterations(mut self, min: i32, max: i32) -> Self {
        self.run_control.minimum_iteration = Some(min);
        self.run_control.maximum_iteration = Some(max);
        self
    }

    pub fn with_timesteps(mut self, min: i32, max: i32) -> Self {
        self.run_control.minimum_timestep = Some(min);
        self.run_control.maximum_timestep = Some(max);
        self
    }

    pub fn with_template(mut self, content: &str) -> Self {
        self.template_content = content.to_string();
        self
    }

    /// Drop the template file name from the run control record.
    pub fn without_template_field(mut self) -> Self {
        self.run_control.template_file = None;
        self
    }

    /// Add an input-file binding row and write its source file to disk.
    pub fn with_input_file(
        mut self,
        iteration: Option<i32>,
        symbol: &str,
        filename: &str,
        content: &str,
    ) -> Self {
        self.input_files.push(InputFileRow {
            iteration,
            symbol: symbol.to_string(),
            filename: filename.to_string(),
        });
        self.source_files
            .push((filename.to_string(), content.to_string()));
        self
    }

    /// Add an input-file binding row without a source file on disk.
    pub fn with_dangling_input_file(
        mut self,
        iteration: Option<i32>,
        symbol: &str,
        filename: &str,
    ) -> Self {
        self.input_files.push(InputFileRow {
            iteration,
            symbol: symbol.to_string(),
            filename: filename.to_string(),
        });
        self
    }

    pub fn with_other_symbol(mut self, symbol: &str, value: &str) -> Self {
        self.other_symbols.push(OtherSymbolRow {
            symbol: symbol.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// Write the scenario YAML, template, and source files into temp
    /// directories and return the fixture.
    pub fn write(self) -> ScenarioFixture {
        let scenario_dir = TempDir::new().unwrap();
        let workspace_root = TempDir::new().unwrap();

        if let Some(template_name) = &self.run_control.template_file {
            fs::write(scenario_dir.path().join(template_name), &self.template_content).unwrap();
        }

        for (filename, content) in &self.source_files {
            fs::write(scenario_dir.path().join(filename), content).unwrap();
        }

        let scenario = Scenario {
            run_control: Some(self.run_control),
            input_files: self.input_files,
            other_symbols: self.other_symbols,
        };

        let scenario_path = scenario_dir.path().join("scenario.yaml");
        fs::write(&scenario_path, scenario.to_yaml().unwrap()).unwrap();

        ScenarioFixture {
            scenario_dir,
            workspace_root,
            scenario_path,
        }
    }
}

/// Quote a path the way rendered model files quote staged paths.
pub fn quoted(path: &std::path::Path) -> String {
    format!("\"{}\"", path.display().to_string().replace('\\', "\\\\"))
}
