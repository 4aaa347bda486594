// ABOUTME: Scenario store parsed from a YAML configuration file
// ABOUTME: Holds the run control sheet and the ordered symbol tables for a run

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::Result;
use super::run_control::{RunControlConfig, RunControlSheet};
use super::tables::{InputFileRow, OtherSymbolRow, OtherSymbolSource};
use super::ScenarioError;

/// A parsed scenario configuration. Row order in the two tables is
/// preserved exactly as written in the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_control: Option<RunControlSheet>,

    #[serde(default)]
    pub input_files: Vec<InputFileRow>,

    #[serde(default)]
    pub other_symbols: Vec<OtherSymbolRow>,
}

impl Scenario {
    /// Parse a scenario from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ScenarioError::IoError)?;
        Self::from_yaml(&content)
    }

    /// Parse a scenario from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(ScenarioError::YamlError)
    }

    /// Validate the run control record into immutable run parameters.
    /// Fails when the record is absent or any field is unset.
    pub fn run_control_config(&self) -> Result<RunControlConfig> {
        match &self.run_control {
            Some(sheet) => RunControlConfig::from_sheet(sheet),
            None => Err(ScenarioError::MissingRunControl),
        }
    }

    /// Serialize the scenario back to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(ScenarioError::YamlError)
    }
}

impl OtherSymbolSource for Scenario {
    fn other_symbols(&self) -> Result<Vec<OtherSymbolRow>> {
        Ok(self.other_symbols.clone())
    }
}
