// ABOUTME: Error types for scenario configuration loading
// ABOUTME: Defines specific error types for scenario parsing and run control validation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Failed to read scenario file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse scenario YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("The run control record is missing")]
    MissingRunControl,

    #[error("The run control data is missing for: {0}")]
    MissingField(&'static str),
}

pub type Result<T> = std::result::Result<T, ScenarioError>;
