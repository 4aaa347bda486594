// ABOUTME: Error types for template staging operations
// ABOUTME: Defines specific error types for rendering and input file staging

use std::path::PathBuf;
use thiserror::Error;

use crate::scenario::ScenarioError;

#[derive(Error, Debug)]
pub enum StagingError {
    #[error("Template file not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("Input file for symbol '{symbol}' not found: {}", .path.display())]
    MissingInputFile { symbol: String, path: PathBuf },

    #[error(
        "Failed to stage input file for symbol '{symbol}' ({} -> {}): {source}",
        .from.display(),
        .to.display()
    )]
    StageCopyFailed {
        symbol: String,
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("Scenario error: {0}")]
    ScenarioError(#[from] ScenarioError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StagingError>;
