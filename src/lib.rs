// ABOUTME: Main library module for the simstage model staging engine
// ABOUTME: Exports all core modules and provides the public API

pub mod cli;
pub mod scenario;
pub mod staging;
pub mod workspace;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use scenario::{RunControlConfig, Scenario};
pub use staging::{InputFileMap, InputFileRecord, TemplateFileBuilder, TemplateRenderer};
pub use workspace::RunLocations;

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
