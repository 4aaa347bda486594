// ABOUTME: Scenario configuration module for run control and symbol tables
// ABOUTME: Exports the scenario store, run control types, and table row types

pub mod error;
pub mod run_control;
pub mod store;
pub mod tables;

pub use error::{Result, ScenarioError};
pub use run_control::{RunControlConfig, RunControlSheet};
pub use store::Scenario;
pub use tables::{InputFileRow, OtherSymbolRow, OtherSymbolSource};
