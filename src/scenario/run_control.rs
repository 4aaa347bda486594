// ABOUTME: Run control configuration and its validating loader
// ABOUTME: Converts the optional-field run control sheet into validated scalar parameters

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::error::{Result, ScenarioError};

/// The raw run control record as it appears in the scenario file. Every
/// field is optional at parse time; validation happens in
/// [`RunControlConfig::from_sheet`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunControlSheet {
    pub minimum_iteration: Option<i32>,
    pub maximum_iteration: Option<i32>,
    pub minimum_timestep: Option<i32>,
    pub maximum_timestep: Option<i32>,
    pub template_file: Option<String>,
    pub experiment: Option<String>,
}

/// Validated run control parameters. Constructed once per run and
/// immutable afterwards. Every field is mandatory; a missing field is a
/// configuration error, never a default.
#[derive(Debug, Clone)]
pub struct RunControlConfig {
    pub minimum_iteration: i32,
    pub maximum_iteration: i32,
    pub minimum_timestep: i32,
    pub maximum_timestep: i32,
    pub template_file_name: String,
    pub experiment_name: String,
}

impl RunControlConfig {
    /// Validate a run control sheet, failing with the name of the first
    /// missing field.
    pub fn from_sheet(sheet: &RunControlSheet) -> Result<Self> {
        Ok(Self {
            minimum_iteration: require(sheet.minimum_iteration, "minimum_iteration")?,
            maximum_iteration: require(sheet.maximum_iteration, "maximum_iteration")?,
            minimum_timestep: require(sheet.minimum_timestep, "minimum_timestep")?,
            maximum_timestep: require(sheet.maximum_timestep, "maximum_timestep")?,
            template_file_name: require(sheet.template_file.clone(), "template_file")?,
            experiment_name: require(sheet.experiment.clone(), "experiment")?,
        })
    }

    /// Number of simulated ticks covered by the timestep bounds.
    pub fn tick_count(&self) -> i32 {
        self.maximum_timestep - self.minimum_timestep + 1
    }

    /// The full iteration range for this run.
    pub fn iterations(&self) -> RangeInclusive<i32> {
        self.minimum_iteration..=self.maximum_iteration
    }
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(ScenarioError::MissingField(field))
}
