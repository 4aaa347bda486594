// ABOUTME: Command implementations for the simstage CLI
// ABOUTME: Handles execution of the run and validate commands

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

use super::config::Config;
use crate::scenario::{OtherSymbolSource, Scenario};
use crate::staging::{InputFileMap, TemplateFileBuilder};
use crate::workspace::RunLocations;

/// Summary artifact written into the workspace after a run.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub run_id: String,
    pub experiment: String,
    pub scenario_file: PathBuf,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub iterations: Vec<IterationOutput>,
}

#[derive(Debug, Serialize)]
pub struct IterationOutput {
    pub iteration: i32,
    pub model_file: PathBuf,
}

/// Stage model files for a scenario across its iteration range
pub fn run_scenario(
    scenario_path: PathBuf,
    workspace: Option<PathBuf>,
    iteration: Option<i32>,
    config: &Config,
) -> Result<()> {
    info!("Staging scenario: {}", scenario_path.display());
    let started_at = Utc::now();

    let scenario = Scenario::from_file(&scenario_path)
        .with_context(|| format!("Failed to load scenario '{}'", scenario_path.display()))?;
    let run_control = scenario
        .run_control_config()
        .context("Invalid run control configuration")?;
    let input_map = InputFileMap::from_rows(&scenario.input_files);

    info!(
        "Loaded scenario for experiment '{}' ({} input file bindings)",
        run_control.experiment_name,
        input_map.len()
    );

    let workspace_root = workspace
        .or_else(|| config.workspace_root.clone())
        .unwrap_or_else(|| std::env::temp_dir().join("simstage"));
    let run_id = Uuid::new_v4().to_string();
    let locations =
        RunLocations::for_scenario(&scenario_dir(&scenario_path), &workspace_root, &run_id);

    let builder = TemplateFileBuilder::new(&run_control, &input_map, &scenario, &locations);

    let iterations: Vec<i32> = match iteration {
        Some(single) => vec![single],
        None => run_control.iterations().collect(),
    };

    let mut outputs = Vec::with_capacity(iterations.len());
    for i in iterations {
        let model_file = builder
            .build(i)
            .with_context(|| format!("Failed to stage iteration {}", i))?;
        info!("Iteration {} staged: {}", i, model_file.display());
        outputs.push(IterationOutput {
            iteration: i,
            model_file,
        });
    }

    let summary = RunSummary {
        run_id,
        experiment: run_control.experiment_name.clone(),
        scenario_file: scenario_path,
        started_at,
        finished_at: Utc::now(),
        iterations: outputs,
    };
    write_run_summary(&locations, &summary)?;

    println!(
        "Staged {} iteration(s) into {}",
        summary.iterations.len(),
        locations.workspace_dir().display()
    );

    Ok(())
}

/// Validate a scenario file without staging anything
pub fn validate_scenario(scenario_path: PathBuf, _config: &Config) -> Result<()> {
    info!("Validating scenario: {}", scenario_path.display());

    let scenario = Scenario::from_file(&scenario_path)
        .with_context(|| format!("Failed to load scenario '{}'", scenario_path.display()))?;
    let run_control = scenario
        .run_control_config()
        .context("Invalid run control configuration")?;

    let scenario_dir = scenario_dir(&scenario_path);
    let mut problems = Vec::new();

    let template = scenario_dir.join(&run_control.template_file_name);
    if !template.is_file() {
        problems.push(format!("template file not found: {}", template.display()));
    }

    for row in &scenario.input_files {
        let source = scenario_dir.join(&row.filename);
        if !source.is_file() {
            problems.push(format!(
                "input file for symbol '{}' not found: {}",
                row.symbol,
                source.display()
            ));
        }
    }

    if !problems.is_empty() {
        for problem in &problems {
            println!("✗ {}", problem);
        }
        return Err(anyhow::anyhow!(
            "Scenario validation failed with {} problem(s)",
            problems.len()
        ));
    }

    println!("✓ Scenario '{}' is valid", run_control.experiment_name);
    println!(
        "  Iterations: {}..={}",
        run_control.minimum_iteration, run_control.maximum_iteration
    );
    println!("  Input file bindings: {}", scenario.input_files.len());
    println!("  Other symbols: {}", scenario.other_symbols()?.len());

    info!("Scenario validation completed successfully");

    Ok(())
}

fn write_run_summary(locations: &RunLocations, summary: &RunSummary) -> Result<()> {
    let summary_path = locations.workspace_dir().join("run-summary.json");
    let json =
        serde_json::to_string_pretty(summary).context("Failed to serialize run summary")?;

    std::fs::write(&summary_path, json)
        .with_context(|| format!("Failed to write run summary '{}'", summary_path.display()))?;

    info!("Run summary written to: {}", summary_path.display());
    Ok(())
}

/// Directory containing the scenario file; input and template files are
/// resolved relative to it.
fn scenario_dir(scenario_path: &Path) -> PathBuf {
    match scenario_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_scenario(dir: &Path) -> PathBuf {
        let scenario_yaml = r#"
run_control:
  minimum_iteration: 1
  maximum_iteration: 2
  minimum_timestep: 1
  maximum_timestep: 10
  template_file: model.nlogo
  experiment: cli-test

input_files:
  - symbol: HABITAT
    filename: habitat.asc
"#;
        let path = dir.join("scenario.yaml");
        fs::write(&path, scenario_yaml).unwrap();
        fs::write(dir.join("model.nlogo"), "run %SSIM_ITERATION%\n").unwrap();
        fs::write(dir.join("habitat.asc"), "raster data").unwrap();
        path
    }

    #[test]
    fn test_run_scenario_stages_all_iterations() {
        let scenario_dir = TempDir::new().unwrap();
        let workspace_root = TempDir::new().unwrap();
        let scenario_path = write_scenario(scenario_dir.path());

        run_scenario(
            scenario_path,
            Some(workspace_root.path().to_path_buf()),
            None,
            &Config::default(),
        )
        .unwrap();

        let runs: Vec<_> = fs::read_dir(workspace_root.path())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(runs.len(), 1);

        let workspace = &runs[0];
        assert_eq!(
            fs::read_to_string(workspace.join("model.nlogo")).unwrap(),
            "run 2\n"
        );
        assert!(workspace.join("run-summary.json").exists());
    }

    #[test]
    fn test_run_scenario_single_iteration_override() {
        let scenario_dir = TempDir::new().unwrap();
        let workspace_root = TempDir::new().unwrap();
        let scenario_path = write_scenario(scenario_dir.path());

        run_scenario(
            scenario_path,
            Some(workspace_root.path().to_path_buf()),
            Some(1),
            &Config::default(),
        )
        .unwrap();

        let runs: Vec<_> = fs::read_dir(workspace_root.path())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(
            fs::read_to_string(runs[0].join("model.nlogo")).unwrap(),
            "run 1\n"
        );
    }

    #[test]
    fn test_validate_scenario_reports_missing_files() {
        let scenario_dir = TempDir::new().unwrap();
        let scenario_path = write_scenario(scenario_dir.path());
        fs::remove_file(scenario_dir.path().join("habitat.asc")).unwrap();

        let result = validate_scenario(scenario_path, &Config::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_scenario_accepts_complete_setup() {
        let scenario_dir = TempDir::new().unwrap();
        let scenario_path = write_scenario(scenario_dir.path());

        validate_scenario(scenario_path, &Config::default()).unwrap();
    }
}
