// ABOUTME: Filesystem locations for a single staging run
// ABOUTME: Resolves the input, template, and per-run workspace directories

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Filesystem locations consulted while staging one run: where source
/// input files live, where the template file lives, and the per-run
/// workspace that receives rendered model files and staged inputs.
#[derive(Debug, Clone)]
pub struct RunLocations {
    input_dir: PathBuf,
    template_dir: PathBuf,
    workspace_dir: PathBuf,
}

impl RunLocations {
    pub fn new(input_dir: PathBuf, template_dir: PathBuf, workspace_dir: PathBuf) -> Self {
        Self {
            input_dir,
            template_dir,
            workspace_dir,
        }
    }

    /// Locations for a scenario whose input and template files sit next
    /// to the scenario file, with a run-scoped workspace under the
    /// given root.
    pub fn for_scenario(scenario_dir: &Path, workspace_root: &Path, run_id: &str) -> Self {
        Self {
            input_dir: scenario_dir.to_path_buf(),
            template_dir: scenario_dir.to_path_buf(),
            workspace_dir: workspace_root.join(format!("run-{}", run_id)),
        }
    }

    /// Create the workspace directory if it does not exist yet.
    pub fn ensure_workspace(&self) -> io::Result<()> {
        fs::create_dir_all(&self.workspace_dir)
    }

    pub fn workspace_dir(&self) -> &Path {
        &self.workspace_dir
    }

    /// Absolute location of a source input file.
    pub fn input_file(&self, name: &str) -> PathBuf {
        self.input_dir.join(name)
    }

    /// Absolute location of the source template file.
    pub fn template_source(&self, name: &str) -> PathBuf {
        self.template_dir.join(name)
    }

    /// Location a file occupies once staged into the workspace.
    pub fn staged_file(&self, name: &str) -> PathBuf {
        self.workspace_dir.join(name)
    }
}
