// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for simstage

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "simstage")]
#[command(about = "Stages per-iteration simulation model files from a symbol template")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Stage model files for every iteration of a scenario
    Run {
        #[arg(help = "Path to scenario YAML file")]
        scenario: PathBuf,

        #[arg(
            short,
            long,
            help = "Workspace root directory (defaults to configuration, then the system temp dir)"
        )]
        workspace: Option<PathBuf>,

        #[arg(short, long, help = "Stage a single iteration instead of the full range")]
        iteration: Option<i32>,
    },

    /// Validate a scenario file without staging anything
    Validate {
        #[arg(help = "Path to scenario YAML file")]
        scenario: PathBuf,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
