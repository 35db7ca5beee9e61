use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::headless::OutputFormat;

/// A counter with two buttons, in your terminal.
#[derive(Debug, Parser)]
#[command(name = "tally", version, about)]
pub struct Cli {
    /// Path to the config file (default: <config dir>/tally/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Override the heading shown above the count
    #[arg(long, value_name = "TEXT")]
    pub heading: Option<String>,

    /// Press controls without a UI and print the result, e.g. "+++-"
    #[arg(long, value_name = "SCRIPT", allow_hyphen_values = true)]
    pub press: Option<String>,

    /// Output format for --press
    #[arg(long, value_enum, requires = "press")]
    pub format: Option<OutputFormat>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Applies command line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(heading) = &self.heading {
            config.ui.heading = heading.clone();
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}
