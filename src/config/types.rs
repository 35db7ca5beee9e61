use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ui::counter::DEFAULT_HEADING;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Interactive UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Static heading shown above the count (default: "Hello World!").
    #[serde(default = "default_heading")]
    pub heading: String,
    /// Event poll and tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Capture mouse events so the controls can be clicked (default: true).
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for interactive mode. Defaults to `<cache_dir>/tally/tally.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_heading() -> String {
    DEFAULT_HEADING.to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_mouse() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            heading: default_heading(),
            tick_rate_ms: default_tick_rate_ms(),
            mouse: default_mouse(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Log file path, falling back to the platform cache directory.
    pub fn file_path(&self) -> PathBuf {
        match &self.file {
            Some(path) => path.clone(),
            None => {
                let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
                cache_dir.join("tally").join("tally.log")
            }
        }
    }
}
