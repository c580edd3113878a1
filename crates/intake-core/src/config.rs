//! Engine configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

fn default_sweep_interval_secs() -> u64 {
    1800
}

fn default_history_file() -> String {
    ".intake_history".to_string()
}

/// Settings for the console driver.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ConsoleConfig {
    /// Where the readline history is kept.
    #[serde(default = "default_history_file")]
    pub history_file: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            history_file: default_history_file(),
        }
    }
}

/// Top-level configuration, loaded from a TOML file.
///
/// Every field has a default, so a missing or partial file is fine.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct IntakeConfig {
    /// Seconds between full session-store sweeps.
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
    #[serde(default)]
    pub console: ConsoleConfig,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            sweep_interval_secs: default_sweep_interval_secs(),
            console: ConsoleConfig::default(),
        }
    }
}

impl IntakeConfig {
    /// Loads the configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// The sweep interval as a [`Duration`].
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = IntakeConfig::default();
        assert_eq!(config.sweep_interval_secs, 1800);
        assert_eq!(config.sweep_interval(), Duration::from_secs(1800));
        assert_eq!(config.console.history_file, ".intake_history");
    }

    #[test]
    fn test_partial_file_is_filled_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sweep_interval_secs = 60").unwrap();

        let config = IntakeConfig::load(file.path()).unwrap();
        assert_eq!(config.sweep_interval_secs, 60);
        assert_eq!(config.console.history_file, ".intake_history");
    }

    #[test]
    fn test_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sweep_interval_secs = 900").unwrap();
        writeln!(file, "[console]").unwrap();
        writeln!(file, "history_file = \"/tmp/history\"").unwrap();

        let config = IntakeConfig::load(file.path()).unwrap();
        assert_eq!(config.sweep_interval_secs, 900);
        assert_eq!(config.console.history_file, "/tmp/history");
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = IntakeConfig::load("/nonexistent/intake.toml").unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_malformed_file_is_a_serialization_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sweep_interval_secs = \"soon\"").unwrap();

        let err = IntakeConfig::load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            crate::IntakeError::Serialization { .. }
        ));
    }
}
