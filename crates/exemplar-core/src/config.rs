//! Configuration loading for simulation runs.
//!
//! Run settings and model parameters are loaded from a TOML file. Every field
//! has a default, so a partial file only overrides what it names.

use exemplar_report::InitialPoolPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::params::SimulationParameters;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "exemplar.toml";

/// Default report output path
pub const DEFAULT_REPORT_PATH: &str = "output/exemplar_report.json";

/// Complete run configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Run settings
    #[serde(default)]
    pub simulation: RunConfig,
    /// Model parameters
    #[serde(default)]
    pub parameters: SimulationParameters,
}

/// Run settings that do not affect the dynamics themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Seed for the random stream
    pub seed: u64,
    /// Starting pools for the competitive experiment
    pub initial_pools: InitialPoolPolicy,
    /// Where the JSON report is written
    pub output: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            initial_pools: InitialPoolPolicy::Independent,
            output: PathBuf::from(DEFAULT_REPORT_PATH),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads from `path`, or uses defaults if it cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Self {
        Self::from_file(path).unwrap_or_else(|e| {
            tracing::warn!("Could not load {}: {}. Using defaults.", path.display(), e);
            Self::default()
        })
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Exemplar dynamics configuration

[simulation]
seed = 42
# "independent": fresh draws for the competitive experiment
# "shared": reuse the external experiment's starting pools
initial_pools = "independent"
output = "output/exemplar_report.json"

[parameters]
# Closure durations in milliseconds
singleton_mean = 75.0
geminate_mean = 100.0
std_dev = 15.0
pool_size = 100
sample_size = 3
iterations = 10000
noise_half_width = 25.0
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.simulation.seed, 42);
        assert_eq!(config.simulation.initial_pools, InitialPoolPolicy::Independent);
        assert_eq!(config.parameters.pool_size, 100);
        assert_eq!(config.parameters.iterations, 10_000);
    }

    #[test]
    fn test_parse_config_from_toml() {
        let toml = r#"
            [simulation]
            seed = 7
            initial_pools = "shared"

            [parameters]
            geminate_mean = 150.0
            iterations = 500
        "#;

        let config = Config::from_str(toml).unwrap();

        assert_eq!(config.simulation.seed, 7);
        assert_eq!(config.simulation.initial_pools, InitialPoolPolicy::Shared);
        assert_eq!(config.parameters.geminate_mean, 150.0);
        assert_eq!(config.parameters.iterations, 500);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
            [parameters]
            sample_size = 5
        "#;

        let config = Config::from_str(toml).unwrap();

        // Specified value
        assert_eq!(config.parameters.sample_size, 5);
        // Default values
        assert_eq!(config.parameters.singleton_mean, 75.0);
        assert_eq!(config.simulation.seed, 42);
        assert_eq!(config.simulation.output, PathBuf::from(DEFAULT_REPORT_PATH));
    }

    #[test]
    fn test_unknown_policy_fails() {
        let toml = r#"
            [simulation]
            initial_pools = "copied"
        "#;

        assert!(matches!(Config::from_str(toml), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_default_config_toml_parses() {
        let config = Config::from_str(&default_config_toml()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_to_toml() {
        let toml = Config::default().to_toml().unwrap();

        assert!(toml.contains("[simulation]"));
        assert!(toml.contains("[parameters]"));
        assert!(toml.contains("initial_pools = \"independent\""));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[simulation]\nseed = 99").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.simulation.seed, 99);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(matches!(Config::from_file(&path), Err(ConfigError::Io { .. })));
        assert_eq!(Config::load_or_default(&path), Config::default());
    }
}
