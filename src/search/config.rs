//! Solver configuration, read from TOML files such as
//!
//! ```toml
//! heuristic = "manhattan"
//! check-solvability = true
//! time-limit = "30s"
//! memory-limit-mb = 2048
//! max-expansions = 1000000
//! ```

use crate::search::{search_engines::SearchLimits, HeuristicName};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read solver config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse solver config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SolverConfig {
    #[serde(default)]
    pub heuristic: HeuristicName,
    /// Whether to reject unsolvable instances with the parity check before
    /// searching.
    #[serde(default = "default_check_solvability")]
    pub check_solvability: bool,
    /// Wall-clock budget of a search, in humantime format (e.g. `"1m 30s"`).
    #[serde(default, with = "humantime_option", skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<Duration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_limit_mb: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_expansions: Option<usize>,
}

fn default_check_solvability() -> bool {
    true
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            heuristic: HeuristicName::default(),
            check_solvability: default_check_solvability(),
            time_limit: None,
            memory_limit_mb: None,
            max_expansions: None,
        }
    }
}

impl SolverConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn with_heuristic(mut self, heuristic: HeuristicName) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            time_limit: self.time_limit,
            memory_limit_mb: self.memory_limit_mb,
            max_expansions: self.max_expansions,
        }
    }
}

mod humantime_option {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(
        value: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(duration) => {
                serializer.serialize_str(&humantime::format_duration(*duration).to_string())
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        let text = String::deserialize(deserializer)?;
        humantime::parse_duration(&text)
            .map(Some)
            .map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_config_uses_defaults() {
        let config = SolverConfig::from_toml("").unwrap();
        assert_eq!(config, SolverConfig::default());
        assert!(config.check_solvability);
        assert_eq!(config.heuristic, HeuristicName::Manhattan);
        assert_eq!(config.limits(), SearchLimits::default());
    }

    #[test]
    fn full_config() {
        let config = SolverConfig::from_toml(
            r#"
            heuristic = "misplaced-tiles"
            check-solvability = false
            time-limit = "1m 30s"
            memory-limit-mb = 512
            max-expansions = 1000
            "#,
        )
        .unwrap();
        assert_eq!(config.heuristic, HeuristicName::MisplacedTiles);
        assert!(!config.check_solvability);
        assert_eq!(
            config.limits(),
            SearchLimits {
                time_limit: Some(Duration::from_secs(90)),
                memory_limit_mb: Some(512),
                max_expansions: Some(1000),
            }
        );
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            SolverConfig::from_toml("heuristic = \"linear-conflict\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SolverConfig::from_toml("time-limit = \"soon\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SolverConfig::from_toml("unknown-key = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn round_trips_through_a_file() {
        let config = SolverConfig {
            heuristic: HeuristicName::Euclidean,
            check_solvability: true,
            time_limit: Some(Duration::from_secs(5)),
            memory_limit_mb: None,
            max_expansions: Some(10),
        };
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", toml::to_string(&config).unwrap()).unwrap();
        assert_eq!(SolverConfig::from_path(file.path()).unwrap(), config);
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            SolverConfig::from_path(Path::new("/nonexistent/solver.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
