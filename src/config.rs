//! Simulation settings, loadable from JSON.

use std::{fs, path::Path};

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Settings of one simulation run.
///
/// Every field is optional in the JSON form; missing fields take the
/// [`Default`] values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Number of random events to run
    pub steps: u32,
    /// Seed for reproducible runs; a fresh OS seed is drawn when unset
    pub seed: Option<u64>,
    /// Name given to the simulated library
    pub library_name: String,
    /// Reference year for book ages
    pub current_year: i32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps: 40,
            seed: None,
            library_name: "City Library".to_string(),
            current_year: chrono::Local::now().year(),
        }
    }
}

impl SimulationConfig {
    /// Parse a JSON document
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its content is invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        Self::from_json(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = SimulationConfig::from_json(r#"{ "seed": 42 }"#).ok();
        let defaults = SimulationConfig::default();
        assert_eq!(config.as_ref().map(|c| c.steps), Some(40));
        assert_eq!(config.as_ref().and_then(|c| c.seed), Some(42));
        assert_eq!(config.map(|c| c.library_name), Some(defaults.library_name));
    }

    #[test]
    fn test_full_document() {
        let json = r#"{ "steps": 5, "seed": 7, "library_name": "Branch", "current_year": 2030 }"#;
        assert_eq!(
            SimulationConfig::from_json(json).ok(),
            Some(SimulationConfig {
                steps: 5,
                seed: Some(7),
                library_name: "Branch".to_string(),
                current_year: 2030,
            })
        );
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        assert!(matches!(
            SimulationConfig::from_json(r#"{ "stpes": 5 }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = SimulationConfig::load(Path::new("/nonexistent/simulation.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
