//! Planner configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a [`PlannerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read planner configuration: {0}")]
    Read(#[from] std::io::Error),

    /// The configuration is not valid JSON for [`PlannerConfig`].
    #[error("failed to parse planner configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables for the scheduler.
///
/// # Examples
///
/// ```
/// use pawplan::schedule::PlannerConfig;
///
/// let config = PlannerConfig::default();
/// assert!(!config.skip_completed);
///
/// let parsed = PlannerConfig::from_json_str(r#"{ "skip_completed": true }"#)
///     .expect("valid configuration");
/// assert!(parsed.skip_completed);
/// assert!(!parsed.conflicts_in_plan_only);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Leave completed occurrences out of prioritization and planning.
    pub skip_completed: bool,
    /// Check conflicts among planned tasks only, instead of every known task.
    pub conflicts_in_plan_only: bool,
}

impl PlannerConfig {
    /// Creates a configuration that plans pending occurrences only and
    /// reports conflicts within the plan.
    ///
    /// Useful once completed occurrences accumulate in task history.
    #[must_use]
    pub const fn pending_only() -> Self {
        Self {
            skip_completed: true,
            conflicts_in_plan_only: true,
        }
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, or
    /// [`ConfigError::Parse`] when its content is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
