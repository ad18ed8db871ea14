//! Engine configuration.
//!
//! Workload thresholds are the only tunable business rule. Defaults follow
//! the Ministry of Education guideline of 16 recommended and 20 maximum
//! teaching hours per week.
//!
//! ```
//! use u_timetable::config::EngineConfig;
//!
//! let config = EngineConfig::from_json_str(r#"{"workload":{"recommended_hours":18}}"#).unwrap();
//! assert_eq!(config.workload.recommended_hours, 18);
//! assert_eq!(config.workload.max_weekly_hours, 20);
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{EngineError, Result};

/// Default recommended weekly hours.
pub const DEFAULT_RECOMMENDED_HOURS: i32 = 16;
/// Default maximum weekly hours.
pub const DEFAULT_MAX_WEEKLY_HOURS: i32 = 20;

/// Teacher workload thresholds (weekly hours).
///
/// `total <= recommended` is ok, `total <= max` is a warning, anything
/// above `max` is an overload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadLimits {
    /// Soft limit; above it the load is flagged.
    pub recommended_hours: i32,
    /// Hard limit; above it the load is rejected.
    pub max_weekly_hours: i32,
}

impl Default for WorkloadLimits {
    fn default() -> Self {
        Self {
            recommended_hours: DEFAULT_RECOMMENDED_HOURS,
            max_weekly_hours: DEFAULT_MAX_WEEKLY_HOURS,
        }
    }
}

impl WorkloadLimits {
    /// Creates validated limits.
    pub fn new(recommended_hours: i32, max_weekly_hours: i32) -> Result<Self> {
        let limits = Self {
            recommended_hours,
            max_weekly_hours,
        };
        limits.validate()?;
        Ok(limits)
    }

    /// Checks that the soft limit does not exceed the hard limit.
    pub fn validate(&self) -> Result<()> {
        if self.recommended_hours > self.max_weekly_hours {
            return Err(EngineError::InvalidLimits {
                recommended: self.recommended_hours,
                maximum: self.max_weekly_hours,
            });
        }
        Ok(())
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Workload thresholds.
    pub workload: WorkloadLimits,
}

impl EngineConfig {
    /// Parses and validates configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.workload.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| EngineError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(
            path = %path.display(),
            recommended = config.workload.recommended_hours,
            maximum = config.workload.max_weekly_hours,
            "loaded engine configuration"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = WorkloadLimits::default();
        assert_eq!(limits.recommended_hours, 16);
        assert_eq!(limits.max_weekly_hours, 20);
        assert!(limits.validate().is_ok());
    }

    #[test]
    fn test_invalid_limits_rejected() {
        let err = WorkloadLimits::new(22, 20).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidLimits {
                recommended: 22,
                maximum: 20
            }
        ));
    }

    #[test]
    fn test_partial_json() {
        let config = EngineConfig::from_json_str(r#"{"workload":{"max_weekly_hours":22}}"#).unwrap();
        assert_eq!(config.workload.recommended_hours, 16);
        assert_eq!(config.workload.max_weekly_hours, 22);

        let empty = EngineConfig::from_json_str("{}").unwrap();
        assert_eq!(empty, EngineConfig::default());
    }

    #[test]
    fn test_bad_json() {
        let err = EngineConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, EngineError::ConfigParse(_)));

        let err = EngineConfig::from_json_str(r#"{"workload":{"recommended_hours":30}}"#)
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidLimits { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::from_file("/nonexistent/u-timetable.json").unwrap_err();
        assert!(matches!(err, EngineError::ConfigIo { .. }));
        assert!(err.to_string().contains("u-timetable.json"));
    }
}
