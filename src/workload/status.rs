//! Workload classification against the configured thresholds.

use serde::{Deserialize, Serialize};

use crate::config::WorkloadLimits;

/// Load band of a teacher's weekly hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkloadStatus {
    /// At or below the recommended hours.
    Ok,
    /// Above recommended, at or below the maximum.
    Warning,
    /// Above the maximum.
    Overload,
}

/// Classifies weekly hours. Lower bands are inclusive:
/// with 16/20, `16` is ok, `17` a warning, `21` an overload.
pub fn classify_workload(total_hours: i32, limits: &WorkloadLimits) -> WorkloadStatus {
    if total_hours > limits.max_weekly_hours {
        WorkloadStatus::Overload
    } else if total_hours > limits.recommended_hours {
        WorkloadStatus::Warning
    } else {
        WorkloadStatus::Ok
    }
}

/// Human-readable description of a load.
pub fn workload_message(total_hours: i32, status: WorkloadStatus, limits: &WorkloadLimits) -> String {
    match status {
        WorkloadStatus::Ok => format!(
            "workload normal: {}/{} hours per week",
            total_hours, limits.recommended_hours
        ),
        WorkloadStatus::Warning => format!(
            "workload above the recommended {} hours per week ({} hours)",
            limits.recommended_hours, total_hours
        ),
        WorkloadStatus::Overload => format!(
            "workload exceeds the maximum {} hours per week ({} hours)",
            limits.max_weekly_hours, total_hours
        ),
    }
}

/// Hours left before the hard limit, never negative.
pub fn available_capacity(current_hours: i32, limits: &WorkloadLimits) -> i32 {
    limits.max_weekly_hours.saturating_sub(current_hours).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        let limits = WorkloadLimits::default();
        assert_eq!(classify_workload(0, &limits), WorkloadStatus::Ok);
        assert_eq!(classify_workload(16, &limits), WorkloadStatus::Ok);
        assert_eq!(classify_workload(17, &limits), WorkloadStatus::Warning);
        assert_eq!(classify_workload(20, &limits), WorkloadStatus::Warning);
        assert_eq!(classify_workload(21, &limits), WorkloadStatus::Overload);
    }

    #[test]
    fn test_negative_hours_pass_through() {
        let limits = WorkloadLimits::default();
        assert_eq!(classify_workload(-4, &limits), WorkloadStatus::Ok);
    }

    #[test]
    fn test_custom_limits() {
        let limits = WorkloadLimits::new(18, 22).unwrap();
        assert_eq!(classify_workload(18, &limits), WorkloadStatus::Ok);
        assert_eq!(classify_workload(22, &limits), WorkloadStatus::Warning);
        assert_eq!(classify_workload(23, &limits), WorkloadStatus::Overload);
    }

    #[test]
    fn test_messages_embed_threshold() {
        let limits = WorkloadLimits::default();
        let ok = workload_message(12, WorkloadStatus::Ok, &limits);
        assert!(ok.contains("12/16"));
        let warn = workload_message(18, WorkloadStatus::Warning, &limits);
        assert!(warn.contains("16") && warn.contains("18"));
        let over = workload_message(22, WorkloadStatus::Overload, &limits);
        assert!(over.contains("20") && over.contains("22"));
    }

    #[test]
    fn test_available_capacity() {
        let limits = WorkloadLimits::default();
        assert_eq!(available_capacity(14, &limits), 6);
        assert_eq!(available_capacity(25, &limits), 0);
        assert_eq!(available_capacity(i32::MIN, &limits), i32::MAX);
    }

    #[test]
    fn test_status_wire_name() {
        assert_eq!(
            serde_json::to_string(&WorkloadStatus::Overload).unwrap(),
            "\"overload\""
        );
    }
}
