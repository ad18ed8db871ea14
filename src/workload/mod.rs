//! Teacher workload validation.
//!
//! Aggregates a teacher's weekly hours for a term and classifies the load
//! against the configured [`WorkloadLimits`](crate::config::WorkloadLimits).
//! Overloads are reported through `status` / `is_valid`; callers decide
//! whether to block or merely warn.

mod status;
mod validator;

pub use status::{available_capacity, classify_workload, workload_message, WorkloadStatus};
pub use validator::{
    AssignmentValidation, BulkAssignment, BulkValidation, WorkloadResult, WorkloadValidator,
};
