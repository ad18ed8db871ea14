//! Constraint engine for school timetables.
//!
//! Detects double-bookings in a term's schedule, keeps teacher workloads
//! within configured limits, and expands lock templates (lunch, assembly,
//! exams) into concrete locked periods. All three share one break-time
//! rule: junior and senior cohorts may break at different periods.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Grade`, `Timeslot`, `ScheduledPeriod`,
//!   `TeacherResponsibility`, `LockTemplate`, plus reference rows
//! - **`breaktime`**: Cohort/break compatibility rule
//! - **`conflict`**: Term-wide conflict report and single-placement check
//! - **`workload`**: Weekly hour totals and assignment validation
//! - **`lock`**: Lock template resolution with warning/error diagnostics
//! - **`store`**: Read-only data access seam (`ScheduleStore`)
//! - **`validation`**: Reference data integrity checks
//! - **`config`** / **`error`**: Engine configuration and error type
//!
//! # Architecture
//!
//! Every engine function is a pure computation over already-fetched rows.
//! Persistence stays behind [`store::ScheduleStore`]; the engine never
//! writes, and it never reassigns or repairs a schedule.

pub mod breaktime;
pub mod config;
pub mod conflict;
pub mod error;
pub mod lock;
pub mod models;
pub mod store;
pub mod validation;
pub mod workload;

pub use error::{EngineError, Result};
