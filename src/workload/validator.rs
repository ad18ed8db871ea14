//! Teacher workload validation.
//!
//! Sums a teacher's `teach_hour` over the term's responsibility rows and
//! classifies the total. Input magnitudes are not checked: the arithmetic
//! propagates whatever the store supplies. Sums are taken in `i64` and
//! clamped to the `i32` range, so huge rows saturate instead of wrapping.
//!
//! # Updating an existing pair
//! When a teacher already teaches the proposed (subject, grade) pair, the
//! existing hours for that pair are removed before the proposal is added:
//! `new = current - old_for_pair + proposed`.
//!
//! # Batches
//! Each batch entry is judged against the teacher's pre-batch load. Two
//! entries for the same teacher do not compound; composing them is the
//! caller's concern.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::status::{available_capacity, classify_workload, workload_message, WorkloadStatus};
use crate::config::WorkloadLimits;
use crate::error::Result;
use crate::models::{Semester, TeacherId, TeacherResponsibility};
use crate::store::ScheduleStore;

fn clamp_hours(hours: i64) -> i32 {
    hours.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

fn sum_hours<'a>(rows: impl IntoIterator<Item = &'a TeacherResponsibility>) -> i64 {
    rows.into_iter().map(|r| i64::from(r.teach_hour)).sum()
}

/// A teacher's load for one term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadResult {
    pub teacher_id: TeacherId,
    pub total_hours: i32,
    pub status: WorkloadStatus,
    pub message: String,
    /// Number of responsibility rows summed.
    pub assignment_count: usize,
    /// Hours left before the maximum.
    pub available_hours: i32,
}

impl WorkloadResult {
    /// Computes the load from already-fetched responsibility rows.
    pub fn from_responsibilities(
        teacher_id: TeacherId,
        responsibilities: &[TeacherResponsibility],
        limits: &WorkloadLimits,
    ) -> Self {
        let total_hours = clamp_hours(sum_hours(responsibilities));
        let status = classify_workload(total_hours, limits);
        Self {
            teacher_id,
            total_hours,
            status,
            message: workload_message(total_hours, status, limits),
            assignment_count: responsibilities.len(),
            available_hours: available_capacity(total_hours, limits),
        }
    }
}

/// Effect of one proposed assignment on a teacher's load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentValidation {
    /// False only for an overload.
    pub is_valid: bool,
    pub current_hours: i32,
    pub new_total_hours: i32,
    pub status: WorkloadStatus,
    pub message: String,
}

impl AssignmentValidation {
    /// Evaluates a proposal against already-fetched responsibility rows.
    pub fn assess(
        responsibilities: &[TeacherResponsibility],
        subject_code: &str,
        grade_id: &str,
        proposed_hours: i32,
        limits: &WorkloadLimits,
    ) -> Self {
        let current = sum_hours(responsibilities);
        let existing_for_pair =
            sum_hours(responsibilities.iter().filter(|r| r.covers(subject_code, grade_id)));
        let current_hours = clamp_hours(current);
        let new_total_hours =
            clamp_hours(current - existing_for_pair + i64::from(proposed_hours));
        let status = classify_workload(new_total_hours, limits);

        Self {
            is_valid: status != WorkloadStatus::Overload,
            current_hours,
            new_total_hours,
            status,
            message: workload_message(new_total_hours, status, limits),
        }
    }
}

/// One entry of a bulk assignment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkAssignment {
    pub teacher_id: TeacherId,
    pub subject_code: String,
    pub hours: i32,
}

impl BulkAssignment {
    /// Creates an entry.
    pub fn new(teacher_id: TeacherId, subject_code: impl Into<String>, hours: i32) -> Self {
        Self {
            teacher_id,
            subject_code: subject_code.into(),
            hours,
        }
    }
}

/// Outcome of a bulk assignment check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkValidation {
    /// True when no entry overloads its teacher.
    pub is_valid: bool,
    /// Accepted entries (ok or warning), in input order.
    pub valid_assignments: Vec<BulkAssignment>,
    /// One message per rejected entry, in input order.
    pub errors: Vec<String>,
    /// One message per accepted-with-warning entry, in input order.
    pub warnings: Vec<String>,
}

/// Store-backed workload validator.
#[derive(Debug, Clone)]
pub struct WorkloadValidator<S> {
    store: S,
    limits: WorkloadLimits,
}

impl<S: ScheduleStore> WorkloadValidator<S> {
    /// Creates a validator with the default 16/20 thresholds.
    pub fn new(store: S) -> Self {
        Self {
            store,
            limits: WorkloadLimits::default(),
        }
    }

    /// Overrides the thresholds.
    pub fn with_limits(mut self, limits: WorkloadLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Active thresholds.
    pub fn limits(&self) -> &WorkloadLimits {
        &self.limits
    }

    /// Total weekly hours and load band of a teacher in a term.
    #[instrument(skip(self))]
    pub fn calculate_teacher_workload(
        &self,
        teacher_id: TeacherId,
        semester: Semester,
        academic_year: u16,
    ) -> Result<WorkloadResult> {
        let rows = self
            .store
            .teacher_responsibilities(teacher_id, semester, academic_year)?;
        let result = WorkloadResult::from_responsibilities(teacher_id, &rows, &self.limits);
        debug!(
            total_hours = result.total_hours,
            status = ?result.status,
            rows = rows.len(),
            "teacher workload calculated"
        );
        Ok(result)
    }

    /// Effect of giving a teacher `proposed_hours` for a (subject, grade) pair.
    #[instrument(skip(self))]
    pub fn validate_assignment(
        &self,
        teacher_id: TeacherId,
        subject_code: &str,
        grade_id: &str,
        semester: Semester,
        academic_year: u16,
        proposed_hours: i32,
    ) -> Result<AssignmentValidation> {
        let rows = self
            .store
            .teacher_responsibilities(teacher_id, semester, academic_year)?;
        let validation =
            AssignmentValidation::assess(&rows, subject_code, grade_id, proposed_hours, &self.limits);
        if !validation.is_valid {
            warn!(
                new_total_hours = validation.new_total_hours,
                max = self.limits.max_weekly_hours,
                "assignment would overload teacher"
            );
        }
        Ok(validation)
    }

    /// Validates each entry independently against its teacher's pre-batch load.
    #[instrument(skip(self, assignments), fields(entries = assignments.len()))]
    pub fn validate_bulk_assignments(
        &self,
        assignments: &[BulkAssignment],
        grade_id: &str,
        semester: Semester,
        academic_year: u16,
    ) -> Result<BulkValidation> {
        let mut outcome = BulkValidation::default();

        for entry in assignments {
            let validation = self.validate_assignment(
                entry.teacher_id,
                &entry.subject_code,
                grade_id,
                semester,
                academic_year,
                entry.hours,
            )?;

            match validation.status {
                WorkloadStatus::Overload => outcome.errors.push(format!(
                    "{}: teacher {} would teach {} hours per week, above the maximum of {}",
                    entry.subject_code,
                    entry.teacher_id,
                    validation.new_total_hours,
                    self.limits.max_weekly_hours
                )),
                WorkloadStatus::Warning => {
                    outcome.warnings.push(format!(
                        "{}: teacher {} would teach {} hours per week, above the recommended {}",
                        entry.subject_code,
                        entry.teacher_id,
                        validation.new_total_hours,
                        self.limits.recommended_hours
                    ));
                    outcome.valid_assignments.push(entry.clone());
                }
                WorkloadStatus::Ok => outcome.valid_assignments.push(entry.clone()),
            }
        }

        outcome.is_valid = outcome.errors.is_empty();
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::store::InMemoryStore;

    const YEAR: u16 = 2567;
    const SEM: Semester = Semester::First;

    fn resp(id: i64, teacher: TeacherId, subject: &str, grade: &str, hours: i32) -> TeacherResponsibility {
        TeacherResponsibility::new(id, teacher, subject, grade, hours).in_term(YEAR, SEM)
    }

    fn store() -> InMemoryStore {
        InMemoryStore::new().with_responsibilities(vec![
            // Teacher 1: 14 hours.
            resp(1, 1, "MATH101", "101", 6),
            resp(2, 1, "MATH101", "102", 4),
            resp(3, 1, "MATH201", "201", 4),
            // Teacher 2: 22 hours.
            resp(4, 2, "SCI101", "101", 10),
            resp(5, 2, "SCI101", "102", 12),
            // Other term, ignored.
            TeacherResponsibility::new(6, 1, "ART", "101", 8).in_term(YEAR, Semester::Second),
        ])
    }

    struct BrokenStore;

    impl ScheduleStore for BrokenStore {
        fn schedule_periods(
            &self,
            _: u16,
            _: Semester,
        ) -> Result<Vec<crate::models::ScheduledPeriod>> {
            Err(EngineError::StoreUnavailable("offline".into()))
        }

        fn teacher_responsibilities(
            &self,
            _: TeacherId,
            _: Semester,
            _: u16,
        ) -> Result<Vec<TeacherResponsibility>> {
            Err(EngineError::StoreUnavailable("offline".into()))
        }
    }

    #[test]
    fn test_workload_sum() {
        let v = WorkloadValidator::new(store());
        let w = v.calculate_teacher_workload(1, SEM, YEAR).unwrap();
        assert_eq!(w.total_hours, 14);
        assert_eq!(w.status, WorkloadStatus::Ok);
        assert_eq!(w.assignment_count, 3);
        assert_eq!(w.available_hours, 6);
    }

    #[test]
    fn test_workload_overload() {
        let v = WorkloadValidator::new(store());
        let w = v.calculate_teacher_workload(2, SEM, YEAR).unwrap();
        assert_eq!(w.total_hours, 22);
        assert_eq!(w.status, WorkloadStatus::Overload);
        assert!(w.message.contains("22"));
    }

    #[test]
    fn test_workload_unknown_teacher() {
        let v = WorkloadValidator::new(store());
        let w = v.calculate_teacher_workload(99, SEM, YEAR).unwrap();
        assert_eq!(w.total_hours, 0);
        assert_eq!(w.status, WorkloadStatus::Ok);
    }

    #[test]
    fn test_workload_monotonic() {
        let limits = WorkloadLimits::default();
        let mut rows = Vec::new();
        let mut last = 0;
        for i in 0..6 {
            rows.push(resp(i, 1, "S", &format!("G{i}"), 3));
            let w = WorkloadResult::from_responsibilities(1, &rows, &limits);
            assert!(w.total_hours >= last);
            last = w.total_hours;
        }
        assert_eq!(last, 18);
    }

    #[test]
    fn test_validate_new_pair_adds() {
        let v = WorkloadValidator::new(store());
        let a = v.validate_assignment(1, "MATH301", "301", SEM, YEAR, 2).unwrap();
        assert_eq!(a.current_hours, 14);
        assert_eq!(a.new_total_hours, 16);
        assert_eq!(a.status, WorkloadStatus::Ok);
        assert!(a.is_valid);
    }

    #[test]
    fn test_validate_existing_pair_replaces() {
        let v = WorkloadValidator::new(store());
        // MATH101/101 already holds 6 hours: 14 - 6 + 8 = 16, not 22.
        let a = v.validate_assignment(1, "MATH101", "101", SEM, YEAR, 8).unwrap();
        assert_eq!(a.current_hours, 14);
        assert_eq!(a.new_total_hours, 16);
        assert_eq!(a.status, WorkloadStatus::Ok);
    }

    #[test]
    fn test_validate_warning_and_overload() {
        let v = WorkloadValidator::new(store());
        let warn = v.validate_assignment(1, "MATH301", "301", SEM, YEAR, 5).unwrap();
        assert_eq!(warn.new_total_hours, 19);
        assert_eq!(warn.status, WorkloadStatus::Warning);
        assert!(warn.is_valid);

        let over = v.validate_assignment(1, "MATH301", "301", SEM, YEAR, 7).unwrap();
        assert_eq!(over.new_total_hours, 21);
        assert_eq!(over.status, WorkloadStatus::Overload);
        assert!(!over.is_valid);
    }

    #[test]
    fn test_bulk_uses_pre_batch_state() {
        let v = WorkloadValidator::new(store());
        // Each +2 is judged against 14 alone, so neither reaches 18.
        let batch = vec![
            BulkAssignment::new(1, "MATH301", 2),
            BulkAssignment::new(1, "MATH302", 2),
        ];
        let out = v.validate_bulk_assignments(&batch, "301", SEM, YEAR).unwrap();
        assert!(out.is_valid);
        assert_eq!(out.valid_assignments.len(), 2);
        assert!(out.warnings.is_empty());
        assert!(out.errors.is_empty());
    }

    #[test]
    fn test_bulk_mixed_outcomes() {
        let v = WorkloadValidator::new(store());
        let batch = vec![
            BulkAssignment::new(2, "SCI301", 1),
            BulkAssignment::new(1, "MATH301", 4),
            BulkAssignment::new(1, "MATH302", 1),
        ];
        let out = v.validate_bulk_assignments(&batch, "301", SEM, YEAR).unwrap();

        assert!(!out.is_valid);
        assert_eq!(out.errors.len(), 1);
        assert!(out.errors[0].contains("SCI301"));
        assert_eq!(out.warnings.len(), 1);
        assert!(out.warnings[0].contains("MATH301"));
        let accepted: Vec<&str> = out
            .valid_assignments
            .iter()
            .map(|a| a.subject_code.as_str())
            .collect();
        assert_eq!(accepted, vec!["MATH301", "MATH302"]);
    }

    #[test]
    fn test_huge_rows_saturate() {
        let limits = WorkloadLimits::default();
        let rows = vec![resp(1, 1, "A", "101", i32::MAX), resp(2, 1, "B", "101", 1)];

        let w = WorkloadResult::from_responsibilities(1, &rows, &limits);
        assert_eq!(w.total_hours, i32::MAX);
        assert_eq!(w.status, WorkloadStatus::Overload);
        assert_eq!(w.available_hours, 0);

        let a = AssignmentValidation::assess(&rows, "C", "101", i32::MAX, &limits);
        assert_eq!(a.new_total_hours, i32::MAX);
        assert_eq!(a.status, WorkloadStatus::Overload);
        assert!(!a.is_valid);
    }

    #[test]
    fn test_negative_rows_pass_through() {
        let limits = WorkloadLimits::default();
        let rows = vec![resp(1, 1, "A", "101", i32::MIN), resp(2, 1, "B", "101", -5)];

        let w = WorkloadResult::from_responsibilities(1, &rows, &limits);
        assert_eq!(w.total_hours, i32::MIN);
        assert_eq!(w.status, WorkloadStatus::Ok);
        assert_eq!(w.available_hours, i32::MAX);

        // Replacing the pair's existing hours cannot underflow either.
        let a = AssignmentValidation::assess(&rows, "A", "101", 3, &limits);
        assert_eq!(a.new_total_hours, -2);
    }

    #[test]
    fn test_custom_limits() {
        let v = WorkloadValidator::new(store()).with_limits(WorkloadLimits::new(10, 12).unwrap());
        let w = v.calculate_teacher_workload(1, SEM, YEAR).unwrap();
        assert_eq!(w.status, WorkloadStatus::Overload);
        assert_eq!(v.limits().max_weekly_hours, 12);
    }

    #[test]
    fn test_store_failure_propagates() {
        let v = WorkloadValidator::new(BrokenStore);
        let err = v.calculate_teacher_workload(1, SEM, YEAR).unwrap_err();
        assert!(matches!(err, EngineError::StoreUnavailable(_)));

        let err = v
            .validate_bulk_assignments(&[BulkAssignment::new(1, "X", 1)], "101", SEM, YEAR)
            .unwrap_err();
        assert!(matches!(err, EngineError::StoreUnavailable(_)));
    }

    #[test]
    fn test_validator_over_borrowed_store() {
        let s = store();
        let v = WorkloadValidator::new(&s);
        assert_eq!(v.calculate_teacher_workload(2, SEM, YEAR).unwrap().total_hours, 22);
    }
}
