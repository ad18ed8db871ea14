//! Reference data validation.
//!
//! Checks structural integrity of a term's grades, timeslots, rooms and
//! subjects before conflicts are detected or templates resolved. Detects:
//! - Duplicate IDs
//! - Grade levels outside the six-year secondary range
//! - Two timeslots occupying the same weekly cell
//!
//! All issues are collected; validation never stops at the first one.

use crate::models::{DayOfWeek, Grade, Room, Subject, Timeslot};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A grade level is outside 1-6.
    InvalidGradeLevel,
    /// Two timeslots share the same day and period.
    DuplicateTimeslotCell,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the reference data of a term.
///
/// Checks:
/// 1. No duplicate grade IDs
/// 2. All grade levels within 1-6
/// 3. No duplicate timeslot IDs
/// 4. No two timeslots on the same (day, period)
/// 5. No duplicate room IDs
/// 6. No duplicate subject codes
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_reference_data(
    grades: &[Grade],
    timeslots: &[Timeslot],
    rooms: &[Room],
    subjects: &[Subject],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut grade_ids = HashSet::new();
    for g in grades {
        if !grade_ids.insert(g.grade_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate grade ID: {}", g.grade_id),
            ));
        }
        if g.cohort().is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidGradeLevel,
                format!("Grade '{}' has level {} (expected 1-6)", g.grade_id, g.level),
            ));
        }
    }

    let mut timeslot_ids = HashSet::new();
    let mut cells: HashSet<(DayOfWeek, u32)> = HashSet::new();
    for t in timeslots {
        if !timeslot_ids.insert(t.timeslot_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate timeslot ID: {}", t.timeslot_id),
            ));
        }
        if !cells.insert((t.day_of_week, t.period_start)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTimeslotCell,
                format!(
                    "Timeslot '{}' reuses cell {} period {}",
                    t.timeslot_id, t.day_of_week, t.period_start
                ),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for r in rooms {
        if !room_ids.insert(r.room_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.room_id),
            ));
        }
    }

    let mut subject_codes = HashSet::new();
    for s in subjects {
        if !subject_codes.insert(s.subject_code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate subject code: {}", s.subject_code),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
