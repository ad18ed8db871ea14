//! Teacher responsibility model.
//!
//! A responsibility is a teacher's weekly-hour commitment to one subject
//! for one grade in one term. It is the unit the workload validator sums.

use serde::{Deserialize, Serialize};

use super::{RespId, Semester, TeacherId};

/// A teacher's assigned weekly hours for one (subject, grade) pair in a term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherResponsibility {
    /// Unique responsibility identifier.
    pub resp_id: RespId,
    /// Responsible teacher.
    pub teacher_id: TeacherId,
    /// Subject taught.
    pub subject_code: String,
    /// Grade taught.
    pub grade_id: String,
    /// Academic year (Buddhist era, e.g. 2567).
    pub academic_year: u16,
    /// Semester.
    pub semester: Semester,
    /// Weekly teaching hours. Not range-checked.
    pub teach_hour: i32,
}

impl TeacherResponsibility {
    /// Creates a responsibility.
    pub fn new(
        resp_id: RespId,
        teacher_id: TeacherId,
        subject_code: impl Into<String>,
        grade_id: impl Into<String>,
        teach_hour: i32,
    ) -> Self {
        Self {
            resp_id,
            teacher_id,
            subject_code: subject_code.into(),
            grade_id: grade_id.into(),
            academic_year: 0,
            semester: Semester::First,
            teach_hour,
        }
    }

    /// Sets the term.
    pub fn in_term(mut self, academic_year: u16, semester: Semester) -> Self {
        self.academic_year = academic_year;
        self.semester = semester;
        self
    }

    /// Whether this row belongs to the given teacher and term.
    pub fn matches(&self, teacher_id: TeacherId, semester: Semester, academic_year: u16) -> bool {
        self.teacher_id == teacher_id
            && self.semester == semester
            && self.academic_year == academic_year
    }

    /// Whether this row covers the given (subject, grade) pair.
    pub fn covers(&self, subject_code: &str, grade_id: &str) -> bool {
        self.subject_code == subject_code && self.grade_id == grade_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_term() {
        let r = TeacherResponsibility::new(1, 7, "MATH101", "101", 4).in_term(2567, Semester::First);
        assert!(r.matches(7, Semester::First, 2567));
        assert!(!r.matches(7, Semester::Second, 2567));
        assert!(!r.matches(8, Semester::First, 2567));
        assert!(!r.matches(7, Semester::First, 2568));
    }

    #[test]
    fn test_covers_pair() {
        let r = TeacherResponsibility::new(1, 7, "MATH101", "101", 4);
        assert!(r.covers("MATH101", "101"));
        assert!(!r.covers("MATH101", "102"));
        assert!(!r.covers("SCI101", "101"));
    }
}
