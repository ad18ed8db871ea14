//! Schedule store collaborator.
//!
//! The engines never talk to a database. They receive already-fetched
//! collections from a [`ScheduleStore`], one read per invocation.
//! [`InMemoryStore`] is a ready-made implementation for tests and for
//! embedders that keep the term in memory.

use std::collections::HashMap;

use crate::error::Result;
use crate::models::{ScheduledPeriod, Semester, TeacherId, TeacherResponsibility};

/// Read-only source of schedule data.
pub trait ScheduleStore {
    /// Every scheduled period of a term, joined with display fields.
    fn schedule_periods(&self, academic_year: u16, semester: Semester)
        -> Result<Vec<ScheduledPeriod>>;

    /// Every responsibility row of a teacher in a term.
    fn teacher_responsibilities(
        &self,
        teacher_id: TeacherId,
        semester: Semester,
        academic_year: u16,
    ) -> Result<Vec<TeacherResponsibility>>;
}

impl<S: ScheduleStore + ?Sized> ScheduleStore for &S {
    fn schedule_periods(
        &self,
        academic_year: u16,
        semester: Semester,
    ) -> Result<Vec<ScheduledPeriod>> {
        (**self).schedule_periods(academic_year, semester)
    }

    fn teacher_responsibilities(
        &self,
        teacher_id: TeacherId,
        semester: Semester,
        academic_year: u16,
    ) -> Result<Vec<TeacherResponsibility>> {
        (**self).teacher_responsibilities(teacher_id, semester, academic_year)
    }
}

/// In-memory schedule store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    periods: HashMap<(u16, Semester), Vec<ScheduledPeriod>>,
    responsibilities: Vec<TeacherResponsibility>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds periods to a term.
    pub fn with_periods(
        mut self,
        academic_year: u16,
        semester: Semester,
        periods: impl IntoIterator<Item = ScheduledPeriod>,
    ) -> Self {
        self.periods
            .entry((academic_year, semester))
            .or_default()
            .extend(periods);
        self
    }

    /// Adds a responsibility row.
    pub fn with_responsibility(mut self, responsibility: TeacherResponsibility) -> Self {
        self.responsibilities.push(responsibility);
        self
    }

    /// Adds several responsibility rows.
    pub fn with_responsibilities(
        mut self,
        responsibilities: impl IntoIterator<Item = TeacherResponsibility>,
    ) -> Self {
        self.responsibilities.extend(responsibilities);
        self
    }
}

impl ScheduleStore for InMemoryStore {
    fn schedule_periods(
        &self,
        academic_year: u16,
        semester: Semester,
    ) -> Result<Vec<ScheduledPeriod>> {
        Ok(self
            .periods
            .get(&(academic_year, semester))
            .cloned()
            .unwrap_or_default())
    }

    fn teacher_responsibilities(
        &self,
        teacher_id: TeacherId,
        semester: Semester,
        academic_year: u16,
    ) -> Result<Vec<TeacherResponsibility>> {
        Ok(self
            .responsibilities
            .iter()
            .filter(|r| r.matches(teacher_id, semester, academic_year))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_by_term() {
        let store = InMemoryStore::new()
            .with_periods(2567, Semester::First, vec![ScheduledPeriod::new(1, "T1", "101", "M")])
            .with_periods(2567, Semester::Second, vec![ScheduledPeriod::new(2, "T2", "101", "M")]);

        let first = store.schedule_periods(2567, Semester::First).unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].class_id, 1);
        assert!(store.schedule_periods(2568, Semester::First).unwrap().is_empty());
    }

    #[test]
    fn test_responsibilities_by_teacher_and_term() {
        let store = InMemoryStore::new().with_responsibilities(vec![
            TeacherResponsibility::new(1, 7, "MATH", "101", 4).in_term(2567, Semester::First),
            TeacherResponsibility::new(2, 7, "MATH", "102", 4).in_term(2567, Semester::Second),
            TeacherResponsibility::new(3, 8, "SCI", "101", 3).in_term(2567, Semester::First),
        ]);

        let rows = store.teacher_responsibilities(7, Semester::First, 2567).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].resp_id, 1);

        // Through a reference.
        let by_ref = &store;
        assert_eq!(by_ref.teacher_responsibilities(8, Semester::First, 2567).unwrap().len(), 1);
    }
}
