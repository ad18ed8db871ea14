//! Grade (class section) model.
//!
//! Grades are identified by year level (1-6, Thai Matthayom) and section.
//! Levels 1-3 form the junior cohort, 4-6 the senior cohort; the cohort
//! decides which break periods apply to a grade.

use serde::{Deserialize, Serialize};

/// Student cohort derived from the grade level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cohort {
    /// Levels 1-3.
    Junior,
    /// Levels 4-6.
    Senior,
}

impl Cohort {
    /// Cohort of a year level, `None` outside 1-6.
    pub fn of_level(level: u8) -> Option<Self> {
        match level {
            1..=3 => Some(Cohort::Junior),
            4..=6 => Some(Cohort::Senior),
            _ => None,
        }
    }
}

/// A class section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    /// Unique grade identifier.
    pub grade_id: String,
    /// Display name (e.g. "M.1/2").
    pub grade_name: String,
    /// Year level (1-6).
    pub level: u8,
}

impl Grade {
    /// Creates a grade at the given level.
    pub fn new(grade_id: impl Into<String>, level: u8) -> Self {
        Self {
            grade_id: grade_id.into(),
            grade_name: String::new(),
            level,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.grade_name = name.into();
        self
    }

    /// Cohort of this grade.
    pub fn cohort(&self) -> Option<Cohort> {
        Cohort::of_level(self.level)
    }

    /// Whether this grade belongs to the junior cohort.
    pub fn is_junior(&self) -> bool {
        self.cohort() == Some(Cohort::Junior)
    }

    /// Whether this grade belongs to the senior cohort.
    pub fn is_senior(&self) -> bool {
        self.cohort() == Some(Cohort::Senior)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cohort_partition() {
        for level in 1..=3 {
            assert_eq!(Cohort::of_level(level), Some(Cohort::Junior));
        }
        for level in 4..=6 {
            assert_eq!(Cohort::of_level(level), Some(Cohort::Senior));
        }
        assert_eq!(Cohort::of_level(0), None);
        assert_eq!(Cohort::of_level(7), None);
    }

    #[test]
    fn test_grade_builder() {
        let g = Grade::new("101", 1).with_name("M.1/1");
        assert_eq!(g.grade_id, "101");
        assert_eq!(g.grade_name, "M.1/1");
        assert!(g.is_junior());
        assert!(!g.is_senior());
    }
}
