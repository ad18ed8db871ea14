//! Timeslot model.
//!
//! A timeslot is one fixed (day, period) cell of the weekly grid. Some
//! cells are break periods reserved for one or both student cohorts.
//!
//! # Identifiers
//! Timeslot ids follow the pattern `<semester>-<year>-<DAY><period>`,
//! e.g. `1-2567-MON1`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Semester;

/// Day of the school week.
///
/// Ordered `MON < TUE < ... < SUN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayOfWeek {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl DayOfWeek {
    /// Monday to Friday.
    pub const WEEKDAYS: [DayOfWeek; 5] = [
        DayOfWeek::Mon,
        DayOfWeek::Tue,
        DayOfWeek::Wed,
        DayOfWeek::Thu,
        DayOfWeek::Fri,
    ];

    /// Three-letter uppercase code (`MON`, `TUE`, ...).
    pub fn code(self) -> &'static str {
        match self {
            DayOfWeek::Mon => "MON",
            DayOfWeek::Tue => "TUE",
            DayOfWeek::Wed => "WED",
            DayOfWeek::Thu => "THU",
            DayOfWeek::Fri => "FRI",
            DayOfWeek::Sat => "SAT",
            DayOfWeek::Sun => "SUN",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Break classification of a timeslot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BreaktimeKind {
    /// Regular teaching period.
    #[default]
    NotBreak,
    /// Break for junior grades (levels 1-3) only.
    BreakJunior,
    /// Break for senior grades (levels 4-6) only.
    BreakSenior,
    /// Break for every grade.
    BreakBoth,
}

impl BreaktimeKind {
    /// Whether this is any kind of break.
    pub fn is_break(self) -> bool {
        self != BreaktimeKind::NotBreak
    }
}

/// Periods at which each cohort takes its break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakPeriods {
    /// Break period for junior grades.
    pub junior: u32,
    /// Break period for senior grades.
    pub senior: u32,
}

/// Derives the break classification of a period from the break configuration.
pub fn calculate_breaktime(period: u32, breaks: BreakPeriods) -> BreaktimeKind {
    match (breaks.junior == period, breaks.senior == period) {
        (true, true) => BreaktimeKind::BreakBoth,
        (false, true) => BreaktimeKind::BreakSenior,
        (true, false) => BreaktimeKind::BreakJunior,
        (false, false) => BreaktimeKind::NotBreak,
    }
}

/// A fixed period in the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeslot {
    /// Unique timeslot identifier.
    pub timeslot_id: String,
    /// Day of the week.
    pub day_of_week: DayOfWeek,
    /// Period index within the day (1-based).
    pub period_start: u32,
    /// Break classification.
    pub breaktime: BreaktimeKind,
}

impl Timeslot {
    /// Creates a regular (non-break) timeslot.
    pub fn new(timeslot_id: impl Into<String>, day_of_week: DayOfWeek, period_start: u32) -> Self {
        Self {
            timeslot_id: timeslot_id.into(),
            day_of_week,
            period_start,
            breaktime: BreaktimeKind::NotBreak,
        }
    }

    /// Creates a timeslot with the canonical id for the given term.
    pub fn for_term(
        semester: Semester,
        academic_year: u16,
        day_of_week: DayOfWeek,
        period_start: u32,
    ) -> Self {
        Self::new(
            Self::timeslot_id_for(semester, academic_year, day_of_week, period_start),
            day_of_week,
            period_start,
        )
    }

    /// Sets the break classification.
    pub fn with_breaktime(mut self, breaktime: BreaktimeKind) -> Self {
        self.breaktime = breaktime;
        self
    }

    /// Canonical timeslot id: `<semester>-<year>-<DAY><period>`.
    pub fn timeslot_id_for(
        semester: Semester,
        academic_year: u16,
        day_of_week: DayOfWeek,
        period_start: u32,
    ) -> String {
        format!(
            "{}-{}-{}{}",
            semester.number(),
            academic_year,
            day_of_week.code(),
            period_start
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_breaktime() {
        let breaks = BreakPeriods { junior: 4, senior: 5 };
        assert_eq!(calculate_breaktime(4, breaks), BreaktimeKind::BreakJunior);
        assert_eq!(calculate_breaktime(5, breaks), BreaktimeKind::BreakSenior);
        assert_eq!(calculate_breaktime(3, breaks), BreaktimeKind::NotBreak);

        let shared = BreakPeriods { junior: 4, senior: 4 };
        assert_eq!(calculate_breaktime(4, shared), BreaktimeKind::BreakBoth);
    }

    #[test]
    fn test_timeslot_id_format() {
        let ts = Timeslot::for_term(Semester::First, 2567, DayOfWeek::Mon, 1);
        assert_eq!(ts.timeslot_id, "1-2567-MON1");
        assert_eq!(ts.breaktime, BreaktimeKind::NotBreak);

        let id = Timeslot::timeslot_id_for(Semester::Second, 2568, DayOfWeek::Fri, 10);
        assert_eq!(id, "2-2568-FRI10");
    }

    #[test]
    fn test_day_ordering() {
        assert!(DayOfWeek::Mon < DayOfWeek::Tue);
        assert!(DayOfWeek::Sat < DayOfWeek::Sun);
        assert_eq!(DayOfWeek::WEEKDAYS.len(), 5);
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_string(&BreaktimeKind::BreakJunior).unwrap();
        assert_eq!(json, "\"BREAK_JUNIOR\"");
        let day: DayOfWeek = serde_json::from_str("\"WED\"").unwrap();
        assert_eq!(day, DayOfWeek::Wed);
    }
}
