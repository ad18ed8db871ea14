//! Timetable domain models.
//!
//! Plain data types shared by every engine in this crate. All of them are
//! read-only inputs: the engines detect, report and expand, but never
//! mutate the schedule.
//!
//! # Domain Mappings
//!
//! | u-timetable | School term |
//! |-------------|-------------|
//! | ScheduledPeriod | One cell of a class timetable |
//! | Timeslot | (day, period) of the weekly grid |
//! | Grade | Class section (M.1/1 ... M.6/n) |
//! | TeacherResponsibility | Teaching load for a subject and grade |
//! | LockTemplate | Rule expanding into locked periods |

mod grade;
mod period;
mod reference;
mod responsibility;
mod template;
mod timeslot;

pub use grade::{Cohort, Grade};
pub use period::ScheduledPeriod;
pub use reference::{Room, Subject, Teacher};
pub use responsibility::TeacherResponsibility;
pub use template::{
    builtin_templates, template_by_id, templates_by_category, GradeFilter, LockTemplate,
    LockTemplateConfig, TemplateCategory, TimeslotFilter,
};
pub use timeslot::{calculate_breaktime, BreakPeriods, BreaktimeKind, DayOfWeek, Timeslot};

use serde::{Deserialize, Serialize};

/// Scheduled period identifier.
pub type ClassId = i64;
/// Teacher identifier.
pub type TeacherId = i64;
/// Room identifier.
pub type RoomId = i64;
/// Teacher responsibility identifier.
pub type RespId = i64;

/// Semester of an academic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Semester {
    #[serde(rename = "SEMESTER_1")]
    First,
    #[serde(rename = "SEMESTER_2")]
    Second,
    #[serde(rename = "SEMESTER_3")]
    Third,
}

impl Semester {
    /// Semester number (1, 2 or 3).
    pub fn number(self) -> u8 {
        match self {
            Semester::First => 1,
            Semester::Second => 2,
            Semester::Third => 3,
        }
    }
}
