//! Lock template model and the stock template catalog.
//!
//! A lock template is a compact, declarative rule ("lunch break, junior
//! grades, period 4, every weekday") that the lock resolver expands into
//! concrete locked periods. Templates are configuration values; only their
//! resolution output is ever stored as schedule data.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{DayOfWeek, Grade, RoomId, Timeslot};

/// Which grades a template targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GradeFilter {
    /// Every grade.
    All,
    /// Levels 1-3.
    Junior,
    /// Levels 4-6.
    Senior,
    /// An explicit list of grade ids.
    Specific { grade_ids: Vec<String> },
}

impl GradeFilter {
    /// Whether a grade passes this filter.
    pub fn matches(&self, grade: &Grade) -> bool {
        match self {
            GradeFilter::All => true,
            GradeFilter::Junior => grade.is_junior(),
            GradeFilter::Senior => grade.is_senior(),
            GradeFilter::Specific { grade_ids } => grade_ids.iter().any(|id| *id == grade.grade_id),
        }
    }
}

/// Which timeslots a template targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeslotFilter {
    /// Selected days.
    pub days: BTreeSet<DayOfWeek>,
    /// Selected periods.
    #[serde(default)]
    pub periods: BTreeSet<u32>,
    /// Lock whole days: expansion skips cells that are a break for the
    /// grade's cohort. The period filter still applies.
    #[serde(default)]
    pub all_day: bool,
}

impl TimeslotFilter {
    /// Filter over the given days and periods.
    pub fn new(
        days: impl IntoIterator<Item = DayOfWeek>,
        periods: impl IntoIterator<Item = u32>,
    ) -> Self {
        Self {
            days: days.into_iter().collect(),
            periods: periods.into_iter().collect(),
            all_day: false,
        }
    }

    /// Whole-day filter over the given days and the periods of the day.
    pub fn all_day(
        days: impl IntoIterator<Item = DayOfWeek>,
        periods: impl IntoIterator<Item = u32>,
    ) -> Self {
        Self {
            all_day: true,
            ..Self::new(days, periods)
        }
    }

    /// Whether a timeslot passes this filter.
    pub fn matches(&self, timeslot: &Timeslot) -> bool {
        self.days.contains(&timeslot.day_of_week) && self.periods.contains(&timeslot.period_start)
    }
}

/// Resolution parameters of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockTemplateConfig {
    /// Subject code written into every lock.
    pub subject_code: String,
    /// Subject display name.
    pub subject_name: String,
    /// Explicit room; when absent the room is looked up by `room_name`.
    pub room_id: Option<RoomId>,
    /// Room name used for lookup.
    pub room_name: String,
    /// Target grades.
    pub grade_filter: GradeFilter,
    /// Target timeslots.
    pub timeslot_filter: TimeslotFilter,
}

/// Template grouping for pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Lunch,
    Activity,
    Exam,
    Assembly,
    Other,
}

/// A named lock template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockTemplate {
    /// Unique template identifier.
    pub id: String,
    /// Display name (Thai).
    pub name: String,
    /// Display name (English).
    pub name_en: String,
    /// Longer description.
    #[serde(default)]
    pub description: String,
    /// Grouping.
    pub category: TemplateCategory,
    /// Resolution parameters.
    pub config: LockTemplateConfig,
}

impl LockTemplate {
    /// Creates a template.
    pub fn new(id: impl Into<String>, category: TemplateCategory, config: LockTemplateConfig) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            name_en: String::new(),
            description: String::new(),
            category,
            config,
        }
    }

    /// Sets the display names.
    pub fn with_names(mut self, name: impl Into<String>, name_en: impl Into<String>) -> Self {
        self.name = name.into();
        self.name_en = name_en.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

fn stock(
    id: &str,
    category: TemplateCategory,
    names: (&str, &str),
    subject: (&str, &str),
    room_name: &str,
    grade_filter: GradeFilter,
    timeslot_filter: TimeslotFilter,
) -> LockTemplate {
    LockTemplate::new(
        id,
        category,
        LockTemplateConfig {
            subject_code: subject.0.to_string(),
            subject_name: subject.1.to_string(),
            room_id: None,
            room_name: room_name.to_string(),
            grade_filter,
            timeslot_filter,
        },
    )
    .with_names(names.0, names.1)
}

/// The stock templates shipped with the system.
pub fn builtin_templates() -> Vec<LockTemplate> {
    use DayOfWeek::*;
    use TemplateCategory::*;

    let weekdays = DayOfWeek::WEEKDAYS;
    vec![
        stock(
            "lunch-junior",
            Lunch,
            ("พักกลางวัน (ม.ต้น)", "Lunch Break (Junior)"),
            ("LUNCH-JR", "พักกลางวัน (ม.ต้น)"),
            "โรงอาหาร",
            GradeFilter::Junior,
            TimeslotFilter::new(weekdays, [4]),
        ),
        stock(
            "lunch-senior",
            Lunch,
            ("พักกลางวัน (ม.ปลาย)", "Lunch Break (Senior)"),
            ("LUNCH-SR", "พักกลางวัน (ม.ปลาย)"),
            "โรงอาหาร",
            GradeFilter::Senior,
            TimeslotFilter::new(weekdays, [5]),
        ),
        stock(
            "activity-morning",
            Activity,
            ("กิจกรรมเช้า", "Morning Activities"),
            ("ACT-MORNING", "กิจกรรมหน้าเสาธง"),
            "สนามหน้าเสาธง",
            GradeFilter::All,
            TimeslotFilter::new([Mon], [1]),
        ),
        stock(
            "activity-club",
            Activity,
            ("ชุมนุม", "Club Activities"),
            ("ACT-CLUB", "ชุมนุม"),
            "ตามชุมนุม",
            GradeFilter::All,
            TimeslotFilter::new([Fri], [8, 9]),
        ),
        stock(
            "activity-sport",
            Activity,
            ("กิจกรรมกีฬา", "Sports Activities"),
            ("ACT-SPORT", "กิจกรรมกีฬา"),
            "สนามกีฬา",
            GradeFilter::All,
            TimeslotFilter::new([Wed], [7, 8]),
        ),
        stock(
            "assembly-weekly",
            Assembly,
            ("ประชุมประจำสัปดาห์", "Weekly Assembly"),
            ("ASSEMBLY", "ประชุมนักเรียน"),
            "หอประชุม",
            GradeFilter::All,
            TimeslotFilter::new([Fri], [1]),
        ),
        stock(
            "assembly-junior",
            Assembly,
            ("ประชุมผู้ปกครอง (ม.ต้น)", "Parent Meeting (Junior)"),
            ("PARENT-JR", "ประชุมผู้ปกครอง"),
            "หอประชุม",
            GradeFilter::Junior,
            TimeslotFilter::all_day([Sat], 1..=8),
        ),
        stock(
            "exam-midterm",
            Exam,
            ("สอบกลางภาค", "Midterm Exam"),
            ("EXAM-MID", "สอบกลางภาค"),
            "ห้องสอบ",
            GradeFilter::All,
            TimeslotFilter::all_day(weekdays, 1..=10),
        ),
        stock(
            "exam-final",
            Exam,
            ("สอบปลายภาค", "Final Exam"),
            ("EXAM-FINAL", "สอบปลายภาค"),
            "ห้องสอบ",
            GradeFilter::All,
            TimeslotFilter::all_day(weekdays, 1..=10),
        ),
    ]
}

/// Looks up a stock template by id.
pub fn template_by_id(id: &str) -> Option<LockTemplate> {
    builtin_templates().into_iter().find(|t| t.id == id)
}

/// Stock templates in a category.
pub fn templates_by_category(category: TemplateCategory) -> Vec<LockTemplate> {
    builtin_templates()
        .into_iter()
        .filter(|t| t.category == category)
        .collect()
}
