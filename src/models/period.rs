//! Scheduled period model.
//!
//! A scheduled period is one subject occupying one timeslot for one grade,
//! joined with the display fields of its grade, subject, teachers and room.
//! Teachers are held as an ordered list owned by the period, so conflict
//! grouping never needs a relational join.
//!
//! A period with no teacher or no room is "unassigned" and is reported by
//! the conflict detector rather than dropped.

use serde::{Deserialize, Serialize};

use super::{ClassId, Room, RoomId, Teacher, TeacherId};

/// One subject occupying one timeslot for one grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledPeriod {
    /// Unique per grade + subject + timeslot.
    pub class_id: ClassId,
    /// Occupied timeslot.
    pub timeslot_id: String,
    /// Attending grade.
    pub grade_id: String,
    /// Grade display name.
    #[serde(default)]
    pub grade_name: String,
    /// Subject code.
    pub subject_code: String,
    /// Subject display name.
    #[serde(default)]
    pub subject_name: String,
    /// Assigned room, if any.
    pub room_id: Option<RoomId>,
    /// Room display name.
    #[serde(default)]
    pub room_name: String,
    /// Assigned teachers (usually one, may be empty).
    #[serde(default)]
    pub teacher_ids: Vec<TeacherId>,
    /// Teacher display names, parallel to `teacher_ids`.
    #[serde(default)]
    pub teacher_names: Vec<String>,
    /// Administratively protected entry.
    #[serde(default)]
    pub is_locked: bool,
}

impl ScheduledPeriod {
    /// Creates a period with no teacher and no room.
    pub fn new(
        class_id: ClassId,
        timeslot_id: impl Into<String>,
        grade_id: impl Into<String>,
        subject_code: impl Into<String>,
    ) -> Self {
        Self {
            class_id,
            timeslot_id: timeslot_id.into(),
            grade_id: grade_id.into(),
            grade_name: String::new(),
            subject_code: subject_code.into(),
            subject_name: String::new(),
            room_id: None,
            room_name: String::new(),
            teacher_ids: Vec::new(),
            teacher_names: Vec::new(),
            is_locked: false,
        }
    }

    /// Sets the grade display name.
    pub fn with_grade_name(mut self, name: impl Into<String>) -> Self {
        self.grade_name = name.into();
        self
    }

    /// Sets the subject display name.
    pub fn with_subject_name(mut self, name: impl Into<String>) -> Self {
        self.subject_name = name.into();
        self
    }

    /// Assigns a room.
    pub fn with_room(mut self, room_id: RoomId, name: impl Into<String>) -> Self {
        self.room_id = Some(room_id);
        self.room_name = name.into();
        self
    }

    /// Adds a teacher.
    pub fn with_teacher(mut self, teacher_id: TeacherId, name: impl Into<String>) -> Self {
        self.teacher_ids.push(teacher_id);
        self.teacher_names.push(name.into());
        self
    }

    /// Adds a teacher, joining the display name from its reference record.
    pub fn with_teacher_record(self, teacher: &Teacher) -> Self {
        self.with_teacher(teacher.teacher_id, teacher.name.as_str())
    }

    /// Adds a room, joining the display name from its reference record.
    pub fn with_room_record(self, room: &Room) -> Self {
        self.with_room(room.room_id, room.name.as_str())
    }

    /// Marks the period as locked.
    pub fn locked(mut self) -> Self {
        self.is_locked = true;
        self
    }

    /// Whether no teacher is assigned.
    pub fn is_missing_teacher(&self) -> bool {
        self.teacher_ids.is_empty()
    }

    /// Whether no room is assigned.
    pub fn is_missing_room(&self) -> bool {
        self.room_id.is_none()
    }

    /// Whether the period lacks a teacher or a room.
    pub fn is_unassigned(&self) -> bool {
        self.is_missing_teacher() || self.is_missing_room()
    }

    /// Whether the given teacher is assigned to this period.
    pub fn has_teacher(&self, teacher_id: TeacherId) -> bool {
        self.teacher_ids.contains(&teacher_id)
    }

    /// Display name of an assigned teacher, if known.
    pub fn teacher_name(&self, teacher_id: TeacherId) -> Option<&str> {
        self.teacher_ids
            .iter()
            .position(|&id| id == teacher_id)
            .and_then(|idx| self.teacher_names.get(idx))
            .map(String::as_str)
    }
}
