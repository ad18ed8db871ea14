//! Flat reference records: teachers, rooms, subjects.
//!
//! Read-only inputs to the engines; never mutated here.

use serde::{Deserialize, Serialize};

use super::{RoomId, TeacherId};

/// A teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub teacher_id: TeacherId,
    /// Display name including prefix.
    pub name: String,
    /// Department (subject group).
    pub department: String,
}

/// A room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub room_id: RoomId,
    /// Display name.
    pub name: String,
}

/// A subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Subject code (unique).
    pub subject_code: String,
    /// Display name.
    pub name: String,
}

impl Teacher {
    /// Creates a teacher.
    pub fn new(teacher_id: TeacherId, name: impl Into<String>) -> Self {
        Self {
            teacher_id,
            name: name.into(),
            department: String::new(),
        }
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }
}

impl Room {
    /// Creates a room.
    pub fn new(room_id: RoomId, name: impl Into<String>) -> Self {
        Self {
            room_id,
            name: name.into(),
        }
    }
}

impl Subject {
    /// Creates a subject.
    pub fn new(subject_code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            subject_code: subject_code.into(),
            name: name.into(),
        }
    }
}
