//! Single-cell placement check.
//!
//! Answers "may this subject go into this cell?" before a period is
//! written, returning the first blocking conflict in priority order:
//!
//! 1. Locked timeslot
//! 2. Break time
//! 3. Teacher not assigned to the subject and grade
//! 4. Class conflict
//! 5. Teacher conflict
//! 6. Room conflict
//!
//! Re-placing an existing period (same class id) never collides with itself.

use serde::{Deserialize, Serialize};

use crate::breaktime::is_break_compatible;
use crate::models::{
    BreaktimeKind, ClassId, RoomId, ScheduledPeriod, Semester, TeacherId, TeacherResponsibility,
};

/// A proposed period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRequest {
    /// Set when moving an existing period.
    pub class_id: Option<ClassId>,
    pub timeslot_id: String,
    pub grade_id: String,
    pub grade_level: u8,
    pub subject_code: String,
    pub teacher_id: Option<TeacherId>,
    pub room_id: Option<RoomId>,
    /// Break classification of the target timeslot.
    pub breaktime: BreaktimeKind,
    pub academic_year: u16,
    pub semester: Semester,
}

impl PlacementRequest {
    /// Creates a request for a new period with no teacher or room.
    pub fn new(
        timeslot_id: impl Into<String>,
        grade_id: impl Into<String>,
        grade_level: u8,
        subject_code: impl Into<String>,
        academic_year: u16,
        semester: Semester,
    ) -> Self {
        Self {
            class_id: None,
            timeslot_id: timeslot_id.into(),
            grade_id: grade_id.into(),
            grade_level,
            subject_code: subject_code.into(),
            teacher_id: None,
            room_id: None,
            breaktime: BreaktimeKind::NotBreak,
            academic_year,
            semester,
        }
    }

    /// Marks the request as a move of an existing period.
    pub fn moving(mut self, class_id: ClassId) -> Self {
        self.class_id = Some(class_id);
        self
    }

    /// Sets the teacher.
    pub fn with_teacher(mut self, teacher_id: TeacherId) -> Self {
        self.teacher_id = Some(teacher_id);
        self
    }

    /// Sets the room.
    pub fn with_room(mut self, room_id: RoomId) -> Self {
        self.room_id = Some(room_id);
        self
    }

    /// Sets the target timeslot's break classification.
    pub fn with_breaktime(mut self, breaktime: BreaktimeKind) -> Self {
        self.breaktime = breaktime;
        self
    }

    fn is_other(&self, period: &ScheduledPeriod) -> bool {
        self.class_id != Some(period.class_id)
    }

    fn same_cell(&self, period: &ScheduledPeriod) -> bool {
        period.timeslot_id == self.timeslot_id && self.is_other(period)
    }
}

/// Kind of blocking conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlacementConflict {
    LockedTimeslot,
    BreakTime,
    TeacherNotAssigned,
    ClassConflict,
    TeacherConflict,
    RoomConflict,
}

/// Outcome of a placement check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementCheck {
    /// First blocking conflict, if any.
    pub conflict: Option<PlacementConflict>,
    pub message: String,
    /// The existing period that blocks the placement, when there is one.
    pub conflicting: Option<ScheduledPeriod>,
}

impl PlacementCheck {
    fn clear() -> Self {
        Self {
            conflict: None,
            message: "no conflicts detected".to_string(),
            conflicting: None,
        }
    }

    fn blocked(
        conflict: PlacementConflict,
        message: String,
        conflicting: Option<&ScheduledPeriod>,
    ) -> Self {
        Self {
            conflict: Some(conflict),
            message,
            conflicting: conflicting.cloned(),
        }
    }

    /// Whether the placement is blocked.
    pub fn has_conflict(&self) -> bool {
        self.conflict.is_some()
    }
}

/// Checks a proposed period against the term's existing periods and
/// teacher responsibilities.
pub fn check_placement(
    request: &PlacementRequest,
    existing: &[ScheduledPeriod],
    responsibilities: &[TeacherResponsibility],
) -> PlacementCheck {
    let in_cell: Vec<&ScheduledPeriod> = existing.iter().filter(|p| request.same_cell(p)).collect();

    if let Some(locked) = in_cell
        .iter()
        .find(|p| p.is_locked && p.grade_id == request.grade_id)
    {
        return PlacementCheck::blocked(
            PlacementConflict::LockedTimeslot,
            format!(
                "timeslot {} is locked for grade {} ({})",
                request.timeslot_id, request.grade_id, locked.subject_code
            ),
            Some(*locked),
        );
    }

    if !is_break_compatible(request.breaktime, request.grade_level) {
        return PlacementCheck::blocked(
            PlacementConflict::BreakTime,
            format!(
                "timeslot {} is a break period for grade {}",
                request.timeslot_id, request.grade_id
            ),
            None,
        );
    }

    if let Some(teacher_id) = request.teacher_id {
        let assigned = responsibilities.iter().any(|r| {
            r.matches(teacher_id, request.semester, request.academic_year)
                && r.covers(&request.subject_code, &request.grade_id)
        });
        if !assigned {
            return PlacementCheck::blocked(
                PlacementConflict::TeacherNotAssigned,
                format!(
                    "teacher {} is not assigned to teach {} for grade {}",
                    teacher_id, request.subject_code, request.grade_id
                ),
                None,
            );
        }
    }

    if let Some(other) = in_cell.iter().find(|p| p.grade_id == request.grade_id) {
        return PlacementCheck::blocked(
            PlacementConflict::ClassConflict,
            format!(
                "grade {} already has {} at this time",
                request.grade_id, other.subject_code
            ),
            Some(*other),
        );
    }

    if let Some(teacher_id) = request.teacher_id {
        if let Some(other) = in_cell.iter().find(|p| p.has_teacher(teacher_id)) {
            let name = other
                .teacher_name(teacher_id)
                .map(str::to_string)
                .unwrap_or_else(|| format!("#{teacher_id}"));
            return PlacementCheck::blocked(
                PlacementConflict::TeacherConflict,
                format!(
                    "teacher {} is already teaching {} for grade {} at this time",
                    name, other.subject_code, other.grade_id
                ),
                Some(*other),
            );
        }
    }

    if let Some(room_id) = request.room_id {
        if let Some(other) = in_cell.iter().find(|p| p.room_id == Some(room_id)) {
            return PlacementCheck::blocked(
                PlacementConflict::RoomConflict,
                format!(
                    "room {} is already used by grade {} for {} at this time",
                    other.room_name, other.grade_id, other.subject_code
                ),
                Some(*other),
            );
        }
    }

    PlacementCheck::clear()
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: u16 = 2567;

    fn existing() -> Vec<ScheduledPeriod> {
        vec![
            ScheduledPeriod::new(1, "T1", "101", "MATH101")
                .with_teacher(1, "Ms. A")
                .with_room(10, "R10"),
            ScheduledPeriod::new(2, "T2", "102", "ASSEMBLY")
                .with_room(20, "Hall")
                .locked(),
        ]
    }

    fn responsibilities() -> Vec<TeacherResponsibility> {
        vec![
            TeacherResponsibility::new(1, 1, "MATH101", "101", 4).in_term(YEAR, Semester::First),
            TeacherResponsibility::new(2, 1, "MATH101", "103", 4).in_term(YEAR, Semester::First),
            TeacherResponsibility::new(3, 2, "SCI101", "103", 3).in_term(YEAR, Semester::First),
        ]
    }

    fn request(timeslot: &str, grade: &str, level: u8, subject: &str) -> PlacementRequest {
        PlacementRequest::new(timeslot, grade, level, subject, YEAR, Semester::First)
    }

    #[test]
    fn test_free_cell() {
        let req = request("T3", "103", 1, "SCI101").with_teacher(2).with_room(10);
        let check = check_placement(&req, &existing(), &responsibilities());
        assert!(!check.has_conflict());
    }

    #[test]
    fn test_locked_timeslot_first() {
        // Also a break and a class conflict: lock wins.
        let req = request("T2", "102", 1, "SCI101").with_breaktime(BreaktimeKind::BreakBoth);
        let check = check_placement(&req, &existing(), &responsibilities());
        assert_eq!(check.conflict, Some(PlacementConflict::LockedTimeslot));
        assert_eq!(check.conflicting.map(|p| p.class_id), Some(2));
    }

    #[test]
    fn test_break_time() {
        let req = request("T4", "103", 2, "SCI101").with_breaktime(BreaktimeKind::BreakJunior);
        let check = check_placement(&req, &existing(), &responsibilities());
        assert_eq!(check.conflict, Some(PlacementConflict::BreakTime));

        // A senior grade may use the junior break.
        let req = request("T4", "401", 4, "SCI101").with_breaktime(BreaktimeKind::BreakJunior);
        assert!(!check_placement(&req, &existing(), &responsibilities()).has_conflict());
    }

    #[test]
    fn test_teacher_not_assigned() {
        let req = request("T3", "103", 1, "SCI101").with_teacher(1);
        let check = check_placement(&req, &existing(), &responsibilities());
        assert_eq!(check.conflict, Some(PlacementConflict::TeacherNotAssigned));
    }

    #[test]
    fn test_class_conflict() {
        let req = request("T1", "101", 1, "SCI101");
        let check = check_placement(&req, &existing(), &responsibilities());
        assert_eq!(check.conflict, Some(PlacementConflict::ClassConflict));
    }

    #[test]
    fn test_teacher_conflict() {
        let req = request("T1", "103", 1, "MATH101").with_teacher(1);
        let check = check_placement(&req, &existing(), &responsibilities());
        assert_eq!(check.conflict, Some(PlacementConflict::TeacherConflict));
        assert!(check.message.contains("Ms. A"));
    }

    #[test]
    fn test_room_conflict() {
        let req = request("T1", "103", 1, "SCI101").with_teacher(2).with_room(10);
        let check = check_placement(&req, &existing(), &responsibilities());
        assert_eq!(check.conflict, Some(PlacementConflict::RoomConflict));
        assert!(check.message.contains("R10"));
    }

    #[test]
    fn test_moving_period_ignores_itself() {
        let req = request("T1", "101", 1, "MATH101")
            .moving(1)
            .with_teacher(1)
            .with_room(10);
        let check = check_placement(&req, &existing(), &responsibilities());
        assert!(!check.has_conflict(), "{}", check.message);
    }
}
