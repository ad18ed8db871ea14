//! Term-wide conflict detection.
//!
//! Groups a term's scheduled periods by timeslot and reports, per
//! timeslot, every teacher, room and grade that is booked more than once.
//! Periods missing a teacher or a room are reported separately.
//!
//! # Determinism
//! Grouping runs over ordered maps: records come out sorted by timeslot
//! id, then by the grouping key, and colliding periods are sorted by class
//! id. The report is therefore independent of input order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::models::{ClassId, RoomId, ScheduledPeriod, Semester, TeacherId};
use crate::store::ScheduleStore;

/// A teacher booked for more than one class in a timeslot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherConflict {
    pub teacher_id: TeacherId,
    pub teacher_name: String,
    pub timeslot_id: String,
    /// Colliding periods (at least two), ordered by class id.
    pub periods: Vec<ScheduledPeriod>,
}

/// A room used by more than one class in a timeslot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomConflict {
    pub room_id: RoomId,
    pub room_name: String,
    pub timeslot_id: String,
    /// Colliding periods (at least two), ordered by class id.
    pub periods: Vec<ScheduledPeriod>,
}

/// A grade scheduled for more than one subject in a timeslot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassConflict {
    pub grade_id: String,
    pub grade_name: String,
    pub timeslot_id: String,
    /// Colliding periods (at least two), ordered by class id.
    pub periods: Vec<ScheduledPeriod>,
}

/// Which resource an unassigned period lacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MissingResource {
    Teacher,
    Room,
    Both,
}

/// A period missing its teacher, its room, or both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnassignedSchedule {
    pub class_id: ClassId,
    pub timeslot_id: String,
    pub grade_id: String,
    pub grade_name: String,
    pub subject_code: String,
    pub subject_name: String,
    pub missing_teacher: bool,
    pub missing_room: bool,
}

impl UnassignedSchedule {
    fn from_period(period: &ScheduledPeriod) -> Self {
        Self {
            class_id: period.class_id,
            timeslot_id: period.timeslot_id.clone(),
            grade_id: period.grade_id.clone(),
            grade_name: period.grade_name.clone(),
            subject_code: period.subject_code.clone(),
            subject_name: period.subject_name.clone(),
            missing_teacher: period.is_missing_teacher(),
            missing_room: period.is_missing_room(),
        }
    }

    /// Collapsed view of the two flags; `None` when neither is set.
    pub fn missing_resource(&self) -> Option<MissingResource> {
        match (self.missing_teacher, self.missing_room) {
            (true, true) => Some(MissingResource::Both),
            (true, false) => Some(MissingResource::Teacher),
            (false, true) => Some(MissingResource::Room),
            (false, false) => None,
        }
    }
}

/// Every conflict found in one term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    pub teacher_conflicts: Vec<TeacherConflict>,
    pub room_conflicts: Vec<RoomConflict>,
    pub class_conflicts: Vec<ClassConflict>,
    pub unassigned_schedules: Vec<UnassignedSchedule>,
}

impl ConflictReport {
    /// Number of records across all four lists.
    pub fn total_conflicts(&self) -> usize {
        self.teacher_conflicts.len()
            + self.room_conflicts.len()
            + self.class_conflicts.len()
            + self.unassigned_schedules.len()
    }

    /// Whether nothing was reported.
    pub fn is_clean(&self) -> bool {
        self.total_conflicts() == 0
    }
}

type Bucket<'a> = BTreeMap<ClassId, &'a ScheduledPeriod>;

/// Sub-groups one timeslot's periods by key, deduplicating by class id.
fn bucket_by<'a, K, I, F>(group: &[&'a ScheduledPeriod], keys: F) -> BTreeMap<K, Bucket<'a>>
where
    K: Ord,
    I: IntoIterator<Item = K>,
    F: Fn(&'a ScheduledPeriod) -> I,
{
    let mut buckets: BTreeMap<K, Bucket<'a>> = BTreeMap::new();
    for &period in group {
        for key in keys(period) {
            buckets
                .entry(key)
                .or_default()
                .insert(period.class_id, period);
        }
    }
    buckets
}

fn colliding(bucket: Bucket<'_>) -> Option<Vec<ScheduledPeriod>> {
    if bucket.len() < 2 {
        return None;
    }
    Some(bucket.into_values().cloned().collect())
}

/// Detects teacher, room and grade double-bookings plus unassigned periods.
///
/// Pure and total: an empty input yields an empty report.
pub fn detect_conflicts(periods: &[ScheduledPeriod]) -> ConflictReport {
    let mut by_timeslot: BTreeMap<&str, Vec<&ScheduledPeriod>> = BTreeMap::new();
    for period in periods {
        by_timeslot
            .entry(period.timeslot_id.as_str())
            .or_default()
            .push(period);
    }

    let mut report = ConflictReport::default();

    for (timeslot_id, group) in &by_timeslot {
        // A period with N teachers lands in N teacher buckets.
        let by_teacher = bucket_by(group, |p| p.teacher_ids.iter().copied());
        for (teacher_id, bucket) in by_teacher {
            let teacher_name = bucket
                .values()
                .find_map(|p| p.teacher_name(teacher_id))
                .map(str::to_string)
                .unwrap_or_else(|| format!("Teacher #{teacher_id}"));
            if let Some(periods) = colliding(bucket) {
                report.teacher_conflicts.push(TeacherConflict {
                    teacher_id,
                    teacher_name,
                    timeslot_id: timeslot_id.to_string(),
                    periods,
                });
            }
        }

        // Periods without a room have nothing to compare against.
        let by_room = bucket_by(group, |p| p.room_id);
        for (room_id, bucket) in by_room {
            if let Some(periods) = colliding(bucket) {
                report.room_conflicts.push(RoomConflict {
                    room_id,
                    room_name: periods[0].room_name.clone(),
                    timeslot_id: timeslot_id.to_string(),
                    periods,
                });
            }
        }

        let by_grade = bucket_by(group, |p| Some(p.grade_id.as_str()));
        for (grade_id, bucket) in by_grade {
            if let Some(periods) = colliding(bucket) {
                report.class_conflicts.push(ClassConflict {
                    grade_id: grade_id.to_string(),
                    grade_name: periods[0].grade_name.clone(),
                    timeslot_id: timeslot_id.to_string(),
                    periods,
                });
            }
        }
    }

    let mut unassigned: Vec<&ScheduledPeriod> =
        periods.iter().filter(|p| p.is_unassigned()).collect();
    unassigned.sort_by(|a, b| {
        (a.timeslot_id.as_str(), a.class_id).cmp(&(b.timeslot_id.as_str(), b.class_id))
    });
    unassigned.dedup_by_key(|p| p.class_id);
    report.unassigned_schedules = unassigned
        .into_iter()
        .map(UnassignedSchedule::from_period)
        .collect();

    debug!(
        periods = periods.len(),
        timeslots = by_timeslot.len(),
        teacher = report.teacher_conflicts.len(),
        room = report.room_conflicts.len(),
        class = report.class_conflicts.len(),
        unassigned = report.unassigned_schedules.len(),
        "conflict detection finished"
    );

    report
}

/// Fetches a term from the store and runs [`detect_conflicts`] over it.
#[instrument(skip(store))]
pub fn detect_term_conflicts<S: ScheduleStore>(
    store: &S,
    academic_year: u16,
    semester: Semester,
) -> Result<ConflictReport> {
    let periods = store.schedule_periods(academic_year, semester)?;
    Ok(detect_conflicts(&periods))
}
