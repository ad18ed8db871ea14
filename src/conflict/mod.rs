//! Conflict detection.
//!
//! - [`detect_conflicts`]: term-wide report of teacher, room and grade
//!   double-bookings plus unassigned periods.
//! - [`check_placement`]: first blocking conflict for one proposed period.
//!
//! Both are pure functions over already-fetched periods; nothing here
//! reassigns or repairs a schedule.

mod detector;
mod placement;

pub use detector::{
    detect_conflicts, detect_term_conflicts, ClassConflict, ConflictReport, MissingResource,
    RoomConflict, TeacherConflict, UnassignedSchedule,
};
pub use placement::{check_placement, PlacementCheck, PlacementConflict, PlacementRequest};
