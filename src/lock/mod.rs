//! Lock template resolution.
//!
//! Turns a declarative [`LockTemplate`](crate::models::LockTemplate) into
//! concrete locked periods, degrading to warnings when a referenced room,
//! subject or teacher is missing but a substitute exists.
//!
//! # Usage
//!
//! ```
//! use u_timetable::lock::{resolve_template, ApplyTemplateInput};
//! use u_timetable::models::{
//!     template_by_id, DayOfWeek, Grade, Room, Semester, TeacherResponsibility, Timeslot,
//! };
//!
//! let template = template_by_id("lunch-junior").unwrap();
//! let timeslots = DayOfWeek::WEEKDAYS
//!     .iter()
//!     .map(|&day| Timeslot::for_term(Semester::First, 2567, day, 4))
//!     .collect();
//!
//! let input = ApplyTemplateInput::new(template, 2567, Semester::First)
//!     .with_grades(vec![Grade::new("101", 1), Grade::new("401", 4)])
//!     .with_timeslots(timeslots)
//!     .with_rooms(vec![Room::new(1, "Cafeteria")])
//!     .with_responsibilities(vec![TeacherResponsibility::new(1, 7, "LUNCH-JR", "101", 1)]);
//!
//! let resolution = resolve_template(&input);
//! assert!(resolution.errors.is_empty());
//! assert_eq!(resolution.locks.len(), 5);
//! ```

mod resolver;

pub use resolver::{
    resolve_template, template_summary, validate_template, ApplyTemplateInput, ResolvedLock,
    TemplateResolution, TemplateSummary, TemplateValidation,
};
