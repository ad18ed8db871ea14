//! Lock template resolution.
//!
//! Expands a [`LockTemplate`] over the grade × timeslot product of a term,
//! resolving its room, subject and teacher references along the way.
//!
//! # Pipeline
//! 1. Grade filter: no match is an error.
//! 2. Timeslot filter: no match is an error.
//! 3. Room: explicit id, else lookup by name, else the first room with a
//!    warning. No rooms at all is an error.
//! 4. Subject: an unknown code is a warning; the code is used as given.
//! 5. Responsibility: first row for the subject, else the first row with
//!    a warning. No rows at all is an error.
//! 6. Expansion: timeslots outer, grades inner.
//!
//! Errors halt the pipeline with no locks. Warnings never halt: a resource
//! that can be created later or substituted must not block the template.
//!
//! All-day templates filter timeslots like any other template, then skip
//! the cells that are a break for the grade's cohort.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::breaktime::is_break_compatible;
use crate::models::{
    Grade, LockTemplate, LockTemplateConfig, RespId, Room, RoomId, Semester, Subject,
    TeacherResponsibility, Timeslot,
};

/// A template plus the reference data of the term it is applied to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyTemplateInput {
    pub template: LockTemplate,
    pub academic_year: u16,
    pub semester: Semester,
    pub config_id: String,
    pub available_grades: Vec<Grade>,
    pub available_timeslots: Vec<Timeslot>,
    pub available_rooms: Vec<Room>,
    pub available_subjects: Vec<Subject>,
    pub available_responsibilities: Vec<TeacherResponsibility>,
}

impl ApplyTemplateInput {
    /// Creates an input with empty reference collections.
    pub fn new(template: LockTemplate, academic_year: u16, semester: Semester) -> Self {
        Self {
            template,
            academic_year,
            semester,
            config_id: format!("{}-{}", semester.number(), academic_year),
            available_grades: Vec::new(),
            available_timeslots: Vec::new(),
            available_rooms: Vec::new(),
            available_subjects: Vec::new(),
            available_responsibilities: Vec::new(),
        }
    }

    /// Sets the grades.
    pub fn with_grades(mut self, grades: Vec<Grade>) -> Self {
        self.available_grades = grades;
        self
    }

    /// Sets the timeslots.
    pub fn with_timeslots(mut self, timeslots: Vec<Timeslot>) -> Self {
        self.available_timeslots = timeslots;
        self
    }

    /// Sets the rooms.
    pub fn with_rooms(mut self, rooms: Vec<Room>) -> Self {
        self.available_rooms = rooms;
        self
    }

    /// Sets the subjects.
    pub fn with_subjects(mut self, subjects: Vec<Subject>) -> Self {
        self.available_subjects = subjects;
        self
    }

    /// Sets the responsibilities.
    pub fn with_responsibilities(mut self, responsibilities: Vec<TeacherResponsibility>) -> Self {
        self.available_responsibilities = responsibilities;
        self
    }
}

/// One concrete lock produced by a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedLock {
    pub subject_code: String,
    pub room_id: RoomId,
    pub timeslot_id: String,
    pub grade_id: String,
    pub resp_id: RespId,
}

/// Locks plus the diagnostics collected while resolving them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateResolution {
    pub locks: Vec<ResolvedLock>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

/// Whether a template can be applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateValidation {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// What applying a template would create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSummary {
    pub total_locks: usize,
    pub grade_count: usize,
    pub timeslot_count: usize,
    /// Distinct grade ids in output order.
    pub affected_grades: Vec<String>,
    /// Distinct timeslot ids in output order.
    pub affected_timeslots: Vec<String>,
}

/// Warnings and errors gathered across independent resolution steps.
#[derive(Debug, Default)]
struct Diagnostics {
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl Diagnostics {
    fn warn(&mut self, message: String) {
        warn!(%message, "lock template degraded");
        self.warnings.push(message);
    }

    fn fail(&mut self, message: String) {
        warn!(%message, "lock template rejected");
        self.errors.push(message);
    }

    fn finish(self, locks: Vec<ResolvedLock>) -> TemplateResolution {
        TemplateResolution {
            locks,
            warnings: self.warnings,
            errors: self.errors,
        }
    }
}

fn resolve_room(config: &LockTemplateConfig, rooms: &[Room], diag: &mut Diagnostics) -> Option<RoomId> {
    if let Some(room_id) = config.room_id {
        return Some(room_id);
    }
    if let Some(room) = rooms.iter().find(|r| r.name == config.room_name) {
        return Some(room.room_id);
    }
    match rooms.first() {
        Some(fallback) => {
            diag.warn(format!(
                "room \"{}\" not found, using \"{}\" instead",
                config.room_name, fallback.name
            ));
            Some(fallback.room_id)
        }
        None => {
            diag.fail("no rooms available".to_string());
            None
        }
    }
}

fn check_subject(config: &LockTemplateConfig, subjects: &[Subject], diag: &mut Diagnostics) {
    if !subjects.iter().any(|s| s.subject_code == config.subject_code) {
        diag.warn(format!(
            "subject \"{}\" does not exist yet and must be created first",
            config.subject_code
        ));
    }
}

fn resolve_responsibility(
    config: &LockTemplateConfig,
    responsibilities: &[TeacherResponsibility],
    diag: &mut Diagnostics,
) -> Option<RespId> {
    if let Some(resp) = responsibilities
        .iter()
        .find(|r| r.subject_code == config.subject_code)
    {
        return Some(resp.resp_id);
    }
    match responsibilities.first() {
        Some(fallback) => {
            diag.warn(format!(
                "no teacher assigned to subject \"{}\", using responsibility {} of teacher {} instead",
                config.subject_code, fallback.resp_id, fallback.teacher_id
            ));
            Some(fallback.resp_id)
        }
        None => {
            diag.fail("no teacher responsibilities available".to_string());
            None
        }
    }
}

/// Resolves a template into concrete locks.
pub fn resolve_template(input: &ApplyTemplateInput) -> TemplateResolution {
    let config = &input.template.config;
    let mut diag = Diagnostics::default();

    let grades: Vec<&Grade> = input
        .available_grades
        .iter()
        .filter(|g| config.grade_filter.matches(g))
        .collect();
    if grades.is_empty() {
        diag.fail("no grades match the template's grade filter".to_string());
        return diag.finish(Vec::new());
    }

    let timeslots: Vec<&Timeslot> = input
        .available_timeslots
        .iter()
        .filter(|t| config.timeslot_filter.matches(t))
        .collect();
    if timeslots.is_empty() {
        diag.fail("no timeslots match the template's day and period filter".to_string());
        return diag.finish(Vec::new());
    }

    let Some(room_id) = resolve_room(config, &input.available_rooms, &mut diag) else {
        return diag.finish(Vec::new());
    };

    check_subject(config, &input.available_subjects, &mut diag);

    let Some(resp_id) =
        resolve_responsibility(config, &input.available_responsibilities, &mut diag)
    else {
        return diag.finish(Vec::new());
    };

    let all_day = config.timeslot_filter.all_day;
    let mut locks = Vec::with_capacity(timeslots.len() * grades.len());
    let mut skipped_breaks = 0usize;

    for timeslot in &timeslots {
        for grade in &grades {
            if all_day && !is_break_compatible(timeslot.breaktime, grade.level) {
                skipped_breaks += 1;
                continue;
            }
            locks.push(ResolvedLock {
                subject_code: config.subject_code.clone(),
                room_id,
                timeslot_id: timeslot.timeslot_id.clone(),
                grade_id: grade.grade_id.clone(),
                resp_id,
            });
        }
    }

    if skipped_breaks > 0 {
        diag.warn(format!(
            "skipped {skipped_breaks} break-period cells while expanding all-day template"
        ));
    }

    debug!(
        template = %input.template.id,
        config_id = %input.config_id,
        grades = grades.len(),
        timeslots = timeslots.len(),
        locks = locks.len(),
        "lock template resolved"
    );

    diag.finish(locks)
}

/// A template is valid when it yields at least one lock and no errors.
pub fn validate_template(input: &ApplyTemplateInput) -> TemplateValidation {
    let resolution = resolve_template(input);
    TemplateValidation {
        valid: !resolution.locks.is_empty() && resolution.errors.is_empty(),
        errors: resolution.errors,
    }
}

/// Counts what a template would create, from the resolved output.
pub fn template_summary(input: &ApplyTemplateInput) -> TemplateSummary {
    let locks = resolve_template(input).locks;

    let mut seen_grades = HashSet::new();
    let mut seen_timeslots = HashSet::new();
    let mut affected_grades = Vec::new();
    let mut affected_timeslots = Vec::new();
    for lock in &locks {
        if seen_grades.insert(lock.grade_id.as_str()) {
            affected_grades.push(lock.grade_id.clone());
        }
        if seen_timeslots.insert(lock.timeslot_id.as_str()) {
            affected_timeslots.push(lock.timeslot_id.clone());
        }
    }

    TemplateSummary {
        total_locks: locks.len(),
        grade_count: affected_grades.len(),
        timeslot_count: affected_timeslots.len(),
        affected_grades,
        affected_timeslots,
    }
}
