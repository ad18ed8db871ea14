//! Break-time compatibility rule.
//!
//! Junior and senior students eat lunch at different, possibly overlapping
//! periods. A subject may be taught to the *other* cohort during a break
//! reserved for one cohort, but never during a universal break.
//!
//! | Breaktime | Levels 1-3 | Levels 4-6 |
//! |-----------|-----------|-----------|
//! | NOT_BREAK | yes | yes |
//! | BREAK_JUNIOR | no | yes |
//! | BREAK_SENIOR | yes | no |
//! | BREAK_BOTH | no | no |

use crate::models::{BreaktimeKind, Cohort};

/// Whether a new academic assignment for a grade of `grade_level` may be
/// placed in a timeslot of the given break kind.
///
/// Levels outside 1-6 belong to neither cohort, so only `BREAK_BOTH`
/// blocks them.
pub fn is_break_compatible(kind: BreaktimeKind, grade_level: u8) -> bool {
    match kind {
        BreaktimeKind::NotBreak => true,
        BreaktimeKind::BreakBoth => false,
        BreaktimeKind::BreakJunior => Cohort::of_level(grade_level) != Some(Cohort::Junior),
        BreaktimeKind::BreakSenior => Cohort::of_level(grade_level) != Some(Cohort::Senior),
    }
}
