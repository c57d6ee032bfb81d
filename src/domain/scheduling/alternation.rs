//! PT Alternation Resolver - deterministic date-to-trainer mapping.
//!
//! The two Personal Training instructors alternate by weekday: even weekday
//! indices (Sunday = 0, Tuesday, Thursday, Saturday) map to the first roster
//! entry, odd indices (Monday, Wednesday, Friday) to the second. The mapping
//! depends on the calendar date only, never on time of day, existing
//! bookings, or workload.
//!
//! Alternation is a scheduling preference, NOT a hard constraint. Picking
//! the other trainer for a date produces an [`AlternationAdvisory`] that the
//! form logs and surfaces as a soft nudge; it must never be turned into a
//! blocking validation error. That is why the resolver returns an
//! [`InstructorSuggestion`] rather than an availability outcome.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::domain::foundation::weekday_index;

use super::roster::SchedulingRules;

/// The trainer the alternation rule favors for a date. Informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructorSuggestion {
    pub date: NaiveDate,
    pub instructor: String,
}

/// A non-blocking note that the chosen trainer differs from the one the
/// alternation rule favors for the date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternationAdvisory {
    pub date: NaiveDate,
    pub chosen: String,
    pub suggested: String,
}

impl fmt::Display for AlternationAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} usually covers Personal Training on {}; {} was chosen instead",
            self.suggested, self.date, self.chosen
        )
    }
}

/// Resolves the trainer the alternation rule favors for a date.
///
/// Pure function of the date's weekday: even index selects the first PT
/// roster entry, odd the second. Used to pre-select the trainer in the
/// class form and to derive the submit-time advisory.
pub fn resolve_alternating_instructor(
    date: NaiveDate,
    rules: &SchedulingRules,
) -> InstructorSuggestion {
    let roster = rules.personal_training_roster();
    let instructor = if weekday_index(date) % 2 == 0 {
        roster[0].clone()
    } else {
        roster[1].clone()
    };
    InstructorSuggestion { date, instructor }
}

/// Compares a chosen trainer against the alternation suggestion for a date.
///
/// Returns `None` when the choice follows the rule (matching is the same
/// case-insensitive substring containment used for roster checks) and a
/// non-blocking advisory otherwise. Callers log or display the advisory;
/// they never reject the booking because of it.
pub fn alternation_advisory(
    date: NaiveDate,
    chosen_instructor: &str,
    rules: &SchedulingRules,
) -> Option<AlternationAdvisory> {
    let suggestion = resolve_alternating_instructor(date, rules);
    let follows_rule = chosen_instructor
        .to_lowercase()
        .contains(&suggestion.instructor.to_lowercase());

    if follows_rule {
        None
    } else {
        Some(AlternationAdvisory {
            date,
            chosen: chosen_instructor.to_string(),
            suggested: suggestion.instructor,
        })
    }
}
