//! Availability Checker - roster, weekday, and time-window admission rules.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::domain::foundation::{weekday_index, weekday_list, TimeOfDay};

use super::category::ClassCategory;
use super::roster::SchedulingRules;

/// Why an instructor/date/time combination was denied.
///
/// Every variant renders to an administrator-facing message specific enough
/// to self-explain the violated rule: who is allowed, on which days, in
/// which window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DenialReason {
    /// The instructor does not match any Pilates roster name.
    NotOnPilatesRoster { instructor: String, roster: Vec<String> },
    /// The instructor matched the roster but has no weekly window
    /// configured. A well-formed rule table never triggers this; it is
    /// handled gracefully instead of panicking.
    MissingWeeklySchedule { instructor: String },
    /// The date falls outside the instructor's configured weekdays.
    OutsideWorkingDays { instructor: String, allowed_days: Vec<u8> },
    /// The start time falls outside the instructor's daily window.
    OutsideDailyWindow {
        instructor: String,
        window_start: TimeOfDay,
        window_end: TimeOfDay,
    },
    /// The start time was not a zero-padded 24-hour "HH:MM" string.
    InvalidStartTime { value: String },
    /// The instructor does not match either Personal Training roster name.
    NotOnPersonalTrainingRoster { instructor: String, roster: Vec<String> },
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotOnPilatesRoster { instructor, roster } => write!(
                f,
                "{} does not teach Pilates classes; choose one of: {}",
                instructor,
                roster.join(", ")
            ),
            Self::MissingWeeklySchedule { instructor } => write!(
                f,
                "No weekly schedule is configured for {}; the roster needs fixing before \
                 classes can be booked",
                instructor
            ),
            Self::OutsideWorkingDays {
                instructor,
                allowed_days,
            } => write!(
                f,
                "{} is only available on {}",
                instructor,
                weekday_list(allowed_days)
            ),
            Self::OutsideDailyWindow {
                instructor,
                window_start,
                window_end,
            } => write!(
                f,
                "{} is only available between {} and {}",
                instructor, window_start, window_end
            ),
            Self::InvalidStartTime { value } => write!(
                f,
                "Start time '{}' is not a valid 24-hour HH:MM time",
                value
            ),
            Self::NotOnPersonalTrainingRoster { roster, .. } => write!(
                f,
                "Personal Training sessions are taught by {}",
                roster.join(" or ")
            ),
        }
    }
}

/// Result of an availability check. Denial carries the reason; this is a
/// returned value, never an error, and checking never panics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum AvailabilityOutcome {
    Available,
    Denied { reason: DenialReason },
}

impl AvailabilityOutcome {
    pub fn denied(reason: DenialReason) -> Self {
        Self::Denied { reason }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }

    /// Administrator-facing denial message, if denied.
    pub fn reason(&self) -> Option<String> {
        match self {
            Self::Available => None,
            Self::Denied { reason } => Some(reason.to_string()),
        }
    }
}

/// Checks whether an instructor can run a class of the given category at the
/// given date and start time.
///
/// # Algorithm
///
/// Roster matching is case-insensitive substring containment, so a fuller
/// form value like "Chiara Rossi" matches the roster token "Chiara".
///
/// - Pilates: the instructor must match the Pilates roster, the date's
///   weekday (Sunday = 0) must be in their configured day set, and the start
///   time must fall inside their daily window (bounds inclusive).
/// - Personal Training: the instructor must match one of the two PT roster
///   names; day and time are unrestricted here because PT admission is
///   governed by the alternation rule and the slot ceiling, enforced by
///   their own checks.
///
/// Pure and read-only; safe to call from any number of form event handlers.
pub fn check_availability(
    instructor_name: &str,
    date: NaiveDate,
    start_time: &str,
    category: ClassCategory,
    rules: &SchedulingRules,
) -> AvailabilityOutcome {
    match category {
        ClassCategory::Pilates => check_pilates(instructor_name, date, start_time, rules),
        ClassCategory::PersonalTraining => check_personal_training(instructor_name, rules),
    }
}

fn check_pilates(
    instructor_name: &str,
    date: NaiveDate,
    start_time: &str,
    rules: &SchedulingRules,
) -> AvailabilityOutcome {
    let entry = match rules.find_pilates_entry(instructor_name) {
        Some(entry) => entry,
        None => {
            return AvailabilityOutcome::denied(DenialReason::NotOnPilatesRoster {
                instructor: instructor_name.to_string(),
                roster: rules.pilates_names().iter().map(|s| s.to_string()).collect(),
            })
        }
    };

    let window = match &entry.window {
        Some(window) => window,
        None => {
            return AvailabilityOutcome::denied(DenialReason::MissingWeeklySchedule {
                instructor: entry.name.clone(),
            })
        }
    };

    if !window.covers_day(weekday_index(date)) {
        return AvailabilityOutcome::denied(DenialReason::OutsideWorkingDays {
            instructor: entry.name.clone(),
            allowed_days: window.days.clone(),
        });
    }

    let time = match TimeOfDay::parse(start_time) {
        Ok(time) => time,
        Err(_) => {
            return AvailabilityOutcome::denied(DenialReason::InvalidStartTime {
                value: start_time.to_string(),
            })
        }
    };

    if !window.covers_time(time) {
        return AvailabilityOutcome::denied(DenialReason::OutsideDailyWindow {
            instructor: entry.name.clone(),
            window_start: window.start,
            window_end: window.end,
        });
    }

    AvailabilityOutcome::Available
}

fn check_personal_training(instructor_name: &str, rules: &SchedulingRules) -> AvailabilityOutcome {
    if rules.is_personal_trainer(instructor_name) {
        AvailabilityOutcome::Available
    } else {
        AvailabilityOutcome::denied(DenialReason::NotOnPersonalTrainingRoster {
            instructor: instructor_name.to_string(),
            roster: rules.personal_training_roster().to_vec(),
        })
    }
}
