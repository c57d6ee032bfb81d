//! Capacity/Conflict Checker - the Personal Training slot ceiling.
//!
//! The ceiling applies to the slot, not to a single session: enrollment is
//! summed across every session scheduled at the same date and start time,
//! whichever of the two interchangeable trainers runs them, because they
//! share equipment and floor space. The checker only reports the aggregate;
//! it does not itself prevent a second PT session from being created at an
//! occupied slot.
//!
//! The session list is a caller-supplied snapshot. Two administrators
//! validating against stale snapshots can both pass and overrun the ceiling
//! once both writes land; closing that race needs a server-side constraint
//! in the external store and is out of scope here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::TimeOfDay;

use super::roster::SchedulingRules;

/// A scheduled class occurrence as read from the store, reduced to what the
/// conflict check needs. `start_time` is either a full ISO timestamp
/// ("2024-06-04T15:00:00") or a bare "HH:MM" already scoped to the queried
/// date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSlot {
    pub id: Option<String>,
    pub start_time: String,
    pub max_capacity: u32,
    #[serde(default)]
    pub enrolled_count: Option<u32>,
}

impl SessionSlot {
    pub fn new(
        id: impl Into<String>,
        start_time: impl Into<String>,
        max_capacity: u32,
        enrolled_count: u32,
    ) -> Self {
        Self {
            id: Some(id.into()),
            start_time: start_time.into(),
            max_capacity,
            enrolled_count: Some(enrolled_count),
        }
    }

    fn enrolled(&self) -> u32 {
        self.enrolled_count.unwrap_or(0)
    }
}

/// Result of the slot ceiling check. A returned value, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapacityOutcome {
    pub reached: bool,
    /// Total enrollment counted at the slot, excluded session aside.
    pub enrolled: u32,
    pub reason: Option<String>,
}

impl CapacityOutcome {
    fn open(enrolled: u32) -> Self {
        Self {
            reached: false,
            enrolled,
            reason: None,
        }
    }

    fn reached(enrolled: u32, date: NaiveDate, time: TimeOfDay, ceiling: u32) -> Self {
        Self {
            reached: true,
            enrolled,
            reason: Some(format!(
                "The {} Personal Training slot on {} is full: {} of {} places are taken \
                 across its sessions",
                time, date, enrolled, ceiling
            )),
        }
    }
}

/// Start of a session normalized to date + "HH:MM" granularity.
#[derive(Debug, PartialEq, Eq)]
enum SlotStart {
    Dated { date: String, time: TimeOfDay },
    TimeOnly(TimeOfDay),
}

fn normalize_start(raw: &str) -> Option<SlotStart> {
    if let Some(separator) = raw.find(|c| c == 'T' || c == ' ') {
        let (date, rest) = raw.split_at(separator);
        let time = TimeOfDay::parse(rest.get(1..6)?).ok()?;
        return Some(SlotStart::Dated {
            date: date.to_string(),
            time,
        });
    }
    TimeOfDay::parse(raw.get(..5)?).ok().map(SlotStart::TimeOnly)
}

/// Checks whether the Personal Training ceiling is already met at the target
/// date and start time.
///
/// # Algorithm
///
/// 1. Sessions are matched to the target at date+"HH:MM" granularity; a
///    bare "HH:MM" start is treated as already scoped to the target date.
/// 2. The session under edit (`exclude_session_id`) is skipped so it never
///    counts against itself.
/// 3. Enrollment (absent counts as 0) is summed across the matches; the
///    ceiling is met when the sum reaches `rules.pt_max_capacity()`.
///
/// Sessions whose start cannot be normalized, and the target itself when its
/// `start_time` is malformed, simply never match; the availability check
/// surfaces malformed times to the administrator.
pub fn check_pt_limit_reached(
    date: NaiveDate,
    start_time: &str,
    existing_sessions: &[SessionSlot],
    exclude_session_id: Option<&str>,
    rules: &SchedulingRules,
) -> CapacityOutcome {
    let target_time = match TimeOfDay::parse(start_time) {
        Ok(time) => time,
        Err(_) => return CapacityOutcome::open(0),
    };
    let target_date = date.format("%Y-%m-%d").to_string();

    let enrolled: u32 = existing_sessions
        .iter()
        .filter(|session| match (&session.id, exclude_session_id) {
            (Some(id), Some(excluded)) => id != excluded,
            _ => true,
        })
        .filter(|session| match normalize_start(&session.start_time) {
            Some(SlotStart::Dated { date, time }) => date == target_date && time == target_time,
            Some(SlotStart::TimeOnly(time)) => time == target_time,
            None => false,
        })
        .map(SessionSlot::enrolled)
        .sum();

    if enrolled >= rules.pt_max_capacity() {
        CapacityOutcome::reached(enrolled, date, target_time, rules.pt_max_capacity())
    } else {
        CapacityOutcome::open(enrolled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> SchedulingRules {
        SchedulingRules::studio_default()
    }

    fn tuesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 4).unwrap()
    }

    #[test]
    fn empty_schedule_is_open() {
        let outcome = check_pt_limit_reached(tuesday(), "15:00", &[], None, &rules());
        assert!(!outcome.reached);
        assert_eq!(outcome.enrolled, 0);
        assert_eq!(outcome.reason, None);
    }

    #[test]
    fn two_enrolled_at_slot_is_still_open() {
        let sessions = vec![SessionSlot::new("a", "2024-06-04T15:00:00", 3, 2)];
        let outcome = check_pt_limit_reached(tuesday(), "15:00", &sessions, None, &rules());
        assert!(!outcome.reached);
        assert_eq!(outcome.enrolled, 2);
    }

    #[test]
    fn three_enrolled_at_slot_is_reached() {
        let sessions = vec![SessionSlot::new("a", "2024-06-04T15:00:00", 3, 3)];
        let outcome = check_pt_limit_reached(tuesday(), "15:00", &sessions, None, &rules());
        assert!(outcome.reached);
        assert_eq!(outcome.enrolled, 3);
        let reason = outcome.reason.unwrap();
        assert!(reason.contains("15:00"));
        assert!(reason.contains("2024-06-04"));
    }

    #[test]
    fn enrollment_sums_across_sessions_at_the_same_slot() {
        // Two different PT sessions at the identical slot share the ceiling.
        let sessions = vec![
            SessionSlot::new("a", "2024-06-04T15:00:00", 3, 2),
            SessionSlot::new("b", "2024-06-04T15:00:00", 3, 1),
        ];
        let outcome = check_pt_limit_reached(tuesday(), "15:00", &sessions, None, &rules());
        assert!(outcome.reached);
        assert_eq!(outcome.enrolled, 3);
    }

    #[test]
    fn other_slots_do_not_count() {
        let sessions = vec![
            SessionSlot::new("a", "2024-06-04T16:00:00", 3, 3),
            SessionSlot::new("b", "2024-06-05T15:00:00", 3, 3),
        ];
        let outcome = check_pt_limit_reached(tuesday(), "15:00", &sessions, None, &rules());
        assert!(!outcome.reached);
        assert_eq!(outcome.enrolled, 0);
    }

    #[test]
    fn session_under_edit_does_not_count_against_itself() {
        let sessions = vec![SessionSlot::new("a", "2024-06-04T15:00:00", 3, 3)];
        let outcome =
            check_pt_limit_reached(tuesday(), "15:00", &sessions, Some("a"), &rules());
        assert!(!outcome.reached);
        assert_eq!(outcome.enrolled, 0);
    }

    #[test]
    fn excluding_one_session_still_counts_the_others() {
        let sessions = vec![
            SessionSlot::new("a", "2024-06-04T15:00:00", 3, 2),
            SessionSlot::new("b", "2024-06-04T15:00:00", 3, 3),
        ];
        let outcome =
            check_pt_limit_reached(tuesday(), "15:00", &sessions, Some("a"), &rules());
        assert!(outcome.reached);
        assert_eq!(outcome.enrolled, 3);
    }

    #[test]
    fn missing_enrolled_count_defaults_to_zero() {
        let sessions = vec![SessionSlot {
            id: Some("a".to_string()),
            start_time: "2024-06-04T15:00:00".to_string(),
            max_capacity: 3,
            enrolled_count: None,
        }];
        let outcome = check_pt_limit_reached(tuesday(), "15:00", &sessions, None, &rules());
        assert!(!outcome.reached);
        assert_eq!(outcome.enrolled, 0);
    }

    #[test]
    fn bare_time_starts_are_scoped_to_the_target_date() {
        let sessions = vec![
            SessionSlot::new("a", "15:00", 3, 2),
            SessionSlot::new("b", "16:00", 3, 3),
        ];
        let outcome = check_pt_limit_reached(tuesday(), "15:00", &sessions, None, &rules());
        assert!(!outcome.reached);
        assert_eq!(outcome.enrolled, 2);
    }

    #[test]
    fn space_separated_timestamps_normalize_too() {
        let sessions = vec![SessionSlot::new("a", "2024-06-04 15:00:00", 3, 3)];
        let outcome = check_pt_limit_reached(tuesday(), "15:00", &sessions, None, &rules());
        assert!(outcome.reached);
    }

    #[test]
    fn unparseable_session_starts_never_match() {
        let sessions = vec![SessionSlot::new("a", "soon", 3, 3)];
        let outcome = check_pt_limit_reached(tuesday(), "15:00", &sessions, None, &rules());
        assert!(!outcome.reached);
    }

    #[test]
    fn sessions_without_ids_are_never_excluded() {
        let sessions = vec![SessionSlot {
            id: None,
            start_time: "2024-06-04T15:00:00".to_string(),
            max_capacity: 3,
            enrolled_count: Some(3),
        }];
        let outcome =
            check_pt_limit_reached(tuesday(), "15:00", &sessions, Some("a"), &rules());
        assert!(outcome.reached);
    }
}
