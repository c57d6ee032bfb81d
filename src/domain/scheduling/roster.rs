//! The studio's availability rule table.
//!
//! Immutable configuration consumed by the availability, alternation, and
//! capacity rules. The tables are injected into the rule functions (or the
//! process-wide [`default_rules`] is borrowed) instead of living in mutable
//! module state, so the rules stay pure and independently testable.
//!
//! Administrative schedule overrides are the concern of the external
//! work-schedule records; nothing in this crate mutates these tables.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::domain::foundation::TimeOfDay;

/// Hard ceiling on people in a Personal Training slot, across every session
/// scheduled at that slot. The two PT instructors share equipment and floor
/// space, so the limit belongs to the slot, not to a single session.
pub const PT_MAX_CAPACITY: u32 = 3;

/// A weekly availability window: a set of weekdays (Sunday = 0) and one
/// contiguous daily time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyWindow {
    pub days: Vec<u8>,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl WeeklyWindow {
    pub fn new(days: Vec<u8>, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { days, start, end }
    }

    /// Whether the window covers the given Sunday-based weekday index.
    pub fn covers_day(&self, weekday: u8) -> bool {
        self.days.contains(&weekday)
    }

    /// Whether the window covers the given start time. Bounds are inclusive.
    pub fn covers_time(&self, time: TimeOfDay) -> bool {
        self.start <= time && time <= self.end
    }
}

/// A Pilates roster entry: the instructor's name token and their weekly
/// window. Matching against form input is case-insensitive substring
/// containment, so "Chiara Rossi" matches the roster token "Chiara".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PilatesRosterEntry {
    pub name: String,
    pub window: Option<WeeklyWindow>,
}

impl PilatesRosterEntry {
    pub fn new(name: impl Into<String>, window: WeeklyWindow) -> Self {
        Self {
            name: name.into(),
            window: Some(window),
        }
    }

    /// Roster entry without a configured window. Should never exist in a
    /// well-formed table; the availability checker denies with a
    /// configuration-gap reason when it encounters one.
    pub fn unscheduled(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            window: None,
        }
    }

    /// Case-insensitive substring match of this entry's name token against
    /// a raw instructor name from the form.
    pub fn matches(&self, raw_name: &str) -> bool {
        raw_name.to_lowercase().contains(&self.name.to_lowercase())
    }
}

/// The complete rule table: Pilates roster with weekly windows, the
/// two-person Personal Training roster, and the PT slot ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchedulingRules {
    pilates_roster: Vec<PilatesRosterEntry>,
    personal_training_roster: [String; 2],
    pt_max_capacity: u32,
}

impl SchedulingRules {
    /// Builds a rule table from explicit parts. Test seams and future
    /// studios use this; production uses [`SchedulingRules::studio_default`].
    pub fn new(
        pilates_roster: Vec<PilatesRosterEntry>,
        personal_training_roster: [String; 2],
        pt_max_capacity: u32,
    ) -> Self {
        Self {
            pilates_roster,
            personal_training_roster,
            pt_max_capacity,
        }
    }

    /// The studio's current table.
    ///
    /// # Roster
    ///
    /// | Instructor | Days | Window |
    /// |------------|------|--------|
    /// | Chiara | Wed-Sun | 10:00-20:00 |
    /// | Giulia | Wed-Sun | 10:00-20:00 |
    /// | Emma | Mon-Fri | 10:00-20:00 |
    /// | Marco, Sara | Personal Training | alternation + slot ceiling |
    pub fn studio_default() -> Self {
        let ten = TimeOfDay::new(10, 0).expect("valid time");
        let twenty = TimeOfDay::new(20, 0).expect("valid time");
        let wed_to_sun = vec![3, 4, 5, 6, 0];
        let mon_to_fri = vec![1, 2, 3, 4, 5];

        Self {
            pilates_roster: vec![
                PilatesRosterEntry::new(
                    "Chiara",
                    WeeklyWindow::new(wed_to_sun.clone(), ten, twenty),
                ),
                PilatesRosterEntry::new("Giulia", WeeklyWindow::new(wed_to_sun, ten, twenty)),
                PilatesRosterEntry::new("Emma", WeeklyWindow::new(mon_to_fri, ten, twenty)),
            ],
            personal_training_roster: ["Marco".to_string(), "Sara".to_string()],
            pt_max_capacity: PT_MAX_CAPACITY,
        }
    }

    /// Finds the Pilates roster entry matching a raw instructor name, if any.
    pub fn find_pilates_entry(&self, raw_name: &str) -> Option<&PilatesRosterEntry> {
        self.pilates_roster
            .iter()
            .find(|entry| entry.matches(raw_name))
    }

    /// Names on the Pilates roster, for denial messages.
    pub fn pilates_names(&self) -> Vec<&str> {
        self.pilates_roster
            .iter()
            .map(|entry| entry.name.as_str())
            .collect()
    }

    /// Whether a raw instructor name matches either PT roster entry.
    pub fn is_personal_trainer(&self, raw_name: &str) -> bool {
        let lowered = raw_name.to_lowercase();
        self.personal_training_roster
            .iter()
            .any(|name| lowered.contains(&name.to_lowercase()))
    }

    /// The two Personal Training instructors, in alternation order.
    pub fn personal_training_roster(&self) -> &[String; 2] {
        &self.personal_training_roster
    }

    /// The PT slot enrollment ceiling.
    pub fn pt_max_capacity(&self) -> u32 {
        self.pt_max_capacity
    }
}

impl Default for SchedulingRules {
    fn default() -> Self {
        Self::studio_default()
    }
}

static DEFAULT_RULES: Lazy<SchedulingRules> = Lazy::new(SchedulingRules::studio_default);

/// Borrow the process-wide default rule table.
pub fn default_rules() -> &'static SchedulingRules {
    &DEFAULT_RULES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_three_pilates_instructors() {
        let rules = SchedulingRules::studio_default();
        assert_eq!(rules.pilates_names(), vec!["Chiara", "Giulia", "Emma"]);
    }

    #[test]
    fn default_table_has_two_personal_trainers() {
        let rules = SchedulingRules::studio_default();
        assert_eq!(rules.personal_training_roster()[0], "Marco");
        assert_eq!(rules.personal_training_roster()[1], "Sara");
    }

    #[test]
    fn pt_ceiling_is_three() {
        assert_eq!(SchedulingRules::studio_default().pt_max_capacity(), 3);
        assert_eq!(PT_MAX_CAPACITY, 3);
    }

    #[test]
    fn emma_works_monday_to_friday() {
        let rules = SchedulingRules::studio_default();
        let emma = rules.find_pilates_entry("Emma").unwrap();
        let window = emma.window.as_ref().unwrap();
        assert_eq!(window.days, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn chiara_and_giulia_work_wednesday_to_sunday() {
        let rules = SchedulingRules::studio_default();
        for name in ["Chiara", "Giulia"] {
            let entry = rules.find_pilates_entry(name).unwrap();
            let window = entry.window.as_ref().unwrap();
            assert_eq!(window.days, vec![3, 4, 5, 6, 0], "{name}");
        }
    }

    #[test]
    fn all_windows_run_ten_to_twenty() {
        let rules = SchedulingRules::studio_default();
        for name in rules.pilates_names() {
            let entry = rules.find_pilates_entry(name).unwrap();
            let window = entry.window.as_ref().unwrap();
            assert_eq!(window.start.to_string(), "10:00");
            assert_eq!(window.end.to_string(), "20:00");
        }
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let rules = SchedulingRules::studio_default();
        assert!(rules.find_pilates_entry("chiara").is_some());
        assert!(rules.find_pilates_entry("Chiara Rossi").is_some());
        assert!(rules.find_pilates_entry("Bianca").is_none());

        assert!(rules.is_personal_trainer("MARCO"));
        assert!(rules.is_personal_trainer("Sara Bianchi"));
        assert!(!rules.is_personal_trainer("Emma"));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let window = WeeklyWindow::new(
            vec![1],
            TimeOfDay::new(10, 0).unwrap(),
            TimeOfDay::new(20, 0).unwrap(),
        );
        assert!(window.covers_time(TimeOfDay::new(10, 0).unwrap()));
        assert!(window.covers_time(TimeOfDay::new(20, 0).unwrap()));
        assert!(!window.covers_time(TimeOfDay::new(9, 59).unwrap()));
        assert!(!window.covers_time(TimeOfDay::new(20, 1).unwrap()));
    }

    #[test]
    fn default_rules_returns_the_studio_table() {
        assert_eq!(*default_rules(), SchedulingRules::studio_default());
    }
}
