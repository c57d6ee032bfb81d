//! Scheduling Module - the class-scheduling and instructor-assignment rules.
//!
//! # Components
//!
//! - `category` - Keyword classification of class types and calendar colors
//! - `roster` - The immutable availability rule table
//! - `availability` - Roster/weekday/time-window admission checks
//! - `alternation` - Date-to-trainer alternation for Personal Training
//! - `capacity` - The Personal Training slot enrollment ceiling
//!
//! # Design Philosophy
//!
//! Every rule is a pure, synchronous function over caller-supplied inputs
//! and an injected [`SchedulingRules`] table. Violations come back as
//! values with administrator-facing reasons, never as errors or panics, so
//! the booking form can attach them to fields and re-run checks on every
//! keystroke without coordination.

mod alternation;
mod availability;
mod capacity;
mod category;
mod roster;

pub use alternation::{
    alternation_advisory, resolve_alternating_instructor, AlternationAdvisory,
    InstructorSuggestion,
};
pub use availability::{check_availability, AvailabilityOutcome, DenialReason};
pub use capacity::{check_pt_limit_reached, CapacityOutcome, SessionSlot};
pub use category::{CardColorScheme, ClassCategory, ClassTypeDescriptor};
pub use roster::{
    default_rules, PilatesRosterEntry, SchedulingRules, WeeklyWindow, PT_MAX_CAPACITY,
};
