//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, time-of-day, weekdays)
//! - `scheduling` - The class-scheduling and instructor-assignment rules

pub mod foundation;
pub mod scheduling;
