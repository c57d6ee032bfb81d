//! Shared domain primitives.
//!
//! - `errors` - Validation errors for value object construction
//! - `time` - Time-of-day value object and weekday helpers

mod errors;
mod time;

pub use errors::ValidationError;
pub use time::{weekday_index, weekday_list, weekday_name, TimeOfDay};
