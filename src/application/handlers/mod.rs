//! Application handlers orchestrating the scheduling rules for the form.

mod suggest_instructor;
mod validate_class_schedule;

pub use suggest_instructor::{SuggestInstructorHandler, SuggestInstructorQuery};
pub use validate_class_schedule::{
    FieldError, FormField, ScheduleValidation, ValidateClassScheduleCommand,
    ValidateClassScheduleHandler,
};
