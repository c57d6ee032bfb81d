//! Schedule HTTP adapter: DTOs, handlers, and routes for the booking form
//! and the admin calendar.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ClassificationQuery, ClassificationResponse, ErrorResponse, FieldErrorDto, SuggestionQuery,
    SuggestionResponse, ValidateScheduleRequest, ValidateScheduleResponse,
};
pub use handlers::ScheduleHandlers;
pub use routes::schedule_routes;
