//! HTTP routes for the schedule endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{classify_class_type, suggest_instructor, validate_schedule, ScheduleHandlers};

/// Creates the schedule router with all endpoints.
pub fn schedule_routes(handlers: ScheduleHandlers) -> Router {
    Router::new()
        .route("/validate", post(validate_schedule))
        .route("/suggestion", get(suggest_instructor))
        .route("/classification", get(classify_class_type))
        .with_state(handlers)
}
