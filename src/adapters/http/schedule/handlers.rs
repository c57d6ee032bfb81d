//! HTTP handlers for the schedule endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;

use crate::application::handlers::{
    SuggestInstructorHandler, SuggestInstructorQuery, ValidateClassScheduleCommand,
    ValidateClassScheduleHandler,
};
use crate::domain::scheduling::{ClassCategory, ClassTypeDescriptor};
use crate::ports::SessionReadError;

use super::dto::{
    ClassificationQuery, ClassificationResponse, ErrorResponse, SuggestionQuery,
    SuggestionResponse, ValidateScheduleRequest, ValidateScheduleResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ScheduleHandlers {
    validate_handler: Arc<ValidateClassScheduleHandler>,
    suggest_handler: Arc<SuggestInstructorHandler>,
}

impl ScheduleHandlers {
    pub fn new(
        validate_handler: Arc<ValidateClassScheduleHandler>,
        suggest_handler: Arc<SuggestInstructorHandler>,
    ) -> Self {
        Self {
            validate_handler,
            suggest_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/schedule/validate - Validate a class form state
pub async fn validate_schedule(
    State(handlers): State<ScheduleHandlers>,
    Json(request): Json<ValidateScheduleRequest>,
) -> Response {
    let date = match parse_date(&request.date) {
        Ok(date) => date,
        Err(response) => return response,
    };

    let cmd = ValidateClassScheduleCommand {
        class_type_name: request.class_type,
        instructor_name: request.instructor,
        date,
        start_time: request.start_time,
        max_capacity: request.max_capacity,
        exclude_session_id: request.exclude_session_id,
    };

    match handlers.validate_handler.handle(cmd).await {
        Ok(validation) => {
            let response: ValidateScheduleResponse = validation.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(error) => handle_read_error(error),
    }
}

/// GET /api/schedule/suggestion - Trainer favored by the alternation rule
pub async fn suggest_instructor(
    State(handlers): State<ScheduleHandlers>,
    Query(query): Query<SuggestionQuery>,
) -> Response {
    let date = match parse_date(&query.date) {
        Ok(date) => date,
        Err(response) => return response,
    };

    let suggestion = handlers
        .suggest_handler
        .handle(SuggestInstructorQuery { date });
    let response: SuggestionResponse = suggestion.into();
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/schedule/classification - Category and calendar colors
pub async fn classify_class_type(Query(query): Query<ClassificationQuery>) -> Response {
    let class_type = query.class_type.map(ClassTypeDescriptor::new);
    let category = ClassCategory::classify(class_type.as_ref());
    let response = ClassificationResponse {
        category,
        colors: category.color_scheme(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

fn parse_date(raw: &str) -> Result<NaiveDate, Response> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(format!(
                "'{raw}' is not a valid YYYY-MM-DD date"
            ))),
        )
            .into_response()
    })
}

fn handle_read_error(error: SessionReadError) -> Response {
    tracing::error!(%error, "session snapshot read failed");
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorResponse::new(error.to_string())),
    )
        .into_response()
}
