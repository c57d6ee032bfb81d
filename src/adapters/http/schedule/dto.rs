//! HTTP DTOs for the schedule endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent
//! evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::ScheduleValidation;
use crate::domain::scheduling::{CardColorScheme, ClassCategory, InstructorSuggestion};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to validate the class create/edit form state.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateScheduleRequest {
    pub class_type: Option<String>,
    pub instructor: String,
    /// ISO calendar date, "YYYY-MM-DD".
    pub date: String,
    /// Zero-padded 24-hour "HH:MM".
    pub start_time: String,
    pub max_capacity: u32,
    #[serde(default)]
    pub exclude_session_id: Option<String>,
}

/// Query parameters for the suggestion endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionQuery {
    pub date: String,
}

/// Query parameters for the calendar classification endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassificationQuery {
    #[serde(default)]
    pub class_type: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One field-level validation message.
#[derive(Debug, Clone, Serialize)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

/// Validation outcome for a form state.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateScheduleResponse {
    pub valid: bool,
    pub category: ClassCategory,
    pub errors: Vec<FieldErrorDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_instructor: Option<String>,
    /// Soft alternation nudge; present means "worth a look", never blocking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,
}

impl From<ScheduleValidation> for ValidateScheduleResponse {
    fn from(validation: ScheduleValidation) -> Self {
        Self {
            valid: validation.is_valid(),
            category: validation.category,
            errors: validation
                .errors
                .iter()
                .map(|error| FieldErrorDto {
                    field: error.field.as_str().to_string(),
                    message: error.message.clone(),
                })
                .collect(),
            suggested_instructor: validation
                .suggestion
                .map(|suggestion| suggestion.instructor),
            advisory: validation.advisory.map(|advisory| advisory.to_string()),
        }
    }
}

/// Suggestion endpoint response.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionResponse {
    pub date: String,
    pub instructor: String,
}

impl From<InstructorSuggestion> for SuggestionResponse {
    fn from(suggestion: InstructorSuggestion) -> Self {
        Self {
            date: suggestion.date.format("%Y-%m-%d").to_string(),
            instructor: suggestion.instructor,
        }
    }
}

/// Classification endpoint response: category plus calendar colors.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResponse {
    pub category: ClassCategory,
    pub colors: CardColorScheme,
}

/// Standard error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::{FieldError, FormField};
    use serde_json::json;

    #[test]
    fn validate_request_deserializes() {
        let request: ValidateScheduleRequest = serde_json::from_value(json!({
            "class_type": "Personal Training 1:1",
            "instructor": "Marco",
            "date": "2024-06-04",
            "start_time": "15:00",
            "max_capacity": 3
        }))
        .unwrap();
        assert_eq!(request.instructor, "Marco");
        assert_eq!(request.exclude_session_id, None);
    }

    #[test]
    fn validation_converts_to_response_with_snake_case_fields() {
        let validation = ScheduleValidation {
            category: ClassCategory::PersonalTraining,
            errors: vec![FieldError {
                field: FormField::MaxCapacity,
                message: "too big".to_string(),
            }],
            suggestion: None,
            advisory: None,
        };
        let response: ValidateScheduleResponse = validation.into();
        assert!(!response.valid);
        assert_eq!(response.errors[0].field, "max_capacity");
    }

    #[test]
    fn clean_validation_serializes_without_optional_fields() {
        let validation = ScheduleValidation {
            category: ClassCategory::Pilates,
            errors: vec![],
            suggestion: None,
            advisory: None,
        };
        let response: ValidateScheduleResponse = validation.into();
        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["valid"], json!(true));
        assert_eq!(body["category"], json!("pilates"));
        assert!(body.get("advisory").is_none());
        assert!(body.get("suggested_instructor").is_none());
    }
}
