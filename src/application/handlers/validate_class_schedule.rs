//! ValidateClassScheduleHandler - field-level validation for the class
//! create/edit form.
//!
//! Runs the rules in the order the form does: classify the class type,
//! check instructor availability, then for Personal Training enforce the
//! fixed participant ceiling and the slot capacity. The alternation
//! advisory rides along as information; it is logged and returned but never
//! added to the field errors.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::foundation::ValidationError;
use crate::domain::scheduling::{
    alternation_advisory, check_availability, check_pt_limit_reached,
    resolve_alternating_instructor, AlternationAdvisory, AvailabilityOutcome, ClassCategory,
    ClassTypeDescriptor, DenialReason, InstructorSuggestion, SchedulingRules,
};
use crate::ports::{SessionReadError, SessionReader};

/// Everything the form knows when it asks for validation.
#[derive(Debug, Clone)]
pub struct ValidateClassScheduleCommand {
    pub class_type_name: Option<String>,
    pub instructor_name: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub max_capacity: u32,
    /// Session under edit, so it does not count against its own slot.
    pub exclude_session_id: Option<String>,
}

/// Form field a validation message attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    ClassType,
    Instructor,
    StartTime,
    MaxCapacity,
}

impl FormField {
    /// Wire name of the field, matching the form's field keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClassType => "class_type",
            Self::Instructor => "instructor",
            Self::StartTime => "start_time",
            Self::MaxCapacity => "max_capacity",
        }
    }
}

/// One blocking validation message, keyed by form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl FieldError {
    fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Aggregated validation result for one form state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleValidation {
    pub category: ClassCategory,
    pub errors: Vec<FieldError>,
    /// Trainer the alternation rule favors; Personal Training only.
    pub suggestion: Option<InstructorSuggestion>,
    /// Non-blocking alternation note; never turns into a field error.
    pub advisory: Option<AlternationAdvisory>,
}

impl ScheduleValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Handler validating a class form state against the scheduling rules.
pub struct ValidateClassScheduleHandler {
    sessions: Arc<dyn SessionReader>,
    rules: Arc<SchedulingRules>,
}

impl ValidateClassScheduleHandler {
    pub fn new(sessions: Arc<dyn SessionReader>, rules: Arc<SchedulingRules>) -> Self {
        Self { sessions, rules }
    }

    pub async fn handle(
        &self,
        cmd: ValidateClassScheduleCommand,
    ) -> Result<ScheduleValidation, SessionReadError> {
        let class_type = cmd.class_type_name.as_deref().map(ClassTypeDescriptor::new);
        let category = ClassCategory::classify(class_type.as_ref());

        let mut errors = Vec::new();

        if cmd.instructor_name.trim().is_empty() {
            errors.push(FieldError::new(
                FormField::Instructor,
                ValidationError::empty_field("instructor").to_string(),
            ));
        } else if let AvailabilityOutcome::Denied { reason } = check_availability(
            &cmd.instructor_name,
            cmd.date,
            &cmd.start_time,
            category,
            &self.rules,
        ) {
            errors.push(FieldError::new(field_for(&reason), reason.to_string()));
        }

        let mut suggestion = None;
        let mut advisory = None;

        if category == ClassCategory::PersonalTraining {
            suggestion = Some(resolve_alternating_instructor(cmd.date, &self.rules));

            if !cmd.instructor_name.trim().is_empty() {
                advisory = alternation_advisory(cmd.date, &cmd.instructor_name, &self.rules);
            }
            if let Some(note) = &advisory {
                tracing::info!(%note, date = %cmd.date, "alternation advisory");
            }

            if cmd.max_capacity != self.rules.pt_max_capacity() {
                errors.push(FieldError::new(
                    FormField::MaxCapacity,
                    format!(
                        "Personal Training sessions always take {} participants",
                        self.rules.pt_max_capacity()
                    ),
                ));
            }

            let snapshot = self.sessions.sessions_on(cmd.date).await?;
            let capacity = check_pt_limit_reached(
                cmd.date,
                &cmd.start_time,
                &snapshot,
                cmd.exclude_session_id.as_deref(),
                &self.rules,
            );
            if let Some(reason) = capacity.reason {
                errors.push(FieldError::new(FormField::StartTime, reason));
            }
        }

        Ok(ScheduleValidation {
            category,
            errors,
            suggestion,
            advisory,
        })
    }
}

/// Maps a denial to the form field it belongs to: time-shaped denials go to
/// the start-time field, everything else to the instructor field.
fn field_for(reason: &DenialReason) -> FormField {
    match reason {
        DenialReason::OutsideDailyWindow { .. } | DenialReason::InvalidStartTime { .. } => {
            FormField::StartTime
        }
        _ => FormField::Instructor,
    }
}
