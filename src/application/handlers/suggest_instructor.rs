//! SuggestInstructorHandler - trainer pre-selection on date change.
//!
//! When the administrator picks a date for a Personal Training session, the
//! form pre-selects the trainer the alternation rule favors. Pure lookup,
//! no ports.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::scheduling::{
    resolve_alternating_instructor, InstructorSuggestion, SchedulingRules,
};

/// Query for the favored trainer on a date.
#[derive(Debug, Clone, Copy)]
pub struct SuggestInstructorQuery {
    pub date: NaiveDate,
}

/// Handler resolving the alternation suggestion for the form.
pub struct SuggestInstructorHandler {
    rules: Arc<SchedulingRules>,
}

impl SuggestInstructorHandler {
    pub fn new(rules: Arc<SchedulingRules>) -> Self {
        Self { rules }
    }

    pub fn handle(&self, query: SuggestInstructorQuery) -> InstructorSuggestion {
        resolve_alternating_instructor(query.date, &self.rules)
    }
}
