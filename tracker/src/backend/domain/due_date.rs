//! Due date acceptance rules.
//!
//! A due date is accepted when the input contains a `YYYY-MM-DD` shaped
//! substring anywhere. No calendrical validation happens here: "2024-02-30"
//! is accepted and later derives an invalid date.

use once_cell::sync::Lazy;
use regex::Regex;
use shared::DueDate;

static DUE_DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("due date pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid due date: '{0}' (expected YYYY-MM-DD)")]
    InvalidDueDate(String),
}

/// Check that `input` contains a `YYYY-MM-DD` shaped date
pub fn has_due_date_shape(input: &str) -> bool {
    DUE_DATE_SHAPE.is_match(input)
}

/// Accept raw user input as a due date
pub fn parse_due_date(input: &str) -> Result<DueDate, ValidationError> {
    if !has_due_date_shape(input) {
        return Err(ValidationError::InvalidDueDate(input.to_string()));
    }
    Ok(DueDate::new(input))
}
