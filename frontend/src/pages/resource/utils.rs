use chrono::NaiveDate;

use crate::api::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}

/// Trimmed value, or a validation error naming the field.
pub fn required(value: &str, label: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ApiError::validation(format!("{} is required.", label)))
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn required_date(value: &str, label: &str) -> Result<NaiveDate, ApiError> {
    let raw = required(value, label)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
        ApiError::validation(format!("{} must be a date (YYYY-MM-DD).", label))
    })
}

pub fn required_number(value: &str, label: &str) -> Result<f64, ApiError> {
    let raw = required(value, label)?;
    raw.parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| ApiError::validation(format!("{} must be a number.", label)))
}

/// Renders whole amounts without a trailing `.0`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
