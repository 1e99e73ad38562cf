use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Field-level validation failures collected for a single request.
///
/// Serializes as `{"field": ["message", ...]}`. Multiple problems on the same field
/// are kept in the order they were reported.
#[derive(Error, Debug, Default, Clone, PartialEq)]
#[error("validation failed: {fields:?}")]
pub struct ValidationError {
    pub fields: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an error holding a single message for one field.
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.add(field, message);
        err
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Records a "required" error when `value` is missing or empty and passes it
    /// through otherwise. The value is not trimmed.
    pub fn require(&mut self, field: &str, value: Option<String>) -> Option<String> {
        match value {
            Some(value) if !value.is_empty() => Some(value),
            _ => {
                self.add(field, "This field is required.");
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `Err(self)` when any field failed, `Ok(())` otherwise.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self.fields)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_messages_per_field() {
        let mut err = ValidationError::new();
        err.add("name", "This field is required.");
        err.add("name", "Too long.");
        err.add("text", "This field is required.");

        assert_eq!(err.fields["name"].len(), 2);
        assert_eq!(err.fields["text"], vec!["This field is required."]);
        assert!(err.into_result().is_err());
    }

    #[test]
    fn require_reports_missing_and_empty_values() {
        let mut err = ValidationError::new();

        assert_eq!(err.require("a", Some(" x ".to_string())), Some(" x ".to_string()));
        assert_eq!(err.require("b", Some(String::new())), None);
        assert_eq!(err.require("c", None), None);
        assert_eq!(err.fields.keys().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn empty_error_is_ok() {
        assert!(ValidationError::new().into_result().is_ok());
    }
}
