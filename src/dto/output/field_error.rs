use crate::dto::input::FormField;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: FormField, message: &'static str) -> Self {
        Self {
            field: field.as_ref().to_string(),
            message,
        }
    }
}
