use receiptlab_core::error::ReceiptlabError;
use rmcp::ErrorData;
use serde_json::{Value, json};
use std::fmt::Display;

// Standard error codes carried in `data.code`
pub const TEMPLATE_UNAVAILABLE: &str = "TEMPLATE_UNAVAILABLE";
pub const TEMPLATE_INCOMPLETE: &str = "TEMPLATE_INCOMPLETE";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

pub fn internal_error(message: impl Into<String>) -> ErrorData {
    error_with_code(INTERNAL_ERROR, message)
}

pub fn error_with_code(code: &str, message: impl Into<String>) -> ErrorData {
    ErrorData::internal_error(
        message.into(),
        Some(json!({
            "code": code
        })),
    )
}

pub fn error_with_data(code: &str, message: impl Into<String>, data: Value) -> ErrorData {
    let mut payload = json!({
        "code": code
    });
    if let Some(obj) = payload.as_object_mut() {
        obj.insert("details".to_string(), data);
    }
    ErrorData::internal_error(message.into(), Some(payload))
}

pub fn from_core_error(error: ReceiptlabError) -> ErrorData {
    match error {
        ReceiptlabError::TemplateUnavailable { path, reason } => error_with_data(
            TEMPLATE_UNAVAILABLE,
            format!("Template unavailable: {}", path.display()),
            json!({"path": path.display().to_string(), "reason": reason}),
        ),
        ReceiptlabError::TemplateIncomplete { path, missing } => error_with_data(
            TEMPLATE_INCOMPLETE,
            format!("Template is missing placeholders: {}", missing),
            json!({"path": path.display().to_string(), "missing": missing}),
        ),
        _ => internal_error(error.to_string()),
    }
}

pub fn from_display(error: impl Display) -> ErrorData {
    internal_error(format!("{}", error))
}
