use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReceiptlabError {
    // Template errors
    #[error("TEMPLATE_UNAVAILABLE: failed to read template '{path}': {reason}")]
    TemplateUnavailable { path: PathBuf, reason: String },

    #[error("TEMPLATE_INCOMPLETE: template '{path}' is missing placeholders: {missing}")]
    TemplateIncomplete { path: PathBuf, missing: String },

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID: invalid receiptlab.toml: {0}")]
    ConfigInvalid(String),

    // Output errors
    #[error("OUTPUT_WRITE_FAILED: failed to write '{path}': {reason}")]
    OutputWriteFailed { path: PathBuf, reason: String },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl ReceiptlabError {
    /// Stable code prefix used in messages and at the RPC boundary
    pub fn code(&self) -> &'static str {
        match self {
            ReceiptlabError::TemplateUnavailable { .. } => "TEMPLATE_UNAVAILABLE",
            ReceiptlabError::TemplateIncomplete { .. } => "TEMPLATE_INCOMPLETE",
            ReceiptlabError::ConfigParseError(_) => "CONFIG_PARSE_ERROR",
            ReceiptlabError::ConfigInvalid(_) => "CONFIG_INVALID",
            ReceiptlabError::OutputWriteFailed { .. } => "OUTPUT_WRITE_FAILED",
            ReceiptlabError::IoError(_) => "IO_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, ReceiptlabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_unavailable_message_carries_code_and_path() {
        let err = ReceiptlabError::TemplateUnavailable {
            path: PathBuf::from("/srv/receipt-template.html"),
            reason: "No such file or directory".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("TEMPLATE_UNAVAILABLE:"));
        assert!(msg.contains("/srv/receipt-template.html"));
        assert_eq!(err.code(), "TEMPLATE_UNAVAILABLE");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ReceiptlabError = io.into();
        assert_eq!(err.code(), "IO_ERROR");
    }
}
