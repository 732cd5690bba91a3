// Core modules
pub mod config;
pub mod error;
pub mod receipt;
pub mod template;

// Re-export commonly used types
pub use error::{ReceiptlabError, Result};
pub use receipt::{ReceiptRequest, ReceiptResult, ReceiptService};
