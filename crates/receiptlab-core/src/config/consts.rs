//! Constants shared across the workspace

/// Name of the configuration file searched for in the current directory and its parents
pub const CONFIG_FILE_NAME: &str = "receiptlab.toml";

/// Template settings
pub mod template {
    /// Default template location, relative to the config directory
    pub const DEFAULT_PATH: &str = "templates/receipt-template.html";
}

/// Output settings for saved receipts
pub mod output {
    /// Default directory for saved receipts, relative to the config directory
    pub const DEFAULT_DIR: &str = "receipts";

    /// Default file name prefix (`receipt-<millis>.html`)
    pub const DEFAULT_PREFIX: &str = "receipt";

    /// Extension of saved receipts
    pub const EXTENSION: &str = "html";
}

/// Message returned to callers when generation fails
pub const GENERATE_FAILED_MESSAGE: &str = "Failed to generate receipt";
