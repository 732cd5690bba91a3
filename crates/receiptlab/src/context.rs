//! Global context for CLI commands

use anyhow::{Context as _, Result};
use receiptlab_core::ReceiptService;
use receiptlab_core::config::Config;
use std::env;
use std::path::{Path, PathBuf};

/// Resolved configuration shared by all commands
pub struct Context {
    pub config: Config,
    pub verbose: bool,
}

impl Context {
    /// Load configuration and apply a command-line template override
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be determined
    /// - An explicit or discovered receiptlab.toml cannot be read or parsed
    pub fn new(
        config_path: Option<&Path>,
        template: Option<PathBuf>,
        verbose: bool,
    ) -> Result<Self> {
        let current_dir = env::current_dir().context("Failed to read current directory")?;

        let mut config = match config_path {
            Some(path) => Config::from_file(path)?,
            None => Config::discover(&current_dir)?,
        };

        // Command-line paths are relative to where the user is, not to the config
        if let Some(template) = template {
            config.template.path = current_dir.join(template);
        }

        tracing::debug!(
            template = %config.template_path().display(),
            strict = config.template.strict,
            "resolved configuration"
        );

        Ok(Self { config, verbose })
    }

    pub fn service(&self) -> ReceiptService {
        ReceiptService::from_config(&self.config)
    }
}
