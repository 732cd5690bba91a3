use super::consts::{self, CONFIG_FILE_NAME};
use crate::error::{ReceiptlabError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// receiptlab.toml schema
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub template: TemplateConfig,
    #[serde(default)]
    pub output: OutputConfig,

    /// Directory relative paths are resolved against
    #[serde(skip)]
    base_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    #[serde(default = "default_template_path")]
    pub path: PathBuf,
    /// Treat a missing placeholder as an error instead of dropping the value
    #[serde(default)]
    pub strict: bool,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            path: default_template_path(),
            strict: false,
        }
    }
}

fn default_template_path() -> PathBuf {
    PathBuf::from(consts::template::DEFAULT_PATH)
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            prefix: default_prefix(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(consts::output::DEFAULT_DIR)
}

fn default_prefix() -> String {
    consts::output::DEFAULT_PREFIX.to_string()
}

impl Config {
    /// Default configuration with relative paths anchored at `base_dir`
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            template: TemplateConfig::default(),
            output: OutputConfig::default(),
            base_dir: base_dir.into(),
        }
    }

    /// Read receiptlab.toml; relative paths resolve against its directory
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ReceiptlabError::ConfigParseError(e.to_string()))?;

        let mut config: Config =
            toml::from_str(&content).map_err(|e| ReceiptlabError::ConfigInvalid(e.to_string()))?;
        config.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    /// Load the nearest receiptlab.toml above `start`, or defaults anchored at `start`
    pub fn discover(start: &Path) -> Result<Self> {
        match find_config(start) {
            Some(path) => {
                tracing::debug!(config = %path.display(), "loading configuration");
                Self::from_file(path)
            }
            None => {
                tracing::debug!(dir = %start.display(), "no {} found, using defaults", CONFIG_FILE_NAME);
                Ok(Self::with_base_dir(start))
            }
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Template location resolved against the config directory
    pub fn template_path(&self) -> PathBuf {
        self.base_dir.join(&self.template.path)
    }

    /// Output directory resolved against the config directory
    pub fn output_dir(&self) -> PathBuf {
        self.base_dir.join(&self.output.dir)
    }

    fn validate(&self) -> Result<()> {
        let prefix = &self.output.prefix;
        if prefix.is_empty() {
            return Err(ReceiptlabError::ConfigInvalid(
                "output.prefix must not be empty".to_string(),
            ));
        }
        if prefix.contains(['/', '\\']) || prefix == "." || prefix == ".." {
            return Err(ReceiptlabError::ConfigInvalid(format!(
                "output.prefix '{}' must be a plain file name",
                prefix
            )));
        }
        Ok(())
    }
}

/// Walk from `start` up to the filesystem root looking for receiptlab.toml
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}
