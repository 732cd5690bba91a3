use super::engine::Template;
use crate::error::{ReceiptlabError, Result};
use std::path::{Path, PathBuf};

/// Read-only access to the receipt template on disk
///
/// The location is fixed at construction. Relative paths are made absolute
/// once, here, so later reads do not depend on the process directory.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    path: PathBuf,
}

impl TemplateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let path = std::path::absolute(&path).unwrap_or(path);
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the template; every call performs a fresh read
    pub fn load(&self) -> Result<Template> {
        let source = std::fs::read_to_string(&self.path).map_err(|e| {
            ReceiptlabError::TemplateUnavailable {
                path: self.path.clone(),
                reason: e.to_string(),
            }
        })?;
        tracing::debug!(path = %self.path.display(), bytes = source.len(), "loaded receipt template");
        Ok(Template::new(self.path.clone(), source))
    }
}
