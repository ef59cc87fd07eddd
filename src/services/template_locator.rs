use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, Platform};

/// Resolves platforms to template directories under a templates root.
#[derive(Debug, Clone)]
pub struct TemplateLocator {
    root: PathBuf,
}

impl TemplateLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Template directory for `platform`, verified to be readable.
    pub fn locate(&self, platform: Platform) -> Result<PathBuf, AppError> {
        let dir = self.root.join(platform.template_subpath());
        debug!(platform = %platform, dir = %dir.display(), "locating template");

        fs::read_dir(&dir).map_err(|e| AppError::InvalidTemplate {
            platform: platform.to_string(),
            reason: format!("cannot read {}: {}", dir.display(), e),
        })?;

        Ok(dir)
    }
}
