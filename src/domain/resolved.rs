use std::path::{Path, PathBuf};

use crate::domain::CreationOptions;

/// Creation options plus everything derived from the host environment.
///
/// Built once at pipeline start and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub options: CreationOptions,
    pub templates_root: PathBuf,
    pub template_dir: PathBuf,
    pub target_dir: PathBuf,
    pub has_npm: bool,
    pub has_yarn: bool,
}

impl ResolvedOptions {
    pub fn options(&self) -> &CreationOptions {
        &self.options
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    pub fn templates_root(&self) -> &Path {
        &self.templates_root
    }

    /// Final component of the target directory, used as the package name.
    pub fn package_name(&self) -> String {
        match self.target_dir.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.options.project_dir.clone(),
        }
    }
}
