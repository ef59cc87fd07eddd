//! Optional post-creation steps: version control and dependency installation.

use std::path::Path;

use tracing::{debug, info};

use crate::domain::{AppError, ResolvedOptions};
use crate::ports::CommandRunner;

/// Package managers the installer knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
}

impl PackageManager {
    pub fn program(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Pick the available manager, preferring yarn.
    pub fn detect(has_npm: bool, has_yarn: bool) -> Option<Self> {
        match (has_npm, has_yarn) {
            (_, true) => Some(PackageManager::Yarn),
            (true, false) => Some(PackageManager::Npm),
            (false, false) => None,
        }
    }

    /// Command a user types to run `script` from package.json.
    pub fn run_hint(self, script: &str) -> String {
        match self {
            PackageManager::Npm => format!("npm run {}", script),
            PackageManager::Yarn => format!("yarn {}", script),
        }
    }
}

/// Run `git init` inside `target_dir`.
pub fn init_vcs<R: CommandRunner + ?Sized>(runner: &R, target_dir: &Path) -> Result<(), AppError> {
    info!(dir = %target_dir.display(), "initializing git repository");
    runner.run("git", &["init"], target_dir)
}

/// Install dependencies with whichever package manager is present.
///
/// Returns the manager used, or `None` when the host has neither.
pub fn install_dependencies<R: CommandRunner + ?Sized>(
    runner: &R,
    resolved: &ResolvedOptions,
) -> Result<Option<PackageManager>, AppError> {
    let Some(manager) = PackageManager::detect(resolved.has_npm, resolved.has_yarn) else {
        debug!("no package manager found, skipping install");
        return Ok(None);
    };

    info!(manager = manager.program(), "installing dependencies");
    runner.run(manager.program(), &["install"], resolved.target_dir())?;
    Ok(Some(manager))
}
