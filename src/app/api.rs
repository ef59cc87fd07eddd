//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::{PathToolLocator, ProcessCommandRunner, SystemClock};
use crate::app::{AppContext, commands::create};
use crate::services::TemplateLocator;

pub use crate::app::commands::create::CreateOutcome;
pub use crate::domain::{AppError, CreationOptions, ErrorKind, Platform};

/// Create an `AppContext` backed by the host system.
fn create_context(
    templates_root: PathBuf,
    cwd: PathBuf,
) -> AppContext<ProcessCommandRunner, PathToolLocator, SystemClock> {
    AppContext::new(
        ProcessCommandRunner,
        PathToolLocator,
        SystemClock,
        TemplateLocator::new(templates_root),
        cwd,
    )
}

/// Create a project under the current directory.
pub fn create(
    options: CreationOptions,
    templates_root: impl Into<PathBuf>,
) -> Result<CreateOutcome, AppError> {
    create_at(options, templates_root, std::env::current_dir()?)
}

/// Create a project under `cwd`.
pub fn create_at(
    options: CreationOptions,
    templates_root: impl Into<PathBuf>,
    cwd: impl Into<PathBuf>,
) -> Result<CreateOutcome, AppError> {
    let ctx = create_context(templates_root.into(), cwd.into());
    create::execute(&ctx, options)
}
