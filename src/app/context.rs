use std::path::{Path, PathBuf};

use crate::ports::{Clock, CommandRunner, ToolLocator};
use crate::services::TemplateLocator;

/// Application context holding dependencies for command execution.
pub struct AppContext<R: CommandRunner, T: ToolLocator, C: Clock> {
    runner: R,
    tools: T,
    clock: C,
    locator: TemplateLocator,
    cwd: PathBuf,
}

impl<R: CommandRunner, T: ToolLocator, C: Clock> AppContext<R, T, C> {
    /// Create a new application context rooted at `cwd`.
    pub fn new(runner: R, tools: T, clock: C, locator: TemplateLocator, cwd: PathBuf) -> Self {
        Self { runner, tools, clock, locator, cwd }
    }

    /// Runner for external tools.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Lookup for external tools.
    pub fn tools(&self) -> &T {
        &self.tools
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn locator(&self) -> &TemplateLocator {
        &self.locator
    }

    /// Directory the project directory is created in.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}
