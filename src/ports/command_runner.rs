use std::path::Path;

use crate::domain::AppError;

/// Runs external tools with the caller's stdio attached.
pub trait CommandRunner {
    /// Run `program` with `args` inside `cwd` and wait for it to exit.
    ///
    /// Returns an error when the process cannot be spawned or exits non-zero.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<(), AppError>;
}
