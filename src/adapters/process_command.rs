use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::CommandRunner;

/// Runs tools as child processes that share the terminal with this one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCommandRunner;

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<(), AppError> {
        let line = format!("{} {}", program, args.join(" "));
        debug!(command = %line, cwd = %cwd.display(), "spawning");

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| AppError::Subprocess {
                command: line.clone(),
                details: e.to_string(),
            })?;

        if !status.success() {
            let details = match status.code() {
                Some(code) => format!("exited with status {}", code),
                None => "terminated by signal".to_string(),
            };
            return Err(AppError::Subprocess { command: line, details });
        }

        Ok(())
    }
}
