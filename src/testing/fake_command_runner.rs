use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::CommandRunner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl RecordedCommand {
    pub fn line(&self) -> String {
        format!("{} {}", self.program, self.args.join(" "))
    }
}

#[derive(Default)]
pub struct FakeCommandRunner {
    pub recorded: Mutex<Vec<RecordedCommand>>,
    pub failing_program: Mutex<Option<String>>,
}

impl FakeCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every invocation of `program` exit non-zero.
    pub fn fail_on(&self, program: &str) {
        *self.failing_program.lock().unwrap() = Some(program.to_string());
    }

    pub fn lines(&self) -> Vec<String> {
        self.recorded.lock().unwrap().iter().map(RecordedCommand::line).collect()
    }

    pub fn commands(&self) -> Vec<RecordedCommand> {
        self.recorded.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeCommandRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<(), AppError> {
        let command = RecordedCommand {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.to_path_buf(),
        };
        let line = command.line();
        self.recorded.lock().unwrap().push(command);

        if self.failing_program.lock().unwrap().as_deref() == Some(program) {
            let details = "exited with status 1".to_string();
            return Err(AppError::Subprocess { command: line, details });
        }
        Ok(())
    }
}
