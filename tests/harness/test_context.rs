//! Shared testing harness for `create-kadena-app` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory the CLI runs in; projects are created beneath it.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Templates shipped with the crate.
    pub(crate) fn templates_root(&self) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("create-kadena-app")
            .expect("Failed to locate create-kadena-app binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env("CREATE_KADENA_APP_TEMPLATES", self.templates_root())
            .env_remove("RUST_LOG");
        cmd
    }

    /// Build a command whose `PATH` contains no tools at all.
    pub(crate) fn cli_without_tools(&self) -> Command {
        let empty_bin = self.root.path().join("empty-bin");
        fs::create_dir_all(&empty_bin).expect("Failed to create empty bin directory");
        let mut cmd = self.cli();
        cmd.env("PATH", &empty_bin);
        cmd
    }

    /// Path to a generated project.
    pub(crate) fn project(&self, dir: &str) -> PathBuf {
        self.work_dir.join(dir)
    }

    /// Read a file inside a generated project.
    pub(crate) fn read(&self, dir: &str, relative: &str) -> String {
        let path = self.project(dir).join(relative);
        fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {}", path.display(), e))
    }

    /// Assert every file of a template tree exists in the project.
    pub(crate) fn assert_contains_template(&self, dir: &str, template_subpath: &str) {
        let template = self.templates_root().join(template_subpath);
        for entry in walk(&template) {
            let relative = entry.strip_prefix(&template).unwrap();
            let copied = self.project(dir).join(relative);
            assert!(copied.exists(), "{} should exist", copied.display());
        }
    }
}

fn walk(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).expect("read template dir") {
        let path = entry.expect("dir entry").path();
        if path.is_dir() {
            files.extend(walk(&path));
        } else {
            files.push(path);
        }
    }
    files
}
