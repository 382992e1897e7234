//! Shared testing utilities for callgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Reference template shipped with the crate.
pub const CALL_TEMPLATE: &str = include_str!("../../assets/template.j2");

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with `template.j2` in place.
    pub fn new() -> Self {
        let ctx = Self::without_template();
        ctx.write_template("template.j2", CALL_TEMPLATE);
        ctx
    }

    /// Create a new isolated environment with no template file.
    pub fn without_template() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Directory the CLI runs in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `callgen` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("callgen").expect("Failed to locate callgen binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Write a template file relative to the work directory.
    pub fn write_template(&self, name: &str, content: &str) {
        fs::write(self.work_dir.join(name), content).expect("Failed to write template");
    }

    /// Path to the call file output directory.
    pub fn callfiles_path(&self) -> PathBuf {
        self.work_dir.join("callfiles")
    }

    /// All files currently in the output directory.
    pub fn call_files(&self) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(self.callfiles_path()) else {
            return Vec::new();
        };
        entries.map(|entry| entry.expect("Failed to read directory entry").path()).collect()
    }

    /// Assert that the output directory was never created.
    pub fn assert_callfiles_not_exists(&self) {
        assert!(!self.callfiles_path().exists(), "callfiles directory should not exist");
    }
}
