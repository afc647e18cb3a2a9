//! Shared testing utilities for snmpttctl CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Absolute path to the isolated root directory.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Write a TOML parameter file and return its path.
    pub fn params_file(&self, content: &str) -> PathBuf {
        let path = self.root().join("params.toml");
        fs::write(&path, content).expect("Failed to write parameter file");
        path
    }

    /// Directory for staged apply/render output.
    pub fn stage_dir(&self) -> PathBuf {
        self.root().join("stage")
    }

    /// Read a staged file relative to the stage directory.
    pub fn read_staged(&self, relative: &str) -> String {
        fs::read_to_string(self.stage_dir().join(relative)).expect("Failed to read staged file")
    }

    /// Whether a staged file exists.
    pub fn staged_exists(&self, relative: &str) -> bool {
        self.stage_dir().join(relative).exists()
    }

    /// Build a command for invoking the compiled `snmpttctl` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("snmpttctl").expect("Failed to locate snmpttctl binary");
        cmd.current_dir(self.root());
        cmd
    }

    /// Apply against the staged root with host-touching steps skipped.
    pub fn apply_staged(&self, params: &Path) -> Command {
        let mut cmd = self.cli();
        cmd.args([
            "apply",
            "--params",
            &params.display().to_string(),
            "--platform",
            "debian",
            "--root",
            &self.stage_dir().display().to_string(),
            "--skip-packages",
            "--skip-service",
        ]);
        cmd
    }
}
