//! Runs the compiled binary in an isolated temporary directory.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Captured result of one CLI invocation
pub struct CliOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CliOutput {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap_or_else(|e| {
            panic!("stdout is not JSON ({e}): {}", self.stdout);
        })
    }

    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}

/// Test harness with its own working directory and a clean environment
pub struct TestCli {
    dir: TempDir,
}

impl TestCli {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file into the working directory and return its path
    pub fn write_file(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    pub fn run(&self, args: &[&str]) -> CliOutput {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliOutput {
        let mut command = Command::new(env!("CARGO_BIN_EXE_chromapick"));
        command
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("CHROMAPICK_CONFIG")
            .env_remove("RUST_LOG");
        for (key, value) in env {
            command.env(key, value);
        }

        let output = command.output().expect("Failed to run chromapick");
        CliOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
