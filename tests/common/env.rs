//! Test environment builder for isolated Conveyor testing.
//!
//! Provides `TestEnv` - a temp project directory with helpers to lay out
//! connector sources and run the conveyor CLI against them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a conveyor CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with a temp project directory.
///
/// The default layout matches the CLI defaults: sources under `configs/`,
/// artifacts under `dist/`.
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project temp dir"),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a connector definition under `configs/<namespace>/<filename>`
    pub fn write_unit(&self, namespace: &str, filename: &str, content: &str) {
        self.write_project_file(&format!("configs/{}/{}", namespace, filename), content);
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Read a built artifact's content
    pub fn read_artifact(&self, relative_path: &str) -> String {
        let full_path = self.project_path(relative_path);
        std::fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("Failed to read artifact {}: {}", relative_path, e))
    }

    /// Run conveyor CLI in this environment from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run conveyor CLI in this environment with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute conveyor");
        self.output_to_result(output)
    }

    /// Build a `Command` for the conveyor binary without running it,
    /// for tests that spawn long-lived processes like `watch`.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(conveyor_bin());
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("CONVEYOR_COLOR", "never");
        cmd
    }

    /// Convert Command output to TestResult
    fn output_to_result(&self, output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Path to the conveyor binary under test
pub fn conveyor_bin() -> &'static Path {
    Path::new(env!("CARGO_BIN_EXE_conveyor"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_unit_creates_namespace_directory() {
        let env = TestEnv::new();
        env.write_unit("acme", "hr.s1.yaml", "version: \"1.0.0\"\n");

        assert!(env.project_path("configs/acme/hr.s1.yaml").exists());
    }
}
