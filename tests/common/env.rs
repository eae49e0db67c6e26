//! Test environment builder for isolated installer runs.
//!
//! Provides `TestEnv` - a temporary checkout (build root) plus a temporary
//! staging prefix that every absolute target is redirected into.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::*;

/// Environment variables the installer reads; cleared for every run.
const INSTALLER_ENV: &[&str] = &[
    "RWDEPLOY_BUILD_ROOT",
    "RWDEPLOY_DESTDIR",
    "RWDEPLOY_PLATFORM",
    "RWDEPLOY_CONFIG",
];

/// Result of running the installer
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary checkout holding the build outputs
    pub build_root: TempDir,
    /// Temporary staging prefix (`--destdir`)
    pub stage: TempDir,
    /// Platform reported to the installer
    platform: String,
    bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Checkout with every source present, running as Linux
    pub fn linux() -> Self {
        Self::builder().build()
    }

    /// Path of a source file inside the checkout
    pub fn source(&self, relative: &str) -> PathBuf {
        self.build_root.path().join(relative)
    }

    /// Path an absolute target lands on inside the staging prefix
    pub fn staged(&self, absolute: &str) -> PathBuf {
        self.stage.path().join(absolute.trim_start_matches('/'))
    }

    /// The `scripts/` directory the installer is normally run from
    pub fn scripts_dir(&self) -> PathBuf {
        self.build_root.path().join("scripts")
    }

    pub fn write_source(&self, relative: &str, content: &[u8]) {
        write_file(&self.source(relative), content);
    }

    pub fn remove_source(&self, relative: &str) {
        std::fs::remove_file(self.source(relative))
            .expect("Failed to remove source");
    }

    /// Put a file at a target location before the run
    pub fn write_staged(&self, absolute: &str, content: &[u8]) {
        write_file(&self.staged(absolute), content);
    }

    pub fn read_staged(&self, absolute: &str) -> Vec<u8> {
        std::fs::read(self.staged(absolute))
            .unwrap_or_else(|e| panic!("Failed to read staged file {}: {}", absolute, e))
    }

    /// Run the installer from `scripts/` with `--destdir` pointing at the stage
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(&self.scripts_dir(), args, env_vars)
    }

    /// Run the installer from a specific directory
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd);
        for key in INSTALLER_ENV {
            cmd.env_remove(key);
        }
        cmd.arg("--destdir")
            .arg(self.stage.path())
            .args(args)
            .env("RWDEPLOY_PLATFORM", &self.platform)
            .env("NO_COLOR", "1");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute installer");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    platform: String,
    missing: Vec<String>,
    binary: Vec<u8>,
}

impl TestEnvBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            platform: "linux".to_string(),
            missing: Vec::new(),
            binary: BINARY_V1.to_vec(),
        }
    }

    /// OS identifier handed to the installer via `RWDEPLOY_PLATFORM`
    pub fn platform(mut self, platform: &str) -> Self {
        self.platform = platform.to_string();
        self
    }

    /// Leave a source file out of the checkout
    pub fn without_source(mut self, relative: &str) -> Self {
        self.missing.push(relative.to_string());
        self
    }

    pub fn with_binary(mut self, content: &[u8]) -> Self {
        self.binary = content.to_vec();
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            build_root: TempDir::new().expect("Failed to create build root"),
            stage: TempDir::new().expect("Failed to create stage"),
            platform: self.platform,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_raspberry-web-deploy")),
        };

        std::fs::create_dir_all(env.scripts_dir())

            .expect("Failed to create scripts dir");

        let sources: [(&str, &[u8]); 4] = [
            (BINARY_SOURCE, self.binary.as_slice()),
            (CONFIG_SOURCE, CONFIG.as_bytes()),
            (DATABASE_SOURCE, DATABASE),
            (SERVICE_SOURCE, SERVICE_UNIT.as_bytes()),
        ];
        for (relative, content) in sources {
            if !self.missing.iter().any(|m| m == relative) {
                env.write_source(relative, content);
            }
        }

        env
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
