//! Helpers for the behavioral tests.
//!
//! Provides a small DSL for running ocs-migrate against stores in a
//! temporary directory.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use ocs_core::Versions;
use ocs_storage::{DataManager, DbConfig, DbKind, Encoding};
use std::path::{Path, PathBuf};
use std::process::Output;

pub use ocs_core::consts::version_key as vk;

/// Create a CLI builder for ocs-migrate commands
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    dir: Option<PathBuf>,
    envs: Vec<(String, String)>,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            dir: None,
            envs: vec![
                ("NO_COLOR".into(), "1".into()),
                ("OCS_LOG".into(), "warn".into()),
            ],
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set working directory
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Build the command without running it
    pub fn command(self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("ocs-migrate").unwrap();
        cmd.args(&self.args);

        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }

        // A config named by the parent environment would leak into every run.
        cmd.env_remove("OCS_MIGRATOR_CONFIG");

        for (key, value) in self.envs {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let output = self.command().output().expect("command should run");
        assert!(
            output.status.success(),
            "expected command to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect failure (exit code 1)
    pub fn fails(self) -> RunAssert {
        let output = self.command().output().expect("command should run");
        assert_eq!(
            output.status.code(),
            Some(1),
            "expected exit code 1\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.output.stdout).expect("stdout should be JSON")
    }

    /// Assert stdout equals expected exactly (with diff on failure).
    /// **Prefer this for format specs** - catches format regressions.
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    /// Assert stdout contains substring.
    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{}'\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    /// Assert stderr contains substring.
    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }
}

/// A pair of file-backed stores in a temporary directory.
pub struct Stores {
    dir: tempfile::TempDir,
}

impl Stores {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Key-value snapshot holding the legacy data.
    pub fn input_path(&self) -> PathBuf {
        self.root().join("in.snap")
    }

    /// Document store receiving the migrated data.
    pub fn output_path(&self) -> PathBuf {
        self.root().join("out")
    }

    pub fn input(&self) -> DbConfig {
        DbConfig::new(DbKind::KeyValue, Some(self.input_path()), Encoding::Binary)
    }

    pub fn output(&self) -> DbConfig {
        DbConfig::new(DbKind::Document, Some(self.output_path()), Encoding::Json)
    }

    /// Open the input store, run `f`, and persist.
    pub fn seed(&self, f: impl FnOnce(&DataManager)) {
        let dm = self.input().open().unwrap();
        f(&dm);
        dm.close().unwrap();
    }

    pub fn stamp(&self, versions: &[(&str, i64)]) {
        let versions: Versions = versions.iter().copied().collect();
        self.seed(|dm| dm.set_versions(&versions, true).unwrap());
    }

    /// Arguments naming both stores on the command line.
    pub fn store_args(&self) -> Vec<String> {
        vec![
            "--in-path".into(),
            self.input_path().display().to_string(),
            "--out-kind".into(),
            "document".into(),
            "--out-path".into(),
            self.output_path().display().to_string(),
            "--out-encoding".into(),
            "json".into(),
        ]
    }

    /// `migrate --exec <tags>` between the two stores.
    pub fn migrate(&self, tags: &str) -> CliBuilder {
        let mut args = vec!["migrate".to_string(), "--exec".into(), tags.into()];
        args.extend(self.store_args());
        let refs: Vec<&str> = args.iter().map(String::as_str).collect();
        cli().args(&refs)
    }
}
