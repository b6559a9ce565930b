//! Shared helpers for rulesnap integration tests.
//!
//! `TestEnv` gives each test a scratch working directory, an isolated home
//! and config dir, a fake "host" filesystem to search, and an output root.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running the rulesnap binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse the last stdout line as JSON (the `complete` document)
    pub fn last_json(&self) -> serde_json::Value {
        let line = self
            .stdout
            .lines()
            .rev()
            .find(|l| !l.trim().is_empty())
            .unwrap_or_else(|| panic!("no stdout:\n{}", self.combined_output()));
        serde_json::from_str(line)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.combined_output()))
    }
}

/// Isolated environment for one test
pub struct TestEnv {
    root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        for dir in ["work", "home", "xdg", "host", "out"] {
            fs::create_dir_all(root.path().join(dir)).expect("create env dir");
        }
        Self { root }
    }

    pub fn work_dir(&self) -> PathBuf {
        self.root.path().join("work")
    }

    /// Directory standing in for the searched host filesystem
    pub fn host(&self) -> PathBuf {
        self.root.path().join("host")
    }

    pub fn output(&self) -> PathBuf {
        self.root.path().join("out")
    }

    pub fn config_path(&self) -> PathBuf {
        self.work_dir().join("rulesnap.toml")
    }

    /// Write a file below the fake host root, creating parents
    pub fn host_file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.host().join(rel);
        fs::create_dir_all(path.parent().expect("host file has a parent")).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    /// Write `rulesnap.toml` in the working directory. `{host}` and `{out}`
    /// are replaced with the environment's directories.
    pub fn write_config(&self, template: &str) {
        let content = template
            .replace("{host}", &toml_path(&self.host()))
            .replace("{out}", &toml_path(&self.output()));
        fs::write(self.config_path(), content).unwrap();
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_rulesnap"));
        cmd.args(args)
            .current_dir(self.work_dir())
            .env("RULESNAP_TEST_HOME", self.root.path().join("home"))
            .env("XDG_CONFIG_HOME", self.root.path().join("xdg"))
            .env("NO_COLOR", "1")
            .env_remove("RULESNAP_OUTPUT")
            .env_remove("RULESNAP_CONTAINER_RUNTIME")
            .env_remove("RULESNAP_EXTRACT_TIMEOUT")
            .env_remove("RULESNAP_ANCHOR")
            .env_remove("RULESNAP_LOG");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("run rulesnap binary");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Render a path as a TOML basic string body (backslashes escaped)
pub fn toml_path(path: &Path) -> String {
    path.display().to_string().replace('\\', "\\\\")
}

/// A config searching only the fake host, with one local appliance
pub const SURICATA_ONLY: &str = r#"
[output]
root = "{out}"

[search]
full_scan_root = "{host}"

[[search.tiers]]
name = "host"
paths = ["{host}"]

[[appliances]]
name = "suricata"
search = ["**/suricata/rules/"]
extension = "rules"
"#;
