#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

pub fn snackq_binary() -> &'static str {
    env!("CARGO_BIN_EXE_snackq")
}

/// Helper struct to run snackq commands in an isolated temp directory
pub struct SnackqTest {
    pub temp_dir: TempDir,
}

impl SnackqTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        SnackqTest { temp_dir }
    }

    /// A test directory with an operator already signed in
    pub fn signed_in() -> Self {
        let test = Self::new();
        test.run_success(&["login", "ops@example.com"]);
        test
    }

    pub fn root(&self) -> PathBuf {
        self.temp_dir.path().join(".snackq")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(snackq_binary())
            .args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("SNACKQ_ROOT")
            .env_remove("SNACKQ_LOG")
            .env("NO_COLOR", "1")
            .output()
            .expect("Failed to execute snackq command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let stdout = self.run_success(args);
        serde_json::from_str(&stdout).expect("Failed to parse JSON output")
    }

    /// Add a ticket and return its id
    pub fn add(&self, name: &str, origin: &str, issue: &str) -> String {
        let json = self.run_json(&["add", name, "--origin", origin, "--issue", issue, "--json"]);
        json["id"].as_str().expect("id in add output").to_string()
    }

    pub fn read_tickets_file(&self) -> String {
        fs::read_to_string(self.root().join("tickets.json")).expect("Failed to read tickets file")
    }

    pub fn write_config(&self, content: &str) {
        fs::create_dir_all(self.root()).expect("Failed to create .snackq directory");
        fs::write(self.root().join("config.yaml"), content).expect("Failed to write config file");
    }
}
