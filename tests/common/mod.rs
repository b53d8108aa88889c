#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs the kanban-sync binary against a config file inside a temp directory
pub struct KanbanTest {
    pub temp_dir: TempDir,
    binary_path: String,
}

impl KanbanTest {
    /// Default settings, with the log file kept inside the temp directory
    pub fn new() -> Self {
        let test = Self::empty();
        test.write_config("");
        test
    }

    /// No config file at all
    pub fn empty() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        KanbanTest {
            temp_dir,
            binary_path: env!("CARGO_BIN_EXE_kanban-sync").to_string(),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.yaml")
    }

    pub fn log_path(&self) -> PathBuf {
        self.temp_dir.path().join("kanban-sync.log")
    }

    /// Write `extra` to the config file after the `log` section
    pub fn write_config(&self, extra: &str) {
        let content = format!(
            "log:\n  file: {}\n  filter: debug\n{}",
            self.log_path().display(),
            extra
        );
        fs::write(self.config_path(), content).expect("Failed to write config file");
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("KANBAN_SYNC_CONFIG", self.config_path())
            .env_remove("KANBAN_SYNC_LOG")
            .env("NO_COLOR", "1")
            .output()
            .expect("Failed to execute kanban-sync command")
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

    pub fn read_log(&self) -> String {
        fs::read_to_string(self.log_path()).unwrap_or_default()
    }
}
