//! Fluent wrapper around assert_cmd::Command.

// Test utility; not every helper is used by every test binary
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `folio` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct FolioCommand {
    args: Vec<String>,
    config_home: Option<PathBuf>,
}

impl FolioCommand {
    /// Creates a new command for the `folio` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            config_home: None,
        }
    }

    /// Sets the `--database` option.
    pub fn database(mut self, path: &Path) -> Self {
        self.args.push("--database".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Points the config lookup at `dir` instead of the user's home.
    pub fn config_home(mut self, dir: &Path) -> Self {
        self.config_home = Some(dir.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("folio").expect("Failed to find folio binary");
        cmd.env_remove("RUST_LOG");
        if let Some(dir) = &self.config_home {
            cmd.env("XDG_CONFIG_HOME", dir).env("HOME", dir);
        }
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `migrate` command.
    pub fn migrate(self) -> Self {
        self.args(["migrate"])
    }

    /// Configures for the `seed` command.
    pub fn seed(self) -> Self {
        self.args(["seed"])
    }

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `search` command with a query.
    pub fn search(self, query: &str) -> Self {
        self.args(["search", query])
    }

    /// Configures for the `show` command with an ID.
    pub fn show(self, id: &str) -> Self {
        self.args(["show", id])
    }

    /// Configures for the `delete` command with an ID.
    pub fn delete(self, id: &str) -> Self {
        self.args(["delete", id])
    }

    // ===========================================
    // Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Adds `--language <profile>` to the command.
    pub fn language(self, profile: &str) -> Self {
        self.args(["--language", profile])
    }
}

impl Default for FolioCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_runs_binary() {
        FolioCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_database() {
        let temp = TempDir::new().unwrap();
        let db = temp.path().join("folio.db");
        let cmd = FolioCommand::new().database(&db);
        let args = cmd.get_args();
        assert_eq!(args[0], "--database");
        assert_eq!(args[1], db.to_string_lossy());
    }

    #[test]
    fn test_command_shortcuts_chain() {
        let cmd = FolioCommand::new().search("поиск").format_json();
        assert_eq!(cmd.get_args(), ["search", "поиск", "--format", "json"]);
    }
}
