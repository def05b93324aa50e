//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the exporter binaries.
///
/// Runs with an isolated working directory, config directory, and `PATH`
/// so that neither the user's config nor installed PDF engines leak in.
pub struct ExportCommand {
    bin: &'static str,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
    home: Option<PathBuf>,
    search_path: Option<OsString>,
}

impl ExportCommand {
    /// Creates a new command for the `md2html` binary.
    pub fn md2html() -> Self {
        Self::new("md2html")
    }

    /// Creates a new command for the `md2pdf` binary.
    pub fn md2pdf() -> Self {
        Self::new("md2pdf")
    }

    fn new(bin: &'static str) -> Self {
        Self {
            bin,
            args: Vec::new(),
            current_dir: None,
            home: None,
            search_path: None,
        }
    }

    /// Sets the working directory.
    pub fn current_dir(mut self, path: &Path) -> Self {
        self.current_dir = Some(path.to_path_buf());
        self
    }

    /// Sets HOME and XDG_CONFIG_HOME so config is read from `path`.
    pub fn home(mut self, path: &Path) -> Self {
        self.home = Some(path.to_path_buf());
        self
    }

    /// Sets `PATH` for the engine probe.
    pub fn search_path(mut self, path: impl Into<OsString>) -> Self {
        self.search_path = Some(path.into());
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

    /// Adds a path argument.
    pub fn arg_path(self, path: &Path) -> Self {
        let arg = path.to_string_lossy().to_string();
        self.args([arg])
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin(self.bin).expect("Failed to find exporter binary");
        cmd.args(&self.args);
        cmd.env_remove("RUST_LOG");
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }
        if let Some(home) = &self.home {
            cmd.env("HOME", home);
            cmd.env("XDG_CONFIG_HOME", home.join(".config"));
        }
        if let Some(path) = &self.search_path {
            cmd.env("PATH", path);
        }
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
    // Option Shortcuts
    // ===========================================

    /// Adds `--cli-format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--cli-format", "json"])
    }

    /// Adds `--engine <name>` to the command.
    pub fn engine(self, name: &str) -> Self {
        self.args(["--engine", name])
    }

    /// Adds `--no-fallback` to the command.
    pub fn no_fallback(self) -> Self {
        self.args(["--no-fallback"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_runs_binaries() {
        ExportCommand::md2html().args(["--help"]).assert().success();
        ExportCommand::md2pdf().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_output_success() {
        let output = ExportCommand::md2pdf().args(["--help"]).output_success();
        assert!(output.contains("md2pdf"));
        assert!(output.contains("--no-fallback"));
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = ExportCommand::md2pdf().engine("weasyprint").format_json();
        let args = cmd.get_args();
        assert_eq!(args, ["--engine", "weasyprint", "--cli-format", "json"]);
    }
}
