//! Isolated test environment with temp directory.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use super::ExportCommand;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Fake engine that copies its input (second-to-last argument) into its
/// output (last argument) behind a PDF header. Uses shell builtins only, so
/// it runs with `PATH` limited to the fake bin directory.
pub const FAKE_ENGINE_SCRIPT: &str = r#"#!/bin/sh
prev=""; last=""
for arg; do prev="$last"; last="$arg"; done
{
    printf '%%PDF-1.4\n'
    while IFS= read -r line || [ -n "$line" ]; do printf '%s\n' "$line"; done < "$prev"
} > "$last"
"#;

/// Isolated test environment with a temporary working directory.
///
/// The working directory, the config home, and the `bin` directory used as
/// `PATH` all live under one temp directory that is removed on drop.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Working directory for documents
    work_dir: PathBuf,
    /// HOME for config lookup
    home_dir: PathBuf,
    /// Directory used as PATH for engine probing
    bin_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with no PDF engines.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let work_dir = temp_dir.path().join("work");
        let home_dir = temp_dir.path().join("home");
        let bin_dir = temp_dir.path().join("bin");
        for dir in [&work_dir, &home_dir, &bin_dir] {
            std::fs::create_dir_all(dir).expect("Failed to create test directory");
        }
        Self {
            _temp_dir: temp_dir,
            work_dir,
            home_dir,
            bin_dir,
        }
    }

    /// Returns the working directory.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Returns the path of a file in the working directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.work_dir.join(name)
    }

    /// Writes a file to the working directory and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Reads a file from the working directory.
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", name, e))
    }

    /// Writes `config.toml` into the isolated config directory.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let dir = self.home_dir.join(".config").join("mdexport");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("config.toml");
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Installs a fake engine executable named `name` on this env's `PATH`.
    #[cfg(unix)]
    pub fn install_fake_engine(&self, name: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin_dir.join(name);
        std::fs::write(&path, FAKE_ENGINE_SCRIPT).expect("Failed to write fake engine");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake engine executable");
        path
    }

    /// Returns the `PATH` value used by commands from this env.
    pub fn search_path(&self) -> OsString {
        self.bin_dir.clone().into_os_string()
    }

    fn configure(&self, cmd: ExportCommand) -> ExportCommand {
        cmd.current_dir(&self.work_dir)
            .home(&self.home_dir)
            .search_path(self.search_path())
    }

    /// Creates an `md2html` command configured for this environment.
    pub fn md2html(&self) -> ExportCommand {
        self.configure(ExportCommand::md2html())
    }

    /// Creates an `md2pdf` command configured for this environment.
    pub fn md2pdf(&self) -> ExportCommand {
        self.configure(ExportCommand::md2pdf())
    }

    /// Lists file names in the working directory, sorted.
    pub fn files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.work_dir)
            .expect("Failed to list work directory")
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_directories() {
        let env = TestEnv::new();
        assert!(env.work_dir().is_dir());
        assert!(env.files().is_empty());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.work_dir().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_write_and_read() {
        let env = TestEnv::new();
        env.write_file("docs/a.md", "# A");
        assert_eq!(env.read_file("docs/a.md"), "# A");
    }

    #[test]
    fn test_env_config_location() {
        let env = TestEnv::new();
        let path = env.write_config("title = \"T\"");
        assert!(path.ends_with(".config/mdexport/config.toml"));
    }

    #[cfg(unix)]
    #[test]
    fn test_env_fake_engine_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let env = TestEnv::new();
        let path = env.install_fake_engine("weasyprint");
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_ne!(mode & 0o111, 0);
    }
}
