//! Filesystem locations for configuration, run logs, and screenshots
//!
//! Uses the directories crate for platform-appropriate locations:
//! - Linux: `~/.config/dyntest/`, `~/.local/share/dyntest/`
//! - macOS: `~/Library/Application Support/dyntest/`
//! - Windows: `%APPDATA%\dyntest\`

use std::io;
use std::path::{Path, PathBuf};

/// Application name used for all platform directories
const APP_NAME: &str = "dyntest";

/// Get the configuration directory path
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the root directory for run logs
pub fn log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().join("logs"))
}

/// Get the log directory for a single suite
///
/// Each suite logs into its own subdirectory so runs of different suites
/// never interleave in one file.
pub fn suite_log_dir(suite: &str) -> Option<PathBuf> {
    log_dir().map(|dir| dir.join(suite))
}

/// Get the directory screenshots are saved into
pub fn screenshot_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().join("screenshots"))
}

/// Create a directory (and parents) if it does not exist yet
pub fn ensure_dir(dir: &Path) -> io::Result<PathBuf> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_is_valid() {
        let dir = config_dir();
        assert!(dir.is_some());
    }

    #[test]
    fn test_suite_log_dir_nests_under_log_dir() {
        let root = log_dir().unwrap();
        let suite = suite_log_dir("fizzbuzz").unwrap();
        assert!(suite.starts_with(&root));
        assert!(suite.ends_with("fizzbuzz"));
    }

    #[test]
    fn test_ensure_dir_creates_missing_path() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        let created = ensure_dir(&nested).unwrap();
        assert!(created.is_dir());
    }
}
