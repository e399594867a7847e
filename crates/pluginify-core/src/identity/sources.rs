//! Data sources consulted while probing identity
//!
//! The probe only ever reads through these traits, so tests can point it at
//! fixture directories instead of the real home directory.

use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

/// A file found while listing a configuration directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub modified: Option<SystemTime>,
}

/// Read-only access to configuration files
pub trait ConfigReader {
    /// Home directory holding dot files, if known
    fn home_dir(&self) -> Option<PathBuf>;

    /// Read a whole file as text; `None` when missing or unreadable
    fn read_to_string(&self, path: &Path) -> Option<String>;

    /// List regular files below `dir`, recursively
    fn list_files(&self, dir: &Path) -> Vec<ConfigFile>;
}

/// Resolves the account the tool runs as
pub trait UserResolver {
    /// Current OS username
    fn username(&self) -> Option<String>;

    /// Name of this machine
    fn hostname(&self) -> Option<String>;
}

/// Reads configuration straight from the filesystem
#[derive(Debug, Clone)]
pub struct FsConfigReader {
    home: Option<PathBuf>,
}

impl FsConfigReader {
    /// Reader rooted at an explicit home directory
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    /// Reader rooted at the current user's home directory
    pub fn from_env() -> Self {
        let home = directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf());
        Self { home }
    }
}

impl ConfigReader for FsConfigReader {
    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn read_to_string(&self, path: &Path) -> Option<String> {
        match std::fs::read(path) {
            Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) => {
                tracing::debug!("cannot read {}: {}", path.display(), e);
                None
            }
        }
    }

    fn list_files(&self, dir: &Path) -> Vec<ConfigFile> {
        WalkDir::new(dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| ConfigFile {
                modified: entry.metadata().ok().and_then(|m| m.modified().ok()),
                path: entry.into_path(),
            })
            .collect()
    }
}

/// Resolves the user from the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUser;

impl UserResolver for SystemUser {
    fn username(&self) -> Option<String> {
        ["USER", "USERNAME", "LOGNAME"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .map(|v| v.trim().to_string())
            .find(|v| !v.is_empty())
    }

    fn hostname(&self) -> Option<String> {
        hostname::get()
            .ok()
            .map(|h| h.to_string_lossy().trim().to_string())
            .filter(|h| !h.is_empty())
    }
}
