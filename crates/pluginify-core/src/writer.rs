//! Creates the plugin directory tree and writes rendered files
//!
//! Both stages attempt every entry and report failures as a batch. Nothing
//! is rolled back: a failed run may leave a partial tree behind.

use crate::templates::{GeneratedFile, PluginName};
use anyhow::{Context, Result};
use std::fs::{DirBuilder, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// A single entry that could not be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a directory or file stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageReport {
    pub created: Vec<PathBuf>,
    pub failures: Vec<StageFailure>,
}

impl StageReport {
    /// True only when every entry was created
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, path: PathBuf, result: Result<()>) {
        match result {
            Ok(()) => self.created.push(path),
            Err(e) => {
                tracing::warn!("failed to create {}: {:#}", path.display(), e);
                self.failures.push(StageFailure {
                    path,
                    reason: format!("{:#}", e),
                });
            }
        }
    }
}

/// Writes a plugin tree below a root directory (normally the invocation directory)
#[derive(Debug, Clone)]
pub struct ProjectWriter {
    root: PathBuf,
}

impl ProjectWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/<plugin>`
    pub fn plugin_dir(&self, plugin: &PluginName) -> PathBuf {
        self.root.join(plugin.as_str())
    }

    /// Create each of `dirs` inside the plugin root, with parents
    ///
    /// A directory that already exists is reported as a failure so an
    /// existing plugin is never silently reused.
    pub fn make_directories(&self, plugin: &PluginName, dirs: &[&str]) -> StageReport {
        let base = self.plugin_dir(plugin);
        let mut report = StageReport::default();

        for dir in dirs {
            let path = base.join(dir);
            let result = create_dir(&path);
            report.record(path, result);
        }

        report
    }

    /// Write each file below the plugin root under an exclusive lock
    ///
    /// Parent directories are not created; an entry whose parent is missing fails.
    pub fn write_files(&self, plugin: &PluginName, files: &[GeneratedFile]) -> StageReport {
        let base = self.plugin_dir(plugin);
        let mut report = StageReport::default();

        for file in files {
            let path = base.join(&file.relative_path);
            let result = write_locked(&path, &file.contents);
            report.record(path, result);
        }

        report
    }
}

fn create_dir(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder
        .create(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))
}

fn write_locked(path: &Path, contents: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;

    file.lock()
        .with_context(|| format!("Failed to lock file: {}", path.display()))?;

    // Truncate only once the lock is held
    file.set_len(0)
        .and_then(|_| file.write_all(contents.as_bytes()))
        .and_then(|_| file.flush())
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    file.unlock()
        .with_context(|| format!("Failed to unlock file: {}", path.display()))
}

/// List every entry below `dir`, relative to `root`, sorted
pub fn list_tree(root: &Path, dir: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(dir)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.path().strip_prefix(root).ok().map(Path::to_path_buf))
        .collect()
}
