//! Best-effort author identity inference
//!
//! This module provides:
//! - The `Identity` facts substituted into generated files
//! - Data source traits (`ConfigReader`, `UserResolver`) and their system implementations
//! - `EnvironmentProbe`, which never fails: every missing hint degrades to a fallback
//!
//! The probe is a heuristic. It reads a subversion auth cache for the
//! username, `~/.gitconfig` for the email, and the version file of an
//! enclosing codebase for the platform version.

pub mod parse;
pub mod sources;

use crate::platform::PlatformConfig;
use crate::settings::Settings;
use std::path::{Component, Path, PathBuf};

pub use sources::{ConfigFile, ConfigReader, FsConfigReader, SystemUser, UserResolver};

/// Username used when even the OS cannot tell us who we are
pub const FALLBACK_USER: &str = "unknown";

/// Hostname used when the machine name cannot be resolved
pub const FALLBACK_HOST: &str = "localhost";

/// Inferred author metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub uid: String,
    pub email: String,
    pub platform_version: Option<String>,
}

impl Identity {
    /// Apply explicit overrides from settings
    ///
    /// `synthesized_host` is the host of a synthesized `<uid>@<host>` email.
    /// When set, an overridden author also rebuilds that email as
    /// `<author>@<host>` unless an email override is given.
    pub fn with_overrides(mut self, settings: &Settings, synthesized_host: Option<&str>) -> Self {
        if let Some(author) = settings.author.as_deref().filter(|a| !a.is_empty()) {
            if let Some(host) = synthesized_host.filter(|_| settings.email.is_none()) {
                self.email = format!("{}@{}", author, host);
            }
            self.uid = author.to_string();
        }
        if let Some(email) = settings.email.as_deref().filter(|e| !e.is_empty()) {
            self.email = email.to_string();
        }
        if let Some(version) = settings.platform_version.as_deref() {
            self.platform_version = Some(version.to_string());
        }
        self
    }
}

/// Probes the local environment for identity hints
pub struct EnvironmentProbe<'a, P: PlatformConfig, R: ConfigReader, U: UserResolver> {
    platform: &'a P,
    reader: R,
    user: U,
}

impl<'a, P: PlatformConfig> EnvironmentProbe<'a, P, FsConfigReader, SystemUser> {
    /// Probe backed by the real home directory and process environment
    pub fn system(platform: &'a P) -> Self {
        Self::new(platform, FsConfigReader::from_env(), SystemUser)
    }
}

impl<'a, P: PlatformConfig, R: ConfigReader, U: UserResolver> EnvironmentProbe<'a, P, R, U> {
    pub fn new(platform: &'a P, reader: R, user: U) -> Self {
        Self {
            platform,
            reader,
            user,
        }
    }

    /// Infer identity for a run started in `cwd`
    pub fn probe(&self, cwd: &Path) -> Identity {
        self.probe_with(cwd, &Settings::default())
    }

    /// Infer identity, then apply settings overrides
    pub fn probe_with(&self, cwd: &Path, settings: &Settings) -> Identity {
        let uid = self.uid();
        let (email, host) = match self.email() {
            Some(email) => (email, None),
            None => {
                let host = self
                    .user
                    .hostname()
                    .unwrap_or_else(|| FALLBACK_HOST.to_string());
                (format!("{}@{}", uid, host), Some(host))
            }
        };
        let platform_version = self.platform_version(cwd);

        let identity = Identity {
            uid,
            email,
            platform_version,
        }
        .with_overrides(settings, host.as_deref());

        tracing::info!(
            uid = %identity.uid,
            email = %identity.email,
            version = ?identity.platform_version,
            "identity resolved"
        );
        identity
    }

    /// Username from the svn auth cache, else the OS user
    fn uid(&self) -> String {
        if let Some(uid) = self.svn_uid() {
            tracing::debug!("uid taken from subversion auth cache");
            return uid;
        }
        tracing::debug!("no subversion username, falling back to OS user");
        self.user
            .username()
            .unwrap_or_else(|| FALLBACK_USER.to_string())
    }

    fn svn_uid(&self) -> Option<String> {
        let svn_dir = self.reader.home_dir()?.join(".subversion");
        let keyword = self.platform.svn_keyword().to_lowercase();

        let mut candidates: Vec<(ConfigFile, String)> = self
            .reader
            .list_files(&svn_dir)
            .into_iter()
            .filter_map(|file| {
                let contents = self.reader.read_to_string(&file.path)?;
                contents
                    .to_lowercase()
                    .contains(&keyword)
                    .then_some((file, contents))
            })
            .collect();

        // Newest marker wins; equal timestamps fall back to path order
        candidates.sort_by(|(a, _), (b, _)| a.modified.cmp(&b.modified).then(a.path.cmp(&b.path)));
        let (file, contents) = candidates.pop()?;
        tracing::debug!("subversion marker file: {}", file.path.display());

        parse::svn_username(&contents)
    }

    fn email(&self) -> Option<String> {
        let gitconfig = self.reader.home_dir()?.join(".gitconfig");
        let contents = self.reader.read_to_string(&gitconfig)?;
        parse::gitconfig_email(&contents)
    }

    /// Version of the enclosing codebase, if `cwd` is inside one
    fn platform_version(&self, cwd: &Path) -> Option<String> {
        for root in codebase_roots(cwd, self.platform.marker_dir()) {
            let version_file = root.join(self.platform.version_file());
            let Some(contents) = self.reader.read_to_string(&version_file) else {
                continue;
            };
            if let Some(version) =
                parse::assigned_version(&contents, self.platform.version_variable())
            {
                tracing::debug!("platform version read from {}", version_file.display());
                return Some(version);
            }
        }
        None
    }
}

/// Candidate codebase roots: the path before each `marker` segment, deepest first
pub fn codebase_roots(cwd: &Path, marker: &str) -> Vec<PathBuf> {
    let mut roots = Vec::new();
    let mut prefix = PathBuf::new();

    for component in cwd.components() {
        if let Component::Normal(segment) = component {
            if segment == marker {
                roots.push(prefix.clone());
            }
        }
        prefix.push(component.as_os_str());
    }

    roots.reverse();
    roots
}
