//! # Versions Directory Layout
//!
//! Named constants for where the configuration document and the
//! per-version trees live, plus the required-file policy applied to every
//! version's `content/` directory.

use std::path::PathBuf;

/// Default root holding `config.json` and one directory per version.
pub const DEFAULT_VERSIONS_DIR: &str = "versions";

/// Default configuration document name inside the versions root.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Subdirectory of a version holding the published files.
pub const CONTENT_DIR: &str = "content";

/// Optional subdirectory of a version holding demonstration material.
pub const DEMOS_DIR: &str = "demos";

/// How a missing file is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Recorded as an error; fails the run.
    Error,
    /// Recorded as a warning; the run still passes.
    Warning,
}

/// A file every version's content directory is expected to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredFile {
    pub name: &'static str,
    pub severity: Severity,
    /// Appended to the finding in parentheses, if set.
    pub note: Option<&'static str>,
}

impl RequiredFile {
    const fn error(name: &'static str) -> Self {
        Self {
            name,
            severity: Severity::Error,
            note: None,
        }
    }

    /// Finding text for this file missing from version `id`.
    pub fn missing_message(&self, id: &str) -> String {
        match self.note {
            Some(note) => format!("Missing {} in {id} ({note})", self.name),
            None => format!("Missing {} in {id}", self.name),
        }
    }
}

/// Required content files, in check order.
pub const REQUIRED_FILES: [RequiredFile; 5] = [
    RequiredFile::error("schedule.json"),
    RequiredFile::error("resources.json"),
    RequiredFile::error("staff.json"),
    RequiredFile::error("home.json"),
    RequiredFile {
        name: "syllabus.pdf",
        severity: Severity::Warning,
        note: Some("compile locally"),
    },
];

/// Where the configuration document and version trees are found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionsLayout {
    /// Root directory; version directories are resolved relative to it.
    pub versions_dir: PathBuf,
    /// File name of the configuration document inside `versions_dir`.
    pub config_file: String,
}

impl Default for VersionsLayout {
    fn default() -> Self {
        Self {
            versions_dir: PathBuf::from(DEFAULT_VERSIONS_DIR),
            config_file: DEFAULT_CONFIG_FILE.to_string(),
        }
    }
}

impl VersionsLayout {
    pub fn new(versions_dir: impl Into<PathBuf>, config_file: impl Into<String>) -> Self {
        Self {
            versions_dir: versions_dir.into(),
            config_file: config_file.into(),
        }
    }

    /// Layout rooted at `versions_dir` with the default config file name.
    pub fn at(versions_dir: impl Into<PathBuf>) -> Self {
        Self::new(versions_dir, DEFAULT_CONFIG_FILE)
    }

    pub fn config_path(&self) -> PathBuf {
        self.versions_dir.join(&self.config_file)
    }

    /// Directory of version `id`. Leading separators are stripped so an
    /// absolute-looking id still resolves under the versions root.
    pub fn version_dir(&self, id: &str) -> PathBuf {
        self.versions_dir
            .join(id.trim_start_matches(|c: char| c == '/' || c == '\\'))
    }

    pub fn content_dir(&self, id: &str) -> PathBuf {
        self.version_dir(id).join(CONTENT_DIR)
    }

    pub fn demos_dir(&self, id: &str) -> PathBuf {
        self.version_dir(id).join(DEMOS_DIR)
    }
}
