//! # Config Validator
//!
//! A single linear pass over the declared versions:
//!
//! 1. Load the configuration document (missing or malformed aborts).
//! 2. Require a non-empty `defaultVersion`.
//! 3. Per version entry, in declaration order:
//!    `id` present → version directory → `content/` → required files,
//!    then `demos/`. A missing directory skips only that entry's nested
//!    checks.
//! 4. With cross-checks enabled: flag repeated ids and a
//!    `defaultVersion` that names no declared id. Off by default.
//!
//! Findings are appended to a [`ValidationReport`]; nothing is printed
//! and nothing on disk is modified.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::config::{entry_id, SiteConfig};
use crate::error::ValidateResult;
use crate::layout::{VersionsLayout, REQUIRED_FILES};
use crate::report::ValidationReport;

/// Checks a versions tree against its configuration document.
#[derive(Debug, Clone, Default)]
pub struct ConfigValidator {
    layout: VersionsLayout,
    cross_checks: bool,
}

impl ConfigValidator {
    pub fn new(layout: VersionsLayout) -> Self {
        Self {
            layout,
            cross_checks: false,
        }
    }

    /// Also warn on duplicate ids and an undeclared `defaultVersion`.
    pub fn with_cross_checks(mut self, enabled: bool) -> Self {
        self.cross_checks = enabled;
        self
    }

    /// Run all checks and return the accumulated report.
    ///
    /// Only a missing, unreadable, or malformed configuration document
    /// is returned as `Err`.
    pub fn validate(&self) -> ValidateResult<ValidationReport> {
        let config_path = self.layout.config_path();
        tracing::debug!(path = %config_path.display(), "loading versions config");
        let config = SiteConfig::load(&config_path)?;
        Ok(self.check(&config))
    }

    /// Run the per-version checks for an already loaded document.
    pub fn check(&self, config: &SiteConfig) -> ValidationReport {
        let mut report = ValidationReport::new();

        if !config.has_default_version() {
            report.add_error(format!(
                "No defaultVersion specified in {}",
                self.layout.config_file
            ));
        }

        let mut declared = BTreeSet::new();
        for entry in &config.versions {
            let Some(id) = entry_id(entry) else {
                report.add_error(format!("Version missing 'id' field: {}", compact(entry)));
                continue;
            };
            if !declared.insert(id.clone()) && self.cross_checks {
                report.add_warning(format!("Duplicate version id: {id}"));
            }
            self.check_version(&id, &mut report);
        }

        if let Some(default) = config.default_version().filter(|_| self.cross_checks) {
            if !declared.contains(&default) {
                report.add_warning(format!(
                    "defaultVersion '{default}' does not match any declared version"
                ));
            }
        }

        tracing::info!(
            versions = config.versions.len(),
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "versions validation finished"
        );
        report
    }

    fn check_version(&self, id: &str, report: &mut ValidationReport) {
        let version_dir = self.layout.version_dir(id);
        if !version_dir.exists() {
            tracing::debug!(version = id, "version directory missing");
            report.add_error(format!("Directory not found for version: {id}"));
            return;
        }

        let content_dir = self.layout.content_dir(id);
        if !content_dir.exists() {
            tracing::debug!(version = id, "content directory missing");
            report.add_error(format!(
                "Content directory not found: {}",
                content_dir.display()
            ));
            return;
        }

        for file in &REQUIRED_FILES {
            if !content_dir.join(file.name).exists() {
                tracing::debug!(version = id, file = file.name, severity = ?file.severity, "required file missing");
                report.add(file.severity, file.missing_message(id));
            }
        }

        let demos_dir = self.layout.demos_dir(id);
        if !demos_dir.exists() {
            report.add_warning(format!(
                "Demos directory not found: {}",
                demos_dir.display()
            ));
        }
    }
}

/// Entry rendered on one line for error messages.
fn compact(entry: &Value) -> String {
    serde_json::to_string(entry).unwrap_or_else(|_| entry.to_string())
}
