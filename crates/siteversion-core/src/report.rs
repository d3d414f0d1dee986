//! # Validation Report
//!
//! Errors and warnings accumulated during one run, in traversal order,
//! and the console rendering produced once the traversal is complete.

use std::fmt;

use crate::layout::Severity;

const ERRORS_HEADER: &str = "❌ Validation failed with errors:";
const WARNINGS_HEADER: &str = "⚠️  Warnings:";
const ALL_PASSED: &str = "✓ All versions validated successfully";
const PASSED_WITH_WARNINGS: &str = "✓ Validation passed (with warnings)";

/// Overall result of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    PassedWithWarnings,
    Failed,
}

/// Findings from one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Record a finding under the given severity.
    pub fn add(&mut self, severity: Severity, message: impl Into<String>) {
        match severity {
            Severity::Error => self.add_error(message),
            Severity::Warning => self.add_warning(message),
        }
    }

    /// No errors were recorded. Warnings do not affect validity.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn outcome(&self) -> Outcome {
        match (self.is_valid(), self.has_warnings()) {
            (false, _) => Outcome::Failed,
            (true, true) => Outcome::PassedWithWarnings,
            (true, false) => Outcome::Passed,
        }
    }

    /// Process exit code: 1 if any error was recorded, else 0.
    ///
    /// With `strict`, warnings also fail the run.
    pub fn exit_code(&self, strict: bool) -> u8 {
        match self.outcome() {
            Outcome::Failed => 1,
            Outcome::PassedWithWarnings if strict => 1,
            _ => 0,
        }
    }

    /// The console report, one finding per line.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.errors.is_empty() {
            writeln!(f, "{ERRORS_HEADER}")?;
            for error in &self.errors {
                writeln!(f, "  - {error}")?;
            }
        }

        if !self.warnings.is_empty() {
            writeln!(f)?;
            writeln!(f, "{WARNINGS_HEADER}")?;
            for warning in &self.warnings {
                writeln!(f, "  - {warning}")?;
            }
        }

        match self.outcome() {
            Outcome::Passed => writeln!(f, "{ALL_PASSED}"),
            Outcome::PassedWithWarnings => {
                writeln!(f)?;
                writeln!(f, "{PASSED_WITH_WARNINGS}")
            }
            Outcome::Failed => Ok(()),
        }
    }
}
