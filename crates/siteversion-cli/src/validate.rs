//! # Validate Command
//!
//! Runs the versions check, prints the report to stdout, and maps the
//! outcome to a process exit code.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use siteversion_core::layout::{DEFAULT_CONFIG_FILE, DEFAULT_VERSIONS_DIR};
use siteversion_core::{ConfigValidator, ValidateError, VersionsLayout};

/// Arguments for the versions check.
#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Directory holding the config document and one directory per version.
    #[arg(long, default_value = DEFAULT_VERSIONS_DIR)]
    pub versions_dir: PathBuf,

    /// Name of the config document inside the versions directory.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: String,

    /// Treat warnings as failures.
    #[arg(long)]
    pub strict: bool,

    /// Also warn on repeated version ids and an undeclared defaultVersion.
    #[arg(long)]
    pub cross_check: bool,
}

impl Default for ValidateArgs {
    fn default() -> Self {
        Self {
            versions_dir: PathBuf::from(DEFAULT_VERSIONS_DIR),
            config_file: DEFAULT_CONFIG_FILE.to_string(),
            strict: false,
            cross_check: false,
        }
    }
}

impl ValidateArgs {
    pub fn layout(&self) -> VersionsLayout {
        VersionsLayout::new(&self.versions_dir, &self.config_file)
    }
}

/// Execute the check, writing the report to stdout.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_validate_to(args, &mut out)
}

/// Execute the check, writing the report to `out`.
///
/// A missing or malformed config document is reported on `out` and yields
/// exit code 1. Other I/O failures are returned as errors.
pub fn run_validate_to(args: &ValidateArgs, out: &mut impl Write) -> Result<u8> {
    let layout = args.layout();
    tracing::debug!(
        ?layout,
        strict = args.strict,
        cross_check = args.cross_check,
        "running versions check"
    );

    let validator = ConfigValidator::new(layout).with_cross_checks(args.cross_check);
    let report = match validator.validate() {
        Ok(report) => report,
        Err(e @ ValidateError::ConfigNotFound(_)) => {
            writeln!(out, "Error: {e}").context("failed to write report")?;
            return Ok(1);
        }
        Err(e) if e.is_malformed_config() => {
            writeln!(out, "Error: {e}").context("failed to write report")?;
            return Ok(1);
        }
        Err(e) => return Err(e).context("versions check aborted"),
    };

    write!(out, "{report}").context("failed to write report")?;
    Ok(report.exit_code(args.strict))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &ValidateArgs) -> (u8, String) {
        let mut buf = Vec::new();
        let code = run_validate_to(args, &mut buf).unwrap();
        (code, String::from_utf8(buf).unwrap())
    }

    fn args_for(dir: &std::path::Path) -> ValidateArgs {
        ValidateArgs {
            versions_dir: dir.to_path_buf(),
            ..ValidateArgs::default()
        }
    }

    #[test]
    fn default_args_point_at_versions_config_json() {
        let args = ValidateArgs::default();
        assert_eq!(
            args.layout().config_path(),
            PathBuf::from("versions/config.json")
        );
        assert!(!args.strict);
    }

    #[test]
    fn missing_config_prints_error_and_exits_1() {
        let dir = tempfile::tempdir().unwrap();
        let (code, text) = run(&args_for(dir.path()));
        assert_eq!(code, 1);
        let expected = format!("Error: {} not found\n", dir.path().join("config.json").display());
        assert_eq!(text, expected);
    }

    #[test]
    fn malformed_config_prints_error_and_exits_1() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), "{\"versions\": [").unwrap();
        let (code, text) = run(&args_for(dir.path()));
        assert_eq!(code, 1);
        assert!(text.starts_with("Error: failed to parse "));
        assert_eq!(text.matches("failed to parse").count(), 1);
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn custom_config_file_name_is_used() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("site.json"), r#"{"versions": []}"#).unwrap();
        let args = ValidateArgs {
            config_file: "site.json".to_string(),
            ..args_for(dir.path())
        };
        let (code, text) = run(&args);
        assert_eq!(code, 1);
        assert!(text.contains("No defaultVersion specified in site.json"));
    }

    #[test]
    fn config_path_that_is_a_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("config.json")).unwrap();
        let mut buf = Vec::new();
        assert!(run_validate_to(&args_for(dir.path()), &mut buf).is_err());
    }
}
