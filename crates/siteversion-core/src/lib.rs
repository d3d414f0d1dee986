//! # siteversion-core — Course-Site Version Layout Checks
//!
//! Checks that a course site's `versions/config.json` agrees with the
//! version directories on disk. Every declared version needs a directory,
//! a `content/` subfolder holding the required published files, and
//! (softly) a `demos/` folder. A `defaultVersion` must be declared.
//!
//! ## Layout
//!
//! ```text
//! versions/
//! ├── config.json
//! └── <id>/
//!     ├── content/
//!     │   ├── schedule.json
//!     │   ├── resources.json
//!     │   ├── staff.json
//!     │   ├── home.json
//!     │   └── syllabus.pdf   (warning only: compiled locally)
//!     └── demos/             (warning only)
//! ```
//!
//! ## Crate Policy
//!
//! - Read-only: nothing under the versions root is ever written.
//! - Findings are accumulated into a [`ValidationReport`] and rendered
//!   once after the traversal completes.
//! - Only a missing or unreadable configuration document aborts a run.

pub mod config;
pub mod error;
pub mod layout;
pub mod report;
pub mod validator;

pub use config::SiteConfig;
pub use error::{ValidateError, ValidateResult};
pub use layout::{RequiredFile, Severity, VersionsLayout, REQUIRED_FILES};
pub use report::{Outcome, ValidationReport};
pub use validator::ConfigValidator;
