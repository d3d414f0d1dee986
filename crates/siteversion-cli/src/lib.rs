//! # siteversion-cli — Version Layout Checker
//!
//! Provides the `siteversion` command. Run from the site root with no
//! arguments it checks `versions/config.json` against the version
//! directories beside it and exits non-zero if anything required is
//! missing:
//!
//! ```bash
//! siteversion
//! siteversion --versions-dir site/versions --strict
//! ```
//!
//! Argument parsing lives here; the checks themselves live in
//! `siteversion-core`.

pub mod validate;
