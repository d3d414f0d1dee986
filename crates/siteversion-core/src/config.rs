//! # Configuration Document
//!
//! The `versions/config.json` model. Only the two fields the checks need
//! are read; version entries are kept as raw JSON so an entry without a
//! usable `id` can be echoed back verbatim in its finding.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ValidateError, ValidateResult};

/// Parsed configuration document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default)]
    pub default_version: Option<Value>,
    #[serde(default)]
    pub versions: Vec<Value>,
}

impl SiteConfig {
    /// Load and parse the document at `path`.
    pub fn load(path: &Path) -> ValidateResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ValidateError::ConfigNotFound(path.to_path_buf())
            } else {
                ValidateError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Self::parse(&text, path)
    }

    /// Parse document text. `path` is only used in error messages.
    pub fn parse(text: &str, path: &Path) -> ValidateResult<Self> {
        let value: Value = serde_json::from_str(text).map_err(|source| ValidateError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if !value.is_object() {
            return Err(ValidateError::InvalidShape {
                path: path.to_path_buf(),
                reason: format!("expected a JSON object, found {}", json_kind(&value)),
            });
        }
        serde_json::from_value(value).map_err(|e| ValidateError::InvalidShape {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Whether `defaultVersion` is set to a truthy value: a non-empty
    /// string or container, a non-zero number, or `true`.
    pub fn has_default_version(&self) -> bool {
        self.default_version.as_ref().is_some_and(is_truthy)
    }

    /// The declared default version as an id, if it is one.
    pub fn default_version(&self) -> Option<String> {
        self.default_version.as_ref().and_then(scalar_id)
    }
}

/// The usable `id` of a version entry.
///
/// Non-empty strings are taken as-is and non-zero integers are rendered in
/// decimal. Anything else, including a non-object entry, counts as missing.
pub fn entry_id(entry: &Value) -> Option<String> {
    entry.get("id").and_then(scalar_id)
}

fn scalar_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if (n.is_i64() || n.is_u64()) && is_truthy(value) => {
            Some(n.to_string())
        }
        _ => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
