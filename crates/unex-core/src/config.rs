//! Configuration management for unex

use crate::error::{ExportError, Result};
use crate::export::ExportOptions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Key-name fragments that mark a field as sensitive
pub const DEFAULT_SENSITIVE_TERMS: &[&str] =
    &["password", "ssn", "creditcard", "apikey", "token", "secret"];

/// Replacement written in place of a redacted value
pub const DEFAULT_REDACTION_MARKER: &str = "[REDACTED]";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExporterConfig {
    /// Extra or overriding domain labels
    pub domains: BTreeMap<String, String>,
    /// Sanitizer settings
    pub sanitizer: SanitizerConfig,
    /// Options used when the caller supplies none
    pub defaults: ExportOptions,
}

impl ExporterConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ExportError::Io(e).with_context(format!("Failed to read {}", path.display()))
        })?;
        Self::from_toml_str(&content)
            .map_err(|e| e.with_context(format!("Failed to parse {}", path.display())))
    }

    /// Render as a TOML document
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Sanitizer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizerConfig {
    /// Case-insensitive substrings matched against key names
    pub terms: Vec<String>,
    /// Redaction marker
    pub marker: String,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            terms: DEFAULT_SENSITIVE_TERMS.iter().map(|t| t.to_string()).collect(),
            marker: DEFAULT_REDACTION_MARKER.to_string(),
        }
    }
}
