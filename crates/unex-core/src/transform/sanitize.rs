//! Key-name based redaction
//!
//! Only key names are inspected. A sensitive value stored under an
//! innocuous key (say a card number under `notes`) passes through untouched.

use crate::config::SanitizerConfig;
use crate::types::{DomainEntry, Metadata};
use serde_json::Value;
use tracing::debug;

/// Redacts values whose key contains a sensitive term
#[derive(Debug, Clone)]
pub struct Sanitizer {
    /// Lowercased, non-empty terms
    terms: Vec<String>,
    marker: String,
}

impl Sanitizer {
    /// Create a sanitizer from a term list and marker
    pub fn new<I, S>(terms: I, marker: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            terms: terms
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
            marker: marker.into(),
        }
    }

    /// Create a sanitizer from configuration
    pub fn from_config(config: &SanitizerConfig) -> Self {
        Self::new(&config.terms, config.marker.clone())
    }

    /// The redaction marker
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Whether a key name is sensitive (case-insensitive substring match)
    pub fn is_sensitive(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        self.terms.iter().any(|term| key.contains(term.as_str()))
    }

    /// Sanitize a collection, returning new entries in the same order
    pub fn sanitize(&self, entries: &[DomainEntry]) -> Vec<DomainEntry> {
        debug!("Sanitizing {} entries", entries.len());
        entries.iter().map(|e| self.sanitize_entry(e)).collect()
    }

    /// Sanitize a single entry, wrapper keys included
    pub fn sanitize_entry(&self, entry: &DomainEntry) -> DomainEntry {
        let redact = |key: &str, value: &str| {
            if self.is_sensitive(key) {
                self.marker.clone()
            } else {
                value.to_string()
            }
        };

        // A sensitive `metadata` key keeps its shape but loses every value
        let metadata = if self.is_sensitive("metadata") {
            entry
                .metadata
                .keys()
                .map(|key| (key.clone(), Value::String(self.marker.clone())))
                .collect()
        } else {
            self.sanitize_map(&entry.metadata)
        };

        DomainEntry {
            id: redact("id", &entry.id),
            title: redact("title", &entry.title),
            description: entry.description.as_deref().map(|d| redact("description", d)),
            metadata,
            created_at: entry.created_at.as_deref().map(|c| redact("createdAt", c)),
        }
    }

    /// Sanitize a mapping recursively
    pub fn sanitize_map(&self, map: &Metadata) -> Metadata {
        map.iter()
            .map(|(key, value)| {
                let value = if self.is_sensitive(key) {
                    Value::String(self.marker.clone())
                } else {
                    self.sanitize_value(value)
                };
                (key.clone(), value)
            })
            .collect()
    }

    fn sanitize_value(&self, value: &Value) -> Value {
        match value {
            Value::Object(map) => Value::Object(self.sanitize_map(map)),
            Value::Array(items) => Value::Array(items.iter().map(|v| self.sanitize_value(v)).collect()),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => value.clone(),
        }
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::from_config(&SanitizerConfig::default())
    }
}
