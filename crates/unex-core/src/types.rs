//! Core type definitions for unex

use crate::error::{ExportError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Nested metadata attached to an entry.
///
/// Values are `serde_json::Value`, which is the recursive sum type
/// `Null | Bool | Number | String | Array | Object` the exporter walks.
/// Key order follows the input document.
pub type Metadata = serde_json::Map<String, Value>;

/// One logical record within a domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainEntry {
    /// Opaque identifier; numeric ids are kept in their decimal form
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    /// Display name; `null` reads as empty
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: String,
    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Arbitrarily nested metadata
    #[serde(default, deserialize_with = "nullable_metadata")]
    pub metadata: Metadata,
    /// Creation timestamp as supplied by the data source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl DomainEntry {
    /// Create an entry with empty metadata
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            metadata: Metadata::new(),
            created_at: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the metadata.
    ///
    /// An object becomes the metadata mapping as-is; any other value is
    /// stored under the single key `value`.
    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = match metadata {
            Value::Object(map) => map,
            Value::Null => Metadata::new(),
            other => {
                let mut map = Metadata::new();
                map.insert("value".to_string(), other);
                map
            }
        };
        self
    }

    /// Set a single top-level metadata field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Set the creation timestamp
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    /// View the entry as the object the flattener and JSON envelope see
    pub fn to_object(&self) -> Metadata {
        let mut object = Metadata::new();
        object.insert("id".to_string(), Value::String(self.id.clone()));
        object.insert("title".to_string(), Value::String(self.title.clone()));
        if let Some(ref description) = self.description {
            object.insert("description".to_string(), Value::String(description.clone()));
        }
        object.insert("metadata".to_string(), Value::Object(self.metadata.clone()));
        if let Some(ref created_at) = self.created_at {
            object.insert("createdAt".to_string(), Value::String(created_at.clone()));
        }
        object
    }
}

fn opaque_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "entry id must be a string or number, got {}",
            other
        ))),
    }
}

fn nullable_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_metadata<'de, D>(deserializer: D) -> std::result::Result<Metadata, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Metadata>::deserialize(deserializer)?.unwrap_or_default())
}

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
    Excel,
    Pdf,
    Markdown,
    Html,
}

impl ExportFormat {
    /// All formats, in the order they are listed to users
    pub const ALL: [ExportFormat; 6] = [
        ExportFormat::Json,
        ExportFormat::Csv,
        ExportFormat::Excel,
        ExportFormat::Pdf,
        ExportFormat::Markdown,
        ExportFormat::Html,
    ];

    /// The format tag
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "excel",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Markdown => "markdown",
            ExportFormat::Html => "html",
        }
    }

    /// File extension used in the generated filename
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "xlsx",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Markdown => "md",
            ExportFormat::Html => "html",
        }
    }

    /// MIME type of the payload
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            // The pdf payload is print-ready HTML; rasterizing is left to the renderer
            ExportFormat::Pdf | ExportFormat::Html => "text/html",
            ExportFormat::Markdown => "text/markdown",
        }
    }

    /// Whether the format needs a flattened 2-D table
    pub fn is_tabular(&self) -> bool {
        matches!(self, ExportFormat::Csv | ExportFormat::Excel)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| ExportError::UnsupportedFormat(s.to_string()))
    }
}

/// The output of a successful export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportResult {
    pub success: bool,
    pub format: ExportFormat,
    /// `<DomainLabel>-<YYYY-MM-DD-HHmmss>.<ext>`
    pub filename: String,
    #[serde(skip)]
    pub data: Vec<u8>,
    pub size_bytes: usize,
    pub mime_type: &'static str,
    pub entry_count: usize,
    pub created_at: DateTime<Utc>,
}

impl ExportResult {
    /// View the payload as UTF-8 text
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.data).ok()
    }
}
