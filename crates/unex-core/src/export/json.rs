//! JSON exporter

use super::context::ExportContext;
use super::exporter::Exporter;
use super::options::ExportOptions;
use crate::error::Result;
use crate::types::{DomainEntry, ExportFormat};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope schema version
pub const ENVELOPE_VERSION: &str = "1.0";

/// Pretty-printed JSON envelope exporter
#[derive(Debug, Default)]
pub struct JsonExporter;

impl JsonExporter {
    /// Create a new JSON exporter
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for JsonExporter {
    fn export(
        &self,
        entries: &[DomainEntry],
        options: &ExportOptions,
        context: &ExportContext,
    ) -> Result<Vec<u8>> {
        let envelope = ExportEnvelope::build(entries, options, context);
        Ok(serde_json::to_vec_pretty(&envelope)?)
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }
}

/// Top-level JSON document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEnvelope {
    pub domain: String,
    pub domain_name: String,
    pub export_date: String,
    pub entry_count: usize,
    pub entries: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<EnvelopeMetadata>,
}

impl ExportEnvelope {
    /// Build the envelope.
    ///
    /// Without `include_metadata` each entry is reduced to its bare metadata
    /// object and the envelope's own `metadata` block is omitted.
    pub fn build(entries: &[DomainEntry], options: &ExportOptions, context: &ExportContext) -> Self {
        let entries: Vec<Value> = entries
            .iter()
            .map(|entry| {
                if options.include_metadata {
                    Value::Object(entry.to_object())
                } else {
                    Value::Object(entry.metadata.clone())
                }
            })
            .collect();

        let metadata = options.include_metadata.then(|| EnvelopeMetadata {
            version: ENVELOPE_VERSION.to_string(),
            sanitized: options.sanitize_data,
            generator: concat!("unex ", env!("CARGO_PKG_VERSION")).to_string(),
        });

        Self {
            domain: context.domain.clone(),
            domain_name: context.domain_label.clone(),
            export_date: context.iso_timestamp(),
            entry_count: entries.len(),
            entries,
            metadata,
        }
    }
}

/// Information about the export itself
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeMetadata {
    pub version: String,
    pub sanitized: bool,
    pub generator: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn context() -> ExportContext {
        ExportContext::new(
            "documents",
            "Documents",
            Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        )
    }

    fn entries() -> Vec<DomainEntry> {
        vec![
            DomainEntry::new("a", "Passport")
                .with_description("Blue booklet")
                .with_metadata(json!({"category": "Legal", "expiry": "2030-01-01"}))
                .with_created_at("2024-01-01T00:00:00Z"),
            DomainEntry::new("b", "Lease").with_field("rent", 1200),
        ]
    }

    fn export(options: &ExportOptions) -> Value {
        let bytes = JsonExporter::new().export(&entries(), options, &context()).unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_json_exporter_format() {
        assert_eq!(JsonExporter::new().format(), ExportFormat::Json);
    }

    #[test]
    fn test_envelope_fields() {
        let doc = export(&ExportOptions::default());

        assert_eq!(doc["domain"], json!("documents"));
        assert_eq!(doc["domainName"], json!("Documents"));
        assert_eq!(doc["exportDate"], json!("2024-01-02T03:04:05.000Z"));
        assert_eq!(doc["entryCount"], json!(2));
        assert_eq!(doc["entries"].as_array().unwrap().len(), 2);
        assert_eq!(doc["metadata"]["version"], json!("1.0"));
    }

    #[test]
    fn test_entries_keep_wrapper_fields() {
        let doc = export(&ExportOptions::default());
        let first = &doc["entries"][0];

        assert_eq!(first["id"], json!("a"));
        assert_eq!(first["title"], json!("Passport"));
        assert_eq!(first["description"], json!("Blue booklet"));
        assert_eq!(first["metadata"]["category"], json!("Legal"));
        assert_eq!(first["createdAt"], json!("2024-01-01T00:00:00Z"));
        assert_eq!(doc["entries"][1]["id"], json!("b"));
    }

    #[test]
    fn test_bare_metadata_without_include_metadata() {
        let options = ExportOptions {
            include_metadata: false,
            ..ExportOptions::default()
        };
        let doc = export(&options);

        assert_eq!(
            doc["entries"],
            json!([{"category": "Legal", "expiry": "2030-01-01"}, {"rent": 1200}])
        );
        assert!(doc.get("metadata").is_none());
        assert_eq!(doc["entryCount"], json!(2));
    }

    #[test]
    fn test_two_space_indentation() {
        let bytes = JsonExporter::new()
            .export(&entries(), &ExportOptions::default(), &context())
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("{\n  \"domain\": \"documents\""));
    }

    #[test]
    fn test_envelope_round_trip_length() {
        let bytes = JsonExporter::new()
            .export(&entries(), &ExportOptions::default(), &context())
            .unwrap();
        let envelope: ExportEnvelope = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(envelope.entry_count, envelope.entries.len());
    }

    #[test]
    fn test_empty_entries_allowed() {
        let bytes = JsonExporter::new()
            .export(&[], &ExportOptions::default(), &context())
            .unwrap();
        let doc: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(doc["entryCount"], json!(0));
        assert_eq!(doc["entries"], json!([]));
    }
}
