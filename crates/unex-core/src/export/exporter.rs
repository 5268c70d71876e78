//! Exporter trait and router

use super::context::ExportContext;
use super::options::ExportOptions;
use crate::config::ExporterConfig;
use crate::domain::DomainRegistry;
use crate::error::{ExportError, Result};
use crate::transform::Sanitizer;
use crate::types::{DomainEntry, ExportFormat, ExportResult};
use chrono::{DateTime, Utc};
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::{debug, info};

/// Trait for per-format serializers
pub trait Exporter: Send + Sync {
    /// Serialize entries into the format's payload
    fn export(
        &self,
        entries: &[DomainEntry],
        options: &ExportOptions,
        context: &ExportContext,
    ) -> Result<Vec<u8>>;

    /// The format this exporter produces
    fn format(&self) -> ExportFormat;
}

/// Public entry point: resolves the domain label, sanitizes if asked, and
/// dispatches to the exporter registered for the requested format.
///
/// Holds only immutable configuration, so one router can serve concurrent
/// exports.
pub struct ExportRouter {
    exporters: HashMap<ExportFormat, Box<dyn Exporter>>,
    registry: DomainRegistry,
    sanitizer: Sanitizer,
    defaults: ExportOptions,
}

impl ExportRouter {
    /// Create a router with the default exporters and the given configuration
    pub fn new(config: &ExporterConfig) -> Self {
        let mut router = Self {
            exporters: HashMap::new(),
            registry: DomainRegistry::with_overrides(&config.domains),
            sanitizer: Sanitizer::from_config(&config.sanitizer),
            defaults: config.defaults.clone(),
        };

        // Register default exporters
        router.register(Box::new(super::json::JsonExporter::new()));
        router.register(Box::new(super::csv::CsvExporter::new()));
        router.register(Box::new(super::excel::ExcelExporter::new()));
        router.register(Box::new(super::markdown::MarkdownExporter::new()));
        router.register(Box::new(super::html::HtmlExporter::new()));
        router.register(Box::new(super::html::PdfExporter::new()));

        router
    }

    /// Register an exporter, replacing any existing one for its format
    pub fn register(&mut self, exporter: Box<dyn Exporter>) {
        self.exporters.insert(exporter.format(), exporter);
    }

    /// Check if a format is available
    pub fn has_format(&self, format: ExportFormat) -> bool {
        self.exporters.contains_key(&format)
    }

    /// Registered formats in listing order
    pub fn available_formats(&self) -> Vec<ExportFormat> {
        ExportFormat::ALL
            .into_iter()
            .filter(|format| self.has_format(*format))
            .collect()
    }

    /// Domain label lookup used for filenames and headers
    pub fn registry(&self) -> &DomainRegistry {
        &self.registry
    }

    /// Options applied when the caller passes none
    pub fn default_options(&self) -> &ExportOptions {
        &self.defaults
    }

    /// Export entries under a format tag
    pub fn export(
        &self,
        domain: &str,
        entries: &[DomainEntry],
        format: &str,
        options: Option<&ExportOptions>,
    ) -> Result<ExportResult> {
        let format: ExportFormat = format.parse()?;
        self.export_format(domain, entries, format, options)
    }

    /// Export entries in a known format, stamped with the current time
    pub fn export_format(
        &self,
        domain: &str,
        entries: &[DomainEntry],
        format: ExportFormat,
        options: Option<&ExportOptions>,
    ) -> Result<ExportResult> {
        self.export_at(domain, entries, format, options, Utc::now())
    }

    /// Export entries as of a given instant
    pub fn export_at(
        &self,
        domain: &str,
        entries: &[DomainEntry],
        format: ExportFormat,
        options: Option<&ExportOptions>,
        now: DateTime<Utc>,
    ) -> Result<ExportResult> {
        let exporter = self
            .exporters
            .get(&format)
            .ok_or_else(|| ExportError::UnsupportedFormat(format.to_string()))?;
        let options = options.unwrap_or(&self.defaults);
        let context = ExportContext::new(domain, self.registry.label(domain), now);

        debug!(
            "Exporting {} {} entries as {}",
            entries.len(),
            domain,
            format
        );

        let entries: Cow<'_, [DomainEntry]> = if options.sanitize_data {
            Cow::Owned(self.sanitizer.sanitize(entries))
        } else {
            Cow::Borrowed(entries)
        };

        let data = exporter.export(&entries, options, &context)?;
        let filename = context.filename(format.extension());

        info!(
            "Exported {} entries to {} ({} bytes)",
            entries.len(),
            filename,
            data.len()
        );

        Ok(ExportResult {
            success: true,
            format,
            filename,
            size_bytes: data.len(),
            data,
            mime_type: format.mime_type(),
            entry_count: entries.len(),
            created_at: now,
        })
    }
}

impl Default for ExportRouter {
    fn default() -> Self {
        Self::new(&ExporterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 3, 16, 5, 9).unwrap()
    }

    fn entries() -> Vec<DomainEntry> {
        vec![
            DomainEntry::new("1", "Checking")
                .with_metadata(json!({"bank": "First", "address": {"city": "Austin"}, "password": "hunter2"})),
            DomainEntry::new("2", "Savings").with_field("rate", 4.5),
            DomainEntry::new("3", "Brokerage").with_field("apiKeyValue", "abc"),
        ]
    }

    struct StubExporter;

    impl Exporter for StubExporter {
        fn export(
            &self,
            entries: &[DomainEntry],
            _options: &ExportOptions,
            _context: &ExportContext,
        ) -> Result<Vec<u8>> {
            Ok(format!("{} entries", entries.len()).into_bytes())
        }

        fn format(&self) -> ExportFormat {
            ExportFormat::Markdown
        }
    }

    #[test]
    fn test_router_has_all_formats() {
        let router = ExportRouter::default();
        assert_eq!(router.available_formats(), ExportFormat::ALL.to_vec());
    }

    #[test]
    fn test_register_replaces_exporter() {
        let mut router = ExportRouter::default();
        router.register(Box::new(StubExporter));

        let result = router
            .export_at("financial", &entries(), ExportFormat::Markdown, None, now())
            .unwrap();
        assert_eq!(result.as_text(), Some("3 entries"));
    }

    #[test]
    fn test_unsupported_format() {
        let router = ExportRouter::default();
        let err = router.export("financial", &entries(), "docx", None).unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedFormat(ref f) if f == "docx"));
    }

    #[test]
    fn test_result_fields() {
        let router = ExportRouter::default();
        let result = router
            .export_at("financial", &entries(), ExportFormat::Excel, None, now())
            .unwrap();

        assert!(result.success);
        assert_eq!(result.format, ExportFormat::Excel);
        assert_eq!(result.filename, "Financial-2024-11-03-160509.xlsx");
        assert_eq!(result.size_bytes, result.data.len());
        assert_eq!(result.entry_count, 3);
        assert_eq!(result.created_at, now());
        assert_eq!(
            result.mime_type,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
    }

    #[test]
    fn test_filename_extension_per_format() {
        let router = ExportRouter::default();
        let expected = [
            (ExportFormat::Json, "json"),
            (ExportFormat::Csv, "csv"),
            (ExportFormat::Excel, "xlsx"),
            (ExportFormat::Pdf, "pdf"),
            (ExportFormat::Markdown, "md"),
            (ExportFormat::Html, "html"),
        ];

        for (format, ext) in expected {
            let result = router
                .export_at("travel", &entries(), format, None, now())
                .unwrap();
            assert_eq!(result.filename, format!("Travel-2024-11-03-160509.{}", ext));
        }
    }

    #[test]
    fn test_unknown_domain_uses_identifier() {
        let router = ExportRouter::default();
        let result = router
            .export_at("garden-plants", &entries(), ExportFormat::Json, None, now())
            .unwrap();

        assert_eq!(result.filename, "garden-plants-2024-11-03-160509.json");
        let doc: Value = serde_json::from_slice(&result.data).unwrap();
        assert_eq!(doc["domainName"], json!("garden-plants"));
    }

    #[test]
    fn test_configured_domain_label() {
        let mut config = ExporterConfig::default();
        config
            .domains
            .insert("financial".to_string(), "Money".to_string());

        let router = ExportRouter::new(&config);
        let result = router
            .export_at("financial", &entries(), ExportFormat::Csv, None, now())
            .unwrap();
        assert_eq!(result.filename, "Money-2024-11-03-160509.csv");
    }

    #[test]
    fn test_sanitize_before_serializing() {
        let router = ExportRouter::default();
        let options = ExportOptions {
            sanitize_data: true,
            ..ExportOptions::default()
        };
        let input = entries();

        let result = router
            .export_at("financial", &input, ExportFormat::Json, Some(&options), now())
            .unwrap();
        let doc: Value = serde_json::from_slice(&result.data).unwrap();

        assert_eq!(doc["entries"][0]["metadata"]["password"], json!("[REDACTED]"));
        assert_eq!(doc["entries"][0]["metadata"]["bank"], json!("First"));
        assert_eq!(doc["entries"][2]["metadata"]["apiKeyValue"], json!("[REDACTED]"));
        assert_eq!(input[0].metadata["password"], json!("hunter2"));
    }

    #[test]
    fn test_no_sanitize_by_default() {
        let router = ExportRouter::default();
        let result = router
            .export_at("financial", &entries(), ExportFormat::Csv, None, now())
            .unwrap();
        assert!(result.as_text().unwrap().contains("hunter2"));
    }

    #[test]
    fn test_configured_defaults_apply_without_options() {
        let mut config = ExporterConfig::default();
        config.defaults.sanitize_data = true;
        config.sanitizer.marker = "***".to_string();

        let router = ExportRouter::new(&config);
        let result = router
            .export_at("financial", &entries(), ExportFormat::Csv, None, now())
            .unwrap();
        let text = result.as_text().unwrap();
        assert!(!text.contains("hunter2"));
        assert!(text.contains("***"));
    }

    #[test]
    fn test_empty_csv_produces_no_result() {
        let router = ExportRouter::default();
        for format in [ExportFormat::Csv, ExportFormat::Excel] {
            let err = router.export_at("financial", &[], format, None, now()).unwrap_err();
            assert!(matches!(err, ExportError::EmptyExport { format: f } if f == format));
        }
    }

    #[test]
    fn test_order_preserved_across_formats() {
        let router = ExportRouter::default();
        let input = entries();

        for format in ExportFormat::ALL {
            let result = router.export_at("financial", &input, format, None, now()).unwrap();
            let text = result.as_text().unwrap();
            let positions: Vec<_> = ["Checking", "Savings", "Brokerage"]
                .iter()
                .map(|title| text.find(title).unwrap())
                .collect();
            assert!(
                positions.windows(2).all(|w| w[0] < w[1]),
                "{} reordered entries",
                format
            );
        }
    }

    #[test]
    fn test_concurrent_exports() {
        let router = std::sync::Arc::new(ExportRouter::default());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let router = router.clone();
                std::thread::spawn(move || {
                    let entries: Vec<_> = (0..=i)
                        .map(|n| DomainEntry::new(n.to_string(), format!("Entry {}", n)))
                        .collect();
                    router
                        .export_at("habits", &entries, ExportFormat::Json, None, now())
                        .unwrap()
                        .entry_count
                })
            })
            .collect();

        let counts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(counts, vec![1, 2, 3, 4]);
    }
}
