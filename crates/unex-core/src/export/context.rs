//! Per-call export context

use chrono::{DateTime, SecondsFormat, Utc};

/// Everything about one export call that is not the entries or options
#[derive(Debug, Clone)]
pub struct ExportContext {
    /// Domain identifier as supplied by the caller
    pub domain: String,
    /// Human-readable domain label
    pub domain_label: String,
    /// The instant the export ran
    pub timestamp: DateTime<Utc>,
}

impl ExportContext {
    /// Create a new context
    pub fn new(
        domain: impl Into<String>,
        domain_label: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            domain: domain.into(),
            domain_label: domain_label.into(),
            timestamp,
        }
    }

    /// Filename stamp: `YYYY-MM-DD-HHmmss`
    pub fn file_stamp(&self) -> String {
        self.timestamp.format("%Y-%m-%d-%H%M%S").to_string()
    }

    /// ISO-8601 with millisecond precision
    pub fn iso_timestamp(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// "Generated at" stamp for document headers
    pub fn display_timestamp(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }

    /// `<DomainLabel>-<stamp>.<ext>`.
    ///
    /// Path separators and control characters in the label become `-`, so
    /// the name always stays a single path component.
    pub fn filename(&self, extension: &str) -> String {
        let label: String = self
            .domain_label
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' => '-',
                c if c.is_control() => '-',
                c => c,
            })
            .collect();
        format!("{}-{}.{}", label, self.file_stamp(), extension)
    }
}
