//! Markdown exporter

use super::context::ExportContext;
use super::exporter::Exporter;
use super::options::ExportOptions;
use crate::error::Result;
use crate::transform::raw_string;
use crate::types::{DomainEntry, ExportFormat};

/// Markdown report exporter
#[derive(Debug, Default)]
pub struct MarkdownExporter;

impl MarkdownExporter {
    /// Create a new Markdown exporter
    pub fn new() -> Self {
        Self
    }

    /// Render the document header
    fn render_header(&self, entries: &[DomainEntry], context: &ExportContext) -> String {
        let mut header = String::new();
        header.push_str(&format!("# {} Export\n\n", context.domain_label));
        header.push_str(&format!("**Exported:** {}\n", context.display_timestamp()));
        header.push_str(&format!("**Total Entries:** {}\n\n", entries.len()));
        header.push_str("---\n\n");
        header
    }

    /// Render one entry section
    fn render_entry(&self, index: usize, entry: &DomainEntry, options: &ExportOptions) -> String {
        let mut output = String::new();

        let title = if entry.title.is_empty() {
            "Untitled"
        } else {
            entry.title.as_str()
        };
        output.push_str(&format!("## {}. {}\n\n", index + 1, title));

        if let Some(ref description) = entry.description {
            if !description.is_empty() {
                output.push_str(description);
                output.push_str("\n\n");
            }
        }

        if !entry.metadata.is_empty() {
            output.push_str("| Field | Value |\n");
            output.push_str("|-------|-------|\n");
            for (key, value) in &entry.metadata {
                output.push_str(&format!(
                    "| {} | {} |\n",
                    escape_cell(key),
                    escape_cell(&raw_string(value))
                ));
            }
            output.push('\n');
        }

        if options.include_timestamps {
            if let Some(ref created_at) = entry.created_at {
                output.push_str(&format!("*Created: {}*\n\n", created_at));
            }
        }

        output.push_str("---\n\n");
        output
    }
}

/// Keep a value inside its table cell
fn escape_cell(value: &str) -> String {
    value
        .replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace('\n', "<br>")
}

impl Exporter for MarkdownExporter {
    fn export(
        &self,
        entries: &[DomainEntry],
        options: &ExportOptions,
        context: &ExportContext,
    ) -> Result<Vec<u8>> {
        let mut output = self.render_header(entries, context);

        for (index, entry) in entries.iter().enumerate() {
            output.push_str(&self.render_entry(index, entry, options));
        }

        Ok(output.into_bytes())
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Markdown
    }
}
