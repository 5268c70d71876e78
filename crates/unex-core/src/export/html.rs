//! HTML and print-ready HTML exporters
//!
//! Both formats share one template: a self-contained document with embedded
//! print CSS, an optional watermark, a header banner and one bordered block
//! per entry. The pdf flavour adds the caller's footer. Rasterizing to an
//! actual PDF is left to whatever renders the HTML.

use super::context::ExportContext;
use super::exporter::Exporter;
use super::options::{ExportOptions, PdfOptions};
use crate::error::Result;
use crate::transform::format::format_timestamp;
use crate::transform::{format_field_name, format_field_value};
use crate::types::{DomainEntry, ExportFormat};
use serde_json::Value;

const STYLE: &str = r#"
  * { box-sizing: border-box; }
  body { font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif; color: #1f2933; margin: 0; padding: 24px; line-height: 1.5; }
  .export-header { border-bottom: 3px solid #3b82f6; padding-bottom: 12px; margin-bottom: 24px; }
  .export-header h1 { margin: 0 0 4px; font-size: 24px; }
  .export-header .meta { margin: 0; color: #64748b; font-size: 13px; }
  .entry { border: 1px solid #cbd5e1; border-radius: 6px; padding: 16px; margin-bottom: 16px; page-break-inside: avoid; break-inside: avoid; }
  .entry h2 { margin: 0 0 8px; font-size: 18px; }
  .entry .description { margin: 0 0 12px; color: #475569; }
  .entry table { width: 100%; border-collapse: collapse; font-size: 13px; }
  .entry th, .entry td { text-align: left; vertical-align: top; padding: 6px 8px; border-bottom: 1px solid #e2e8f0; }
  .entry th { width: 35%; color: #334155; font-weight: 600; }
  .entry pre { margin: 0; white-space: pre-wrap; font-size: 12px; }
  .entry .timestamp { margin: 12px 0 0; color: #94a3b8; font-size: 12px; }
  .watermark { position: fixed; top: 45%; left: 0; width: 100%; text-align: center; font-size: 96px; font-weight: 700; color: rgba(148, 163, 184, 0.15); transform: rotate(-45deg); z-index: -1; pointer-events: none; }
  .export-footer { margin-top: 32px; padding-top: 8px; border-top: 1px solid #cbd5e1; color: #64748b; font-size: 12px; text-align: center; }
  @media print { body { padding: 0; } .entry { border-color: #94a3b8; } }
"#;

/// Shared document template
#[derive(Debug, Clone, Copy)]
struct PrintTemplate<'a> {
    pdf: &'a PdfOptions,
    with_footer: bool,
}

impl<'a> PrintTemplate<'a> {
    fn render(
        &self,
        entries: &[DomainEntry],
        options: &ExportOptions,
        context: &ExportContext,
    ) -> String {
        let label = escape_html(&context.domain_label);
        let stamp = context.display_timestamp();

        let mut html = String::with_capacity(4096 + entries.len() * 512);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{} Export - {}</title>\n", label, stamp));
        html.push_str("<style>\n");
        html.push_str(&format!(
            "  @page {{ size: {} {}; margin: 20mm; }}",
            self.pdf.page_size.css(),
            self.pdf.orientation.css()
        ));
        html.push_str(STYLE);
        html.push_str("</style>\n</head>\n<body>\n");

        if let Some(ref watermark) = self.pdf.watermark {
            html.push_str(&format!(
                "<div class=\"watermark\">{}</div>\n",
                escape_html(watermark)
            ));
        }

        html.push_str("<header class=\"export-header\">\n");
        html.push_str(&format!("  <h1>{} Export</h1>\n", label));
        html.push_str(&format!(
            "  <p class=\"meta\">Generated {} &middot; {} {}</p>\n",
            stamp,
            entries.len(),
            if entries.len() == 1 { "entry" } else { "entries" }
        ));
        html.push_str("</header>\n<main>\n");

        for (index, entry) in entries.iter().enumerate() {
            html.push_str(&render_entry(index, entry, options));
        }

        html.push_str("</main>\n");

        if self.with_footer {
            if let Some(ref footer) = self.pdf.footer {
                html.push_str(&format!(
                    "<footer class=\"export-footer\">{}</footer>\n",
                    escape_html(footer)
                ));
            }
        }

        html.push_str("</body>\n</html>\n");
        html
    }
}

fn render_entry(index: usize, entry: &DomainEntry, options: &ExportOptions) -> String {
    let mut html = String::new();
    let title = if entry.title.is_empty() {
        "Untitled"
    } else {
        entry.title.as_str()
    };

    html.push_str("<section class=\"entry\">\n");
    html.push_str(&format!("  <h2>{}. {}</h2>\n", index + 1, escape_html(title)));

    if let Some(ref description) = entry.description {
        if !description.is_empty() {
            html.push_str(&format!(
                "  <p class=\"description\">{}</p>\n",
                escape_html(description)
            ));
        }
    }

    if !entry.metadata.is_empty() {
        html.push_str("  <table>\n    <tbody>\n");
        for (key, value) in &entry.metadata {
            html.push_str(&format!(
                "      <tr><th>{}</th><td>{}</td></tr>\n",
                escape_html(&format_field_name(key)),
                render_value(value)
            ));
        }
        html.push_str("    </tbody>\n  </table>\n");
    }

    if options.include_timestamps {
        if let Some(ref created_at) = entry.created_at {
            html.push_str(&format!(
                "  <p class=\"timestamp\">Created: {}</p>\n",
                escape_html(&format_timestamp(created_at))
            ));
        }
    }

    html.push_str("</section>\n");
    html
}

fn render_value(value: &Value) -> String {
    let text = escape_html(&format_field_value(value));
    match value {
        Value::Object(_) => format!("<pre>{}</pre>", text),
        _ => text,
    }
}

/// Escape text for element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Standalone HTML exporter
#[derive(Debug, Default)]
pub struct HtmlExporter;

impl HtmlExporter {
    /// Create a new HTML exporter
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for HtmlExporter {
    fn export(
        &self,
        entries: &[DomainEntry],
        options: &ExportOptions,
        context: &ExportContext,
    ) -> Result<Vec<u8>> {
        let template = PrintTemplate {
            pdf: &options.pdf,
            with_footer: false,
        };
        Ok(template.render(entries, options, context).into_bytes())
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Html
    }
}

/// Print-ready HTML exporter for PDF rendering
#[derive(Debug, Default)]
pub struct PdfExporter;

impl PdfExporter {
    /// Create a new PDF template exporter
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for PdfExporter {
    fn export(
        &self,
        entries: &[DomainEntry],
        options: &ExportOptions,
        context: &ExportContext,
    ) -> Result<Vec<u8>> {
        let template = PrintTemplate {
            pdf: &options.pdf,
            with_footer: true,
        };
        Ok(template.render(entries, options, context).into_bytes())
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }
}
