//! Export functionality for domain entries
//!
//! This module turns a collection of entries into one of six payloads:
//! - JSON envelope (pretty-printed)
//! - CSV (flattened, with a column union across entries)
//! - Spreadsheet (currently the CSV table under an `.xlsx` name)
//! - Markdown report
//! - Standalone HTML
//! - Print-ready HTML for PDF rendering
//!
//! # Example
//!
//! ```ignore
//! use unex_core::export::ExportRouter;
//!
//! let router = ExportRouter::default();
//! let result = router.export("financial", &entries, "csv", None)?;
//! std::fs::write(&result.filename, &result.data)?;
//! ```

mod context;
mod csv;
mod excel;
mod exporter;
mod html;
mod json;
mod markdown;
mod options;

pub use context::ExportContext;
pub use self::csv::CsvExporter;
pub use excel::ExcelExporter;
pub use exporter::{ExportRouter, Exporter};
pub use html::{escape_html, HtmlExporter, PdfExporter};
pub use json::{EnvelopeMetadata, ExportEnvelope, JsonExporter, ENVELOPE_VERSION};
pub use markdown::MarkdownExporter;
pub use options::{CsvOptions, ExcelOptions, ExportOptions, Orientation, PageSize, PdfOptions};
