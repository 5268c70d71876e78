//! CSV exporter

use super::context::ExportContext;
use super::exporter::Exporter;
use super::options::{CsvOptions, ExportOptions};
use crate::error::{ExportError, Result};
use crate::transform::{build_columns, flatten, raw_string, FlatEntry};
use crate::types::{DomainEntry, ExportFormat};
use csv::{QuoteStyle, WriterBuilder};
use tracing::debug;

/// Flattened, column-unioned CSV exporter
#[derive(Debug, Default)]
pub struct CsvExporter;

impl CsvExporter {
    /// Create a new CSV exporter
    pub fn new() -> Self {
        Self
    }

    /// Render the table.
    ///
    /// `format` only decides which format an empty-input error names, so the
    /// spreadsheet surrogate can share this pipeline.
    pub fn write_table(
        &self,
        entries: &[DomainEntry],
        options: &ExportOptions,
        format: ExportFormat,
    ) -> Result<Vec<u8>> {
        if entries.is_empty() {
            return Err(ExportError::EmptyExport { format });
        }
        let delimiter = delimiter_byte(&options.csv)?;

        let rows: Vec<FlatEntry> = entries
            .iter()
            .map(|entry| flatten(entry, options.include_metadata))
            .collect();
        let columns = build_columns(&rows);
        if columns.is_empty() {
            return Err(ExportError::EmptyExport { format });
        }
        debug!("CSV schema: {} columns for {} rows", columns.len(), rows.len());

        let quote_style = if options.csv.quote_strings {
            QuoteStyle::Always
        } else {
            QuoteStyle::Necessary
        };

        let mut writer = WriterBuilder::new()
            .delimiter(delimiter)
            .quote_style(quote_style)
            .from_writer(Vec::new());

        if options.csv.include_headers {
            writer.write_record(&columns)?;
        }

        for row in &rows {
            writer.write_record(
                columns
                    .iter()
                    .map(|column| row.get(column).map(raw_string).unwrap_or_default()),
            )?;
        }

        writer
            .into_inner()
            .map_err(|e| ExportError::Serialization(e.to_string()))
    }
}

impl Exporter for CsvExporter {
    fn export(
        &self,
        entries: &[DomainEntry],
        options: &ExportOptions,
        _context: &ExportContext,
    ) -> Result<Vec<u8>> {
        self.write_table(entries, options, ExportFormat::Csv)
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }
}

fn delimiter_byte(options: &CsvOptions) -> Result<u8> {
    match options.delimiter {
        '"' | '\n' | '\r' => Err(ExportError::InvalidOption(format!(
            "CSV delimiter {:?} is not allowed",
            options.delimiter
        ))),
        c if c.is_ascii() => Ok(c as u8),
        c => Err(ExportError::InvalidOption(format!(
            "CSV delimiter {:?} must be a single ASCII character",
            c
        ))),
    }
}
