//! Spreadsheet exporter
//!
//! Produces the CSV table under the spreadsheet format tag and `.xlsx`
//! filename. Replacing the payload with a real workbook only needs a new
//! body for `export`; the flatten and column contract stays with
//! [`CsvExporter::write_table`].

use super::context::ExportContext;
use super::csv::CsvExporter;
use super::exporter::Exporter;
use super::options::ExportOptions;
use crate::error::Result;
use crate::types::{DomainEntry, ExportFormat};

/// Spreadsheet surrogate exporter
#[derive(Debug, Default)]
pub struct ExcelExporter {
    table: CsvExporter,
}

impl ExcelExporter {
    /// Create a new spreadsheet exporter
    pub fn new() -> Self {
        Self {
            table: CsvExporter::new(),
        }
    }
}

impl Exporter for ExcelExporter {
    fn export(
        &self,
        entries: &[DomainEntry],
        options: &ExportOptions,
        _context: &ExportContext,
    ) -> Result<Vec<u8>> {
        self.table.write_table(entries, options, ExportFormat::Excel)
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Excel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;
    use chrono::Utc;

    fn context() -> ExportContext {
        ExportContext::new("financial", "Financial", Utc::now())
    }

    #[test]
    fn test_excel_format() {
        assert_eq!(ExcelExporter::new().format(), ExportFormat::Excel);
    }

    #[test]
    fn test_payload_matches_csv() {
        let entries = vec![
            DomainEntry::new("1", "Rent").with_field("amount", 1200),
            DomainEntry::new("2", "Gym").with_field("category", "Health"),
        ];
        let options = ExportOptions::default();

        let excel = ExcelExporter::new().export(&entries, &options, &context()).unwrap();
        let csv = CsvExporter::new().export(&entries, &options, &context()).unwrap();
        assert_eq!(excel, csv);
    }

    #[test]
    fn test_empty_error_names_excel() {
        let err = ExcelExporter::new()
            .export(&[], &ExportOptions::default(), &context())
            .unwrap_err();
        assert!(matches!(
            err,
            ExportError::EmptyExport {
                format: ExportFormat::Excel
            }
        ));
    }
}
