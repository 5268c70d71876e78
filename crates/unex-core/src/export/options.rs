//! Export options

use serde::{Deserialize, Serialize};

/// Caller-supplied options for one export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Keep the `id`/`title`/`description` wrapper in JSON and tabular output
    pub include_metadata: bool,
    /// Run the sanitizer before serializing
    pub sanitize_data: bool,
    /// Show `createdAt` in templated output
    pub include_timestamps: bool,
    pub csv: CsvOptions,
    pub excel: ExcelOptions,
    pub pdf: PdfOptions,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_metadata: true,
            sanitize_data: false,
            include_timestamps: true,
            csv: CsvOptions::default(),
            excel: ExcelOptions::default(),
            pdf: PdfOptions::default(),
        }
    }
}

/// CSV settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Field delimiter; must be a single ASCII character
    pub delimiter: char,
    pub include_headers: bool,
    /// Quote every cell instead of only those that need it
    pub quote_strings: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            include_headers: true,
            quote_strings: true,
        }
    }
}

/// Spreadsheet settings.
///
/// Accepted for compatibility; the spreadsheet payload is currently the CSV
/// surrogate, which has no sheets, filters or frozen panes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExcelOptions {
    pub sheet_name: Option<String>,
    pub auto_filter: bool,
    pub freeze_header: bool,
}

impl Default for ExcelOptions {
    fn default() -> Self {
        Self {
            sheet_name: None,
            auto_filter: true,
            freeze_header: true,
        }
    }
}

/// Print template settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfOptions {
    pub page_size: PageSize,
    pub orientation: Orientation,
    /// Diagonal text behind the content
    pub watermark: Option<String>,
    /// Footer line (pdf format only)
    pub footer: Option<String>,
}

/// Printed page size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
}

impl PageSize {
    /// Value for the CSS `size` descriptor
    pub fn css(&self) -> &'static str {
        match self {
            PageSize::A4 => "A4",
            PageSize::Letter => "letter",
            PageSize::Legal => "legal",
        }
    }
}

/// Printed page orientation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Value for the CSS `size` descriptor
    pub fn css(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}
