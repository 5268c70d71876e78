//! Export command
//!
//! Export a domain's entries to one of the supported formats.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use unex_core::export::{ExportOptions, Orientation, PageSize};
use unex_core::{DomainEntry, ExportResult, ExportRouter};

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Pretty-printed JSON envelope
    Json,
    /// Flattened CSV table
    Csv,
    /// Spreadsheet (CSV table with .xlsx name)
    Excel,
    /// Print-ready HTML for PDF rendering
    Pdf,
    /// Markdown report
    Markdown,
    /// Standalone HTML
    Html,
}

impl FormatArg {
    fn tag(self) -> &'static str {
        match self {
            FormatArg::Json => "json",
            FormatArg::Csv => "csv",
            FormatArg::Excel => "excel",
            FormatArg::Pdf => "pdf",
            FormatArg::Markdown => "markdown",
            FormatArg::Html => "html",
        }
    }
}

/// Page size options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PageSizeArg {
    A4,
    Letter,
    Legal,
}

/// Page orientation options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OrientationArg {
    Portrait,
    Landscape,
}

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Domain identifier (e.g. financial, health)
    #[arg(long, short)]
    pub domain: String,

    /// Export format
    #[arg(long, short, value_enum, default_value = "json")]
    pub format: FormatArg,

    /// Entries file: a JSON array, or an object with an `entries` array (stdin if omitted)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Output file path
    #[arg(long, short, conflicts_with = "out_dir")]
    pub output: Option<PathBuf>,

    /// Write to this directory under the generated filename
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Redact values under sensitive key names
    #[arg(long)]
    pub sanitize: bool,

    /// Export only each entry's metadata
    #[arg(long)]
    pub no_metadata: bool,

    /// Leave creation timestamps out of templated output
    #[arg(long)]
    pub no_timestamps: bool,

    /// CSV delimiter
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Omit the CSV header row
    #[arg(long)]
    pub no_headers: bool,

    /// Quote CSV cells only when needed
    #[arg(long)]
    pub no_quote: bool,

    /// Printed page size
    #[arg(long, value_enum)]
    pub page_size: Option<PageSizeArg>,

    /// Printed page orientation
    #[arg(long, value_enum)]
    pub orientation: Option<OrientationArg>,

    /// Diagonal watermark text
    #[arg(long)]
    pub watermark: Option<String>,

    /// Footer text (pdf only)
    #[arg(long)]
    pub footer: Option<String>,
}

impl ExportArgs {
    /// Overlay command-line flags on the configured defaults
    fn apply_to(&self, mut options: ExportOptions) -> ExportOptions {
        if self.sanitize {
            options.sanitize_data = true;
        }
        if self.no_metadata {
            options.include_metadata = false;
        }
        if self.no_timestamps {
            options.include_timestamps = false;
        }
        if let Some(delimiter) = self.delimiter {
            options.csv.delimiter = delimiter;
        }
        if self.no_headers {
            options.csv.include_headers = false;
        }
        if self.no_quote {
            options.csv.quote_strings = false;
        }
        if let Some(page_size) = self.page_size {
            options.pdf.page_size = match page_size {
                PageSizeArg::A4 => PageSize::A4,
                PageSizeArg::Letter => PageSize::Letter,
                PageSizeArg::Legal => PageSize::Legal,
            };
        }
        if let Some(orientation) = self.orientation {
            options.pdf.orientation = match orientation {
                OrientationArg::Portrait => Orientation::Portrait,
                OrientationArg::Landscape => Orientation::Landscape,
            };
        }
        if let Some(ref watermark) = self.watermark {
            options.pdf.watermark = Some(watermark.clone());
        }
        if let Some(ref footer) = self.footer {
            options.pdf.footer = Some(footer.clone());
        }
        options
    }
}

/// Accepted input document shapes
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InputDocument {
    List(Vec<DomainEntry>),
    Wrapped { entries: Vec<DomainEntry> },
}

impl InputDocument {
    fn into_entries(self) -> Vec<DomainEntry> {
        match self {
            InputDocument::List(entries) | InputDocument::Wrapped { entries } => entries,
        }
    }
}

/// Parse an entries document
fn parse_entries(content: &str) -> Result<Vec<DomainEntry>> {
    let document: InputDocument = serde_json::from_str(content)
        .context("Input must be a JSON array of entries or an object with an `entries` array")?;
    Ok(document.into_entries())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
    }
}

/// Write via a temp file so a failed write never leaves a partial export
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let temp_path = path.with_extension("tmp");
    {
        let mut file = fs::File::create(&temp_path)
            .with_context(|| format!("Failed to create {}", temp_path.display()))?;
        file.write_all(data)?;
        file.flush()?;
    }
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to write to {}", path.display()))?;
    Ok(())
}

fn deliver(result: &ExportResult, args: &ExportArgs) -> Result<()> {
    use colored::Colorize;

    let target = match (&args.output, &args.out_dir) {
        (Some(path), _) => Some(path.clone()),
        (None, Some(dir)) => Some(dir.join(&result.filename)),
        (None, None) => None,
    };

    match target {
        Some(path) => {
            write_atomic(&path, &result.data)?;
            eprintln!(
                "{} Exported {} entries to {} ({} bytes)",
                "✓".green(),
                result.entry_count.to_string().yellow(),
                path.display(),
                result.size_bytes
            );
        }
        None => {
            std::io::stdout()
                .write_all(&result.data)
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

/// Execute the export command
pub fn execute(args: ExportArgs, config_path: Option<&Path>) -> Result<()> {
    let config = super::config::load_config(config_path)?;
    let router = ExportRouter::new(&config);

    let content = read_input(args.input.as_deref())?;
    let entries = parse_entries(&content)?;
    tracing::info!("Loaded {} entries for domain {}", entries.len(), args.domain);

    let options = args.apply_to(router.default_options().clone());
    let result = router
        .export(&args.domain, &entries, args.format.tag(), Some(&options))
        .with_context(|| format!("Failed to export {} as {}", args.domain, args.format.tag()))?;

    deliver(&result, &args)
}
