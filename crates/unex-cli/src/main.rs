//! unex - universal entry exporter CLI
//!
//! Reads a domain's entries as JSON and writes them out as JSON, CSV,
//! a spreadsheet, Markdown, HTML, or print-ready HTML.
//!
//! ## Quick Start
//!
//! ```bash
//! # Export to a generated filename in the current directory
//! unex export --domain financial --format csv --input entries.json --out-dir .
//!
//! # Redact sensitive fields and print Markdown to stdout
//! cat entries.json | unex export -d documents -f markdown --sanitize
//!
//! # List formats
//! unex formats
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
