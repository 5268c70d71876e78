//! unex-core - Core library for unex
//!
//! This crate provides the universal exporter: it takes a collection of
//! heterogeneous entries belonging to a domain and serializes them into
//! JSON, CSV, a spreadsheet surrogate, Markdown, standalone HTML, or a
//! print-ready HTML template for PDF rendering.

pub mod error;
pub mod types;
pub mod config;
pub mod domain;
pub mod transform;
pub mod export;

pub use error::{ExportError, Result};
pub use types::*;
pub use config::ExporterConfig;
pub use domain::DomainRegistry;
pub use export::{ExportContext, ExportOptions, ExportRouter, Exporter};
