//! Entry transformations shared by the serializers
//!
//! - [`flatten`]: nested entry -> single-level dotted key map
//! - [`columns`]: ordered union of flattened keys
//! - [`sanitize`]: key-name based redaction
//! - [`format`]: display and raw stringification of values

pub mod columns;
pub mod flatten;
pub mod format;
pub mod sanitize;

pub use columns::build_columns;
pub use flatten::{flatten, flatten_map, FlatEntry};
pub use format::{format_field_name, format_field_value, raw_string};
pub use sanitize::Sanitizer;
