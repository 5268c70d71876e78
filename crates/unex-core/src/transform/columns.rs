//! Column schema builder

use super::flatten::FlatEntry;
use std::collections::HashSet;

/// Ordered, de-duplicated union of keys across all flattened entries.
///
/// Keys of the first entry come first in their flattened order, followed by
/// keys introduced by later entries in the order they are first seen.
pub fn build_columns(entries: &[FlatEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut columns = Vec::new();

    for entry in entries {
        for key in entry.keys() {
            if seen.insert(key.as_str()) {
                columns.push(key.clone());
            }
        }
    }

    columns
}
