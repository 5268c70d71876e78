//! Entry flattener
//!
//! Collapses nested metadata into a single-level map of dotted key paths,
//! for the formats that need a 2-D table.

use super::format::raw_string;
use crate::types::{DomainEntry, Metadata};
use serde_json::Value;
use std::collections::HashSet;
use tracing::warn;

/// A flattened entry: dotted path -> scalar value, in walk order
pub type FlatEntry = serde_json::Map<String, Value>;

/// Flatten one entry.
///
/// With `include_metadata` the whole entry object is walked (`id`, `title`,
/// `description`, `metadata.*`, `createdAt`); otherwise only the metadata
/// payload, without a `metadata.` prefix.
pub fn flatten(entry: &DomainEntry, include_metadata: bool) -> FlatEntry {
    if include_metadata {
        flatten_map(&entry.to_object())
    } else {
        flatten_map(&entry.metadata)
    }
}

/// Flatten an arbitrary mapping.
///
/// A path built only from plain keys always owns its bare column. A path
/// that went through a key containing a literal `.` takes a `#n` suffix when
/// it collides, whatever the key order inside the entry.
pub fn flatten_map(object: &Metadata) -> FlatEntry {
    let mut leaves = Vec::new();
    collect_leaves(object, None, false, &mut leaves);

    let nested: HashSet<&str> = leaves
        .iter()
        .filter(|leaf| !leaf.literal)
        .map(|leaf| leaf.path.as_str())
        .collect();

    let mut flat = FlatEntry::new();
    for leaf in &leaves {
        if leaf.literal {
            insert_literal(&mut flat, &nested, &leaf.path, leaf.value.clone());
        } else {
            flat.insert(leaf.path.clone(), leaf.value.clone());
        }
    }
    flat
}

struct Leaf {
    path: String,
    value: Value,
    /// Some key along the path contains a `.`
    literal: bool,
}

fn collect_leaves(object: &Metadata, prefix: Option<&str>, literal: bool, out: &mut Vec<Leaf>) {
    for (key, value) in object {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.clone(),
        };
        let literal = literal || key.contains('.');

        match value {
            Value::Object(child) => collect_leaves(child, Some(&path), literal, out),
            Value::Array(items) => {
                let joined = items.iter().map(raw_string).collect::<Vec<_>>().join(", ");
                out.push(Leaf {
                    path,
                    value: Value::String(joined),
                    literal,
                });
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => out.push(Leaf {
                path,
                value: value.clone(),
                literal,
            }),
        }
    }
}

/// Insert a dotted-key leaf without clobbering a nested path or an earlier
/// literal leaf
fn insert_literal(out: &mut FlatEntry, nested: &HashSet<&str>, path: &str, value: Value) {
    let taken = |out: &FlatEntry, candidate: &str| {
        nested.contains(candidate) || out.contains_key(candidate)
    };

    if !taken(out, path) {
        out.insert(path.to_string(), value);
        return;
    }

    let mut n = 2;
    loop {
        let candidate = format!("{}#{}", path, n);
        if !taken(out, &candidate) {
            warn!("Flattened key '{}' collides; storing as '{}'", path, candidate);
            out.insert(candidate, value);
            return;
        }
        n += 1;
    }
}
