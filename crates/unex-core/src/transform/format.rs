//! Field formatting
//!
//! Two renderings of a value exist: the decorated display form used by the
//! human-facing templates, and the raw form used by re-ingestible formats.

use chrono::{DateTime, NaiveDate};
use serde_json::{Number, Value};

/// Placeholder shown for missing values in templates
pub const EMPTY_PLACEHOLDER: &str = "—";

/// Separator between path segments of a flattened key
pub const BREADCRUMB: &str = " › ";

/// Turn a key such as `emergencyContact.phone_number` into
/// `Emergency Contact › Phone Number`.
///
/// Every capital starts a new word, so acronyms come apart letter by
/// letter (`URLPath` is `U R L Path`).
pub fn format_field_name(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 8);

    for c in key.chars() {
        match c {
            '_' => spaced.push(' '),
            '.' => spaced.push_str(BREADCRUMB),
            c if c.is_uppercase() => {
                spaced.push(' ');
                spaced.push(c);
            }
            c => spaced.push(c),
        }
    }

    spaced
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Display form of a value for Markdown/HTML templates
pub fn format_field_value(value: &Value) -> String {
    match value {
        Value::Null => EMPTY_PLACEHOLDER.to_string(),
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::Number(n) => grouped_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(raw_string).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string_pretty(value).unwrap_or_default(),
    }
}

/// Raw form of a value, free of decoration.
///
/// Null renders empty, numbers without a trailing `.0`, arrays joined with
/// `", "`, objects as compact JSON.
pub fn raw_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => plain_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(raw_string).collect::<Vec<_>>().join(", "),
        Value::Object(_) => value.to_string(),
    }
}

/// Human form of a timestamp string; unparseable input is returned as-is
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%B %-d, %Y %H:%M").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%B %-d, %Y").to_string();
    }
    raw.to_string()
}

fn plain_number(n: &Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 {
                return format!("{:.0}", f);
            }
        }
    }
    n.to_string()
}

fn grouped_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return group_digits(&i.to_string());
    }
    if let Some(u) = n.as_u64() {
        return group_digits(&u.to_string());
    }

    let f = n.as_f64().unwrap_or_default();
    let fixed = format!("{:.3}", f);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed.split_once('.') {
        Some((int_part, frac)) => format!("{}.{}", group_digits(int_part), frac),
        None => group_digits(trimmed),
    }
}

fn group_digits(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // -0.0004 rounds to "-0"
    if grouped == "0" {
        return grouped;
    }
    format!("{}{}", sign, grouped)
}
