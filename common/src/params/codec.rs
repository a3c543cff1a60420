//! Conversion between a parameter catalog and its JSON text.
//!
//! The text is edited by hand in a catalog text area, so reading it is best
//! effort: anything that cannot be understood becomes an empty catalog and a
//! warning in the log, never an error for the caller.

use crate::model::parameter::Parameter;
use log::warn;
use serde_json::Value;
use std::collections::HashMap;

/// Formats a catalog as a pretty-printed JSON array (2-space indent).
pub fn serialize(params: &[Parameter]) -> String {
    match serde_json::to_string_pretty(params) {
        Ok(json) => json,
        Err(e) => {
            // Plain data with string keys; not expected to happen.
            warn!("Could not format parameter catalog: {}", e);
            "[]".to_string()
        }
    }
}

/// Reads a catalog from its JSON text.
///
/// - blank text or `[]` gives an empty catalog
/// - malformed JSON gives an empty catalog (logged)
/// - a single object is read as a one-entry catalog
/// - an array is read entry by entry; only entries without a string `name`
///   are skipped (logged), the rest are kept as written, duplicates included
pub fn deserialize(json: &str) -> Vec<Parameter> {
    raw_entries(json)
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| parameter_from_value(item, index))
        .collect()
}

/// The catalog entries exactly as written, without reading them as
/// parameters. `None` when the text is neither blank, a JSON array nor a
/// JSON object.
pub fn raw_entries(json: &str) -> Option<Vec<Value>> {
    let trimmed = json.trim();
    if trimmed.is_empty() {
        return Some(Vec::new());
    }

    let parsed: Value = match serde_json::from_str(trimmed) {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring malformed parameter catalog: {}", e);
            return None;
        }
    };

    match parsed {
        Value::Array(items) => Some(items),
        object @ Value::Object(_) => Some(vec![object]),
        other => {
            warn!(
                "Ignoring parameter catalog that is neither an array nor an object: {}",
                other
            );
            None
        }
    }
}

/// Formats raw entries the way [`serialize`] formats parameters.
pub fn write_entries(entries: &[Value]) -> String {
    match serde_json::to_string_pretty(entries) {
        Ok(json) => json,
        Err(e) => {
            warn!("Could not format parameter catalog: {}", e);
            "[]".to_string()
        }
    }
}

/// The `name` of a raw entry, when it has a string one.
pub fn entry_name(entry: &Value) -> Option<&str> {
    entry.get("name")?.as_str()
}

fn parameter_from_value(item: Value, index: usize) -> Option<Parameter> {
    match serde_json::from_value::<Parameter>(item) {
        Ok(parameter) => Some(parameter),
        Err(e) => {
            warn!("Skipping parameter catalog entry {}: {}", index, e);
            None
        }
    }
}

/// True when the catalog text holds nothing yet: blank, or an empty JSON
/// array in any formatting. Malformed text is *not* empty.
pub fn is_empty_text(json: &str) -> bool {
    let trimmed = json.trim();
    trimmed.is_empty()
        || matches!(
            serde_json::from_str::<Value>(trimmed),
            Ok(Value::Array(items)) if items.is_empty()
        )
}

/// Collects the declared default values by name. When a name is declared
/// twice the later entry wins.
///
/// An empty-string default is the placeholder a freshly detected entry is
/// seeded with, not a value: it is left out so the `$name` token stays
/// visible until someone fills it in.
pub fn default_values(params: &[Parameter]) -> HashMap<String, Value> {
    params
        .iter()
        .filter_map(|p| match &p.default_value {
            Some(Value::String(s)) if s.is_empty() => None,
            Some(value) => Some((p.name.clone(), value.clone())),
            None => None,
        })
        .collect()
}
