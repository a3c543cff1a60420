//! Materializes placeholder values into templated text.

use super::grammar::PLACEHOLDER_RE;
use regex::Captures;
use serde_json::Value;
use std::collections::HashMap;

/// Replaces every `$name` that has an entry in `values` with that value's
/// text form. Placeholders without an entry are left exactly as written.
///
/// Single pass, left to right: text coming from a value is never scanned
/// again, so a value containing `$other` stays literal.
pub fn resolve(text: &str, values: &HashMap<String, Value>) -> String {
    PLACEHOLDER_RE
        .replace_all(text, |caps: &Captures| match values.get(&caps[1]) {
            Some(value) => stringify(value),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Text form of a value as it appears in rendered test text.
///
/// Strings are inserted verbatim, numbers and booleans in their usual
/// notation (`3`, `2.5`, `true`), `null` as `null`, and arrays and objects
/// as compact JSON.
///
/// Floats are always written in plain decimal form, however large or small:
/// `1e21` becomes `1000000000000000000000` and `1e-7` becomes `0.0000001`.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                // f64 Display drops a trailing `.0` and never uses exponents.
                n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string())
            }
        }
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
