//! Placeholder detection: which parameter names does a text use?

use super::grammar;
use indexmap::IndexSet;

/// Returns the unique placeholder names in `text`, in order of first
/// appearance. Empty text yields an empty list.
pub fn extract_parameter_names(text: &str) -> Vec<String> {
    extract_from_fields(&[text])
}

/// Unions the placeholder names of several fields. Fields are scanned in the
/// order given, so a name first seen in an earlier field comes first.
pub fn extract_from_fields(fields: &[&str]) -> Vec<String> {
    let mut names = IndexSet::new();
    for text in fields {
        for token in grammar::tokens(text) {
            if !names.contains(token.name) {
                names.insert(token.name.to_string());
            }
        }
    }
    names.into_iter().collect()
}
