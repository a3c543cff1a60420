//! Splits templated text into literal runs and placeholder references.
//!
//! Uses the same grammar as the scanner, so the placeholder segments of a
//! text always name exactly what `extract_parameter_names` reports.

use super::grammar;
use crate::model::segment::Segment;

/// Cuts `text` into an ordered list of segments.
///
/// Literal runs are never empty and two literals are never adjacent.
/// `join(&segment(t)) == t` for every `t`.
pub fn segment(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for token in grammar::tokens(text) {
        if token.span.start > cursor {
            segments.push(Segment::Literal(text[cursor..token.span.start].to_string()));
        }
        segments.push(Segment::Placeholder(token.name.to_string()));
        cursor = token.span.end;
    }

    if cursor < text.len() {
        segments.push(Segment::Literal(text[cursor..].to_string()));
    }

    segments
}

/// Rebuilds the original text from its segments.
pub fn join(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.original_text()).collect()
}
