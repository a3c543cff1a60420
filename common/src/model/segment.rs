use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One unit of templated text, as produced by `params::segmenter::segment`.
///
/// Renderers walk a `Vec<Segment>` to mark placeholder spans without running
/// the placeholder grammar again. On the wire a segment looks like
/// `{"kind":"literal","value":"Go to "}` or
/// `{"kind":"placeholder","value":"site"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Segment {
    /// A run of text with no placeholder in it.
    Literal(String),
    /// A placeholder reference. Holds the bare name, without the `$` sigil.
    Placeholder(String),
}

impl Segment {
    /// The text this segment was cut from: the literal itself, or `$name`.
    pub fn original_text(&self) -> Cow<'_, str> {
        match self {
            Segment::Literal(text) => Cow::Borrowed(text),
            Segment::Placeholder(name) => Cow::Owned(format!("${}", name)),
        }
    }

    pub fn placeholder_name(&self) -> Option<&str> {
        match self {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        }
    }
}
