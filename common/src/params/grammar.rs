//! The placeholder grammar shared by the scanner, the segmenter and the
//! substitution engine.
//!
//! A placeholder is `$` immediately followed by one or more `[A-Za-z0-9_]`
//! characters. Matches are taken left to right and never overlap. There is
//! no escape syntax: every `$word` in authored text is a placeholder.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Compiled placeholder pattern. Group 1 is the bare name.
pub static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$([A-Za-z0-9_]+)").expect("placeholder pattern is valid"));

/// One placeholder occurrence in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'t> {
    /// Byte range of the whole token, sigil included.
    pub span: Range<usize>,
    /// The name, sigil excluded.
    pub name: &'t str,
}

/// Iterates over every placeholder token in `text`, in order.
pub fn tokens(text: &str) -> impl Iterator<Item = Token<'_>> {
    PLACEHOLDER_RE.captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        let name = caps.get(1)?;
        Some(Token {
            span: whole.range(),
            name: name.as_str(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_sigil_is_not_a_token() {
        assert_eq!(tokens("costs $ 5 or $").count(), 0);
    }

    #[test]
    fn token_span_includes_sigil() {
        let found: Vec<_> = tokens("Go to $site now").collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].span, 6..11);
        assert_eq!(found[0].name, "site");
    }

    #[test]
    fn adjacent_tokens_do_not_overlap() {
        let names: Vec<_> = tokens("$a$b_1$$c").map(|t| t.name).collect();
        assert_eq!(names, vec!["a", "b_1", "c"]);
    }

    #[test]
    fn name_stops_at_first_non_identifier_char() {
        let names: Vec<_> = tokens("$user-name and $émoji").map(|t| t.name).collect();
        assert_eq!(names, vec!["user"]);
    }
}
