//! Span classification and the literal-vs-active delimiter heuristic.

use crate::document::InlineStyle;

use super::delimiters::{scan_delimiter_run, scan_text};

/// Classify a run of active delimiter characters. Exact matches only; any
/// other combination stays literal text.
pub(crate) fn classify_marker(active: &str) -> InlineStyle {
    match active {
        "**" | "__" => InlineStyle::Bold,
        "*" | "_" => InlineStyle::Italic,
        "[" => InlineStyle::Link,
        _ => InlineStyle::None,
    }
}

/// An emphasis delimiter only opens a span when it is glued to a word:
/// the character at the cursor exists and is neither whitespace nor
/// punctuation.
pub(crate) fn is_glued(chars: &[char], pos: usize) -> bool {
    match chars.get(pos) {
        Some(c) => !c.is_whitespace() && !c.is_ascii_punctuation(),
        None => false,
    }
}

/// Consume an open span: everything up to the next delimiter run is the
/// styled content, and that run is taken as the close.
///
/// The close is not validated against the opener (a `*` span happily
/// closes on `__`); only the close's escaped remainder survives, returned
/// as trailing literal text.
pub(crate) fn scan_span(chars: &[char], pos: usize) -> (usize, String, String) {
    let (pos, content) = scan_text(chars, pos);
    let (pos, close) = scan_delimiter_run(chars, pos);
    (pos, content, close.escaped)
}
