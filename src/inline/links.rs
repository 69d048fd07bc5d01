//! `[text](url)` resolution with graceful degradation.
//!
//! A bracket that does not pan out as a link is never an error: the
//! original characters are reproduced verbatim as literal text and
//! whatever was not consumed is rescanned normally.

/// What a link attempt produced. The cursor has been advanced past
/// everything the attempt consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LinkOutcome {
    Link { text: String, url: String },
    Literal(String),
}

/// Scan a link body. `pos` sits just after the opening `[`.
pub(crate) fn scan_link(chars: &[char], pos: usize) -> (usize, LinkOutcome) {
    let Some(close_bracket) = find(chars, pos, ']') else {
        // No closing bracket on this line: the `[` itself is literal and
        // the rest of the line gets scanned as usual.
        return (pos, LinkOutcome::Literal("[".to_string()));
    };

    let text: String = chars[pos..close_bracket].iter().collect();
    let after_bracket = close_bracket + 1;

    if chars.get(after_bracket) != Some(&'(') {
        return (after_bracket, LinkOutcome::Literal(format!("[{text}]")));
    }

    let Some(close_paren) = find(chars, after_bracket + 1, ')') else {
        // `(` never closes: keep the bracket group literal and let the
        // parenthesis remainder rescan as plain text.
        return (after_bracket, LinkOutcome::Literal(format!("[{text}]")));
    };

    let url: String = chars[after_bracket + 1..close_paren].iter().collect();
    let end = close_paren + 1;

    if text.is_empty() || url.is_empty() {
        return (end, LinkOutcome::Literal(format!("[{text}]({url})")));
    }

    log::debug!("matched link: text={text:?} url={url:?}");
    (end, LinkOutcome::Link { text, url })
}

fn find(chars: &[char], pos: usize, needle: char) -> Option<usize> {
    chars[pos..].iter().position(|&c| c == needle).map(|i| pos + i)
}
