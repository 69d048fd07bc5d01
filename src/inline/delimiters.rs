//! Delimiter-run scanning with backslash-escape resolution.
//!
//! The scanner walks an explicit `&[char]` slice with an integer cursor
//! and every function returns the new cursor alongside its result, so
//! re-reading a position is explicit and cheap to test. Indexing is by
//! Unicode scalar throughout.

/// Characters that can open or close an inline style span.
const TRIGGERS: [char; 4] = ['\\', '*', '_', '['];

pub(crate) fn is_trigger(c: char) -> bool {
    TRIGGERS.contains(&c)
}

/// A maximal run of trigger characters, split into what can still act as
/// a delimiter and what a backslash turned back into literal text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct DelimiterRun {
    /// The matched characters exactly as written.
    pub raw: String,
    /// Trigger characters still eligible to open or close a span.
    pub active: String,
    /// Literal text recovered from backslash escapes.
    pub escaped: String,
}

/// Consume plain text up to the next trigger character.
pub(crate) fn scan_text(chars: &[char], pos: usize) -> (usize, String) {
    let mut end = pos;
    while end < chars.len() && !is_trigger(chars[end]) {
        end += 1;
    }
    (end, chars[pos..end].iter().collect())
}

/// Consume the maximal run of trigger characters at `pos`.
///
/// Within the run, `\X` collapses to literal `X`. A backslash with
/// nothing escapable after it passes through verbatim.
pub(crate) fn scan_delimiter_run(chars: &[char], mut pos: usize) -> (usize, DelimiterRun) {
    let mut run = DelimiterRun::default();

    while pos < chars.len() && is_trigger(chars[pos]) {
        let c = chars[pos];
        if c == '\\' && pos + 1 < chars.len() && is_trigger(chars[pos + 1]) {
            run.raw.push(c);
            run.raw.push(chars[pos + 1]);
            run.escaped.push(chars[pos + 1]);
            pos += 2;
        } else if c == '\\' {
            // Lone backslash at the end of the run.
            run.raw.push(c);
            run.escaped.push(c);
            pos += 1;
        } else {
            run.raw.push(c);
            run.active.push(c);
            pos += 1;
        }
    }

    (pos, run)
}
