//! Inline scanning: splits one line into literal text and styled spans.
//!
//! The scan is a single forward pass over the line's Unicode scalars.
//! Literal text accumulates in a buffer so adjacent unstyled pieces
//! coalesce into one fragment; styled spans and links flush the buffer
//! and emit their own fragment.

use crate::document::InlineStyle;

mod delimiters;
mod links;
mod spans;

use delimiters::{scan_delimiter_run, scan_text};
use links::LinkOutcome;

/// One styled piece of a line, before a block kind is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Fragment {
    pub text: String,
    pub style: InlineStyle,
    pub link_url: Option<String>,
}

impl Fragment {
    fn plain(text: String) -> Self {
        Self {
            text,
            style: InlineStyle::None,
            link_url: None,
        }
    }

    fn styled(text: String, style: InlineStyle) -> Self {
        Self {
            text,
            style,
            link_url: None,
        }
    }
}

/// Scan one line into ordered fragments. Never fails; anything that does
/// not parse as a style span stays literal text.
pub(crate) fn scan_line(line: &str) -> Vec<Fragment> {
    let chars: Vec<char> = line.chars().collect();
    log::trace!("scanning line ({} chars)", chars.len());

    let mut fragments = Vec::new();
    let mut literal = String::new();
    let mut pos = 0;

    while pos < chars.len() {
        let (next, text) = scan_text(&chars, pos);
        literal.push_str(&text);
        pos = next;
        if pos >= chars.len() {
            break;
        }

        let (next, run) = scan_delimiter_run(&chars, pos);
        pos = next;
        log::trace!("delimiter run {:?} at {}", run.raw, pos);

        // Escaped delimiters never open or close anything.
        literal.push_str(&run.escaped);

        match spans::classify_marker(&run.active) {
            InlineStyle::Link => {
                let (next, outcome) = links::scan_link(&chars, pos);
                pos = next;
                match outcome {
                    LinkOutcome::Link { text, url } => {
                        flush(&mut literal, &mut fragments);
                        fragments.push(Fragment {
                            text,
                            style: InlineStyle::Link,
                            link_url: Some(url),
                        });
                    }
                    LinkOutcome::Literal(text) => literal.push_str(&text),
                }
            }
            style @ (InlineStyle::Italic | InlineStyle::Bold) => {
                if spans::is_glued(&chars, pos) {
                    let (next, content, trailing) = spans::scan_span(&chars, pos);
                    pos = next;
                    log::debug!("matched {style:?} span: {content:?}");
                    flush(&mut literal, &mut fragments);
                    fragments.push(Fragment::styled(content, style));
                    literal.push_str(&trailing);
                } else {
                    // Delimiter floating in whitespace: literal text.
                    literal.push_str(&run.active);
                }
            }
            _ => literal.push_str(&run.active),
        }
    }

    flush(&mut literal, &mut fragments);
    fragments
}

fn flush(literal: &mut String, fragments: &mut Vec<Fragment>) {
    if !literal.is_empty() {
        fragments.push(Fragment::plain(std::mem::take(literal)));
    }
}
