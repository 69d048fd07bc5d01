//! Line-level block classification.
//!
//! Each line is classified independently and always resets to body: a
//! heading never carries over to the next line. The only lookahead is the
//! underline check, which consumes the following line entirely.

use crate::document::BlockKind;

/// Prefix-based heading rules (`#` → H1 through `######` → H6).
///
/// The table ships empty: prefix detection exists in the pipeline but is
/// switched off until there is a product decision to enable it. When
/// populated, the underline lookahead below still wins whenever both
/// rules could match the same line.
const HEADING_PREFIX_RULES: &[(&str, BlockKind)] = &[];

/// The outcome for one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub kind: BlockKind,
    /// True when the following line is a heading underline. The caller
    /// must skip that line: it contributes no text and no separator.
    pub consumed_underline: bool,
}

/// Classify the line at `index`, looking one line ahead for underline
/// markers.
pub fn classify(lines: &[&str], index: usize) -> Classification {
    classify_with_rules(lines, index, HEADING_PREFIX_RULES)
}

fn classify_with_rules(
    lines: &[&str],
    index: usize,
    rules: &[(&str, BlockKind)],
) -> Classification {
    let mut kind = BlockKind::Body;
    let mut matched_len = 0;

    // Longest matching prefix wins within the table.
    for (prefix, rule_kind) in rules {
        if lines[index].starts_with(prefix) && prefix.len() > matched_len {
            kind = *rule_kind;
            matched_len = prefix.len();
        }
    }

    // The underline lookahead runs after the prefix pass, so it always
    // overrides a prefix match on the same line.
    if let Some(next) = lines.get(index + 1) {
        if next.starts_with('=') {
            log::debug!("line {} classified H1 by underline", index + 1);
            return Classification {
                kind: BlockKind::H1,
                consumed_underline: true,
            };
        }
        if next.starts_with('-') {
            log::debug!("line {} classified H2 by underline", index + 1);
            return Classification {
                kind: BlockKind::H2,
                consumed_underline: true,
            };
        }
    }

    Classification {
        kind,
        consumed_underline: false,
    }
}
