//! Output data model: block kinds, inline styles, and styled text runs.

use serde::{Deserialize, Serialize};

/// Classification of an entire line.
///
/// Every line gets exactly one kind, and the kind never carries over to the
/// following line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BlockKind {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    #[default]
    Body,
}

/// Classification of a sub-range of a line's text.
///
/// `Code` is reserved for the style cascade; the inline scanner never
/// produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InlineStyle {
    #[default]
    None,
    Italic,
    Bold,
    Code,
    Link,
}

/// A contiguous span of text with one block kind and one inline style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub block: BlockKind,
    pub style: InlineStyle,
    /// Set only when `style` is [`InlineStyle::Link`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
}

/// One processed input line: its block kind and the runs it produced.
///
/// A line consumed by heading-underline lookahead never appears here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub kind: BlockKind,
    pub runs: Vec<TextRun>,
}

/// The parsed document: an ordered sequence of lines, each an ordered
/// sequence of runs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub lines: Vec<Line>,
}

impl Document {
    /// All runs in document order.
    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.lines.iter().flat_map(|line| line.runs.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The document text with all styling stripped. A single newline is
    /// appended after each processed line.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            for run in &line.runs {
                out.push_str(&run.text);
            }
            out.push('\n');
        }
        out
    }
}
