//! The document walk: lines in, styled runs out.

use std::fs;
use std::io;
use std::path::Path;

use crate::cascade::{self, StyledDocument, StyledRun};
use crate::classifier;
use crate::config::StyleConfig;
use crate::document::{Document, InlineStyle, Line, TextRun};
use crate::inline;
use crate::provider::StyleProvider;

/// A Markdown document paired with the styles it renders with.
///
/// `styles` is plain public state: mutate it freely between calls. A
/// single [`parse`](Markdown::parse) or [`render`](Markdown::render) call
/// reads it without touching it.
#[derive(Debug, Clone, Default)]
pub struct Markdown {
    pub styles: StyleConfig,
    source: String,
}

impl Markdown {
    pub fn new(input: &str) -> Self {
        Self {
            styles: StyleConfig::default(),
            source: input.replace("\r\n", "\n"),
        }
    }

    /// Read a document from a file. Fails only when the file cannot be
    /// read as UTF-8; there is no partially-loaded state.
    pub fn from_path<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let source = fs::read_to_string(path)?;
        Ok(Self::new(&source))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parse into unstyled runs. Total: every input produces a complete
    /// document.
    pub fn parse(&self) -> Document {
        parse_document(&self.source)
    }

    /// Produce the styled document: every run resolved through the style
    /// cascade, with one newline run appended after each processed line.
    pub fn render<P: StyleProvider>(&self, provider: &P) -> StyledDocument<P::Font> {
        let document = self.parse();
        let mut runs = Vec::new();

        for line in &document.lines {
            for run in &line.runs {
                let resolved = cascade::resolve(run.block, run.style, &self.styles, provider);
                runs.push(StyledRun {
                    text: run.text.clone(),
                    font: resolved.font,
                    color: resolved.color,
                    link_url: run.link_url.clone(),
                });
            }

            // Line separator, styled like the line's block.
            let resolved = cascade::resolve(line.kind, InlineStyle::None, &self.styles, provider);
            runs.push(StyledRun {
                text: "\n".to_string(),
                font: resolved.font,
                color: resolved.color,
                link_url: None,
            });
        }

        StyledDocument { runs }
    }
}

pub(crate) fn parse_document(input: &str) -> Document {
    let lines: Vec<&str> = input.lines().collect();
    let mut out = Vec::with_capacity(lines.len());
    let mut skip_next = false;

    for (index, line) in lines.iter().enumerate() {
        if skip_next {
            log::trace!("line {} consumed as heading underline", index + 1);
            skip_next = false;
            continue;
        }

        let classification = classifier::classify(&lines, index);
        skip_next = classification.consumed_underline;

        let runs = inline::scan_line(line)
            .into_iter()
            .map(|fragment| TextRun {
                text: fragment.text,
                block: classification.kind,
                style: fragment.style,
                link_url: fragment.link_url,
            })
            .collect();

        out.push(Line {
            kind: classification.kind,
            runs,
        });
    }

    Document { lines: out }
}
