//! The style cascade: turns a (block kind, inline style) pair into
//! concrete display attributes.
//!
//! Resolution is a layered lookup rather than nested unwraps: inline
//! record, then block record, then the body record, then the provider's
//! default for the block's text scale.

use peniko::Color;

use crate::config::StyleConfig;
use crate::document::{BlockKind, InlineStyle};
use crate::provider::{FontRequest, StyleProvider, TextScale};

/// The cascade's output for one run. `color` is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle<F> {
    pub font: F,
    pub color: Color,
}

/// A run with its display attributes attached.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledRun<F> {
    pub text: String,
    pub font: F,
    pub color: Color,
    pub link_url: Option<String>,
}

/// The fully rendered document: cascade-resolved runs in order, with one
/// newline run appended after each source line.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledDocument<F> {
    pub runs: Vec<StyledRun<F>>,
}

impl<F> StyledDocument<F> {
    /// The concatenated text of every run, separators included.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// Resolve concrete attributes for one (block, inline) pair.
pub fn resolve<P: StyleProvider>(
    block: BlockKind,
    style: InlineStyle,
    config: &StyleConfig,
    provider: &P,
) -> ResolvedStyle<P::Font> {
    let base = config.block(block);
    let mut font_name = base.font_name.as_deref();
    let mut font_size = base.font_size;
    let mut color = base.color;

    // Code and Link carry their own palette. Color always overrides; name
    // and size only when explicitly configured.
    if matches!(style, InlineStyle::Code | InlineStyle::Link)
        && let Some(attrs) = config.inline(style)
    {
        color = attrs.color;
        if attrs.font_name.is_some() {
            font_name = attrs.font_name.as_deref();
        }
        if attrs.font_size.is_some() {
            font_size = attrs.font_size;
        }
    }

    if font_name.is_none() {
        font_name = config.body.font_name.as_deref();
    }
    if font_size.is_none() {
        font_size = config.body.font_size;
    }

    let request = FontRequest {
        name: font_name,
        size: font_size,
        scale: TextScale::for_block(block),
    };
    let font = provider.resolve(&request);

    let font = match style {
        InlineStyle::Italic => provider.italic_variant(&font).unwrap_or(font),
        InlineStyle::Bold => match config.bold.font_weight {
            // An explicit weight beats the bold trait.
            Some(weight) => provider.weighted(&request, weight),
            None => provider.bold_variant(&font).unwrap_or(font),
        },
        _ => font,
    };

    ResolvedStyle { font, color }
}
