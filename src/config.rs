//! Caller-facing style configuration.
//!
//! One attribute record exists per block kind and per inline style. All
//! records are plain public fields: callers mutate them freely before a
//! parse, and the parser treats the whole config as read-only while it
//! runs.

use peniko::Color;
use peniko::color::palette::css;

use crate::document::{BlockKind, InlineStyle};

/// Display attributes for one block kind or inline style.
///
/// `font_name` and `font_size` fall back through the cascade when unset;
/// `color` has no fallback and is always set explicitly per record.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleAttributes {
    pub font_name: Option<String>,
    pub font_size: Option<f32>,
    /// Numeric weight (CSS scale, 100-900). Only consulted for the bold
    /// record, where it replaces the bold-trait variant.
    pub font_weight: Option<f32>,
    pub color: Color,
}

impl StyleAttributes {
    pub fn new(color: Color) -> Self {
        Self {
            font_name: None,
            font_size: None,
            font_weight: None,
            color,
        }
    }
}

/// The full style cascade input: one record per heading level, one for
/// body text, and one per inline style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    pub h1: StyleAttributes,
    pub h2: StyleAttributes,
    pub h3: StyleAttributes,
    pub h4: StyleAttributes,
    pub h5: StyleAttributes,
    pub h6: StyleAttributes,
    pub body: StyleAttributes,
    pub bold: StyleAttributes,
    pub italic: StyleAttributes,
    pub link: StyleAttributes,
    pub code: StyleAttributes,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            h1: StyleAttributes::new(css::BLACK),
            h2: StyleAttributes::new(css::BLACK),
            h3: StyleAttributes::new(css::BLACK),
            h4: StyleAttributes::new(css::BLACK),
            h5: StyleAttributes::new(css::BLACK),
            h6: StyleAttributes::new(css::BLACK),
            body: StyleAttributes::new(css::BLACK),
            bold: StyleAttributes::new(css::BLACK),
            italic: StyleAttributes::new(css::BLACK),
            link: StyleAttributes::new(css::BLUE),
            code: StyleAttributes::new(css::PURPLE),
        }
    }
}

impl StyleConfig {
    /// The record for a block kind.
    pub fn block(&self, kind: BlockKind) -> &StyleAttributes {
        match kind {
            BlockKind::H1 => &self.h1,
            BlockKind::H2 => &self.h2,
            BlockKind::H3 => &self.h3,
            BlockKind::H4 => &self.h4,
            BlockKind::H5 => &self.h5,
            BlockKind::H6 => &self.h6,
            BlockKind::Body => &self.body,
        }
    }

    /// The record for an inline style, if the style has one.
    pub fn inline(&self, style: InlineStyle) -> Option<&StyleAttributes> {
        match style {
            InlineStyle::None => None,
            InlineStyle::Italic => Some(&self.italic),
            InlineStyle::Bold => Some(&self.bold),
            InlineStyle::Code => Some(&self.code),
            InlineStyle::Link => Some(&self.link),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_leave_fonts_unset() {
        let config = StyleConfig::default();
        assert_eq!(config.body.font_name, None);
        assert_eq!(config.body.font_size, None);
        assert_eq!(config.bold.font_weight, None);
    }

    #[test]
    fn test_every_record_has_a_color() {
        let config = StyleConfig::default();
        assert_eq!(config.h1.color, css::BLACK);
        assert_eq!(config.link.color, css::BLUE);
        assert_eq!(config.code.color, css::PURPLE);
    }

    #[test]
    fn test_block_lookup() {
        let mut config = StyleConfig::default();
        config.h3.font_size = Some(24.0);
        assert_eq!(config.block(BlockKind::H3).font_size, Some(24.0));
        assert_eq!(config.block(BlockKind::Body).font_size, None);
    }

    #[test]
    fn test_inline_lookup() {
        let config = StyleConfig::default();
        assert!(config.inline(InlineStyle::None).is_none());
        assert_eq!(
            config.inline(InlineStyle::Link).map(|attrs| attrs.color),
            Some(css::BLUE)
        );
    }
}
