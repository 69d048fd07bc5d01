//! Font resolution seam.
//!
//! The parser never touches real typefaces. The cascade hands a
//! [`FontRequest`] to a [`StyleProvider`], which turns it into whatever
//! font handle the host platform renders with. [`DescriptorFonts`] is the
//! built-in provider: it resolves to plain [`FontDescriptor`] records and
//! is what the test suite uses.

use crate::document::BlockKind;

/// Named text-scale hint, largest to smallest. The provider picks the
/// concrete default size for a scale when the cascade resolves no explicit
/// size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextScale {
    Title1,
    Title2,
    Title3,
    Headline,
    Subheadline,
    Footnote,
    Body,
}

impl TextScale {
    pub fn for_block(kind: BlockKind) -> Self {
        match kind {
            BlockKind::H1 => Self::Title1,
            BlockKind::H2 => Self::Title2,
            BlockKind::H3 => Self::Title3,
            BlockKind::H4 => Self::Headline,
            BlockKind::H5 => Self::Subheadline,
            BlockKind::H6 => Self::Footnote,
            BlockKind::Body => Self::Body,
        }
    }
}

/// What the cascade resolved before asking for a concrete font: an
/// optional family name, an optional point size, and the scale hint to
/// fall back on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontRequest<'a> {
    pub name: Option<&'a str>,
    pub size: Option<f32>,
    pub scale: TextScale,
}

/// Maps resolved font descriptions to renderable font handles.
pub trait StyleProvider {
    type Font: Clone;

    /// Resolve a concrete font. When `request.size` is unset the provider
    /// supplies its default size for `request.scale`.
    fn resolve(&self, request: &FontRequest<'_>) -> Self::Font;

    /// The italic variant of a resolved font, if the face has one.
    fn italic_variant(&self, font: &Self::Font) -> Option<Self::Font>;

    /// The bold-trait variant of a resolved font, if the face has one.
    fn bold_variant(&self, font: &Self::Font) -> Option<Self::Font>;

    /// A font at an explicit numeric weight, bypassing the bold trait.
    fn weighted(&self, request: &FontRequest<'_>, weight: f32) -> Self::Font;
}

pub const REGULAR_WEIGHT: f32 = 400.0;
pub const BOLD_WEIGHT: f32 = 700.0;

/// A platform-agnostic font handle: just the resolved description.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    pub name: String,
    pub size: f32,
    pub weight: f32,
    pub italic: bool,
}

/// The built-in provider. Every face is assumed to have italic and bold
/// variants, and unnamed requests resolve to the system family.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorFonts;

impl DescriptorFonts {
    pub const DEFAULT_FAMILY: &'static str = "system";

    pub fn default_size(scale: TextScale) -> f32 {
        match scale {
            TextScale::Title1 => 28.0,
            TextScale::Title2 => 22.0,
            TextScale::Title3 => 20.0,
            TextScale::Headline => 17.0,
            TextScale::Subheadline => 15.0,
            TextScale::Footnote => 13.0,
            TextScale::Body => 17.0,
        }
    }
}

impl StyleProvider for DescriptorFonts {
    type Font = FontDescriptor;

    fn resolve(&self, request: &FontRequest<'_>) -> FontDescriptor {
        FontDescriptor {
            name: request.name.unwrap_or(Self::DEFAULT_FAMILY).to_string(),
            size: request.size.unwrap_or_else(|| Self::default_size(request.scale)),
            weight: REGULAR_WEIGHT,
            italic: false,
        }
    }

    fn italic_variant(&self, font: &FontDescriptor) -> Option<FontDescriptor> {
        Some(FontDescriptor {
            italic: true,
            ..font.clone()
        })
    }

    fn bold_variant(&self, font: &FontDescriptor) -> Option<FontDescriptor> {
        Some(FontDescriptor {
            weight: BOLD_WEIGHT,
            ..font.clone()
        })
    }

    fn weighted(&self, request: &FontRequest<'_>, weight: f32) -> FontDescriptor {
        FontDescriptor {
            weight,
            ..self.resolve(request)
        }
    }
}
