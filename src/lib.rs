//! runemark converts a lightweight Markdown dialect into styled,
//! attributed text runs.
//!
//! The dialect covers headings (underline style), body paragraphs, and
//! the inline styles bold, italic, and link. Parsing is a single pass and
//! total: malformed input degrades to literal text instead of failing.
//! Display attributes come from a per-block, per-style cascade the caller
//! configures, and concrete fonts are resolved through a pluggable
//! [`StyleProvider`].
//!
//! ```rust
//! use runemark::{DescriptorFonts, InlineStyle, Markdown};
//!
//! let mut markdown = Markdown::new("Title\n=====\nSome **bold** text.");
//! markdown.styles.body.font_name = Some("Avenir".into());
//!
//! let document = markdown.parse();
//! assert!(document.runs().any(|run| run.style == InlineStyle::Bold));
//!
//! let styled = markdown.render(&DescriptorFonts);
//! assert_eq!(styled.text(), "Title\nSome bold text.\n");
//! ```

pub mod cascade;
pub mod classifier;
pub mod config;
pub mod document;
mod inline;
pub mod parser;
pub mod provider;

pub use cascade::{ResolvedStyle, StyledDocument, StyledRun};
pub use config::{StyleAttributes, StyleConfig};
pub use document::{BlockKind, Document, InlineStyle, Line, TextRun};
pub use parser::Markdown;
pub use peniko::Color;
pub use provider::{DescriptorFonts, FontDescriptor, FontRequest, StyleProvider, TextScale};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parse a document with default styles.
///
/// Convenience wrapper around [`Markdown::new`] + [`Markdown::parse`].
pub fn parse(input: &str) -> Document {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    Markdown::new(input).parse()
}
