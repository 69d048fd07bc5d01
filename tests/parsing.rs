//! End-to-end parsing and rendering scenarios.

use proptest::prelude::*;
use runemark::{BlockKind, DescriptorFonts, InlineStyle, Markdown, StyleProvider, TextRun};

fn parse_runs(input: &str) -> Vec<TextRun> {
    runemark::parse(input).runs().cloned().collect()
}

#[test]
fn plain_text_yields_one_body_run_per_line() {
    let runs = parse_runs("first line\nsecond line");
    assert_eq!(runs.len(), 2);
    for (run, expected) in runs.iter().zip(["first line", "second line"]) {
        assert_eq!(run.text, expected);
        assert_eq!(run.block, BlockKind::Body);
        assert_eq!(run.style, InlineStyle::None);
        assert_eq!(run.link_url, None);
    }
}

#[test]
fn double_asterisk_is_bold() {
    let runs = parse_runs("**bold**");
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].text, "bold");
    assert_eq!(runs[0].style, InlineStyle::Bold);
}

#[test]
fn italic_followed_by_plain_text() {
    let runs = parse_runs("*a* b");
    assert_eq!(runs.len(), 2);
    assert_eq!((runs[0].text.as_str(), runs[0].style), ("a", InlineStyle::Italic));
    assert_eq!((runs[1].text.as_str(), runs[1].style), (" b", InlineStyle::None));
}

#[test]
fn inline_link_carries_url() {
    let runs = parse_runs("[text](http://example.com)");
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].text, "text");
    assert_eq!(runs[0].style, InlineStyle::Link);
    assert_eq!(runs[0].link_url.as_deref(), Some("http://example.com"));
}

#[test]
fn bracket_without_url_degrades_to_literal() {
    let runs = parse_runs("[text]");
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].text, "[text]");
    assert_eq!(runs[0].style, InlineStyle::None);
    assert_eq!(runs[0].link_url, None);
}

#[test]
fn underlined_title_is_a_single_h1_block() {
    let document = runemark::parse("Title\n=====");
    assert_eq!(document.lines.len(), 1);
    assert_eq!(document.lines[0].kind, BlockKind::H1);
    assert_eq!(document.lines[0].runs[0].text, "Title");
    assert_eq!(document.plain_text(), "Title\n");
}

#[test]
fn escaped_delimiters_stay_literal() {
    let runs = parse_runs("\\*not italic\\*");
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].text, "*not italic*");
    assert_eq!(runs[0].style, InlineStyle::None);
}

#[test]
fn heading_fonts_fall_back_to_body_name() {
    let mut markdown = Markdown::new("One\n===\nTwo\n---\nbody");
    markdown.styles.body.font_name = Some("Avenir".into());

    let styled = markdown.render(&DescriptorFonts);
    assert!(!styled.runs.is_empty());
    for run in &styled.runs {
        assert_eq!(run.font.name, "Avenir");
    }
}

#[test]
fn rendering_skips_consumed_underline_separator() {
    let markdown = Markdown::new("Title\n=====\nbody");
    let styled = markdown.render(&DescriptorFonts);
    assert_eq!(styled.text(), "Title\nbody\n");
}

#[test]
fn code_style_is_reserved_and_never_produced() {
    let inputs = ["`code`", "a `b` c", "**x** `y`"];
    for input in inputs {
        for run in parse_runs(input) {
            assert_ne!(run.style, InlineStyle::Code, "input {input:?}");
        }
    }
}

#[test]
fn style_config_is_read_only_during_parse() {
    let markdown = Markdown::new("**a** [b](c)");
    let before = markdown.styles.clone();
    let _ = markdown.render(&DescriptorFonts);
    assert_eq!(markdown.styles, before);
}

proptest! {
    // Parsing is total: any input terminates and yields well-formed runs.
    #[test]
    fn parsing_never_panics_and_runs_are_well_formed(input in "\\PC{0,200}") {
        let document = runemark::parse(&input);
        for run in document.runs() {
            prop_assert!(!run.text.is_empty());
            prop_assert!(run.link_url.is_none() || run.style == InlineStyle::Link);
        }
    }

    // Every rendered run gets a resolved font and color, whatever the mix
    // of unmatched delimiters, escapes, and half-finished links.
    #[test]
    fn rendering_always_resolves_attributes(
        input in r"[-=\\*_\[\]() a-z\n]{0,120}"
    ) {
        let markdown = Markdown::new(&input);
        let styled = markdown.render(&DescriptorFonts);
        for run in &styled.runs {
            prop_assert!(run.font.size > 0.0);
            prop_assert!(run.font.weight > 0.0);
        }
    }

    // Text is never lost or invented on delimiter-free input.
    #[test]
    fn delimiter_free_text_roundtrips(input in "[a-zA-Z0-9 .,;:!?]{0,120}") {
        let markdown = Markdown::new(&input);
        let document = markdown.parse();
        let mut expected = String::new();
        for line in input.lines() {
            expected.push_str(line);
            expected.push('\n');
        }
        prop_assert_eq!(document.plain_text(), expected);
    }
}

#[test]
fn provider_trait_is_object_safe_enough_for_generics() {
    // A custom provider slots in without touching the parser.
    struct Named;
    impl StyleProvider for Named {
        type Font = String;

        fn resolve(&self, request: &runemark::FontRequest<'_>) -> String {
            request.name.unwrap_or("default").to_string()
        }

        fn italic_variant(&self, font: &String) -> Option<String> {
            Some(format!("{font}-italic"))
        }

        fn bold_variant(&self, font: &String) -> Option<String> {
            Some(format!("{font}-bold"))
        }

        fn weighted(&self, request: &runemark::FontRequest<'_>, weight: f32) -> String {
            format!("{}-{weight}", self.resolve(request))
        }
    }

    let markdown = Markdown::new("**b** *i*");
    let styled = markdown.render(&Named);
    let fonts: Vec<_> = styled.runs.iter().map(|run| run.font.as_str()).collect();
    // bold "b", plain " ", italic "i", line separator
    assert_eq!(fonts, ["default-bold", "default", "default-italic", "default"]);
}
