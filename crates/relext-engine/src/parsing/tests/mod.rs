//! Integration tests for the parsing module.
//!
//! Scenario tables use `rstest`; the fixture files in `fixtures/` are checked
//! with inline `insta` snapshots of a one-line-per-block outline.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{Block, BlockKind, Document, parse, parse_bytes};

fn block(kind: BlockKind, line: usize, column: usize, content: &str) -> Block {
    Block {
        kind,
        line,
        column,
        content: content.to_string(),
    }
}

fn p(line: usize, column: usize, content: &str) -> Block {
    block(BlockKind::Paragraph, line, column, content)
}

fn h1(line: usize, column: usize, content: &str) -> Block {
    block(BlockKind::Heading1, line, column, content)
}

fn h2(line: usize, column: usize, content: &str) -> Block {
    block(BlockKind::Heading2, line, column, content)
}

/// One line per block: tag, position and quoted content.
fn outline(doc: &Document) -> String {
    doc.iter()
        .map(|b| format!("{} {}:{} {:?}", b.kind.tag(), b.line, b.column, b.content))
        .collect::<Vec<_>>()
        .join("\n")
}

// Scenario tests

#[rstest]
#[case::crlf_paragraphs(
    "Hello\r\nworld\r\n\r\nSecond",
    vec![p(0, 1, "Hello world"), p(3, 1, "Second")]
)]
#[case::heading_then_body("# Title\r\nBody text", vec![h1(0, 2, "Title"), p(1, 1, "Body text")])]
#[case::escaped_heading2("## A & B\r\n", vec![h2(0, 3, "A &amp; B")])]
#[case::no_trailing_newline("no newline at end", vec![p(0, 1, "no newline at end")])]
#[case::leading_whitespace("   indented", vec![p(0, 4, "indented")])]
#[case::tabs_collapse("a\t\tb", vec![p(0, 1, "a b")])]
#[case::trailing_whitespace_dropped("a  \n", vec![p(0, 1, "a")])]
#[case::bare_cr_blank_line("a\r\rb", vec![p(0, 1, "a"), p(2, 1, "b")])]
#[case::whitespace_only_line_is_blank("a\n \t \nb", vec![p(0, 1, "a"), p(2, 1, "b")])]
#[case::many_blank_lines("a\n\n\n\n\nb", vec![p(0, 1, "a"), p(5, 1, "b")])]
#[case::marker_without_space("#Title", vec![h1(0, 2, "Title")])]
#[case::heading_whitespace_collapses("#  spaced \t out  \n", vec![h1(0, 2, "spaced out")])]
#[case::heading_ends_at_first_break("# a\nb", vec![h1(0, 2, "a"), p(1, 1, "b")])]
#[case::heading_then_wrapped_paragraph(
    "## Sub\nline one\nline two",
    vec![h2(0, 3, "Sub"), p(1, 1, "line one line two")]
)]
#[case::marker_after_single_break_is_content(
    "text\n# not heading",
    vec![p(0, 1, "text # not heading")]
)]
#[case::third_marker_is_literal("###x", vec![h2(0, 3, "#x")])]
#[case::empty_heading1("#\n", vec![h1(0, 1, "")])]
#[case::empty_heading2("##\r\n", vec![h2(0, 2, "")])]
#[case::heading_with_only_spaces("#   \n", vec![h1(0, 2, "")])]
#[case::bare_marker_at_end_of_input("#", vec![])]
#[case::bare_double_marker_at_end_of_input("text\n\n##", vec![p(0, 1, "text")])]
#[case::marker_after_blank_line_at_end_of_input("a\n\n#", vec![p(0, 1, "a")])]
#[case::marker_and_space_at_end_of_input("# ", vec![h1(0, 2, "")])]
#[case::double_marker_and_tab_at_end_of_input("a\n\n##\t", vec![p(0, 1, "a"), h2(2, 3, "")])]
#[case::heading_flushed_at_end_of_input("# Title  ", vec![h1(0, 2, "Title")])]
#[case::all_specials(
    "<b>\"it's\"</b> & co",
    vec![p(0, 1, "&lt;b&gt;&quot;it&#039;s&quot;&lt;/b&gt; &amp; co")]
)]
#[case::non_ascii_passthrough("€ and ü", vec![p(0, 1, "€ and ü")])]
#[case::consecutive_headings("# One\n## Two\n", vec![h1(0, 2, "One"), h2(1, 3, "Two")])]
fn parses_scenarios(#[case] input: &str, #[case] expected: Vec<Block>) {
    let doc = parse(input);
    assert_eq!(doc.blocks, expected);
}

#[test]
fn empty_document() {
    let doc = parse("");
    assert!(doc.is_empty());
}

#[test]
fn blank_lines_only() {
    let doc = parse("\n\r\n\r \t\n");
    assert!(doc.is_empty());
}

#[test]
fn line_ending_styles_are_equivalent() {
    let lf = parse("one\ntwo\n\n# three\nfour");
    let crlf = parse("one\r\ntwo\r\n\r\n# three\r\nfour");
    let cr = parse("one\rtwo\r\r# three\rfour");

    assert_eq!(lf, crlf);
    assert_eq!(lf, cr);
}

#[test]
fn invalid_utf8_becomes_replacement_character() {
    let doc = parse_bytes(b"caf\xff\n\nok");
    assert_eq!(doc.blocks, vec![p(0, 1, "caf\u{fffd}"), p(2, 1, "ok")]);
}

#[test]
fn bytes_and_str_agree_on_valid_utf8() {
    let text = "# Überschrift\r\n\r\nText mit € Zeichen";
    assert_eq!(parse_bytes(text.as_bytes()), parse(text));
}

// Fixture-based snapshot tests

fn fixture(name: &str) -> Document {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let bytes = std::fs::read(format!("{fixtures_dir}/{name}.relext")).unwrap();
    let doc = parse_bytes(&bytes);
    invariants::check(&doc);
    doc
}

#[test]
fn fixture_linebreak() {
    let doc = fixture("linebreak");
    insta::assert_snapshot!(outline(&doc), @r#"
    p 0:5 "1:This line started with some spaces and ends with a carriage return 2:This line ends with spaces before a line feed 3:This is the third line car+feed 4:The next line will be empty and ill put some spaces around the line"
    p 5:2 "6:That&#039;s it for today :) oh no wait! unicode! ;D € YEAH!"
    "#);
}

#[test]
fn fixture_headings() {
    let doc = fixture("headings");
    insta::assert_snapshot!(outline(&doc), @r##"
    h1 0:2 "Notes &amp; Ideas"
    h2 2:3 "Day &lt;1&gt;"
    p 3:1 "First thought wraps here."
    p 6:1 "Second thought &quot;quoted&quot;"
    h2 8:3 "#deep"
    h1 9:1 ""
    "##);
}
