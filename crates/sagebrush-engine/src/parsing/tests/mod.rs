//! Property tests for the parsing module.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    blocks::ContentBlock, build_content_blocks, list_section_titles, parse_document, snapshot,
};

fn section_titles_in_blocks(blocks: &[ContentBlock]) -> Vec<&str> {
    blocks
        .iter()
        .filter(|b| b.is_section())
        .filter_map(ContentBlock::title)
        .collect()
}

#[rstest]
#[case("## Intro\nHello world.\n\n## Risks\n- Market risk\n- Liquidity risk\n")]
#[case("## One\nbody\n## Two\nbody\n## Three\nbody")]
#[case("Lead paragraph.\n\n## Only\nClosing line.")]
#[case("plain text only")]
#[case("")]
fn toc_matches_sections_without_subheadings(#[case] document: &str) {
    let titles = list_section_titles(document);
    let blocks = build_content_blocks(document);

    assert_eq!(
        titles.iter().map(String::as_str).collect::<Vec<_>>(),
        section_titles_in_blocks(&blocks)
    );
}

#[rstest]
#[case("## Intro\nHello world.\n\n## Risks\n- Market risk\n- Liquidity risk\n")]
#[case("### Note\nSome detail here.\n")]
#[case("stray\n- a\n### Next\nmore\n\n## Tail\n- x\ny")]
#[case("  ## Indented\r\n  text\r\n\r\n- item\r\n")]
fn parsing_is_idempotent(#[case] document: &str) {
    let first = parse_document(document);
    let second = parse_document(document);

    snapshot::invariants(&first);
    assert_eq!(first, second);
}

#[test]
fn markerless_single_block_is_one_paragraph() {
    let document = "Digital asset markets trade continuously.\nLiquidity is fragmented.";
    assert_eq!(
        build_content_blocks(document),
        vec![ContentBlock::Paragraph {
            body: document.to_string()
        }]
    );
}

#[rstest]
#[case("")]
#[case("\n")]
#[case("\n\n\n")]
#[case("  \n\t\n \r\n")]
fn blank_documents_have_no_blocks(#[case] document: &str) {
    assert!(build_content_blocks(document).is_empty());
    assert!(list_section_titles(document).is_empty());
}

#[test]
fn worked_example_sections_and_list() {
    let blocks =
        build_content_blocks("## Intro\nHello world.\n\n## Risks\n- Market risk\n- Liquidity risk\n");

    assert_eq!(
        blocks,
        vec![
            ContentBlock::Section {
                title: "Intro".into(),
                body: "Hello world.".into(),
            },
            ContentBlock::Section {
                title: "Risks".into(),
                body: String::new(),
            },
            ContentBlock::List {
                items: vec!["Market risk".into(), "Liquidity risk".into()],
            },
        ]
    );
}

#[test]
fn leading_subheading_with_nothing_open_keeps_text_as_paragraph() {
    let blocks = build_content_blocks("### Note\nSome detail here.\n");

    assert_eq!(
        blocks,
        vec![
            ContentBlock::Subheading {
                title: "Note".into()
            },
            ContentBlock::Paragraph {
                body: "Some detail here.".into()
            },
        ]
    );
}

#[test]
fn list_is_terminated_by_following_text() {
    let blocks = build_content_blocks("- a\n- b\nTrailing text.\n");

    assert_eq!(
        blocks,
        vec![
            ContentBlock::List {
                items: vec!["a".into(), "b".into()],
            },
            ContentBlock::Paragraph {
                body: "Trailing text.".into()
            },
        ]
    );
}

#[test]
fn carry_forward_adds_same_titled_section() {
    let document = "## Custody\nKeys matter.\n### Cold storage\nOffline keys.\n";

    assert_eq!(list_section_titles(document), vec!["Custody"]);
    assert_eq!(
        section_titles_in_blocks(&build_content_blocks(document)),
        vec!["Custody", "Custody"]
    );
}

#[test]
fn inline_markup_is_left_verbatim() {
    let blocks = build_content_blocks("**Bold** and [link](https://example.com) | a | b |");

    assert_eq!(
        blocks,
        vec![ContentBlock::Paragraph {
            body: "**Bold** and [link](https://example.com) | a | b |".into()
        }]
    );
}

#[test]
fn concurrent_parses_are_independent() {
    let documents = [
        "## A\none\n\n- x\n- y",
        "### B\ntwo",
        "plain\n\nparagraphs\n\nonly",
    ];
    let expected: Vec<_> = documents.iter().map(|d| build_content_blocks(d)).collect();

    let handles: Vec<_> = documents
        .iter()
        .map(|d| {
            let d = d.to_string();
            std::thread::spawn(move || build_content_blocks(&d))
        })
        .collect();

    let actual: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(actual, expected);
}
