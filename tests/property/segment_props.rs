//! Block tree and breadcrumb invariants.

use blockfind::segment::{build_blocks, ContentNode, HEADING_SEPARATOR};
use blockfind::{angle_brackets_to_entity, segment, Page};
use proptest::prelude::*;

use crate::common::make_page;

fn heading_strategy() -> impl Strategy<Value = (u8, String)> {
    (2u8..=6, prop::string::string_regex("[A-Za-z<> ]{1,12}").unwrap())
}

fn nodes_strategy() -> impl Strategy<Value = Vec<ContentNode>> {
    prop::collection::vec(
        prop_oneof![
            heading_strategy().prop_map(|(level, text)| ContentNode::Heading {
                level,
                text,
                anchor: None,
            }),
            "[a-z ]{0,20}".prop_map(ContentNode::Text),
        ],
        0..30,
    )
}

proptest! {
    #[test]
    fn prop_one_block_per_heading_plus_root(nodes in nodes_strategy()) {
        let page = Page::new(&["content", "a", "b"], "/a/b/", "");
        let headings = nodes
            .iter()
            .filter(|n| matches!(n, ContentNode::Heading { .. }))
            .count();
        let blocks = build_blocks(&page, nodes);
        prop_assert_eq!(blocks.len(), headings + 1);
        prop_assert!(blocks[0].is_root());
        prop_assert!(blocks[1..].iter().all(|b| !b.is_root()));
    }

    #[test]
    fn prop_path_extends_nearest_shallower_block(nodes in nodes_strategy()) {
        let page = Page::new(&["content", "a", "b"], "/a/b/", "");
        let blocks = build_blocks(&page, nodes);

        for (i, block) in blocks.iter().enumerate().skip(1) {
            let parent = blocks[..i]
                .iter()
                .rev()
                .find(|p| p.level < block.level)
                .expect("root is always shallower");
            let expected = format!(
                "{}{}{}",
                parent.path,
                angle_brackets_to_entity(&parent.title),
                HEADING_SEPARATOR
            );
            prop_assert_eq!(&block.path, &expected);
        }
    }

    #[test]
    fn prop_no_blank_paragraphs(words in prop::collection::vec("[a-z ]{0,8}", 0..12)) {
        let html: String = words.iter().map(|w| format!("<p>{w}</p>")).collect();
        let blocks = segment(&make_page("p", &html));
        prop_assert_eq!(blocks.len(), 1);
        prop_assert!(blocks[0].paragraphs.iter().all(|p| !p.trim().is_empty()));
        let expected = words.iter().filter(|w| !w.trim().is_empty()).count();
        prop_assert_eq!(blocks[0].paragraphs.len(), expected);
    }

    #[test]
    fn prop_segment_never_panics(html in "[<>/a-z0-9 =\"]{0,200}") {
        let blocks = segment(&make_page("fuzz", &html));
        prop_assert!(!blocks.is_empty());
    }
}
