//! Snippet invariants.

use blockfind::highlight::{split_highlight, whole_highlight, PARAGRAPH_CLASS};
use blockfind::{angle_brackets_to_entity, entity_to_angle_brackets, HighlightOptions, MatchRange};
use proptest::prelude::*;

/// Sorted, non-overlapping ranges inside a value of `len` chars.
fn ranges_strategy(len: usize) -> impl Strategy<Value = Vec<MatchRange>> {
    prop::collection::vec((0..len, 0usize..12), 0..12).prop_map(move |spans| {
        let mut ranges: Vec<MatchRange> = Vec::new();
        let mut spans = spans;
        spans.sort();
        for (start, extra) in spans {
            if ranges.last().is_some_and(|r| start <= r.end) {
                continue;
            }
            ranges.push(MatchRange::new(start, (start + extra).min(len - 1)));
        }
        ranges
    })
}

fn value_and_ranges() -> impl Strategy<Value = (String, Vec<MatchRange>)> {
    "[a-z<>。! \n]{1,200}".prop_flat_map(|value| {
        let len = value.chars().count();
        (Just(value), ranges_strategy(len))
    })
}

fn strip_spans(html: &str) -> String {
    html.replace(&format!("<span class=\"{PARAGRAPH_CLASS}\">"), "")
        .replace("</span>", "")
}

proptest! {
    #[test]
    fn prop_escape_round_trips(value in "[^&]{0,80}") {
        let escaped = angle_brackets_to_entity(&value);
        prop_assert!(!escaped.contains('<') && !escaped.contains('>'));
        prop_assert_eq!(entity_to_angle_brackets(&escaped), value);
    }

    #[test]
    fn prop_whole_highlight_keeps_text((value, ranges) in value_and_ranges()) {
        let html = whole_highlight(&value, &ranges, PARAGRAPH_CLASS);
        prop_assert_eq!(entity_to_angle_brackets(&strip_spans(&html)), value);
        prop_assert_eq!(html.matches("<span").count(), html.matches("</span>").count());
    }

    #[test]
    fn prop_split_fragments_capped((value, ranges) in value_and_ranges(), term_len in 1usize..8) {
        let options = HighlightOptions::default();
        let html = split_highlight(&value, &ranges, term_len, PARAGRAPH_CLASS, &options);
        let useful = ranges
            .iter()
            .filter(|r| r.len() >= term_len.saturating_sub(options.min_range_slack))
            .count();
        prop_assert_eq!(html.matches("<span").count(), useful.min(options.max_fragments));
    }

    #[test]
    fn prop_split_never_leaks_markup((value, ranges) in value_and_ranges(), term_len in 1usize..8) {
        let html = split_highlight(&value, &ranges, term_len, PARAGRAPH_CLASS, &HighlightOptions::default());
        let text = strip_spans(&html);
        prop_assert!(!text.contains('<') && !text.contains('>'));
    }

    #[test]
    fn prop_split_context_has_no_newlines((value, ranges) in value_and_ranges(), term_len in 1usize..8) {
        let html = split_highlight(&value, &ranges, term_len, PARAGRAPH_CLASS, &HighlightOptions::default());
        // Newlines can only come from inside a highlighted core
        let outside: String = html
            .split("</span>")
            .map(|part| part.split("<span").next().unwrap_or(""))
            .collect();
        prop_assert!(!outside.contains('\n'));
    }
}
