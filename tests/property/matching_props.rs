//! Matcher and folding invariants.

use blockfind::util::normalize::fold_chars;
use blockfind::{initialize, BitapSearcher, FoldOptions, MatchOptions};
use proptest::prelude::*;

use crate::common::make_page;

proptest! {
    #[test]
    fn prop_exact_substring_is_covered(
        prefix in "[a-z ]{0,40}",
        pattern in "[a-z]{1,32}",
        suffix in "[a-z ]{0,40}",
    ) {
        let text = format!("{prefix}{pattern}{suffix}");
        let outcome = BitapSearcher::new(&pattern, MatchOptions::default()).search_in(&text);
        prop_assert!(outcome.is_match);

        let start = prefix.chars().count();
        let end = start + pattern.chars().count();
        for i in start..end {
            prop_assert!(
                outcome.ranges.iter().any(|r| r.contains(i)),
                "char {} of {:?} not covered by {:?}", i, text, outcome.ranges
            );
        }
    }

    #[test]
    fn prop_equal_value_is_perfect(value in "[a-zA-Z ]{1,50}") {
        let outcome = BitapSearcher::new(&value.to_lowercase(), MatchOptions::default())
            .search_in(&value);
        prop_assert!(outcome.is_match);
        prop_assert_eq!(outcome.score, 0.0);
        prop_assert_eq!(outcome.ranges.len(), 1);
        prop_assert_eq!(outcome.ranges[0].start, 0);
        prop_assert_eq!(outcome.ranges[0].end, value.chars().count() - 1);
    }

    #[test]
    fn prop_folding_keeps_char_count(value in "\\PC{0,40}", diacritics in any::<bool>()) {
        let options = FoldOptions { case_sensitive: false, ignore_diacritics: diacritics };
        prop_assert_eq!(fold_chars(&value, options).len(), value.chars().count());
    }

    #[test]
    fn prop_ranges_stay_inside_values(
        paragraphs in prop::collection::vec("[a-z ]{1,60}", 1..6),
        term in "[a-z]{1,6}",
    ) {
        let html: String = paragraphs.iter().map(|p| format!("<p>{p}</p>")).collect();
        let widget = initialize(&[make_page("page", &html)]);

        for result in widget.search(&term) {
            prop_assert!(!result.matches.is_empty());
            for m in &result.matches {
                let len = m.value.chars().count();
                prop_assert!(!m.ranges.is_empty());
                prop_assert!(m.ranges.iter().all(|r| r.start <= r.end && r.end < len));
            }
        }
    }

    #[test]
    fn prop_results_sorted_by_score(
        titles in prop::collection::vec("[a-z]{3,10}", 1..8),
        term in "[a-z]{2,5}",
    ) {
        let html: String = titles
            .iter()
            .enumerate()
            .map(|(i, t)| format!("<h2 id=\"h{i}\">{t}</h2>"))
            .collect();
        let widget = initialize(&[make_page("page", &html)]);
        let results = widget.search(&term);
        prop_assert!(results.windows(2).all(|w| w[0].score <= w[1].score));
    }
}
