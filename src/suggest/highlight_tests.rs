//! Tests for match emphasis

use super::*;
use proptest::prelude::*;

fn matched_text(text: &str, query: &str) -> Vec<String> {
    match_ranges(text, query)
        .into_iter()
        .map(|(start, end)| text[start..end].to_string())
        .collect()
}

#[test]
fn test_case_insensitive_prefix_match() {
    let ranges = match_ranges("Galaxy S21", "gal");
    assert_eq!(ranges, vec![(0, 3)]);
    assert_eq!(matched_text("Galaxy S21", "gal"), vec!["Gal"]);
}

#[test]
fn test_match_in_the_middle() {
    assert_eq!(matched_text("Samsung Galaxy", "sun"), vec!["sun"]);
}

#[test]
fn test_regex_metacharacters_are_literal() {
    // `.` must match only a literal dot, never "any character"
    assert_eq!(matched_text("a.b Pro", "a.b"), vec!["a.b"]);
    assert!(matched_text("axb Pro", "a.b").is_empty());

    assert!(matched_text("abc", "a*").is_empty());
    assert_eq!(matched_text("a*c", "a*"), vec!["a*"]);
    assert_eq!(matched_text("Note (2024)", "(2024)"), vec!["(2024)"]);
}

#[test]
fn test_multiple_occurrences() {
    assert_eq!(matched_text("nano nano", "nano"), vec!["nano", "nano"]);
}

#[test]
fn test_overlapping_candidates_consume_left_to_right() {
    // "aaa" contains "aa" starting at 0 and 1; the scan consumes the first
    assert_eq!(match_ranges("aaa", "aa"), vec![(0, 2)]);
}

#[test]
fn test_no_match_returns_empty() {
    assert!(match_ranges("Galaxy S21", "xyz").is_empty());
}

#[test]
fn test_empty_query_matches_nothing() {
    assert!(match_ranges("Galaxy S21", "").is_empty());
}

#[test]
fn test_match_at_end_of_text() {
    assert_eq!(match_ranges("iPhone 14", "14"), vec![(7, 9)]);
}

#[test]
fn test_multibyte_text_is_handled() {
    let ranges = match_ranges("Xperia Pürple", "pürple");
    assert_eq!(ranges.len(), 1);
    let (start, end) = ranges[0];
    assert_eq!(&"Xperia Pürple"[start..end], "Pürple");
}

#[test]
fn test_emphasize_spans_cover_whole_text() {
    let base = Style::default();
    let emphasis = Style::default();

    let spans = emphasize_spans("Galaxy S21", "laxy", base, emphasis);
    let joined: String = spans.iter().map(|s| s.content.as_ref()).collect();
    assert_eq!(joined, "Galaxy S21");
    assert_eq!(spans.len(), 3);
    assert_eq!(spans[1].content.as_ref(), "laxy");
}

#[test]
fn test_emphasize_spans_no_match_is_single_span() {
    let spans = emphasize_spans("Galaxy", "zzz", Style::default(), Style::default());
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].content.as_ref(), "Galaxy");
}

// For any text and query, concatenating the produced spans reproduces the
// text exactly, and every emphasized span equals the query case-insensitively.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_spans_reassemble_text(
        text in "[a-zA-Z0-9 .*()+?]{0,30}",
        query in "[a-zA-Z.]{0,5}",
    ) {
        let spans = emphasize_spans(&text, &query, Style::default(), Style::default());
        let joined: String = spans.iter().map(|s| s.content.as_ref()).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn prop_every_match_equals_query_ignoring_case(
        text in "[a-zA-Z ]{0,30}",
        query in "[a-zA-Z]{1,5}",
    ) {
        for matched in matched_text(&text, &query) {
            prop_assert_eq!(matched.to_lowercase(), query.to_lowercase());
        }
    }

    #[test]
    fn prop_ranges_are_disjoint_and_ordered(
        text in "[a-z]{0,30}",
        query in "[a-z]{1,3}",
    ) {
        let ranges = match_ranges(&text, &query);
        for pair in ranges.windows(2) {
            prop_assert!(pair[0].1 <= pair[1].0, "ranges must not overlap");
        }
    }
}
