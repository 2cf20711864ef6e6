//! Match emphasis for suggestion rows
//!
//! The query is matched as a literal substring, case-insensitively. There is
//! no pattern language here: a query like `a.b` matches only the exact text
//! `a.b`, so user input can never act as match syntax.

use ratatui::style::Style;
use ratatui::text::Span;

/// Case-insensitive comparison of two chars via full case folding
fn chars_match(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Byte ranges of every non-overlapping literal occurrence of `query` in
/// `text`, scanned left to right, case-insensitively
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let query_chars: Vec<char> = query.chars().collect();
    if query_chars.is_empty() {
        return Vec::new();
    }

    let indices: Vec<(usize, char)> = text.char_indices().collect();
    let mut ranges = Vec::new();
    let mut i = 0;

    while i + query_chars.len() <= indices.len() {
        let window = &indices[i..i + query_chars.len()];
        let matched = window
            .iter()
            .zip(&query_chars)
            .all(|((_, a), b)| chars_match(*a, *b));

        if matched {
            let start = indices[i].0;
            let end_index = i + query_chars.len();
            let end = indices.get(end_index).map_or(text.len(), |(byte, _)| *byte);
            ranges.push((start, end));
            i = end_index;
        } else {
            i += 1;
        }
    }

    ranges
}

/// Split `text` into styled spans, emphasizing every match of `query`
pub fn emphasize_spans(
    text: &str,
    query: &str,
    base: Style,
    emphasis: Style,
) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for (start, end) in match_ranges(text, query) {
        if cursor < start {
            spans.push(Span::styled(text[cursor..start].to_string(), base));
        }
        spans.push(Span::styled(text[start..end].to_string(), emphasis));
        cursor = end;
    }

    if cursor < text.len() {
        spans.push(Span::styled(text[cursor..].to_string(), base));
    }

    spans
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod highlight_tests;
