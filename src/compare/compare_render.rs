//! Comparison pane rendering
//!
//! Renders the AI comparison below the picker row. The analysis text uses
//! `**bold**` emphasis markers which are converted to styled spans here.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::compare_state::{ComparePhase, CompareState};
use crate::theme;

/// Render the comparison pane into the given area
pub fn render_pane(compare: &CompareState, frame: &mut Frame, area: Rect) {
    let (lines, border_color) = match compare.phase() {
        ComparePhase::Idle => (
            vec![Line::from(Span::styled(
                "Select two devices to compare them.",
                Style::default().fg(theme::compare::DIM),
            ))],
            theme::compare::BORDER,
        ),
        ComparePhase::Loading => (
            vec![Line::from(Span::styled(
                "Generating comparison...",
                Style::default().fg(theme::compare::DIM),
            ))],
            theme::compare::BORDER,
        ),
        ComparePhase::Ready(analysis) => (analysis_lines(analysis), theme::compare::BORDER),
        ComparePhase::Failed(message) => (
            vec![
                Line::from(Span::styled(
                    format!("Comparison failed: {}", message),
                    Style::default().fg(theme::compare::ERROR),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press Ctrl+R to retry",
                    Style::default().fg(theme::compare::DIM),
                )),
            ],
            theme::compare::ERROR,
        ),
    };

    let pane = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Comparison ")
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(pane, area);
}

/// Convert analysis text into display lines, turning `**bold**` markers
/// into bold spans
///
/// Markers pair up left to right; an unmatched `**` stays literal.
pub fn analysis_lines(analysis: &str) -> Vec<Line<'static>> {
    analysis.split('\n').map(emphasis_line).collect()
}

fn emphasis_line(text: &str) -> Line<'static> {
    let base = Style::default().fg(theme::compare::TEXT);
    let bold = base.add_modifier(Modifier::BOLD);

    let mut spans = Vec::new();
    let mut rest = text;
    loop {
        let Some(open) = rest.find("**") else {
            break;
        };
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("**") else {
            break;
        };

        if open > 0 {
            spans.push(Span::styled(rest[..open].to_string(), base));
        }
        spans.push(Span::styled(after_open[..close].to_string(), bold));
        rest = &after_open[close + 2..];
    }

    if !rest.is_empty() || spans.is_empty() {
        spans.push(Span::styled(rest.to_string(), base));
    }

    Line::from(spans)
}
