use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::suggest::highlight::emphasize_spans;
use crate::theme;
use crate::widgets::popup;

use super::picker_state::PickerState;

pub const MAX_VISIBLE_SUGGESTIONS: usize = 5;
const DROPDOWN_BORDER_HEIGHT: u16 = 2;

/// Render a picker's input box into `area`
pub fn render_input(picker: &mut PickerState, frame: &mut Frame, area: Rect, focused: bool) {
    let border_color = if focused {
        theme::picker::BORDER_FOCUSED
    } else {
        theme::picker::BORDER_UNFOCUSED
    };

    let title = match picker.selection() {
        Some(selection) => Line::from(vec![
            Span::raw(format!(" {} ", picker.label)),
            Span::styled(
                format!("✓ #{} ", selection.id),
                Style::default().fg(theme::picker::SELECTED_LABEL),
            ),
        ]),
        None => Line::from(format!(" {} ", picker.label)),
    };

    picker.input.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(&picker.input.textarea, area);
}

/// Height the dropdown wants on screen, zero when hidden
pub fn dropdown_height(picker: &PickerState) -> u16 {
    if !picker.suggest.is_visible() {
        return 0;
    }
    let rows = picker.suggest.suggestions().len().min(MAX_VISIBLE_SUGGESTIONS);
    rows as u16 + DROPDOWN_BORDER_HEIGHT
}

/// Render a picker's suggestion dropdown below its input box
///
/// Returns the rendered area for hit testing, or `None` when hidden.
pub fn render_dropdown(
    picker: &PickerState,
    frame: &mut Frame,
    input_area: Rect,
) -> Option<Rect> {
    let height = dropdown_height(picker);
    if height == 0 {
        return None;
    }

    let area = popup::popup_below_anchor(input_area, frame.area(), height);
    if area.height == 0 {
        return None;
    }

    let query = picker.input.query().trim();
    let base_name = Style::default().fg(theme::dropdown::NAME);
    let base_brand = Style::default().fg(theme::dropdown::BRAND);
    let emphasis = Style::default()
        .fg(theme::dropdown::MATCH)
        .add_modifier(Modifier::BOLD);

    let items: Vec<ListItem> = picker
        .suggest
        .suggestions()
        .iter()
        .take(MAX_VISIBLE_SUGGESTIONS)
        .enumerate()
        .map(|(i, device)| {
            let mut spans = Vec::new();

            if i == picker.suggest.selected_index() {
                spans.push(Span::raw("► "));
                spans.extend(emphasize_spans(&device.name, query, base_name, emphasis));
                if !device.brand.is_empty() {
                    spans.push(Span::raw("  "));
                    spans.extend(emphasize_spans(&device.brand, query, base_brand, emphasis));
                }
                let line = Line::from(spans).style(
                    Style::default()
                        .fg(theme::dropdown::HIGHLIGHT_FG)
                        .bg(theme::dropdown::HIGHLIGHT_BG),
                );
                ListItem::new(line)
            } else {
                spans.push(Span::raw("  "));
                spans.extend(emphasize_spans(&device.name, query, base_name, emphasis));
                if !device.brand.is_empty() {
                    spans.push(Span::raw("  "));
                    spans.extend(emphasize_spans(&device.brand, query, base_brand, emphasis));
                }
                ListItem::new(Line::from(spans))
            }
        })
        .collect();

    popup::clear_area(frame, area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::dropdown::BORDER)),
    );

    frame.render_widget(list, area);
    Some(area)
}
