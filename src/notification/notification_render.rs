use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::notification_state::NotificationState;

const MAX_WIDTH: u16 = 60;

/// Render the current notification as a toast in the top-right corner
pub fn render_notification(state: &NotificationState, frame: &mut Frame) {
    let Some(notification) = state.current() else {
        return;
    };

    let frame_area = frame.area();
    let text_width = notification.message.chars().count() as u16 + 4;
    let width = text_width.min(MAX_WIDTH).min(frame_area.width);
    let area = Rect {
        x: frame_area.width.saturating_sub(width),
        y: frame_area.y,
        width,
        height: 3.min(frame_area.height),
    };

    let style = &notification.style;
    let paragraph = Paragraph::new(Line::from(notification.message.clone()))
        .style(Style::default().fg(style.fg).bg(style.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(style.border)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
