use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
};

use crate::compare::compare_render;
use crate::notification::render_notification;
use crate::picker::{render_dropdown, render_input};
use crate::theme;

use super::state::App;

impl App {
    /// Render the full UI and record the regions for mouse hit testing
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let [picker_row, compare_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(picker_row);
        let input_areas = [left, right];

        for (i, area) in input_areas.iter().enumerate() {
            render_input(&mut self.pickers[i], frame, *area, self.focus.index() == i);
            self.layout_regions.picker_inputs[i] = Some(*area);
        }

        compare_render::render_pane(&self.compare, frame, compare_area);
        self.layout_regions.compare_pane = Some(compare_area);

        self.render_status_bar(frame, status_area);
        self.layout_regions.status_bar = Some(status_area);

        // Dropdowns render last so they overlay the compare pane
        for (i, area) in input_areas.iter().enumerate() {
            self.layout_regions.dropdowns[i] = render_dropdown(&self.pickers[i], frame, *area);
        }

        render_notification(&self.notification, frame);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let key = Style::default().fg(theme::status::KEY);
        let text = Style::default().fg(theme::status::TEXT);

        let mut spans = vec![
            Span::styled(" Tab", key),
            Span::styled(" switch  ", text),
            Span::styled("Enter", key),
            Span::styled(" compare  ", text),
            Span::styled("Ctrl+X", key),
            Span::styled(" reset  ", text),
            Span::styled("Ctrl+R", key),
            Span::styled(" retry  ", text),
            Span::styled("Ctrl+C", key),
            Span::styled(" quit", text),
        ];

        if self.compare_ready() {
            spans.push(Span::styled(
                "  ✓ ready to compare",
                Style::default().fg(theme::status::READY),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
