use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rect directly below `anchor`, clipped to the frame
pub fn popup_below_anchor(anchor: Rect, frame_area: Rect, height: u16) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let bottom = frame_area.y.saturating_add(frame_area.height);

    Rect {
        x: anchor.x,
        y: popup_y.min(bottom),
        width: anchor.width,
        height: height.min(bottom.saturating_sub(popup_y)),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
