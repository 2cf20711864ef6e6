//! Hit testing for layout regions
//!
//! Determines which UI component is at a given screen position.

use ratatui::layout::Rect;

use super::layout_regions::{LayoutRegions, Region};

/// Check if a point is within a rectangle
fn contains(rect: &Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Returns the topmost region containing the given point
///
/// Dropdowns overlay the compare pane, so they are checked first. Returns
/// `None` if the point is outside all tracked regions.
pub fn region_at(regions: &LayoutRegions, x: u16, y: u16) -> Option<Region> {
    for (i, rect) in regions.dropdowns.iter().enumerate() {
        if let Some(rect) = rect
            && contains(rect, x, y)
        {
            return Some(Region::Dropdown(i));
        }
    }

    for (i, rect) in regions.picker_inputs.iter().enumerate() {
        if let Some(rect) = rect
            && contains(rect, x, y)
        {
            return Some(Region::PickerInput(i));
        }
    }

    if let Some(rect) = &regions.compare_pane
        && contains(rect, x, y)
    {
        return Some(Region::ComparePane);
    }

    if let Some(rect) = &regions.status_bar
        && contains(rect, x, y)
    {
        return Some(Region::StatusBar);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    fn test_regions() -> LayoutRegions {
        LayoutRegions {
            picker_inputs: [Some(rect(0, 0, 40, 3)), Some(rect(40, 0, 40, 3))],
            dropdowns: [Some(rect(0, 3, 40, 6)), None],
            compare_pane: Some(rect(0, 3, 80, 20)),
            status_bar: Some(rect(0, 23, 80, 1)),
        }
    }

    #[test]
    fn test_dropdown_wins_over_compare_pane() {
        let regions = test_regions();
        // (5, 4) is inside both the open dropdown and the compare pane
        assert_eq!(region_at(&regions, 5, 4), Some(Region::Dropdown(0)));
    }

    #[test]
    fn test_each_input_resolves_to_its_picker() {
        let regions = test_regions();
        assert_eq!(region_at(&regions, 5, 1), Some(Region::PickerInput(0)));
        assert_eq!(region_at(&regions, 45, 1), Some(Region::PickerInput(1)));
    }

    #[test]
    fn test_compare_pane_where_no_dropdown() {
        let regions = test_regions();
        assert_eq!(region_at(&regions, 60, 10), Some(Region::ComparePane));
    }

    #[test]
    fn test_status_bar() {
        let regions = test_regions();
        assert_eq!(region_at(&regions, 10, 23), Some(Region::StatusBar));
    }

    #[test]
    fn test_outside_everything_is_none() {
        let regions = test_regions();
        assert_eq!(region_at(&regions, 90, 30), None);
    }

    #[test]
    fn test_closed_dropdown_is_not_hit() {
        let regions = test_regions();
        // Picker 1's dropdown is closed; its spot falls through to compare
        assert_eq!(region_at(&regions, 45, 4), Some(Region::ComparePane));
    }

    #[test]
    fn test_cleared_regions_hit_nothing() {
        let mut regions = test_regions();
        regions.clear();
        assert_eq!(region_at(&regions, 5, 1), None);
    }
}
