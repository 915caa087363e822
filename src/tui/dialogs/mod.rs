pub mod class_form;
pub mod delete_confirmation;
pub mod help;

use ratatui::layout::Rect;

/// Rectangle of the given size centered inside `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
