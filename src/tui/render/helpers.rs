use ratatui::layout::Rect;
use unicode_segmentation::UnicodeSegmentation;

use crate::util::unicode::{display_col, display_width};

/// A fixed-size rect centered in `area`, shrunk to fit
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// The part of a single-line field that fits in `width` cells while keeping
/// the cursor visible. Returns the visible text and the cursor's column
/// within it.
pub(super) fn field_window(text: &str, cursor: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }
    let cursor_col = display_col(text, cursor);
    // Leave one cell for the cursor past the last character
    let skip_cols = (cursor_col + 1).saturating_sub(width);

    let mut skipped = 0;
    let mut used = 0;
    let mut visible = String::new();
    for g in text.graphemes(true) {
        let gw = display_width(g);
        if skipped < skip_cols {
            skipped += gw;
            continue;
        }
        if used + gw > width {
            break;
        }
        used += gw;
        visible.push_str(g);
    }
    (visible, cursor_col - skipped.min(cursor_col))
}
