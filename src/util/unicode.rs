use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Fit `s` into `max_cells` terminal cells, ending with `…` when cut
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let gw = display_width(g);
        if width + gw > budget {
            break;
        }
        width += gw;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme after the one at `offset`, or None at end
pub fn next_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    if offset >= s.len() {
        return None;
    }
    let len = s[offset..].graphemes(true).next().map_or(0, str::len);
    Some(offset + len)
}

/// Byte offset of the grapheme before `offset`, or None at start
pub fn prev_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    if offset == 0 {
        return None;
    }
    s[..offset]
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
}

/// Terminal column of byte `offset`
pub fn display_col(s: &str, offset: usize) -> usize {
    display_width(&s[..offset.min(s.len())])
}
