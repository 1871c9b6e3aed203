//! Off-screen rendering helpers
//!
//! Used by the `render` command and by tests to look at a frame as text.

use ratatui::{buffer::Buffer, layout::Rect, widgets::StatefulWidget};
use unicode_width::UnicodeWidthStr;

use crate::animation::TileState;
use crate::widgets::SegmentedControl;

/// Render a control with its tile at rest into a fresh buffer
pub fn render_settled(control: &SegmentedControl, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    let mut state = TileState::default();
    control.render(area, &mut buf, &mut state);
    buf
}

/// Text of every buffer row, trailing blanks trimmed
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let mut line = String::new();
            let mut x = area.left();
            while x < area.right() {
                let symbol = buf[(x, y)].symbol();
                line.push_str(symbol);
                // Wide symbols cover the cells after them
                x += symbol.width().max(1) as u16;
            }
            line.trim_end().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_settled() {
        let control = SegmentedControl::new(["One", "Two"], 1, |_| {});
        let buf = render_settled(&control, 20, 3);
        let lines = buffer_lines(&buf);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "   One       Two");
        assert_eq!(lines[2], "");
    }

    #[test]
    fn test_wide_symbols() {
        let control = SegmentedControl::new(["日本"], 0, |_| {});
        let buf = render_settled(&control, 6, 1);
        assert_eq!(buffer_lines(&buf)[0], " 日本");
    }
}
