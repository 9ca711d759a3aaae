//! Responsive breakpoint system for TUI layout decisions.
//!
//! Single source of truth for width thresholds - no magic numbers scattered in render code.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Widest the profile card grows; extra columns become margin
pub const MAX_CONTENT_WIDTH: u16 = 110;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 80 cols: panels stacked in one column
    Compact,
    /// 80+ cols: summary panels side by side
    Normal,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=79 => Breakpoint::Compact,
            _ => Breakpoint::Normal,
        }
    }

    /// Number of panel columns at this width
    pub fn columns(&self) -> usize {
        match self {
            Breakpoint::Compact => 1,
            Breakpoint::Normal => 2,
        }
    }
}

/// Horizontally center the content column, capped at [`MAX_CONTENT_WIDTH`]
pub fn content_column(area: Rect) -> Rect {
    let width = area.width.min(MAX_CONTENT_WIDTH);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// A `width` x `height` box centered in `area` (clamped to it)
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Lines needed to show `text` word-wrapped at `width` columns
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    let width = width as usize;
    let lines: usize = text
        .lines()
        .map(|line| {
            let mut rows = 1;
            let mut used = 0;
            for word in line.split_whitespace() {
                let w = word.width();
                let needed = if used == 0 { w } else { used + 1 + w };
                if needed <= width {
                    used = needed;
                    continue;
                }
                if used > 0 {
                    rows += 1;
                }
                // Words longer than the line break across rows
                rows += w.saturating_sub(1) / width;
                used = w.saturating_sub(1) % width + 1;
            }
            rows
        })
        .sum();
    lines.max(1) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(79), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(80), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(200).columns(), 2);
    }

    #[test]
    fn content_column_is_capped_and_centered() {
        let area = Rect::new(0, 0, 150, 40);
        let column = content_column(area);
        assert_eq!(column.width, MAX_CONTENT_WIDTH);
        assert_eq!(column.x, 20);

        let narrow = Rect::new(0, 0, 60, 40);
        assert_eq!(content_column(narrow), narrow);
    }

    #[test]
    fn centered_box_fits_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered(area, 10, 2), Rect::new(5, 4, 10, 2));
        assert_eq!(centered(area, 50, 50), area);
    }

    #[test]
    fn wrapped_height_counts_rows() {
        assert_eq!(wrapped_height("", 10), 1);
        assert_eq!(wrapped_height("short", 10), 1);
        assert_eq!(wrapped_height("aaaa bbbb cccc", 9), 2);
        assert_eq!(wrapped_height("one\ntwo", 10), 2);
        assert_eq!(wrapped_height("abcdefghijkl", 5), 3);
    }
}
