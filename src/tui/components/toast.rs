//! Toast notification component
//!
//! Short-lived message in the bottom-right corner, drawn over everything
//! else. Used for clipboard results, theme switches and rejected actions.

use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

const TOAST_DURATION: Duration = Duration::from_secs(2);

pub struct Toast {
    pub message: String,
    shown_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= TOAST_DURATION
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        // message + one cell of padding and a border on each side
        let width = (self.message.width() as u16 + 4).min(area.width.saturating_sub(2));
        let height = 3;
        let toast_area = Rect::new(
            area.right().saturating_sub(width + 1),
            area.bottom().saturating_sub(height + 1),
            width,
            height.min(area.height),
        );

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(theme.border_type)
                    .border_style(Style::default().fg(theme.highlight))
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}
