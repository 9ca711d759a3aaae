//! Logs panel component
//!
//! Shows the most recent entries of the in-memory log buffer, newest at the
//! bottom, colored by level. The panel follows the tail; there is no
//! selection or scrolling.

use crate::logging::{LogEntry, LogLevel};
use crate::tui::app::App;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let height = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.recent(height);

    let items: Vec<ListItem> = if app.log_buffer.is_empty() {
        vec![ListItem::new(Line::styled("No log entries yet", app.theme.label()))]
    } else {
        entries
            .iter()
            .map(|entry| ListItem::new(entry_line(entry, &app.theme)))
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(app.theme.border_style())
            .title(" Logs "),
    );

    f.render_widget(list, area);
}

fn entry_line<'a>(entry: &'a LogEntry, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(entry.display_line(), level_style(entry.level, theme)),
        Span::styled(format!("  {}", entry.target), theme.label()),
    ])
}

fn level_style(level: LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.log_error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.log_warn),
        LogLevel::Info => Style::default().fg(theme.log_info),
        LogLevel::Debug => Style::default().fg(theme.log_debug),
        LogLevel::Trace => Style::default().fg(theme.log_trace),
    }
}
