// Status bar component
//
// Renders the view state and key hints at the bottom of the screen.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::view::ViewState;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Narrow terminals drop the key hints and keep the state summary.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let status = Paragraph::new(status_text(app, Breakpoint::from_width(area.width)))
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}

fn state_label(state: &ViewState) -> &'static str {
    match state {
        ViewState::Loading => "loading",
        ViewState::Loaded(_) => "loaded",
        ViewState::Failed(_) => "failed",
    }
}

pub(crate) fn status_text(app: &App, bp: Breakpoint) -> String {
    let summary = format!(
        " {} │ #{} │ {} │ {} logs",
        state_label(app.view.state()),
        app.view.generation(),
        app.theme.kind.name(),
        app.log_buffer.len(),
    );

    match bp {
        Breakpoint::Compact => summary,
        Breakpoint::Normal => format!(
            "{} │ g:go  r:reload  j/k:scroll  y:copy  t:theme  l:logs  q:quit",
            summary
        ),
    }
}
