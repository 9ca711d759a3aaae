// Title bar component
//
// Renders the app title, the profile being viewed and a spinner while a
// fetch is in flight.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new(title_text(app))
        .style(title_style(app))
        .block(block(app));

    f.render_widget(title, area);
}

fn title_text(app: &App) -> String {
    let spinner = if app.view.is_loading() && app.view.route().is_some() {
        format!(" {} loading", app.spinner_char())
    } else {
        String::new()
    };

    let subject = match (app.view.state().profile(), app.view.route()) {
        (Some(profile), _) if !profile.full_name().trim().is_empty() => profile.full_name(),
        (_, Some(id)) => format!("/users/{}", id),
        _ => return " Vidlancing Profile".to_string(),
    };
    format!(" Vidlancing Profile{} ──── {}", spinner, subject)
}

fn title_style(app: &App) -> Style {
    Style::default()
        .fg(app.theme.title)
        .add_modifier(Modifier::BOLD)
}

fn block(app: &App) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.title))
        .title_top(Line::from(format!(" v{} ", crate::config::VERSION)).right_aligned())
}
