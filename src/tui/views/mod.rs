// Views module - screen-level rendering
//
// The shell is fixed: title bar, profile content, optional logs panel and
// status bar. Overlays (go-to prompt, toast) are drawn last.

mod profile;

use super::app::App;
use super::components::{logs_panel, status_bar, title_bar};
use super::layout::centered;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const LOGS_HEIGHT: u16 = 8;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let mut constraints = vec![Constraint::Length(3), Constraint::Min(5)];
    if app.show_logs {
        constraints.push(Constraint::Length(LOGS_HEIGHT));
    }
    constraints.push(Constraint::Length(2));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    title_bar::render(f, chunks[0], app);
    profile::render(f, chunks[1], app);
    if app.show_logs {
        logs_panel::render(f, chunks[2], app);
    }
    status_bar::render(f, chunks[chunks.len() - 1], app);

    if app.prompt.is_some() {
        render_prompt(f, f.area(), app);
    }

    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    app.clear_expired_toast();
}

fn render_prompt(f: &mut Frame, area: Rect, app: &App) {
    let Some(prompt) = app.prompt.as_ref() else {
        return;
    };
    let theme = &app.theme;
    let prompt_area = centered(area, 50, 3);

    let line = Line::from(vec![
        Span::styled("/users/", theme.label()),
        Span::styled(prompt.value(), theme.value()),
        Span::styled("▏", Style::default().fg(theme.highlight)),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.highlight))
            .style(Style::default().bg(theme.background))
            .title(" Go to profile ")
            .title_bottom(Line::from(" Enter:open  Esc:cancel ").right_aligned()),
    );

    f.render_widget(Clear, prompt_area);
    f.render_widget(paragraph, prompt_area);
}
