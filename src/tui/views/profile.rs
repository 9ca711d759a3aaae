// Profile view - draws a ProfileScreen with ratatui widgets
//
// The screen is split into sections (header, panel rows, footer) that
// scroll as whole units. On normal widths the two summary panels share a
// row; on compact widths every panel gets its own.

use crate::tui::app::App;
use crate::tui::layout::{centered, content_column, wrapped_height, Breakpoint};
use crate::tui::theme::Theme;
use crate::view::{Avatar, Header, Panel, PanelBody, ProfileLayout, ProfileScreen};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const HEADER_HEIGHT: u16 = 5;
const STATS_HEIGHT: u16 = 4;
const AVATAR_WIDTH: u16 = 9;

enum Section<'a> {
    Header(&'a Header),
    Row(Vec<&'a Panel>),
    Footer(&'a str),
}

impl Section<'_> {
    fn height(&self, width: u16) -> u16 {
        match self {
            Section::Header(_) => HEADER_HEIGHT,
            Section::Row(panels) => {
                let column_width = width / panels.len().max(1) as u16;
                panels
                    .iter()
                    .map(|p| panel_height(p, column_width))
                    .max()
                    .unwrap_or(0)
            }
            Section::Footer(_) => 1,
        }
    }
}

fn panel_height(panel: &Panel, width: u16) -> u16 {
    match &panel.body {
        PanelBody::Fields(fields) => fields.len() as u16 + 2,
        PanelBody::Stats(_) => STATS_HEIGHT,
        PanelBody::Text(text) => wrapped_height(text, width.saturating_sub(2)) + 2,
    }
}

fn sections(layout: &ProfileLayout, bp: Breakpoint) -> Vec<Section<'_>> {
    let mut sections = vec![Section::Header(&layout.header)];

    let (wide, narrow): (Vec<&Panel>, Vec<&Panel>) =
        layout.panels.iter().partition(|p| p.kind.full_width());
    for row in narrow.chunks(bp.columns()) {
        sections.push(Section::Row(row.to_vec()));
    }
    for panel in wide {
        sections.push(Section::Row(vec![panel]));
    }

    sections.push(Section::Footer(&layout.footer));
    sections
}

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let screen = app.screen();
    let theme = &app.theme;

    match &screen {
        ProfileScreen::Loading { text } => {
            let line = format!("{} {}", app.spinner_char(), text);
            render_centered(f, area, line, Style::default().fg(theme.muted));
            app.section_count = 0;
        }
        ProfileScreen::Message { text, is_error } => {
            let style = if *is_error {
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted)
            };
            render_centered(f, area, text.clone(), style);
            app.section_count = 0;
        }
        ProfileScreen::Profile(layout) => {
            let column = content_column(area);
            let sections = sections(layout, Breakpoint::from_width(column.width));

            let mut y = column.y;
            for section in sections.iter().skip(app.scroll) {
                let remaining = column.bottom().saturating_sub(y);
                if remaining == 0 {
                    break;
                }
                let height = section.height(column.width).min(remaining);
                let rect = Rect::new(column.x, y, column.width, height);
                render_section(f, rect, section, theme);
                y += height;
            }

            app.section_count = sections.len();
        }
    }
}

fn render_centered(f: &mut Frame, area: Rect, text: String, style: Style) {
    let rect = centered(area, area.width, 1);
    f.render_widget(
        Paragraph::new(text).style(style).alignment(Alignment::Center),
        rect,
    );
}

fn render_section(f: &mut Frame, area: Rect, section: &Section, theme: &Theme) {
    match section {
        Section::Header(header) => render_header(f, area, header, theme),
        Section::Row(panels) => {
            let constraints = vec![Constraint::Ratio(1, panels.len() as u32); panels.len()];
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(constraints)
                .split(area);
            for (panel, rect) in panels.iter().zip(columns.iter()) {
                render_panel(f, *rect, panel, theme);
            }
        }
        Section::Footer(text) => {
            f.render_widget(Paragraph::new(*text).style(theme.label()), area);
        }
    }
}

fn panel_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style())
        .title(Span::styled(format!(" {} ", title), theme.panel_title()))
}

fn render_header(f: &mut Frame, area: Rect, header: &Header, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [avatar_area, details_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(AVATAR_WIDTH), Constraint::Min(0)])
        .areas(inner);

    let avatar = match &header.avatar {
        Avatar::Initials(initials) => Paragraph::new(vec![
            Line::from(""),
            Line::from(initials.as_str()),
            Line::from(""),
        ])
        .style(
            Style::default()
                .bg(theme.avatar_bg)
                .fg(theme.avatar_fg)
                .add_modifier(Modifier::BOLD),
        ),
        // Terminals cannot show the picture; mark that one exists
        Avatar::Image { .. } => Paragraph::new(vec![
            Line::from(""),
            Line::from("[pic]"),
            Line::from(""),
        ])
        .style(Style::default().fg(theme.muted)),
    };
    let avatar_rect = Rect {
        width: avatar_area.width.saturating_sub(2),
        ..avatar_area
    };
    f.render_widget(avatar.alignment(Alignment::Center), avatar_rect);

    let mut badges = Vec::new();
    if !header.role_badge.is_empty() {
        badges.push(badge(&header.role_badge, theme.role_badge));
        badges.push(Span::raw(" "));
    }
    if let Some(country) = &header.country_badge {
        badges.push(badge(country, theme.country_badge));
    }

    let details = Paragraph::new(vec![
        Line::from(Span::styled(header.full_name.as_str(), theme.value())),
        Line::from(Span::styled(header.email.as_str(), theme.label())),
        Line::from(badges),
    ]);
    f.render_widget(details, details_area);
}

fn badge(text: &str, color: ratatui::style::Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", text),
        Style::default()
            .fg(color)
            .add_modifier(Modifier::REVERSED | Modifier::BOLD),
    )
}

fn render_panel(f: &mut Frame, area: Rect, panel: &Panel, theme: &Theme) {
    let block = panel_block(panel.title(), theme);

    match &panel.body {
        PanelBody::Fields(fields) => {
            let lines: Vec<Line> = fields
                .iter()
                .map(|field| {
                    Line::from(vec![
                        Span::styled(format!("{}: ", field.label), theme.label()),
                        Span::styled(field.value.as_str(), theme.value()),
                    ])
                })
                .collect();
            f.render_widget(Paragraph::new(lines).block(block), area);
        }
        PanelBody::Stats(stats) => {
            let inner = block.inner(area);
            f.render_widget(block, area);

            let constraints = vec![Constraint::Ratio(1, stats.len().max(1) as u32); stats.len()];
            let tiles = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(constraints)
                .split(inner);
            for (stat, rect) in stats.iter().zip(tiles.iter()) {
                let tile = Paragraph::new(vec![
                    Line::from(Span::styled(
                        stat.value.as_str(),
                        Style::default()
                            .fg(theme.stat_value)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(stat.label, theme.label())),
                ])
                .alignment(Alignment::Center);
                f.render_widget(tile, *rect);
            }
        }
        PanelBody::Text(text) => {
            let paragraph = Paragraph::new(text.as_str())
                .style(theme.text())
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(paragraph, area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Role, UserProfile};
    use crate::view::{render, RenderOptions, ViewState};
    use std::sync::Arc;

    fn layout(role: Role, bio: &str) -> ProfileLayout {
        let profile = UserProfile {
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            role,
            bio: Some(bio.to_string()),
            ..Default::default()
        };
        match render(
            &ViewState::Loaded(Arc::new(profile)),
            &RenderOptions::default(),
        ) {
            ProfileScreen::Profile(layout) => layout,
            other => panic!("expected profile, got {:?}", other),
        }
    }

    #[test]
    fn normal_width_pairs_summary_panels() {
        let layout = layout(Role::Freelancer, "Hi");
        let sections = sections(&layout, Breakpoint::Normal);
        // header, info+summary, stats, bio, footer
        assert_eq!(sections.len(), 5);
        assert!(matches!(&sections[1], Section::Row(row) if row.len() == 2));
    }

    #[test]
    fn compact_width_stacks_everything() {
        let layout = layout(Role::Client, "Hi");
        let sections = sections(&layout, Breakpoint::Compact);
        // header, info, summary, bio, footer
        assert_eq!(sections.len(), 5);
        assert!(sections
            .iter()
            .all(|s| !matches!(s, Section::Row(row) if row.len() > 1)));
    }

    #[test]
    fn bio_height_grows_with_text() {
        let short = layout(Role::Client, "Hi");
        let long = layout(Role::Client, &"word ".repeat(60));
        let bio_height = |layout: &ProfileLayout| {
            let sections = sections(layout, Breakpoint::Normal);
            sections[sections.len() - 2].height(40)
        };
        assert_eq!(bio_height(&short), 3);
        assert!(bio_height(&long) > 3);
    }
}
