// Theme system for the TUI
//
// Two palettes that can be switched at runtime with 't'. Each theme defines
// colors for every element of the profile screen and the shell around it.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    /// Parse a theme name from config; unknown names fall back to dark
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            _ => ThemeKind::Dark,
        }
    }

    /// Get the other theme
    pub fn toggle(self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::Dark,
        }
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
        }
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub kind: ThemeKind,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_type: BorderType,

    // Shell
    pub title: Color,
    pub status_bar: Color,
    pub highlight: Color,

    // Profile screen
    pub muted: Color,
    pub avatar_bg: Color,
    pub avatar_fg: Color,
    pub role_badge: Color,
    pub country_badge: Color,
    pub stat_value: Color,
    pub error: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
    pub log_trace: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            kind: ThemeKind::Dark,

            background: Color::Reset,
            foreground: Color::White,
            border: Color::DarkGray,
            border_type: BorderType::Rounded,

            title: Color::Rgb(167, 139, 250),
            status_bar: Color::Gray,
            highlight: Color::Rgb(196, 181, 253),

            muted: Color::Gray,
            avatar_bg: Color::Blue,
            avatar_fg: Color::White,
            role_badge: Color::Green,
            country_badge: Color::LightBlue,
            stat_value: Color::White,
            error: Color::LightRed,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
            log_trace: Color::DarkGray,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            kind: ThemeKind::Light,

            background: Color::Rgb(250, 250, 252),
            foreground: Color::Rgb(17, 24, 39),
            border: Color::Rgb(209, 213, 219),
            border_type: BorderType::Rounded,

            title: Color::Rgb(91, 33, 182),
            status_bar: Color::Rgb(75, 85, 99),
            highlight: Color::Rgb(124, 58, 237),

            muted: Color::Rgb(75, 85, 99),
            avatar_bg: Color::Rgb(59, 130, 246),
            avatar_fg: Color::White,
            role_badge: Color::Rgb(22, 101, 52),
            country_badge: Color::Rgb(30, 64, 175),
            stat_value: Color::Rgb(17, 24, 39),
            error: Color::Rgb(220, 38, 38),

            log_error: Color::Rgb(220, 38, 38),
            log_warn: Color::Rgb(180, 83, 9),
            log_info: Color::Rgb(37, 99, 235),
            log_debug: Color::Rgb(107, 114, 128),
            log_trace: Color::Rgb(156, 163, 175),
        }
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn value(&self) -> Style {
        Style::default()
            .fg(self.foreground)
            .add_modifier(Modifier::BOLD)
    }

    pub fn panel_title(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}
