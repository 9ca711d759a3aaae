// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, finished fetches)
// - Rendering the UI

pub mod app;
pub mod components;
pub mod input;
pub mod layout;
pub mod theme;
pub mod views;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::view::{ProfileLoader, RenderOptions, Resolution};
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use input::PromptAction;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use theme::ThemeKind;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, opens `initial_id` (or the go-to prompt when there
/// is none), runs the event loop and restores the terminal when done.
pub async fn run_tui(
    config: &Config,
    loader: ProfileLoader,
    log_buffer: LogBuffer,
    initial_id: Option<String>,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (tx, mut rx) = mpsc::channel::<Resolution>(16);
    let render_options = RenderOptions {
        date_format: config.date_format.clone(),
    };
    let mut app = App::new(
        loader,
        tx,
        render_options,
        ThemeKind::from_name(&config.theme),
        log_buffer,
    );

    match initial_id {
        Some(id) => app.open(&id),
        None => app.open_prompt(),
    }

    let result = run_event_loop(&mut terminal, &mut app, &mut rx).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on keyboard input, a redraw tick and finished fetches, whichever
/// comes first. Resolutions are applied here so the view has one writer.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rx: &mut mpsc::Receiver<Resolution>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            Some(resolution) = rx.recv() => {
                app.apply(resolution);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
///
/// The go-to prompt captures every key while open; otherwise keys map to
/// global actions.
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if let Some(prompt) = app.prompt.as_mut() {
        match prompt.handle_key(key) {
            PromptAction::Continue => {}
            PromptAction::Cancel => app.prompt = None,
            PromptAction::Submit(id) => {
                app.prompt = None;
                // First route of the session mounts; later ones navigate
                if app.view.route().is_some() {
                    app.navigate(&id);
                } else {
                    app.open(&id);
                }
            }
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('g') | KeyCode::Char('/') => app.open_prompt(),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        KeyCode::Char('l') => app.toggle_logs(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('y') => app.copy_profile(),
        _ => {}
    }
}
