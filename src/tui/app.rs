// TUI application state
//
// Owns the profile view and everything the shell around it needs: theme,
// diagnostic log buffer, the go-to prompt, scroll position and toasts.
// Fetches run on spawned tasks; their Resolutions come back through
// `resolutions` and are applied on the event loop, so the view state has a
// single writer.

use super::components::Toast;
use super::input::RoutePrompt;
use super::theme::{Theme, ThemeKind};
use crate::logging::LogBuffer;
use crate::view::{
    render, ProfileLoader, ProfileScreen, ProfileView, RenderOptions, Resolution, Trigger,
};
use anyhow::{Context, Result};
use arboard::Clipboard;
use std::time::Instant;
use tokio::sync::mpsc;

/// Main application state for the TUI
pub struct App {
    /// The profile view controller (sole owner of ViewState)
    pub view: ProfileView,

    /// Performs fetches for new triggers
    loader: ProfileLoader,

    /// Where spawned fetches report back
    resolutions: mpsc::Sender<Resolution>,

    /// Formatting for the rendered tree
    pub render_options: RenderOptions,

    /// Current color theme
    pub theme: Theme,

    /// Log buffer for the diagnostic panel
    pub log_buffer: LogBuffer,

    /// Whether the diagnostic logs panel is shown
    pub show_logs: bool,

    /// Open go-to prompt, if any
    pub prompt: Option<RoutePrompt>,

    /// First profile section shown (section-wise scrolling)
    pub scroll: usize,

    /// Number of sections in the last drawn profile (for clamping)
    pub section_count: usize,

    /// Transient notification
    pub toast: Option<Toast>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Animation frame counter for the loading spinner
    pub animation_frame: usize,

    /// When the current load started
    load_started: Option<Instant>,
}

impl App {
    pub fn new(
        loader: ProfileLoader,
        resolutions: mpsc::Sender<Resolution>,
        render_options: RenderOptions,
        theme: ThemeKind,
        log_buffer: LogBuffer,
    ) -> Self {
        Self {
            view: ProfileView::new(),
            loader,
            resolutions,
            render_options,
            theme: theme.theme(),
            log_buffer,
            show_logs: false,
            prompt: None,
            scroll: 0,
            section_count: 0,
            toast: None,
            should_quit: false,
            animation_frame: 0,
            load_started: None,
        }
    }

    fn start(&mut self, trigger: Trigger) {
        self.scroll = 0;
        self.load_started = Some(Instant::now());
        self.loader.spawn(trigger, self.resolutions.clone());
    }

    /// Mount the view on `id` (initial route or explicit open)
    pub fn open(&mut self, id: &str) {
        let trigger = self.view.mount(id);
        self.start(trigger);
    }

    /// Route change from the prompt; same id is a no-op
    pub fn navigate(&mut self, id: &str) {
        if let Some(trigger) = self.view.navigate(id) {
            self.start(trigger);
        }
    }

    pub fn reload(&mut self) {
        match self.view.reload() {
            Some(trigger) => self.start(trigger),
            None => self.show_toast("No profile to reload"),
        }
    }

    /// Apply a finished fetch from the channel
    pub fn apply(&mut self, resolution: Resolution) {
        if self.view.resolve(resolution) {
            if let Some(started) = self.load_started.take() {
                tracing::debug!("Profile resolved in {}ms", started.elapsed().as_millis());
            }
        }
    }

    /// The current screen as a render tree
    pub fn screen(&self) -> ProfileScreen {
        render(self.view.state(), &self.render_options)
    }

    pub fn open_prompt(&mut self) {
        self.prompt = Some(match self.view.route() {
            Some(id) => RoutePrompt::with_value(id),
            None => RoutePrompt::new(),
        });
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.section_count {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.kind.toggle().theme();
        self.show_toast(format!("Theme: {}", self.theme.kind.name()));
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    /// Copy the rendered profile as plain text
    pub fn copy_profile(&mut self) {
        let text = self.screen().to_string();
        match copy_to_clipboard(&text) {
            Ok(()) => self.show_toast("Profile copied"),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.show_toast("Clipboard unavailable");
            }
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Clear the toast once it has been on screen long enough
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    /// Get spinner character for current animation frame
    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }
}

/// Copy text to the system clipboard
///
/// The clipboard is opened per call; headless Linux has none and fails here.
fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to set clipboard text")?;
    Ok(())
}
