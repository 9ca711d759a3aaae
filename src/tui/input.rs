// Go-to-profile prompt
//
// A one-line text input opened with 'g' or '/'. Submitting a value is a
// route change for the profile view; an empty or whitespace-only value is
// ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the prompt wants the app to do after a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    /// Still editing
    Continue,
    /// Navigate to this identifier
    Submit(String),
    /// Close without navigating
    Cancel,
}

/// State of the route prompt
#[derive(Debug, Clone, Default)]
pub struct RoutePrompt {
    buffer: String,
}

impl RoutePrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prompt pre-filled with the current identifier
    pub fn with_value(value: &str) -> Self {
        Self {
            buffer: value.to_string(),
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PromptAction {
        match key.code {
            KeyCode::Esc => PromptAction::Cancel,
            KeyCode::Enter => {
                let id = self.buffer.trim();
                if id.is_empty() {
                    PromptAction::Cancel
                } else {
                    PromptAction::Submit(id.to_string())
                }
            }
            KeyCode::Backspace => {
                self.buffer.pop();
                PromptAction::Continue
            }
            // Ctrl+U clears the line, as in most shells
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.buffer.clear();
                PromptAction::Continue
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.buffer.push(c);
                PromptAction::Continue
            }
            _ => PromptAction::Continue,
        }
    }
}
