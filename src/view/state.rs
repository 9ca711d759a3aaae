//! Profile view state machine
//!
//! `ProfileView` owns the single [`ViewState`]. Every mount or route change
//! produces a [`Trigger`] stamped with a fresh generation; the async load for
//! that trigger comes back as a [`Resolution`] and is applied only if no newer
//! trigger has happened since. A slow response for an old route can therefore
//! never replace the profile of the route being shown.
//!
//! ```text
//!   mount(id) / navigate(id) / reload()
//!            │
//!            ▼
//!        Loading ──── resolve(current gen) ───► Loaded(record) | Failed(msg)
//!            ▲
//!            └──── resolve(stale gen): discarded
//! ```

use super::loader::Resolution;
use super::LOAD_FAILED_MESSAGE;
use crate::api::ErrorKind;
use crate::profile::UserProfile;
use std::sync::Arc;

/// What the view currently shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// Fetch in flight, nothing else shown
    #[default]
    Loading,
    /// One complete record
    Loaded(Arc<UserProfile>),
    /// Load failed; `None` when the server returned no record
    Failed(Option<String>),
}

impl ViewState {
    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            ViewState::Loaded(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ViewState::Failed(_))
    }
}

/// One activation of the view for a route identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub generation: u64,
    pub id: String,
}

/// Controller for the profile view
#[derive(Debug, Default)]
pub struct ProfileView {
    route: Option<String>,
    generation: u64,
    state: ViewState,
}

impl ProfileView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Route identifier of the latest trigger
    pub fn route(&self) -> Option<&str> {
        self.route.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    /// Activate the view for `id`, discarding whatever was shown before
    pub fn mount(&mut self, id: impl Into<String>) -> Trigger {
        let id = id.into();
        self.generation += 1;
        self.route = Some(id.clone());
        self.state = ViewState::Loading;

        tracing::debug!("Profile trigger #{} for '{}'", self.generation, id);

        Trigger {
            generation: self.generation,
            id,
        }
    }

    /// Route change: triggers only when `id` differs from the current route
    pub fn navigate(&mut self, id: &str) -> Option<Trigger> {
        if self.route.as_deref() == Some(id) {
            return None;
        }
        Some(self.mount(id))
    }

    /// Trigger again for the current route
    pub fn reload(&mut self) -> Option<Trigger> {
        let id = self.route.clone()?;
        Some(self.mount(id))
    }

    /// Apply a finished load
    ///
    /// Returns false when the resolution belongs to a superseded trigger.
    pub fn resolve(&mut self, resolution: Resolution) -> bool {
        if resolution.trigger.generation != self.generation {
            tracing::debug!(
                "Discarding stale profile response for '{}' (#{}, current #{})",
                resolution.trigger.id,
                resolution.trigger.generation,
                self.generation
            );
            return false;
        }

        self.state = match resolution.outcome {
            Ok(profile) => ViewState::Loaded(Arc::new(profile)),
            Err(ErrorKind::LoadFailure) => ViewState::Failed(Some(LOAD_FAILED_MESSAGE.to_string())),
            Err(ErrorKind::EmptyResult) => ViewState::Failed(None),
        };
        true
    }
}
