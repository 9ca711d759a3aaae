// View module - the profile view and everything it renders
//
// - state:  ViewState, ProfileView (trigger/resolve with generation guard)
// - loader: ProfileLoader, the async half of a trigger
// - render: pure ViewState -> ProfileScreen tree
// - text:   plain-text rendering of the tree (headless output, clipboard)

mod loader;
mod render;
mod state;
mod text;

pub use loader::{ProfileLoader, Resolution};
pub use render::{
    render, Avatar, Header, Panel, PanelBody, ProfileLayout, ProfileScreen, RenderOptions,
};
pub use state::{ProfileView, Trigger, ViewState};

/// Indicator text while a fetch is in flight
pub const LOADING_MESSAGE: &str = "Loading profile data...";

/// Generic message for any load failure
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load user data";

/// Shown when no message accompanies a failed or empty state
pub const NOT_AVAILABLE_MESSAGE: &str = "User data not available";
