// Components module - shell building blocks around the profile view
//
// - Title bar: app name, current route, loading spinner
// - Status bar: view state, generation, theme, key hints
// - Logs panel: recent diagnostic log entries
// - Toast: transient notification overlay

pub mod logs_panel;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;
