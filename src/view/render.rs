//! Pure rendering of the profile view
//!
//! [`render`] maps a [`ViewState`] to a [`ProfileScreen`] tree. No branch
//! looks at anything but the state (and, when loaded, the record itself),
//! so the same tree drives the terminal widgets, the headless text output
//! and the clipboard copy.
//!
//! # Layout
//!
//! ```text
//! ┌ Header ─────────────────────────────────────────┐
//! │ avatar | full name, email, [ROLE] [COUNTRY]     │
//! ├ Profile Information ─────┬ Professional Summary ┤
//! ├ Freelancing Stats (freelancers only) ───────────┤
//! ├ Bio ────────────────────────────────────────────┤
//! └ Member since: <date> ───────────────────────────┘
//! ```

use super::state::ViewState;
use super::{LOADING_MESSAGE, NOT_AVAILABLE_MESSAGE};
use crate::profile::UserProfile;

/// Formatting knobs for the rendered tree
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// chrono strftime pattern for the member-since date
    pub date_format: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            date_format: "%-m/%-d/%Y".to_string(),
        }
    }
}

/// Top-level rendered screen
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileScreen {
    /// Centered loading indicator
    Loading { text: String },
    /// Centered message (failure or missing data)
    Message { text: String, is_error: bool },
    /// Full profile layout
    Profile(ProfileLayout),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileLayout {
    pub header: Header,
    pub panels: Vec<Panel>,
    pub footer: String,
}

impl ProfileLayout {
    #[cfg(test)]
    pub fn panel(&self, kind: PanelKind) -> Option<&Panel> {
        self.panels.iter().find(|p| p.kind == kind)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub avatar: Avatar,
    pub full_name: String,
    pub email: String,
    pub role_badge: String,
    pub country_badge: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Avatar {
    /// Remote picture; `alt` is the full name
    Image { url: String, alt: String },
    /// Generated badge with the name initials
    Initials(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    ProfileInformation,
    ProfessionalSummary,
    FreelancingStats,
    Bio,
}

impl PanelKind {
    pub fn title(&self) -> &'static str {
        match self {
            PanelKind::ProfileInformation => "Profile Information",
            PanelKind::ProfessionalSummary => "Professional Summary",
            PanelKind::FreelancingStats => "Freelancing Stats",
            PanelKind::Bio => "Bio",
        }
    }

    /// Panels that span both columns on wide layouts
    pub fn full_width(&self) -> bool {
        matches!(self, PanelKind::FreelancingStats | PanelKind::Bio)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub kind: PanelKind,
    pub body: PanelBody,
}

impl Panel {
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    /// Value shown for a labelled field, if this panel has one
    #[cfg(test)]
    pub fn field(&self, label: &str) -> Option<&str> {
        match &self.body {
            PanelBody::Fields(fields) => fields
                .iter()
                .find(|f| f.label == label)
                .map(|f| f.value.as_str()),
            PanelBody::Stats(stats) => stats
                .iter()
                .find(|s| s.label == label)
                .map(|s| s.value.as_str()),
            PanelBody::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelBody {
    /// "Label: value" rows
    Fields(Vec<Field>),
    /// Big-number tiles
    Stats(Vec<Stat>),
    /// Free text
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub value: String,
}

/// Render the view state
pub fn render(state: &ViewState, options: &RenderOptions) -> ProfileScreen {
    match state {
        ViewState::Loading => ProfileScreen::Loading {
            text: LOADING_MESSAGE.to_string(),
        },
        ViewState::Failed(message) => ProfileScreen::Message {
            text: message
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or(NOT_AVAILABLE_MESSAGE)
                .to_string(),
            is_error: true,
        },
        ViewState::Loaded(profile) => ProfileScreen::Profile(render_profile(profile, options)),
    }
}

fn render_profile(profile: &UserProfile, options: &RenderOptions) -> ProfileLayout {
    let mut panels = vec![
        profile_information(profile),
        professional_summary(profile),
    ];
    if profile.role.is_freelancer() {
        panels.push(freelancing_stats(profile));
    }
    panels.push(Panel {
        kind: PanelKind::Bio,
        body: PanelBody::Text(or_fallback(&profile.bio, "No bio provided.")),
    });

    ProfileLayout {
        header: header(profile),
        panels,
        footer: format!("Member since: {}", member_since(profile, options)),
    }
}

fn header(profile: &UserProfile) -> Header {
    let avatar = match profile.profile_picture.as_deref().filter(|u| !u.is_empty()) {
        Some(url) => Avatar::Image {
            url: url.to_string(),
            alt: profile.full_name(),
        },
        None => Avatar::Initials(profile.initials()),
    };

    Header {
        avatar,
        full_name: profile.full_name(),
        email: profile.email.clone(),
        role_badge: profile.role.to_string(),
        country_badge: profile.country.clone().filter(|c| !c.is_empty()),
    }
}

fn profile_information(profile: &UserProfile) -> Panel {
    Panel {
        kind: PanelKind::ProfileInformation,
        body: PanelBody::Fields(vec![
            field("Username", or_fallback(&profile.username, "Not set")),
            field(
                "Profile Completion",
                flag(profile.is_profile_complete, "Complete", "Incomplete"),
            ),
            field("Account Status", flag(profile.is_active, "Active", "Inactive")),
            field(
                "Verification",
                flag(profile.is_verified, "Verified", "Not Verified"),
            ),
        ]),
    }
}

fn professional_summary(profile: &UserProfile) -> Panel {
    // A zero rating means nobody has rated yet
    let rating = match profile.rating {
        Some(r) if r != 0.0 => r.to_string(),
        _ => "No ratings yet".to_string(),
    };
    // Fallback text is shown bare, without the percent sign
    let success_rate = match profile.success_rate {
        Some(rate) => format!("{}%", rate),
        None => "No data".to_string(),
    };

    Panel {
        kind: PanelKind::ProfessionalSummary,
        body: PanelBody::Fields(vec![
            field("Company", or_fallback(&profile.company, "Not provided")),
            field(
                "Company Email",
                or_fallback(&profile.company_email, "Not provided"),
            ),
            field("Rating", rating),
            field("Success Rate", success_rate),
        ]),
    }
}

fn freelancing_stats(profile: &UserProfile) -> Panel {
    Panel {
        kind: PanelKind::FreelancingStats,
        body: PanelBody::Stats(vec![
            Stat {
                label: "Total Jobs",
                value: profile.total_jobs.unwrap_or(0).to_string(),
            },
            Stat {
                label: "Total Hours",
                value: profile.total_hours.unwrap_or(0).to_string(),
            },
        ]),
    }
}

fn member_since(profile: &UserProfile, options: &RenderOptions) -> String {
    match profile.member_since() {
        Some(date) => {
            use std::fmt::Write;
            let mut out = String::new();
            // An invalid strftime pattern surfaces as a fmt error; fall back to ISO
            if write!(out, "{}", date.format(&options.date_format)).is_err() {
                return date.format("%Y-%m-%d").to_string();
            }
            out
        }
        None => "Unknown".to_string(),
    }
}

fn field(label: &'static str, value: impl Into<String>) -> Field {
    Field {
        label,
        value: value.into(),
    }
}

fn flag(value: bool, yes: &str, no: &str) -> String {
    let text = if value { yes } else { no };
    text.to_string()
}

/// Empty strings count as absent
fn or_fallback(value: &Option<String>, fallback: &str) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}
