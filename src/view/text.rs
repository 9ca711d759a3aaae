// Plain-text rendering of the profile screen
//
// Used for `show` output on stdout and for the clipboard copy in the TUI.

use super::render::{Avatar, PanelBody, ProfileLayout, ProfileScreen};
use std::fmt;

impl ProfileScreen {
    /// Render as plain text lines
    pub fn to_lines(&self) -> Vec<String> {
        match self {
            ProfileScreen::Loading { text } => vec![text.clone()],
            ProfileScreen::Message { text, .. } => vec![text.clone()],
            ProfileScreen::Profile(layout) => layout_lines(layout),
        }
    }
}

impl fmt::Display for ProfileScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.to_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

fn layout_lines(layout: &ProfileLayout) -> Vec<String> {
    let header = &layout.header;
    let mut lines = Vec::new();

    let avatar = match &header.avatar {
        Avatar::Image { url, .. } => format!("[picture: {}]", url),
        Avatar::Initials(initials) => format!("[{}]", initials),
    };
    lines.push(format!("{} {}", avatar, header.full_name));
    lines.push(header.email.clone());

    let mut badges = format!("<{}>", header.role_badge);
    if let Some(country) = &header.country_badge {
        badges.push_str(&format!(" <{}>", country));
    }
    lines.push(badges);

    for panel in &layout.panels {
        lines.push(String::new());
        lines.push(format!("== {} ==", panel.title()));
        match &panel.body {
            PanelBody::Fields(fields) => {
                for field in fields {
                    lines.push(format!("{}: {}", field.label, field.value));
                }
            }
            PanelBody::Stats(stats) => {
                for stat in stats {
                    lines.push(format!("{}: {}", stat.label, stat.value));
                }
            }
            PanelBody::Text(text) => lines.push(text.clone()),
        }
    }

    lines.push(String::new());
    lines.push(layout.footer.clone());
    lines
}

#[cfg(test)]
mod tests {
    use crate::profile::{Role, UserProfile};
    use crate::view::{render, RenderOptions, ViewState, LOADING_MESSAGE};
    use std::sync::Arc;

    #[test]
    fn test_loading_text() {
        let screen = render(&ViewState::Loading, &RenderOptions::default());
        assert_eq!(screen.to_lines(), vec![LOADING_MESSAGE.to_string()]);
    }

    #[test]
    fn test_profile_text() {
        let profile = UserProfile {
            firstname: "Margaret".to_string(),
            lastname: "Hamilton".to_string(),
            email: "mh@example.com".to_string(),
            role: Role::Freelancer,
            country: Some("USA".to_string()),
            created_at: Some("2020-02-03".to_string()),
            ..Default::default()
        };
        let screen = render(
            &ViewState::Loaded(Arc::new(profile)),
            &RenderOptions::default(),
        );
        let text = screen.to_string();

        assert!(text.starts_with("[MH] Margaret Hamilton\nmh@example.com\n<FREELANCER> <USA>\n"));
        assert!(text.contains("== Freelancing Stats ==\nTotal Jobs: 0\nTotal Hours: 0\n"));
        assert!(text.contains("Success Rate: No data\n"));
        assert!(text.ends_with("Member since: 2/3/2020\n"));
    }
}
