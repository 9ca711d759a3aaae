// Profile model - the user record served by GET /users/{id}
//
// The record is trusted as delivered: absent or null strings decode to "",
// absent or null flags to false, absent optionals to None. Only a field with the wrong JSON
// type makes decoding fail.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Account role as reported by the platform
///
/// Only `FREELANCER` changes what gets rendered; every other label is kept
/// verbatim so the role badge shows exactly what the server sent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Role {
    Freelancer,
    Client,
    /// Any role this client has no special handling for (ADMIN, ...)
    Other(String),
    #[default]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Freelancer => "FREELANCER",
            Role::Client => "CLIENT",
            Role::Other(label) => label,
            Role::Unknown => "",
        }
    }

    pub fn is_freelancer(&self) -> bool {
        matches!(self, Role::Freelancer)
    }
}

impl From<String> for Role {
    fn from(label: String) -> Self {
        match label.as_str() {
            "FREELANCER" => Role::Freelancer,
            "CLIENT" => Role::Client,
            "" => Role::Unknown,
            _ => Role::Other(label),
        }
    }
}

impl From<Option<String>> for Role {
    fn from(label: Option<String>) -> Self {
        label.map(Role::from).unwrap_or_default()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user profile record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub firstname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lastname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    pub role: Role,

    pub profile_picture: Option<String>,
    pub country: Option<String>,
    pub username: Option<String>,
    pub company: Option<String>,
    pub company_email: Option<String>,
    pub bio: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub is_profile_complete: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_verified: bool,

    pub rating: Option<f64>,
    /// Percentage in [0, 100]
    pub success_rate: Option<f64>,

    /// Only meaningful for freelancers
    pub total_jobs: Option<u64>,
    /// Only meaningful for freelancers
    pub total_hours: Option<u64>,

    /// Raw timestamp as sent; parsed lazily by [`parse_created_at`]
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<String>,
}

impl UserProfile {
    /// "firstname lastname", as shown in the header
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    /// First letter of each name; missing names contribute nothing
    pub fn initials(&self) -> String {
        self.firstname
            .chars()
            .next()
            .into_iter()
            .chain(self.lastname.chars().next())
            .collect()
    }

    /// Calendar date the account was created, in local time
    pub fn member_since(&self) -> Option<NaiveDate> {
        self.created_at.as_deref().and_then(parse_created_at)
    }
}

/// `null` decodes like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Identifiers may arrive as strings or numbers; both are kept as text
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => s,
        Some(Raw::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

/// Accepts a JSON string or an integer (epoch milliseconds) and keeps it as text
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Millis(i64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Millis(ms) => ms.to_string(),
    }))
}

/// Parse a `createdAt` value into a local calendar date
///
/// Supported shapes: RFC 3339, `YYYY-MM-DD HH:MM:SS` (UTC), `YYYY-MM-DD`,
/// and epoch milliseconds. Anything else yields `None`.
pub fn parse_created_at(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).date_naive());
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&naive).with_timezone(&Local).date_naive());
    }

    // Date-only values carry no timezone, so they are taken as-is
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    raw.parse::<i64>()
        .ok()
        .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
        .map(|dt| dt.with_timezone(&Local).date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_record() {
        let json = r#"{
            "id": "u-42",
            "firstname": "Ada",
            "lastname": "Lovelace",
            "email": "ada@example.com",
            "role": "FREELANCER",
            "profilePicture": "https://cdn.example.com/ada.png",
            "country": "UK",
            "username": "ada",
            "company": "Analytical Engines",
            "companyEmail": "hello@engines.example",
            "bio": "First programmer.",
            "isProfileComplete": true,
            "isActive": true,
            "isVerified": false,
            "rating": 4.8,
            "successRate": 97,
            "totalJobs": 12,
            "totalHours": 340,
            "createdAt": "2024-01-15"
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, "u-42");
        assert_eq!(profile.role, Role::Freelancer);
        assert_eq!(profile.company_email.as_deref(), Some("hello@engines.example"));
        assert_eq!(profile.success_rate, Some(97.0));
        assert_eq!(profile.total_hours, Some(340));
        assert!(profile.is_active);
        assert!(!profile.is_verified);
        assert_eq!(profile.member_since(), NaiveDate::from_ymd_opt(2024, 1, 15));
    }

    #[test]
    fn test_decode_sparse_record_uses_defaults() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"id": "7", "role": "CLIENT", "extra": [1, 2]}"#).unwrap();

        assert_eq!(profile.firstname, "");
        assert_eq!(profile.role, Role::Client);
        assert!(profile.rating.is_none());
        assert!(profile.created_at.is_none());
        assert!(!profile.is_profile_complete);
    }

    #[test]
    fn test_decode_rejects_wrong_types() {
        let result = serde_json::from_str::<UserProfile>(r#"{"totalJobs": "many"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_nulls_as_absent() {
        let json = r#"{
            "id": "1",
            "firstname": "Ada",
            "lastname": null,
            "email": null,
            "role": null,
            "isVerified": null,
            "isActive": true,
            "bio": null
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.lastname, "");
        assert_eq!(profile.email, "");
        assert_eq!(profile.role, Role::Unknown);
        assert!(!profile.is_verified);
        assert!(profile.is_active);
        assert!(profile.bio.is_none());
        assert_eq!(profile.initials(), "A");
    }

    #[test]
    fn test_decode_numeric_id() {
        let profile: UserProfile = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(profile.id, "7");

        let profile: UserProfile = serde_json::from_str(r#"{"id": null}"#).unwrap();
        assert_eq!(profile.id, "");
    }

    #[test]
    fn test_unknown_role_is_preserved() {
        let profile: UserProfile = serde_json::from_str(r#"{"role": "ADMIN"}"#).unwrap();
        assert_eq!(profile.role, Role::Other("ADMIN".to_string()));
        assert_eq!(profile.role.to_string(), "ADMIN");
        assert!(!profile.role.is_freelancer());
    }

    #[test]
    fn test_initials_tolerate_missing_names() {
        let mut profile = UserProfile {
            firstname: "Émile".to_string(),
            lastname: "Zola".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.initials(), "ÉZ");

        profile.lastname.clear();
        assert_eq!(profile.initials(), "É");

        profile.firstname.clear();
        assert_eq!(profile.initials(), "");
    }

    #[test]
    fn test_created_at_as_epoch_millis() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"createdAt": 1705320000000}"#).unwrap();
        assert_eq!(profile.created_at.as_deref(), Some("1705320000000"));
        assert!(profile.member_since().is_some());
    }

    #[test]
    fn test_parse_created_at_shapes() {
        assert_eq!(
            parse_created_at("2023-06-01"),
            NaiveDate::from_ymd_opt(2023, 6, 1)
        );
        assert!(parse_created_at("2023-06-01T12:00:00Z").is_some());
        assert!(parse_created_at("2023-06-01 12:00:00").is_some());
        assert!(parse_created_at("").is_none());
        assert!(parse_created_at("last tuesday").is_none());
    }
}
