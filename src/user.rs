//! Profile domain model.
//!
//! Kept out of the wasm-only `web` module so the mapping and display
//! computations can be unit-tested on the host.

use serde::Serialize;

/// A profile record as supplied by the Telegram runtime.
///
/// The host owns these fields; they are displayed verbatim and never
/// validated beyond shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub language_code: Option<String>,
    pub photo_url: Option<String>,
    pub is_premium: Option<bool>,
}

impl UserRecord {
    /// First and last name joined with a space, skipping absent or empty
    /// parts.
    pub fn display_name(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(2);
        if !self.first_name.is_empty() {
            parts.push(self.first_name.as_str());
        }
        if let Some(last) = self.last_name.as_deref() {
            if !last.is_empty() {
                parts.push(last);
            }
        }
        parts.join(" ")
    }

    /// First character of up to the first two name parts.
    pub fn initials(&self) -> String {
        let mut out = String::new();
        for part in [Some(self.first_name.as_str()), self.last_name.as_deref()]
            .into_iter()
            .flatten()
        {
            if let Some(c) = part.chars().next() {
                out.push(c);
            }
        }
        out
    }
}

/// Host user payload with explicit field presence.
///
/// Host payloads arrive dynamically shaped; a payload missing `id` or
/// `first_name` maps to "no user" rather than an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPayload {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub language_code: Option<String>,
    pub photo_url: Option<String>,
    pub is_premium: Option<bool>,
}

impl UserPayload {
    /// Field-by-field mapping into the domain record; `None` when a
    /// required field is absent.
    pub fn into_record(self) -> Option<UserRecord> {
        let id = self.id?;
        let first_name = self.first_name?;
        Some(UserRecord {
            id,
            first_name,
            last_name: self.last_name,
            username: self.username,
            language_code: self.language_code,
            photo_url: self.photo_url,
            is_premium: self.is_premium,
        })
    }
}

/// Fixed record shown when no host source yields a user.
pub fn mock_user() -> UserRecord {
    UserRecord {
        id: 123_456_789,
        first_name: "John".to_string(),
        last_name: Some("Doe".to_string()),
        username: Some("johndoe".to_string()),
        language_code: Some("en".to_string()),
        photo_url: Some("/placeholder.svg?height=120&width=120".to_string()),
        is_premium: Some(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> UserPayload {
        UserPayload {
            id: Some(42),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            username: Some("ada".to_string()),
            language_code: Some("en".to_string()),
            photo_url: Some("https://example.org/a.png".to_string()),
            is_premium: Some(false),
        }
    }

    #[test]
    fn payload_maps_field_by_field() {
        let user = full_payload().into_record();
        let Some(user) = user else {
            panic!("full payload must map to a record");
        };
        assert_eq!(user.id, 42);
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.last_name.as_deref(), Some("Lovelace"));
        assert_eq!(user.username.as_deref(), Some("ada"));
        assert_eq!(user.language_code.as_deref(), Some("en"));
        assert_eq!(user.photo_url.as_deref(), Some("https://example.org/a.png"));
        assert_eq!(user.is_premium, Some(false));
    }

    #[test]
    fn payload_without_id_is_no_user() {
        let mut payload = full_payload();
        payload.id = None;
        assert!(payload.into_record().is_none());
    }

    #[test]
    fn payload_without_first_name_is_no_user() {
        let mut payload = full_payload();
        payload.first_name = None;
        assert!(payload.into_record().is_none());
    }

    #[test]
    fn display_name_skips_absent_last_name() {
        let mut payload = full_payload();
        payload.last_name = None;
        let user = payload.into_record().map(|u| (u.display_name(), u.initials()));
        assert_eq!(user, Some(("Ada".to_string(), "A".to_string())));
    }

    #[test]
    fn display_name_joins_first_and_last() {
        let user = full_payload().into_record().map(|u| (u.display_name(), u.initials()));
        assert_eq!(user, Some(("Ada Lovelace".to_string(), "AL".to_string())));
    }

    #[test]
    fn empty_name_parts_are_skipped() {
        let mut payload = full_payload();
        payload.first_name = Some(String::new());
        payload.last_name = Some(String::new());
        let Some(user) = payload.into_record() else {
            panic!("empty first name is still present");
        };
        assert_eq!(user.display_name(), "");
        assert_eq!(user.initials(), "");
    }

    #[test]
    fn mock_user_is_stable() {
        let user = mock_user();
        assert_eq!(user.id, 123_456_789);
        assert_eq!(user.display_name(), "John Doe");
        assert_eq!(user.initials(), "JD");
        assert_eq!(user.is_premium, Some(true));
    }
}
