//! User account models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::wire::timestamp;

/// A registered user as returned by `/users/me` and `/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
}

impl User {
    /// Full name when set, otherwise the username.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }
}

/// Registration payload.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
}

/// Partial profile update; absent fields are left untouched by the server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ProfileUpdate {
    pub const fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.phone_number.is_none() && self.email.is_none()
    }
}

/// Response of the token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(full_name: Option<&str>) -> User {
        User {
            user_id: 1,
            username: "asha".to_string(),
            email: "asha@example.com".to_string(),
            full_name: full_name.map(String::from),
            phone_number: None,
            created_at: timestamp::parse("2025-01-01T00:00:00").unwrap(),
        }
    }

    #[test]
    fn display_name_prefers_full_name() {
        assert_eq!(user(Some("Asha Rao")).display_name(), "Asha Rao");
        assert_eq!(user(None).display_name(), "asha");
        assert_eq!(user(Some("")).display_name(), "asha");
    }

    #[test]
    fn profile_update_omits_absent_fields() {
        let update = ProfileUpdate {
            phone_number: Some("98765".to_string()),
            ..ProfileUpdate::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"phone_number": "98765"}));
        assert!(ProfileUpdate::default().is_empty());
    }
}
