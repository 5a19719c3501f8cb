use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::models::normalize::text;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Logged-in user as returned by the backend (every users column except the
/// password hash)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct User {
    #[serde(default, deserialize_with = "text")]
    pub username: String,
    #[serde(default, deserialize_with = "text")]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Name written into `marked_by` and shown in the header
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.username
        } else {
            &self.name
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_keeps_unknown_columns() {
        let user: User = serde_json::from_value(json!({
            "user_id": 1,
            "username": "maestro",
            "name": "Kim",
            "role": "admin"
        }))
        .unwrap();
        assert_eq!(user.display_name(), "Kim");
        assert_eq!(user.extra.get("role"), Some(&json!("admin")));
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let user = User { username: "maestro".into(), ..User::default() };
        assert_eq!(user.display_name(), "maestro");
    }
}
