use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Role granted to a storefront user.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

impl From<UserRole> for String {
    fn from(value: UserRole) -> Self {
        match value {
            UserRole::Admin => "admin".to_string(),
            UserRole::User => "user".to_string(),
        }
    }
}

impl From<&str> for UserRole {
    fn from(value: &str) -> Self {
        match value {
            "admin" => UserRole::Admin,
            _ => UserRole::User,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    /// Argon2 PHC string, `None` for accounts managed by an external provider.
    pub password_hash: Option<String>,
    pub role: UserRole,
}

impl NewUser {
    #[must_use]
    pub fn new(name: String, email: String, role: UserRole) -> Self {
        Self {
            name,
            email: email.to_lowercase(),
            password_hash: None,
            role,
        }
    }

    #[must_use]
    pub fn with_password_hash(mut self, password_hash: String) -> Self {
        self.password_hash = Some(password_hash);
        self
    }
}
