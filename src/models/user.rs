use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{timestamp, Role};

/// The user object stored alongside the token after login or registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

/// Account as listed in the administration dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<NaiveDateTime>,
}

fn full_name(first: &str, last: &str, email: &str) -> String {
    let name = format!("{} {}", first.trim(), last.trim());
    let name = name.trim();

    if name.is_empty() {
        email.to_string()
    } else {
        name.to_string()
    }
}

impl SessionUser {
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name, &self.email)
    }

    pub fn initials(&self) -> String {
        let initials: String = [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|part| part.trim().chars().next())
            .flat_map(char::to_uppercase)
            .collect();

        if initials.is_empty() {
            self.email
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_default()
        } else {
            initials
        }
    }
}

impl User {
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name, &self.email)
    }
}
