use serde::{Deserialize, Serialize};

use super::nullable;
use crate::error::ValidationErrors;

/// The signed-in administrator's account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,
}

/// Body of `PUT` on the profile endpoint. The password is only sent when
/// the admin typed a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProfileUpdate {
    /// Build an update from form input. `confirm` must match a non-empty
    /// new password.
    pub fn from_form(
        name: &str,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if name.trim().is_empty() {
            errors.add("name", "Name is required");
        }
        if !email.contains('@') {
            errors.add("email", "A valid email is required");
        }
        let password = if password.is_empty() {
            None
        } else if password.len() < 8 {
            errors.add("password", "Password must be at least 8 characters");
            None
        } else if password != confirm {
            errors.add("confirm", "Passwords do not match");
            None
        } else {
            Some(password.to_string())
        };

        errors.into_result()?;
        Ok(Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !email.contains('@') {
            errors.add("email", "Please enter your email address");
        }
        if password.is_empty() {
            errors.add("password", "Please enter your password");
        }
        errors.into_result()?;
        Ok(Self {
            email: email.trim().to_string(),
            password: password.to_string(),
        })
    }
}
