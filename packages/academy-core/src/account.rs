//! Admin sign-in and account self-service

use reqwest::Method;
use serde::Deserialize;
use tracing::info;

use crate::api::{endpoints, ApiClient};
use crate::error::{ApiError, Result};
use crate::models::{AdminProfile, LoginRequest, ProfileUpdate};

#[derive(Clone)]
pub struct AccountClient {
    api: ApiClient,
}

impl AccountClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Exchange credentials for a token. Does not store it.
    pub async fn login(&self, request: &LoginRequest) -> Result<String> {
        let body = self.api.post_public_text(endpoints::LOGIN, request).await?;
        let token = token_from_body(&body)?;
        info!(email = %request.email, "login accepted");
        Ok(token)
    }

    pub async fn profile(&self) -> Result<AdminProfile> {
        self.api.get(endpoints::PROFILE).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<()> {
        self.api
            .send_unit(Method::PUT, endpoints::PROFILE, Some(update))
            .await
    }

    pub async fn delete_account(&self) -> Result<()> {
        self.api
            .send_unit::<()>(Method::DELETE, endpoints::ACCOUNT, None)
            .await?;
        info!("admin account deleted");
        Ok(())
    }
}

/// The login endpoint answers with `{"token": ...}`, a JSON string, or the
/// bare token.
fn token_from_body(body: &str) -> Result<String> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LoginResponse {
        Bare(String),
        Wrapped {
            #[serde(alias = "Token", alias = "accessToken", alias = "access_token")]
            token: String,
        },
    }

    let token = match serde_json::from_str::<LoginResponse>(body) {
        Ok(LoginResponse::Bare(token)) | Ok(LoginResponse::Wrapped { token }) => token,
        Err(_) => body.trim().to_string(),
    };

    if token.is_empty() || token.starts_with('{') || token.contains(char::is_whitespace) {
        return Err(ApiError::Decode("login response did not contain a token".to_string()));
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_shapes() {
        assert_eq!(token_from_body(r#"{"token":"a.b.c"}"#).unwrap(), "a.b.c");
        assert_eq!(token_from_body(r#"{"accessToken":"a.b.c"}"#).unwrap(), "a.b.c");
        assert_eq!(token_from_body(r#""a.b.c""#).unwrap(), "a.b.c");
        assert_eq!(token_from_body("a.b.c\n").unwrap(), "a.b.c");
    }

    #[test]
    fn test_missing_token_is_decode_error() {
        assert!(matches!(
            token_from_body(r#"{"success":true}"#),
            Err(ApiError::Decode(_))
        ));
        assert!(token_from_body("").is_err());
    }
}
