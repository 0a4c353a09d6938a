use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Role claim names the backend may use.
const ROLE_CLAIMS: [&str; 3] = [
    "role",
    "roles",
    "http://schemas.microsoft.com/ws/2008/06/identity/claims/role",
];

const EMAIL_CLAIMS: [&str; 2] = [
    "email",
    "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress",
];

const NAME_CLAIMS: [&str; 3] = [
    "name",
    "unique_name",
    "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name",
];

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ClaimsError {
    #[error("Invalid JWT format")]
    Malformed,

    #[error("Failed to decode JWT: {0}")]
    Encoding(String),

    #[error("Failed to parse JWT claims: {0}")]
    Payload(String),

    #[error("JWT has no expiry")]
    MissingExpiry,
}

/// The claims the site cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub roles: Vec<String>,
    /// Unix seconds
    pub expires_at: i64,
    pub email: Option<String>,
    pub name: Option<String>,
}

impl Claims {
    /// Read the payload segment of a JWT without checking its signature.
    pub fn decode(token: &str) -> Result<Self, ClaimsError> {
        let parts: Vec<&str> = token.trim().split('.').collect();
        if parts.len() != 3 || parts[1].is_empty() {
            return Err(ClaimsError::Malformed);
        }

        // Some issuers pad the segments; the URL-safe alphabet is mandatory.
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(parts[1].trim_end_matches('='))
            .map_err(|e| ClaimsError::Encoding(e.to_string()))?;

        let claims: Map<String, Value> = serde_json::from_slice(&payload)
            .map_err(|e| ClaimsError::Payload(e.to_string()))?;

        let expires_at = match claims.get("exp") {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .ok_or(ClaimsError::MissingExpiry)?,
            Some(Value::String(s)) => s.parse().map_err(|_| ClaimsError::MissingExpiry)?,
            _ => return Err(ClaimsError::MissingExpiry),
        };

        let roles = ROLE_CLAIMS
            .iter()
            .filter_map(|key| claims.get(*key))
            .flat_map(|value| match value {
                Value::String(role) => vec![role.clone()],
                Value::Array(items) => items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
                _ => Vec::new(),
            })
            .collect();

        Ok(Self {
            roles,
            expires_at,
            email: first_string(&claims, &EMAIL_CLAIMS),
            name: first_string(&claims, &NAME_CLAIMS),
        })
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.eq_ignore_ascii_case(role))
    }

    /// Expiry is inclusive: a token whose `exp` equals `now` is expired.
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at <= now
    }
}

fn first_string(claims: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| claims.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build an unsigned token around `payload`.
    pub(crate) fn token(payload: Value) -> String {
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        format!(
            "{}.{}.{}",
            engine.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            engine.encode(payload.to_string()),
            engine.encode("signature")
        )
    }

    #[test]
    fn test_decodes_role_and_expiry() {
        let claims = Claims::decode(&token(serde_json::json!({
            "email": "admin@academy.com",
            "role": "Admin",
            "exp": 1_900_000_000
        })))
        .unwrap();

        assert_eq!(claims.roles, vec!["Admin"]);
        assert_eq!(claims.expires_at, 1_900_000_000);
        assert_eq!(claims.email.as_deref(), Some("admin@academy.com"));
        assert!(claims.has_role("admin"));
    }

    #[test]
    fn test_reads_uri_role_claim_array() {
        let claims = Claims::decode(&token(serde_json::json!({
            "http://schemas.microsoft.com/ws/2008/06/identity/claims/role": ["Editor", "Admin"],
            "exp": "1900000000"
        })))
        .unwrap();

        assert!(claims.has_role("Admin"));
        assert!(claims.has_role("Editor"));
        assert_eq!(claims.expires_at, 1_900_000_000);
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        assert_eq!(Claims::decode("not-a-jwt"), Err(ClaimsError::Malformed));
        assert!(matches!(
            Claims::decode("a.!!!.c"),
            Err(ClaimsError::Encoding(_))
        ));
        assert!(matches!(
            Claims::decode(&token(serde_json::json!({ "role": "Admin" }))),
            Err(ClaimsError::MissingExpiry)
        ));
    }

    #[test]
    fn test_expiry_is_inclusive() {
        let claims = Claims {
            roles: Vec::new(),
            expires_at: 100,
            email: None,
            name: None,
        };
        assert!(claims.is_expired(100));
        assert!(!claims.is_expired(99));
    }
}
