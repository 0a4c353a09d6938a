use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{Claims, CredentialStore};
use crate::error::ApiError;

/// Who is signed in, as far as the UI needs to know. Never carries the
/// token itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: Option<String>,
    pub name: Option<String>,
    pub roles: Vec<String>,
    /// Unix seconds
    pub expires_at: i64,
}

impl SessionUser {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Administrator")
    }
}

impl From<&Claims> for SessionUser {
    fn from(claims: &Claims) -> Self {
        Self {
            email: claims.email.clone(),
            name: claims.name.clone(),
            roles: claims.roles.clone(),
            expires_at: claims.expires_at,
        }
    }
}

/// A valid admin credential.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    token: String,
    user: SessionUser,
}

impl Session {
    /// Bearer token for backend calls
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user(&self) -> &SessionUser {
        &self.user
    }
}

/// What to do with a navigation into `/admin`.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    Render(Session),
    RedirectLogin,
    RedirectHome,
}

/// [`GuardDecision`] without the token, safe to send to the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Access {
    Anonymous,
    NotAdmin,
    Admin(SessionUser),
}

impl GuardDecision {
    pub fn access(&self) -> Access {
        match self {
            GuardDecision::Render(session) => Access::Admin(session.user.clone()),
            GuardDecision::RedirectLogin => Access::Anonymous,
            GuardDecision::RedirectHome => Access::NotAdmin,
        }
    }
}

/// Outcome of inspecting a credential, before any store side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub decision: GuardDecision,
    /// Undecodable and expired credentials are dropped
    pub clear_credential: bool,
}

/// Gate for the admin routes.
#[derive(Debug, Clone)]
pub struct SessionGuard {
    admin_role: String,
}

impl Default for SessionGuard {
    fn default() -> Self {
        Self::new("Admin")
    }
}

impl SessionGuard {
    pub fn new(admin_role: impl Into<String>) -> Self {
        Self {
            admin_role: admin_role.into(),
        }
    }

    /// Decide on a credential at time `now` (unix seconds).
    pub fn evaluate(&self, token: Option<&str>, now: i64) -> Verdict {
        let Some(token) = token else {
            return Verdict {
                decision: GuardDecision::RedirectLogin,
                clear_credential: false,
            };
        };
        // A stored blank value is junk, same as an unreadable token
        if token.trim().is_empty() {
            debug!("stored credential is blank");
            return Verdict {
                decision: GuardDecision::RedirectLogin,
                clear_credential: true,
            };
        }

        let claims = match Claims::decode(token) {
            Ok(claims) => claims,
            Err(err) => {
                debug!(error = %err, "stored credential is not a readable JWT");
                return Verdict {
                    decision: GuardDecision::RedirectLogin,
                    clear_credential: true,
                };
            }
        };

        if claims.is_expired(now) {
            debug!(expires_at = claims.expires_at, "stored credential expired");
            return Verdict {
                decision: GuardDecision::RedirectLogin,
                clear_credential: true,
            };
        }

        if !claims.has_role(&self.admin_role) {
            return Verdict {
                decision: GuardDecision::RedirectHome,
                clear_credential: false,
            };
        }

        Verdict {
            decision: GuardDecision::Render(Session {
                token: token.trim().to_string(),
                user: SessionUser::from(&claims),
            }),
            clear_credential: false,
        }
    }

    pub async fn check<S>(&self, store: &S) -> GuardDecision
    where
        S: CredentialStore + ?Sized,
    {
        self.check_at(store, Utc::now().timestamp()).await
    }

    /// Read the stored credential, drop it if it is unusable, and decide.
    /// Store failures count as "not signed in".
    pub async fn check_at<S>(&self, store: &S, now: i64) -> GuardDecision
    where
        S: CredentialStore + ?Sized,
    {
        let token = match store.load().await {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "could not read credential");
                return GuardDecision::RedirectLogin;
            }
        };

        let verdict = self.evaluate(token.as_deref(), now);
        if verdict.clear_credential {
            if let Err(err) = store.clear().await {
                warn!(error = %err, "could not clear credential");
            }
        }
        verdict.decision
    }

    /// The session for an admin backend call, or the error the call would
    /// have produced.
    pub async fn authorize<S>(&self, store: &S) -> Result<Session, ApiError>
    where
        S: CredentialStore + ?Sized,
    {
        match self.check(store).await {
            GuardDecision::Render(session) => Ok(session),
            GuardDecision::RedirectLogin => Err(ApiError::Unauthorized),
            GuardDecision::RedirectHome => Err(ApiError::Forbidden),
        }
    }

    /// Store a freshly issued token and report what it grants.
    pub async fn sign_in<S>(&self, store: &S, token: &str) -> Result<Access, ApiError>
    where
        S: CredentialStore + ?Sized,
    {
        store
            .save(token)
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let access = self.check(store).await.access();
        if let Access::Admin(user) = &access {
            info!(user = user.display_name(), "admin signed in");
        }
        Ok(access)
    }

    pub async fn sign_out<S>(&self, store: &S)
    where
        S: CredentialStore + ?Sized,
    {
        if let Err(err) = store.clear().await {
            warn!(error = %err, "could not clear credential");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::claims::tests::token;
    use crate::session::MemoryCredentialStore;
    use serde_json::json;

    const NOW: i64 = 1_700_000_000;

    fn admin_token(exp: i64) -> String {
        token(json!({ "role": "Admin", "email": "admin@academy.com", "exp": exp }))
    }

    #[test]
    fn test_valid_admin_renders() {
        let guard = SessionGuard::default();
        let token = admin_token(NOW + 3600);
        let verdict = guard.evaluate(Some(&token), NOW);

        assert!(!verdict.clear_credential);
        match verdict.decision {
            GuardDecision::Render(session) => {
                assert_eq!(session.token(), token);
                assert_eq!(session.user().display_name(), "admin@academy.com");
            }
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn test_every_other_case_redirects() {
        let guard = SessionGuard::default();
        let student = token(json!({ "role": "Student", "exp": NOW + 3600 }));
        let expired = admin_token(NOW - 1);

        let cases: [(Option<&str>, GuardDecision, bool); 6] = [
            (None, GuardDecision::RedirectLogin, false),
            (Some(""), GuardDecision::RedirectLogin, true),
            (Some("  \t"), GuardDecision::RedirectLogin, true),
            (Some("garbage"), GuardDecision::RedirectLogin, true),
            (Some(&expired), GuardDecision::RedirectLogin, true),
            (Some(&student), GuardDecision::RedirectHome, false),
        ];

        for (token, decision, clear) in cases {
            let verdict = guard.evaluate(token, NOW);
            assert_eq!(verdict.decision, decision, "token {token:?}");
            assert_eq!(verdict.clear_credential, clear, "token {token:?}");
        }
    }

    #[tokio::test]
    async fn test_expired_credential_is_cleared() {
        let guard = SessionGuard::default();
        let store = MemoryCredentialStore::with_token(admin_token(NOW - 60));

        let decision = guard.check_at(&store, NOW).await;

        assert_eq!(decision, GuardDecision::RedirectLogin);
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_blank_credential_is_cleared() {
        let guard = SessionGuard::default();
        let store = MemoryCredentialStore::with_token("   ");

        assert_eq!(guard.check_at(&store, NOW).await, GuardDecision::RedirectLogin);
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_non_admin_keeps_credential() {
        let guard = SessionGuard::default();
        let student = token(json!({ "role": "Student", "exp": NOW + 60 }));
        let store = MemoryCredentialStore::with_token(student.clone());

        assert_eq!(guard.check_at(&store, NOW).await, GuardDecision::RedirectHome);
        assert_eq!(store.load().await.unwrap(), Some(student));
    }

    #[tokio::test]
    async fn test_authorize_maps_decisions_to_errors() {
        let guard = SessionGuard::default();
        let store = MemoryCredentialStore::new();
        assert_eq!(guard.authorize(&store).await, Err(ApiError::Unauthorized));

        store
            .save(&token(json!({ "role": "Student", "exp": i64::MAX / 2 })))
            .await
            .unwrap();
        assert_eq!(guard.authorize(&store).await, Err(ApiError::Forbidden));
    }

    #[tokio::test]
    async fn test_sign_in_and_out() {
        let guard = SessionGuard::new("Admin");
        let store = MemoryCredentialStore::new();
        let fresh = admin_token(Utc::now().timestamp() + 3600);

        let access = guard.sign_in(&store, &fresh).await.unwrap();
        assert!(matches!(access, Access::Admin(_)));
        assert!(guard.authorize(&store).await.is_ok());

        guard.sign_out(&store).await;
        assert_eq!(store.load().await.unwrap(), None);
        assert_eq!(guard.check(&store).await.access(), Access::Anonymous);
    }
}
