//! Server-side state shared by every server function
//!
//! Holds the loaded configuration, the public read cache and the session
//! guard, and turns a visitor's session into an authenticated API client.

use std::future::Future;
use std::sync::OnceLock;

use academy_core::api::{ApiClient, PublicCache};
use academy_core::public::PublicSite;
use academy_core::session::{CredentialStore, SessionGuard, StoreError};
use academy_core::{ApiError, Config};
use async_trait::async_trait;
use dioxus::prelude::ServerFnError;
use tower_sessions::Session;

const TOKEN_KEY: &str = "academy.token";

static BACKEND: OnceLock<Backend> = OnceLock::new();

pub struct Backend {
    config: Config,
    cache: PublicCache,
    guard: SessionGuard,
}

/// Install the configuration. Later calls are ignored.
pub fn init(config: Config) {
    let _ = BACKEND.set(Backend::new(config));
}

pub fn backend() -> &'static Backend {
    BACKEND.get_or_init(|| {
        let config = Config::from_env().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "invalid configuration, using defaults");
            Config::default()
        });
        Backend::new(config)
    })
}

impl Backend {
    fn new(config: Config) -> Self {
        Self {
            cache: PublicCache::new(config.public_cache_ttl),
            guard: SessionGuard::new(config.admin_role.clone()),
            config,
        }
    }

    pub fn guard(&self) -> &SessionGuard {
        &self.guard
    }

    /// Anonymous client sharing the public cache
    pub fn api(&self) -> Result<ApiClient, ServerFnError> {
        ApiClient::from_config(&self.config)
            .map(|api| api.with_cache(self.cache.clone()))
            .map_err(to_server_error)
    }

    pub fn public_site(&self) -> Result<PublicSite, ServerFnError> {
        Ok(PublicSite::new(self.api()?))
    }
}

/// The visitor's login token, kept in their server-side session.
#[derive(Clone)]
pub struct SessionCredentialStore {
    session: Session,
}

impl SessionCredentialStore {
    pub async fn current() -> Result<Self, ServerFnError> {
        let session: Session = dioxus::fullstack::extract()
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))?;
        Ok(Self { session })
    }
}

#[async_trait]
impl CredentialStore for SessionCredentialStore {
    async fn load(&self) -> Result<Option<String>, StoreError> {
        self.session
            .get::<String>(TOKEN_KEY)
            .await
            .map_err(|e| StoreError(e.to_string()))
    }

    async fn save(&self, token: &str) -> Result<(), StoreError> {
        self.session
            .insert(TOKEN_KEY, token)
            .await
            .map_err(|e| StoreError(e.to_string()))
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.session
            .remove::<String>(TOKEN_KEY)
            .await
            .map(|_| ())
            .map_err(|e| StoreError(e.to_string()))
    }
}

pub fn to_server_error(err: impl std::fmt::Display) -> ServerFnError {
    ServerFnError::new(err.to_string())
}

/// Run an admin call with the visitor's token. A 401 from the backend
/// ends the session.
pub async fn admin_call<T, F, Fut>(call: F) -> Result<T, ServerFnError>
where
    F: FnOnce(ApiClient) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let backend = backend();
    let store = SessionCredentialStore::current().await?;
    let session = backend
        .guard()
        .authorize(&store)
        .await
        .map_err(to_server_error)?;

    let api = backend.api()?.with_token(session.token());
    match call(api).await {
        Err(err) if err.is_auth_failure() => {
            tracing::info!("backend rejected admin token, ending session");
            backend.guard().sign_out(&store).await;
            Err(to_server_error(err))
        }
        other => other.map_err(to_server_error),
    }
}
