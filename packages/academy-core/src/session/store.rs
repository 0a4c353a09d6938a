use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, thiserror::Error)]
#[error("Credential store error: {0}")]
pub struct StoreError(pub String);

/// Where the login token is kept between requests.
///
/// The web app backs this with the visitor's server-side session; tests use
/// [`MemoryCredentialStore`]. Feature code reads it only through the
/// session guard.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn load(&self) -> Result<Option<String>, StoreError>;
    async fn save(&self, token: &str) -> Result<(), StoreError>;
    async fn clear(&self) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    fn slot(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, StoreError> {
        self.token
            .lock()
            .map_err(|_| StoreError("credential lock poisoned".to_string()))
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.slot()?.clone())
    }

    async fn save(&self, token: &str) -> Result<(), StoreError> {
        *self.slot()? = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *self.slot()? = None;
        Ok(())
    }
}
