//! Server functions for the admin session
//!
//! The token never leaves the server: it is stored in the visitor's
//! session and the browser only ever sees the resulting [`Access`].

use academy_core::session::Access;
use dioxus::prelude::*;

/// What the stored credential currently grants. Unusable credentials are
/// dropped as a side effect.
#[server]
pub async fn get_session() -> Result<Access, ServerFnError> {
    use crate::backend::{backend, SessionCredentialStore};

    let store = SessionCredentialStore::current().await?;
    Ok(backend().guard().check(&store).await.access())
}

/// Log in with email and password and keep the issued token
#[server]
pub async fn sign_in(email: String, password: String) -> Result<Access, ServerFnError> {
    use crate::backend::{backend, to_server_error, SessionCredentialStore};
    use academy_core::account::AccountClient;
    use academy_core::models::LoginRequest;

    let request = LoginRequest::new(&email, &password).map_err(to_server_error)?;
    let backend = backend();
    let token = AccountClient::new(backend.api()?)
        .login(&request)
        .await
        .map_err(|err| match err {
            academy_core::ApiError::Unauthorized => ServerFnError::new("Invalid email or password"),
            other => to_server_error(other),
        })?;

    let store = SessionCredentialStore::current().await?;
    backend
        .guard()
        .sign_in(&store, &token)
        .await
        .map_err(to_server_error)
}

/// Logout - forget the stored token
#[server]
pub async fn clear_session() -> Result<(), ServerFnError> {
    use crate::backend::{backend, SessionCredentialStore};

    let store = SessionCredentialStore::current().await?;
    backend().guard().sign_out(&store).await;
    tracing::info!("admin signed out");
    Ok(())
}
