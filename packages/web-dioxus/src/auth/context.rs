//! Session context provider

use academy_core::session::{Access, SessionUser};
use dioxus::prelude::*;

use super::server_fns::{clear_session, get_session};

/// Session state shared with the entire app. Feature components read it
/// through [`use_session`] and never see the token.
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// `None` until the first check has answered
    access: Signal<Option<Access>>,
}

impl SessionContext {
    pub fn is_loading(&self) -> bool {
        self.access.read().is_none()
    }

    pub fn access(&self) -> Option<Access> {
        self.access.read().clone()
    }

    pub fn user(&self) -> Option<SessionUser> {
        match self.access.read().as_ref() {
            Some(Access::Admin(user)) => Some(user.clone()),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some()
    }

    pub fn set(&mut self, access: Access) {
        self.access.set(Some(access));
    }

    /// Ask the server again. Called after login and after any admin call
    /// fails, so an expired session sends the user to the login page.
    pub async fn refresh(mut self) {
        match get_session().await {
            Ok(access) => self.access.set(Some(access)),
            Err(err) => {
                tracing::warn!(error = %err, "session check failed");
                self.access.set(Some(Access::Anonymous));
            }
        }
    }

    pub async fn sign_out(mut self) {
        if let Err(err) = clear_session().await {
            tracing::warn!(error = %err, "logout failed");
        }
        self.access.set(Some(Access::Anonymous));
    }
}

/// Session provider component that wraps the app
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let access = use_signal(|| None::<Access>);
    let session = use_context_provider(|| SessionContext { access });

    // Load initial session state
    use_effect(move || {
        spawn(async move {
            session.refresh().await;
        });
    });

    children
}

/// Hook to access the session context
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
