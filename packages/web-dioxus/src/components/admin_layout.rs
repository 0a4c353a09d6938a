//! Admin layout wrapper with session guard

use academy_core::session::{Access, EntryCheck};
use dioxus::prelude::*;

use super::{AdminNav, LoadingSpinner, Redirect};
use crate::auth::use_session;
use crate::routes::Route;

/// Renders the admin area only for a valid admin session. The session is
/// checked again on every admin route entered.
#[component]
pub fn AdminLayout() -> Element {
    let session = use_session();
    let route = use_route::<Route>();
    let mut entry = use_signal(EntryCheck::<Route>::new);

    use_effect(use_reactive!(|route| {
        entry.write().begin(route.clone());
        spawn(async move {
            session.refresh().await;
            entry.write().finish(&route);
        });
    }));

    let user = match session.access() {
        None => return rsx! { AdminSpinner {} },
        Some(Access::Anonymous) => {
            return rsx! {
                Redirect { to: Route::Login {} }
            };
        }
        Some(Access::NotAdmin) => {
            return rsx! {
                Redirect { to: Route::Home {} }
            };
        }
        Some(Access::Admin(user)) => user,
    };

    if !entry.read().is_verified(&route) {
        return rsx! { AdminSpinner {} };
    }

    rsx! {
        div {
            class: "min-h-screen bg-gray-100",

            AdminNav { user_name: user.display_name().to_string() }

            main {
                class: "p-6 max-w-7xl mx-auto",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn AdminSpinner() -> Element {
    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gray-100",
            LoadingSpinner {}
        }
    }
}
