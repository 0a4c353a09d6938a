//! Admin login page

use academy_core::models::LoginRequest;
use academy_core::session::Access;
use dioxus::prelude::*;

use crate::auth::{sign_in, use_session};
use crate::components::Redirect;
use crate::routes::Route;
use crate::server_fns::error_message;

/// Admin login page
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    if session.is_admin() {
        return rsx! {
            Redirect { to: Route::AdminDashboard {} }
        };
    }

    let handle_login = move |_| {
        // Same checks the server runs, so obvious mistakes skip the round trip
        if let Err(errors) = LoginRequest::new(&email(), &password()) {
            let message = errors.iter().map(|(_, msg)| msg).next().unwrap_or_default();
            error.set(Some(message.to_string()));
            return;
        }

        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match sign_in(email(), password()).await {
                Ok(Access::Admin(user)) => {
                    session.set(Access::Admin(user));
                    navigator.push(Route::AdminDashboard {});
                }
                Ok(access) => {
                    session.set(access);
                    error.set(Some("This account does not have admin access".to_string()));
                }
                Err(err) => error.set(Some(error_message(&err))),
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center px-4",

            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",

                div {
                    class: "mb-6 text-center",
                    h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Admin Login" }
                    p { class: "text-gray-600 text-sm", "Noor Academy" }
                }

                if let Some(err) = error() {
                    div {
                        class: "mb-4 p-3 bg-red-50 border border-red-200 text-red-800 rounded text-sm",
                        role: "alert",
                        "{err}"
                    }
                }

                form {
                    onsubmit: handle_login,
                    div {
                        class: "mb-4",
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            r#for: "email",
                            "Email"
                        }
                        input {
                            id: "email",
                            r#type: "email",
                            autocomplete: "username",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                            placeholder: "admin@example.com",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500",
                            disabled: is_pending()
                        }
                    }
                    div {
                        class: "mb-6",
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            r#for: "password",
                            "Password"
                        }
                        input {
                            id: "password",
                            r#type: "password",
                            autocomplete: "current-password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500",
                            disabled: is_pending()
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "w-full bg-emerald-700 text-white py-2 px-4 rounded-md hover:bg-emerald-800 focus:outline-none focus:ring-2 focus:ring-emerald-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: is_pending(),
                        if is_pending() { "Signing in..." } else { "Sign In" }
                    }
                }

                div {
                    class: "mt-6 text-center",
                    Link { to: Route::Home {}, class: "text-sm text-gray-500 hover:text-gray-800", "Back to site" }
                }
            }
        }
    }
}
