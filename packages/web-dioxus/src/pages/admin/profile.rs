//! Admin profile and account deletion

use academy_core::models::ProfileUpdate;
use academy_core::{Notifications, ValidationErrors};
use dioxus::prelude::*;

use crate::auth::use_session;
use crate::components::{ConfirmDialog, SkeletonRows, Toasts};
use crate::routes::Route;
use crate::server_fns::{delete_account, error_message, get_profile, update_profile};

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500";

#[component]
pub fn AdminProfile() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    let mut loaded = use_signal(|| false);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut errors = use_signal(ValidationErrors::new);
    let mut notifications = use_signal(Notifications::new);
    let mut is_saving = use_signal(|| false);
    let mut confirm_delete = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            match get_profile().await {
                Ok(profile) => {
                    name.set(profile.name);
                    email.set(profile.email);
                    loaded.set(true);
                }
                Err(err) => {
                    notifications
                        .write()
                        .error(format!("Failed to load profile: {}", error_message(&err)));
                    session.refresh().await;
                }
            }
        });
    });

    let handle_save = move |_| {
        if is_saving() {
            return;
        }
        let update = match ProfileUpdate::from_form(&name(), &email(), &password(), &confirm()) {
            Ok(update) => update,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(ValidationErrors::new());

        spawn(async move {
            is_saving.set(true);
            match update_profile(update).await {
                Ok(()) => {
                    password.set(String::new());
                    confirm.set(String::new());
                    notifications.write().success("Profile updated successfully");
                    session.refresh().await;
                }
                Err(err) => {
                    notifications
                        .write()
                        .error(format!("Failed to update profile: {}", error_message(&err)));
                    session.refresh().await;
                }
            }
            is_saving.set(false);
        });
    };

    let handle_delete = move |_| {
        spawn(async move {
            is_deleting.set(true);
            match delete_account().await {
                Ok(()) => {
                    tracing::info!("admin account deleted");
                    session.sign_out().await;
                    navigator.push(Route::Home {});
                }
                Err(err) => {
                    confirm_delete.set(false);
                    notifications
                        .write()
                        .error(format!("Failed to delete account: {}", error_message(&err)));
                    session.refresh().await;
                }
            }
            is_deleting.set(false);
        });
    };

    let field_error = move |key: &str| errors.read().get(key).map(str::to_string);

    rsx! {
        div {
            class: "max-w-2xl",
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Profile" }

            if !loaded() {
                SkeletonRows { columns: 2, rows: 4 }
            } else {
                form {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                    onsubmit: handle_save,

                    ProfileField {
                        id: "name",
                        label: "Name",
                        value: name(),
                        error: field_error("name"),
                        on_input: move |v| name.set(v),
                    }
                    ProfileField {
                        id: "email",
                        label: "Email",
                        input_type: "email",
                        value: email(),
                        error: field_error("email"),
                        on_input: move |v| email.set(v),
                    }
                    ProfileField {
                        id: "password",
                        label: "New password",
                        input_type: "password",
                        hint: "Leave blank to keep the current password",
                        value: password(),
                        error: field_error("password"),
                        on_input: move |v| password.set(v),
                    }
                    ProfileField {
                        id: "confirm",
                        label: "Confirm new password",
                        input_type: "password",
                        value: confirm(),
                        error: field_error("confirm"),
                        on_input: move |v| confirm.set(v),
                    }

                    div {
                        class: "flex justify-end mt-6",
                        button {
                            r#type: "submit",
                            class: "px-4 py-2 text-sm rounded-md bg-emerald-600 text-white hover:bg-emerald-700 disabled:opacity-50",
                            disabled: is_saving(),
                            if is_saving() { "Saving..." } else { "Save Profile" }
                        }
                    }
                }

                div {
                    class: "mt-8 bg-white rounded-lg shadow-sm border border-red-200 p-6",
                    h2 { class: "text-lg font-semibold text-red-700 mb-2", "Delete account" }
                    p {
                        class: "text-sm text-gray-600 mb-4",
                        "Removes your admin account. You will be signed out immediately."
                    }
                    button {
                        class: "px-4 py-2 text-sm rounded-md bg-red-600 text-white hover:bg-red-700",
                        onclick: move |_| confirm_delete.set(true),
                        "Delete Account"
                    }
                }
            }

            if confirm_delete() {
                ConfirmDialog {
                    title: "Delete your account?",
                    message: "This cannot be undone.",
                    confirm_label: "Delete Account",
                    busy: is_deleting(),
                    on_confirm: handle_delete,
                    on_cancel: move |_| confirm_delete.set(false),
                }
            }

            Toasts {
                notifications: notifications.read().items().to_vec(),
                on_dismiss: move |id| notifications.write().dismiss(id),
            }
        }
    }
}

#[component]
fn ProfileField(
    id: &'static str,
    label: &'static str,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] hint: Option<&'static str>,
    value: String,
    error: Option<String>,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "mb-4",
            label { r#for: id, class: "block text-sm font-medium text-gray-700 mb-1", "{label}" }
            input {
                id,
                r#type: input_type,
                class: INPUT_CLASS,
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
            }
            if let Some(hint) = hint {
                p { class: "mt-1 text-xs text-gray-500", "{hint}" }
            }
            if let Some(message) = error {
                p { class: "mt-1 text-xs text-red-600", "{message}" }
            }
        }
    }
}
