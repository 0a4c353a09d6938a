//! Registration page
//!
//! `/register?package=<id>` opens the form with that package chosen, as long
//! as it is one of the packages currently on offer.

use academy_core::models::Package;
use academy_core::registration::{preselect_package, RegistrationForm, GENDERS};
use academy_core::{Notifications, PublicData, ValidationErrors};
use dioxus::prelude::*;

use super::sections::PageHeader;
use crate::components::{SkeletonRows, Toasts};
use crate::server_fns::{error_message, get_packages, submit_registration};

const INPUT_CLASS: &str = "w-full px-3 py-2 border rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500";

#[component]
pub fn Register(package: String) -> Element {
    rsx! {
        PageHeader {
            title: "Register for a Free Trial",
            subtitle: "Tell us a little about the student and we will arrange a first class.",
        }
        div {
            class: "max-w-2xl mx-auto px-4 sm:px-6 lg:px-8 py-12",
            SuspenseBoundary {
                fallback: |_| rsx! { SkeletonRows { columns: 2, rows: 6 } },
                RegistrationPanel { package }
            }
        }
    }
}

#[component]
fn RegistrationPanel(package: String) -> Element {
    let packages = use_server_future(get_packages)?;
    let packages: Vec<Package> = match &*packages.read() {
        Some(Ok(PublicData::Loaded(items))) => items.clone(),
        _ => Vec::new(),
    };

    let mut form = use_signal({
        let packages = packages.clone();
        let package = package.clone();
        move || RegistrationForm::with_package(preselect_package(Some(&package), &packages))
    });
    let mut errors = use_signal(ValidationErrors::new);
    let mut notifications = use_signal(Notifications::new);
    let mut is_submitting = use_signal(|| false);

    // Follow the query when another package link is clicked on this page
    let on_offer = packages.clone();
    use_effect(use_reactive!(|package| {
        if let Some(id) = preselect_package(Some(&package), &on_offer) {
            form.write().package_id = Some(id);
        }
    }));

    let on_offer = packages.clone();
    let handle_submit = move |_| {
        if is_submitting() {
            return;
        }
        let current = form();
        if let Err(invalid) = current.validate(&on_offer) {
            errors.set(invalid);
            return;
        }
        errors.set(ValidationErrors::new());

        spawn(async move {
            is_submitting.set(true);
            match submit_registration(current).await {
                Ok(()) => {
                    form.set(RegistrationForm::default());
                    notifications.write().success(
                        "Thank you! Your application has been submitted. We will contact you shortly.",
                    );
                }
                Err(err) => {
                    notifications
                        .write()
                        .error(format!("Failed to submit application: {}", error_message(&err)));
                }
            }
            is_submitting.set(false);
        });
    };

    let error_for = move |key: &str| errors.read().get(key).map(str::to_string);
    let input_class = move |key: &str| {
        let border = if errors.read().get(key).is_some() {
            "border-red-400"
        } else {
            "border-gray-300"
        };
        format!("{INPUT_CLASS} {border}")
    };
    let disabled = is_submitting();
    let selected_package = form.read().package_id.map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        form {
            class: "bg-white rounded-xl shadow-sm border border-gray-100 p-8 space-y-4",
            onsubmit: handle_submit,

            RegisterField {
                label: "Full name",
                error: error_for("name"),
                input {
                    class: input_class("name"),
                    value: "{form.read().name}",
                    disabled,
                    oninput: move |e| form.write().name = e.value(),
                }
            }
            div {
                class: "grid gap-4 sm:grid-cols-2",
                RegisterField {
                    label: "Phone / WhatsApp",
                    error: error_for("phone"),
                    input {
                        r#type: "tel",
                        class: input_class("phone"),
                        value: "{form.read().phone}",
                        disabled,
                        oninput: move |e| form.write().phone = e.value(),
                    }
                }
                RegisterField {
                    label: "Email (optional)",
                    error: error_for("email"),
                    input {
                        r#type: "email",
                        class: input_class("email"),
                        value: "{form.read().email}",
                        disabled,
                        oninput: move |e| form.write().email = e.value(),
                    }
                }
            }
            div {
                class: "grid gap-4 sm:grid-cols-3",
                RegisterField {
                    label: "Age",
                    error: error_for("age"),
                    input {
                        inputmode: "numeric",
                        class: input_class("age"),
                        value: "{form.read().age}",
                        disabled,
                        oninput: move |e| form.write().age = e.value(),
                    }
                }
                RegisterField {
                    label: "Gender",
                    error: error_for("gender"),
                    select {
                        class: input_class("gender"),
                        value: "{form.read().gender}",
                        disabled,
                        onchange: move |e| form.write().gender = e.value(),
                        option { value: "", "Select" }
                        for gender in GENDERS {
                            option { value: gender, selected: form.read().gender == gender, "{gender}" }
                        }
                    }
                }
                RegisterField {
                    label: "Country",
                    error: error_for("country"),
                    input {
                        class: input_class("country"),
                        value: "{form.read().country}",
                        disabled,
                        oninput: move |e| form.write().country = e.value(),
                    }
                }
            }
            RegisterField {
                label: "Package",
                error: error_for("package_id"),
                if packages.is_empty() {
                    p {
                        class: "text-sm text-gray-500",
                        "Packages could not be loaded. Please try again later or contact us."
                    }
                } else {
                    select {
                        class: input_class("package_id"),
                        value: "{selected_package}",
                        disabled,
                        onchange: move |e| form.write().package_id = e.value().parse().ok(),
                        option { value: "", "Choose a package" }
                        for package in packages.iter() {
                            option {
                                value: "{package.id.unwrap_or_default()}",
                                selected: package.id.is_some() && package.id == form.read().package_id,
                                "{package.name} ({package.price_label()})"
                            }
                        }
                    }
                }
            }
            RegisterField {
                label: "Notes (optional)",
                error: None,
                textarea {
                    class: "{INPUT_CLASS} border-gray-300",
                    rows: "3",
                    value: "{form.read().notes}",
                    disabled,
                    oninput: move |e| form.write().notes = e.value(),
                }
            }

            button {
                r#type: "submit",
                class: "w-full px-4 py-3 rounded-md bg-emerald-600 text-white font-medium hover:bg-emerald-700 disabled:opacity-50",
                disabled,
                if disabled { "Submitting..." } else { "Submit Application" }
            }
        }

        Toasts {
            notifications: notifications.read().items().to_vec(),
            on_dismiss: move |id| notifications.write().dismiss(id),
        }
    }
}

#[component]
fn RegisterField(label: &'static str, error: Option<String>, children: Element) -> Element {
    rsx! {
        label {
            class: "block",
            span { class: "block text-sm font-medium text-gray-700 mb-1", "{label}" }
            {children}
            if let Some(message) = error {
                span { class: "block mt-1 text-xs text-red-600", "{message}" }
            }
        }
    }
}
