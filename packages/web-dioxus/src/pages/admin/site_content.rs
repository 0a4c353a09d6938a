//! Site content editor
//!
//! Site content is a single record: contact details shown in the footer and
//! the copy on the landing and about pages. There is no list, only a form.

use academy_core::manager::EditBuffer;
use academy_core::models::SiteContent;
use academy_core::{AdminResource, Notifications};
use dioxus::prelude::*;

use crate::auth::use_session;
use crate::components::{FieldInput, SkeletonRows, Toasts};
use crate::server_fns::{error_message, get_site_content, save_site_content};

#[component]
pub fn AdminSiteContent() -> Element {
    let session = use_session();
    let mut buffer = use_signal(|| None::<EditBuffer<SiteContent>>);
    let mut notifications = use_signal(Notifications::new);
    let mut is_saving = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            match get_site_content().await {
                Ok(content) => buffer.set(Some(EditBuffer::new(content.unwrap_or_default()))),
                Err(err) => {
                    notifications
                        .write()
                        .error(format!("Failed to fetch site content: {}", error_message(&err)));
                    session.refresh().await;
                }
            }
        });
    });

    let handle_save = move |_| {
        if is_saving() {
            return;
        }
        let Some(content) = buffer.write().as_mut().and_then(EditBuffer::check) else {
            notifications.write().error("Please correct the highlighted fields");
            return;
        };

        spawn(async move {
            is_saving.set(true);
            match save_site_content(content.clone()).await {
                Ok(()) => {
                    buffer.set(Some(EditBuffer::new(content)));
                    notifications.write().success("Site content saved successfully");
                }
                Err(err) => {
                    notifications
                        .write()
                        .error(format!("Failed to save site content: {}", error_message(&err)));
                    session.refresh().await;
                }
            }
            is_saving.set(false);
        });
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Site Content" }

            match &*buffer.read() {
                None => rsx! { SkeletonRows { columns: 2, rows: 6 } },
                Some(editor) => rsx! {
                    form {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 max-w-2xl",
                        onsubmit: handle_save,
                        for field in SiteContent::fields() {
                            {
                                let key = field.key;
                                rsx! {
                                    FieldInput {
                                        key: "{key}",
                                        spec: *field,
                                        value: editor.value(key),
                                        error: editor.errors().get(key).map(str::to_string),
                                        disabled: is_saving(),
                                        on_change: move |value| {
                                            if let Some(editor) = buffer.write().as_mut() {
                                                editor.set(key, value);
                                            }
                                        },
                                    }
                                }
                            }
                        }
                        div {
                            class: "flex justify-end mt-6",
                            button {
                                r#type: "submit",
                                class: "px-4 py-2 text-sm rounded-md bg-emerald-600 text-white hover:bg-emerald-700 disabled:opacity-50",
                                disabled: is_saving(),
                                if is_saving() { "Saving..." } else { "Save Changes" }
                            }
                        }
                    }
                },
            }

            Toasts {
                notifications: notifications.read().items().to_vec(),
                on_dismiss: move |id| notifications.write().dismiss(id),
            }
        }
    }
}
