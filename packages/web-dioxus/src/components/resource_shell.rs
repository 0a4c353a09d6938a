//! The list + edit dialog + delete confirmation shell behind every admin
//! resource page.

use academy_core::resource::capitalize;
use academy_core::{AdminResource, ManagerState};
use dioxus::prelude::*;

use super::{ConfirmDialog, FieldInput, SkeletonRows, Toasts};
use crate::auth::use_session;
use crate::server_fns::{delete_record, error_message, list_records, save_record};

async fn fetch_all<R: AdminResource>() -> Result<Vec<R>, String> {
    let values = list_records(R::KIND)
        .await
        .map_err(|err| error_message(&err))?;

    values
        .into_iter()
        .map(|value| serde_json::from_value(value).map_err(|err| err.to_string()))
        .collect()
}

/// Render the manager for `R`. Call from a page component's body.
pub fn resource_manager<R: AdminResource>() -> Element {
    let session = use_session();
    let mut state = use_signal(ManagerState::<R>::new);

    let mut load = move || {
        let ticket = state.write().begin_load();
        spawn(async move {
            let result = fetch_all::<R>().await;
            let failed = result.is_err();
            state.write().finish_load(ticket, result);
            if failed {
                session.refresh().await;
            }
        });
    };

    use_effect(move || load());

    let save = move |_| {
        let Some((ticket, request)) = state.write().begin_save() else {
            return;
        };
        spawn(async move {
            let result = match serde_json::to_value(request.record()) {
                Ok(value) => save_record(R::KIND, value)
                    .await
                    .map_err(|err| error_message(&err)),
                Err(err) => Err(err.to_string()),
            };
            let failed = result.is_err();
            if state.write().finish_save(ticket, result) {
                load();
            }
            if failed {
                session.refresh().await;
            }
        });
    };

    let confirm_delete = move |_| {
        let Some(id) = state.write().begin_delete() else {
            return;
        };
        spawn(async move {
            let result = delete_record(R::KIND, id)
                .await
                .map_err(|err| error_message(&err));
            let failed = result.is_err();
            if state.write().finish_delete(id, result) {
                load();
            }
            if failed {
                session.refresh().await;
            }
        });
    };

    let current = state.read();
    let caps = R::CAPABILITIES;
    let title = R::KIND.label();
    let singular = capitalize(R::SINGULAR);
    let noun = R::SINGULAR;
    let plural = R::PLURAL;

    rsx! {
        div {
            div {
                class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "{title}" }
                div {
                    class: "flex gap-2",
                    button {
                        class: "px-3 py-2 text-sm rounded-md border border-gray-300 text-gray-700 hover:bg-gray-50 disabled:opacity-50",
                        disabled: current.is_loading(),
                        onclick: move |_| load(),
                        "Refresh"
                    }
                    if caps.create {
                        button {
                            class: "px-4 py-2 text-sm rounded-md bg-emerald-600 text-white hover:bg-emerald-700",
                            onclick: move |_| {
                                state.write().open_create();
                            },
                            "Add {singular}"
                        }
                    }
                }
            }

            if current.is_loading() && current.items().is_empty() {
                SkeletonRows { columns: R::columns().len() + 1 }
            } else if current.shows_empty_state() {
                div {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                    p { class: "text-gray-500", "No {plural} found." }
                }
            } else {
                div {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-x-auto",
                    table {
                        class: "min-w-full divide-y divide-gray-200",
                        thead {
                            class: "bg-gray-50",
                            tr {
                                for column in R::columns() {
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "{column}" }
                                }
                                th { class: "px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase", "Actions" }
                            }
                        }
                        tbody {
                            class: "bg-white divide-y divide-gray-200",
                            for item in current.items().iter() {
                                {
                                    let id = item.id().unwrap_or_default();
                                    rsx! {
                                        tr {
                                            key: "{id}",
                                            class: "hover:bg-gray-50",
                                            for cell in item.cells() {
                                                td { class: "px-6 py-4 text-sm text-gray-700 max-w-xs truncate", "{cell}" }
                                            }
                                            td {
                                                class: "px-6 py-4 text-right whitespace-nowrap",
                                                if caps.edit {
                                                    button {
                                                        class: "px-2 py-1 bg-blue-100 text-blue-700 text-xs rounded hover:bg-blue-200 mr-2",
                                                        onclick: move |_| {
                                                            state.write().open_edit(id);
                                                        },
                                                        "Edit"
                                                    }
                                                }
                                                if caps.delete {
                                                    button {
                                                        class: "px-2 py-1 bg-red-100 text-red-700 text-xs rounded hover:bg-red-200",
                                                        onclick: move |_| {
                                                            state.write().request_delete(id);
                                                        },
                                                        "Delete"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(editor) = current.editor() {
                div {
                    class: "fixed inset-0 z-30 flex items-center justify-center bg-black/40 px-4",
                    div {
                        class: "bg-white rounded-lg shadow-xl w-full max-w-lg max-h-[90vh] overflow-y-auto p-6",
                        role: "dialog",
                        h2 {
                            class: "text-lg font-semibold text-gray-900 mb-4",
                            if editor.is_new() { "Add {singular}" } else { "Edit {singular}" }
                        }
                        form {
                            onsubmit: save,
                            for field in R::fields() {
                                {
                                    let key = field.key;
                                    rsx! {
                                        FieldInput {
                                            key: "{key}",
                                            spec: *field,
                                            value: editor.value(key),
                                            error: editor.errors().get(key).map(str::to_string),
                                            disabled: current.is_saving(),
                                            on_change: move |value| state.write().set_field(key, value),
                                        }
                                    }
                                }
                            }
                            div {
                                class: "flex justify-end gap-3 mt-6",
                                button {
                                    r#type: "button",
                                    class: "px-4 py-2 text-sm rounded-md border border-gray-300 text-gray-700 hover:bg-gray-50",
                                    onclick: move |_| state.write().close_editor(),
                                    "Cancel"
                                }
                                button {
                                    r#type: "submit",
                                    class: "px-4 py-2 text-sm rounded-md bg-emerald-600 text-white hover:bg-emerald-700 disabled:opacity-50",
                                    disabled: current.is_saving(),
                                    if current.is_saving() { "Saving..." } else { "Save" }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(title) = current.pending_delete_title() {
                ConfirmDialog {
                    title: "Delete {noun}?",
                    message: "\"{title}\" will be permanently removed.",
                    busy: current.is_deleting(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| state.write().cancel_delete(),
                }
            }

            Toasts {
                notifications: current.notifications().items().to_vec(),
                on_dismiss: move |id| state.write().notifications_mut().dismiss(id),
            }
        }
    }
}
