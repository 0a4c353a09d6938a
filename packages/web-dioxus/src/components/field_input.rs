//! Form controls driven by a resource's field table

use academy_core::{FieldKind, FieldSpec, FieldValue};
use dioxus::prelude::*;

use crate::auth::use_session;
use crate::server_fns::{error_message, upload_image};

const INPUT_CLASS: &str = "w-full px-3 py-2 border rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500";

/// One labelled control plus its validation message
#[component]
pub fn FieldInput(
    spec: FieldSpec,
    value: FieldValue,
    error: Option<String>,
    #[props(default)] disabled: bool,
    on_change: EventHandler<FieldValue>,
) -> Element {
    let id = format!("field-{}", spec.key);
    let border = if error.is_some() { "border-red-400" } else { "border-gray-300" };
    let text = value.as_text().to_string();

    let control = match spec.kind {
        FieldKind::Toggle => rsx! {
            input {
                id: "{id}",
                r#type: "checkbox",
                class: "h-4 w-4 rounded border-gray-300 text-emerald-600",
                checked: value.as_bool(),
                disabled,
                onchange: move |e: FormEvent| on_change.call(FieldValue::Bool(e.checked())),
            }
        },
        FieldKind::LongText | FieldKind::List => rsx! {
            textarea {
                id: "{id}",
                class: "{INPUT_CLASS} {border}",
                rows: if spec.kind == FieldKind::List { "6" } else { "4" },
                value: "{text}",
                disabled,
                oninput: move |e: FormEvent| on_change.call(FieldValue::text(e.value())),
            }
        },
        FieldKind::Image => rsx! {
            ImageField { id: id.clone(), value: text.clone(), border, disabled, on_change }
        },
        FieldKind::Text | FieldKind::Email | FieldKind::Number | FieldKind::Integer => rsx! {
            input {
                id: "{id}",
                r#type: input_type(spec.kind),
                inputmode: match spec.kind {
                    FieldKind::Number => "decimal",
                    FieldKind::Integer => "numeric",
                    _ => "text",
                },
                class: "{INPUT_CLASS} {border}",
                value: "{text}",
                disabled,
                oninput: move |e: FormEvent| on_change.call(FieldValue::text(e.value())),
            }
        },
    };

    rsx! {
        div {
            class: if spec.kind == FieldKind::Toggle { "mb-4 flex items-center gap-2 flex-row-reverse justify-end" } else { "mb-4" },
            label {
                r#for: "{id}",
                class: "block text-sm font-medium text-gray-700 mb-1",
                "{spec.label}"
                if spec.required {
                    span { class: "text-red-500 ml-0.5", "*" }
                }
            }
            {control}
            if let Some(message) = error {
                p { class: "mt-1 text-xs text-red-600", "{message}" }
            }
        }
    }
}

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        _ => "text",
    }
}

/// Relative image URL with a file picker that uploads and fills it in
#[component]
fn ImageField(
    id: String,
    value: String,
    border: &'static str,
    disabled: bool,
    on_change: EventHandler<FieldValue>,
) -> Element {
    let session = use_session();
    let mut uploading = use_signal(|| false);
    let mut upload_error = use_signal(|| None::<String>);

    let handle_file = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(path) = engine.files().into_iter().next() else {
            return;
        };
        let Some(bytes) = engine.read_file(&path).await else {
            upload_error.set(Some("Could not read the selected file".to_string()));
            return;
        };

        let file_name = path.rsplit(['/', '\\']).next().unwrap_or(&path).to_string();
        uploading.set(true);
        upload_error.set(None);

        match upload_image(file_name, bytes).await {
            Ok(url) => on_change.call(FieldValue::text(url)),
            Err(err) => {
                upload_error.set(Some(format!("Upload failed: {}", error_message(&err))));
                session.refresh().await;
            }
        }
        uploading.set(false);
    };

    rsx! {
        div {
            class: "space-y-2",
            input {
                id: "{id}",
                r#type: "text",
                class: "{INPUT_CLASS} {border}",
                placeholder: "/uploads/photo.jpg",
                value: "{value}",
                disabled,
                oninput: move |e: FormEvent| on_change.call(FieldValue::text(e.value())),
            }
            div {
                class: "flex items-center gap-3",
                input {
                    r#type: "file",
                    accept: "image/*",
                    class: "text-sm text-gray-600",
                    disabled: disabled || uploading(),
                    onchange: handle_file,
                }
                if uploading() {
                    span { class: "text-xs text-gray-500", "Uploading..." }
                }
            }
            if let Some(message) = upload_error() {
                p { class: "text-xs text-red-600", "{message}" }
            }
        }
    }
}
