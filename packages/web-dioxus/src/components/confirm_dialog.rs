use dioxus::prelude::*;

/// Modal asking the user to confirm a destructive action
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    #[props(default)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-40 flex items-center justify-center bg-black/40 px-4",
            div {
                class: "bg-white rounded-lg shadow-xl max-w-sm w-full p-6",
                role: "alertdialog",
                h2 { class: "text-lg font-semibold text-gray-900 mb-2", "{title}" }
                p { class: "text-sm text-gray-600 mb-6", "{message}" }
                div {
                    class: "flex justify-end gap-3",
                    button {
                        class: "px-4 py-2 text-sm rounded-md border border-gray-300 text-gray-700 hover:bg-gray-50",
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "px-4 py-2 text-sm rounded-md bg-red-600 text-white hover:bg-red-700 disabled:opacity-50",
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        if busy { "Working..." } else { "{confirm_label}" }
                    }
                }
            }
        }
    }
}
