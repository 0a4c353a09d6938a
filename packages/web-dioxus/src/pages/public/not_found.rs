use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center px-4 text-center",
            p { class: "text-6xl font-bold text-emerald-700", "404" }
            h1 { class: "mt-4 text-2xl font-semibold text-gray-900", "Page not found" }
            p { class: "mt-2 text-gray-600", "There is nothing at /{path}." }
            Link {
                to: Route::Home {},
                class: "mt-6 px-4 py-2 rounded-md bg-emerald-600 text-white hover:bg-emerald-700",
                "Back to home"
            }
        }
    }
}
