//! Loading components

use dioxus::prelude::*;

/// Full-page loading spinner
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center",
            div {
                class: "flex space-x-2",
                div { class: "w-3 h-3 bg-emerald-500 rounded-full animate-bounce" }
                div { class: "w-3 h-3 bg-emerald-500 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
                div { class: "w-3 h-3 bg-emerald-500 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
            }
            p { class: "mt-4 text-sm text-gray-500", "Loading..." }
        }
    }
}

/// Placeholder card with the shape of a package or teacher card
#[component]
pub fn SkeletonCard() -> Element {
    rsx! {
        div {
            class: "bg-white rounded-xl shadow-sm border border-gray-100 p-6 animate-pulse",
            div { class: "h-24 w-24 bg-gray-200 rounded-full mx-auto mb-4" }
            div { class: "h-5 bg-gray-200 rounded w-2/3 mx-auto mb-3" }
            div { class: "h-3 bg-gray-200 rounded w-full mb-2" }
            div { class: "h-3 bg-gray-200 rounded w-5/6 mb-2" }
            div { class: "h-3 bg-gray-200 rounded w-4/6" }
        }
    }
}

/// A grid of skeleton cards
#[component]
pub fn SkeletonGrid(#[props(default = 3)] count: usize) -> Element {
    rsx! {
        div {
            class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
            for _ in 0..count {
                SkeletonCard {}
            }
        }
    }
}

/// Placeholder rows for admin tables
#[component]
pub fn SkeletonRows(columns: usize, #[props(default = 4)] rows: usize) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 divide-y divide-gray-100 animate-pulse",
            for _ in 0..rows {
                div {
                    class: "flex gap-6 px-6 py-4",
                    for _ in 0..columns {
                        div { class: "h-4 bg-gray-200 rounded flex-1" }
                    }
                }
            }
        }
    }
}

/// Placeholder for a short run of text, e.g. a phone number in the footer
#[component]
pub fn SkeletonLine(#[props(default = "w-32")] width: &'static str) -> Element {
    rsx! {
        span { class: "inline-block h-4 {width} bg-gray-200 rounded animate-pulse align-middle" }
    }
}
