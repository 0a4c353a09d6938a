//! FAQ page

use academy_core::PublicData;
use dioxus::prelude::*;

use super::sections::{FaqList, PageHeader};
use crate::components::SkeletonRows;
use crate::routes::Route;
use crate::server_fns::get_faqs;

#[component]
pub fn Faq() -> Element {
    rsx! {
        PageHeader { title: "Frequently Asked Questions" }
        div {
            class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16",
            SuspenseBoundary {
                fallback: |_| rsx! { SkeletonRows { columns: 1, rows: 5 } },
                Questions {}
            }
            p {
                class: "mt-10 text-center text-gray-600",
                "Still have questions? "
                Link { to: Route::Contact {}, class: "text-emerald-700 font-medium hover:underline", "Get in touch" }
            }
        }
    }
}

#[component]
fn Questions() -> Element {
    let faqs = use_server_future(get_faqs)?;
    let faqs = match &*faqs.read() {
        Some(Ok(faqs)) => faqs.clone(),
        _ => PublicData::Unavailable,
    };

    rsx! {
        FaqList { faqs }
    }
}
