//! Contact page

use dioxus::prelude::*;

use super::sections::PageHeader;
use crate::components::{use_site_contact, SkeletonLine};
use crate::routes::Route;

#[component]
pub fn Contact() -> Element {
    let contact = use_site_contact();

    rsx! {
        PageHeader {
            title: "Contact Us",
            subtitle: "We usually reply within one working day.",
        }
        div {
            class: "max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-16",
            div {
                class: "bg-white rounded-xl shadow-sm border border-gray-100 p-8",
                match contact.current() {
                    None => rsx! {
                        div {
                            class: "space-y-4",
                            SkeletonLine { width: "w-64" }
                            SkeletonLine { width: "w-48" }
                        }
                    },
                    Some(info) => rsx! {
                        dl {
                            class: "grid gap-6 sm:grid-cols-2",
                            div {
                                dt { class: "text-sm font-medium text-gray-500", "Email" }
                                dd {
                                    a { href: info.mailto(), class: "text-lg text-emerald-700 hover:underline", "{info.email}" }
                                }
                            }
                            div {
                                dt { class: "text-sm font-medium text-gray-500", "Phone" }
                                dd {
                                    a { href: info.tel(), class: "text-lg text-emerald-700 hover:underline", "{info.phone}" }
                                }
                            }
                            if let Some(link) = info.whatsapp_link() {
                                div {
                                    dt { class: "text-sm font-medium text-gray-500", "WhatsApp" }
                                    dd {
                                        a { href: link, target: "_blank", class: "text-lg text-emerald-700 hover:underline", "Message us" }
                                    }
                                }
                            }
                            if let Some(address) = info.address.as_ref() {
                                div {
                                    dt { class: "text-sm font-medium text-gray-500", "Address" }
                                    dd { class: "text-lg text-gray-800", "{address}" }
                                }
                            }
                        }
                    },
                }
            }
            div {
                class: "mt-10 text-center",
                p { class: "text-gray-600 mb-4", "Ready to start? Book a free trial class." }
                Link {
                    to: Route::Register { package: String::new() },
                    class: "px-6 py-3 rounded-md bg-emerald-600 text-white font-medium hover:bg-emerald-700",
                    "Register Now"
                }
            }
        }
    }
}
