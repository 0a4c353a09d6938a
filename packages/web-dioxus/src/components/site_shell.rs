//! Public site chrome: header, navigation and footer

use academy_core::ContactInfo;
use dioxus::prelude::*;

use super::SkeletonLine;
use crate::routes::Route;
use crate::server_fns::get_contact_info;

/// Contact details fetched once by [`SiteShell`] and read by any page that
/// needs them.
#[derive(Clone, Copy)]
pub struct SiteContact(Resource<Result<ContactInfo, ServerFnError>>);

impl SiteContact {
    /// `None` while the first fetch is in flight.
    pub fn current(&self) -> Option<ContactInfo> {
        match &*self.0.read() {
            Some(Ok(info)) => Some(info.clone()),
            Some(Err(_)) => Some(ContactInfo::fallback()),
            None => None,
        }
    }
}

pub fn use_site_contact() -> SiteContact {
    use_context::<SiteContact>()
}

const NAV_ITEMS: [(&str, fn() -> Route); 6] = [
    ("Home", || Route::Home {}),
    ("Packages", || Route::Packages {}),
    ("About", || Route::About {}),
    ("Testimonials", || Route::Testimonials {}),
    ("FAQ", || Route::Faq {}),
    ("Contact", || Route::Contact {}),
];

/// Layout for every public route
#[component]
pub fn SiteShell() -> Element {
    let info = use_resource(get_contact_info);
    let contact = use_context_provider(|| SiteContact(info));
    let mut menu_open = use_signal(|| false);
    let route = use_route::<Route>();

    // Close the mobile menu after navigating
    use_effect(use_reactive!(|route| {
        let _ = &route;
        menu_open.set(false);
    }));

    rsx! {
        div {
            class: "min-h-screen flex flex-col bg-stone-50",

            header {
                class: "bg-white border-b border-gray-100 sticky top-0 z-20",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between",
                    Link {
                        to: Route::Home {},
                        class: "text-xl font-bold text-emerald-700",
                        "Noor Academy"
                    }

                    nav {
                        class: "hidden md:flex items-center gap-1",
                        for (label, to) in NAV_ITEMS {
                            SiteNavLink { to: to(), label }
                        }
                        Link {
                            to: Route::Register { package: String::new() },
                            class: "ml-3 px-4 py-2 rounded-md text-sm font-medium bg-emerald-600 text-white hover:bg-emerald-700",
                            "Register"
                        }
                    }

                    button {
                        class: "md:hidden p-2 rounded-md text-gray-600 hover:bg-gray-100",
                        aria_label: "Toggle navigation",
                        aria_expanded: "{menu_open()}",
                        onclick: move |_| menu_open.toggle(),
                        if menu_open() { "\u{2715}" } else { "\u{2630}" }
                    }
                }

                if menu_open() {
                    nav {
                        class: "md:hidden border-t border-gray-100 px-4 py-3 flex flex-col gap-1",
                        for (label, to) in NAV_ITEMS {
                            SiteNavLink { to: to(), label }
                        }
                        Link {
                            to: Route::Register { package: String::new() },
                            class: "mt-2 px-3 py-2 rounded-md text-sm font-medium bg-emerald-600 text-white text-center",
                            "Register"
                        }
                    }
                }
            }

            main {
                class: "flex-1",
                Outlet::<Route> {}
            }

            SiteFooter { contact: contact.current() }
        }
    }
}

#[component]
fn SiteNavLink(to: Route, label: &'static str) -> Element {
    let route = use_route::<Route>();
    let is_active = route == to;

    rsx! {
        Link {
            to,
            class: if is_active {
                "px-3 py-2 rounded-md text-sm font-medium bg-emerald-50 text-emerald-800"
            } else {
                "px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:bg-gray-100 hover:text-gray-900"
            },
            "{label}"
        }
    }
}

#[component]
fn SiteFooter(contact: Option<ContactInfo>) -> Element {
    rsx! {
        footer {
            class: "bg-emerald-900 text-emerald-50",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10 grid gap-8 md:grid-cols-3",
                div {
                    h2 { class: "text-lg font-semibold mb-2", "Noor Academy" }
                    p {
                        class: "text-sm text-emerald-200",
                        "One-to-one online Quran classes with qualified teachers."
                    }
                }
                div {
                    h3 { class: "text-sm font-semibold uppercase tracking-wide mb-3", "Explore" }
                    ul {
                        class: "space-y-1 text-sm",
                        for (label, to) in NAV_ITEMS {
                            li {
                                Link { to: to(), class: "text-emerald-200 hover:text-white", "{label}" }
                            }
                        }
                    }
                }
                div {
                    h3 { class: "text-sm font-semibold uppercase tracking-wide mb-3", "Contact" }
                    match contact {
                        Some(info) => rsx! {
                            ul {
                                class: "space-y-1 text-sm",
                                li {
                                    a { href: info.mailto(), class: "text-emerald-200 hover:text-white", "{info.email}" }
                                }
                                li {
                                    a { href: info.tel(), class: "text-emerald-200 hover:text-white", "{info.phone}" }
                                }
                                if let Some(link) = info.whatsapp_link() {
                                    li {
                                        a { href: link, target: "_blank", class: "text-emerald-200 hover:text-white", "WhatsApp" }
                                    }
                                }
                                if let Some(address) = info.address.as_ref() {
                                    li { class: "text-emerald-200", "{address}" }
                                }
                            }
                        },
                        None => rsx! {
                            div {
                                class: "space-y-2",
                                div { SkeletonLine { width: "w-40" } }
                                div { SkeletonLine {} }
                            }
                        },
                    }
                }
            }
            div {
                class: "border-t border-emerald-800 py-4 text-center text-xs text-emerald-300",
                "\u{a9} Noor Academy"
            }
        }
    }
}
