//! Admin navigation component

use dioxus::prelude::*;

use crate::auth::use_session;
use crate::routes::Route;

/// Admin navigation bar
#[component]
pub fn AdminNav(user_name: String) -> Element {
    let session = use_session();
    let navigator = use_navigator();
    let mut menu_open = use_signal(|| false);

    let handle_logout = move |_| {
        spawn(async move {
            session.sign_out().await;
            navigator.push(Route::Login {});
        });
    };

    rsx! {
        nav {
            class: "bg-white border-b border-gray-200 px-6 py-3",
            div {
                class: "flex items-center justify-between",

                div {
                    class: "flex items-center gap-6",
                    Link {
                        to: Route::AdminDashboard {},
                        class: "text-xl font-bold text-emerald-700",
                        "Noor Academy Admin"
                    }

                    div {
                        class: "hidden lg:flex items-center gap-1",
                        AdminLinks {}
                    }
                }

                div {
                    class: "flex items-center gap-4",
                    Link {
                        to: Route::Home {},
                        class: "hidden sm:inline text-sm text-gray-500 hover:text-gray-900",
                        "View site"
                    }
                    span { class: "text-sm text-gray-600", "{user_name}" }
                    button {
                        class: "text-sm text-gray-600 hover:text-gray-900 px-3 py-1.5 rounded hover:bg-gray-100",
                        onclick: handle_logout,
                        "Logout"
                    }
                    button {
                        class: "lg:hidden p-2 rounded-md text-gray-600 hover:bg-gray-100",
                        aria_label: "Toggle navigation",
                        onclick: move |_| menu_open.toggle(),
                        "\u{2630}"
                    }
                }
            }

            if menu_open() {
                div {
                    class: "lg:hidden mt-3 flex flex-col gap-1",
                    onclick: move |_| menu_open.set(false),
                    AdminLinks {}
                }
            }
        }
    }
}

#[component]
fn AdminLinks() -> Element {
    rsx! {
        NavLink { to: Route::AdminDashboard {}, label: "Dashboard" }
        NavLink { to: Route::AdminPackages {}, label: "Packages" }
        NavLink { to: Route::AdminCategories {}, label: "Categories" }
        NavLink { to: Route::AdminTeachers {}, label: "Teachers" }
        NavLink { to: Route::AdminTestimonials {}, label: "Testimonials" }
        NavLink { to: Route::AdminFaqs {}, label: "FAQs" }
        NavLink { to: Route::AdminApplications {}, label: "Applications" }
        NavLink { to: Route::AdminSiteContent {}, label: "Site Content" }
        NavLink { to: Route::AdminProfile {}, label: "Profile" }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    to: Route,
    label: &'static str,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let route = use_route::<Route>();
    let is_active = route == props.to;

    rsx! {
        Link {
            to: props.to.clone(),
            class: if is_active {
                "px-3 py-2 rounded-md text-sm font-medium bg-emerald-100 text-emerald-800"
            } else {
                "px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:bg-gray-100 hover:text-gray-900"
            },
            "{props.label}"
        }
    }
}
