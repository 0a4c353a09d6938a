//! Admin dashboard page

use academy_core::ResourceKind;
use dioxus::prelude::*;

use crate::auth::use_session;
use crate::components::SkeletonGrid;
use crate::routes::Route;
use crate::server_fns::{dashboard_counts, error_message};

fn route_for(kind: ResourceKind) -> Route {
    match kind {
        ResourceKind::Packages => Route::AdminPackages {},
        ResourceKind::Categories => Route::AdminCategories {},
        ResourceKind::Teachers => Route::AdminTeachers {},
        ResourceKind::Testimonials => Route::AdminTestimonials {},
        ResourceKind::Faqs => Route::AdminFaqs {},
        ResourceKind::Applications => Route::AdminApplications {},
        ResourceKind::SiteContent => Route::AdminSiteContent {},
    }
}

/// Admin dashboard with a count per resource
#[component]
pub fn AdminDashboard() -> Element {
    let session = use_session();
    let counts = use_resource(dashboard_counts);

    // A failed count usually means the session lapsed
    use_effect(move || {
        if let Some(Err(_)) = &*counts.read() {
            spawn(async move {
                session.refresh().await;
            });
        }
    });

    let greeting = session
        .user()
        .map(|user| format!("Welcome back, {}", user.display_name()))
        .unwrap_or_else(|| "Welcome back".to_string());

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-1", "Dashboard" }
            p { class: "text-gray-600 mb-8", "{greeting}" }

            match &*counts.read() {
                None => rsx! { SkeletonGrid { count: 6 } },
                Some(Err(err)) => rsx! {
                    div {
                        class: "p-4 bg-red-50 border border-red-200 text-red-800 rounded",
                        "Failed to load dashboard: {error_message(err)}"
                    }
                },
                Some(Ok(counts)) => rsx! {
                    div {
                        class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                        for tile in counts.iter().filter(|tile| tile.kind != ResourceKind::SiteContent) {
                            StatCard { kind: tile.kind, value: tile.count }
                        }
                    }
                },
            }

            div {
                class: "mt-8 bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Quick Actions" }
                div {
                    class: "flex flex-wrap gap-3",
                    QuickActionLink { to: Route::AdminApplications {}, label: "Review applications" }
                    QuickActionLink { to: Route::AdminSiteContent {}, label: "Edit site content" }
                    QuickActionLink { to: Route::Home {}, label: "View public site" }
                }
            }
        }
    }
}

#[component]
fn StatCard(kind: ResourceKind, value: Option<usize>) -> Element {
    rsx! {
        Link {
            to: route_for(kind),
            class: "block bg-white rounded-lg shadow-sm border border-gray-200 p-6 hover:border-emerald-300 transition-colors",
            p { class: "text-sm text-gray-500", "{kind.label()}" }
            match value {
                Some(value) => rsx! { p { class: "text-3xl font-bold text-gray-900 mt-1", "{value}" } },
                None => rsx! { p { class: "text-sm text-red-600 mt-3", "Couldn't load count" } },
            }
        }
    }
}

#[component]
fn QuickActionLink(to: Route, label: &'static str) -> Element {
    rsx! {
        Link {
            to,
            class: "inline-flex items-center gap-2 px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-colors",
            "{label}"
        }
    }
}
