//! Landing page

use academy_core::public::{LandingData, SiteCopy};
use dioxus::prelude::*;

use super::sections::{FaqList, PackageGrid, TeacherGrid, TestimonialGrid};
use crate::components::SkeletonGrid;
use crate::routes::Route;
use crate::server_fns::get_landing;

/// Landing page - hero, packages, teachers, testimonials and FAQs
#[component]
pub fn Home() -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_| rsx! { LandingSkeleton {} },
            Landing {}
        }
    }
}

#[component]
fn Landing() -> Element {
    let landing = use_server_future(get_landing)?;

    // Each section already degrades on its own; a transport failure
    // degrades all of them at once.
    let data = match &*landing.read() {
        Some(Ok(data)) => data.clone(),
        Some(Err(err)) => {
            tracing::warn!(error = %err, "landing data unavailable");
            LandingData::default()
        }
        None => return rsx! { LandingSkeleton {} },
    };

    rsx! {
        Hero { copy: data.copy }

        Section {
            id: "packages",
            title: "Our Packages",
            subtitle: "Flexible plans for every level, from first letters to full memorization.",
            PackageGrid { packages: data.packages }
        }

        Section {
            id: "teachers",
            title: "Meet Our Teachers",
            tinted: true,
            TeacherGrid { teachers: data.teachers }
        }

        Section {
            id: "testimonials",
            title: "What Our Students Say",
            TestimonialGrid { testimonials: data.testimonials, excerpt_len: 220 }
            div {
                class: "text-center mt-8",
                Link { to: Route::Testimonials {}, class: "text-emerald-700 font-medium hover:underline", "Read more stories" }
            }
        }

        Section {
            id: "faq",
            title: "Frequently Asked Questions",
            tinted: true,
            FaqList { faqs: data.faqs }
        }
    }
}

#[component]
fn Hero(copy: SiteCopy) -> Element {
    rsx! {
        section {
            class: "bg-gradient-to-b from-emerald-50 to-white",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16 sm:py-24 text-center",
                h1 { class: "text-4xl sm:text-5xl font-bold text-gray-900 mb-4", "{copy.hero_title}" }
                p { class: "text-lg sm:text-xl text-gray-600 max-w-2xl mx-auto mb-8", "{copy.hero_subtitle}" }
                div {
                    class: "flex flex-col sm:flex-row gap-3 justify-center",
                    Link {
                        to: Route::Register { package: String::new() },
                        class: "px-6 py-3 rounded-md bg-emerald-600 text-white font-medium hover:bg-emerald-700",
                        "Start a Free Trial"
                    }
                    Link {
                        to: Route::Packages {},
                        class: "px-6 py-3 rounded-md border border-emerald-600 text-emerald-700 font-medium hover:bg-emerald-50",
                        "View Packages"
                    }
                }
            }
        }
    }
}

#[component]
fn Section(
    id: &'static str,
    title: &'static str,
    #[props(default)] subtitle: Option<&'static str>,
    #[props(default)] tinted: bool,
    children: Element,
) -> Element {
    rsx! {
        section {
            id,
            class: if tinted { "bg-stone-100 py-16" } else { "py-16" },
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                h2 { class: "text-3xl font-bold text-gray-900 text-center", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "mt-3 text-gray-600 text-center max-w-2xl mx-auto", "{subtitle}" }
                }
                div { class: "mt-10", {children} }
            }
        }
    }
}

/// Same outline as the loaded page so nothing jumps when data arrives
#[component]
fn LandingSkeleton() -> Element {
    rsx! {
        section {
            class: "bg-gradient-to-b from-emerald-50 to-white",
            div {
                class: "max-w-7xl mx-auto px-4 py-16 sm:py-24 animate-pulse flex flex-col items-center",
                div { class: "h-10 bg-gray-200 rounded w-2/3 mb-4" }
                div { class: "h-5 bg-gray-200 rounded w-1/2 mb-8" }
                div { class: "h-12 bg-gray-200 rounded w-48" }
            }
        }
        for _ in 0..2 {
            section {
                class: "py-16",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                    div { class: "h-8 bg-gray-200 rounded w-64 mx-auto mb-10 animate-pulse" }
                    SkeletonGrid {}
                }
            }
        }
    }
}
