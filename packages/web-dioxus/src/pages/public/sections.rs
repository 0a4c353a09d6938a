//! Building blocks shared by the public pages

use academy_core::models::{Faq, Package, Teacher, Testimonial};
use academy_core::PublicData;
use dioxus::prelude::*;

use crate::routes::Route;

/// Page heading band used by every public page except the landing page
#[component]
pub fn PageHeader(title: String, #[props(default)] subtitle: Option<String>) -> Element {
    rsx! {
        section {
            class: "bg-emerald-700 text-white",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12 text-center",
                h1 { class: "text-3xl sm:text-4xl font-bold", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "mt-3 text-emerald-100 max-w-2xl mx-auto", "{subtitle}" }
                }
            }
        }
    }
}

/// Shown in place of a section whose data could not be fetched
#[component]
pub fn Unavailable(what: &'static str) -> Element {
    rsx! {
        div {
            class: "text-center py-10 text-gray-500",
            "We couldn't load {what} right now. Please try again later."
        }
    }
}

#[component]
pub fn PackageGrid(packages: PublicData<Package>) -> Element {
    match packages {
        PublicData::Unavailable => rsx! { Unavailable { what: "our packages" } },
        PublicData::Loaded(items) if items.is_empty() => rsx! {
            p { class: "text-center py-10 text-gray-500", "New packages are coming soon." }
        },
        PublicData::Loaded(items) => rsx! {
            div {
                class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                for package in items {
                    PackageCard { key: "{package.id.unwrap_or_default()}", package }
                }
            }
        },
    }
}

#[component]
fn PackageCard(package: Package) -> Element {
    let id = package.id.map(|id| id.to_string()).unwrap_or_default();
    let border = if package.is_most_popular {
        "border-emerald-500 ring-2 ring-emerald-500"
    } else {
        "border-gray-100"
    };

    rsx! {
        div {
            class: "relative bg-white rounded-xl shadow-sm border {border} p-6 flex flex-col",
            if package.is_most_popular {
                span {
                    class: "absolute -top-3 left-1/2 -translate-x-1/2 px-3 py-1 rounded-full bg-emerald-600 text-white text-xs font-semibold",
                    "Most Popular"
                }
            }
            h3 { class: "text-xl font-semibold text-gray-900", "{package.name}" }
            p { class: "mt-2 text-3xl font-bold text-emerald-700", "{package.price_label()}" }
            p { class: "mt-3 text-sm text-gray-600", "{package.description}" }
            if !package.features.is_empty() {
                ul {
                    class: "mt-4 space-y-2 text-sm text-gray-700 flex-1",
                    for feature in package.features.iter() {
                        li {
                            class: "flex gap-2",
                            span { class: "text-emerald-600", "\u{2713}" }
                            "{feature}"
                        }
                    }
                }
            }
            Link {
                to: Route::Register { package: id },
                class: "mt-6 block text-center px-4 py-2 rounded-md bg-emerald-600 text-white font-medium hover:bg-emerald-700",
                "Enroll Now"
            }
        }
    }
}

#[component]
pub fn TeacherGrid(teachers: PublicData<Teacher>) -> Element {
    match teachers {
        PublicData::Unavailable => rsx! { Unavailable { what: "our teachers" } },
        PublicData::Loaded(items) => rsx! {
            div {
                class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                for teacher in items {
                    div {
                        key: "{teacher.id.unwrap_or_default()}",
                        class: "bg-white rounded-xl shadow-sm border border-gray-100 p-6 text-center",
                        if teacher.image_url.is_empty() {
                            div {
                                class: "h-24 w-24 rounded-full bg-emerald-100 text-emerald-700 text-3xl font-bold mx-auto mb-4 flex items-center justify-center",
                                "{initial(&teacher.name)}"
                            }
                        } else {
                            img {
                                class: "h-24 w-24 rounded-full object-cover mx-auto mb-4",
                                src: "{teacher.image_url}",
                                alt: "{teacher.name}",
                                loading: "lazy",
                            }
                        }
                        h3 { class: "text-lg font-semibold text-gray-900", "{teacher.name}" }
                        p { class: "text-sm text-emerald-700", "{teacher.title}" }
                        p { class: "mt-3 text-sm text-gray-600", "{teacher.bio}" }
                    }
                }
            }
        },
    }
}

/// `excerpt_len` trims long quotes on the landing page
#[component]
pub fn TestimonialGrid(
    testimonials: PublicData<Testimonial>,
    #[props(default)] excerpt_len: Option<usize>,
) -> Element {
    match testimonials {
        PublicData::Unavailable => rsx! { Unavailable { what: "testimonials" } },
        PublicData::Loaded(items) => rsx! {
            div {
                class: "grid gap-6 md:grid-cols-2 lg:grid-cols-3",
                for testimonial in items {
                    {
                        let text = match excerpt_len {
                            Some(max) => academy_core::models::excerpt(&testimonial.testimonial_text, max),
                            None => testimonial.testimonial_text.clone(),
                        };
                        rsx! {
                            figure {
                                key: "{testimonial.id.unwrap_or_default()}",
                                class: "bg-white rounded-xl shadow-sm border border-gray-100 p-6",
                                blockquote { class: "text-gray-700 italic", "\u{201c}{text}\u{201d}" }
                                figcaption {
                                    class: "mt-4 flex items-center gap-3",
                                    if !testimonial.image_url.is_empty() {
                                        img {
                                            class: "h-10 w-10 rounded-full object-cover",
                                            src: "{testimonial.image_url}",
                                            alt: "{testimonial.student_name}",
                                            loading: "lazy",
                                        }
                                    }
                                    div {
                                        p { class: "text-sm font-semibold text-gray-900", "{testimonial.student_name}" }
                                        if !testimonial.country.is_empty() {
                                            p { class: "text-xs text-gray-500", "{testimonial.country}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    }
}

#[component]
pub fn FaqList(faqs: PublicData<Faq>) -> Element {
    match faqs {
        PublicData::Unavailable => rsx! { Unavailable { what: "frequently asked questions" } },
        PublicData::Loaded(items) => rsx! {
            div {
                class: "max-w-3xl mx-auto divide-y divide-gray-200 bg-white rounded-xl shadow-sm border border-gray-100",
                for faq in items {
                    details {
                        key: "{faq.id.unwrap_or_default()}",
                        class: "group px-6 py-4",
                        summary {
                            class: "cursor-pointer font-medium text-gray-900 list-none flex justify-between",
                            "{faq.question}"
                            span { class: "text-emerald-600 group-open:rotate-45 transition-transform", "+" }
                        }
                        p { class: "mt-3 text-sm text-gray-600", "{faq.answer}" }
                    }
                }
            }
        },
    }
}

fn initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()
}
