//! One page per managed resource, all backed by the same manager

use academy_core::models::{Application, Faq, Package, PackageCategory, Teacher, Testimonial};
use dioxus::prelude::*;

use crate::components::resource_manager;

#[component]
pub fn AdminPackages() -> Element {
    resource_manager::<Package>()
}

#[component]
pub fn AdminCategories() -> Element {
    resource_manager::<PackageCategory>()
}

#[component]
pub fn AdminTeachers() -> Element {
    resource_manager::<Teacher>()
}

#[component]
pub fn AdminTestimonials() -> Element {
    resource_manager::<Testimonial>()
}

#[component]
pub fn AdminFaqs() -> Element {
    resource_manager::<Faq>()
}

/// Read-only apart from deletion; applications arrive from the public form.
#[component]
pub fn AdminApplications() -> Element {
    resource_manager::<Application>()
}
