//! Testimonials page

use academy_core::PublicData;
use dioxus::prelude::*;

use super::sections::{PageHeader, TestimonialGrid};
use crate::components::SkeletonGrid;
use crate::server_fns::get_testimonials;

#[component]
pub fn Testimonials() -> Element {
    rsx! {
        PageHeader {
            title: "Student Testimonials",
            subtitle: "Hear from students and parents learning with us around the world.",
        }
        div {
            class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16",
            SuspenseBoundary {
                fallback: |_| rsx! { SkeletonGrid { count: 6 } },
                TestimonialList {}
            }
        }
    }
}

#[component]
fn TestimonialList() -> Element {
    let testimonials = use_server_future(get_testimonials)?;
    let testimonials = match &*testimonials.read() {
        Some(Ok(testimonials)) => testimonials.clone(),
        _ => PublicData::Unavailable,
    };

    rsx! {
        TestimonialGrid { testimonials }
    }
}
