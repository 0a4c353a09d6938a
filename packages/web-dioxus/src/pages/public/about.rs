//! About page: the academy's story and its teachers

use academy_core::public::SiteCopy;
use academy_core::PublicData;
use dioxus::prelude::*;

use super::sections::{PageHeader, TeacherGrid};
use crate::components::{SkeletonGrid, SkeletonLine};
use crate::server_fns::{get_site_copy, get_teachers};

#[component]
pub fn About() -> Element {
    rsx! {
        PageHeader { title: "About Us" }
        section {
            class: "max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-12",
            SuspenseBoundary {
                fallback: |_| rsx! {
                    div { class: "space-y-3", SkeletonLine { width: "w-full" } SkeletonLine { width: "w-5/6" } }
                },
                AboutText {}
            }
        }
        section {
            class: "bg-stone-100 py-16",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                h2 { class: "text-3xl font-bold text-gray-900 text-center mb-10", "Our Teachers" }
                SuspenseBoundary {
                    fallback: |_| rsx! { SkeletonGrid {} },
                    Teachers {}
                }
            }
        }
    }
}

#[component]
fn AboutText() -> Element {
    let copy = use_server_future(get_site_copy)?;
    let copy = match &*copy.read() {
        Some(Ok(copy)) => copy.clone(),
        _ => SiteCopy::default(),
    };

    rsx! {
        for paragraph in copy.about_text.split("\n\n") {
            p { class: "text-lg text-gray-700 leading-relaxed mb-4", "{paragraph}" }
        }
    }
}

#[component]
fn Teachers() -> Element {
    let teachers = use_server_future(get_teachers)?;
    let teachers = match &*teachers.read() {
        Some(Ok(teachers)) => teachers.clone(),
        _ => PublicData::Unavailable,
    };

    rsx! {
        TeacherGrid { teachers }
    }
}
