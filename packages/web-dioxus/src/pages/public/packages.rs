//! Packages page

use academy_core::PublicData;
use dioxus::prelude::*;

use super::sections::{PackageGrid, PageHeader};
use crate::components::SkeletonGrid;
use crate::server_fns::get_packages;

#[component]
pub fn Packages() -> Element {
    rsx! {
        PageHeader {
            title: "Our Packages",
            subtitle: "Pick the plan that fits your goals. Every package starts with a free trial class.",
        }
        div {
            class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16",
            SuspenseBoundary {
                fallback: |_| rsx! { SkeletonGrid {} },
                PackageList {}
            }
        }
    }
}

#[component]
fn PackageList() -> Element {
    let packages = use_server_future(get_packages)?;
    let packages = match &*packages.read() {
        Some(Ok(packages)) => packages.clone(),
        _ => PublicData::Unavailable,
    };

    rsx! {
        PackageGrid { packages }
    }
}
