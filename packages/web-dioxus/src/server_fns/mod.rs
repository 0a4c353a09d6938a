//! Server functions the pages call
//!
//! Public reads go through the shared memoizing client; admin calls run
//! with the visitor's token via [`crate::backend::admin_call`].

mod admin;
mod public;

pub use admin::*;
pub use public::*;

use dioxus::prelude::ServerFnError;

/// Message to show the user, without the transport prefix.
pub fn error_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(message) => message.clone(),
        other => other.to_string(),
    }
}

/// Run `$body` with `$r` bound to the record type behind a
/// [`academy_core::ResourceKind`].
#[cfg(feature = "server")]
macro_rules! with_resource {
    ($kind:expr, $r:ident => $body:expr) => {{
        use academy_core::models::*;
        use academy_core::ResourceKind;
        match $kind {
            ResourceKind::Packages => {
                type $r = Package;
                $body
            }
            ResourceKind::Categories => {
                type $r = PackageCategory;
                $body
            }
            ResourceKind::Teachers => {
                type $r = Teacher;
                $body
            }
            ResourceKind::Testimonials => {
                type $r = Testimonial;
                $body
            }
            ResourceKind::Faqs => {
                type $r = Faq;
                $body
            }
            ResourceKind::Applications => {
                type $r = Application;
                $body
            }
            ResourceKind::SiteContent => {
                type $r = SiteContent;
                $body
            }
        }
    }};
}

#[cfg(feature = "server")]
pub(crate) use with_resource;
