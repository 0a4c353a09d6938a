//! Typed REST client for the academy backend
//!
//! [`ApiClient`] owns the HTTP plumbing (bearer header, error parsing,
//! memoized public reads). [`ResourceClient`] layers one resource's endpoint
//! table on top of it and is what the admin managers talk to.

mod cache;
mod client;
mod resources;

pub use cache::PublicCache;
pub use client::ApiClient;
pub use resources::{ResourceClient, SiteContentClient};

/// Endpoints that do not belong to a managed resource.
pub mod endpoints {
    pub const UPLOAD: &str = "/api/Upload";
    pub const LOGIN: &str = "/api/Auth/login";
    pub const PROFILE: &str = "/api/Admin/profile";
    pub const ACCOUNT: &str = "/api/Admin/account";
    pub const APPLICATIONS: &str = "/api/Applications";
    pub const SITE_CONTENT: &str = "/api/SiteContent";
}
