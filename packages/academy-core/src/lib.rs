//! Noor Academy core
//!
//! Everything the site needs that does not depend on a renderer:
//!
//! - [`models`]: records mirrored from the REST backend
//! - [`session`]: credential decoding and the admin route guard
//! - [`resource`]: per-resource endpoint and form configuration
//! - [`manager`]: the generic list/edit/delete state machine behind every admin screen
//! - [`dashboard`]: per-resource record counts
//! - [`public`]: public page data with graceful fallbacks
//! - [`registration`]: the public application form
//! - [`api`] (feature `client`): the typed REST client
//!
//! # Example
//!
//! ```rust,ignore
//! use academy_core::api::{ApiClient, ResourceClient};
//! use academy_core::{models::Package, resource::ResourceBackend, Config};
//!
//! let config = Config::from_env()?;
//! let api = ApiClient::from_config(&config)?.with_token(token);
//! let packages = ResourceClient::<Package>::new(api).list().await?;
//! ```

pub mod dashboard;
pub mod error;
pub mod manager;
pub mod models;
pub mod notify;
pub mod public;
pub mod registration;
pub mod resource;
pub mod session;

#[cfg(feature = "client")]
pub mod account;
#[cfg(feature = "client")]
pub mod api;
#[cfg(feature = "client")]
pub mod config;

pub use error::{ApiError, ValidationErrors};
pub use manager::{CrudManager, ManagerState};
pub use public::{ContactInfo, PublicData};
pub use notify::{Notification, NotificationKind, Notifications};
pub use resource::{AdminResource, FieldKind, FieldSpec, FieldValue, ResourceKind};

#[cfg(feature = "client")]
pub use config::Config;
