//! Records mirrored from the backend
//!
//! Field names follow the backend's camelCase JSON. Nullable text columns
//! deserialize to empty strings so forms never have to juggle `Option`.

mod application;
mod category;
mod faq;
mod package;
mod profile;
mod site_content;
mod teacher;
mod testimonial;

pub mod delimited;

pub use application::*;
pub use category::*;
pub use faq::*;
pub use package::*;
pub use profile::*;
pub use site_content::*;
pub use teacher::*;
pub use testimonial::*;

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's default value.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Sort records by their display order, keeping backend order for ties.
pub fn by_display_order<T>(mut items: Vec<T>, order: impl Fn(&T) -> i32) -> Vec<T> {
    items.sort_by_key(|item| order(item));
    items
}
