//! Admin session handling
//!
//! The backend issues a signed JWT at login. The site never verifies the
//! signature (the backend does that on every call); it only reads the role
//! and expiry claims to decide whether to show the admin area.

mod claims;
mod entry;
mod guard;
mod store;

pub use claims::*;
pub use entry::EntryCheck;
pub use guard::*;
pub use store::*;
