//! Admin pages

mod dashboard;
mod login;
mod profile;
mod resources;
mod site_content;

pub use dashboard::*;
pub use login::*;
pub use profile::*;
pub use resources::*;
pub use site_content::*;
