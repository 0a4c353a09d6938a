//! Reusable UI components

mod admin_layout;
mod admin_nav;
mod confirm_dialog;
mod field_input;
mod loading;
mod redirect;
mod resource_shell;
mod site_shell;
mod toasts;

pub use admin_layout::*;
pub use admin_nav::*;
pub use confirm_dialog::*;
pub use field_input::*;
pub use loading::*;
pub use redirect::*;
pub use resource_shell::*;
pub use site_shell::*;
pub use toasts::*;
