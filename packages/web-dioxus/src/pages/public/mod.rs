//! Public-facing pages

mod about;
mod contact;
mod faq;
mod home;
mod not_found;
mod packages;
mod register;
mod sections;
mod testimonials;

pub use about::*;
pub use contact::*;
pub use faq::*;
pub use home::*;
pub use not_found::*;
pub use packages::*;
pub use register::*;
pub use testimonials::*;
