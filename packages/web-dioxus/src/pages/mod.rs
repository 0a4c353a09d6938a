//! Page components, one per route

pub mod admin;
pub mod public;
