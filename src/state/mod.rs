//! Application state module

mod app_state;
pub mod controls;
pub mod forms;
mod registration;

pub use app_state::*;
pub use registration::build_registration_form;
