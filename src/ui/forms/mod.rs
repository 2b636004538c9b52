//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: per-control drawing (text, radio, checkbox, dropdowns)
//! - `dropdown_list`: the list overlay of an open dropdown
//! - `registration_form`: the registration screen

mod dropdown_list;
mod field_renderer;
mod registration_form;

pub use registration_form::draw as draw_registration;
