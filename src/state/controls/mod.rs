//! Interactive form controls
//!
//! Each control owns a `FieldBinding` plus transient UI state (highlight
//! cursor, dropdown open/closed, search query). Values always come from the
//! store, never from a cached copy.

mod choice;
mod dropdown;
mod text_input;

pub use choice::{CheckboxGroup, RadioGroup};
pub use dropdown::{DropdownState, MultiSelect, SingleSelect};
pub use text_input::TextInput;

use crate::state::forms::{FieldError, FormError, FormStore};
use crossterm::event::KeyEvent;

/// Direction option rows are laid out in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionLayout {
    #[default]
    Vertical,
    Horizontal,
}

/// Fallback text when a text field error carries no message
pub const DEFAULT_ERROR_MESSAGE: &str = "This field is required";

/// Enum over every control kind on a form
#[derive(Debug, Clone)]
pub enum FormControl {
    Text(TextInput),
    Radio(RadioGroup),
    Select(SingleSelect),
    MultiSelect(MultiSelect),
    Checkbox(CheckboxGroup),
}

impl FormControl {
    pub fn name(&self) -> &str {
        match self {
            FormControl::Text(c) => c.binding.name(),
            FormControl::Radio(c) => c.binding.name(),
            FormControl::Select(c) => c.binding.name(),
            FormControl::MultiSelect(c) => c.binding.name(),
            FormControl::Checkbox(c) => c.binding.name(),
        }
    }

    /// Route a key to the control; returns whether it was consumed
    pub fn handle_key(&mut self, key: KeyEvent, store: &mut FormStore) -> Result<bool, FormError> {
        match self {
            FormControl::Text(c) => c.handle_key(key, store),
            FormControl::Radio(c) => c.handle_key(key, store),
            FormControl::Select(c) => c.handle_key(key, store),
            FormControl::MultiSelect(c) => c.handle_key(key, store),
            FormControl::Checkbox(c) => c.handle_key(key, store),
        }
    }

    /// Focus is leaving the control
    pub fn blur(&mut self, store: &mut FormStore) -> Result<(), FormError> {
        match self {
            FormControl::Text(c) => c.binding.on_blur(store),
            FormControl::Radio(c) => c.binding.on_blur(store),
            FormControl::Select(c) => {
                c.dropdown.close();
                c.binding.on_blur(store)
            }
            FormControl::MultiSelect(c) => {
                c.dropdown.close();
                c.binding.on_blur(store)
            }
            FormControl::Checkbox(c) => c.binding.on_blur(store),
        }
    }

    /// True while a dropdown list is showing
    pub fn is_expanded(&self) -> bool {
        match self {
            FormControl::Select(c) => c.dropdown.is_open(),
            FormControl::MultiSelect(c) => c.dropdown.is_open(),
            _ => false,
        }
    }

    /// Error text as this control displays it
    pub fn error_text(&self, store: &FormStore) -> Option<String> {
        let error = store.error(self.name())?;
        Some(match self {
            FormControl::Text(c) => c.display_error(error),
            FormControl::Select(c) => prefer_override(c.error_message.as_deref(), error),
            FormControl::MultiSelect(c) => prefer_override(c.error_message.as_deref(), error),
            FormControl::Radio(_) | FormControl::Checkbox(_) => error.message.clone(),
        })
    }
}

fn prefer_override(message: Option<&str>, error: &FieldError) -> String {
    message
        .map(str::to_string)
        .unwrap_or_else(|| error.message.clone())
}

/// Step a highlight cursor forward, wrapping at `len`
pub(crate) fn cursor_next(cursor: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (cursor + 1) % len
    }
}

/// Step a highlight cursor backward, wrapping at `len`
pub(crate) fn cursor_prev(cursor: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if cursor == 0 {
        len - 1
    } else {
        cursor - 1
    }
}
