//! Single- and multi-select dropdown controls

use super::{cursor_next, cursor_prev};
use crate::state::forms::{toggle_value, FieldBinding, FormError, FormStore, SelectOption};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Default number of list rows shown while open
pub const DEFAULT_MAX_HEIGHT: u16 = 6;

/// Open/closed state, search query and highlight of a dropdown list
#[derive(Debug, Clone, Default)]
pub struct DropdownState {
    open: bool,
    query: String,
    highlighted: usize,
}

impl DropdownState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn open_at(&mut self, highlighted: usize) {
        self.open = true;
        self.query.clear();
        self.highlighted = highlighted;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.highlighted = 0;
    }

    pub fn move_next(&mut self, len: usize) {
        self.highlighted = cursor_next(self.highlighted, len);
    }

    pub fn move_prev(&mut self, len: usize) {
        self.highlighted = cursor_prev(self.highlighted, len);
    }

    pub fn push_query(&mut self, c: char) {
        self.query.push(c);
        self.highlighted = 0;
    }

    pub fn pop_query(&mut self) {
        self.query.pop();
        self.highlighted = 0;
    }

    /// Options whose label contains the query, case-insensitively
    pub fn filtered<'a>(&self, options: &'a [SelectOption]) -> Vec<&'a SelectOption> {
        if self.query.is_empty() {
            return options.iter().collect();
        }
        let needle = self.query.to_lowercase();
        options
            .iter()
            .filter(|o| o.label.to_lowercase().contains(&needle))
            .collect()
    }

    fn highlighted_value(&self, options: &[SelectOption]) -> Option<String> {
        self.filtered(options)
            .get(self.highlighted)
            .map(|o| o.value.clone())
    }
}

fn is_plain_char(key: &KeyEvent) -> bool {
    !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Dropdown picking one option into a string slot
#[derive(Debug, Clone)]
pub struct SingleSelect {
    pub binding: FieldBinding<String>,
    pub label: Option<String>,
    pub options: Vec<SelectOption>,
    pub placeholder: String,
    pub search_placeholder: String,
    pub searchable: bool,
    pub max_height: u16,
    pub required_marker: bool,
    /// Replaces the rule message when set
    pub error_message: Option<String>,
    pub dropdown: DropdownState,
}

impl SingleSelect {
    pub fn new(binding: FieldBinding<String>, options: Vec<SelectOption>) -> Self {
        Self {
            binding,
            label: None,
            options,
            placeholder: "Select item".to_string(),
            search_placeholder: "Search...".to_string(),
            searchable: false,
            max_height: DEFAULT_MAX_HEIGHT,
            required_marker: false,
            error_message: None,
            dropdown: DropdownState::default(),
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub fn with_max_height(mut self, rows: u16) -> Self {
        self.max_height = rows.max(1);
        self
    }

    pub fn required_marker(mut self, required: bool) -> Self {
        self.required_marker = required;
        self
    }

    #[allow(dead_code)]
    pub fn with_error_message(mut self, message: &str) -> Self {
        self.error_message = Some(message.to_string());
        self
    }

    pub fn handle_key(&mut self, key: KeyEvent, store: &mut FormStore) -> Result<bool, FormError> {
        if !self.dropdown.is_open() {
            return Ok(match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                    let current = self.binding.value(store);
                    let at = self
                        .options
                        .iter()
                        .position(|o| o.value == current)
                        .unwrap_or(0);
                    self.dropdown.open_at(at);
                    true
                }
                _ => false,
            });
        }

        let len = self.dropdown.filtered(&self.options).len();
        match key.code {
            KeyCode::Esc => self.dropdown.close(),
            KeyCode::Up => self.dropdown.move_prev(len),
            KeyCode::Down => self.dropdown.move_next(len),
            KeyCode::Enter => {
                if let Some(value) = self.dropdown.highlighted_value(&self.options) {
                    self.binding.on_change(store, value)?;
                }
                self.dropdown.close();
            }
            KeyCode::Backspace if self.searchable => self.dropdown.pop_query(),
            KeyCode::Char(c) if self.searchable && is_plain_char(&key) => {
                self.dropdown.push_query(c)
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Dropdown reporting a whole selection into a list slot
#[derive(Debug, Clone)]
pub struct MultiSelect {
    pub binding: FieldBinding<Vec<String>>,
    pub label: Option<String>,
    pub options: Vec<SelectOption>,
    pub placeholder: String,
    pub max_height: u16,
    pub required_marker: bool,
    pub error_message: Option<String>,
    pub dropdown: DropdownState,
}

impl MultiSelect {
    pub fn new(binding: FieldBinding<Vec<String>>, options: Vec<SelectOption>) -> Self {
        Self {
            binding,
            label: None,
            options,
            placeholder: "Select items".to_string(),
            max_height: DEFAULT_MAX_HEIGHT,
            required_marker: false,
            error_message: None,
            dropdown: DropdownState::default(),
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn required_marker(mut self, required: bool) -> Self {
        self.required_marker = required;
        self
    }

    #[allow(dead_code)]
    pub fn with_error_message(mut self, message: &str) -> Self {
        self.error_message = Some(message.to_string());
        self
    }

    /// The selection the widget would report after toggling the highlight
    fn reported_selection(&self, store: &FormStore) -> Option<Vec<String>> {
        let value = self.dropdown.highlighted_value(&self.options)?;
        Some(toggle_value(&self.binding.value(store), &value))
    }

    pub fn handle_key(&mut self, key: KeyEvent, store: &mut FormStore) -> Result<bool, FormError> {
        if !self.dropdown.is_open() {
            return Ok(match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                    self.dropdown.open_at(0);
                    true
                }
                _ => false,
            });
        }

        let len = self.dropdown.filtered(&self.options).len();
        match key.code {
            KeyCode::Esc => self.dropdown.close(),
            KeyCode::Up => self.dropdown.move_prev(len),
            KeyCode::Down => self.dropdown.move_next(len),
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_highlighted(store)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn toggle_highlighted(&mut self, store: &mut FormStore) -> Result<(), FormError> {
        if let Some(selection) = self.reported_selection(store) {
            self.binding.on_change(store, selection)?;
        }
        Ok(())
    }
}
