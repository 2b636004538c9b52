//! Single-line text input control

use super::DEFAULT_ERROR_MESSAGE;
use crate::state::forms::{FieldBinding, FieldError, FormError, FormStore};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Text field bound to a string slot; every keystroke replaces the value
#[derive(Debug, Clone)]
pub struct TextInput {
    pub binding: FieldBinding<String>,
    pub label: String,
    pub placeholder: String,
    /// Mask the value when rendering (passwords)
    pub secure: bool,
    /// Show the required asterisk next to the label
    pub required_marker: bool,
    /// Shown when the error itself has no message
    pub error_message: Option<String>,
}

impl TextInput {
    pub fn new(binding: FieldBinding<String>, label: &str) -> Self {
        Self {
            binding,
            label: label.to_string(),
            placeholder: String::new(),
            secure: false,
            required_marker: false,
            error_message: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn secure(mut self) -> Self {
        self.secure = true;
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
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if !self.binding.value(store).is_empty() {
                    self.binding.on_change(store, String::new())?;
                }
                Ok(true)
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut value = self.binding.value(store);
                value.push(c);
                self.binding.on_change(store, value)?;
                Ok(true)
            }
            KeyCode::Backspace => {
                let mut value = self.binding.value(store);
                // Nothing to delete on an empty field
                if value.pop().is_some() {
                    self.binding.on_change(store, value)?;
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Rule message, then the caller's override, then a generic fallback
    pub fn display_error(&self, error: &FieldError) -> String {
        if !error.message.is_empty() {
            return error.message.clone();
        }
        self.error_message
            .clone()
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string())
    }

    /// Value as rendered, masked for secure entry
    pub fn display_value(&self, value: &str) -> String {
        if self.secure {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::{FieldConfig, Rule, RuleKind, ValidationRules};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn password(store: &mut FormStore) -> TextInput {
        let binding = FieldBinding::bind(
            store,
            FieldConfig::new("password").with_rules(
                ValidationRules::new()
                    .with(Rule::required("Password is required"))
                    .with(Rule::min_length(6, "Password must be at least 6 characters")),
            ),
        )
        .unwrap();
        TextInput::new(binding, "Password").secure()
    }

    #[test]
    fn test_each_keystroke_replaces_value() {
        let mut store = FormStore::new();
        let mut input = password(&mut store);
        for c in "abc".chars() {
            assert!(input.handle_key(key(KeyCode::Char(c)), &mut store).unwrap());
        }
        assert_eq!(input.binding.value(&store), "abc");
        assert_eq!(
            input.binding.error(&store).unwrap().kind,
            RuleKind::MinLength
        );

        input.handle_key(key(KeyCode::Backspace), &mut store).unwrap();
        assert_eq!(input.binding.value(&store), "ab");
    }

    #[test]
    fn test_editing_keys_on_empty_field_leave_it_pristine() {
        let mut store = FormStore::new();
        let mut input = password(&mut store);
        assert!(input.handle_key(key(KeyCode::Backspace), &mut store).unwrap());
        assert!(input
            .handle_key(
                KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
                &mut store,
            )
            .unwrap());
        assert!(input.binding.error(&store).is_none());
        assert!(!store.is_dirty("password").unwrap());
    }

    #[test]
    fn test_error_clears_once_rules_pass() {
        let mut store = FormStore::new();
        let mut input = password(&mut store);
        for c in "secret".chars() {
            input.handle_key(key(KeyCode::Char(c)), &mut store).unwrap();
        }
        assert!(input.binding.error(&store).is_none());
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut store = FormStore::new();
        let mut input = password(&mut store);
        input.handle_key(key(KeyCode::Char('x')), &mut store).unwrap();
        input
            .handle_key(
                KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
                &mut store,
            )
            .unwrap();
        assert_eq!(input.binding.value(&store), "");
        assert_eq!(
            input.binding.error(&store).unwrap().message,
            "Password is required"
        );
    }

    #[test]
    fn test_other_control_chords_pass_through() {
        let mut store = FormStore::new();
        let mut input = password(&mut store);
        let consumed = input
            .handle_key(
                KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
                &mut store,
            )
            .unwrap();
        assert!(!consumed);
        assert_eq!(input.binding.value(&store), "");
    }

    #[test]
    fn test_secure_display_masks() {
        let mut store = FormStore::new();
        let input = password(&mut store);
        assert_eq!(input.display_value("abc"), "•••");
    }

    #[test]
    fn test_display_error_fallbacks() {
        let mut store = FormStore::new();
        let input = password(&mut store);
        let empty = FieldError::new(RuleKind::Required, "");
        assert_eq!(input.display_error(&empty), DEFAULT_ERROR_MESSAGE);
        let input = input.with_error_message("Custom");
        assert_eq!(input.display_error(&empty), "Custom");
    }
}
