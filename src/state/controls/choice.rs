//! Radio and checkbox groups

use super::{cursor_next, cursor_prev, OptionLayout};
use crate::state::forms::{FieldBinding, FormError, FormStore, SelectOption};
use crossterm::event::{KeyCode, KeyEvent};

/// Movement and activation keys shared by option groups
enum ChoiceKey {
    Prev,
    Next,
    Activate,
}

fn choice_key(key: &KeyEvent) -> Option<ChoiceKey> {
    match key.code {
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') | KeyCode::Char('h') => {
            Some(ChoiceKey::Prev)
        }
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') | KeyCode::Char('l') => {
            Some(ChoiceKey::Next)
        }
        KeyCode::Char(' ') | KeyCode::Enter => Some(ChoiceKey::Activate),
        _ => None,
    }
}

/// Exclusive choice bound to a string slot
#[derive(Debug, Clone)]
pub struct RadioGroup {
    pub binding: FieldBinding<String>,
    pub label: String,
    pub options: Vec<SelectOption>,
    pub layout: OptionLayout,
    pub required_marker: bool,
    /// Highlighted option index
    pub cursor: usize,
}

impl RadioGroup {
    pub fn new(binding: FieldBinding<String>, label: &str, options: Vec<SelectOption>) -> Self {
        Self {
            binding,
            label: label.to_string(),
            options,
            layout: OptionLayout::Vertical,
            required_marker: false,
            cursor: 0,
        }
    }

    pub fn with_layout(mut self, layout: OptionLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn required_marker(mut self, required: bool) -> Self {
        self.required_marker = required;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.binding.is_disabled()
    }

    pub fn handle_key(&mut self, key: KeyEvent, store: &mut FormStore) -> Result<bool, FormError> {
        let Some(action) = choice_key(&key) else {
            return Ok(false);
        };
        // Disabled groups swallow activation and let movement reach the form
        if self.is_disabled() {
            return Ok(matches!(action, ChoiceKey::Activate));
        }
        match action {
            ChoiceKey::Prev => self.cursor = cursor_prev(self.cursor, self.options.len()),
            ChoiceKey::Next => self.cursor = cursor_next(self.cursor, self.options.len()),
            ChoiceKey::Activate => {
                if let Some(option) = self.options.get(self.cursor) {
                    self.binding.on_change(store, option.value.clone())?;
                }
            }
        }
        Ok(true)
    }
}

/// Multiple independent choices bound to a list slot
#[derive(Debug, Clone)]
pub struct CheckboxGroup {
    pub binding: FieldBinding<Vec<String>>,
    pub label: Option<String>,
    pub options: Vec<SelectOption>,
    pub layout: OptionLayout,
    pub cursor: usize,
}

impl CheckboxGroup {
    pub fn new(binding: FieldBinding<Vec<String>>, options: Vec<SelectOption>) -> Self {
        Self {
            binding,
            label: None,
            options,
            layout: OptionLayout::Vertical,
            cursor: 0,
        }
    }

    pub fn with_layout(mut self, layout: OptionLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn handle_key(&mut self, key: KeyEvent, store: &mut FormStore) -> Result<bool, FormError> {
        let Some(action) = choice_key(&key) else {
            return Ok(false);
        };
        match action {
            ChoiceKey::Prev => self.cursor = cursor_prev(self.cursor, self.options.len()),
            ChoiceKey::Next => self.cursor = cursor_next(self.cursor, self.options.len()),
            ChoiceKey::Activate => {
                if let Some(option) = self.options.get(self.cursor) {
                    self.binding.toggle(store, &option.value)?;
                }
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::{FieldConfig, Rule, ValidationRules};
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn age_options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("Adult", "adult"),
            SelectOption::new("Child", "child"),
            SelectOption::new("Infant", "infant"),
        ]
    }

    mod radio {
        use super::*;
        use pretty_assertions::assert_eq;

        fn radio(store: &mut FormStore, disabled: bool) -> RadioGroup {
            let binding = FieldBinding::bind(
                store,
                FieldConfig::new("ageGroup")
                    .with_rules(
                        ValidationRules::new().with(Rule::required("Please select an age group")),
                    )
                    .disabled(disabled),
            )
            .unwrap();
            RadioGroup::new(binding, "Age Group", age_options())
        }

        #[test]
        fn test_select_replaces_value() {
            let mut store = FormStore::new();
            let mut group = radio(&mut store, false);
            group.handle_key(key(KeyCode::Enter), &mut store).unwrap();
            assert_eq!(group.binding.value(&store), "adult");
            group.handle_key(key(KeyCode::Down), &mut store).unwrap();
            group.handle_key(key(KeyCode::Down), &mut store).unwrap();
            group.handle_key(key(KeyCode::Char(' ')), &mut store).unwrap();
            assert_eq!(group.binding.value(&store), "infant");
        }

        #[test]
        fn test_cursor_wraps_backwards() {
            let mut store = FormStore::new();
            let mut group = radio(&mut store, false);
            group.handle_key(key(KeyCode::Up), &mut store).unwrap();
            assert_eq!(group.cursor, 2);
        }

        #[test]
        fn test_disabled_ignores_every_interaction() {
            let mut store = FormStore::new();
            let mut group = radio(&mut store, true);
            for code in [KeyCode::Enter, KeyCode::Char(' ')] {
                for _ in 0..3 {
                    assert!(group.handle_key(key(code), &mut store).unwrap());
                }
            }
            assert_eq!(group.binding.value(&store), "");
            assert_eq!(group.cursor, 0);
            assert!(!store.is_dirty("ageGroup").unwrap());
        }

        #[test]
        fn test_disabled_passes_movement_through() {
            let mut store = FormStore::new();
            let mut group = radio(&mut store, true);
            for code in [KeyCode::Down, KeyCode::Up, KeyCode::Left, KeyCode::Char('j')] {
                assert!(!group.handle_key(key(code), &mut store).unwrap());
            }
            assert_eq!(group.cursor, 0);
            assert_eq!(group.binding.value(&store), "");
        }

        #[test]
        fn test_unrelated_key_not_consumed() {
            let mut store = FormStore::new();
            let mut group = radio(&mut store, false);
            assert!(!group.handle_key(key(KeyCode::Tab), &mut store).unwrap());
        }
    }

    mod checkbox {
        use super::*;
        use pretty_assertions::assert_eq;

        fn roles(store: &mut FormStore) -> CheckboxGroup {
            let binding = FieldBinding::bind(store, FieldConfig::new("roles")).unwrap();
            CheckboxGroup::new(
                binding,
                vec![SelectOption::new("VIP", "vip"), SelectOption::new("Staff", "staff")],
            )
            .with_layout(OptionLayout::Horizontal)
        }

        #[test]
        fn test_space_toggles_highlighted() {
            let mut store = FormStore::new();
            let mut group = roles(&mut store);
            group.handle_key(key(KeyCode::Char(' ')), &mut store).unwrap();
            group.handle_key(key(KeyCode::Right), &mut store).unwrap();
            group.handle_key(key(KeyCode::Char(' ')), &mut store).unwrap();
            assert_eq!(
                group.binding.value(&store),
                vec!["vip".to_string(), "staff".to_string()]
            );
            group.handle_key(key(KeyCode::Left), &mut store).unwrap();
            group.handle_key(key(KeyCode::Enter), &mut store).unwrap();
            assert_eq!(group.binding.value(&store), vec!["staff".to_string()]);
        }
    }
}
