//! Generic field adapter shared by every input widget
//!
//! A `FieldBinding<V>` ties a widget to one named slot in the [`FormStore`]:
//! it reads the current value and error for rendering and turns widget
//! interaction into store writes. `V` is `String` for single-valued widgets
//! and `Vec<String>` for multi-valued ones.

use super::field::FieldValue;
use super::form_state::{FormError, FormStore};
use super::rules::{FieldError, ValidationRules};
use std::marker::PhantomData;

/// Rust-side value type a binding exposes to its widget
pub trait BindableValue: Clone + PartialEq {
    fn empty() -> Self;
    fn from_field(value: &FieldValue) -> Self;
    fn into_field(self) -> FieldValue;
}

impl BindableValue for String {
    fn empty() -> Self {
        String::new()
    }

    fn from_field(value: &FieldValue) -> Self {
        value.as_text().to_string()
    }

    fn into_field(self) -> FieldValue {
        FieldValue::Text(self)
    }
}

impl BindableValue for Vec<String> {
    fn empty() -> Self {
        Vec::new()
    }

    fn from_field(value: &FieldValue) -> Self {
        value.as_list().to_vec()
    }

    fn into_field(self) -> FieldValue {
        FieldValue::List(self)
    }
}

/// Registration parameters for a bound field
#[derive(Debug, Clone)]
pub struct FieldConfig<V> {
    pub name: String,
    pub default: V,
    pub rules: ValidationRules,
    pub disabled: bool,
}

impl<V: BindableValue> FieldConfig<V> {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            default: V::empty(),
            rules: ValidationRules::new(),
            disabled: false,
        }
    }

    #[allow(dead_code)]
    pub fn with_default(mut self, default: V) -> Self {
        self.default = default;
        self
    }

    pub fn with_rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Adapter between one widget and one store slot
#[derive(Debug, Clone)]
pub struct FieldBinding<V> {
    name: String,
    disabled: bool,
    _value: PhantomData<fn() -> V>,
}

impl<V: BindableValue> FieldBinding<V> {
    /// Register the field in the store and return its binding
    pub fn bind(store: &mut FormStore, config: FieldConfig<V>) -> Result<Self, FormError> {
        store.register(&config.name, config.default.into_field(), config.rules)?;
        Ok(Self {
            name: config.name,
            disabled: config.disabled,
            _value: PhantomData,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn value(&self, store: &FormStore) -> V {
        store
            .value(&self.name)
            .map(V::from_field)
            .unwrap_or_else(|_| V::empty())
    }

    #[allow(dead_code)]
    pub fn error<'s>(&self, store: &'s FormStore) -> Option<&'s FieldError> {
        store.error(&self.name)
    }

    /// Write a new value; returns false without touching the store when disabled
    pub fn on_change(&self, store: &mut FormStore, value: V) -> Result<bool, FormError> {
        if self.disabled {
            tracing::trace!(field = %self.name, "change ignored on disabled field");
            return Ok(false);
        }
        store.set_value(&self.name, value.into_field())?;
        Ok(true)
    }

    pub fn on_blur(&self, store: &mut FormStore) -> Result<(), FormError> {
        if self.disabled {
            return Ok(());
        }
        store.blur(&self.name)
    }
}

impl FieldBinding<Vec<String>> {
    /// Remove the option value if selected, append it otherwise
    pub fn toggle(&self, store: &mut FormStore, option_value: &str) -> Result<bool, FormError> {
        let next = toggle_value(&self.value(store), option_value);
        self.on_change(store, next)
    }
}

/// Membership toggle by value equality; removing an absent value is a no-op
pub fn toggle_value(current: &[String], option_value: &str) -> Vec<String> {
    if current.iter().any(|v| v == option_value) {
        current
            .iter()
            .filter(|v| v.as_str() != option_value)
            .cloned()
            .collect()
    } else {
        let mut next = current.to_vec();
        next.push(option_value.to_string());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::rules::Rule;
    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn roles(store: &mut FormStore) -> FieldBinding<Vec<String>> {
        FieldBinding::bind(
            store,
            FieldConfig::new("roles")
                .with_rules(ValidationRules::new().with(Rule::required("Pick a role"))),
        )
        .unwrap()
    }

    mod toggle {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_roles_example_sequence() {
            let mut store = FormStore::new();
            let binding = roles(&mut store);
            assert!(binding.value(&store).is_empty());

            binding.toggle(&mut store, "vip").unwrap();
            assert_eq!(binding.value(&store), strings(&["vip"]));
            binding.toggle(&mut store, "staff").unwrap();
            assert_eq!(binding.value(&store), strings(&["vip", "staff"]));
            binding.toggle(&mut store, "vip").unwrap();
            assert_eq!(binding.value(&store), strings(&["staff"]));
        }

        #[test]
        fn test_toggle_twice_restores_state() {
            let mut store = FormStore::new();
            let binding = roles(&mut store);
            binding
                .on_change(&mut store, strings(&["staff"]))
                .unwrap();
            binding.toggle(&mut store, "vip").unwrap();
            binding.toggle(&mut store, "vip").unwrap();
            assert_eq!(binding.value(&store), strings(&["staff"]));
        }

        #[test]
        fn test_toggle_value_removes_by_value() {
            let current = strings(&["a", "b", "c"]);
            assert_eq!(toggle_value(&current, "b"), strings(&["a", "c"]));
            assert_eq!(toggle_value(&current, "d"), strings(&["a", "b", "c", "d"]));
        }

        #[test]
        fn test_toggle_to_empty_surfaces_required_error() {
            let mut store = FormStore::new();
            let binding = roles(&mut store);
            binding.toggle(&mut store, "vip").unwrap();
            assert!(binding.error(&store).is_none());
            binding.toggle(&mut store, "vip").unwrap();
            assert_eq!(binding.error(&store).unwrap().message, "Pick a role");
        }

        #[test]
        fn test_on_change_rejects_repeated_entries() {
            let mut store = FormStore::new();
            let items: FieldBinding<Vec<String>> =
                FieldBinding::bind(&mut store, FieldConfig::new("items")).unwrap();
            items.on_change(&mut store, strings(&["2"])).unwrap();
            let err = items
                .on_change(&mut store, strings(&["1", "1"]))
                .unwrap_err();
            assert!(matches!(err, FormError::DuplicateValue { .. }));
            assert_eq!(items.value(&store), strings(&["2"]));
        }

        #[test]
        fn test_bind_rejects_repeated_default() {
            let mut store = FormStore::new();
            let err = FieldBinding::bind(
                &mut store,
                FieldConfig::new("roles").with_default(strings(&["vip", "vip"])),
            )
            .unwrap_err();
            assert_eq!(
                err,
                FormError::DuplicateValue {
                    name: "roles".to_string(),
                    value: "vip".to_string(),
                }
            );
            assert!(store.value("roles").is_err());
        }
    }

    mod single_value {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_on_change_replaces_value() {
            let mut store = FormStore::new();
            let binding: FieldBinding<String> =
                FieldBinding::bind(&mut store, FieldConfig::new("ageGroup")).unwrap();
            assert!(binding.on_change(&mut store, "adult".to_string()).unwrap());
            binding.on_change(&mut store, "child".to_string()).unwrap();
            assert_eq!(binding.value(&store), "child");
        }

        #[test]
        fn test_disabled_never_writes() {
            let mut store = FormStore::new();
            let binding: FieldBinding<String> = FieldBinding::bind(
                &mut store,
                FieldConfig::new("maritalStatus")
                    .with_default("single".to_string())
                    .disabled(true),
            )
            .unwrap();
            for _ in 0..5 {
                assert!(!binding.on_change(&mut store, "married".to_string()).unwrap());
            }
            binding.on_blur(&mut store).unwrap();
            assert_eq!(binding.value(&store), "single");
            assert!(!store.is_touched("maritalStatus").unwrap());
        }

        #[test]
        fn test_bind_twice_fails() {
            let mut store = FormStore::new();
            FieldBinding::<String>::bind(&mut store, FieldConfig::new("email")).unwrap();
            let err = FieldBinding::<String>::bind(&mut store, FieldConfig::new("email"))
                .unwrap_err();
            assert_eq!(err, FormError::DuplicateField("email".to_string()));
        }

        #[test]
        fn test_default_value_registered() {
            let mut store = FormStore::new();
            let binding = FieldBinding::bind(
                &mut store,
                FieldConfig::new("dropdown").with_default("2".to_string()),
            )
            .unwrap();
            assert_eq!(binding.value(&store), "2");
            assert!(!store.is_dirty("dropdown").unwrap());
        }
    }
}
