//! Form store: values, errors and validation lifecycle for one mounted form

use super::events::{FieldEvent, FieldEventKind, FieldListener, SubscriptionId};
use super::field::{FieldValue, FormValues, ValueKind};
use super::rules::{FieldError, ValidationRules};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Errors from addressing the store incorrectly
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("field `{0}` is already registered")]
    DuplicateField(String),
    #[error("field `{0}` is not registered")]
    UnknownField(String),
    #[error("field `{name}` holds {expected} values, got {found}")]
    ValueKindMismatch {
        name: String,
        expected: ValueKind,
        found: ValueKind,
    },
    #[error("field `{name}` already holds `{value}`")]
    DuplicateValue { name: String, value: String },
}

/// Returned by `FormStore::submit` when any field fails validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct SubmitErrors {
    errors: Vec<(String, FieldError)>,
}

impl SubmitErrors {
    #[allow(dead_code)]
    pub fn get(&self, name: &str) -> Option<&FieldError> {
        self.errors.iter().find(|(n, _)| n == name).map(|(_, e)| e)
    }

    /// First failing field in registration order
    pub fn first_field(&self) -> Option<&str> {
        self.errors.first().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.errors.iter().map(|(n, e)| (n.as_str(), e))
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

/// When field rules run outside of submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationMode {
    OnSubmit,
    OnBlur,
    #[default]
    OnChange,
    /// First on blur, then on every change once touched
    OnTouched,
    All,
}

/// Lifecycle of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Unset,
    Valid,
    Invalid,
}

#[derive(Debug)]
struct FieldSlot {
    name: String,
    default: FieldValue,
    value: FieldValue,
    rules: ValidationRules,
    error: Option<FieldError>,
    touched: bool,
    validated: bool,
}

struct Subscription {
    id: SubscriptionId,
    field: String,
    listener: Box<dyn FieldListener>,
}

/// Holds every field of one form instance
pub struct FormStore {
    fields: Vec<FieldSlot>,
    index: HashMap<String, usize>,
    mode: ValidationMode,
    revalidate_mode: ValidationMode,
    submit_count: u32,
    subscriptions: Vec<Subscription>,
    next_subscription: u64,
}

impl fmt::Debug for FormStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormStore")
            .field("fields", &self.fields)
            .field("mode", &self.mode)
            .field("revalidate_mode", &self.revalidate_mode)
            .field("submit_count", &self.submit_count)
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FormStore {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            index: HashMap::new(),
            mode: ValidationMode::default(),
            revalidate_mode: ValidationMode::default(),
            submit_count: 0,
            subscriptions: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Validation mode used before the first submission
    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Validation mode used after the first submission
    pub fn with_revalidate_mode(mut self, mode: ValidationMode) -> Self {
        self.revalidate_mode = mode;
        self
    }

    /// Register a field with its default value and rules
    pub fn register(
        &mut self,
        name: &str,
        default: FieldValue,
        rules: ValidationRules,
    ) -> Result<(), FormError> {
        if self.index.contains_key(name) {
            return Err(FormError::DuplicateField(name.to_string()));
        }
        check_unique(name, &default)?;
        tracing::debug!(field = name, kind = %default.kind(), "registering field");
        self.index.insert(name.to_string(), self.fields.len());
        self.fields.push(FieldSlot {
            name: name.to_string(),
            value: default.clone(),
            default,
            rules,
            error: None,
            touched: false,
            validated: false,
        });
        Ok(())
    }

    fn slot_index(&self, name: &str) -> Result<usize, FormError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    fn slot(&self, name: &str) -> Result<&FieldSlot, FormError> {
        self.slot_index(name).map(|idx| &self.fields[idx])
    }

    #[allow(dead_code)]
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn value(&self, name: &str) -> Result<&FieldValue, FormError> {
        self.slot(name).map(|s| &s.value)
    }

    /// Current error; `None` for valid, unvalidated and unknown fields alike
    pub fn error(&self, name: &str) -> Option<&FieldError> {
        self.slot(name).ok().and_then(|s| s.error.as_ref())
    }

    #[allow(dead_code)]
    pub fn status(&self, name: &str) -> Result<FieldStatus, FormError> {
        let slot = self.slot(name)?;
        Ok(match (slot.validated, &slot.error) {
            (false, _) => FieldStatus::Unset,
            (true, None) => FieldStatus::Valid,
            (true, Some(_)) => FieldStatus::Invalid,
        })
    }

    #[allow(dead_code)]
    pub fn is_dirty(&self, name: &str) -> Result<bool, FormError> {
        self.slot(name).map(|s| s.value != s.default)
    }

    #[allow(dead_code)]
    pub fn is_touched(&self, name: &str) -> Result<bool, FormError> {
        self.slot(name).map(|s| s.touched)
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    fn active_mode(&self) -> ValidationMode {
        if self.submit_count > 0 {
            self.revalidate_mode
        } else {
            self.mode
        }
    }

    /// Write a value and re-run the field's rules as the active mode dictates
    pub fn set_value(&mut self, name: &str, value: FieldValue) -> Result<(), FormError> {
        let idx = self.slot_index(name)?;
        let slot = &mut self.fields[idx];
        let expected = slot.default.kind();
        if value.kind() != expected {
            return Err(FormError::ValueKindMismatch {
                name: name.to_string(),
                expected,
                found: value.kind(),
            });
        }
        check_unique(name, &value)?;

        if slot.value != value {
            slot.value = value;
            tracing::trace!(field = name, "value changed");
            self.publish(idx, FieldEventKind::ValueChanged);
        }

        let validate = match self.active_mode() {
            ValidationMode::OnChange | ValidationMode::All => true,
            ValidationMode::OnTouched => self.fields[idx].touched,
            ValidationMode::OnBlur | ValidationMode::OnSubmit => false,
        };
        if validate {
            self.run_validation(idx);
        }
        Ok(())
    }

    /// Mark the field touched and validate if the active mode asks for it
    pub fn blur(&mut self, name: &str) -> Result<(), FormError> {
        let idx = self.slot_index(name)?;
        self.fields[idx].touched = true;
        let validate = matches!(
            self.active_mode(),
            ValidationMode::OnBlur | ValidationMode::OnTouched | ValidationMode::All
        );
        if validate {
            self.run_validation(idx);
        }
        Ok(())
    }

    /// Re-run one field's rules now, regardless of mode
    #[allow(dead_code)]
    pub fn validate(&mut self, name: &str) -> Result<Option<FieldError>, FormError> {
        let idx = self.slot_index(name)?;
        Ok(self.run_validation(idx))
    }

    fn run_validation(&mut self, idx: usize) -> Option<FieldError> {
        let slot = &mut self.fields[idx];
        let result = slot.rules.evaluate(&slot.value);
        slot.validated = true;
        if slot.error != result {
            match &result {
                Some(err) => {
                    tracing::debug!(field = %slot.name, rule = %err.kind, "field invalid")
                }
                None => tracing::debug!(field = %slot.name, "field error cleared"),
            }
            slot.error = result.clone();
            self.publish(idx, FieldEventKind::ErrorChanged);
        }
        result
    }

    /// Validate every field; values are handed out only when all pass
    pub fn submit(&mut self) -> Result<FormValues, SubmitErrors> {
        self.submit_count += 1;
        let mut errors = Vec::new();
        for idx in 0..self.fields.len() {
            if let Some(err) = self.run_validation(idx) {
                errors.push((self.fields[idx].name.clone(), err));
            }
        }

        if errors.is_empty() {
            tracing::info!(submit_count = self.submit_count, "form submitted");
            Ok(self.values())
        } else {
            tracing::info!(
                submit_count = self.submit_count,
                failed = errors.len(),
                "form submission blocked"
            );
            Err(SubmitErrors { errors })
        }
    }

    pub fn values(&self) -> FormValues {
        FormValues::new(
            self.fields
                .iter()
                .map(|f| (f.name.clone(), f.value.clone()))
                .collect(),
        )
    }

    /// Restore defaults and forget errors, touched state and submissions
    pub fn reset(&mut self) {
        self.submit_count = 0;
        for idx in 0..self.fields.len() {
            let slot = &mut self.fields[idx];
            let changed = slot.value != slot.default || slot.error.is_some();
            slot.value = slot.default.clone();
            slot.error = None;
            slot.touched = false;
            slot.validated = false;
            if changed {
                self.publish(idx, FieldEventKind::Reset);
            }
        }
        tracing::debug!("form reset");
    }

    /// Listen to events for a single field
    pub fn subscribe(
        &mut self,
        name: &str,
        listener: Box<dyn FieldListener>,
    ) -> Result<SubscriptionId, FormError> {
        self.slot_index(name)?;
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscriptions.push(Subscription {
            id,
            field: name.to_string(),
            listener,
        });
        Ok(id)
    }

    /// Returns false if the subscription was already gone
    #[allow(dead_code)]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    fn publish(&mut self, idx: usize, kind: FieldEventKind) {
        let event = FieldEvent::new(&self.fields[idx].name, kind);
        for sub in self
            .subscriptions
            .iter_mut()
            .filter(|s| s.field == event.field)
        {
            sub.listener.on_event(&event);
        }
    }
}

/// List values never hold the same option twice
fn check_unique(name: &str, value: &FieldValue) -> Result<(), FormError> {
    match value.first_duplicate() {
        Some(dup) => Err(FormError::DuplicateValue {
            name: name.to_string(),
            value: dup.to_string(),
        }),
        None => Ok(()),
    }
}
