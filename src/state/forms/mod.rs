//! Form domain layer
//!
//! Field values, validation rules, the form store and the generic
//! `FieldBinding` adapter every widget goes through.

mod binding;
mod events;
mod field;
mod form_state;
mod rules;

pub use binding::{toggle_value, FieldBinding, FieldConfig};
pub use events::RedrawFlag;
pub use field::{label_for, FieldValue, SelectOption};
pub use form_state::{FormError, FormStore, SubmitErrors, ValidationMode};
pub use rules::{FieldError, Rule, RuleKind, ValidationRules};
