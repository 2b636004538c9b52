//! Per-field validation rules

use super::field::FieldValue;
use regex::Regex;
use std::fmt;
use thiserror::Error;

/// Which constraint produced a field error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Required,
    Pattern,
    MinLength,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Required => f.write_str("required"),
            RuleKind::Pattern => f.write_str("pattern"),
            RuleKind::MinLength => f.write_str("minLength"),
        }
    }
}

/// A violated rule and the message to show beneath the field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub kind: RuleKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Error building a rule
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A single named constraint
#[derive(Debug, Clone)]
pub enum Rule {
    /// Fails on an empty string or an empty list
    Required { message: String },
    /// Text must match; skipped while empty
    Pattern { regex: Regex, message: String },
    /// Text must have at least `len` characters; skipped while empty
    MinLength { len: usize, message: String },
}

impl Rule {
    pub fn required(message: &str) -> Self {
        Rule::Required {
            message: message.to_string(),
        }
    }

    pub fn pattern(pattern: &str, message: &str) -> Result<Self, RuleError> {
        let regex = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Rule::Pattern {
            regex,
            message: message.to_string(),
        })
    }

    pub fn min_length(len: usize, message: &str) -> Self {
        Rule::MinLength {
            len,
            message: message.to_string(),
        }
    }

    /// Check the rule against a value, returning the error when violated
    pub fn check(&self, value: &FieldValue) -> Option<FieldError> {
        match self {
            Rule::Required { message } => value
                .is_empty()
                .then(|| FieldError::new(RuleKind::Required, message.clone())),
            Rule::Pattern { regex, message } => match value {
                FieldValue::Text(s) if !s.is_empty() && !regex.is_match(s) => {
                    Some(FieldError::new(RuleKind::Pattern, message.clone()))
                }
                _ => None,
            },
            Rule::MinLength { len, message } => match value {
                FieldValue::Text(s) if !s.is_empty() && s.chars().count() < *len => {
                    Some(FieldError::new(RuleKind::MinLength, message.clone()))
                }
                _ => None,
            },
        }
    }
}

/// Ordered rule set for one field; evaluation stops at the first violation
#[derive(Debug, Clone, Default)]
pub struct ValidationRules {
    rules: Vec<Rule>,
}

impl ValidationRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn evaluate(&self, value: &FieldValue) -> Option<FieldError> {
        self.rules.iter().find_map(|rule| rule.check(value))
    }
}

impl From<Vec<Rule>> for ValidationRules {
    fn from(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}
