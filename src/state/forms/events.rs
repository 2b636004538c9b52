//! Field-scoped change notifications

use std::cell::Cell;
use std::rc::Rc;

/// What changed on a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEventKind {
    ValueChanged,
    ErrorChanged,
    Reset,
}

/// Published by the store to the listeners of one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEvent {
    pub field: String,
    pub kind: FieldEventKind,
}

impl FieldEvent {
    pub fn new(field: &str, kind: FieldEventKind) -> Self {
        Self {
            field: field.to_string(),
            kind,
        }
    }
}

/// Handle returned by `FormStore::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Receives events for the field it subscribed to
#[cfg_attr(test, mockall::automock)]
pub trait FieldListener {
    fn on_event(&mut self, event: &FieldEvent);
}

/// Listener that raises a shared flag so the run loop knows to redraw
#[derive(Debug, Clone, Default)]
pub struct RedrawFlag(Rc<Cell<bool>>);

impl RedrawFlag {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn raise(&self) {
        self.0.set(true);
    }

    /// Returns whether a redraw was requested and clears the flag
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}

impl FieldListener for RedrawFlag {
    fn on_event(&mut self, event: &FieldEvent) {
        tracing::trace!(field = %event.field, kind = ?event.kind, "redraw requested");
        self.raise();
    }
}
