//! Application state definitions

use super::controls::FormControl;
use super::forms::{FormError, FormStore, RedrawFlag, SubmitErrors};
use chrono::{DateTime, Local};

/// A successful submission kept for display and copying
#[derive(Debug, Clone)]
pub struct Submission {
    pub json: String,
    pub submitted_at: DateTime<Local>,
}

/// Result of pressing submit
#[derive(Debug)]
pub enum SubmitOutcome {
    Accepted(Submission),
    Rejected(SubmitErrors),
}

/// Screen state: the store, its controls and focus
#[derive(Debug)]
pub struct AppState {
    pub store: FormStore,
    pub controls: Vec<FormControl>,
    /// Index into `controls`; `controls.len()` is the submit button
    pub active_form_field: usize,
    pub last_submission: Option<Submission>,
    /// Whether the submission dialog is showing
    pub show_submission: bool,
    pub redraw: RedrawFlag,
}

impl AppState {
    /// Wrap a store and its controls, subscribing each control's field for redraws
    pub fn new(mut store: FormStore, controls: Vec<FormControl>) -> Result<Self, FormError> {
        let redraw = RedrawFlag::new();
        for control in &controls {
            store.subscribe(control.name(), Box::new(redraw.clone()))?;
        }
        Ok(Self {
            store,
            controls,
            active_form_field: 0,
            last_submission: None,
            show_submission: false,
            redraw,
        })
    }

    /// Number of focus stops (controls plus the submit button)
    pub fn focus_count(&self) -> usize {
        self.controls.len() + 1
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_form_field == self.controls.len()
    }

    pub fn active_control(&self) -> Option<&FormControl> {
        self.controls.get(self.active_form_field)
    }

    /// Move focus, blurring the control being left
    pub fn focus(&mut self, index: usize) -> Result<(), FormError> {
        let index = index.min(self.controls.len());
        if index == self.active_form_field {
            return Ok(());
        }
        if let Some(control) = self.controls.get_mut(self.active_form_field) {
            control.blur(&mut self.store)?;
        }
        self.active_form_field = index;
        self.redraw.raise();
        Ok(())
    }

    pub fn next_form_field(&mut self) -> Result<(), FormError> {
        self.focus((self.active_form_field + 1) % self.focus_count())
    }

    pub fn prev_form_field(&mut self) -> Result<(), FormError> {
        let count = self.focus_count();
        self.focus((self.active_form_field + count - 1) % count)
    }

    /// Validate everything; on failure focus the first invalid field
    pub fn submit(&mut self) -> Result<SubmitOutcome, FormError> {
        if let Some(control) = self.controls.get_mut(self.active_form_field) {
            control.blur(&mut self.store)?;
        }
        self.redraw.raise();
        match self.store.submit() {
            Ok(values) => {
                let json = values
                    .to_pretty_json()
                    .unwrap_or_else(|_| format!("{values:?}"));
                let submission = Submission {
                    json,
                    submitted_at: Local::now(),
                };
                self.last_submission = Some(submission.clone());
                self.show_submission = true;
                Ok(SubmitOutcome::Accepted(submission))
            }
            Err(errors) => {
                if let Some(first) = errors.first_field() {
                    if let Some(idx) = self.controls.iter().position(|c| c.name() == first) {
                        self.active_form_field = idx;
                    }
                }
                Ok(SubmitOutcome::Rejected(errors))
            }
        }
    }

    /// Restore defaults and start over at the first field
    pub fn reset_form(&mut self) {
        self.store.reset();
        for control in &mut self.controls {
            if let FormControl::Select(c) = control {
                c.dropdown.close();
            } else if let FormControl::MultiSelect(c) = control {
                c.dropdown.close();
            }
        }
        self.active_form_field = 0;
        self.show_submission = false;
        self.redraw.raise();
    }
}
