//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::{COPY_MODIFIER, SUBMIT_SHORTCUT};
use crate::state::forms::FormStore;
use crate::state::{build_registration_form, AppState, SubmitOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One-line feedback shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
    /// Feedback from the last action
    pub status_message: Option<StatusMessage>,
}

impl App {
    /// Create the registration screen with the configured validation modes
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let mut store = FormStore::new()
            .with_mode(config.validation_mode())
            .with_revalidate_mode(config.revalidate_mode());
        let controls = build_registration_form(&mut store)?;
        tracing::debug!(
            "Registration form ready with {} fields ({:?}/{:?})",
            controls.len(),
            config.validation_mode(),
            config.revalidate_mode()
        );

        Ok(Self {
            state: AppState::new(store, controls)?,
            quit: false,
            status_message: None,
        })
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Submission dialog is modal
        if self.state.show_submission {
            self.handle_submission_dialog_key(key);
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('s') if ctrl => return self.submit(),
            KeyCode::Char('r') if ctrl => {
                self.state.reset_form();
                tracing::info!("Form reset");
                self.set_status("Form reset", false);
                return Ok(());
            }
            KeyCode::Char('y') if Self::is_copy_key(key) => {
                self.copy_submission();
                return Ok(());
            }
            KeyCode::Tab => {
                self.state.next_form_field()?;
                return Ok(());
            }
            KeyCode::BackTab => {
                self.state.prev_form_field()?;
                return Ok(());
            }
            _ => {}
        }

        if self.state.is_submit_active() {
            return self.handle_submit_button_key(key);
        }
        self.handle_control_key(key)
    }

    fn handle_submission_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.state.show_submission = false;
                self.state.redraw.raise();
            }
            KeyCode::Char('y') if Self::is_copy_key(key) => self.copy_submission(),
            _ => {}
        }
    }

    fn handle_submit_button_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.submit()?,
            KeyCode::Up => self.state.prev_form_field()?,
            KeyCode::Down => self.state.next_form_field()?,
            KeyCode::Esc => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Route a key to the focused control; keys it ignores fall back to navigation
    fn handle_control_key(&mut self, key: KeyEvent) -> Result<()> {
        let AppState {
            store,
            controls,
            active_form_field,
            ..
        } = &mut self.state;
        let Some(control) = controls.get_mut(*active_form_field) else {
            return Ok(());
        };
        if control.handle_key(key, store)? {
            return Ok(());
        }

        match key.code {
            KeyCode::Enter | KeyCode::Down => self.state.next_form_field()?,
            KeyCode::Up => self.state.prev_form_field()?,
            KeyCode::Esc => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    fn submit(&mut self) -> Result<()> {
        match self.state.submit()? {
            SubmitOutcome::Accepted(submission) => {
                tracing::info!("Form Data {}", submission.json);
                self.set_status("Form submitted", false);
            }
            SubmitOutcome::Rejected(errors) => {
                for (field, error) in errors.iter() {
                    tracing::debug!("{field}: {} ({})", error.message, error.kind);
                }
                self.set_status(
                    &format!("{errors}, fix and press {SUBMIT_SHORTCUT}"),
                    true,
                );
            }
        }
        Ok(())
    }

    /// Copy the last submission's JSON to the system clipboard
    fn copy_submission(&mut self) {
        let Some(json) = self.state.last_submission.as_ref().map(|s| s.json.clone()) else {
            self.set_status("Nothing submitted yet", true);
            return;
        };
        match self.copy_to_clipboard(&json) {
            Ok(()) => self.set_status("Copied form data", false),
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {e}");
                self.set_status(&format!("Copy failed: {e}"), true);
            }
        }
    }

    /// Copy text to system clipboard
    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }

    fn is_copy_key(key: KeyEvent) -> bool {
        key.modifiers.contains(COPY_MODIFIER) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn set_status(&mut self, text: &str, is_error: bool) {
        self.status_message = Some(StatusMessage {
            text: text.to_string(),
            is_error,
        });
        self.state.redraw.raise();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::ValidationMode;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        App::new(&TuiConfig::default()).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn fill_valid(app: &mut App) {
        type_text(app, "me@example.com");
        press(app, KeyCode::Tab);
        type_text(app, "secret1");
        press(app, KeyCode::Tab);
        press(app, KeyCode::Enter); // adult
        press(app, KeyCode::Tab);
        press(app, KeyCode::Tab);
        press(app, KeyCode::Enter); // open dropdown
        press(app, KeyCode::Enter); // Option 1
        press(app, KeyCode::Tab);
        press(app, KeyCode::Enter); // open items
        press(app, KeyCode::Enter); // Item 1
        press(app, KeyCode::Tab);
        press(app, KeyCode::Char(' ')); // vip
        press(app, KeyCode::Tab);
        press(app, KeyCode::Char(' ')); // confirm
    }

    mod app_basic_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_should_quit_initially_false() {
            assert!(!app().should_quit());
        }

        #[test]
        fn test_uses_configured_modes() {
            let config = TuiConfig {
                validation_mode: Some(ValidationMode::OnSubmit),
                ..Default::default()
            };
            let mut app = App::new(&config).unwrap();
            type_text(&mut app, "bad");
            press(&mut app, KeyCode::Tab);
            assert!(app.state.store.error("email").is_none());
        }

        #[test]
        fn test_default_mode_validates_on_change() {
            let mut app = app();
            type_text(&mut app, "bad");
            assert_eq!(
                app.state.store.error("email").map(|e| e.message.as_str()),
                Some("Invalid email address")
            );
        }
    }

    mod navigation_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_tab_and_backtab_move_focus() {
            let mut app = app();
            press(&mut app, KeyCode::Tab);
            assert_eq!(app.state.active_form_field, 1);
            press(&mut app, KeyCode::BackTab);
            assert_eq!(app.state.active_form_field, 0);
        }

        #[test]
        fn test_enter_in_text_input_advances() {
            let mut app = app();
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.active_form_field, 1);
        }

        #[test]
        fn test_esc_quits_when_nothing_is_open() {
            let mut app = app();
            press(&mut app, KeyCode::Esc);
            assert!(app.should_quit());
        }

        #[test]
        fn test_esc_closes_open_dropdown_first() {
            let mut app = app();
            let idx = app
                .state
                .controls
                .iter()
                .position(|c| c.name() == "dropdown")
                .unwrap();
            app.state.focus(idx).unwrap();
            press(&mut app, KeyCode::Enter);
            assert!(app.state.active_control().unwrap().is_expanded());
            press(&mut app, KeyCode::Esc);
            assert!(!app.state.active_control().unwrap().is_expanded());
            assert!(!app.should_quit());
        }
    }

    mod submission_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_ctrl_s_with_errors_sets_error_status() {
            let mut app = app();
            ctrl(&mut app, 's');
            let status = app.status_message.clone().unwrap();
            assert!(status.is_error);
            assert!(status.text.starts_with("7 field(s) failed validation"));
            assert_eq!(app.state.store.submit_count(), 1);
            assert!(!app.state.show_submission);
        }

        #[test]
        fn test_valid_submit_opens_dialog_and_enter_dismisses() {
            let mut app = app();
            fill_valid(&mut app);
            ctrl(&mut app, 's');
            assert!(app.state.show_submission);
            assert_eq!(
                app.status_message,
                Some(StatusMessage {
                    text: "Form submitted".to_string(),
                    is_error: false,
                })
            );

            // Keys other than Enter/Esc don't reach the form
            press(&mut app, KeyCode::Char('x'));
            assert!(app.state.show_submission);

            press(&mut app, KeyCode::Enter);
            assert!(!app.state.show_submission);
            assert!(!app.should_quit());
        }

        #[test]
        fn test_enter_on_submit_button_submits() {
            let mut app = app();
            app.state.focus(app.state.controls.len()).unwrap();
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.store.submit_count(), 1);
            // Focus jumps to the first invalid field
            assert_eq!(app.state.active_form_field, 0);
        }

        #[test]
        fn test_ctrl_r_resets_form() {
            let mut app = app();
            type_text(&mut app, "abc");
            press(&mut app, KeyCode::Tab);
            ctrl(&mut app, 'r');
            assert_eq!(app.state.store.value("email").unwrap().as_text(), "");
            assert_eq!(app.state.active_form_field, 0);
            assert_eq!(app.status_message.unwrap().text, "Form reset");
        }

        #[test]
        fn test_copy_without_submission_reports_error() {
            let mut app = app();
            ctrl(&mut app, 'y');
            let status = app.status_message.unwrap();
            assert!(status.is_error);
            assert_eq!(status.text, "Nothing submitted yet");
        }
    }
}
