//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_registration(frame, main_area, app);

    if app.state.show_submission {
        if let Some(submission) = &app.state.last_submission {
            components::render_submission_dialog(frame, submission);
        }
    }

    layout::draw_status_bar(frame, status_area, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_draw_initial_screen() {
        let app = App::new(&crate::config::TuiConfig::default()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Registration"));
        assert!(text.contains("Email*"));
        assert!(text.contains("Enter your email"));
        assert!(text.contains("submits: 0"));
    }

    #[test]
    fn test_draw_scrolls_to_submit_button() {
        let mut app = App::new(&crate::config::TuiConfig::default()).unwrap();
        let last = app.state.controls.len();
        app.state.focus(last).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        assert!(screen_text(&terminal).contains("Submit"));
    }
}
