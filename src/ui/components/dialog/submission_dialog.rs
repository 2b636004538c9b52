//! Submitted values dialog

use super::base::{render_dialog, DialogConfig};
use crate::platform::COPY_SHORTCUT;
use crate::state::Submission;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the last submission's JSON centered on the screen
pub fn render_submission_dialog(frame: &mut Frame, submission: &Submission) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::styled("Enter", key_style),
        Span::raw("/"),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss, "),
        Span::styled(COPY_SHORTCUT, key_style),
        Span::raw(" to copy"),
    ];

    let title = format!(
        "Form Data ({})",
        submission.submitted_at.format("%H:%M:%S")
    );

    render_dialog(
        frame,
        DialogConfig {
            title: &title,
            title_color: Color::Green,
            border_color: Color::Green,
            message: &submission.json,
            hint: Some(hint),
            max_width: 70,
        },
    );
}
