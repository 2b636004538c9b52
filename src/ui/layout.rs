//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::{COPY_HINT, SUBMIT_HINT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Keyboard hints for whatever currently has focus
fn get_hints(app: &App) -> String {
    let state = &app.state;
    if state.show_submission {
        return format!("Enter/Esc:close  {COPY_HINT}");
    }
    match state.active_control() {
        Some(control) if control.is_expanded() => {
            "↑/↓:move  Enter:pick  Esc:close".to_string()
        }
        Some(_) => format!(
            "Tab/S-Tab:field  ↑/↓:move  Space/Enter:select  {SUBMIT_HINT}  ^R:reset  Esc:quit"
        ),
        None => format!("Enter:submit  Tab:field  {COPY_HINT}  Esc:quit"),
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let store = &app.state.store;
    let mut spans = vec![];

    let indicator = if store.has_errors() {
        Span::styled(" ● ", Style::default().fg(Color::Red))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };
    spans.push(indicator);

    spans.push(Span::styled(
        get_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        let color = if msg.is_error { Color::Red } else { Color::Green };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.text.as_str(), Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Submission counter on the right
    let counter = format!(" submits: {} ", store.submit_count());
    let width = counter.len() as u16;
    if area.width > width {
        let counter_area = Rect {
            x: area.x + area.width - width,
            y: area.y,
            width,
            height: 1,
        };
        let counter_widget =
            Paragraph::new(counter).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
        frame.render_widget(counter_widget, counter_area);
    }
}
