//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Title color
    pub title_color: Color,
    /// Border color
    pub border_color: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint text shown at the bottom (e.g., "Press Enter to dismiss")
    pub hint: Option<Vec<Span<'a>>>,
    /// Maximum width of the dialog
    pub max_width: u16,
}

impl Default for DialogConfig<'_> {
    fn default() -> Self {
        Self {
            title: "Dialog",
            title_color: Color::White,
            border_color: Color::White,
            message: "",
            hint: None,
            max_width: 60,
        }
    }
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let padding = 4u16; // 2 chars padding on each side
    let max_line_width = config.max_width.saturating_sub(padding).max(1) as usize;

    let wrapped_lines = wrap_text(config.message, max_line_width);

    let content_width = wrapped_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.title.chars().count()) as u16;
    let dialog_width = (content_width + padding + 2)
        .min(config.max_width)
        .min(area.width);

    // Height: title + blank + message lines + blank (if hint) + hint + borders,
    // clipped to the screen by dropping message lines from the end
    let hint_lines = if config.hint.is_some() { 2 } else { 0 };
    let chrome = 2 + hint_lines + 2;
    let visible_lines = (area.height.saturating_sub(chrome) as usize).min(wrapped_lines.len());
    let dialog_height = (chrome + visible_lines as u16).max(5).min(area.height);

    let dialog_area = Rect {
        x: area.x + (area.width.saturating_sub(dialog_width)) / 2,
        y: area.y + (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let truncated = wrapped_lines.len() > visible_lines;
    for (idx, line) in wrapped_lines.into_iter().take(visible_lines).enumerate() {
        if truncated && idx + 1 == visible_lines {
            content.push(Line::from(Span::styled(
                "…",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            content.push(Line::from(line));
        }
    }

    if let Some(hint_spans) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint_spans));
    }

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.border_color))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

/// Wrap text to a maximum width, keeping each line's leading indentation
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let trimmed = paragraph.trim_start();
        if trimmed.is_empty() {
            lines.push(String::new());
            continue;
        }
        let indent = &paragraph[..paragraph.len() - trimmed.len()];

        let mut current_line = indent.to_string();
        let mut has_word = false;
        for word in trimmed.split_whitespace() {
            let width = current_line.chars().count();
            if has_word && width + word.chars().count() + 1 > max_width {
                lines.push(current_line);
                current_line = indent.to_string();
                has_word = false;
            }
            if has_word {
                current_line.push(' ');
            }
            current_line.push_str(word);
            has_word = true;
        }
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_keeps_indentation() {
        let lines = wrap_text("{\n  \"email\": \"a@b.co\"\n}", 40);
        assert_eq!(lines, vec!["{", "  \"email\": \"a@b.co\"", "}"]);
    }

    #[test]
    fn test_wrap_breaks_long_lines() {
        let lines = wrap_text("  one two three", 9);
        assert_eq!(lines, vec!["  one two", "  three"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
