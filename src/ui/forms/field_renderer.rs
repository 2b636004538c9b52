//! Field rendering utilities for forms
//!
//! Every draw function is a pure function of the control's configuration,
//! the current value and error read from the store, and focus.

use crate::state::controls::{
    CheckboxGroup, FormControl, MultiSelect, OptionLayout, RadioGroup, SingleSelect, TextInput,
};
use crate::state::forms::{label_for, SelectOption};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Height of a bordered single-line box
const BOX_HEIGHT: u16 = 3;
/// Rows reserved beneath every control for its error text
const ERROR_ROWS: u16 = 1;

fn label_rows(label: Option<&str>) -> u16 {
    u16::from(label.is_some())
}

fn option_rows(layout: OptionLayout, count: usize) -> u16 {
    match layout {
        OptionLayout::Horizontal => 1,
        OptionLayout::Vertical => count.max(1) as u16,
    }
}

/// Rows a control occupies in the form
pub fn control_height(control: &FormControl) -> u16 {
    match control {
        FormControl::Text(_) => 1 + BOX_HEIGHT + ERROR_ROWS,
        FormControl::Radio(c) => 1 + option_rows(c.layout, c.options.len()) + ERROR_ROWS,
        FormControl::Select(c) => label_rows(c.label.as_deref()) + BOX_HEIGHT + ERROR_ROWS,
        FormControl::MultiSelect(c) => {
            label_rows(c.label.as_deref()) + BOX_HEIGHT + 1 + ERROR_ROWS
        }
        FormControl::Checkbox(c) => {
            label_rows(c.label.as_deref()) + option_rows(c.layout, c.options.len()) + ERROR_ROWS
        }
    }
}

/// Border colour for boxed inputs
fn border_style(is_active: bool, has_error: bool) -> Style {
    if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Split `area` into rows of the given heights, clipped to the area
fn split_rows(area: Rect, heights: &[u16]) -> Vec<Rect> {
    let mut y = area.y;
    let bottom = area.y + area.height;
    heights
        .iter()
        .map(|h| {
            let height = (*h).min(bottom.saturating_sub(y));
            let rect = Rect::new(area.x, y, area.width, height);
            y += height;
            rect
        })
        .collect()
}

/// Label line with the optional required asterisk
pub fn draw_label(frame: &mut Frame, area: Rect, label: &str, required: bool, is_active: bool) {
    let style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let mut spans = vec![Span::styled(label.to_string(), style)];
    if required {
        spans.push(Span::styled("*", Style::default().fg(Color::Red)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Error text beneath a control
pub fn draw_error_line(frame: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(message) = error {
        let paragraph = Paragraph::new(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(paragraph, area);
    }
}

pub fn draw_text_input(
    frame: &mut Frame,
    area: Rect,
    input: &TextInput,
    value: &str,
    error: Option<&str>,
    is_active: bool,
) {
    let rows = split_rows(area, &[1, BOX_HEIGHT, ERROR_ROWS]);
    draw_label(frame, rows[0], &input.label, input.required_marker, is_active);

    let cursor = if is_active { "▌" } else { "" };
    let line = if value.is_empty() {
        Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            Span::styled(
                input.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(input.display_value(value), Style::default().fg(Color::White)),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_active, error.is_some()));
    frame.render_widget(
        Paragraph::new(line).wrap(Wrap { trim: false }).block(block),
        rows[1],
    );
    draw_error_line(frame, rows[2], error);
}

/// Style of one option entry in a radio or checkbox group
fn option_style(is_cursor: bool, is_selected: bool, disabled: bool) -> Style {
    if disabled {
        return Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM);
    }
    let mut style = if is_selected {
        Style::default().fg(Color::Blue)
    } else {
        Style::default().fg(Color::Gray)
    };
    if is_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

fn option_lines(layout: OptionLayout, entries: Vec<Span<'static>>) -> Vec<Line<'static>> {
    match layout {
        OptionLayout::Vertical => entries.into_iter().map(Line::from).collect(),
        OptionLayout::Horizontal => {
            let mut spans = Vec::with_capacity(entries.len() * 2);
            for (idx, entry) in entries.into_iter().enumerate() {
                if idx > 0 {
                    spans.push(Span::raw("   "));
                }
                spans.push(entry);
            }
            vec![Line::from(spans)]
        }
    }
}

pub fn draw_radio_group(
    frame: &mut Frame,
    area: Rect,
    radio: &RadioGroup,
    value: &str,
    error: Option<&str>,
    is_active: bool,
) {
    let body = option_rows(radio.layout, radio.options.len());
    let rows = split_rows(area, &[1, body, ERROR_ROWS]);
    let disabled = radio.is_disabled();

    let label = if disabled {
        format!("{} (disabled)", radio.label)
    } else {
        radio.label.clone()
    };
    draw_label(frame, rows[0], &label, radio.required_marker, is_active && !disabled);

    let entries = radio
        .options
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let selected = option.value == value;
            let mark = if selected { "(●)" } else { "( )" };
            Span::styled(
                format!("{mark} {}", option.label),
                option_style(is_active && idx == radio.cursor, selected, disabled),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(option_lines(radio.layout, entries)), rows[1]);
    draw_error_line(frame, rows[2], error);
}

pub fn draw_checkbox_group(
    frame: &mut Frame,
    area: Rect,
    group: &CheckboxGroup,
    value: &[String],
    error: Option<&str>,
    is_active: bool,
) {
    let label_height = label_rows(group.label.as_deref());
    let body = option_rows(group.layout, group.options.len());
    let rows = split_rows(area, &[label_height, body, ERROR_ROWS]);
    if let Some(label) = &group.label {
        draw_label(frame, rows[0], label, false, is_active);
    }

    let entries = group
        .options
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let checked = value.contains(&option.value);
            let mark = if checked { "[x]" } else { "[ ]" };
            Span::styled(
                format!("{mark} {}", option.label),
                option_style(is_active && idx == group.cursor, checked, false),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(option_lines(group.layout, entries)), rows[1]);
    draw_error_line(frame, rows[2], error);
}

/// Closed dropdown box showing `text`; returns the box area for the list overlay
fn draw_dropdown_box(
    frame: &mut Frame,
    area: Rect,
    text: Span<'static>,
    is_open: bool,
    is_active: bool,
    has_error: bool,
) -> Rect {
    let arrow = if is_open { " ▴" } else { " ▾" };
    let line = Line::from(vec![
        text,
        Span::styled(arrow, Style::default().fg(Color::DarkGray)),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_active, has_error));
    frame.render_widget(Paragraph::new(line).block(block), area);
    area
}

/// Draw a single-select; returns the box area so an open list can be overlaid
pub fn draw_single_select(
    frame: &mut Frame,
    area: Rect,
    select: &SingleSelect,
    value: &str,
    error: Option<&str>,
    is_active: bool,
) -> Rect {
    let label_height = label_rows(select.label.as_deref());
    let rows = split_rows(area, &[label_height, BOX_HEIGHT, ERROR_ROWS]);
    if let Some(label) = &select.label {
        draw_label(frame, rows[0], label, select.required_marker, is_active);
    }

    let text = match label_for(&select.options, value) {
        Some(label) => Span::styled(label.to_string(), Style::default().fg(Color::White)),
        None => Span::styled(
            select.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ),
    };
    let box_area = draw_dropdown_box(
        frame,
        rows[1],
        text,
        select.dropdown.is_open(),
        is_active,
        error.is_some(),
    );
    draw_error_line(frame, rows[2], error);
    box_area
}

/// Selected options rendered as chips
fn chips(options: &[SelectOption], value: &[String]) -> Line<'static> {
    let chip_style = Style::default().fg(Color::White).bg(Color::DarkGray);
    let mut spans = Vec::new();
    for selected in value {
        let label = label_for(options, selected).unwrap_or(selected.as_str());
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!(" {label} × "), chip_style));
    }
    Line::from(spans)
}

/// Draw a multi-select; returns the box area so an open list can be overlaid
pub fn draw_multi_select(
    frame: &mut Frame,
    area: Rect,
    select: &MultiSelect,
    value: &[String],
    error: Option<&str>,
    is_active: bool,
) -> Rect {
    let label_height = label_rows(select.label.as_deref());
    let rows = split_rows(area, &[label_height, BOX_HEIGHT, 1, ERROR_ROWS]);
    if let Some(label) = &select.label {
        draw_label(frame, rows[0], label, select.required_marker, is_active);
    }

    let text = if value.is_empty() {
        Span::styled(
            select.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(
            format!("{} selected", value.len()),
            Style::default().fg(Color::White),
        )
    };
    let box_area = draw_dropdown_box(
        frame,
        rows[1],
        text,
        select.dropdown.is_open(),
        is_active,
        error.is_some(),
    );
    frame.render_widget(Paragraph::new(chips(&select.options, value)), rows[2]);
    draw_error_line(frame, rows[3], error);
    box_area
}
