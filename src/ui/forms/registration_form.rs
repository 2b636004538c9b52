//! Registration form screen rendering

use super::dropdown_list::{draw_dropdown_list, DropdownView};
use super::field_renderer::{
    control_height, draw_checkbox_group, draw_multi_select, draw_radio_group, draw_single_select,
    draw_text_input,
};
use crate::app::App;
use crate::state::controls::FormControl;
use crate::state::forms::FormStore;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Blank rows between controls
const CONTROL_SPACING: u16 = 1;

/// First index to draw so that everything up to `active` fits in `available` rows
pub fn first_visible(heights: &[u16], active: usize, available: u16) -> usize {
    if heights.is_empty() {
        return 0;
    }
    let active = active.min(heights.len().saturating_sub(1));
    let mut total: u32 = heights[..=active].iter().map(|h| u32::from(*h)).sum();
    let mut start = 0;
    while start < active && total > u32::from(available) {
        total -= u32::from(heights[start]);
        start += 1;
    }
    start
}

/// Draw one control; returns its dropdown anchor when a list is open
fn draw_control(
    frame: &mut Frame,
    area: Rect,
    control: &FormControl,
    store: &FormStore,
    is_active: bool,
) -> Option<Rect> {
    let error = control.error_text(store);
    let error = error.as_deref();
    match control {
        FormControl::Text(c) => {
            let value = c.binding.value(store);
            draw_text_input(frame, area, c, &value, error, is_active);
            None
        }
        FormControl::Radio(c) => {
            let value = c.binding.value(store);
            draw_radio_group(frame, area, c, &value, error, is_active);
            None
        }
        FormControl::Checkbox(c) => {
            let value = c.binding.value(store);
            draw_checkbox_group(frame, area, c, &value, error, is_active);
            None
        }
        FormControl::Select(c) => {
            let value = c.binding.value(store);
            let anchor = draw_single_select(frame, area, c, &value, error, is_active);
            c.dropdown.is_open().then_some(anchor)
        }
        FormControl::MultiSelect(c) => {
            let value = c.binding.value(store);
            let anchor = draw_multi_select(frame, area, c, &value, error, is_active);
            c.dropdown.is_open().then_some(anchor)
        }
    }
}

fn draw_open_list(frame: &mut Frame, anchor: Rect, control: &FormControl, store: &FormStore) {
    match control {
        FormControl::Select(c) => draw_dropdown_list(
            frame,
            anchor,
            DropdownView {
                options: &c.options,
                state: &c.dropdown,
                searchable: c.searchable,
                search_placeholder: &c.search_placeholder,
                max_height: c.max_height,
                checked: None,
            },
        ),
        FormControl::MultiSelect(c) => {
            let value = c.binding.value(store);
            draw_dropdown_list(
                frame,
                anchor,
                DropdownView {
                    options: &c.options,
                    state: &c.dropdown,
                    searchable: false,
                    search_placeholder: "",
                    max_height: c.max_height,
                    checked: Some(value.as_slice()),
                },
            )
        }
        _ => {}
    }
}

/// Draw the registration form with its submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let block = Block::default()
        .title(" Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let inner = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };

    let mut heights: Vec<u16> = state
        .controls
        .iter()
        .map(|c| control_height(c) + CONTROL_SPACING)
        .collect();
    heights.push(BUTTON_HEIGHT);

    let start = first_visible(&heights, state.active_form_field, inner.height);
    let bottom = inner.y + inner.height;
    let mut y = inner.y;
    let mut open_list = None;

    for (idx, control) in state.controls.iter().enumerate().skip(start) {
        let height = control_height(control);
        if y + height > bottom {
            break;
        }
        let is_active = idx == state.active_form_field;
        let rect = Rect::new(inner.x, y, inner.width, height);
        if let Some(anchor) = draw_control(frame, rect, control, &state.store, is_active) {
            open_list = Some((anchor, control));
        }
        y += height + CONTROL_SPACING;
    }

    if y + BUTTON_HEIGHT <= bottom {
        let width = inner.width.min(16);
        render_button(
            frame,
            Rect::new(inner.x, y, width, BUTTON_HEIGHT),
            "Submit",
            state.is_submit_active(),
            !state.store.has_errors(),
        );
    }

    if let Some((anchor, control)) = open_list {
        draw_open_list(frame, anchor, control, &state.store);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_visible_starts_at_top_when_it_fits() {
        assert_eq!(first_visible(&[5, 5, 5], 2, 20), 0);
    }

    #[test]
    fn test_first_visible_scrolls_to_active() {
        assert_eq!(first_visible(&[5, 5, 5, 3], 3, 10), 2);
        assert_eq!(first_visible(&[5, 5, 5, 3], 1, 10), 0);
    }

    #[test]
    fn test_first_visible_never_passes_active() {
        assert_eq!(first_visible(&[5, 30], 1, 10), 1);
    }

    #[test]
    fn test_first_visible_empty() {
        assert_eq!(first_visible(&[], 0, 10), 0);
    }
}
