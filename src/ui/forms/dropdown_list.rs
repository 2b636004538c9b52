//! Open dropdown list overlay

use crate::state::controls::DropdownState;
use crate::state::forms::SelectOption;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

/// What the overlay needs from a single- or multi-select
pub struct DropdownView<'a> {
    pub options: &'a [SelectOption],
    pub state: &'a DropdownState,
    pub searchable: bool,
    pub search_placeholder: &'a str,
    pub max_height: u16,
    /// Values rendered with a check mark (multi-select only)
    pub checked: Option<&'a [String]>,
}

/// Where the list goes: directly under the box, clipped to the screen
pub fn overlay_area(anchor: Rect, screen: Rect, rows: u16) -> Rect {
    let height = rows + 2;
    let below = anchor.y + anchor.height;
    let space_below = (screen.y + screen.height).saturating_sub(below);
    if space_below >= height || space_below >= anchor.y.saturating_sub(screen.y) {
        Rect::new(anchor.x, below, anchor.width, height.min(space_below))
    } else {
        // Not enough room below, open upwards
        let height = height.min(anchor.y.saturating_sub(screen.y));
        Rect::new(anchor.x, anchor.y - height, anchor.width, height)
    }
}

/// Render the open list over the form
pub fn draw_dropdown_list(frame: &mut Frame, anchor: Rect, view: DropdownView) {
    let filtered = view.state.filtered(view.options);
    let rows = (filtered.len() as u16).clamp(1, view.max_height.max(1));
    let area = overlay_area(anchor, frame.area(), rows);
    if area.height < 3 {
        return;
    }

    let title = if !view.searchable {
        String::new()
    } else if view.state.query().is_empty() {
        format!(" {} ", view.search_placeholder)
    } else {
        format!(" > {} ", view.state.query())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let items: Vec<ListItem> = if filtered.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "No results",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        filtered
            .iter()
            .map(|option| {
                let text = match view.checked {
                    Some(checked) if checked.contains(&option.value) => {
                        format!("[x] {}", option.label)
                    }
                    Some(_) => format!("[ ] {}", option.label),
                    None => option.label.clone(),
                };
                ListItem::new(Line::from(text))
            })
            .collect()
    };

    let mut list_state = ListState::default();
    if !filtered.is_empty() {
        list_state.select(Some(view.state.highlighted().min(filtered.len() - 1)));
    }

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut list_state);
}
