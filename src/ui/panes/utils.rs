//! Layout helpers shared by the panes

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
};

/// Border style for a pane depending on focus.
pub fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Number of rows `text` occupies when wrapped to `width` columns.
///
/// Counts characters, not display cells, which is close enough for the
/// alphabetic scripts in the language table.
pub fn wrapped_height(text: &str, width: u16) -> usize {
    let width = width.max(1) as usize;
    text.split('\n')
        .map(|line| line.chars().count().max(1).div_ceil(width))
        .sum()
}

/// Scroll offset that keeps the last line of `text` visible.
pub fn scroll_to_end(text: &str, inner: Rect) -> u16 {
    let total = wrapped_height(text, inner.width);
    total.saturating_sub(inner.height as usize).min(u16::MAX as usize) as u16
}

/// A rectangle of `width` x `height` centered inside `area`, clamped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}
