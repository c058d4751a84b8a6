//! Error banner under the text panes

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Rows the banner needs for `message` (0 when there is nothing to show).
pub fn banner_height(message: &str, width: u16) -> u16 {
    if message.is_empty() {
        return 0;
    }
    // One row of top border plus wrapped text, inside 1-column padding
    let rows = super::utils::wrapped_height(message, width.saturating_sub(2));
    (rows as u16).saturating_add(1)
}

pub fn render_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    if message.is_empty() || area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(DEFAULT_THEME.error))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(message)
        .block(block)
        .style(Style::default().bg(DEFAULT_THEME.error).fg(Color::Black))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
