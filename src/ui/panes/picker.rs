//! Language picker popup

use super::utils::{border_style, centered_rect};
use crate::languages::LANGUAGES;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

const POPUP_WIDTH: u16 = 32;
const POPUP_HEIGHT: u16 = 16;

/// Render the picker over `area` with `cursor` highlighted and `selected`
/// (the language currently in use) marked.
pub fn render_language_picker(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    cursor: usize,
    selected: &str,
) {
    let popup = centered_rect(POPUP_WIDTH, POPUP_HEIGHT, area);
    frame.render_widget(Clear, popup);

    let items: Vec<ListItem> = LANGUAGES
        .iter()
        .map(|lang| {
            let marker = if lang.code == selected { "● " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.success)),
                Span::styled(lang.display_name, Style::default().fg(DEFAULT_THEME.fg)),
                Span::styled(
                    format!(" {}", lang.code),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(border_style(true)),
        )
        .highlight_style(
            Style::default()
                .bg(DEFAULT_THEME.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶");

    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, popup, &mut state);
}
