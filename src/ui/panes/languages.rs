//! Language bar: source selector, swap control, target selector

use super::utils::border_style;
use crate::languages;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn selector<'a>(key: &'a str, code: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            languages::display_name(code),
            Style::default()
                .fg(DEFAULT_THEME.language)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" ({}) ▾ ", code), Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(key, Style::default().fg(DEFAULT_THEME.comment)),
    ])
}

/// Render the bar above the text panes.
///
/// `picking` is `Some(true)` while the source picker is open, `Some(false)`
/// for the target picker.
pub fn render_language_bar(
    frame: &mut Frame,
    area: Rect,
    source_lang: &str,
    target_lang: &str,
    picking: Option<bool>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Percentage(10),
            Constraint::Percentage(45),
        ])
        .split(inner);

    let source_style = if picking == Some(true) {
        Style::default().bg(DEFAULT_THEME.highlight_bg)
    } else {
        Style::default()
    };
    let target_style = if picking == Some(false) {
        Style::default().bg(DEFAULT_THEME.highlight_bg)
    } else {
        Style::default()
    };

    frame.render_widget(
        Paragraph::new(selector("[F2]", source_lang))
            .style(source_style)
            .alignment(Alignment::Left),
        columns[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::styled(
            "⇄",
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )]))
        .alignment(Alignment::Center),
        columns[1],
    );
    frame.render_widget(
        Paragraph::new(selector("[F3]", target_lang))
            .style(target_style)
            .alignment(Alignment::Right),
        columns[2],
    );
}
