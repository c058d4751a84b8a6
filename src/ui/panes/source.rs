//! Source text pane
//!
//! Shows what the user has typed, or a placeholder when nothing has been
//! typed yet. The view always scrolls so the end of the text (where new input
//! lands) stays visible.

use super::utils::{border_style, scroll_to_end};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

pub const PLACEHOLDER: &str = "Digite seu texto...";
const CURSOR: &str = "▏";

/// Render the source text pane
pub fn render_source_pane(frame: &mut Frame, area: Rect, text: &str, is_focused: bool) {
    let block = Block::default()
        .title(" Texto ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 1, 0, 0));
    let inner = block.inner(area);

    if text.is_empty() {
        let mut spans = Vec::new();
        if is_focused {
            spans.push(Span::styled(CURSOR, Style::default().fg(DEFAULT_THEME.primary)));
        }
        spans.push(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(DEFAULT_THEME.comment)
                .add_modifier(Modifier::ITALIC),
        ));
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
        return;
    }

    let mut lines: Vec<Line> = text
        .split('\n')
        .map(|line| Line::from(Span::styled(line, Style::default().fg(DEFAULT_THEME.fg))))
        .collect();
    if is_focused {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled(CURSOR, Style::default().fg(DEFAULT_THEME.primary)));
        }
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll_to_end(text, inner), 0));
    frame.render_widget(paragraph, area);
}
