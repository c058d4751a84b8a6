//! Translation pane rendering

use super::utils::{border_style, scroll_to_end};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the translation pane. While `is_loading` the text is replaced by a
/// spinner.
pub fn render_result_pane(
    frame: &mut Frame,
    area: Rect,
    translated_text: &str,
    is_loading: bool,
    spinner_frame: usize,
) {
    let block = Block::default()
        .title(" Tradução ")
        .borders(Borders::ALL)
        .border_style(border_style(false))
        .style(Style::default().bg(DEFAULT_THEME.result_bg))
        .padding(Padding::new(1, 1, 0, 0));
    let inner = block.inner(area);

    if is_loading {
        let frame_str = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
        let spinner = Line::from(vec![
            Span::styled(
                frame_str,
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Traduzindo...", Style::default().fg(DEFAULT_THEME.comment)),
        ]);

        // Vertically centered
        let top = inner.height.saturating_sub(1) / 2;
        let mut lines = vec![Line::default(); top as usize];
        lines.push(spinner);

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let paragraph = Paragraph::new(translated_text)
        .block(block)
        .style(Style::default().fg(DEFAULT_THEME.fg))
        .wrap(Wrap { trim: false })
        .scroll((scroll_to_end(translated_text, inner), 0));
    frame.render_widget(paragraph, area);
}
