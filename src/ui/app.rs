//! Main TUI application state and logic

use crate::languages::{self, LANGUAGES};
use crate::state::Action;
use crate::ui::panes::{self, RequestPhase};
use crate::view::TranslatorView;
use chrono::Datelike;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use super::theme::DEFAULT_THEME;

/// Longest the loop blocks waiting for input
const POLL_INTERVAL: Duration = Duration::from_millis(50);
const SPINNER_INTERVAL: Duration = Duration::from_millis(80);

/// Which language selector a picker is editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

/// What keystrokes currently go to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Editing,
    Picking { side: Side, cursor: usize },
}

/// The main application state
pub struct App {
    /// The translator being displayed
    pub view: TranslatorView,

    pub mode: Mode,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current spinner frame while a request is in flight
    pub spinner_frame: usize,

    /// Last time the spinner advanced
    pub last_spinner_tick: Instant,

    /// Footer text
    pub footer: String,
}

impl App {
    pub fn new(view: TranslatorView) -> Self {
        App {
            view,
            mode: Mode::Editing,
            should_quit: false,
            spinner_frame: 0,
            last_spinner_tick: Instant::now(),
            footer: format!("© {} Tradutor", chrono::Local::now().year()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let now = Instant::now();
            self.view.tick(now);

            if self.view.state().is_loading && self.last_spinner_tick.elapsed() >= SPINNER_INTERVAL {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
                self.last_spinner_tick = now;
            }

            // Wake up in time for the debounce deadline
            let timeout = match self.view.next_deadline() {
                Some(deadline) => deadline.saturating_duration_since(now).min(POLL_INTERVAL),
                None => POLL_INTERVAL,
            };

            if event::poll(timeout)? {
                self.handle_event(event::read()?);
            }
        }

        self.view.shutdown();
        Ok(())
    }

    /// Where the request cycle stands, for the status bar
    pub fn phase(&self) -> RequestPhase {
        let state = self.view.state();
        if state.is_loading {
            RequestPhase::Requesting
        } else if self.view.is_debouncing() {
            RequestPhase::Debouncing
        } else if state.has_error() {
            RequestPhase::Failed
        } else {
            RequestPhase::Idle
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        let state = self.view.state();

        let banner = panes::banner_height(&state.error, size.width);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(banner),
                Constraint::Length(1),
            ])
            .split(size);

        let header = Paragraph::new(" Tradutor")
            .style(
                Style::default()
                    .fg(DEFAULT_THEME.border_focused)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Left);
        frame.render_widget(header, rows[0]);

        let picking = match self.mode {
            Mode::Picking { side, .. } => Some(side == Side::Source),
            Mode::Editing => None,
        };
        panes::render_language_bar(
            frame,
            rows[1],
            &state.source_lang,
            &state.target_lang,
            picking,
        );

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);

        panes::render_source_pane(
            frame,
            columns[0],
            &state.source_text,
            self.mode == Mode::Editing,
        );
        panes::render_result_pane(
            frame,
            columns[1],
            &state.translated_text,
            state.is_loading,
            self.spinner_frame,
        );
        panes::render_error_banner(frame, rows[3], &state.error);

        panes::render_status_bar(
            frame,
            rows[4],
            &self.footer,
            self.phase(),
            picking.is_some(),
        );

        if let Mode::Picking { side, cursor } = self.mode {
            let (title, selected) = match side {
                Side::Source => ("Traduzir de", state.source_lang.as_str()),
                Side::Target => ("Traduzir para", state.target_lang.as_str()),
            };
            panes::render_language_picker(frame, rows[2], title, cursor, selected);
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match self.mode {
                Mode::Editing => self.handle_editing_key(key),
                Mode::Picking { side, cursor } => self.handle_picker_key(key, side, cursor),
            },
            Event::Paste(text) if self.mode == Mode::Editing => {
                let mut source = self.view.state().source_text.clone();
                source.push_str(&text.replace("\r\n", "\n").replace('\r', "\n"));
                self.view.dispatch(Action::SetSourceText(source));
            }
            _ => {}
        }
    }

    /// Handle keyboard events while typing
    fn handle_editing_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('s') if ctrl => self.view.dispatch(Action::Swap),
            KeyCode::F(4) => self.view.dispatch(Action::Swap),
            KeyCode::Char('u') if ctrl => self.view.dispatch(Action::SetSourceText(String::new())),
            KeyCode::F(2) => self.open_picker(Side::Source),
            KeyCode::F(3) => self.open_picker(Side::Target),
            KeyCode::Enter => self.edit(|text| text.push('\n')),
            KeyCode::Backspace => self.edit(|text| {
                text.pop();
            }),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.edit(|text| text.push(c))
            }
            _ => {}
        }
    }

    /// Handle keyboard events while a picker is open
    fn handle_picker_key(&mut self, key: KeyEvent, side: Side, cursor: usize) {
        match key.code {
            KeyCode::Esc => self.mode = Mode::Editing,
            KeyCode::Up => self.move_picker(side, languages::cycle(cursor, -1)),
            KeyCode::Down => self.move_picker(side, languages::cycle(cursor, 1)),
            KeyCode::PageUp => self.move_picker(side, cursor.saturating_sub(10)),
            KeyCode::PageDown => self.move_picker(side, (cursor + 10).min(LANGUAGES.len() - 1)),
            KeyCode::Home => self.move_picker(side, 0),
            KeyCode::End => self.move_picker(side, LANGUAGES.len() - 1),
            KeyCode::Enter => {
                let code = LANGUAGES[cursor].code.to_string();
                self.view.dispatch(match side {
                    Side::Source => Action::SetSourceLang(code),
                    Side::Target => Action::SetTargetLang(code),
                });
                self.mode = Mode::Editing;
            }
            // Jump to the next language starting with the typed letter
            KeyCode::Char(c) => {
                let c = c.to_lowercase().next().unwrap_or(c);
                let found = (1..=LANGUAGES.len())
                    .map(|offset| languages::cycle(cursor, offset as isize))
                    .find(|&i| {
                        LANGUAGES[i]
                            .display_name
                            .to_lowercase()
                            .starts_with(c)
                    });
                if let Some(i) = found {
                    self.move_picker(side, i);
                }
            }
            _ => {}
        }
    }

    fn open_picker(&mut self, side: Side) {
        let state = self.view.state();
        let code = match side {
            Side::Source => &state.source_lang,
            Side::Target => &state.target_lang,
        };
        let cursor = languages::index_of(code).unwrap_or(0);
        self.mode = Mode::Picking { side, cursor };
    }

    fn move_picker(&mut self, side: Side, cursor: usize) {
        self.mode = Mode::Picking { side, cursor };
    }

    /// Apply `f` to a copy of the source text and dispatch the result
    fn edit(&mut self, f: impl FnOnce(&mut String)) {
        let mut text = self.view.state().source_text.clone();
        f(&mut text);
        self.view.dispatch(Action::SetSourceText(text));
    }
}
