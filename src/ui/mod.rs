//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: keyboard event loop, input mode (editing or picking a language)
//! - **[`panes`]**: stateless render functions for each visible region (language
//!   bar, source text, translation, error banner, language picker, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`TranslatorView`] and call [`App::run`] to start the event loop.
//!
//! [`TranslatorView`]: crate::view::TranslatorView
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
