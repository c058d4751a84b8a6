//! # Introduction
//!
//! Tradutor is a terminal translator: type text, pick a source and a target
//! language, and the translation appears next to it once you stop typing.
//! Translations come from the public [MyMemory](https://mymemory.translated.net)
//! API; nothing is cached or stored.
//!
//! ## Interaction cycle
//!
//! ```text
//! keystroke → SetSourceText → debounce (500ms) → request → completion → ViewState
//! ```
//!
//! 1. [`state`]: the view state as a plain value, with a pure [`state::reduce`]
//!    that maps actions to the next state plus effects.
//! 2. [`debounce`]: cancellable timers polled by the UI loop.
//! 3. [`client`]: the [`client::Translate`] seam and the MyMemory HTTP client.
//! 4. [`view`]: runs effects: restarts the timer, spawns requests onto tokio,
//!    feeds completions back into the reducer.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! [`config`], [`logging`] and [`error`] carry the usual application plumbing,
//! and [`languages`] holds the static table of selectable languages.

pub mod client;
pub mod config;
pub mod debounce;
pub mod error;
pub mod languages;
pub mod logging;
pub mod state;
pub mod ui;
pub mod view;
