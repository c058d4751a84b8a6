//! TUI pane rendering modules
//!
//! This module provides the rendering logic for every visible region of the
//! translator, organized by responsibility.
//!
//! # Pane Modules
//!
//! - [`languages`]: Source and target selectors with the swap control between them
//! - [`source`]: Editable source text with placeholder and cursor
//! - [`result`]: Translated text, or a spinner while a request is in flight
//! - [`banner`]: Error banner shown under the text panes
//! - [`picker`]: Popup list for choosing a language
//! - [`status`]: Status bar with keybindings and request state
//! - `utils`: Shared layout helpers
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*()` function that takes the
//! frame, the target area and plain data borrowed from the view state.

mod utils;

pub mod banner;
pub mod languages;
pub mod picker;
pub mod result;
pub mod source;
pub mod status;

// Re-export render functions for convenience
pub use banner::{banner_height, render_error_banner};
pub use languages::render_language_bar;
pub use picker::render_language_picker;
pub use result::render_result_pane;
pub use source::render_source_pane;
pub use status::{render_status_bar, RequestPhase};
