//! Portfolio Reader WASM API
//!
//! This module provides the JavaScript-facing API for the portfolio and
//! e-book reader. It includes shared utilities for serialization, validation,
//! and error handling, as well as the API functions organized by functional
//! domain.
//!
//! # Module Structure
//!
//! - `helpers`: serialization, validation, error handling, and logging
//! - `session`: WASM-owned session storage and lifecycle
//! - `catalog`: static book and palette data
//! - `marks`: mark creation/erasure and the tool dock
//! - `notes`: paragraph marginalia
//! - `render`: composed display lists for painting
//! - `reader`: focus mode, theme, font size, clock, marquee

pub mod helpers;

pub mod catalog;
pub mod marks;
pub mod notes;
pub mod reader;
pub mod render;
pub mod session;

// Re-export all public functions so the shell-facing API is one flat surface
pub use catalog::{get_book, get_books, get_highlighter_colors, get_pen_colors};
pub use marks::{
    create_mark, create_mark_at, erase_marks, get_erase_candidates, get_marks, set_pen_width,
    toggle_tool,
};
pub use notes::{create_note, delete_note, get_notes};
pub use reader::{
    advance_marquee, decrease_font_size, destroy_marquee, get_clock_stamp, increase_font_size,
    init_marquee, set_marquee_hover, set_marquee_width, set_theme, sync_fullscreen,
    toggle_focus_mode,
};
pub use render::{render_book, render_paragraph_view};
pub use session::{close_reader, get_reader_snapshot, open_reader, ReaderSnapshot};
