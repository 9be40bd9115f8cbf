//! Data models for the portfolio reader
//!
//! This module contains the catalog records, annotation entities, color
//! palettes, the theme handle, and the reading-session state.

pub mod book;
pub mod mark;
pub mod palette;
pub mod reader_state;
pub mod theme;

// Re-export commonly used types
pub use book::{find_book, Book, BOOKS};
pub use mark::{Mark, MarkAnchor, MarkLayer, Note, PenWidth};
pub use palette::{highlighter_color, pen_color, PaletteEntry, HIGHLIGHTER_COLORS, PEN_COLORS};
pub use reader_state::{ReaderSession, Tool, DEFAULT_FONT_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE};
pub use theme::{AppState, Theme};
