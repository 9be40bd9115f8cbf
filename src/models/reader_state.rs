//! Reading session state
//!
//! `ReaderSession` is the WASM-owned source of truth for everything the
//! reading surface shows: the open book's paragraphs, the annotation store,
//! the active tool, font size, and the focus-mode state machine. It is
//! created when the reader opens and dropped on navigation away, which is
//! the entire persistence story: there is none.

use serde::{Deserialize, Serialize};

use crate::annotate::AnnotationStore;
use crate::models::{Book, PenWidth};
use crate::reader::FocusState;

/// Font size bounds and step for the reader controls (px).
pub const MIN_FONT_SIZE: u32 = 14;
pub const MAX_FONT_SIZE: u32 = 32;
pub const DEFAULT_FONT_SIZE: u32 = 18;
const FONT_STEP: u32 = 2;

/// The annotation tools the dock offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Pen,
    Highlighter,
    Eraser,
}

/// Complete state of one reading session.
#[derive(Debug, Clone)]
pub struct ReaderSession {
    book_id: u32,
    book_title: String,
    paragraphs: Vec<String>,

    /// Marks and notes, transient for this session
    pub store: AnnotationStore,

    /// Focus/immersive state machine
    pub focus: FocusState,

    font_size: u32,
    active_tool: Option<Tool>,
    pen_width: PenWidth,
}

impl ReaderSession {
    /// Open a reading session over a catalog record.
    pub fn open(book: &Book) -> Self {
        Self {
            book_id: book.id,
            book_title: book.title.clone(),
            paragraphs: book.sample_text.clone(),
            store: AnnotationStore::new(),
            focus: FocusState::new(),
            font_size: DEFAULT_FONT_SIZE,
            active_tool: None,
            pen_width: PenWidth::Thin,
        }
    }

    pub fn book_id(&self) -> u32 {
        self.book_id
    }

    pub fn book_title(&self) -> &str {
        &self.book_title
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Paragraph text by index, `None` past the end of the sample.
    pub fn paragraph(&self, index: usize) -> Option<&str> {
        self.paragraphs.get(index).map(String::as_str)
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// Step the font size up, clamped to the maximum.
    pub fn increase_font(&mut self) -> u32 {
        self.font_size = (self.font_size + FONT_STEP).min(MAX_FONT_SIZE);
        self.font_size
    }

    /// Step the font size down, clamped to the minimum.
    pub fn decrease_font(&mut self) -> u32 {
        self.font_size = self.font_size.saturating_sub(FONT_STEP).max(MIN_FONT_SIZE);
        self.font_size
    }

    pub fn active_tool(&self) -> Option<Tool> {
        self.active_tool
    }

    /// Select a tool, or deselect it when it is already active (the dock
    /// buttons toggle).
    pub fn toggle_tool(&mut self, tool: Tool) -> Option<Tool> {
        self.active_tool = if self.active_tool == Some(tool) {
            None
        } else {
            Some(tool)
        };
        self.active_tool
    }

    pub fn pen_width(&self) -> PenWidth {
        self.pen_width
    }

    pub fn set_pen_width(&mut self, width: PenWidth) {
        self.pen_width = width;
    }
}
