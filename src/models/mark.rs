//! Annotation data model
//!
//! Marks are the user-created text annotations (pen strokes and highlighter
//! washes); notes are paragraph-scoped marginalia. Both live only in memory
//! for the duration of a reading session. Nothing is mutated in place:
//! creation appends, deletion filters by id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The two independent annotation layers that can coexist on the same text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkLayer {
    /// Pen stroke rendered as a thin band at the text baseline
    Ink,
    /// Highlighter rendered as a full-height translucent wash
    Wash,
}

/// Fixed pen stroke widths, serialized as the CSS lengths the renderer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PenWidth {
    #[serde(rename = "2px")]
    Thin,
    #[serde(rename = "4px")]
    Thick,
}

impl PenWidth {
    /// CSS length for the ink band height
    pub fn css(&self) -> &'static str {
        match self {
            PenWidth::Thin => "2px",
            PenWidth::Thick => "4px",
        }
    }
}

impl Default for PenWidth {
    fn default() -> Self {
        PenWidth::Thin
    }
}

/// How a mark is re-located inside its paragraph on every compose.
///
/// `Content` is the historical behavior: the mark is anchored by its literal
/// text and found again by substring scan, so every occurrence of that text
/// is marked and the mark goes inert if the paragraph changes. `Offsets` is
/// the stable alternative: a fixed byte range that marks exactly one span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MarkAnchor {
    /// Anchored by content: substring scan, all occurrences
    Content,
    /// Anchored by position: a single byte range
    Offsets { start: usize, end: usize },
}

/// A single user-created annotation tied to one paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mark {
    /// Opaque id, stable for the mark's lifetime
    pub id: String,

    /// Index of the owning paragraph within the sample text
    pub paragraph_index: usize,

    /// The literal substring the mark was created from
    pub text: String,

    /// Which annotation layer this mark paints
    pub layer: MarkLayer,

    /// Palette key resolved against the layer's color table at render time
    pub style_key: String,

    /// Stroke width, only meaningful for ink marks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pen_width: Option<PenWidth>,

    /// Anchoring mode (content scan by default)
    pub anchor: MarkAnchor,
}

impl Mark {
    /// Create a content-anchored mark with a fresh id.
    pub fn new(
        paragraph_index: usize,
        text: impl Into<String>,
        layer: MarkLayer,
        style_key: impl Into<String>,
        pen_width: Option<PenWidth>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            paragraph_index,
            text: text.into(),
            layer,
            style_key: style_key.into(),
            pen_width,
            anchor: MarkAnchor::Content,
        }
    }

    /// Create an offset-anchored mark covering `start..end` (byte offsets).
    pub fn at_offsets(
        paragraph_index: usize,
        text: impl Into<String>,
        start: usize,
        end: usize,
        layer: MarkLayer,
        style_key: impl Into<String>,
        pen_width: Option<PenWidth>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            paragraph_index,
            text: text.into(),
            layer,
            style_key: style_key.into(),
            pen_width,
            anchor: MarkAnchor::Offsets { start, end },
        }
    }

    /// Effective stroke width for ink rendering
    pub fn pen_width(&self) -> PenWidth {
        self.pen_width.unwrap_or_default()
    }
}

/// A free-text note attached to a paragraph (not to a text range).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub paragraph_index: usize,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Create a note with a fresh id, stamped now.
    pub fn new(paragraph_index: usize, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            paragraph_index,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}
