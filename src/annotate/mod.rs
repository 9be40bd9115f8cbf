//! Text annotation engine
//!
//! This module contains the only algorithmically interesting part of the
//! site: given a paragraph and a set of possibly overlapping marks, produce
//! the minimal sequence of uniformly styled text runs the renderer paints.
//!
//! - `compositor`: mark location + run partitioning (`compose`)
//! - `store`: the append/remove-only mark and note collections

pub mod compositor;
pub mod store;

pub use compositor::{compose, Segment};
pub use store::{AnnotationStore, EraseCandidates, EraseTarget};

use thiserror::Error;

/// Failures raised when creating annotations. Rendering never fails: a mark
/// that cannot be located simply paints nothing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnnotationError {
    #[error("selection is empty")]
    EmptySelection,

    #[error("paragraph index {0} is out of range")]
    ParagraphOutOfRange(usize),

    #[error("selected text does not occur in paragraph {0}")]
    TextNotInParagraph(usize),

    #[error("offset range {start}..{end} is not a valid span of the paragraph")]
    InvalidOffsets { start: usize, end: usize },
}
