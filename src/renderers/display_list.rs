//! Display list for the reading surface
//!
//! The output structure handed to JavaScript for painting. All annotation
//! resolution and style composition happens here; the shell maps each
//! segment to a `<span>` (plain) or `<mark>` (styled) without further
//! computation.

use serde::Serialize;

use super::segment_style::{segment_style, SegmentStyle};
use crate::annotate::compose;
use crate::models::{Note, ReaderSession};

/// One styled run of paragraph text.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSegment {
    /// The text to paint
    pub text: String,

    /// Pre-joined CSS background stack; absent for plain text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<SegmentStyle>,
}

/// A paragraph ready for painting, with its margin notes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphView {
    pub paragraph_index: usize,
    pub segments: Vec<RenderSegment>,
    pub notes: Vec<Note>,
}

/// Compose one paragraph of the open session into a paintable view.
/// `None` when the index is past the end of the sample.
pub fn render_paragraph(session: &ReaderSession, index: usize) -> Option<ParagraphView> {
    let text = session.paragraph(index)?;
    let marks: Vec<_> = session
        .store
        .marks_for(index)
        .into_iter()
        .cloned()
        .collect();

    let segments = compose(text, &marks)
        .into_iter()
        .map(|seg| RenderSegment {
            style: segment_style(&seg),
            text: seg.text.to_string(),
        })
        .collect();

    Some(ParagraphView {
        paragraph_index: index,
        segments,
        notes: session.store.notes_for(index).into_iter().cloned().collect(),
    })
}

/// Compose the whole sample, in paragraph order.
pub fn render_all(session: &ReaderSession) -> Vec<ParagraphView> {
    (0..session.paragraph_count())
        .filter_map(|i| render_paragraph(session, i))
        .collect()
}
