//! Render payload construction
//!
//! Everything JavaScript paints is pre-computed here: segment style stacks
//! and per-paragraph display lists.

pub mod display_list;
pub mod segment_style;

pub use display_list::{render_all, render_paragraph, ParagraphView, RenderSegment};
pub use segment_style::{segment_style, SegmentStyle};
