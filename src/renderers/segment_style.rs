//! Segment style composition
//!
//! Builds the CSS background layer stack for a styled segment. Ink and
//! highlighter are independent overlays, not a blended color: the ink is a
//! solid gradient band sitting on the text baseline with the pen's stroke
//! height, the highlighter a full-height translucent wash behind it. The
//! ink layer is listed first so it paints on top.
//!
//! An unknown style key drops that layer only; a segment whose layers all
//! fail to resolve renders as plain text.

use serde::Serialize;

use crate::annotate::Segment;
use crate::models::{highlighter_color, pen_color};

/// Pre-joined CSS background properties for one segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentStyle {
    pub background_image: String,
    pub background_size: String,
    pub background_position: String,
    pub background_repeat: String,
}

/// Compose the background layer stack for a segment. `None` means plain.
pub fn segment_style(segment: &Segment) -> Option<SegmentStyle> {
    let mut images = Vec::new();
    let mut sizes = Vec::new();
    let mut positions = Vec::new();
    let mut repeats = Vec::new();

    // Layer 1 (top): ink band at the baseline
    if let Some(mark) = segment.ink {
        if let Some(color) = pen_color(&mark.style_key) {
            images.push(format!(
                "linear-gradient(to right, {}, {})",
                color.value, color.value
            ));
            sizes.push(format!("100% {}", mark.pen_width().css()));
            positions.push("0 100%".to_string());
            repeats.push("no-repeat".to_string());
        }
    }

    // Layer 2 (bottom): full-height highlighter wash
    if let Some(mark) = segment.wash {
        if let Some(color) = highlighter_color(&mark.style_key) {
            images.push(format!(
                "linear-gradient(to right, {}, {})",
                color.value, color.value
            ));
            sizes.push("100% 100%".to_string());
            positions.push("0 0".to_string());
            repeats.push("no-repeat".to_string());
        }
    }

    if images.is_empty() {
        return None;
    }

    Some(SegmentStyle {
        background_image: images.join(", "),
        background_size: sizes.join(", "),
        background_position: positions.join(", "),
        background_repeat: repeats.join(", "),
    })
}
