//! Annotation compositor
//!
//! Turns one paragraph plus its marks into an ordered list of display
//! segments, each a maximal contiguous run of text with constant active
//! layer state. Marks are re-located on every call: content-anchored marks
//! by greedy non-overlapping substring scan (every occurrence is marked),
//! offset-anchored marks by their stored byte range. A mark that cannot be
//! located contributes nothing and raises nothing.
//!
//! When two marks of the same layer cover the same character, the later
//! mark in the input slice wins for that character. The store appends on
//! creation, so the effective rule is: most recently created mark wins.

use crate::models::{Mark, MarkAnchor, MarkLayer};

/// A run of paragraph text with uniform annotation state.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<'a> {
    /// The text slice this segment covers
    pub text: &'a str,
    /// Active ink mark, if any
    pub ink: Option<&'a Mark>,
    /// Active wash mark, if any
    pub wash: Option<&'a Mark>,
}

impl<'a> Segment<'a> {
    /// True when no layer is active and the segment renders as plain text.
    pub fn is_plain(&self) -> bool {
        self.ink.is_none() && self.wash.is_none()
    }
}

/// Per-byte layer slots; values are indices into the input mark slice.
type Slot = (Option<usize>, Option<usize>);

/// Partition `paragraph` into maximal uniformly-styled runs.
///
/// The concatenation of the returned segments' text always equals the
/// input paragraph, in order, with no gaps or overlaps.
pub fn compose<'a>(paragraph: &'a str, marks: &'a [Mark]) -> Vec<Segment<'a>> {
    if paragraph.is_empty() || marks.is_empty() {
        return vec![Segment {
            text: paragraph,
            ink: None,
            wash: None,
        }];
    }

    let mut slots: Vec<Slot> = vec![(None, None); paragraph.len()];

    for (idx, mark) in marks.iter().enumerate() {
        match &mark.anchor {
            MarkAnchor::Content => {
                // An empty needle would never advance the cursor
                if mark.text.is_empty() {
                    continue;
                }
                let mut cursor = 0;
                while let Some(found) = paragraph[cursor..].find(&mark.text) {
                    let start = cursor + found;
                    let end = start + mark.text.len();
                    paint(&mut slots, start, end, mark.layer, idx);
                    cursor = end;
                }
            }
            MarkAnchor::Offsets { start, end } => {
                // A stale or mid-character range is inert, like a stale content anchor
                let valid = *start < *end
                    && *end <= paragraph.len()
                    && paragraph.is_char_boundary(*start)
                    && paragraph.is_char_boundary(*end);
                if valid {
                    paint(&mut slots, *start, *end, mark.layer, idx);
                }
            }
        }
    }

    // Collapse the slot vector into maximal runs. Slot values only change at
    // mark span edges, which are always char boundaries, so the byte slices
    // below are valid UTF-8 cuts.
    let mut segments = Vec::new();
    let mut run_start = 0;
    let mut current = slots[0];

    for (i, slot) in slots.iter().enumerate().skip(1) {
        if *slot != current {
            segments.push(make_segment(paragraph, marks, run_start, i, current));
            run_start = i;
            current = *slot;
        }
    }
    segments.push(make_segment(paragraph, marks, run_start, paragraph.len(), current));

    segments
}

fn paint(slots: &mut [Slot], start: usize, end: usize, layer: MarkLayer, idx: usize) {
    for slot in &mut slots[start..end] {
        match layer {
            MarkLayer::Ink => slot.0 = Some(idx),
            MarkLayer::Wash => slot.1 = Some(idx),
        }
    }
}

fn make_segment<'a>(
    paragraph: &'a str,
    marks: &'a [Mark],
    start: usize,
    end: usize,
    slot: Slot,
) -> Segment<'a> {
    Segment {
        text: &paragraph[start..end],
        ink: slot.0.map(|i| &marks[i]),
        wash: slot.1.map(|i| &marks[i]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Mark, MarkLayer, PenWidth};

    fn wash(text: &str) -> Mark {
        Mark::new(0, text, MarkLayer::Wash, "yellow", None)
    }

    fn ink(text: &str) -> Mark {
        Mark::new(0, text, MarkLayer::Ink, "red", Some(PenWidth::Thin))
    }

    fn joined(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text).collect()
    }

    #[test]
    fn test_no_marks_yields_single_plain_segment() {
        let segments = compose("a quiet paragraph", &[]);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "a quiet paragraph");
        assert!(segments[0].is_plain());
    }

    #[test]
    fn test_segments_cover_paragraph_exactly() {
        let text = "cat sat on cat mat";
        let marks = vec![wash("cat"), ink("sat")];
        let segments = compose(text, &marks);
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn test_multi_occurrence_marks_every_match() {
        let marks = vec![wash("cat")];
        let segments = compose("cat sat on cat mat", &marks);

        let expected: Vec<(&str, bool)> = vec![
            ("cat", false),
            (" sat on ", true),
            ("cat", false),
            (" mat", true),
        ];
        let got: Vec<(&str, bool)> = segments.iter().map(|s| (s.text, s.is_plain())).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_overlapping_layers_split_into_three_runs() {
        // ink covers "the door", wash covers "door opened":
        // ink-only "the ", ink+wash "door", wash-only " opened"
        let text = "the door opened";
        let marks = vec![ink("the door"), wash("door opened")];
        let segments = compose(text, &marks);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].text, "the ");
        assert!(segments[0].ink.is_some() && segments[0].wash.is_none());
        assert_eq!(segments[1].text, "door");
        assert!(segments[1].ink.is_some() && segments[1].wash.is_some());
        assert_eq!(segments[2].text, " opened");
        assert!(segments[2].ink.is_none() && segments[2].wash.is_some());
    }

    #[test]
    fn test_same_layer_overlap_later_mark_wins() {
        let text = "the door opened";
        let first = wash("the door");
        let second = wash("door opened");
        let marks = vec![first.clone(), second.clone()];
        let segments = compose(text, &marks);

        // "the " keeps the first mark, "door opened" is owned by the second
        assert_eq!(segments[0].text, "the ");
        assert_eq!(segments[0].wash.unwrap().id, first.id);
        assert_eq!(segments[1].text, "door opened");
        assert_eq!(segments[1].wash.unwrap().id, second.id);
    }

    #[test]
    fn test_inert_mark_paints_nothing() {
        let marks = [wash("vanished text")];
        let segments = compose("the paragraph changed", &marks);
        assert_eq!(segments.len(), 1);
        assert!(segments[0].is_plain());
    }

    #[test]
    fn test_empty_mark_text_is_ignored() {
        let marks = [wash("")];
        let segments = compose("some text", &marks);
        assert_eq!(segments.len(), 1);
        assert!(segments[0].is_plain());
    }

    #[test]
    fn test_non_ascii_paragraph_boundaries() {
        let text = "pattern—a garish floral—repeated";
        let marks = vec![wash("garish")];
        let segments = compose(text, &marks);
        assert_eq!(joined(&segments), text);
        assert_eq!(segments[1].text, "garish");
        assert!(!segments[1].is_plain());
    }

    #[test]
    fn test_offset_anchor_marks_single_span() {
        let text = "cat sat on cat mat";
        let mark = Mark::at_offsets(0, "cat", 11, 14, MarkLayer::Wash, "yellow", None);
        let segments = compose(text, std::slice::from_ref(&mark));

        // Only the second "cat" is covered, unlike the content anchor
        assert_eq!(segments.len(), 3);
        assert!(segments[0].is_plain());
        assert_eq!(segments[1].text, "cat");
        assert!(!segments[1].is_plain());
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn test_stale_offset_anchor_is_inert() {
        let mark = Mark::at_offsets(0, "x", 5, 50, MarkLayer::Ink, "red", None);
        let segments = compose("short", std::slice::from_ref(&mark));
        assert_eq!(segments.len(), 1);
        assert!(segments[0].is_plain());
    }

    #[test]
    fn test_duplicate_marks_render_like_one() {
        let a = wash("cat");
        let b = wash("cat");
        let marks = vec![a, b.clone()];
        let segments = compose("cat mat", &marks);
        assert_eq!(segments[0].text, "cat");
        // the later duplicate owns the characters
        assert_eq!(segments[0].wash.unwrap().id, b.id);
    }
}
