//! Mark and note collections
//!
//! Append/remove-only in-memory store owned by the reading session. Marks
//! and notes have independent lifecycles; both are scoped to a paragraph
//! and discarded with the session. Creation validates against the current
//! paragraph text, erasing uses the loose bidirectional substring overlap
//! rule so a partial selection can remove a larger mark and vice versa.

use serde::Serialize;

use super::AnnotationError;
use crate::models::{Mark, MarkLayer, Note, PenWidth};

/// Which layers an erase call applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseTarget {
    Ink,
    Wash,
    Both,
}

impl EraseTarget {
    fn applies_to(&self, layer: MarkLayer) -> bool {
        match self {
            EraseTarget::Both => true,
            EraseTarget::Ink => layer == MarkLayer::Ink,
            EraseTarget::Wash => layer == MarkLayer::Wash,
        }
    }
}

/// What an eraser selection would hit, used to build the eraser menu.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EraseCandidates {
    pub has_ink: bool,
    pub has_wash: bool,
}

/// In-memory annotation collections for one reading session.
#[derive(Debug, Clone, Default)]
pub struct AnnotationStore {
    marks: Vec<Mark>,
    notes: Vec<Note>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All marks, in creation order.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Marks belonging to one paragraph, in creation order. The compositor
    /// relies on this order for its same-layer overwrite rule.
    pub fn marks_for(&self, paragraph_index: usize) -> Vec<&Mark> {
        self.marks
            .iter()
            .filter(|m| m.paragraph_index == paragraph_index)
            .collect()
    }

    /// Create a content-anchored mark from a selection.
    ///
    /// The selection must be non-empty and occur verbatim in the paragraph.
    /// Duplicates of existing marks are permitted and appended as-is.
    pub fn create_mark(
        &mut self,
        paragraph_index: usize,
        paragraph_text: &str,
        selected_text: &str,
        layer: MarkLayer,
        style_key: &str,
        pen_width: Option<PenWidth>,
    ) -> Result<&Mark, AnnotationError> {
        if selected_text.is_empty() {
            return Err(AnnotationError::EmptySelection);
        }
        if !paragraph_text.contains(selected_text) {
            return Err(AnnotationError::TextNotInParagraph(paragraph_index));
        }

        self.marks.push(Mark::new(
            paragraph_index,
            selected_text,
            layer,
            style_key,
            pen_width,
        ));
        Ok(self.marks.last().unwrap())
    }

    /// Create an offset-anchored mark covering exactly `start..end`.
    ///
    /// This is the positional alternative to content anchoring: repeated
    /// text elsewhere in the paragraph is not affected.
    pub fn create_mark_at(
        &mut self,
        paragraph_index: usize,
        paragraph_text: &str,
        start: usize,
        end: usize,
        layer: MarkLayer,
        style_key: &str,
        pen_width: Option<PenWidth>,
    ) -> Result<&Mark, AnnotationError> {
        let valid = start < end
            && end <= paragraph_text.len()
            && paragraph_text.is_char_boundary(start)
            && paragraph_text.is_char_boundary(end);
        if !valid {
            return Err(AnnotationError::InvalidOffsets { start, end });
        }

        self.marks.push(Mark::at_offsets(
            paragraph_index,
            &paragraph_text[start..end],
            start,
            end,
            layer,
            style_key,
            pen_width,
        ));
        Ok(self.marks.last().unwrap())
    }

    /// Remove every mark that overlaps the selection on the given paragraph
    /// and matches the target layer. Returns how many were removed.
    ///
    /// Overlap is bidirectional substring containment: the selection may be
    /// inside the mark's text or the mark's text inside the selection.
    pub fn erase(
        &mut self,
        paragraph_index: usize,
        selected_text: &str,
        target: EraseTarget,
    ) -> usize {
        let before = self.marks.len();
        self.marks.retain(|m| {
            if m.paragraph_index != paragraph_index {
                return true;
            }
            if !overlaps(&m.text, selected_text) {
                return true;
            }
            !target.applies_to(m.layer)
        });
        before - self.marks.len()
    }

    /// Probe what an erase over this selection would hit.
    pub fn erase_candidates(&self, paragraph_index: usize, selected_text: &str) -> EraseCandidates {
        let mut candidates = EraseCandidates::default();
        for m in self
            .marks
            .iter()
            .filter(|m| m.paragraph_index == paragraph_index && overlaps(&m.text, selected_text))
        {
            match m.layer {
                MarkLayer::Ink => candidates.has_ink = true,
                MarkLayer::Wash => candidates.has_wash = true,
            }
        }
        candidates
    }

    /// All notes, in creation order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Notes attached to one paragraph.
    pub fn notes_for(&self, paragraph_index: usize) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|n| n.paragraph_index == paragraph_index)
            .collect()
    }

    /// Append a note. Empty or whitespace-only content is rejected.
    pub fn create_note(
        &mut self,
        paragraph_index: usize,
        content: &str,
    ) -> Result<&Note, AnnotationError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(AnnotationError::EmptySelection);
        }
        self.notes.push(Note::new(paragraph_index, trimmed));
        Ok(self.notes.last().unwrap())
    }

    /// Delete a note by id. Returns whether anything was removed.
    pub fn delete_note(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        self.notes.len() != before
    }
}

fn overlaps(mark_text: &str, selection: &str) -> bool {
    !selection.is_empty() && (mark_text.contains(selection) || selection.contains(mark_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAGRAPH: &str = "The door opened with the kind of silence that screams.";

    fn store_with_mark(layer: MarkLayer) -> AnnotationStore {
        let mut store = AnnotationStore::new();
        store
            .create_mark(0, PARAGRAPH, "The door", layer, "yellow", None)
            .unwrap();
        store
    }

    #[test]
    fn test_create_mark_validates_selection() {
        let mut store = AnnotationStore::new();
        assert_eq!(
            store.create_mark(0, PARAGRAPH, "", MarkLayer::Wash, "yellow", None),
            Err(AnnotationError::EmptySelection)
        );
        assert_eq!(
            store.create_mark(0, PARAGRAPH, "window", MarkLayer::Wash, "yellow", None),
            Err(AnnotationError::TextNotInParagraph(0))
        );
        assert!(store.marks().is_empty());
    }

    #[test]
    fn test_erase_selection_inside_mark() {
        let mut store = store_with_mark(MarkLayer::Wash);
        assert_eq!(store.erase(0, "door", EraseTarget::Wash), 1);
        assert!(store.marks().is_empty());
    }

    #[test]
    fn test_erase_mark_inside_selection() {
        let mut store = store_with_mark(MarkLayer::Wash);
        assert_eq!(store.erase(0, "The door opened", EraseTarget::Both), 1);
        assert!(store.marks().is_empty());
    }

    #[test]
    fn test_erase_disjoint_selection_is_noop() {
        let mut store = store_with_mark(MarkLayer::Wash);
        assert_eq!(store.erase(0, "window", EraseTarget::Both), 0);
        assert_eq!(store.marks().len(), 1);
    }

    #[test]
    fn test_erase_respects_layer_target() {
        let mut store = store_with_mark(MarkLayer::Ink);
        assert_eq!(store.erase(0, "door", EraseTarget::Wash), 0);
        assert_eq!(store.erase(0, "door", EraseTarget::Ink), 1);
    }

    #[test]
    fn test_erase_respects_paragraph_scope() {
        let mut store = store_with_mark(MarkLayer::Wash);
        assert_eq!(store.erase(1, "door", EraseTarget::Both), 0);
        assert_eq!(store.marks().len(), 1);
    }

    #[test]
    fn test_erase_candidates_reports_both_layers() {
        let mut store = store_with_mark(MarkLayer::Wash);
        store
            .create_mark(0, PARAGRAPH, "door opened", MarkLayer::Ink, "red", Some(PenWidth::Thick))
            .unwrap();

        let candidates = store.erase_candidates(0, "door");
        assert!(candidates.has_ink);
        assert!(candidates.has_wash);

        let none = store.erase_candidates(0, "screams!");
        assert!(!none.has_ink && !none.has_wash);
    }

    #[test]
    fn test_duplicate_marks_are_kept() {
        let mut store = store_with_mark(MarkLayer::Wash);
        store
            .create_mark(0, PARAGRAPH, "The door", MarkLayer::Wash, "yellow", None)
            .unwrap();
        assert_eq!(store.marks().len(), 2);
        assert_ne!(store.marks()[0].id, store.marks()[1].id);
    }

    #[test]
    fn test_create_mark_at_rejects_bad_ranges() {
        let mut store = AnnotationStore::new();
        assert!(matches!(
            store.create_mark_at(0, PARAGRAPH, 10, 9, MarkLayer::Ink, "red", None),
            Err(AnnotationError::InvalidOffsets { .. })
        ));
        assert!(matches!(
            store.create_mark_at(0, PARAGRAPH, 0, 1000, MarkLayer::Ink, "red", None),
            Err(AnnotationError::InvalidOffsets { .. })
        ));
    }

    #[test]
    fn test_create_mark_at_snapshots_covered_text() {
        let mut store = AnnotationStore::new();
        let mark = store
            .create_mark_at(0, PARAGRAPH, 4, 8, MarkLayer::Wash, "green", None)
            .unwrap();
        assert_eq!(mark.text, "door");
    }

    #[test]
    fn test_notes_lifecycle() {
        let mut store = AnnotationStore::new();
        let id = store.create_note(2, "  a thought  ").unwrap().id.clone();
        assert_eq!(store.notes_for(2).len(), 1);
        assert_eq!(store.notes_for(2)[0].content, "a thought");

        assert!(store.delete_note(&id));
        assert!(!store.delete_note(&id));
        assert!(store.notes().is_empty());
    }

    #[test]
    fn test_blank_note_rejected() {
        let mut store = AnnotationStore::new();
        assert_eq!(
            store.create_note(0, "   "),
            Err(AnnotationError::EmptySelection)
        );
    }
}
