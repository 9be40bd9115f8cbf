// End-to-end annotation flow over the library types: open a session from
// the catalog, mark text on both layers, compose the display list, probe
// and erase, and attach notes.

use reader_wasm::models::{find_book, MarkLayer, PenWidth, ReaderSession};
use reader_wasm::annotate::EraseTarget;
use reader_wasm::renderers::render_paragraph;

fn open_session() -> ReaderSession {
    ReaderSession::open(find_book(1).expect("book 1 is in the catalog"))
}

#[test]
fn test_full_annotation_round() {
    let mut session = open_session();
    let paragraph = session.paragraph(0).unwrap().to_string();
    assert!(paragraph.contains("The door opened"));

    // Highlight a phrase, then underline an overlapping one
    session
        .store
        .create_mark(0, &paragraph, "door opened", MarkLayer::Wash, "yellow", None)
        .expect("wash mark");
    session
        .store
        .create_mark(
            0,
            &paragraph,
            "The door",
            MarkLayer::Ink,
            "red",
            Some(PenWidth::Thick),
        )
        .expect("ink mark");

    let view = render_paragraph(&session, 0).expect("paragraph 0 renders");

    // Segments reassemble the paragraph exactly
    let joined: String = view.segments.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(joined, paragraph);

    // The overlap produced ink-only, ink+wash, and wash-only runs
    let styled: Vec<_> = view.segments.iter().filter(|s| s.style.is_some()).collect();
    assert_eq!(styled.len(), 3);

    // The overlapped run carries both background layers, ink first
    let combined = styled
        .iter()
        .find(|s| s.text == "door")
        .expect("overlap run exists");
    let style = combined.style.as_ref().unwrap();
    assert_eq!(style.background_size, "100% 4px, 100% 100%");
    assert!(style.background_image.starts_with("linear-gradient(to right, #EF4444"));
}

#[test]
fn test_erase_probe_then_erase() {
    let mut session = open_session();
    let paragraph = session.paragraph(0).unwrap().to_string();

    session
        .store
        .create_mark(0, &paragraph, "The door", MarkLayer::Wash, "green", None)
        .unwrap();
    session
        .store
        .create_mark(0, &paragraph, "door opened", MarkLayer::Ink, "black", None)
        .unwrap();

    // The eraser menu sees both layers under the selection
    let candidates = session.store.erase_candidates(0, "door");
    assert!(candidates.has_ink && candidates.has_wash);

    // Erase only the wash; the ink survives and still renders
    assert_eq!(session.store.erase(0, "door", EraseTarget::Wash), 1);
    let view = render_paragraph(&session, 0).unwrap();
    assert!(view.segments.iter().any(|s| s.style.is_some()));

    assert_eq!(session.store.erase(0, "door", EraseTarget::Both), 1);
    let view = render_paragraph(&session, 0).unwrap();
    assert!(view.segments.iter().all(|s| s.style.is_none()));
}

#[test]
fn test_notes_appear_in_paragraph_view() {
    let mut session = open_session();
    let note_id = session
        .store
        .create_note(4, "check this passage again")
        .unwrap()
        .id
        .clone();

    let view = render_paragraph(&session, 4).unwrap();
    assert_eq!(view.notes.len(), 1);
    assert_eq!(view.notes[0].content, "check this passage again");

    assert!(session.store.delete_note(&note_id));
    let view = render_paragraph(&session, 4).unwrap();
    assert!(view.notes.is_empty());
}

#[test]
fn test_sessions_are_isolated() {
    let mut first = open_session();
    let paragraph = first.paragraph(0).unwrap().to_string();
    first
        .store
        .create_mark(0, &paragraph, "The door", MarkLayer::Wash, "pink", None)
        .unwrap();

    // A fresh session over the same book starts clean
    let second = open_session();
    assert!(second.store.marks().is_empty());
    let view = render_paragraph(&second, 0).unwrap();
    assert!(view.segments.iter().all(|s| s.style.is_none()));
}
