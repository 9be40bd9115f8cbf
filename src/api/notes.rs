//! Note API operations
//!
//! Paragraph-scoped marginalia. Notes are independent of marks and share
//! their lifetime with the session.

use wasm_bindgen::prelude::*;

use super::helpers::{serialize, validation_error};
use super::session::{with_session, with_session_mut};
use crate::{wasm_info, wasm_log};

/// Attach a note to a paragraph. Whitespace-only content is rejected.
/// Returns the stored note (id, content, timestamp).
#[wasm_bindgen(js_name = createNote)]
pub fn create_note(paragraph_index: usize, content: &str) -> Result<JsValue, JsValue> {
    wasm_info!("createNote called: paragraph={}", paragraph_index);

    with_session_mut(|session| {
        let note = session
            .store
            .create_note(paragraph_index, content)
            .map_err(|e| validation_error(e.to_string()))?;
        serialize(note, "Note serialization error")
    })
}

/// Delete a note by id. Returns whether anything was removed.
#[wasm_bindgen(js_name = deleteNote)]
pub fn delete_note(note_id: &str) -> Result<bool, JsValue> {
    wasm_info!("deleteNote called: id={}", note_id);

    with_session_mut(|session| Ok(session.store.delete_note(note_id)))
}

/// Notes attached to one paragraph, in creation order.
#[wasm_bindgen(js_name = getNotes)]
pub fn get_notes(paragraph_index: usize) -> Result<JsValue, JsValue> {
    wasm_log!("getNotes called: paragraph={}", paragraph_index);

    with_session(|session| {
        serialize(
            &session.store.notes_for(paragraph_index),
            "Notes serialization error",
        )
    })
}
