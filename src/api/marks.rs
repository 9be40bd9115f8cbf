//! Mark and tool API operations
//!
//! Creating, erasing, and probing marks on the open session, plus the tool
//! dock state (active tool, pen width). Everything returns plain data; the
//! shell re-renders the affected paragraph afterwards.

use wasm_bindgen::prelude::*;

use super::helpers::{
    erase_target_from_str, layer_from_str, pen_width_from_str, serialize, tool_from_str,
    validation_error,
};
use super::session::{with_session, with_session_mut};
use crate::annotate::AnnotationError;
use crate::models::PenWidth;
use crate::{wasm_info, wasm_log};

fn optional_pen_width(width: Option<String>) -> Result<Option<PenWidth>, JsValue> {
    match width {
        Some(w) => pen_width_from_str(&w).map(Some).map_err(validation_error),
        None => Ok(None),
    }
}

/// Create a content-anchored mark from the current selection.
///
/// The mark applies to every occurrence of the selected text within the
/// paragraph. Returns the stored mark.
#[wasm_bindgen(js_name = createMark)]
pub fn create_mark(
    paragraph_index: usize,
    selected_text: &str,
    layer: &str,
    style_key: &str,
    pen_width: Option<String>,
) -> Result<JsValue, JsValue> {
    wasm_info!(
        "createMark called: paragraph={} layer={} style={}",
        paragraph_index,
        layer,
        style_key
    );

    let layer = layer_from_str(layer).map_err(validation_error)?;
    let pen_width = optional_pen_width(pen_width)?;

    with_session_mut(|session| {
        let text = session
            .paragraph(paragraph_index)
            .ok_or_else(|| {
                validation_error(AnnotationError::ParagraphOutOfRange(paragraph_index).to_string())
            })?
            .to_string();

        let mark = session
            .store
            .create_mark(paragraph_index, &text, selected_text, layer, style_key, pen_width)
            .map_err(|e| validation_error(e.to_string()))?;

        serialize(mark, "Mark serialization error")
    })
}

/// Create an offset-anchored mark covering exactly one byte range.
#[wasm_bindgen(js_name = createMarkAt)]
pub fn create_mark_at(
    paragraph_index: usize,
    start: usize,
    end: usize,
    layer: &str,
    style_key: &str,
    pen_width: Option<String>,
) -> Result<JsValue, JsValue> {
    wasm_info!(
        "createMarkAt called: paragraph={} range={}..{}",
        paragraph_index,
        start,
        end
    );

    let layer = layer_from_str(layer).map_err(validation_error)?;
    let pen_width = optional_pen_width(pen_width)?;

    with_session_mut(|session| {
        let text = session
            .paragraph(paragraph_index)
            .ok_or_else(|| {
                validation_error(AnnotationError::ParagraphOutOfRange(paragraph_index).to_string())
            })?
            .to_string();

        let mark = session
            .store
            .create_mark_at(paragraph_index, &text, start, end, layer, style_key, pen_width)
            .map_err(|e| validation_error(e.to_string()))?;

        serialize(mark, "Mark serialization error")
    })
}

/// Remove every mark overlapping the selection on the target layer(s).
/// Returns how many marks were removed (0 is a normal outcome).
#[wasm_bindgen(js_name = eraseMarks)]
pub fn erase_marks(
    paragraph_index: usize,
    selected_text: &str,
    target: &str,
) -> Result<usize, JsValue> {
    wasm_info!(
        "eraseMarks called: paragraph={} target={}",
        paragraph_index,
        target
    );

    let target = erase_target_from_str(target).map_err(validation_error)?;
    with_session_mut(|session| Ok(session.store.erase(paragraph_index, selected_text, target)))
}

/// Probe which layers an erase over this selection would hit. Drives the
/// eraser's ink/wash/both menu.
#[wasm_bindgen(js_name = getEraseCandidates)]
pub fn get_erase_candidates(
    paragraph_index: usize,
    selected_text: &str,
) -> Result<JsValue, JsValue> {
    with_session(|session| {
        let candidates = session.store.erase_candidates(paragraph_index, selected_text);
        serialize(&candidates, "Erase candidates serialization error")
    })
}

/// Marks on one paragraph, in creation order.
#[wasm_bindgen(js_name = getMarks)]
pub fn get_marks(paragraph_index: usize) -> Result<JsValue, JsValue> {
    with_session(|session| {
        serialize(
            &session.store.marks_for(paragraph_index),
            "Marks serialization error",
        )
    })
}

/// Select a dock tool, or deselect it when already active. Returns the
/// resulting active tool name, `null` for none.
#[wasm_bindgen(js_name = toggleTool)]
pub fn toggle_tool(tool: &str) -> Result<JsValue, JsValue> {
    wasm_log!("toggleTool called: {}", tool);

    let tool = tool_from_str(tool).map_err(validation_error)?;
    with_session_mut(|session| {
        serialize(&session.toggle_tool(tool), "Tool serialization error")
    })
}

/// Set the pen stroke width ("2px" / "4px").
#[wasm_bindgen(js_name = setPenWidth)]
pub fn set_pen_width(width: &str) -> Result<(), JsValue> {
    wasm_log!("setPenWidth called: {}", width);

    let width = pen_width_from_str(width).map_err(validation_error)?;
    with_session_mut(|session| {
        session.set_pen_width(width);
        Ok(())
    })
}
