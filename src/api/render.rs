//! Display list API operations
//!
//! These hand JavaScript the fully composed paragraph views. The shell maps
//! each segment to a `<span>` or styled `<mark>` element and nothing else;
//! all annotation resolution already happened here.

use wasm_bindgen::prelude::*;

use super::helpers::serialize;
use super::session::with_session;
use crate::renderers::{render_all, render_paragraph};
use crate::wasm_log;

/// Compose one paragraph into its display list, `null` past the end of
/// the sample.
#[wasm_bindgen(js_name = renderParagraph)]
pub fn render_paragraph_view(paragraph_index: usize) -> Result<JsValue, JsValue> {
    wasm_log!("renderParagraph called: paragraph={}", paragraph_index);

    with_session(|session| match render_paragraph(session, paragraph_index) {
        Some(view) => serialize(&view, "Paragraph view serialization error"),
        None => Ok(JsValue::NULL),
    })
}

/// Compose the whole open sample, in paragraph order.
#[wasm_bindgen(js_name = renderBook)]
pub fn render_book() -> Result<JsValue, JsValue> {
    wasm_log!("renderBook called");

    with_session(|session| serialize(&render_all(session), "Display list serialization error"))
}
