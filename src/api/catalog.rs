//! Catalog API operations
//!
//! The catalog is static data compiled into the module; these functions
//! hand it to JavaScript in render order.

use wasm_bindgen::prelude::*;

use crate::api::helpers::serialize;
use crate::models::{find_book, HIGHLIGHTER_COLORS, PEN_COLORS, BOOKS};
use crate::wasm_log;

/// All books, in catalog (grid) order.
#[wasm_bindgen(js_name = getBooks)]
pub fn get_books() -> Result<JsValue, JsValue> {
    wasm_log!("getBooks called");
    serialize(&*BOOKS, "Catalog serialization error")
}

/// One book by id, or `null` when the id is unknown. A stale or mistyped
/// URL lands here, so absence is a value, not an error.
#[wasm_bindgen(js_name = getBook)]
pub fn get_book(book_id: u32) -> Result<JsValue, JsValue> {
    wasm_log!("getBook called with book_id={}", book_id);
    match find_book(book_id) {
        Some(book) => serialize(book, "Book serialization error"),
        None => Ok(JsValue::NULL),
    }
}

/// The highlighter palette, in dock order.
#[wasm_bindgen(js_name = getHighlighterColors)]
pub fn get_highlighter_colors() -> Result<JsValue, JsValue> {
    serialize(&HIGHLIGHTER_COLORS, "Palette serialization error")
}

/// The ink (pen) palette, in dock order.
#[wasm_bindgen(js_name = getPenColors)]
pub fn get_pen_colors() -> Result<JsValue, JsValue> {
    serialize(&PEN_COLORS, "Palette serialization error")
}
