//! WASM-owned session storage and lifecycle
//!
//! The reading session lives inside the WASM module behind a mutex, the same
//! way the editor holds its loaded document: JavaScript never owns the state,
//! it only calls operations and receives snapshots. Alongside the session sit
//! the application state (theme) and the landing-page marquee, which exist
//! independently of any open book.

use lazy_static::lazy_static;
use std::sync::Mutex;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{serialize, validation_error};
use crate::models::{find_book, AppState, ReaderSession, Theme, Tool};
use crate::reader::{Marquee, ReaderMode};
use crate::{wasm_info, wasm_warn};

lazy_static! {
    /// The open reading session, `None` outside the reader page.
    pub(crate) static ref SESSION: Mutex<Option<ReaderSession>> = Mutex::new(None);

    /// Application-wide state (theme). Always present.
    pub(crate) static ref APP: Mutex<AppState> = Mutex::new(AppState::new());

    /// Landing-page marquee, `None` until the strip is measured.
    pub(crate) static ref MARQUEE: Mutex<Option<Marquee>> = Mutex::new(None);
}

/// Run an operation against the open session, or fail with a uniform error.
pub(crate) fn with_session<T>(
    f: impl FnOnce(&ReaderSession) -> Result<T, JsValue>,
) -> Result<T, JsValue> {
    let guard = SESSION.lock().unwrap();
    match guard.as_ref() {
        Some(session) => f(session),
        None => Err(validation_error("No reading session is open")),
    }
}

/// Mutable variant of [`with_session`].
pub(crate) fn with_session_mut<T>(
    f: impl FnOnce(&mut ReaderSession) -> Result<T, JsValue>,
) -> Result<T, JsValue> {
    let mut guard = SESSION.lock().unwrap();
    match guard.as_mut() {
        Some(session) => f(session),
        None => Err(validation_error("No reading session is open")),
    }
}

/// UI-facing summary of the open session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReaderSnapshot {
    pub book_id: u32,
    pub book_title: String,
    pub paragraph_count: usize,
    pub font_size: u32,
    pub active_tool: Option<Tool>,
    pub pen_width: String,
    pub mode: ReaderMode,
    pub theme: Theme,
}

pub(crate) fn snapshot_of(session: &ReaderSession, app: &AppState) -> ReaderSnapshot {
    ReaderSnapshot {
        book_id: session.book_id(),
        book_title: session.book_title().to_string(),
        paragraph_count: session.paragraph_count(),
        font_size: session.font_size(),
        active_tool: session.active_tool(),
        pen_width: session.pen_width().css().to_string(),
        mode: session.focus.mode(),
        theme: app.theme(),
    }
}

/// Open a reading session for a catalog book and store it internally.
///
/// Returns the initial snapshot, or `null` when the id is not in the
/// catalog (the shell shows its not-found panel; this is not an error).
#[wasm_bindgen(js_name = openReader)]
pub fn open_reader(book_id: u32) -> Result<JsValue, JsValue> {
    wasm_info!("openReader called with book_id={}", book_id);

    let book = match find_book(book_id) {
        Some(book) => book,
        None => {
            wasm_warn!("openReader: book {} not in catalog", book_id);
            return Ok(JsValue::NULL);
        }
    };

    let session = ReaderSession::open(book);
    let snapshot = snapshot_of(&session, &APP.lock().unwrap());
    *SESSION.lock().unwrap() = Some(session);

    serialize(&snapshot, "Reader snapshot serialization error")
}

/// Drop the session and everything in it (marks, notes, tool state).
#[wasm_bindgen(js_name = closeReader)]
pub fn close_reader() {
    wasm_info!("closeReader called");
    *SESSION.lock().unwrap() = None;
}

/// Current session snapshot, for shells that re-render from scratch.
#[wasm_bindgen(js_name = getReaderSnapshot)]
pub fn get_reader_snapshot() -> Result<JsValue, JsValue> {
    with_session(|session| {
        let snapshot = snapshot_of(session, &APP.lock().unwrap());
        serialize(&snapshot, "Reader snapshot serialization error")
    })
}
