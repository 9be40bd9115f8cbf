//! Portfolio Reader WASM Module
//!
//! This is the main WASM module for the author portfolio and e-book reader.
//! Rust owns the reading session, the annotation engine, and every derived
//! render payload; the JavaScript shell is a thin painter over the `api`
//! functions.

pub mod annotate;
pub mod api;
pub mod models;
pub mod reader;
pub mod renderers;

// Re-export commonly used types
pub use annotate::{compose, AnnotationError, AnnotationStore, Segment};
pub use models::{Book, Mark, MarkLayer, Note, PenWidth, ReaderSession, Theme, Tool};
pub use renderers::{render_all, render_paragraph, ParagraphView};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Portfolio Reader WASM module initialized");
}
