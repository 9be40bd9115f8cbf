//! WASM build test
//!
//! Exercises the JavaScript-facing API functions in a browser environment.

#![cfg(target_arch = "wasm32")]

use reader_wasm::api::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_catalog_is_available() {
    let books = get_books();
    assert!(books.is_ok());

    let missing = get_book(999).unwrap();
    assert!(missing.is_null());
}

#[wasm_bindgen_test]
fn test_reader_lifecycle() {
    let snapshot = open_reader(1).unwrap();
    assert!(!snapshot.is_null());

    assert!(get_reader_snapshot().is_ok());
    assert!(render_book().is_ok());

    close_reader();
    assert!(get_reader_snapshot().is_err());
}

#[wasm_bindgen_test]
fn test_mark_create_and_erase() {
    open_reader(1).unwrap();

    let mark = create_mark(0, "The door", "wash", "yellow", None);
    assert!(mark.is_ok());

    let removed = erase_marks(0, "door", "wash").unwrap();
    assert_eq!(removed, 1);

    close_reader();
}

#[wasm_bindgen_test]
fn test_unknown_book_opens_to_null() {
    let result = open_reader(424242).unwrap();
    assert!(result.is_null());
}

#[wasm_bindgen_test]
fn test_marquee_ticks() {
    init_marquee(800.0);
    let offset = advance_marquee(160.0).unwrap();
    assert!(offset < 0.0);
    destroy_marquee();
    assert!(advance_marquee(16.0).is_err());
}

#[wasm_bindgen_test]
fn test_clock_stamp_shape() {
    let stamp = get_clock_stamp();
    assert!(stamp.is_ok());
}
