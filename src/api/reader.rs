//! Reader-surface API operations
//!
//! Focus mode, theme, font size, the status-capsule clock, and the landing
//! marquee. This is the only module that touches the DOM: fullscreen
//! requests and `data-theme` writes go through `web-sys` here so the rest
//! of the crate stays host-agnostic.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::helpers::{serialize, validation_error};
use super::session::{with_session_mut, APP, MARQUEE};
use crate::models::Theme;
use crate::reader::{ClockStamp, FocusCommand, Marquee, ReaderMode};
use crate::{wasm_info, wasm_log, wasm_warn};

/// Mirror the active theme into the document root's `data-theme` attribute.
/// Outside a browser (unit tests) there is no document; that is fine.
fn apply_theme_attribute(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());

    if let Some(root) = root {
        let result = match theme.data_attribute() {
            Some(value) => root.set_attribute("data-theme", value),
            None => root.remove_attribute("data-theme"),
        };
        if result.is_err() {
            wasm_warn!("Failed to write data-theme attribute");
        }
    }
}

/// Ask the browser to enter or leave fullscreen. Failures are logged and
/// swallowed: the fullscreenchange listener reconciles us either way.
fn run_focus_command(command: FocusCommand) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return,
    };

    match command {
        FocusCommand::EnterFullscreen => {
            if let Some(root) = document.document_element() {
                if root.request_fullscreen().is_err() {
                    wasm_warn!("Fullscreen request rejected by the browser");
                }
            }
        }
        FocusCommand::ExitFullscreen => document.exit_fullscreen(),
    }
}

/// Result of a focus toggle or reconciliation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct FocusUpdate {
    mode: ReaderMode,
    theme: Theme,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<FocusCommand>,
}

/// Toggle immersive reading mode. Entering switches the theme preset and
/// requests fullscreen; leaving requests fullscreen exit.
#[wasm_bindgen(js_name = toggleFocusMode)]
pub fn toggle_focus_mode() -> Result<JsValue, JsValue> {
    wasm_info!("toggleFocusMode called");

    with_session_mut(|session| {
        let mut app = APP.lock().unwrap();
        let command = session.focus.toggle(&mut app);
        let update = FocusUpdate {
            mode: session.focus.mode(),
            theme: app.theme(),
            command: Some(command),
        };
        drop(app);

        apply_theme_attribute(update.theme);
        run_focus_command(command);
        serialize(&update, "Focus update serialization error")
    })
}

/// Reconcile focus mode against the host's fullscreen status. The shell
/// calls this from its fullscreenchange listener, so an Escape press or a
/// window-manager exit lands here too.
#[wasm_bindgen(js_name = syncFullscreen)]
pub fn sync_fullscreen(is_fullscreen: bool) -> Result<JsValue, JsValue> {
    wasm_log!("syncFullscreen called: is_fullscreen={}", is_fullscreen);

    with_session_mut(|session| {
        session.focus.sync_fullscreen(is_fullscreen);
        let update = FocusUpdate {
            mode: session.focus.mode(),
            theme: APP.lock().unwrap().theme(),
            command: None,
        };
        serialize(&update, "Focus update serialization error")
    })
}

/// Switch the visual theme preset ("default" / "slice-of-life" / "thriller").
#[wasm_bindgen(js_name = setTheme)]
pub fn set_theme(theme: &str) -> Result<(), JsValue> {
    wasm_info!("setTheme called: {}", theme);

    let theme = Theme::from_data_attribute(theme);
    APP.lock().unwrap().set_theme(theme);
    apply_theme_attribute(theme);
    Ok(())
}

/// Step the reader font size up. Returns the new size in px.
#[wasm_bindgen(js_name = increaseFontSize)]
pub fn increase_font_size() -> Result<u32, JsValue> {
    with_session_mut(|session| Ok(session.increase_font()))
}

/// Step the reader font size down. Returns the new size in px.
#[wasm_bindgen(js_name = decreaseFontSize)]
pub fn decrease_font_size() -> Result<u32, JsValue> {
    with_session_mut(|session| Ok(session.decrease_font()))
}

/// Current clock stamp for the status capsule. The shell calls this on its
/// one-second tick; the call is idempotent within a second.
#[wasm_bindgen(js_name = getClockStamp)]
pub fn get_clock_stamp() -> Result<JsValue, JsValue> {
    serialize(&ClockStamp::now(), "Clock stamp serialization error")
}

/// Create (or re-create) the landing marquee with a measured content width.
#[wasm_bindgen(js_name = initMarquee)]
pub fn init_marquee(content_width: f64) {
    wasm_info!("initMarquee called: content_width={}", content_width);
    *MARQUEE.lock().unwrap() = Some(Marquee::new(content_width));
}

/// Advance the marquee by an elapsed interval and return the render offset.
#[wasm_bindgen(js_name = advanceMarquee)]
pub fn advance_marquee(delta_ms: f64) -> Result<f64, JsValue> {
    let mut guard = MARQUEE.lock().unwrap();
    match guard.as_mut() {
        Some(marquee) => Ok(marquee.advance(delta_ms)),
        None => Err(validation_error("Marquee is not initialized")),
    }
}

/// Pointer entered or left the strip (hover slows the scroll).
#[wasm_bindgen(js_name = setMarqueeHover)]
pub fn set_marquee_hover(hovered: bool) -> Result<(), JsValue> {
    let mut guard = MARQUEE.lock().unwrap();
    match guard.as_mut() {
        Some(marquee) => {
            marquee.set_hovered(hovered);
            Ok(())
        }
        None => Err(validation_error("Marquee is not initialized")),
    }
}

/// The strip was re-measured after a viewport resize.
#[wasm_bindgen(js_name = setMarqueeWidth)]
pub fn set_marquee_width(content_width: f64) -> Result<(), JsValue> {
    let mut guard = MARQUEE.lock().unwrap();
    match guard.as_mut() {
        Some(marquee) => {
            marquee.set_content_width(content_width);
            Ok(())
        }
        None => Err(validation_error("Marquee is not initialized")),
    }
}

/// Drop the marquee when the landing page unmounts.
#[wasm_bindgen(js_name = destroyMarquee)]
pub fn destroy_marquee() {
    wasm_log!("destroyMarquee called");
    *MARQUEE.lock().unwrap() = None;
}
