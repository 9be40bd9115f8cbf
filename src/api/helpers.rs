//! Shared helpers for WASM API operations
//!
//! Common patterns for serialization, deserialization, error handling, and
//! validation across the API modules.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Validation Helpers
// ============================================================================

/// Convert a validation error to a JsValue
pub fn validation_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    log_error(&msg);
    JsValue::from_str(&msg)
}

/// Parse a tool name from the dock ("pen" / "highlighter" / "eraser")
pub fn tool_from_str(tool: &str) -> Result<crate::models::Tool, String> {
    use crate::models::Tool;

    match tool {
        "pen" => Ok(Tool::Pen),
        "highlighter" => Ok(Tool::Highlighter),
        "eraser" => Ok(Tool::Eraser),
        other => Err(format!("Unknown tool: '{}'", other)),
    }
}

/// Parse an annotation layer name ("ink" / "wash")
pub fn layer_from_str(layer: &str) -> Result<crate::models::MarkLayer, String> {
    use crate::models::MarkLayer;

    match layer {
        "ink" => Ok(MarkLayer::Ink),
        "wash" => Ok(MarkLayer::Wash),
        other => Err(format!("Unknown layer: '{}'", other)),
    }
}

/// Parse an erase target ("ink" / "wash" / "both")
pub fn erase_target_from_str(target: &str) -> Result<crate::annotate::EraseTarget, String> {
    use crate::annotate::EraseTarget;

    match target {
        "ink" => Ok(EraseTarget::Ink),
        "wash" => Ok(EraseTarget::Wash),
        "both" => Ok(EraseTarget::Both),
        other => Err(format!("Unknown erase target: '{}'", other)),
    }
}

/// Parse a pen width ("2px" / "4px")
pub fn pen_width_from_str(width: &str) -> Result<crate::models::PenWidth, String> {
    use crate::models::PenWidth;

    match width {
        "2px" => Ok(PenWidth::Thin),
        "4px" => Ok(PenWidth::Thick),
        other => Err(format!("Unknown pen width: '{}'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::EraseTarget;
    use crate::models::{MarkLayer, PenWidth, Tool};

    #[test]
    fn test_tool_parsing() {
        assert_eq!(tool_from_str("pen"), Ok(Tool::Pen));
        assert_eq!(tool_from_str("eraser"), Ok(Tool::Eraser));
        assert!(tool_from_str("brush").is_err());
    }

    #[test]
    fn test_layer_and_target_parsing() {
        assert_eq!(layer_from_str("ink"), Ok(MarkLayer::Ink));
        assert_eq!(layer_from_str("wash"), Ok(MarkLayer::Wash));
        assert_eq!(erase_target_from_str("both"), Ok(EraseTarget::Both));
        assert!(erase_target_from_str("all").is_err());
    }

    #[test]
    fn test_pen_width_parsing() {
        assert_eq!(pen_width_from_str("2px"), Ok(PenWidth::Thin));
        assert_eq!(pen_width_from_str("4px"), Ok(PenWidth::Thick));
        assert!(pen_width_from_str("3px").is_err());
    }
}
