//! Fixed annotation color palettes
//!
//! Two enumerable tables: pastel highlighter washes and solid pen inks.
//! Each entry maps a style key to the UI swatch color and the value the
//! renderer actually paints. The compositor only ever resolves
//! `style_key -> entry` and is agnostic to table size.

use serde::Serialize;

/// One palette entry: a style key plus its two color faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    /// Style key stored on marks
    pub key: &'static str,
    /// Opaque swatch color shown in the tool menu
    pub ui: &'static str,
    /// Color composited into the text background
    pub value: &'static str,
}

/// Highlighter colors (translucent pastels)
pub const HIGHLIGHTER_COLORS: [PaletteEntry; 4] = [
    PaletteEntry { key: "yellow", ui: "#FDE68A", value: "rgba(253, 230, 138, 0.5)" },
    PaletteEntry { key: "blue", ui: "#93C5FD", value: "rgba(147, 197, 253, 0.4)" },
    PaletteEntry { key: "green", ui: "#86EFAC", value: "rgba(134, 239, 172, 0.4)" },
    PaletteEntry { key: "pink", ui: "#F9A8D4", value: "rgba(249, 168, 212, 0.4)" },
];

/// Pen colors (solid ink)
pub const PEN_COLORS: [PaletteEntry; 6] = [
    PaletteEntry { key: "black", ui: "#1F2937", value: "#000000" },
    PaletteEntry { key: "red", ui: "#EF4444", value: "#EF4444" },
    PaletteEntry { key: "blue", ui: "#3B82F6", value: "#3B82F6" },
    PaletteEntry { key: "green", ui: "#22C55E", value: "#22C55E" },
    // Amber for visibility
    PaletteEntry { key: "yellow", ui: "#F59E0B", value: "#F59E0B" },
    PaletteEntry { key: "pink", ui: "#EC4899", value: "#EC4899" },
];

/// Resolve a highlighter style key, `None` for unknown keys.
pub fn highlighter_color(key: &str) -> Option<&'static PaletteEntry> {
    HIGHLIGHTER_COLORS.iter().find(|e| e.key == key)
}

/// Resolve a pen style key, `None` for unknown keys.
pub fn pen_color(key: &str) -> Option<&'static PaletteEntry> {
    PEN_COLORS.iter().find(|e| e.key == key)
}
