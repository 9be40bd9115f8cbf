//! Visual themes and the shared application state handle
//!
//! The theme used to live in ambient page context; here it is an explicit
//! `AppState` value with read/update operations, passed to whatever needs to
//! change it. The API layer owns the single instance and mirrors the active
//! theme into the document's `data-theme` attribute.

use serde::{Deserialize, Serialize};

/// The fixed theme presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Default,
    SliceOfLife,
    Thriller,
}

impl Theme {
    /// `data-theme` attribute value; `None` means the attribute is removed.
    pub fn data_attribute(&self) -> Option<&'static str> {
        match self {
            Theme::Default => None,
            Theme::SliceOfLife => Some("slice-of-life"),
            Theme::Thriller => Some("thriller"),
        }
    }

    /// Parse an attribute value back into a theme, unknown values fall back
    /// to the default preset.
    pub fn from_data_attribute(value: &str) -> Theme {
        match value {
            "slice-of-life" => Theme::SliceOfLife,
            "thriller" => Theme::Thriller,
            _ => Theme::Default,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Default
    }
}

/// Explicitly passed application state (no ambient globals in core logic).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    theme: Theme,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}
