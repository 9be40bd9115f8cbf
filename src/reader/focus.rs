//! Focus (immersive) mode state machine
//!
//! Two states, `Normal` and `Immersive`. The in-app toggle asks the host to
//! enter or leave fullscreen and switches the theme preset; the host's
//! fullscreen status remains the source of truth, because the user can also
//! leave fullscreen externally (Escape, window manager). `sync_fullscreen`
//! reconciles our state against that status on every change signal.

use serde::{Deserialize, Serialize};

use crate::models::{AppState, Theme};

/// Presentation state of the reading surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReaderMode {
    Normal,
    Immersive,
}

/// What the host shell must do after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FocusCommand {
    EnterFullscreen,
    ExitFullscreen,
}

/// The focus-mode state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusState {
    mode: ReaderMode,
}

impl FocusState {
    pub fn new() -> Self {
        Self {
            mode: ReaderMode::Normal,
        }
    }

    pub fn mode(&self) -> ReaderMode {
        self.mode
    }

    pub fn is_immersive(&self) -> bool {
        self.mode == ReaderMode::Immersive
    }

    /// App-initiated toggle. Entering immersive switches the theme to the
    /// Slice-of-Life preset; leaving does not restore the previous theme
    /// (matching the observed site behavior).
    pub fn toggle(&mut self, app: &mut AppState) -> FocusCommand {
        match self.mode {
            ReaderMode::Normal => {
                self.mode = ReaderMode::Immersive;
                app.set_theme(Theme::SliceOfLife);
                FocusCommand::EnterFullscreen
            }
            ReaderMode::Immersive => {
                self.mode = ReaderMode::Normal;
                FocusCommand::ExitFullscreen
            }
        }
    }

    /// Reconcile against the host's fullscreen status. Returns true when
    /// the mode changed. Only the immersive -> normal direction exists
    /// here: fullscreen entered by other means does not imply focus mode.
    pub fn sync_fullscreen(&mut self, host_is_fullscreen: bool) -> bool {
        if !host_is_fullscreen && self.mode == ReaderMode::Immersive {
            self.mode = ReaderMode::Normal;
            return true;
        }
        false
    }
}

impl Default for FocusState {
    fn default() -> Self {
        Self::new()
    }
}
