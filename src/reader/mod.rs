//! Reader-surface behaviors outside the annotation engine
//!
//! - `focus`: the immersive-mode state machine (host fullscreen is truth)
//! - `clock`: status capsule time/date formatting
//! - `marquee`: the landing-page infinite book strip

pub mod clock;
pub mod focus;
pub mod marquee;

pub use clock::ClockStamp;
pub use focus::{FocusCommand, FocusState, ReaderMode};
pub use marquee::Marquee;
