//! Archive marquee scroll model
//!
//! Drives the infinite horizontal book strip on the landing page. The strip
//! renders its content twice and slides left; when a full copy has passed,
//! the offset wraps so the loop is seamless. The shell owns the frame timer
//! and feeds elapsed milliseconds into `advance`; the offset is a pure
//! function of accumulated travel and content width, so a missed or
//! repeated frame cannot desynchronize the loop. This model knows nothing
//! about annotations or the reader.

use serde::Serialize;

/// Pixels travelled per nominal 16 ms frame.
const BASE_SPEED: f64 = 0.5;
/// Speed multiplier while the pointer hovers the strip (99% slowdown).
const HOVER_FACTOR: f64 = 0.01;

/// Wrap accumulated leftward travel into a render offset in
/// `(-content_width, 0]`.
pub fn wrap_offset(travelled: f64, content_width: f64) -> f64 {
    if content_width <= 0.0 {
        return 0.0;
    }
    -(travelled % content_width)
}

/// State of one marquee strip.
#[derive(Debug, Clone, Serialize)]
pub struct Marquee {
    /// Width of a single content copy in px
    content_width: f64,
    /// Total leftward travel since creation, in px
    travelled: f64,
    hovered: bool,
}

impl Marquee {
    pub fn new(content_width: f64) -> Self {
        Self {
            content_width,
            travelled: 0.0,
            hovered: false,
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// The content strip was re-measured (viewport resize).
    pub fn set_content_width(&mut self, content_width: f64) {
        self.content_width = content_width;
    }

    /// Advance by an elapsed interval and return the new render offset.
    pub fn advance(&mut self, delta_ms: f64) -> f64 {
        let speed = if self.hovered {
            BASE_SPEED * HOVER_FACTOR
        } else {
            BASE_SPEED
        };
        self.travelled += speed * (delta_ms / 16.0).max(0.0);
        self.offset()
    }

    /// Current render offset, always in `(-content_width, 0]`.
    pub fn offset(&self) -> f64 {
        wrap_offset(self.travelled, self.content_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advances_leftward() {
        let mut m = Marquee::new(1000.0);
        let offset = m.advance(160.0);
        assert!((offset - (-5.0)).abs() < 1e-9);
    }

    #[test]
    fn test_hover_slows_by_two_orders() {
        let mut fast = Marquee::new(1000.0);
        let mut slow = Marquee::new(1000.0);
        slow.set_hovered(true);

        let f = fast.advance(160.0);
        let s = slow.advance(160.0);
        assert!((f * HOVER_FACTOR - s).abs() < 1e-9);
    }

    #[test]
    fn test_offset_wraps_seamlessly() {
        let mut m = Marquee::new(100.0);
        // travel exactly two content widths plus 10px
        m.advance(16.0 * 420.0);
        assert!((m.offset() - (-10.0)).abs() < 1e-9);
    }

    #[test]
    fn test_offset_stays_in_range() {
        let mut m = Marquee::new(250.0);
        for _ in 0..500 {
            let offset = m.advance(23.0);
            assert!(offset <= 0.0 && offset > -250.0);
        }
    }

    #[test]
    fn test_same_travel_same_offset() {
        // offset is a function of travel, not of how it was accumulated
        let mut a = Marquee::new(300.0);
        let mut b = Marquee::new(300.0);
        a.advance(320.0);
        for _ in 0..20 {
            b.advance(16.0);
        }
        assert!((a.offset() - b.offset()).abs() < 1e-9);
    }

    #[test]
    fn test_zero_width_is_inert() {
        let mut m = Marquee::new(0.0);
        assert_eq!(m.advance(160.0), 0.0);
    }

    #[test]
    fn test_negative_delta_ignored() {
        let mut m = Marquee::new(100.0);
        m.advance(-32.0);
        assert_eq!(m.offset(), 0.0);
    }
}
