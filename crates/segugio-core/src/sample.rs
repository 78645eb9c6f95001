//! The per-tick snapshot and its line format.
//!
//! The line layout is a compatibility contract: every integer field is
//! right-justified in 5 characters, the timestamp in 9 characters with 3
//! decimals, and labeled groups are separated by two spaces. Consumers
//! tail stdout and parse these lines, so the format must stay byte-stable.

use std::fmt;

use crate::geometry::{Point, Rect};

/// Banner printed once at startup, before any sample line.
pub const STARTUP_BANNER: &str =
    "Tracking started. Press Esc in the window or Ctrl+C in the console to quit.";

/// One snapshot of cursor and window geometry.
///
/// Built fresh each tick, formatted, and discarded; never retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Monotonic seconds since sampling started.
    pub t: f64,
    /// Cursor position in screen coordinates.
    pub mouse: Point,
    /// Window bounding rectangle, decoration included.
    pub window: Rect,
    /// Client area translated to screen coordinates.
    pub client: Rect,
    /// Cursor position relative to the client origin.
    pub mouse_in_client: Point,
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t={:9.3}  mouse=({:5},{:5})  win=[{:5},{:5},{:5},{:5}]  \
             client=[{:5},{:5},{:5},{:5}]  mouse_in_client=({:5},{:5})",
            self.t,
            self.mouse.x,
            self.mouse.y,
            self.window.left,
            self.window.top,
            self.window.right,
            self.window.bottom,
            self.client.left,
            self.client.top,
            self.client.right,
            self.client.bottom,
            self.mouse_in_client.x,
            self.mouse_in_client.y,
        )
    }
}

/// Formats the one-time DPI banner with the scale factor relative to the
/// 96-DPI baseline.
pub fn dpi_banner(dpi: u32) -> String {
    format!("Window DPI: {dpi}  (scale x{:.2})", f64::from(dpi) / 96.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Sample {
        Sample {
            t: 12.345,
            mouse: Point::new(1200, 640),
            window: Rect::new(100, 100, 500, 340),
            client: Rect::new(108, 132, 492, 332),
            mouse_in_client: Point::new(12, 20),
        }
    }

    #[test]
    fn line_matches_contract() {
        // Act
        let line = sample().to_string();

        // Assert
        assert_eq!(
            line,
            "t=   12.345  mouse=( 1200,  640)  win=[  100,  100,  500,  340]  \
             client=[  108,  132,  492,  332]  mouse_in_client=(   12,   20)"
        );
    }

    #[test]
    fn negative_coordinates_keep_field_width() {
        // Arrange: cursor on a monitor left of the primary
        let s = Sample {
            t: 0.0,
            mouse: Point::new(-1920, -8),
            window: Rect::ZERO,
            client: Rect::ZERO,
            mouse_in_client: Point::ZERO,
        };

        // Act
        let line = s.to_string();

        // Assert
        assert_eq!(
            line,
            "t=    0.000  mouse=(-1920,   -8)  win=[    0,    0,    0,    0]  \
             client=[    0,    0,    0,    0]  mouse_in_client=(    0,    0)"
        );
    }

    #[test]
    fn formatting_is_deterministic() {
        // Arrange
        let a = sample();
        let b = sample();

        // Assert: equal fields, byte-identical lines
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn dpi_banner_reports_scale() {
        // Assert
        assert_eq!(dpi_banner(96), "Window DPI: 96  (scale x1.00)");
        assert_eq!(dpi_banner(120), "Window DPI: 120  (scale x1.25)");
        assert_eq!(dpi_banner(144), "Window DPI: 144  (scale x1.50)");
    }
}
