//! Rgb565 color palette for the dashboard.
//!
//! Rgb565 channel ranges: red 0-31, green 0-63, blue 0-31.

use embedded_graphics::pixelcolor::Rgb565;

/// Background black.
pub const BLACK: Rgb565 = Rgb565::new(0, 0, 0);

/// Primary text white.
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Dimmed gray for secondary labels and inactive PIN boxes.
pub const GRAY: Rgb565 = Rgb565::new(12, 24, 12);

/// Card background (dark slate).
pub const CARD_BG: Rgb565 = Rgb565::new(4, 9, 6);

/// Accent teal used for the focused PIN box and section icons.
pub const TEAL: Rgb565 = Rgb565::new(4, 48, 24);

/// Warm amber for the weather snap and temperatures.
pub const AMBER: Rgb565 = Rgb565::new(31, 44, 4);

/// Error red for the "INVALID" flash.
pub const RED: Rgb565 = Rgb565::new(31, 8, 4);

/// Verification-pending yellow.
pub const YELLOW: Rgb565 = Rgb565::new(31, 58, 6);

/// Sky blue for rain/storm icons.
pub const SKY: Rgb565 = Rgb565::new(8, 32, 28);
