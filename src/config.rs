//! Application configuration constants.
//!
//! Layout calculations like `SCREEN_WIDTH / 2` are computed at compile time as
//! `const`, avoiding per-frame arithmetic. These constants are used throughout
//! the rendering code instead of recalculating positions every frame.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (landscape wall-tablet aspect).
pub const SCREEN_WIDTH: u32 = 480;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 320;

// =============================================================================
// Session Configuration
// =============================================================================

/// Number of digits in a complete PIN entry.
pub const PIN_LENGTH: usize = 4;

/// PIN accepted by the simulated verification backend.
pub const DEFAULT_PIN: &str = "1234";

/// Lower bound of the simulated verification latency (inclusive).
pub const VERIFY_DELAY_MIN_MS: i32 = 300;

/// Upper bound of the simulated verification latency (inclusive).
pub const VERIFY_DELAY_MAX_MS: i32 = 700;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// How long the "INVALID" flash stays visible after a failed verification.
pub const ERROR_FLASH_DURATION: Duration = Duration::from_millis(1500);

// =============================================================================
// Pre-computed Layout Constants
// =============================================================================

/// Height of the menu info bar (clock, weather snap, sign-out).
pub const INFO_BAR_HEIGHT: u32 = 44;

/// Number of card sections on the menu page.
pub const SECTION_COUNT: usize = 4;

/// Height of one menu section (title row + card strip).
pub const SECTION_HEIGHT: u32 = (SCREEN_HEIGHT - INFO_BAR_HEIGHT) / SECTION_COUNT as u32;

/// Height of the section title row inside a section.
pub const SECTION_TITLE_HEIGHT: u32 = 18;

/// Height of the drag-scrollable card strip inside a section.
pub const STRIP_HEIGHT: u32 = SECTION_HEIGHT - SECTION_TITLE_HEIGHT;

/// Left margin of the card strips (also the strip viewport origin).
pub const STRIP_X: i32 = 12;

/// Visible width of a card strip viewport.
pub const STRIP_VIEWPORT_WIDTH: u32 = SCREEN_WIDTH - 2 * STRIP_X as u32;

/// Width of a single card including its trailing gap.
pub const CARD_PITCH: i32 = 84;

/// Width of a single card.
pub const CARD_WIDTH: u32 = 78;

/// Screen center X coordinate. Used for centering text and the PIN boxes.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_fill_screen() {
        // Info bar plus four sections must not exceed the display height
        assert!(INFO_BAR_HEIGHT + SECTION_COUNT as u32 * SECTION_HEIGHT <= SCREEN_HEIGHT);
    }

    #[test]
    fn test_strip_fits_in_section() {
        assert_eq!(SECTION_TITLE_HEIGHT + STRIP_HEIGHT, SECTION_HEIGHT);
    }

    #[test]
    fn test_verify_delay_bounds_ordered() {
        assert!(VERIFY_DELAY_MIN_MS <= VERIFY_DELAY_MAX_MS);
    }

    #[test]
    fn test_card_fits_in_pitch() {
        assert!(CARD_WIDTH <= CARD_PITCH as u32, "card must fit inside its pitch");
    }
}
