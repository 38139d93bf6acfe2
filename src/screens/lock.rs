//! Lock and PIN entry screens.
//!
//! Lock screen layout (LoggedOut):
//!
//! ```text
//! +----------------------------------------+
//! |                                        |
//! |                 7:42                   |  large clock
//! |              (*) 73F                   |  weather snap
//! |                                        |
//! |          PRESS S TO SIGN IN            |  blinking hint
//! +----------------------------------------+
//! ```
//!
//! PIN screen layout (LoggingIn / VerifyingLogin / LogInError):
//!
//! ```text
//! |               ENTER PIN                |
//! |        [1] [2] [_] [ ]                 |  digit boxes, focus pulse
//! |              VERIFYING...              |  or INVALID / ESC TO CANCEL
//! ```
//!
//! The PIN screen redraws every frame (the focus pulse animates); the lock
//! screen redraws only when the displayed second or blink phase changes.

use core::fmt::Write;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::{BLACK, GRAY, RED, SKY, WHITE, YELLOW};
use crate::config::{CENTER_X, CENTER_Y, PIN_LENGTH, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::session::UserStatus;
use crate::styles::{
    CENTERED, CLOCK_STYLE_WHITE, DIGIT_FONT, LABEL_FONT, LABEL_STYLE_AMBER, TITLE_STYLE_WHITE,
};
use crate::widgets::draw_sun_glyph;

// =============================================================================
// Layout Constants
// =============================================================================

const CLOCK_Y: i32 = CENTER_Y - 30;
const SNAP_Y: i32 = CENTER_Y + 14;
const HINT_Y: i32 = SCREEN_HEIGHT as i32 - 40;

const BOX_WIDTH: u32 = 40;
const BOX_HEIGHT: u32 = 50;
const BOX_GAP: i32 = 12;
const BOX_PITCH: i32 = BOX_WIDTH as i32 + BOX_GAP;
/// Left edge of the first digit box; the row of four is centered.
const BOX_START_X: i32 = CENTER_X - (PIN_LENGTH as i32 * BOX_PITCH - BOX_GAP) / 2;
const BOX_Y: i32 = CENTER_Y - 30;

const PIN_LABEL_Y: i32 = BOX_Y - 28;
const STATUS_LINE_Y: i32 = BOX_Y + BOX_HEIGHT as i32 + 28;

// =============================================================================
// Lock Screen
// =============================================================================

/// Draw the logged-out lock screen: clock, weather snap, blinking hint.
pub fn draw_lock_screen<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    clock_text: &str,
    snap_temp: i32,
    hint_on: bool,
) {
    // Full repaint: the caller only invokes this when something changed
    Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(BLACK))
        .draw(target)
        .ok();

    Text::with_text_style(
        clock_text,
        Point::new(CENTER_X, CLOCK_Y),
        CLOCK_STYLE_WHITE,
        CENTERED,
    )
    .draw(target)
    .ok();

    draw_sun_glyph(target, CENTER_X - 26, SNAP_Y - 3);
    let mut snap: String<8> = String::new();
    let _ = write!(snap, "{snap_temp}F");
    Text::with_text_style(
        snap.as_str(),
        Point::new(CENTER_X + 12, SNAP_Y),
        LABEL_STYLE_AMBER,
        CENTERED,
    )
    .draw(target)
    .ok();

    if hint_on {
        Text::with_text_style(
            "PRESS S TO SIGN IN",
            Point::new(CENTER_X, HINT_Y),
            MonoTextStyle::new(LABEL_FONT, SKY),
            CENTERED,
        )
        .draw(target)
        .ok();
    }
}

// =============================================================================
// PIN Screen
// =============================================================================

/// Draw the PIN entry screen.
///
/// `focus_pulse_on` drives the highlight around the next-empty digit box;
/// `show_error` keeps the INVALID flash visible after a failed verification
/// even though the session has already re-armed for input.
pub fn draw_pin_screen<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    pin: &str,
    status: UserStatus,
    focus_pulse_on: bool,
    show_error: bool,
) {
    Text::with_text_style(
        "ENTER PIN",
        Point::new(CENTER_X, PIN_LABEL_Y),
        TITLE_STYLE_WHITE,
        CENTERED,
    )
    .draw(target)
    .ok();

    let verifying = status == UserStatus::VerifyingLogin;
    for slot in 0..PIN_LENGTH {
        // The buffer holds ASCII digits only, so byte indexing is exact
        let digit = pin.as_bytes().get(slot).map(|b| *b as char);
        let focused = !verifying && focus_pulse_on && slot == pin.len();
        draw_digit_box(target, slot, digit, focused);
    }

    draw_status_line(target, status, show_error);
}

fn draw_digit_box<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    slot: usize,
    digit: Option<char>,
    focused: bool,
) {
    let x = BOX_START_X + slot as i32 * BOX_PITCH;
    let rect = Rectangle::new(Point::new(x, BOX_Y), Size::new(BOX_WIDTH, BOX_HEIGHT));

    rect.into_styled(PrimitiveStyle::with_fill(BLACK)).draw(target).ok();
    let border = if focused { SKY } else { GRAY };
    rect.into_styled(PrimitiveStyle::with_stroke(border, 2)).draw(target).ok();

    if let Some(d) = digit {
        let mut s: String<1> = String::new();
        let _ = s.push(d);
        Text::with_text_style(
            s.as_str(),
            Point::new(x + BOX_WIDTH as i32 / 2, BOX_Y + BOX_HEIGHT as i32 / 2 + 8),
            MonoTextStyle::new(DIGIT_FONT, WHITE),
            CENTERED,
        )
        .draw(target)
        .ok();
    }
}

/// Status line under the boxes: VERIFYING... while pending, INVALID during
/// the error flash, otherwise the cancel hint. Repainted every frame so
/// expired flashes disappear.
fn draw_status_line<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    status: UserStatus,
    show_error: bool,
) {
    Rectangle::new(
        Point::new(0, STATUS_LINE_Y - 12),
        Size::new(SCREEN_WIDTH, 20),
    )
    .into_styled(PrimitiveStyle::with_fill(BLACK))
    .draw(target)
    .ok();

    let (text, color) = if status == UserStatus::VerifyingLogin {
        ("VERIFYING...", YELLOW)
    } else if show_error || status == UserStatus::LogInError {
        ("INVALID", RED)
    } else {
        ("ESC TO CANCEL", GRAY)
    };
    Text::with_text_style(
        text,
        Point::new(CENTER_X, STATUS_LINE_Y),
        MonoTextStyle::new(LABEL_FONT, color),
        CENTERED,
    )
    .draw(target)
    .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_row_is_centered() {
        let row_width = PIN_LENGTH as i32 * BOX_PITCH - BOX_GAP;
        let left = BOX_START_X;
        let right = BOX_START_X + row_width;
        assert_eq!(
            left,
            SCREEN_WIDTH as i32 - right,
            "equal margins on both sides of the box row"
        );
    }

    #[test]
    fn test_boxes_fit_on_screen() {
        let right_edge = BOX_START_X + (PIN_LENGTH as i32 - 1) * BOX_PITCH + BOX_WIDTH as i32;
        assert!(BOX_START_X >= 0);
        assert!(right_edge <= SCREEN_WIDTH as i32);
    }
}
