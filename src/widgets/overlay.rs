//! Debug log overlay.
//!
//! A bordered panel over the bottom of the screen showing the current status
//! and the most recent [`DebugLog`] lines. Toggled with `D`; developer-facing
//! only.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::{BLACK, TEAL, WHITE};
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::diag::{DebugLog, LOG_BUFFER_SIZE};
use crate::session::UserStatus;
use crate::styles::{LABEL_FONT, LEFT_ALIGNED};
use embedded_graphics::mono_font::MonoTextStyle;

/// Overlay panel height: status line plus the full log buffer.
const PANEL_HEIGHT: u32 = 20 + LOG_BUFFER_SIZE as u32 * 12;

const PANEL_Y: i32 = (SCREEN_HEIGHT - PANEL_HEIGHT) as i32;

const BORDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(TEAL, 1);
const PANEL_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BLACK);

/// Draw the overlay panel with the session status and recent log lines.
pub fn draw_debug_overlay<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    log: &DebugLog,
    status: UserStatus,
) {
    Rectangle::new(Point::new(0, PANEL_Y), Size::new(SCREEN_WIDTH, PANEL_HEIGHT))
        .into_styled(PANEL_FILL)
        .draw(target)
        .ok();
    Rectangle::new(Point::new(0, PANEL_Y), Size::new(SCREEN_WIDTH, PANEL_HEIGHT))
        .into_styled(BORDER_STYLE)
        .draw(target)
        .ok();

    let accent = MonoTextStyle::new(LABEL_FONT, TEAL);
    Text::with_text_style(status.label(), Point::new(8, PANEL_Y + 13), accent, LEFT_ALIGNED)
        .draw(target)
        .ok();

    let line_style = MonoTextStyle::new(LABEL_FONT, WHITE);
    for (i, line) in log.iter().enumerate() {
        let y = PANEL_Y + 26 + i as i32 * 12;
        Text::with_text_style(line, Point::new(8, y), line_style, LEFT_ALIGNED)
            .draw(target)
            .ok();
    }
}
