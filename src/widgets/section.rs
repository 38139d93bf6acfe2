//! Menu section chrome and strip offset math.
//!
//! Each menu section is a title row over a drag-scrollable card strip. The
//! drag controller clamps only at zero; the draw offset is additionally
//! clamped here to the strip's natural max scroll so dragging past the last
//! card does not reveal empty track.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::TEAL;
use crate::config::{STRIP_VIEWPORT_WIDTH, STRIP_X};
use crate::content::strip_content_width;
use crate::num::clamp;
use crate::styles::{LABEL_STYLE_WHITE, LEFT_ALIGNED};

/// Section title row: small accent square followed by the title text.
pub fn draw_section_title<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    y: i32,
    title: &str,
) {
    Rectangle::new(Point::new(STRIP_X, y + 4), Size::new(8, 8))
        .into_styled(PrimitiveStyle::with_fill(TEAL))
        .draw(target)
        .ok();
    Text::with_text_style(title, Point::new(STRIP_X + 14, y + 12), LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(target)
        .ok();
}

/// Natural max scroll for a strip with `card_count` cards (0 when the
/// content fits the viewport).
pub fn strip_max_scroll(card_count: usize) -> i32 {
    (strip_content_width(card_count) - STRIP_VIEWPORT_WIDTH as i32).max(0)
}

/// Draw offset for a strip: the controller's offset clamped to the strip's
/// natural scroll range.
pub fn strip_draw_offset(
    offset: i32,
    card_count: usize,
) -> i32 {
    clamp(0, offset, strip_max_scroll(card_count))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CARD_PITCH;

    #[test]
    fn test_max_scroll_zero_when_content_fits() {
        // A handful of cards narrower than the viewport cannot scroll
        assert_eq!(strip_max_scroll(2), 0);
    }

    #[test]
    fn test_max_scroll_positive_when_content_overflows() {
        let count = 7;
        let expected = count as i32 * CARD_PITCH - STRIP_VIEWPORT_WIDTH as i32;
        assert!(expected > 0, "test premise: 7 cards overflow the viewport");
        assert_eq!(strip_max_scroll(count), expected);
    }

    #[test]
    fn test_draw_offset_clamped_to_range() {
        let max = strip_max_scroll(7);
        assert_eq!(strip_draw_offset(-5, 7), 0);
        assert_eq!(strip_draw_offset(max / 2, 7), max / 2);
        assert_eq!(strip_draw_offset(max + 500, 7), max);
    }
}
