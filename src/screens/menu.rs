//! Home menu screen: info bar plus four drag-scrollable card strips.
//!
//! ```text
//! +----------------------------------------+
//! | 7:42            (*) 73F    Q = SIGN OUT|  info bar
//! |  # WEATHER                             |
//! |  [Mon][Tues][Wed][Thurs][Fri][Sat][Sun]|  strip 0
//! |  # FOOD NEARBY                         |
//! |  [..][..][..][..][..]                  |  strip 1
//! |  # HOME TOOLS                          |
//! |  [..][..][..][..][..][..]              |  strip 2
//! |  # MOVIES                              |
//! |  [..][..][..][..]                      |  strip 3
//! +----------------------------------------+
//! ```
//!
//! Strips draw through a clipped viewport so partially scrolled cards do not
//! bleed into the margins, and fully repaint each frame because drags move
//! card positions continuously.

use core::fmt::Write;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{ContainsPoint, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::BLACK;
use crate::config::{
    CARD_PITCH, CARD_WIDTH, INFO_BAR_HEIGHT, SCREEN_WIDTH, SECTION_COUNT, SECTION_HEIGHT,
    SECTION_TITLE_HEIGHT, STRIP_HEIGHT, STRIP_VIEWPORT_WIDTH, STRIP_X,
};
use crate::content::{DayForecast, MOVIES, RESTAURANTS, TOOLS};
use crate::styles::{CENTERED, LABEL_STYLE_AMBER, LABEL_STYLE_GRAY, RIGHT_ALIGNED, TITLE_STYLE_WHITE};
use crate::widgets::{
    draw_day_card, draw_movie_card, draw_restaurant_card, draw_section_title, draw_sun_glyph,
    draw_tool_card, strip_draw_offset,
};

/// Section titles, top to bottom.
const SECTION_TITLES: [&str; SECTION_COUNT] = ["WEATHER", "FOOD NEARBY", "HOME TOOLS", "MOVIES"];

/// Cards per strip, top to bottom. Drives scroll clamping and hit testing.
pub const STRIP_CARD_COUNTS: [usize; SECTION_COUNT] =
    [7, RESTAURANTS.len(), TOOLS.len(), MOVIES.len()];

const INFO_BAR_BASELINE: i32 = 28;
const SNAP_X: i32 = 210;

/// Top Y coordinate of a section (title row included).
const fn section_y(index: usize) -> i32 {
    INFO_BAR_HEIGHT as i32 + index as i32 * SECTION_HEIGHT as i32
}

/// Viewport rectangle of a section's card strip.
pub fn strip_rect(index: usize) -> Rectangle {
    Rectangle::new(
        Point::new(STRIP_X, section_y(index) + SECTION_TITLE_HEIGHT as i32),
        Size::new(STRIP_VIEWPORT_WIDTH, STRIP_HEIGHT),
    )
}

/// Which strip viewport, if any, contains `point`. Used to route pointer
/// events to the matching scroll controller.
pub fn strip_hit(point: Point) -> Option<usize> {
    (0..SECTION_COUNT).find(|&i| strip_rect(i).contains(point))
}

/// Draw the whole menu page. `offsets` are the raw scroll controller offsets;
/// each is clamped to its strip's scroll range before drawing.
pub fn draw_menu<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    clock_text: &str,
    snap_temp: i32,
    days: &[DayForecast; 7],
    offsets: &[i32; SECTION_COUNT],
) {
    draw_info_bar(target, clock_text, snap_temp);

    for (index, title) in SECTION_TITLES.iter().enumerate() {
        draw_section_title(target, section_y(index), title);
        draw_strip(target, index, days, offsets[index]);
    }
}

fn draw_info_bar<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    clock_text: &str,
    snap_temp: i32,
) {
    // Repaint the bar band so the previous clock text does not linger
    Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, INFO_BAR_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(BLACK))
        .draw(target)
        .ok();

    Text::new(
        clock_text,
        Point::new(STRIP_X, INFO_BAR_BASELINE),
        TITLE_STYLE_WHITE,
    )
    .draw(target)
    .ok();

    draw_sun_glyph(target, SNAP_X, INFO_BAR_BASELINE - 8);
    let mut snap: heapless::String<8> = heapless::String::new();
    let _ = write!(snap, "{snap_temp}F");
    Text::with_text_style(
        snap.as_str(),
        Point::new(SNAP_X + 22, INFO_BAR_BASELINE - 5),
        LABEL_STYLE_AMBER,
        CENTERED,
    )
    .draw(target)
    .ok();

    Text::with_text_style(
        "Q = SIGN OUT",
        Point::new(SCREEN_WIDTH as i32 - STRIP_X, INFO_BAR_BASELINE - 5),
        LABEL_STYLE_GRAY,
        RIGHT_ALIGNED,
    )
    .draw(target)
    .ok();
}

fn draw_strip<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    index: usize,
    days: &[DayForecast; 7],
    offset: i32,
) {
    let viewport = strip_rect(index);
    viewport
        .into_styled(PrimitiveStyle::with_fill(BLACK))
        .draw(target)
        .ok();

    let offset = strip_draw_offset(offset, STRIP_CARD_COUNTS[index]);
    let card_y = viewport.top_left.y + 2;
    let mut clipped = target.clipped(&viewport);

    for card in 0..STRIP_CARD_COUNTS[index] {
        let x = STRIP_X + card as i32 * CARD_PITCH - offset;
        // Skip cards entirely outside the viewport
        if x + CARD_WIDTH as i32 <= STRIP_X || x >= STRIP_X + STRIP_VIEWPORT_WIDTH as i32 {
            continue;
        }
        match index {
            0 => draw_day_card(&mut clipped, x, card_y, &days[card]),
            1 => draw_restaurant_card(&mut clipped, x, card_y, &RESTAURANTS[card]),
            2 => draw_tool_card(&mut clipped, x, card_y, &TOOLS[card]),
            _ => draw_movie_card(&mut clipped, x, card_y, &MOVIES[card]),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_positions_stack() {
        assert_eq!(section_y(0), INFO_BAR_HEIGHT as i32);
        for i in 1..SECTION_COUNT {
            assert_eq!(section_y(i), section_y(i - 1) + SECTION_HEIGHT as i32);
        }
    }

    #[test]
    fn test_strip_hit_inside_first_strip() {
        let rect = strip_rect(0);
        let inside = rect.top_left + Point::new(5, 5);
        assert_eq!(strip_hit(inside), Some(0));
    }

    #[test]
    fn test_strip_hit_in_title_row_misses() {
        // A point in a section's title row belongs to no strip
        let point = Point::new(STRIP_X + 5, section_y(1) + 2);
        assert_eq!(strip_hit(point), None);
    }

    #[test]
    fn test_strip_hit_in_margin_misses() {
        let point = Point::new(STRIP_X - 2, section_y(0) + SECTION_TITLE_HEIGHT as i32 + 5);
        assert_eq!(strip_hit(point), None);
    }

    #[test]
    fn test_strip_hit_info_bar_misses() {
        assert_eq!(strip_hit(Point::new(100, 10)), None);
    }

    #[test]
    fn test_every_strip_hittable() {
        for i in 0..SECTION_COUNT {
            let center = strip_rect(i).center();
            assert_eq!(strip_hit(center), Some(i), "strip {i} center must hit itself");
        }
    }
}
