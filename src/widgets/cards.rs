//! Card drawing for the menu strips.
//!
//! Every card follows the same composition: inset background, primary value
//! or name, secondary line underneath. Day cards additionally carry a weather
//! icon glyph. All positions are relative to the card's top-left corner so
//! strips can place cards at any scrolled position.

use core::fmt::Write;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::CARD_BG;
use crate::config::{CARD_WIDTH, STRIP_HEIGHT};
use crate::content::{DayForecast, Movie, Restaurant, Tool};
use crate::styles::{CENTERED, LABEL_STYLE_AMBER, LABEL_STYLE_GRAY, LABEL_STYLE_WHITE, TITLE_STYLE_WHITE};
use crate::widgets::primitives::{draw_card_background, draw_weather_icon};

/// Card height inside the strip (2px breathing room top and bottom).
const CARD_HEIGHT: u32 = STRIP_HEIGHT - 4;

/// X of a card's horizontal center, relative to the card origin.
const CARD_CENTER: i32 = (CARD_WIDTH / 2) as i32;

/// Forecast day card: temperature on top, icon in the middle, name below.
pub fn draw_day_card<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    x: i32,
    y: i32,
    day: &DayForecast,
) {
    draw_card_background(target, x, y, CARD_WIDTH, CARD_HEIGHT, CARD_BG);

    let mut temp: String<8> = String::new();
    let _ = write!(temp, "{}F", day.temperature);
    Text::with_text_style(
        &temp,
        Point::new(x + CARD_CENTER, y + 18),
        TITLE_STYLE_WHITE,
        CENTERED,
    )
    .draw(target)
    .ok();

    draw_weather_icon(target, x + CARD_CENTER, y + 28, day.kind);

    Text::with_text_style(
        day.name,
        Point::new(x + CARD_CENTER, y + CARD_HEIGHT as i32 - 4),
        LABEL_STYLE_GRAY,
        CENTERED,
    )
    .draw(target)
    .ok();
}

/// Restaurant card: name over a cuisine/price tagline.
pub fn draw_restaurant_card<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    x: i32,
    y: i32,
    restaurant: &Restaurant,
) {
    draw_card_background(target, x, y, CARD_WIDTH, CARD_HEIGHT, CARD_BG);
    Text::with_text_style(
        restaurant.name,
        Point::new(x + CARD_CENTER, y + 20),
        LABEL_STYLE_WHITE,
        CENTERED,
    )
    .draw(target)
    .ok();
    Text::with_text_style(
        restaurant.tagline,
        Point::new(x + CARD_CENTER, y + 34),
        LABEL_STYLE_GRAY,
        CENTERED,
    )
    .draw(target)
    .ok();
}

/// Home tool card: tool name over its live status line.
pub fn draw_tool_card<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    x: i32,
    y: i32,
    tool: &Tool,
) {
    draw_card_background(target, x, y, CARD_WIDTH, CARD_HEIGHT, CARD_BG);
    Text::with_text_style(
        tool.name,
        Point::new(x + CARD_CENTER, y + 20),
        LABEL_STYLE_WHITE,
        CENTERED,
    )
    .draw(target)
    .ok();
    Text::with_text_style(
        tool.status,
        Point::new(x + CARD_CENTER, y + 34),
        LABEL_STYLE_AMBER,
        CENTERED,
    )
    .draw(target)
    .ok();
}

/// Movie card: title over its rating.
pub fn draw_movie_card<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    x: i32,
    y: i32,
    movie: &Movie,
) {
    draw_card_background(target, x, y, CARD_WIDTH, CARD_HEIGHT, CARD_BG);
    Text::with_text_style(
        movie.title,
        Point::new(x + CARD_CENTER, y + 20),
        LABEL_STYLE_WHITE,
        CENTERED,
    )
    .draw(target)
    .ok();
    Text::with_text_style(
        movie.rating,
        Point::new(x + CARD_CENTER, y + 34),
        LABEL_STYLE_GRAY,
        CENTERED,
    )
    .draw(target)
    .ok();
}
