//! Low-level drawing primitives shared across widgets.
//!
//! The icon glyphs are small composed shapes (circles, rectangles, lines)
//! standing in for the icon font of a real tablet UI. Each glyph draws around
//! a center point so callers position them like a character.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};

use crate::colors::{AMBER, GRAY, SKY, YELLOW};
use crate::content::WeatherKind;

/// Draw a card's background rectangle with 2px inset.
///
/// The inset leaves thin background-colored gaps between adjacent cards, so
/// strips read as separate tiles without explicit borders. Returns early if
/// the dimensions are too small for the inset (w or h < 4).
pub fn draw_card_background<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    bg_color: Rgb565,
) {
    if w < 4 || h < 4 {
        return;
    }
    Rectangle::new(Point::new(x + 2, y + 2), Size::new(w - 4, h - 4))
        .into_styled(PrimitiveStyle::with_fill(bg_color))
        .draw(target)
        .ok();
}

/// Sun: filled disc with four rays.
pub fn draw_sun_glyph<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    cx: i32,
    cy: i32,
) {
    Circle::with_center(Point::new(cx, cy), 8)
        .into_styled(PrimitiveStyle::with_fill(YELLOW))
        .draw(target)
        .ok();
    let ray = PrimitiveStyle::with_stroke(AMBER, 1);
    Line::new(Point::new(cx - 7, cy), Point::new(cx - 9, cy))
        .into_styled(ray)
        .draw(target)
        .ok();
    Line::new(Point::new(cx + 7, cy), Point::new(cx + 9, cy))
        .into_styled(ray)
        .draw(target)
        .ok();
    Line::new(Point::new(cx, cy - 7), Point::new(cx, cy - 9))
        .into_styled(ray)
        .draw(target)
        .ok();
    Line::new(Point::new(cx, cy + 7), Point::new(cx, cy + 9))
        .into_styled(ray)
        .draw(target)
        .ok();
}

/// Cloud: two overlapping discs over a base bar.
fn draw_cloud_glyph<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    cx: i32,
    cy: i32,
    color: Rgb565,
) {
    let fill = PrimitiveStyle::with_fill(color);
    Circle::with_center(Point::new(cx - 3, cy - 1), 7)
        .into_styled(fill)
        .draw(target)
        .ok();
    Circle::with_center(Point::new(cx + 3, cy - 2), 8)
        .into_styled(fill)
        .draw(target)
        .ok();
    Rectangle::new(Point::new(cx - 6, cy), Size::new(13, 4))
        .into_styled(fill)
        .draw(target)
        .ok();
}

/// Draw the icon glyph for a weather kind centered at (`cx`, `cy`).
pub fn draw_weather_icon<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    cx: i32,
    cy: i32,
    kind: WeatherKind,
) {
    match kind {
        WeatherKind::Sunny => draw_sun_glyph(target, cx, cy),
        WeatherKind::Cloudy => draw_cloud_glyph(target, cx, cy, GRAY),
        WeatherKind::Rainy => {
            draw_cloud_glyph(target, cx, cy - 3, GRAY);
            let drop = PrimitiveStyle::with_stroke(SKY, 1);
            for dx in [-4, 0, 4] {
                Line::new(Point::new(cx + dx, cy + 3), Point::new(cx + dx - 2, cy + 7))
                    .into_styled(drop)
                    .draw(target)
                    .ok();
            }
        }
        WeatherKind::Stormy => {
            draw_cloud_glyph(target, cx, cy - 3, GRAY);
            let bolt = PrimitiveStyle::with_stroke(YELLOW, 1);
            Line::new(Point::new(cx + 1, cy + 1), Point::new(cx - 2, cy + 5))
                .into_styled(bolt)
                .draw(target)
                .ok();
            Line::new(Point::new(cx - 2, cy + 5), Point::new(cx + 2, cy + 5))
                .into_styled(bolt)
                .draw(target)
                .ok();
            Line::new(Point::new(cx + 2, cy + 5), Point::new(cx - 1, cy + 9))
                .into_styled(bolt)
                .draw(target)
                .ok();
        }
    }
}
