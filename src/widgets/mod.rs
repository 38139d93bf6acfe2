//! Widget components for the tablet display.
//!
//! - [`cards`]: individual card drawing (forecast days, restaurants, tools, movies)
//! - [`section`]: menu section chrome and strip offset math
//! - [`overlay`]: debug log overlay
//! - [`primitives`]: shared low-level drawing utilities (inset backgrounds, icons)
//!
//! Cards draw in a compositional pattern: inset background rectangle, label
//! text, value in the middle, secondary info at the bottom. Drawing functions
//! are generic over [`embedded_graphics::draw_target::DrawTarget`] so the card
//! strips can render through a clipped viewport.

mod cards;
mod overlay;
mod primitives;
mod section;

pub use cards::{draw_day_card, draw_movie_card, draw_restaurant_card, draw_tool_card};
pub use overlay::draw_debug_overlay;
pub use primitives::{draw_card_background, draw_sun_glyph, draw_weather_icon};
pub use section::{draw_section_title, strip_draw_offset, strip_max_scroll};
