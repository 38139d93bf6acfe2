//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! `MonoTextStyle::new`, `TextStyleBuilder` and `PrimitiveStyle` constructors
//! are const fn in embedded-graphics 0.8, so every style here is computed at
//! compile time and stored in the binary's read-only data section.
//!
//! Styles that need a dynamic color (blink effects, focus pulse) are built at
//! the call site from the exposed font references; only the color varies.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::{AMBER, GRAY, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Used for the clock, PIN label, and card values.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Used for section titles and the debug overlay.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. Used for the info bar clock.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Small label font (6x10). Usage: `MonoTextStyle::new(LABEL_FONT, color)`.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Medium font (10x20) for headings with dynamic colors.
pub const TITLE_FONT: &MonoFont = &FONT_10X20;

/// Large digit font for PIN boxes (`ProFont` 18pt).
pub const DIGIT_FONT: &MonoFont = &PROFONT_18_POINT;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Small white text for card labels.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small gray text for secondary card info (taglines, ratings).
pub const LABEL_STYLE_GRAY: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY);

/// Small amber text for temperatures.
pub const LABEL_STYLE_AMBER: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, AMBER);

/// Medium white text for section titles and the info bar.
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Large white text for the lock-screen clock (`ProFont` 24pt).
pub const CLOCK_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);
