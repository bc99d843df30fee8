//! Pre-computed static styles to avoid per-frame object construction.
//!
//! `TextStyle`, `MonoTextStyle` and `PrimitiveStyle` constructors are `const fn`
//! in embedded-graphics 0.8, so every style the screen needs is built at compile
//! time and referenced directly from the draw functions.
//!
//! # Font Sizes
//!
//! Bitmap fonts come in fixed sizes, so the three decreasing text sizes of the
//! screen map onto the three largest `ProFont` cuts:
//!
//! | Text     | Font               |
//! |----------|--------------------|
//! | Title    | `PROFONT_24_POINT` |
//! | Subtitle | `PROFONT_18_POINT` |
//! | Table    | `PROFONT_14_POINT` |

use embedded_graphics::{
    mono_font::MonoFont,
    pixelcolor::Rgb565,
    primitives::PrimitiveStyle,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::{BACKGROUND, INK};
use crate::config::{SQUARE_STROKE_WIDTH, TABLE_STROKE_WIDTH};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text, alphabetic baseline. Every string on the screen uses it.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

// =============================================================================
// Fonts
// =============================================================================

/// Largest font, for "Tempest Run".
pub const TITLE_FONT: &MonoFont = &PROFONT_24_POINT;

/// Medium font, for "HighScores".
pub const SUBTITLE_FONT: &MonoFont = &PROFONT_18_POINT;

/// Smallest font, for names and scores in the table.
pub const TABLE_FONT: &MonoFont = &PROFONT_14_POINT;

// =============================================================================
// Primitive Styles
// =============================================================================

/// Background-colored fill for the decorative squares.
pub const SQUARE_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BACKGROUND);

/// Thin outline for the decorative squares.
pub const SQUARE_STROKE_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(INK, SQUARE_STROKE_WIDTH);

/// Rules, borders and the column divider of the score table.
pub const TABLE_RULE_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(INK, TABLE_STROKE_WIDTH);
