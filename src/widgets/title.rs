//! "Tempest Run" / "HighScores" heading.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::primitives::draw_text_with_outline;
use crate::colors::{INK, TEXT_FILL};
use crate::config::{SUBTITLE_TEXT, SUBTITLE_Y, TITLE_TEXT, TITLE_Y};
use crate::layout::center_x;
use crate::styles::{CENTERED, SUBTITLE_FONT, TITLE_FONT};

/// Draw the title and subtitle centred on the current canvas width.
pub fn draw_title<D>(
    display: &mut D,
    canvas: Size,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let x = center_x(canvas);

    draw_text_with_outline(
        display,
        TITLE_TEXT,
        Point::new(x, TITLE_Y),
        TITLE_FONT,
        TEXT_FILL,
        INK,
        CENTERED,
    );
    draw_text_with_outline(
        display,
        SUBTITLE_TEXT,
        Point::new(x, SUBTITLE_Y),
        SUBTITLE_FONT,
        TEXT_FILL,
        INK,
        CENTERED,
    );
}
