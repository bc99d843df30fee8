//! Ranked score table.
//!
//! ```text
//!   +-----------+-----------+   <- top rule (also the rule of row 0)
//!   |  ghast    |   9000    |
//!   +-----------+-----------+   <- rule of row 1
//!   |  c        |   10      |
//!   +-----------+-----------+   <- closing bottom rule
//! ```
//!
//! With no entries the table collapses to the top rule alone; the borders and
//! divider become zero-length.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Line;
use heapless::String;

use super::primitives::draw_text_with_outline;
use crate::colors::{INK, TEXT_FILL};
use crate::layout::TableLayout;
use crate::leaderboard::ScoreEntry;
use crate::styles::{CENTERED, TABLE_FONT, TABLE_RULE_STYLE};

/// Fits any `i64` including the sign.
const SCORE_TEXT_CAPACITY: usize = 24;

fn draw_rule<D>(
    display: &mut D,
    start: Point,
    end: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(start, end).into_styled(TABLE_RULE_STYLE).draw(display).ok();
}

/// Draw the ranked entries inside `layout`.
pub fn draw_score_table<D>(
    display: &mut D,
    layout: &TableLayout,
    entries: &[ScoreEntry],
) where
    D: DrawTarget<Color = Rgb565>,
{
    let TableLayout {
        left,
        right,
        center,
        top,
        bottom,
        ..
    } = *layout;

    draw_rule(display, Point::new(left, top), Point::new(right, top));
    draw_rule(display, Point::new(left, bottom), Point::new(right, bottom));

    for (row, entry) in entries.iter().enumerate() {
        let rule_y = layout.row_rule_y(row);
        draw_rule(display, Point::new(left, rule_y), Point::new(right, rule_y));

        draw_text_with_outline(
            display,
            &entry.name,
            layout.name_anchor(row),
            TABLE_FONT,
            TEXT_FILL,
            INK,
            CENTERED,
        );

        let mut score_text: String<SCORE_TEXT_CAPACITY> = String::new();
        let _ = write!(score_text, "{}", entry.score);
        draw_text_with_outline(
            display,
            &score_text,
            layout.score_anchor(row),
            TABLE_FONT,
            TEXT_FILL,
            INK,
            CENTERED,
        );
    }

    // Borders and column divider
    draw_rule(display, Point::new(left, top), Point::new(left, bottom));
    draw_rule(display, Point::new(right, top), Point::new(right, bottom));
    draw_rule(display, Point::new(center, top), Point::new(center, bottom));
}

// =============================================================================
// Tests
// =============================================================================
