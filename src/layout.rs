//! Canvas-relative layout.
//!
//! The canvas can change size between frames, so nothing here is cached: the
//! scene asks for a fresh [`TableLayout`] and [`SpawnBounds`] each frame from
//! the current canvas size.
//!
//! # Table Geometry
//!
//! ```text
//!          W/4       W/2-W/8    W/2    W/2+W/8      3W/4
//!   top ----+-----------------------+-------------------+----
//!           |        name           |       score       |   row 0
//!           +-----------------------+-------------------+
//!           |        name           |       score       |   row 1
//! bottom ---+-----------------------+-------------------+----
//! ```
//!
//! All divisions are by constants, so a zero-sized canvas simply collapses the
//! columns onto `x = 0`; nothing divides by a canvas dimension.

use embedded_graphics::geometry::{Point, Size};

use crate::config::{TABLE_TOP, TEXT_SIZE};

/// Horizontal centre of the canvas, used for title text.
#[inline]
pub fn center_x(canvas: Size) -> i32 { to_coord(canvas.width) / 2 }

/// Clamp a `u32` extent into the `i32` coordinate space.
#[inline]
fn to_coord(extent: u32) -> i32 { i32::try_from(extent).unwrap_or(i32::MAX) }

// =============================================================================
// Score Table
// =============================================================================

/// Resolved positions of the score table for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableLayout {
    /// Left border (`W/4`).
    pub left: i32,
    /// Right border (`3W/4`).
    pub right: i32,
    /// Column divider (`W/2`).
    pub center: i32,
    /// Centre of the name column (`W/2 - W/8`).
    pub name_x: i32,
    /// Centre of the score column (`W/2 + W/8`).
    pub score_x: i32,
    /// Top rule.
    pub top: i32,
    /// Closing bottom rule (`top + rows * row_height`).
    pub bottom: i32,
    pub row_height: i32,
    pub rows: usize,
}

impl TableLayout {
    /// Lay out a table with `rows` entries on a canvas of size `canvas`.
    pub fn compute(
        canvas: Size,
        rows: usize,
    ) -> Self {
        let w = to_coord(canvas.width);
        let center = w / 2;
        let eighth = w / 8;
        let row_count = i32::try_from(rows).unwrap_or(i32::MAX);

        Self {
            left: w / 4,
            right: (i64::from(w) * 3 / 4) as i32,
            center,
            name_x: center - eighth,
            score_x: center + eighth,
            top: TABLE_TOP,
            bottom: TABLE_TOP.saturating_add(row_count.saturating_mul(TEXT_SIZE)),
            row_height: TEXT_SIZE,
            rows,
        }
    }

    /// Y coordinate of the rule above row `row`.
    #[inline]
    pub fn row_rule_y(
        &self,
        row: usize,
    ) -> i32 {
        let row = i32::try_from(row).unwrap_or(i32::MAX);
        self.top.saturating_add(row.saturating_mul(self.row_height))
    }

    /// Text baseline of row `row`, three quarters of a row below its rule.
    #[inline]
    pub fn row_baseline_y(
        &self,
        row: usize,
    ) -> i32 {
        self.row_rule_y(row).saturating_add(self.row_height * 3 / 4)
    }

    /// Anchor for the name cell of row `row`.
    #[inline]
    pub fn name_anchor(
        &self,
        row: usize,
    ) -> Point {
        Point::new(self.name_x, self.row_baseline_y(row))
    }

    /// Anchor for the score cell of row `row`.
    #[inline]
    pub fn score_anchor(
        &self,
        row: usize,
    ) -> Point {
        Point::new(self.score_x, self.row_baseline_y(row))
    }
}

// =============================================================================
// Particle Spawning
// =============================================================================

/// Canvas extent used when (re)spawning particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnBounds {
    pub width: f32,
    pub height: f32,
}

impl SpawnBounds {
    pub fn from_canvas(canvas: Size) -> Self {
        Self {
            width: canvas.width as f32,
            height: canvas.height as f32,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
