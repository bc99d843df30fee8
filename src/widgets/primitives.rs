//! Low-level drawing primitives shared across widgets.
//!
//! # Transform
//!
//! embedded-graphics has no notion of a current transformation matrix, so the
//! translate/rotate stack of a canvas API is modelled as a small `Copy` value.
//! "Save" is keeping a copy, "restore" is dropping back to it, and "reset" is
//! [`Transform::IDENTITY`]. Rotation follows screen conventions: y grows
//! downward, so positive degrees turn clockwise on screen.
//!
//! # Rotated Squares
//!
//! `Rectangle` is always axis-aligned, so a rotated square is drawn as two
//! filled triangles followed by its four edges as stroked lines.
//!
//! # Outlined Text
//!
//! Mono fonts have no stroke, so text is drawn eight times in the outline color
//! at 1px offsets, then once on top in the fill color.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Triangle};
use embedded_graphics::text::{Text, TextStyle};

/// 1px offsets around the centre pixel, for the text outline pass.
const OUTLINE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1), // top row
    (-1, 0),
    (1, 0), // middle row (skip center)
    (-1, 1),
    (0, 1),
    (1, 1), // bottom row
];

// =============================================================================
// Transform
// =============================================================================

/// Translation plus rotation, mapping local coordinates onto the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    tx: f32,
    ty: f32,
    sin: f32,
    cos: f32,
}

impl Transform {
    /// No translation, no rotation.
    pub const IDENTITY: Self = Self {
        tx: 0.0,
        ty: 0.0,
        sin: 0.0,
        cos: 1.0,
    };

    /// Move the local origin by `(dx, dy)`, measured in the current local axes.
    #[must_use]
    pub fn translate(
        self,
        dx: f32,
        dy: f32,
    ) -> Self {
        Self {
            tx: self.tx + dx * self.cos - dy * self.sin,
            ty: self.ty + dx * self.sin + dy * self.cos,
            ..self
        }
    }

    /// Rotate the local axes by `degrees` around the local origin.
    #[must_use]
    pub fn rotate_degrees(
        self,
        degrees: f32,
    ) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            sin: self.sin * cos + self.cos * sin,
            cos: self.cos * cos - self.sin * sin,
            ..self
        }
    }

    /// Map a local point to the nearest canvas pixel.
    #[inline]
    pub fn apply(
        &self,
        x: f32,
        y: f32,
    ) -> Point {
        let cx = self.tx + x * self.cos - y * self.sin;
        let cy = self.ty + x * self.sin + y * self.cos;
        Point::new(cx.round() as i32, cy.round() as i32)
    }
}

impl Default for Transform {
    fn default() -> Self { Self::IDENTITY }
}

// =============================================================================
// Shapes
// =============================================================================

/// Draw a square of edge `size` centred on the transform's local origin.
///
/// `fill` covers the interior, `stroke` traces the four edges on top of it.
pub fn draw_rotated_square<D>(
    display: &mut D,
    transform: Transform,
    size: u32,
    fill: PrimitiveStyle<Rgb565>,
    stroke: PrimitiveStyle<Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let half = size as f32 / 2.0;
    let corners = [(-half, -half), (half, -half), (half, half), (-half, half)].map(|(x, y)| transform.apply(x, y));

    Triangle::new(corners[0], corners[1], corners[2])
        .into_styled(fill)
        .draw(display)
        .ok();
    Triangle::new(corners[0], corners[2], corners[3])
        .into_styled(fill)
        .draw(display)
        .ok();

    for i in 0..corners.len() {
        Line::new(corners[i], corners[(i + 1) % corners.len()])
            .into_styled(stroke)
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Text
// =============================================================================

/// Draw text with a 1px outline for readability over busy backgrounds.
pub fn draw_text_with_outline<D>(
    display: &mut D,
    text: &str,
    position: Point,
    font: &MonoFont<'_>,
    text_color: Rgb565,
    outline_color: Rgb565,
    text_style: TextStyle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let outline_char_style = MonoTextStyle::new(font, outline_color);
    let main_char_style = MonoTextStyle::new(font, text_color);

    for (dx, dy) in OUTLINE_OFFSETS {
        let offset_pos = Point::new(position.x + dx, position.y + dy);
        Text::with_text_style(text, offset_pos, outline_char_style, text_style)
            .draw(display)
            .ok();
    }

    Text::with_text_style(text, position, main_char_style, text_style)
        .draw(display)
        .ok();
}

// =============================================================================
// Tests
// =============================================================================
