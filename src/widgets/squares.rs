//! Background layer: the drifting, spinning squares.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::primitives::{Transform, draw_rotated_square};
use crate::config::SQUARE_SIZE;
use crate::particles::Particle;
use crate::styles::{SQUARE_FILL_STYLE, SQUARE_STROKE_STYLE};

/// Draw every particle as a background-filled, thinly outlined square.
///
/// Later particles overlap earlier ones, so the draw order is the field order.
pub fn draw_particles<D>(
    display: &mut D,
    particles: &[Particle],
) where
    D: DrawTarget<Color = Rgb565>,
{
    for particle in particles {
        let transform = Transform::IDENTITY
            .translate(particle.x, particle.y)
            .rotate_degrees(particle.rotation_deg);
        draw_rotated_square(display, transform, SQUARE_SIZE, SQUARE_FILL_STYLE, SQUARE_STROKE_STYLE);
    }
}
