//! Color constants for the leaderboard screen.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! 8-bit gray levels map to `(v * 31 / 255, v * 63 / 255, v * 31 / 255)`.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black. Used for rules, square outlines and text outlines.
pub const INK: Rgb565 = Rgb565::BLACK;

/// Pure white. Fill color of all text.
pub const TEXT_FILL: Rgb565 = Rgb565::WHITE;

/// Light gray (8-bit level 220). Canvas background and square fill, so the
/// squares read as faint outlines drifting over the page.
pub const BACKGROUND: Rgb565 = Rgb565::new(27, 55, 27);

/// Very dark gray for the part of the framebuffer outside the logical canvas.
pub const LETTERBOX: Rgb565 = Rgb565::new(3, 6, 3);
