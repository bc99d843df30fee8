//! Application configuration constants.
//!
//! Everything here is fixed at compile time. Layout values that depend on the
//! canvas size (table columns, title centre) are *not* pre-computed: the canvas
//! can be resized at runtime, so [`crate::layout`] derives them from the current
//! size every frame. Only the offsets that stay put regardless of size live here.

use std::time::Duration;

use embedded_graphics::geometry::Size;

// =============================================================================
// Canvas Configuration
// =============================================================================

/// Width of the simulator framebuffer. Must fit the largest canvas preset.
pub const FRAMEBUFFER_WIDTH: u32 = 1280;

/// Height of the simulator framebuffer.
pub const FRAMEBUFFER_HEIGHT: u32 = 800;

/// Canvas sizes the host cycles through on a resize request.
/// The first entry is the size used at startup. The zero-sized preset is
/// there on purpose so a running session can exercise the degenerate layout.
pub const CANVAS_PRESETS: [Size; 5] = [
    Size::new(1024, 768),
    Size::new(800, 600),
    Size::new(FRAMEBUFFER_WIDTH, FRAMEBUFFER_HEIGHT),
    Size::new(640, 480),
    Size::new(0, 0),
];

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~60 FPS). The host loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(16);

// =============================================================================
// Particle Configuration
// =============================================================================

/// Number of decorative squares. Never changes during a run.
pub const PARTICLE_COUNT: usize = 30;

/// Edge length of each square in pixels.
pub const SQUARE_SIZE: u32 = 75;

/// Lower bound (inclusive) of a particle's speed magnitude.
pub const PARTICLE_SPEED_MIN: f32 = 5.0;

/// Upper bound (exclusive) of a particle's speed magnitude.
pub const PARTICLE_SPEED_MAX: f32 = 10.0;

/// A particle whose `y` drops below this is respawned under the canvas.
pub const PARTICLE_RESET_Y: f32 = -100.0;

/// Distance below the bottom edge at which respawned particles appear.
pub const RESPAWN_BELOW: f32 = 100.0;

/// Extra room past `canvas width` for the initial vertical spawn range.
pub const INITIAL_SPAWN_EXTRA: f32 = 250.0;

/// Fraction of `canvas width` where the initial vertical spawn range starts.
pub const INITIAL_SPAWN_START: f32 = 0.75;

// =============================================================================
// Title Layout
// =============================================================================

/// Game name drawn at the top of the screen.
pub const TITLE_TEXT: &str = "Tempest Run";

/// Caption drawn under the title.
pub const SUBTITLE_TEXT: &str = "HighScores";

/// Baseline of the title text.
pub const TITLE_Y: i32 = 100;

/// Baseline of the subtitle text.
pub const SUBTITLE_Y: i32 = 175;

// =============================================================================
// Score Table Layout
// =============================================================================

/// Y coordinate of the table's top rule (the header offset).
pub const TABLE_TOP: i32 = 250;

/// Row height. Text sits at three quarters of a row below its rule.
pub const TEXT_SIZE: i32 = 60;

/// Stroke width of table rules and borders.
pub const TABLE_STROKE_WIDTH: u32 = 2;

/// Stroke width of the decorative square outlines.
pub const SQUARE_STROKE_WIDTH: u32 = 1;
