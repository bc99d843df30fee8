//! The leaderboard scene: all state the frame loop mutates, in one place.
//!
//! A [`Scene`] is built once at startup from the ranked leaderboard, the
//! initial canvas size and a random source. The host then drives it through
//! three entry points:
//!
//! | Host event | Call                 | Effect                                   |
//! |------------|----------------------|------------------------------------------|
//! | init       | [`Scene::new`]       | Seeds the particle field                 |
//! | frame      | [`Scene::frame`]     | Draws the current state, then advances it |
//! | resize     | [`Scene::resize`]    | Records the new canvas size, nothing else |
//!
//! Layout is derived from the stored canvas size on every frame, so a resize
//! takes effect on the next frame without touching the particles.
//!
//! # Frame Order
//!
//! 1. Clear to the background color
//! 2. Draw every particle at its current pose
//! 3. Advance every particle (respawning spent ones)
//! 4. Draw title, subtitle and score table
//!
//! Drawing before advancing matches translating/rotating with the current pose
//! and mutating afterwards; particles never affect one another, so the order
//! within the field does not matter.
//!
//! # Zero-Sized Canvas
//!
//! When the canvas has no area, drawing is skipped entirely but particles still
//! advance, so the animation resumes naturally once the canvas grows again.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use rand::Rng;
use tracing::{debug, trace};

use crate::colors::BACKGROUND;
use crate::layout::{SpawnBounds, TableLayout};
use crate::leaderboard::Leaderboard;
use crate::particles::ParticleField;
use crate::widgets::{draw_particles, draw_score_table, draw_title};

/// Rendering context owning the leaderboard, particles and random source.
pub struct Scene<R> {
    canvas: Size,
    leaderboard: Leaderboard,
    particles: ParticleField,
    rng: R,
    frame_count: u32,
}

impl<R: Rng> Scene<R> {
    /// Build the scene and seed the first wave of particles.
    pub fn new(
        canvas: Size,
        leaderboard: Leaderboard,
        mut rng: R,
    ) -> Self {
        let particles = ParticleField::seed(SpawnBounds::from_canvas(canvas), &mut rng);
        Self {
            canvas,
            leaderboard,
            particles,
            rng,
            frame_count: 0,
        }
    }

    /// Record a new canvas size. Layout and respawns use it from now on.
    pub fn resize(
        &mut self,
        canvas: Size,
    ) {
        debug!(
            "canvas resized {}x{} -> {}x{}",
            self.canvas.width, self.canvas.height, canvas.width, canvas.height
        );
        self.canvas = canvas;
    }

    #[inline]
    pub const fn canvas(&self) -> Size { self.canvas }

    #[inline]
    pub const fn leaderboard(&self) -> &Leaderboard { &self.leaderboard }

    #[inline]
    pub const fn particles(&self) -> &ParticleField { &self.particles }

    /// Frames rendered so far (wraps).
    #[inline]
    pub const fn frame_count(&self) -> u32 { self.frame_count }

    /// Table layout for the current canvas.
    pub fn table_layout(&self) -> TableLayout { TableLayout::compute(self.canvas, self.leaderboard.len()) }

    /// Spawn area for the current canvas.
    pub fn spawn_bounds(&self) -> SpawnBounds { SpawnBounds::from_canvas(self.canvas) }

    /// Advance the particles by one frame without drawing.
    pub fn update(&mut self) {
        let bounds = self.spawn_bounds();
        let respawned = self.particles.update(bounds, &mut self.rng);
        if respawned > 0 {
            trace!("frame {}: respawned {respawned} particles", self.frame_count);
        }
    }

    /// Render one frame into `display` and advance the animation.
    ///
    /// `display` should be exactly the canvas; the host crops its framebuffer
    /// to [`Scene::canvas`] before calling this.
    pub fn frame<D>(
        &mut self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let visible = self.canvas.width > 0 && self.canvas.height > 0;

        if visible {
            display.clear(BACKGROUND).ok();
            draw_particles(display, self.particles.particles());
        }

        self.update();

        if visible {
            draw_title(display, self.canvas);
            draw_score_table(display, &self.table_layout(), self.leaderboard.entries());
        }

        self.frame_count = self.frame_count.wrapping_add(1);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::Rectangle;
    use embedded_graphics_simulator::SimulatorDisplay;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::colors::{INK, LETTERBOX, TEXT_FILL};
    use crate::config::{PARTICLE_COUNT, TABLE_TOP, TEXT_SIZE};
    use crate::leaderboard::{ScoreEntry, builtin_roster};

    fn sample_board() -> Leaderboard { Leaderboard::from_entries(&builtin_roster().unwrap()) }

    fn scene(canvas: Size) -> Scene<SmallRng> { Scene::new(canvas, sample_board(), SmallRng::seed_from_u64(99)) }

    // -------------------------------------------------------------------------
    // Lifecycle Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_new_scene_seeds_particles_from_canvas() {
        let scene = scene(Size::new(1024, 768));
        assert_eq!(scene.particles().particles().len(), PARTICLE_COUNT);
        for p in scene.particles().particles() {
            assert!((0.0..1024.0).contains(&p.x));
            assert!((768.0..1274.0).contains(&p.y));
        }
        assert_eq!(scene.frame_count(), 0);
        assert_eq!(scene.leaderboard().len(), 6);
    }

    #[test]
    fn test_resize_updates_layout_and_spawn_bounds() {
        let mut scene = scene(Size::new(1024, 768));
        assert_eq!(scene.table_layout().left, 256);

        scene.resize(Size::new(640, 480));
        let layout = scene.table_layout();
        assert_eq!(layout.left, 160);
        assert_eq!(layout.right, 480);
        assert_eq!(layout.center, 320);
        assert_eq!(
            scene.spawn_bounds(),
            SpawnBounds {
                width: 640.0,
                height: 480.0
            }
        );
    }

    #[test]
    fn test_resize_leaves_particles_alone() {
        let mut scene = scene(Size::new(1024, 768));
        let before: Vec<_> = scene.particles().particles().to_vec();
        scene.resize(Size::new(320, 240));
        assert_eq!(scene.particles().particles(), before.as_slice());
    }

    #[test]
    fn test_respawn_after_resize_uses_new_height() {
        let mut scene = scene(Size::new(1024, 768));
        scene.resize(Size::new(300, 200));

        // Longest possible lifetime: y < 1274 rising at >= 5 px/frame
        for _ in 0..300 {
            scene.update();
        }
        for p in scene.particles().particles() {
            assert!(p.y <= 300.0, "Every particle respawned at most 200 + 100, got {}", p.y);
            assert!((0.0..300.0).contains(&p.x));
        }
    }

    // -------------------------------------------------------------------------
    // Rendering Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_first_frame_renders_heading_and_table() {
        let size = Size::new(1024, 768);
        let mut scene = scene(size);
        let mut display = SimulatorDisplay::new(size);
        display.clear(LETTERBOX).ok();

        scene.frame(&mut display);

        // First wave spawns at y >= 768 on this canvas, so the top is clear
        assert_eq!(display.get_pixel(Point::new(0, 0)), BACKGROUND);
        assert_eq!(display.get_pixel(Point::new(5, 400)), BACKGROUND);

        let layout = scene.table_layout();
        assert_eq!(display.get_pixel(Point::new(layout.left, TABLE_TOP + TEXT_SIZE / 2)), INK);
        assert_eq!(display.get_pixel(Point::new(layout.center, TABLE_TOP + TEXT_SIZE / 2)), INK);

        let heading = Rectangle::new(Point::new(412, 60), Size::new(200, 120));
        assert!(
            heading.points().any(|p| display.get_pixel(p) == TEXT_FILL),
            "Title text should be drawn around the canvas centre"
        );
        assert_eq!(scene.frame_count(), 1);
    }

    #[test]
    fn test_frame_advances_particles() {
        let mut scene = scene(Size::new(800, 600));
        let mut display = SimulatorDisplay::new(Size::new(800, 600));
        let before: Vec<f32> = scene.particles().particles().iter().map(|p| p.y).collect();

        scene.frame(&mut display);

        for (old_y, p) in before.iter().zip(scene.particles().particles()) {
            assert_eq!(p.y, old_y - p.speed.abs(), "Each particle rises by |speed|");
        }
    }

    #[test]
    fn test_layout_follows_resize_between_frames() {
        let mut scene = scene(Size::new(1280, 800));
        let mut display = SimulatorDisplay::new(Size::new(1280, 800));
        scene.frame(&mut display);

        scene.resize(Size::new(800, 600));
        let mut display = SimulatorDisplay::new(Size::new(800, 600));
        display.clear(LETTERBOX).ok();
        scene.frame(&mut display);

        assert_eq!(display.get_pixel(Point::new(200, TABLE_TOP + TEXT_SIZE / 2)), INK, "Left border at W/4");
        assert_eq!(display.get_pixel(Point::new(600, TABLE_TOP + TEXT_SIZE / 2)), INK, "Right border at 3W/4");
    }

    #[test]
    fn test_zero_canvas_frame_is_noop_draw() {
        let mut scene = scene(Size::new(800, 600));
        scene.resize(Size::zero());

        let mut display = SimulatorDisplay::new(Size::new(4, 4));
        display.clear(LETTERBOX).ok();
        for _ in 0..500 {
            scene.frame(&mut display);
        }

        assert_eq!(display.get_pixel(Point::new(0, 0)), LETTERBOX, "Nothing drawn on empty canvas");
        assert_eq!(scene.frame_count(), 500);
        for p in scene.particles().particles() {
            assert!(p.speed != 0.0);
        }
    }

    #[test]
    fn test_empty_leaderboard_renders() {
        let size = Size::new(800, 600);
        let mut scene = Scene::new(size, Leaderboard::from_entries(&[]), SmallRng::seed_from_u64(1));
        let mut display = SimulatorDisplay::new(size);
        scene.frame(&mut display);

        let layout = scene.table_layout();
        assert_eq!(layout.rows, 0);
        assert_eq!(layout.bottom, layout.top);
        assert_eq!(display.get_pixel(Point::new(300, TABLE_TOP)), INK, "Header rule still drawn");
    }

    #[test]
    fn test_single_entry_leaderboard() {
        let size = Size::new(800, 600);
        let board = Leaderboard::from_entries(&[ScoreEntry::new("solo", 1)]);
        let mut scene = Scene::new(size, board, SmallRng::seed_from_u64(2));
        let mut display = SimulatorDisplay::new(size);
        scene.frame(&mut display);

        assert_eq!(scene.table_layout().bottom, TABLE_TOP + TEXT_SIZE);
    }
}
