//! Decorative squares drifting up behind the leaderboard.
//!
//! The field always holds [`PARTICLE_COUNT`] squares. Each frame every square
//! spins by its signed `speed` (in degrees) and rises by `|speed|` pixels, so
//! the sign only picks the spin direction. A square that rises past
//! [`PARTICLE_RESET_Y`] is replaced by a fresh one just below the canvas.
//!
//! # Spawning
//!
//! | Field      | Initial seeding                  | Respawn           |
//! |------------|----------------------------------|-------------------|
//! | `x`        | `[0, W)`                         | `[0, W)`          |
//! | `y`        | `[0.75 * W, W + 250)`            | `H + 100`         |
//! | `rotation` | `0`                              | `0`               |
//! | `speed`    | `±[5, 10)`                       | `±[5, 10)`        |
//!
//! The initial `y` range is derived from the canvas *width*, not its height.
//! That is kept as-is so the opening frames match the original sketch, where
//! the first wave starts near (or below) the bottom edge on landscape canvases.
//!
//! All sampling goes through a caller-supplied [`Rng`] so tests can seed it.

use rand::Rng;

use crate::config::{
    INITIAL_SPAWN_EXTRA,
    INITIAL_SPAWN_START,
    PARTICLE_COUNT,
    PARTICLE_RESET_Y,
    PARTICLE_SPEED_MAX,
    PARTICLE_SPEED_MIN,
    RESPAWN_BELOW,
};
use crate::layout::SpawnBounds;

/// One rotating square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Centre, horizontal.
    pub x: f32,
    /// Centre, vertical (grows downward).
    pub y: f32,
    /// Clockwise rotation in degrees.
    pub rotation_deg: f32,
    /// Signed, never zero. Magnitude is the rise per frame.
    pub speed: f32,
}

impl Particle {
    /// Advance one frame without respawning.
    #[inline]
    pub fn step(&mut self) {
        self.rotation_deg -= self.speed;
        self.y -= self.speed.abs();
    }

    /// Whether the square has risen far enough above the canvas to respawn.
    #[inline]
    pub fn is_spent(&self) -> bool { self.y < PARTICLE_RESET_Y }
}

/// Sample from `[low, high)`, or return `low` when the range is empty.
///
/// A zero-width canvas makes `[0, W)` empty; `random_range` would panic on it.
fn sample_span<R>(
    rng: &mut R,
    low: f32,
    high: f32,
) -> f32
where
    R: Rng + ?Sized,
{
    if high > low { rng.random_range(low..high) } else { low }
}

/// Sample a speed with magnitude in `[5, 10)` and a uniformly random sign.
pub fn sample_speed<R>(rng: &mut R) -> f32
where
    R: Rng + ?Sized,
{
    let magnitude = rng.random_range(PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX);
    if rng.random_bool(0.5) { magnitude } else { -magnitude }
}

/// Build a particle for the first wave, placed using the width-derived range.
pub fn seed_particle<R>(
    bounds: SpawnBounds,
    rng: &mut R,
) -> Particle
where
    R: Rng + ?Sized,
{
    let x = sample_span(rng, 0.0, bounds.width);
    let y = sample_span(
        rng,
        bounds.width * INITIAL_SPAWN_START,
        bounds.width + INITIAL_SPAWN_EXTRA,
    );
    Particle {
        x,
        y,
        rotation_deg: 0.0,
        speed: sample_speed(rng),
    }
}

/// Build a replacement particle just below the bottom edge.
pub fn spawn_particle<R>(
    bounds: SpawnBounds,
    rng: &mut R,
) -> Particle
where
    R: Rng + ?Sized,
{
    Particle {
        x: sample_span(rng, 0.0, bounds.width),
        y: bounds.height + RESPAWN_BELOW,
        rotation_deg: 0.0,
        speed: sample_speed(rng),
    }
}

/// Fixed-size collection of squares.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: [Particle; PARTICLE_COUNT],
}

impl ParticleField {
    /// Seed the first wave.
    pub fn seed<R>(
        bounds: SpawnBounds,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + ?Sized,
    {
        Self {
            particles: core::array::from_fn(|_| seed_particle(bounds, &mut *rng)),
        }
    }

    /// Wrap an explicit set of particles.
    pub const fn from_particles(particles: [Particle; PARTICLE_COUNT]) -> Self { Self { particles } }

    #[inline]
    pub fn particles(&self) -> &[Particle] { &self.particles }

    /// Advance every particle one frame, respawning the spent ones.
    ///
    /// Returns how many particles were respawned.
    pub fn update<R>(
        &mut self,
        bounds: SpawnBounds,
        rng: &mut R,
    ) -> usize
    where
        R: Rng + ?Sized,
    {
        let mut respawned = 0;
        for particle in &mut self.particles {
            particle.step();
            if particle.is_spent() {
                *particle = spawn_particle(bounds, rng);
                respawned += 1;
            }
        }
        respawned
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    const BOUNDS: SpawnBounds = SpawnBounds {
        width: 1024.0,
        height: 768.0,
    };

    fn assert_valid_speed(speed: f32) {
        assert!(speed != 0.0, "Speed must never be zero");
        assert!(
            (PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX).contains(&speed.abs()),
            "Speed magnitude {speed} outside [5, 10)"
        );
    }

    // -------------------------------------------------------------------------
    // Spawning Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_seed_particle_ranges() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..1000 {
            let p = seed_particle(BOUNDS, &mut rng);
            assert!((0.0..1024.0).contains(&p.x), "x {} outside [0, W)", p.x);
            assert!((768.0..1274.0).contains(&p.y), "y {} outside [0.75W, W+250)", p.y);
            assert_eq!(p.rotation_deg, 0.0);
            assert_valid_speed(p.speed);
        }
    }

    #[test]
    fn test_seed_uses_width_for_vertical_range() {
        // Tall canvas: if height were used the range would start at 1500
        let tall = SpawnBounds {
            width: 400.0,
            height: 2000.0,
        };
        let mut rng = SmallRng::seed_from_u64(2);
        for _ in 0..500 {
            let p = seed_particle(tall, &mut rng);
            assert!((300.0..650.0).contains(&p.y), "y {} not derived from width", p.y);
        }
    }

    #[test]
    fn test_spawn_particle_below_canvas() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..1000 {
            let p = spawn_particle(BOUNDS, &mut rng);
            assert_eq!(p.y, 768.0 + 100.0, "Respawn y must be exactly H + 100");
            assert!((0.0..1024.0).contains(&p.x));
            assert_eq!(p.rotation_deg, 0.0);
            assert_valid_speed(p.speed);
        }
    }

    #[test]
    fn test_speed_takes_both_signs() {
        let mut rng = SmallRng::seed_from_u64(4);
        let speeds: Vec<f32> = (0..200).map(|_| sample_speed(&mut rng)).collect();
        assert!(speeds.iter().any(|s| *s > 0.0), "Expected some positive speeds");
        assert!(speeds.iter().any(|s| *s < 0.0), "Expected some negative speeds");
    }

    #[test]
    fn test_spawn_on_zero_canvas_does_not_panic() {
        let mut rng = SmallRng::seed_from_u64(5);
        let zero = SpawnBounds {
            width: 0.0,
            height: 0.0,
        };

        let seeded = seed_particle(zero, &mut rng);
        assert_eq!(seeded.x, 0.0);
        assert!((0.0..250.0).contains(&seeded.y));

        let respawned = spawn_particle(zero, &mut rng);
        assert_eq!(respawned.x, 0.0);
        assert_eq!(respawned.y, 100.0);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = ParticleField::seed(BOUNDS, &mut SmallRng::seed_from_u64(42));
        let b = ParticleField::seed(BOUNDS, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a.particles(), b.particles());
    }

    // -------------------------------------------------------------------------
    // Update Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_step_moves_up_and_spins_with_sign() {
        let mut cw = Particle {
            x: 10.0,
            y: 500.0,
            rotation_deg: 0.0,
            speed: 6.0,
        };
        cw.step();
        assert_eq!(cw.y, 494.0);
        assert_eq!(cw.rotation_deg, -6.0);
        assert_eq!(cw.x, 10.0, "x never changes");

        let mut ccw = Particle {
            speed: -6.0,
            ..cw
        };
        ccw.step();
        assert_eq!(ccw.y, 488.0, "Negative speed still rises");
        assert_eq!(ccw.rotation_deg, 0.0);
    }

    #[test]
    fn test_field_keeps_fixed_count() {
        let mut rng = SmallRng::seed_from_u64(6);
        let mut field = ParticleField::seed(BOUNDS, &mut rng);
        for _ in 0..2000 {
            field.update(BOUNDS, &mut rng);
            assert_eq!(field.particles().len(), PARTICLE_COUNT);
            for p in field.particles() {
                assert_valid_speed(p.speed);
            }
        }
    }

    #[test]
    fn test_particle_lifecycle_resets_exactly_once() {
        let mut rng = SmallRng::seed_from_u64(7);
        let start = Particle {
            x: 1.0,
            y: 300.0,
            rotation_deg: 0.0,
            speed: 5.0,
        };
        let mut field = ParticleField::from_particles([start; PARTICLE_COUNT]);

        // 300 -> below -100 takes 81 frames at 5 px/frame
        let mut frames = 0;
        let mut total_respawned = 0;
        while total_respawned == 0 {
            total_respawned += field.update(BOUNDS, &mut rng);
            frames += 1;
            assert!(frames <= 81, "Particles must eventually leave the canvas");
        }
        assert_eq!(frames, 81);
        assert_eq!(total_respawned, PARTICLE_COUNT, "Each particle resets exactly once");

        for p in field.particles() {
            assert_eq!(p.y, 768.0 + 100.0);
            assert_eq!(p.rotation_deg, 0.0);
        }

        // The next frame just moves the new particles, no further resets
        assert_eq!(field.update(BOUNDS, &mut rng), 0);
    }

    #[test]
    fn test_respawn_uses_current_bounds() {
        let mut rng = SmallRng::seed_from_u64(8);
        let spent = Particle {
            x: 1.0,
            y: -99.0,
            rotation_deg: 45.0,
            speed: -7.0,
        };
        let mut field = ParticleField::from_particles([spent; PARTICLE_COUNT]);
        let resized = SpawnBounds {
            width: 200.0,
            height: 150.0,
        };

        assert_eq!(field.update(resized, &mut rng), PARTICLE_COUNT);
        for p in field.particles() {
            assert_eq!(p.y, 250.0);
            assert!((0.0..200.0).contains(&p.x));
        }
    }
}
