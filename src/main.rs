//! Desktop host for the Tempest Run high-score screen.
//!
//! Opens an SDL2 window through `embedded-graphics-simulator` and drives a
//! [`Scene`] at ~60 FPS until the window is closed.
//!
//! # Resizing
//!
//! The simulator window has a fixed size, so the framebuffer is allocated at
//! the largest canvas preset and the scene draws into a cropped view of it.
//! Pressing `R` switches to the next entry of `CANVAS_PRESETS` and notifies the
//! scene, exactly as a host window-resize callback would. The framebuffer area
//! outside the current canvas is painted in the letterbox color.
//!
//! # Startup Failure
//!
//! A malformed built-in roster is reported and the process exits with a failure
//! status before any window opens.

use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use tempest_highscores::colors::LETTERBOX;
use tempest_highscores::config::{CANVAS_PRESETS, FRAME_TIME, FRAMEBUFFER_HEIGHT, FRAMEBUFFER_WIDTH};
use tempest_highscores::leaderboard::builtin_roster;
use tempest_highscores::{Leaderboard, Scene};
use tracing::{Level, debug, error, info};
use tracing_subscriber::fmt;

fn init_logging() {
    #[cfg(not(debug_assertions))]
    fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(Level::INFO)
        .init();

    #[cfg(debug_assertions)]
    fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(Level::TRACE)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    // ==========================================================================
    // Init: rank the roster and seed the scene
    // ==========================================================================

    let roster = match builtin_roster() {
        Ok(roster) => roster,
        Err(err) => {
            error!("Failed to load the score roster: {err}");
            return ExitCode::FAILURE;
        }
    };
    let leaderboard = Leaderboard::from_entries(&roster);
    info!("Loaded {} scores", leaderboard.len());
    for (rank, entry) in leaderboard.entries().iter().enumerate() {
        info!("#{} {} {}", rank + 1, entry.name, entry.score);
    }

    let mut preset = 0;
    let mut scene = Scene::new(CANVAS_PRESETS[preset], leaderboard, rand::rng());

    let mut display: SimulatorDisplay<Rgb565> =
        SimulatorDisplay::new(Size::new(FRAMEBUFFER_WIDTH, FRAMEBUFFER_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    let mut window = Window::new("Tempest Run - HighScores", &output_settings);

    display.clear(LETTERBOX).ok();
    window.update(&display);

    // ==========================================================================
    // Frame Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        // Key mapping:
        //   R - Switch to the next canvas size (simulated window resize)
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    info!("Window closed after {} frames", scene.frame_count());
                    return ExitCode::SUCCESS;
                }
                SimulatorEvent::KeyDown {
                    keycode: Keycode::R,
                    repeat: false,
                    ..
                } => {
                    preset = (preset + 1) % CANVAS_PRESETS.len();
                    let canvas = CANVAS_PRESETS[preset];
                    info!("Resizing canvas to {}x{}", canvas.width, canvas.height);
                    scene.resize(canvas);
                }
                _ => {}
            }
        }

        display.clear(LETTERBOX).ok();
        let canvas_area = Rectangle::new(Point::zero(), scene.canvas());
        scene.frame(&mut display.cropped(&canvas_area));
        window.update(&display);

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        } else {
            debug!("Frame took {elapsed:?}, over budget");
        }
    }
}
