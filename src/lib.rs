//! Tempest Run high-score screen.
//!
//! Renders a ranked leaderboard over a field of slowly rising, spinning
//! squares. This library holds everything that can run headless; the
//! `highscores` binary (`main.rs`) adds the simulator window and frame pacing.
//!
//! - [`leaderboard`]: Roster parsing and stable descending ranking
//! - [`particles`]: The fixed-size square field and its per-frame update
//! - [`layout`]: Canvas-relative table geometry and spawn bounds
//! - [`scene`]: The single state object the frame loop drives
//! - [`widgets`]: Drawing code, generic over any `Rgb565` draw target
//! - [`config`], [`colors`], [`styles`]: Compile-time constants
//! - [`error`]: Startup errors
//!
//! # Testing
//!
//! ```bash
//! cargo test --lib
//! ```
//!
//! Rendering tests draw into an off-screen `SimulatorDisplay`; no window is
//! opened.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)] // f32 -> i32 pixel coordinates
#![allow(clippy::cast_precision_loss)] // u32 -> f32 canvas extents
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod error;
pub mod layout;
pub mod leaderboard;
pub mod particles;
pub mod scene;
pub mod styles;
pub mod widgets;

pub use error::{HighscoreError, HighscoreResult};
pub use leaderboard::{Leaderboard, ScoreEntry};
pub use scene::Scene;
