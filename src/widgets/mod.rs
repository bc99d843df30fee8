//! Widget components for the leaderboard screen.
//!
//! - [`primitives`]: Transform value, rotated squares, outlined text
//! - [`squares`]: The drifting background squares
//! - [`title`]: Title and subtitle
//! - [`table`]: Ranked score table
//!
//! Every widget is generic over `DrawTarget<Color = Rgb565>`, so the same code
//! draws into the simulator window and into headless test displays. Draw
//! errors are discarded with `.ok()`; the targets used here are infallible.
//!
//! # Layering
//!
//! The scene draws back to front: squares first, then title, then table. Text
//! and rules are never covered by a square within the same frame.

mod primitives;
mod squares;
mod table;
mod title;

pub use primitives::{Transform, draw_rotated_square, draw_text_with_outline};
pub use squares::draw_particles;
pub use table::draw_score_table;
pub use title::draw_title;
