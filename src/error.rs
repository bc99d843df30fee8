//! Startup error taxonomy.
//!
//! Only loading the roster can fail. Everything that happens once the frame
//! loop runs (empty tables, particle respawns, zero-sized canvases) is normal
//! control flow.

/// Errors raised while building the leaderboard at startup.
#[derive(thiserror::Error, Debug)]
pub enum HighscoreError {
    /// The roster is not a sequence of `[name, score]` pairs, a pair lacks
    /// its name, or a score is not an integer.
    #[error("malformed score roster: {0}")]
    Roster(#[from] serde_yaml::Error),

    /// A pair parsed but its name is empty or whitespace.
    #[error("score entry {index} has a blank player name")]
    BlankName { index: usize },
}

pub type HighscoreResult<T> = Result<T, HighscoreError>;
