//! Leaderboard model: the fixed roster and its ranked view.
//!
//! The roster ships inside the binary as YAML (`assets/scores.yaml`), a
//! sequence of `[name, score]` pairs in submission order. At startup it is
//! parsed, validated and ranked once; the ranked [`Leaderboard`] is read-only
//! for the rest of the run.
//!
//! # Ranking
//!
//! Entries are ordered by score, highest first. The sort is stable, so players
//! with equal scores keep their submission order:
//!
//! ```text
//! [ghast 9000, a 5, b 6, c 10, g 2, x 5]  ->  [ghast 9000, c 10, b 6, a 5, x 5, g 2]
//! ```

use serde::Deserialize;

use crate::error::{HighscoreError, HighscoreResult};

/// Roster baked into the binary at compile time.
pub const BUILTIN_ROSTER: &str = include_str!("../assets/scores.yaml");

/// One player's result.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, i64)")]
pub struct ScoreEntry {
    pub name: String,
    pub score: i64,
}

impl ScoreEntry {
    pub fn new(
        name: impl Into<String>,
        score: i64,
    ) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

impl From<(String, i64)> for ScoreEntry {
    fn from((name, score): (String, i64)) -> Self { Self { name, score } }
}

/// Parse a roster of `[name, score]` pairs.
///
/// A null document or an empty sequence yields an empty roster.
///
/// # Errors
/// - [`HighscoreError::Roster`] if the text is not a sequence of pairs, a pair
///   is missing its name, or a score is not an integer.
/// - [`HighscoreError::BlankName`] if a name is empty or only whitespace.
pub fn parse_roster(yaml: &str) -> HighscoreResult<Vec<ScoreEntry>> {
    let entries: Option<Vec<ScoreEntry>> = serde_yaml::from_str(yaml)?;
    let entries = entries.unwrap_or_default();

    if let Some(index) = entries.iter().position(|entry| entry.name.trim().is_empty()) {
        return Err(HighscoreError::BlankName { index });
    }

    Ok(entries)
}

/// Parse [`BUILTIN_ROSTER`].
pub fn builtin_roster() -> HighscoreResult<Vec<ScoreEntry>> { parse_roster(BUILTIN_ROSTER) }

/// Return a copy of `entries` ordered by score, highest first.
///
/// Uses a stable sort, so equal scores keep their relative input order.
/// The input is left untouched.
pub fn rank_scores(entries: &[ScoreEntry]) -> Vec<ScoreEntry> {
    let mut ranked = entries.to_vec();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Ranked, read-only view of the roster.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    /// Rank `entries` into a new leaderboard.
    pub fn from_entries(entries: &[ScoreEntry]) -> Self {
        Self {
            entries: rank_scores(entries),
        }
    }

    /// Entries in rank order.
    #[inline]
    pub fn entries(&self) -> &[ScoreEntry] { &self.entries }

    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

// =============================================================================
// Tests
// =============================================================================
