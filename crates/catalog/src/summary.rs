//! Rating statistics derived from vote lists.
//!
//! Nothing here is cached: callers recompute from the ledger on every read,
//! so a summary is always consistent with the votes it was built from.

use crate::movies::MOVIES;
use crate::types::{MovieRating, RatingSummary, Vote, VoteLedger};

impl RatingSummary {
    /// Compute the summary for one vote list.
    ///
    /// - `stars = round(5 * positives / total, 2)`
    /// - `percent_positive = round(100 * positives / total, 1)`
    ///
    /// Both are 0 for an empty list.
    pub fn from_votes(votes: &[Vote]) -> Self {
        let total = votes.len();
        if total == 0 {
            return Self {
                votes: 0,
                positives: 0,
                positive_ratio: 0.0,
                stars: 0.0,
                percent_positive: 0.0,
            };
        }

        let positives = votes.iter().filter(|v| v.is_positive()).count();
        let ratio = positives as f64 / total as f64;

        Self {
            votes: total,
            positives,
            positive_ratio: ratio,
            stars: round_to(ratio * 5.0, 2),
            percent_positive: round_to(ratio * 100.0, 1),
        }
    }
}

/// Summaries for every catalog movie, in catalog order
pub fn summarize(ledger: &VoteLedger) -> Vec<MovieRating> {
    MOVIES
        .iter()
        .map(|movie| MovieRating {
            title: movie.title,
            summary: RatingSummary::from_votes(ledger.votes_for(movie.title)),
        })
        .collect()
}

/// Round at `places` decimals from the exact binary value of `value`.
///
/// Scaling by a power of ten first can land a value that sits just above a
/// half exactly on it (5 * 1/200 is slightly more than 0.025). Formatting
/// works on the exact expansion and only treats true halves as ties, which
/// go to even.
fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}
