//! Core domain types for movie votes.
//!
//! - [`Vote`]: a single thumbs-up/thumbs-down outcome
//! - [`Movie`]: an entry of the fixed catalog
//! - [`VoteLedger`]: every movie's ordered vote list, as persisted
//! - [`RatingSummary`] / [`MovieRating`]: statistics derived from a vote list

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::StoreError;
use crate::movies::MOVIES;

// =============================================================================
// Vote
// =============================================================================

/// One recorded classification outcome.
///
/// Persisted as the bare integer `0` or `1`; any other integer is rejected
/// when the store is deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Vote {
    Negative = 0,
    Positive = 1,
}

impl Vote {
    pub fn is_positive(self) -> bool {
        matches!(self, Vote::Positive)
    }
}

impl From<Vote> for u8 {
    fn from(vote: Vote) -> Self {
        vote as u8
    }
}

impl TryFrom<u8> for Vote {
    type Error = StoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Vote::Negative),
            1 => Ok(Vote::Positive),
            other => Err(StoreError::InvalidVote(other)),
        }
    }
}

// =============================================================================
// Movie
// =============================================================================

/// A movie from the fixed catalog, with the canned reviews offered on its page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Movie {
    pub title: &'static str,
    pub suggestions: &'static [&'static str],
}

// =============================================================================
// VoteLedger
// =============================================================================

/// Mapping from movie title to its votes in insertion order.
///
/// This is exactly what lives in the store file. Titles that are not in the
/// catalog are kept as-is so a round trip never drops data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoteLedger {
    votes: BTreeMap<String, Vec<Vote>>,
}

impl VoteLedger {
    /// Creates a ledger with no titles at all
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger holding an empty vote list for every catalog movie
    pub fn with_catalog() -> Self {
        let mut ledger = Self::new();
        ledger.ensure_catalog();
        ledger
    }

    /// Adds an empty list for each catalog movie the ledger doesn't know yet.
    ///
    /// Returns true if anything was added.
    pub fn ensure_catalog(&mut self) -> bool {
        let mut added = false;
        for movie in MOVIES {
            if !self.votes.contains_key(movie.title) {
                self.votes.insert(movie.title.to_string(), Vec::new());
                added = true;
            }
        }
        added
    }

    /// Votes recorded for `title`, empty if the title is unknown
    pub fn votes_for(&self, title: &str) -> &[Vote] {
        self.votes
            .get(title)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Number of votes recorded for `title`
    pub fn vote_count(&self, title: &str) -> usize {
        self.votes_for(title).len()
    }

    /// Appends a vote and returns the new count for that title
    pub fn record(&mut self, title: &str, vote: Vote) -> usize {
        let votes = self.votes.entry(title.to_string()).or_default();
        votes.push(vote);
        votes.len()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.votes.contains_key(title)
    }

    /// All titles present in the ledger, sorted
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.votes.keys().map(|k| k.as_str())
    }

    /// Total votes across all titles
    pub fn total_votes(&self) -> usize {
        self.votes.values().map(|v| v.len()).sum()
    }
}

// =============================================================================
// Rating summaries
// =============================================================================

/// Aggregate statistics for one movie's vote list.
///
/// Never stored; rebuilt from the ledger on every read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingSummary {
    pub votes: usize,
    pub positives: usize,
    pub positive_ratio: f64,
    /// Ratio scaled to 0-5, two decimals
    pub stars: f64,
    /// Ratio as a percentage, one decimal
    pub percent_positive: f64,
}

/// A catalog movie paired with its current rating
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MovieRating {
    pub title: &'static str,
    #[serde(flatten)]
    pub summary: RatingSummary,
}
