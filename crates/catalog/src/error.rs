//! Error types for the catalog crate.
//!
//! Everything that can go wrong while reading or writing the vote store
//! ends up in [`StoreError`]. Note that a corrupt store file is *not* an
//! error for callers of [`VoteStore::load`](crate::VoteStore::load): it is
//! logged and replaced with an empty ledger.

use thiserror::Error;

/// Errors that can occur while working with votes and the vote store
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error occurred while reading or writing the store file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The store contents could not be (de)serialized as JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A vote value other than 0 or 1
    #[error("Invalid vote value: {0} (expected 0 or 1)")]
    InvalidVote(u8),

    /// Title is not part of the movie catalog
    #[error("Unknown movie: {title}")]
    UnknownMovie { title: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StoreError>;
