//! # Catalog Crate
//!
//! The fixed movie catalog and everything about the votes recorded for it.
//!
//! ## Main Components
//!
//! - **movies**: the five catalog movies and their suggested reviews
//! - **types**: `Vote`, `Movie`, `VoteLedger`, `RatingSummary`
//! - **store**: JSON file persistence for the ledger
//! - **summary**: rating statistics derived from vote lists
//! - **error**: error types for store access
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{find_movie, summarize, Vote, VoteStore};
//!
//! let store = VoteStore::new("votes.json");
//! let movie = find_movie("Titanic").unwrap();
//!
//! let ledger = store.record_vote(movie.title, Vote::Positive)?;
//! for rating in summarize(&ledger) {
//!     println!("{}: {} stars", rating.title, rating.summary.stars);
//! }
//! ```

// Public modules
pub mod error;
pub mod movies;
pub mod store;
pub mod summary;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{Result, StoreError};
pub use movies::{find_movie, movies};
pub use store::VoteStore;
pub use summary::summarize;
pub use types::{Movie, MovieRating, RatingSummary, Vote, VoteLedger};
