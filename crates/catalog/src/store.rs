//! File-backed vote store.
//!
//! The whole ledger lives in one pretty-printed JSON object:
//!
//! ```json
//! {
//!   "Inception": [1, 0, 1],
//!   "Titanic": []
//! }
//! ```
//!
//! Every mutation rewrites the file in full. There is no locking here;
//! callers that share a store across tasks serialize access themselves.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Result, StoreError};
use crate::movies::find_movie;
use crate::types::{Vote, VoteLedger};

/// Reads and rewrites the vote ledger at a fixed path
#[derive(Debug, Clone)]
pub struct VoteStore {
    path: PathBuf,
}

impl VoteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger.
    ///
    /// - Missing file: written with an empty list per catalog movie.
    /// - Unreadable or malformed file: replaced by an empty catalog ledger
    ///   in memory only; the file on disk is left alone.
    /// - Catalog movies absent from the file get an empty list in memory.
    pub fn load(&self) -> Result<VoteLedger> {
        if !self.path.exists() {
            let ledger = VoteLedger::with_catalog();
            self.save(&ledger)?;
            info!("Created vote store at {}", self.path.display());
            return Ok(ledger);
        }

        let mut ledger = match self.read_ledger() {
            Ok(ledger) => ledger,
            Err(e) => {
                warn!(
                    "Discarding unreadable vote store {}: {}",
                    self.path.display(),
                    e
                );
                VoteLedger::with_catalog()
            }
        };
        ledger.ensure_catalog();

        debug!(
            "Loaded {} votes from {}",
            ledger.total_votes(),
            self.path.display()
        );
        Ok(ledger)
    }

    /// Replace the store contents with `ledger`.
    ///
    /// Written to a sibling `.tmp` file first and renamed into place.
    pub fn save(&self, ledger: &VoteLedger) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(ledger)?;
        let tmp = self.temp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Append one vote for a catalog movie and persist the ledger.
    ///
    /// Returns the ledger as written.
    pub fn record_vote(&self, title: &str, vote: Vote) -> Result<VoteLedger> {
        if find_movie(title).is_none() {
            return Err(StoreError::UnknownMovie {
                title: title.to_string(),
            });
        }

        let mut ledger = self.load()?;
        let count = ledger.record(title, vote);
        self.save(&ledger)?;

        info!("Recorded {:?} vote for {} ({} total)", vote, title, count);
        Ok(ledger)
    }

    fn read_ledger(&self) -> Result<VoteLedger> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name: OsString = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
