//! # Review Orchestrator
//!
//! Coordinates the work behind every page:
//! 1. Resolve the review text from the submitted form
//! 2. Classify it
//! 3. Append the resulting vote to the store
//! 4. Recompute the rating summary from the stored votes
//!
//! Store I/O runs on the blocking pool and is serialized through an async
//! mutex, so two requests in this process never interleave a
//! read-modify-write of the vote file. Other processes writing the same file
//! are not coordinated with.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, info};

use catalog::{summarize, Movie, MovieRating, RatingSummary, Vote, VoteLedger, VoteStore};
use sentiment::{Classifier, Sentiment};

/// Shown when a review is submitted without any text
pub const MISSING_REVIEW_MESSAGE: &str = "Please select or type a review.";

/// Form fields posted from a movie page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewForm {
    pub custom_review: Option<String>,
    pub suggestion: Option<String>,
}

impl ReviewForm {
    /// The trimmed custom review if it has any text, otherwise the picked
    /// suggestion if non-empty.
    pub fn review_text(&self) -> Option<&str> {
        let custom = self.custom_review.as_deref().map(str::trim).unwrap_or_default();
        if !custom.is_empty() {
            return Some(custom);
        }
        self.suggestion.as_deref().filter(|s| !s.is_empty())
    }
}

/// Everything a movie page displays
#[derive(Debug, Clone)]
pub struct MoviePage {
    pub movie: &'static Movie,
    pub rating: RatingSummary,
    pub message: Option<String>,
    pub prediction: Option<Sentiment>,
}

impl MoviePage {
    fn new(movie: &'static Movie, ledger: &VoteLedger) -> Self {
        Self {
            movie,
            rating: RatingSummary::from_votes(ledger.votes_for(movie.title)),
            message: None,
            prediction: None,
        }
    }
}

/// Main orchestrator shared by all request handlers
pub struct ReviewOrchestrator {
    classifier: Arc<dyn Classifier>,
    store: Arc<VoteStore>,
    store_lock: Mutex<()>,
}

impl ReviewOrchestrator {
    pub fn new(classifier: Arc<dyn Classifier>, store: VoteStore) -> Self {
        Self {
            classifier,
            store: Arc::new(store),
            store_lock: Mutex::new(()),
        }
    }

    pub fn store_path(&self) -> &Path {
        self.store.path()
    }

    /// Load the store once so a missing file gets created up front
    pub async fn prepare_store(&self) -> Result<()> {
        let ledger = self.load_ledger().await?;
        info!(
            "Vote store {} ready with {} votes",
            self.store_path().display(),
            ledger.total_votes()
        );
        Ok(())
    }

    /// Ratings for every catalog movie
    pub async fn listing(&self) -> Result<Vec<MovieRating>> {
        let ledger = self.load_ledger().await?;
        Ok(summarize(&ledger))
    }

    /// Current rating for one movie, no submission
    pub async fn movie_page(&self, movie: &'static Movie) -> Result<MoviePage> {
        let ledger = self.load_ledger().await?;
        Ok(MoviePage::new(movie, &ledger))
    }

    /// Classify a submitted review and record it as a vote.
    ///
    /// A form without review text records nothing and carries
    /// [`MISSING_REVIEW_MESSAGE`] instead.
    pub async fn submit_review(
        &self,
        movie: &'static Movie,
        form: &ReviewForm,
    ) -> Result<MoviePage> {
        let Some(text) = form.review_text() else {
            debug!("Empty review submitted for {}", movie.title);
            let mut page = self.movie_page(movie).await?;
            page.message = Some(MISSING_REVIEW_MESSAGE.to_string());
            return Ok(page);
        };

        let sentiment = self.classifier.classify(text);
        info!(
            "Classified review for {} as {} ({})",
            movie.title,
            sentiment.name(),
            self.classifier.name()
        );

        let title = movie.title;
        let ledger = self
            .with_store(move |store| store.record_vote(title, Vote::from(sentiment)))
            .await
            .with_context(|| format!("Failed to record vote for {title}"))?;

        let mut page = MoviePage::new(movie, &ledger);
        page.message = Some(format!("Model prediction: {}", sentiment.label()));
        page.prediction = Some(sentiment);
        Ok(page)
    }

    async fn load_ledger(&self) -> Result<VoteLedger> {
        self.with_store(|store| store.load())
            .await
            .context("Failed to load vote store")
    }

    /// Run a store operation on the blocking pool while holding the store lock
    async fn with_store<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&VoteStore) -> catalog::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let _guard = self.store_lock.lock().await;
        let store = Arc::clone(&self.store);
        let result = tokio::task::spawn_blocking(move || op(&store))
            .await
            .context("Vote store task panicked")?;
        Ok(result?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::find_movie;
    use std::sync::Mutex as StdMutex;
    use tempfile::TempDir;

    // ============================================================================
    // Test Fixtures
    // ============================================================================

    /// Returns the same label for everything and remembers what it saw
    struct FixedClassifier {
        label: Sentiment,
        seen: StdMutex<Vec<String>>,
    }

    impl FixedClassifier {
        fn new(label: Sentiment) -> Arc<Self> {
            Arc::new(Self {
                label,
                seen: StdMutex::new(Vec::new()),
            })
        }

        fn seen(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl Classifier for FixedClassifier {
        fn name(&self) -> &str {
            "fixed"
        }

        fn classify(&self, text: &str) -> Sentiment {
            self.seen.lock().unwrap().push(text.to_string());
            self.label
        }
    }

    fn build_orchestrator(classifier: Arc<FixedClassifier>) -> (TempDir, ReviewOrchestrator) {
        let dir = TempDir::new().unwrap();
        let store = VoteStore::new(dir.path().join("votes.json"));
        (dir, ReviewOrchestrator::new(classifier, store))
    }

    fn form(custom: Option<&str>, suggestion: Option<&str>) -> ReviewForm {
        ReviewForm {
            custom_review: custom.map(str::to_string),
            suggestion: suggestion.map(str::to_string),
        }
    }

    fn titanic() -> &'static Movie {
        find_movie("Titanic").unwrap()
    }

    // ============================================================================
    // Unit Tests: review_text
    // ============================================================================

    #[test]
    fn test_review_text_prefers_trimmed_custom() {
        let f = form(Some("  Loved it  "), Some("Too sentimental"));
        assert_eq!(f.review_text(), Some("Loved it"));
    }

    #[test]
    fn test_review_text_falls_back_to_suggestion() {
        assert_eq!(
            form(Some("   "), Some("Great performances")).review_text(),
            Some("Great performances")
        );
        assert_eq!(
            form(None, Some("Great performances")).review_text(),
            Some("Great performances")
        );
    }

    #[test]
    fn test_review_text_missing() {
        assert_eq!(form(None, None).review_text(), None);
        assert_eq!(form(Some(""), Some("")).review_text(), None);
        assert_eq!(form(Some(" \n\t "), None).review_text(), None);
    }

    // ============================================================================
    // Unit Tests: submit_review
    // ============================================================================

    #[tokio::test]
    async fn test_empty_review_records_nothing() {
        let classifier = FixedClassifier::new(Sentiment::Positive);
        let (_dir, orchestrator) = build_orchestrator(classifier.clone());

        let page = orchestrator
            .submit_review(titanic(), &form(Some("  "), None))
            .await
            .unwrap();

        assert_eq!(page.message.as_deref(), Some(MISSING_REVIEW_MESSAGE));
        assert_eq!(page.prediction, None);
        assert_eq!(page.rating.votes, 0);
        assert!(classifier.seen().is_empty(), "classifier should not run");

        let listing = orchestrator.listing().await.unwrap();
        assert!(listing.iter().all(|r| r.summary.votes == 0));
    }

    #[tokio::test]
    async fn test_review_is_classified_and_recorded() {
        let classifier = FixedClassifier::new(Sentiment::Positive);
        let (_dir, orchestrator) = build_orchestrator(classifier.clone());

        let page = orchestrator
            .submit_review(titanic(), &form(Some("A timeless love story"), None))
            .await
            .unwrap();

        assert_eq!(page.prediction, Some(Sentiment::Positive));
        assert_eq!(page.message.as_deref(), Some("Model prediction: Positive 😀"));
        assert_eq!(page.rating.votes, 1);
        assert_eq!(page.rating.stars, 5.0);
        assert_eq!(classifier.seen(), vec!["A timeless love story".to_string()]);
    }

    #[tokio::test]
    async fn test_vote_only_changes_one_movie() {
        let classifier = FixedClassifier::new(Sentiment::Negative);
        let (_dir, orchestrator) = build_orchestrator(classifier);
        let before = orchestrator.listing().await.unwrap();

        orchestrator
            .submit_review(titanic(), &form(None, Some("Too sentimental")))
            .await
            .unwrap();

        let after = orchestrator.listing().await.unwrap();
        for (b, a) in before.iter().zip(&after) {
            let expected = if a.title == "Titanic" { b.summary.votes + 1 } else { b.summary.votes };
            assert_eq!(a.summary.votes, expected, "unexpected count for {}", a.title);
        }
        let titanic_rating = after.iter().find(|r| r.title == "Titanic").unwrap();
        assert_eq!(titanic_rating.summary.stars, 0.0);
    }

    #[tokio::test]
    async fn test_concurrent_submissions_are_all_recorded() {
        let classifier = FixedClassifier::new(Sentiment::Positive);
        let (_dir, orchestrator) = build_orchestrator(classifier);
        let orchestrator = Arc::new(orchestrator);

        let mut handles = vec![];
        for i in 0..20 {
            let orchestrator = orchestrator.clone();
            handles.push(tokio::spawn(async move {
                let review = form(Some(&format!("review {i}")), None);
                orchestrator.submit_review(titanic(), &review).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let page = orchestrator.movie_page(titanic()).await.unwrap();
        assert_eq!(page.rating.votes, 20);
    }

    #[tokio::test]
    async fn test_prepare_store_creates_file() {
        let classifier = FixedClassifier::new(Sentiment::Positive);
        let (_dir, orchestrator) = build_orchestrator(classifier);
        assert!(!orchestrator.store_path().exists());

        orchestrator.prepare_store().await.unwrap();

        assert!(orchestrator.store_path().exists());
    }
}
