//! Core trait for review classification.
//!
//! The server only ever talks to a `dyn Classifier`, so the trained model can
//! be swapped for a fixed stub in tests.

use crate::label::Sentiment;

/// Anything that can turn free text into a sentiment label.
///
/// ## Design Note
/// - `Send + Sync` lets one trained instance be shared across request tasks
/// - Classification is infallible: unknown words simply carry no signal
pub trait Classifier: Send + Sync {
    /// Returns the name of this classifier (for logging/debugging)
    fn name(&self) -> &str;

    /// Classify a single piece of text
    fn classify(&self, text: &str) -> Sentiment;
}
