//! Review sentiment classification.
//!
//! This crate provides:
//! - `Classifier` trait, the seam the web layer depends on
//! - `CountVectorizer` for unigram + bigram bag-of-words features
//! - `MultinomialNb`, a two-class multinomial naive Bayes
//! - `SentimentModel`, both of the above fit on the built-in corpus
//!
//! ## Architecture
//! Text goes through two stages:
//! 1. The vectorizer turns it into sparse feature counts
//! 2. Naive Bayes picks the more likely class
//!
//! ## Example Usage
//! ```ignore
//! use sentiment::{Classifier, SentimentModel};
//!
//! let model = SentimentModel::train_default()?;
//! let label = model.classify("Absolutely loved it!");
//! println!("{}", label); // Positive 😀
//! ```

pub mod corpus;
pub mod error;
pub mod label;
pub mod model;
pub mod naive_bayes;
pub mod traits;
pub mod vectorizer;

// Re-export main types
pub use corpus::{LabeledText, TRAINING_CORPUS};
pub use error::{Result, SentimentError};
pub use label::Sentiment;
pub use model::SentimentModel;
pub use naive_bayes::MultinomialNb;
pub use traits::Classifier;
pub use vectorizer::{CountVectorizer, FeatureCounts};
