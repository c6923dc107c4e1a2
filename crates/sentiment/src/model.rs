//! The trained sentiment model: vectorizer + naive Bayes.

use tracing::info;

use crate::corpus::{LabeledText, TRAINING_CORPUS};
use crate::error::{Result, SentimentError};
use crate::label::Sentiment;
use crate::naive_bayes::{DEFAULT_ALPHA, MultinomialNb};
use crate::traits::Classifier;
use crate::vectorizer::CountVectorizer;

/// A classifier fit once and never retrained.
#[derive(Debug, Clone)]
pub struct SentimentModel {
    vectorizer: CountVectorizer,
    classifier: MultinomialNb,
}

impl SentimentModel {
    /// Fit on the built-in corpus
    pub fn train_default() -> Result<Self> {
        Self::train(TRAINING_CORPUS)
    }

    /// Fit on an arbitrary labeled corpus.
    ///
    /// Fails if the corpus is empty, has no usable tokens, or covers only
    /// one class.
    pub fn train(corpus: &[LabeledText]) -> Result<Self> {
        if corpus.is_empty() {
            return Err(SentimentError::EmptyCorpus);
        }

        let texts: Vec<&str> = corpus.iter().map(|example| example.text).collect();
        let labels: Vec<Sentiment> = corpus.iter().map(|example| example.label).collect();

        let vectorizer = CountVectorizer::fit(&texts)?;
        let rows = vectorizer.transform_many(&texts);
        let classifier =
            MultinomialNb::fit(&rows, &labels, vectorizer.n_features(), DEFAULT_ALPHA)?;

        info!(
            "Trained sentiment model on {} examples ({} features)",
            corpus.len(),
            vectorizer.n_features()
        );

        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    pub fn predict(&self, text: &str) -> Sentiment {
        let row = self.vectorizer.transform(text);
        self.classifier.predict(&row)
    }

    /// Classify a batch; vectorization runs in parallel
    pub fn predict_many(&self, texts: &[&str]) -> Vec<Sentiment> {
        self.vectorizer
            .transform_many(texts)
            .iter()
            .map(|row| self.classifier.predict(row))
            .collect()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.n_features()
    }
}

impl Classifier for SentimentModel {
    fn name(&self) -> &str {
        "multinomial-naive-bayes"
    }

    fn classify(&self, text: &str) -> Sentiment {
        self.predict(text)
    }
}
