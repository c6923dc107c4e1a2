//! Multinomial naive Bayes over feature counts.
//!
//! ## Algorithm
//! Fit:
//! 1. `log_prior[c] = ln(docs_in_c / docs)`
//! 2. `log_prob[c][f] = ln((count[c][f] + alpha) / (total[c] + alpha * n_features))`
//!
//! Predict: the class maximizing `log_prior[c] + Σ x_f * log_prob[c][f]`.
//! Ties go to Negative.

use tracing::debug;

use crate::error::{Result, SentimentError};
use crate::label::Sentiment;
use crate::vectorizer::FeatureCounts;

/// Default additive (Laplace) smoothing
pub const DEFAULT_ALPHA: f64 = 1.0;

const N_CLASSES: usize = Sentiment::ALL.len();

#[derive(Debug, Clone)]
pub struct MultinomialNb {
    class_log_prior: [f64; N_CLASSES],
    feature_log_prob: [Vec<f64>; N_CLASSES],
}

impl MultinomialNb {
    /// Fit on one row per training document.
    pub fn fit(
        rows: &[FeatureCounts],
        labels: &[Sentiment],
        n_features: usize,
        alpha: f64,
    ) -> Result<Self> {
        if rows.is_empty() {
            return Err(SentimentError::EmptyCorpus);
        }
        if rows.len() != labels.len() {
            return Err(SentimentError::LabelCountMismatch {
                expected: rows.len(),
                found: labels.len(),
            });
        }

        let mut class_docs = [0usize; N_CLASSES];
        let mut feature_counts: [Vec<f64>; N_CLASSES] =
            std::array::from_fn(|_| vec![0.0; n_features]);

        for (row, &label) in rows.iter().zip(labels) {
            let class = label.class_index();
            class_docs[class] += 1;
            for (feature, count) in row.iter() {
                feature_counts[class][feature] += f64::from(count);
            }
        }

        for sentiment in Sentiment::ALL {
            if class_docs[sentiment.class_index()] == rows.len() {
                return Err(SentimentError::SingleClass(sentiment.name()));
            }
        }

        let n_docs = rows.len() as f64;
        let class_log_prior = class_docs.map(|docs| (docs as f64 / n_docs).ln());

        let feature_log_prob = feature_counts.map(|counts| {
            let denominator = counts.iter().sum::<f64>() + alpha * n_features as f64;
            counts
                .iter()
                .map(|&count| ((count + alpha) / denominator).ln())
                .collect::<Vec<f64>>()
        });

        debug!(
            "Fitted naive Bayes on {} documents, {} features, alpha {}",
            rows.len(),
            n_features,
            alpha
        );

        Ok(Self {
            class_log_prior,
            feature_log_prob,
        })
    }

    pub fn class_log_prior(&self) -> [f64; N_CLASSES] {
        self.class_log_prior
    }

    /// Unnormalized log posterior per class, indexed by class
    pub fn joint_log_likelihood(&self, row: &FeatureCounts) -> [f64; N_CLASSES] {
        std::array::from_fn(|class| {
            let log_prob = &self.feature_log_prob[class];
            row.iter().fold(self.class_log_prior[class], |acc, (feature, count)| {
                acc + f64::from(count) * log_prob[feature]
            })
        })
    }

    pub fn predict(&self, row: &FeatureCounts) -> Sentiment {
        let jll = self.joint_log_likelihood(row);
        if jll[Sentiment::Positive.class_index()] > jll[Sentiment::Negative.class_index()] {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }
}
