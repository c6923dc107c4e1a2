//! Bag-of-words feature extraction.
//!
//! Text is lowercased and split into tokens of two or more word characters.
//! Features are the tokens themselves plus every pair of adjacent tokens
//! joined by a space. The vocabulary is fixed at fit time; anything unseen
//! later is ignored.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;

use crate::error::{Result, SentimentError};

static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is a valid regex"));

/// Lowercase `text` and extract its word tokens
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Unigram and bigram features of `text`, unigrams first
pub fn analyze(text: &str) -> Vec<String> {
    let tokens = tokenize(text);
    let bigrams: Vec<String> = tokens.windows(2).map(|pair| pair.join(" ")).collect();

    let mut features = tokens;
    features.extend(bigrams);
    features
}

/// Sparse feature counts for one document, sorted by feature index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureCounts {
    entries: Vec<(usize, u32)>,
}

impl FeatureCounts {
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn get(&self, index: usize) -> u32 {
        self.entries
            .binary_search_by_key(&index, |&(i, _)| i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// Total number of in-vocabulary feature occurrences
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|&(_, c)| c).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Maps text to feature counts over a vocabulary learned from a corpus
#[derive(Debug, Clone)]
pub struct CountVectorizer {
    vocabulary: HashMap<String, usize>,
}

impl CountVectorizer {
    /// Learn the vocabulary from `documents`.
    ///
    /// Feature indices follow the sorted order of the feature strings.
    pub fn fit(documents: &[&str]) -> Result<Self> {
        let features: BTreeSet<String> = documents.iter().flat_map(|doc| analyze(doc)).collect();
        if features.is_empty() {
            return Err(SentimentError::EmptyVocabulary);
        }

        let vocabulary = features
            .into_iter()
            .enumerate()
            .map(|(index, feature)| (feature, index))
            .collect();

        Ok(Self { vocabulary })
    }

    pub fn n_features(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn feature_index(&self, feature: &str) -> Option<usize> {
        self.vocabulary.get(feature).copied()
    }

    /// Count in-vocabulary features of one document
    pub fn transform(&self, text: &str) -> FeatureCounts {
        let mut counts: BTreeMap<usize, u32> = BTreeMap::new();
        for feature in analyze(text) {
            if let Some(&index) = self.vocabulary.get(&feature) {
                *counts.entry(index).or_insert(0) += 1;
            }
        }
        FeatureCounts {
            entries: counts.into_iter().collect(),
        }
    }

    /// Vectorize a batch of documents in parallel, preserving order
    pub fn transform_many(&self, texts: &[&str]) -> Vec<FeatureCounts> {
        texts.par_iter().map(|text| self.transform(text)).collect()
    }
}
