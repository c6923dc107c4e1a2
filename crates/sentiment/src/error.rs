use thiserror::Error;

/// Errors that can occur while training a sentiment model
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SentimentError {
    #[error("Training corpus is empty")]
    EmptyCorpus,

    #[error("Training corpus only contains {0} examples, need both classes")]
    SingleClass(&'static str),

    #[error("Expected {expected} labels but found {found}")]
    LabelCountMismatch { expected: usize, found: usize },

    #[error("Empty vocabulary: no document contains a usable token")]
    EmptyVocabulary,
}

pub type Result<T> = std::result::Result<T, SentimentError>;
