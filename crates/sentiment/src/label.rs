//! The binary sentiment label.

use std::fmt;

use catalog::Vote;

/// Output class of the classifier.
///
/// Discriminants are the class indices used by the model: classes are
/// ordered Negative then Positive, and ties go to the lower index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sentiment {
    Negative = 0,
    Positive = 1,
}

impl Sentiment {
    pub const ALL: [Sentiment; 2] = [Sentiment::Negative, Sentiment::Positive];

    pub fn class_index(self) -> usize {
        self as usize
    }

    /// Human-facing label shown next to a prediction
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive 😀",
            Sentiment::Negative => "Negative 😡",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Sentiment> for Vote {
    fn from(sentiment: Sentiment) -> Self {
        match sentiment {
            Sentiment::Positive => Vote::Positive,
            Sentiment::Negative => Vote::Negative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_conversion() {
        assert_eq!(Vote::from(Sentiment::Positive), Vote::Positive);
        assert_eq!(Vote::from(Sentiment::Negative), Vote::Negative);
        assert_eq!(u8::from(Vote::from(Sentiment::Positive)), 1);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Sentiment::Positive.to_string(), "Positive 😀");
        assert_eq!(Sentiment::Negative.to_string(), "Negative 😡");
        assert_eq!(Sentiment::ALL[Sentiment::Positive.class_index()], Sentiment::Positive);
    }
}
