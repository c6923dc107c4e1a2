//! Built-in labeled training corpus.

use crate::label::Sentiment::{self, Negative, Positive};

/// One training example
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledText {
    pub text: &'static str,
    pub label: Sentiment,
}

const fn example(text: &'static str, label: Sentiment) -> LabeledText {
    LabeledText { text, label }
}

/// Neutral reviews are labeled Negative.
pub static TRAINING_CORPUS: &[LabeledText] = &[
    example("I love this movie, it’s fantastic!", Positive),
    example("This was the worst film I’ve ever seen.", Negative),
    example("Absolutely amazing experience, highly recommend!", Positive),
    example("Terrible acting and boring storyline.", Negative),
    example("Best movie of the year!", Positive),
    example("I hated it so much.", Negative),
    example("It was okay, not great but not bad.", Negative),
    example("I enjoyed the film, very entertaining.", Positive),
    example("Waste of time, completely disappointing.", Negative),
    example("Such a wonderful and heartwarming story!", Positive),
    example("Not good, very boring", Negative),
    example("Absolutely loved it!", Positive),
    example("Could have been better", Negative),
];
