//! Sentiment gate for replies and mentions.
//!
//! A [`SentimentScorer`] turns text into a compound score in `[-1, 1]`, or
//! nothing when no scorer is available. [`SentimentBucket::from_score`] maps
//! that onto the three reply/mention categories.

use vader_sentiment::SentimentIntensityAnalyzer;

use crate::templates::keys;

/// Scores at or beyond this magnitude count as positive or negative.
pub const BUCKET_THRESHOLD: f64 = 0.05;

/// Anything that can rate how positive a piece of text sounds.
pub trait SentimentScorer: Send + Sync {
    /// Compound score in `[-1, 1]`, or `None` if scoring is unavailable.
    fn compound(&self, text: &str) -> Option<f64>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SentimentBucket {
    Positive,
    Negative,
    Neutral,
}

impl SentimentBucket {
    /// `>= 0.05` positive, `<= -0.05` negative, anything else (including an
    /// unavailable score) neutral.
    pub fn from_score(score: Option<f64>) -> Self {
        match score {
            Some(s) if s >= BUCKET_THRESHOLD => SentimentBucket::Positive,
            Some(s) if s <= -BUCKET_THRESHOLD => SentimentBucket::Negative,
            _ => SentimentBucket::Neutral,
        }
    }

    pub fn reply_key(self) -> &'static str {
        match self {
            SentimentBucket::Positive => keys::REPLY_POSITIVE,
            SentimentBucket::Negative => keys::REPLY_NEGATIVE,
            SentimentBucket::Neutral => keys::REPLY_NEUTRAL,
        }
    }

    pub fn mention_key(self) -> &'static str {
        match self {
            SentimentBucket::Positive => keys::MENTION_POSITIVE,
            SentimentBucket::Negative => keys::MENTION_NEGATIVE,
            SentimentBucket::Neutral => keys::MENTION_NEUTRAL,
        }
    }
}

impl std::fmt::Display for SentimentBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SentimentBucket::Positive => "positive",
            SentimentBucket::Negative => "negative",
            SentimentBucket::Neutral => "neutral",
        })
    }
}

/// Score `text` with the built-in [`VaderScorer`].
pub fn classify_sentiment(text: &str) -> Option<f64> {
    VaderScorer.compound(text)
}

/// A scorer that is never available. Every text lands in the neutral bucket.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableScorer;

impl SentimentScorer for UnavailableScorer {
    fn compound(&self, _text: &str) -> Option<f64> {
        None
    }
}

/// VADER compound score from the `vader_sentiment` lexicon and rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderScorer;

impl SentimentScorer for VaderScorer {
    fn compound(&self, text: &str) -> Option<f64> {
        SentimentIntensityAnalyzer::new()
            .polarity_scores(text)
            .get("compound")
            .copied()
    }
}
