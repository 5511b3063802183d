//! Turning context into text without a language model.
//!
//! - [`selector`] derives a category key from (stage, result), picks a
//!   template, and renders it.
//! - [`sentiment`] buckets fan comments and mention messages so replies and
//!   mentions can match their tone.

pub mod selector;
pub mod sentiment;

pub use selector::{Selection, category_key, select_mention, select_post, select_reply};
pub use sentiment::{
    SentimentBucket, SentimentScorer, UnavailableScorer, VaderScorer, classify_sentiment,
};
