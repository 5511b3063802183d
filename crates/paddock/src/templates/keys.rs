//! Canonical category-key constants.
//!
//! Post keys for practice and qualifying are assembled at runtime from the
//! stage and the result outcome (see
//! [`category_key`](crate::compose::selector::category_key)); the fixed keys
//! live here so nothing else spells them out.

/// Fallback category. Always present in the catalog.
pub const PRACTICE_1: &str = "practice_1";

pub const PRACTICE_PREFIX: &str = "practice";
pub const QUALIFYING_PREFIX: &str = "qualifying";

pub const REPLY_POSITIVE: &str = "reply_positive";
pub const REPLY_NEGATIVE: &str = "reply_negative";
pub const REPLY_NEUTRAL: &str = "reply_neutral";

pub const MENTION_POSITIVE: &str = "mention_positive";
pub const MENTION_NEGATIVE: &str = "mention_negative";
pub const MENTION_NEUTRAL: &str = "mention_neutral";

/// Appended to mentions after a race win.
pub const MENTION_WINNER_TAG: &str = "mention_winner_tag";
