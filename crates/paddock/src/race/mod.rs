//! Race-weekend vocabulary: stages, results, and their free-text classifiers.
//!
//! - [`Stage`] and [`parse_stage`] — practice, qualifying, and race sessions.
//! - [`RaceResult`] and [`parse_result`] — finishing positions, DNF, and the
//!   loose "podium" / "good result" buckets.
//!
//! Both classifiers return `None` rather than an error for input they do not
//! recognise. Callers decide whether that is worth a warning.

pub mod result;
pub mod stage;

pub use result::{Outcome, Position, RaceResult, parse_result};
pub use stage::{Stage, parse_stage};
