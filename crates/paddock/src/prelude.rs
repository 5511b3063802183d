//! Convenience re-exports for common `paddock` types.
//!
//! ```ignore
//! use paddock::prelude::*;
//! ```
//!
//! Pulls in the racer, its context, the generators, event handlers, and the
//! classifiers. Wire-level types (Gemini and local request bodies, prompt
//! builders) stay in their modules.

// ── Race vocabulary ─────────────────────────────────────────────────
pub use crate::race::{RaceResult, Stage, parse_result, parse_stage};

// ── Agent shell ─────────────────────────────────────────────────────
pub use crate::agent::{
    Action, ActionSink, AgentContext, AgentEvent, CompositeEventHandler, EventHandler,
    EventObserver, LoggingHandler, NoopHandler, Racer, SimulatedActions,
};

// ── Generation ──────────────────────────────────────────────────────
pub use crate::compose::{SentimentBucket, SentimentScorer, classify_sentiment};
pub use crate::generate::{
    GeminiClient, GenerateError, LocalModelClient, ModelGenerator, TemplateGenerator,
    TextGenerator,
};

// ── Commands ────────────────────────────────────────────────────────
pub use crate::command::{Command, CommandError, parse_command};
