//! Agent shell: the [`Racer`] and its supporting modules.
//!
//! - [`racer::Racer`] — owns the context and the chosen generator. Start here.
//! - [`context::AgentContext`] — stage, last result, and identity.
//! - [`events`] — [`EventHandler`] trait and [`AgentEvent`] enum for
//!   observing state changes and generation. Includes [`LoggingHandler`],
//!   [`CompositeEventHandler`], and [`EventObserver`].
//! - [`actions`] — [`ActionSink`] for the simulated social-media surface.

pub mod actions;
pub mod context;
pub mod events;
pub mod racer;

pub use actions::{Action, ActionSink, RecordingActions, SimulatedActions};
pub use context::AgentContext;
pub use events::{
    AgentEvent, CompositeEventHandler, EventHandler, EventObserver, LoggingHandler, NoopHandler,
};
pub use racer::Racer;
