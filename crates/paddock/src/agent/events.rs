//! Events and handlers for the [`Racer`](super::racer::Racer).
//!
//! The racer and the generators report what they did through [`AgentEvent`]
//! variants: state transitions, rejected input, which template category was
//! used, how a comment was scored, and provider failures. Callers implement
//! [`EventHandler`] to observe these for logging, tests, or a UI.
//!
//! # Choosing an event handler
//!
//! | Handler | Use case |
//! |---------|----------|
//! | [`NoopHandler`] | Tests or fire-and-forget runs |
//! | [`LoggingHandler`] | Structured logging via `tracing` |
//! | [`EventObserver`] | Quick closures for simple callbacks |
//! | [`CompositeEventHandler`] | Compose multiple handlers in order |

use tracing::{debug, info, warn};

use crate::compose::SentimentBucket;
use crate::generate::GenerateError;
use crate::race::{RaceResult, Stage};

// ── Events ─────────────────────────────────────────────────────────

/// Events emitted while the racer updates state or generates text.
#[derive(Debug)]
pub enum AgentEvent<'a> {
    /// The stage changed (also fired when set to the same stage).
    StageChanged { from: Stage, to: Stage },
    /// Stage input did not parse. State is unchanged.
    StageRejected { input: &'a str },
    /// A result parsed and was stored.
    ResultRecorded { result: RaceResult },
    /// Result input did not parse. State is unchanged.
    ResultRejected { input: &'a str },
    RaceNameChanged { name: &'a str },
    /// A template category was chosen. `requested != resolved` on fallback.
    CategorySelected {
        requested: &'a str,
        resolved: &'a str,
    },
    /// A comment or mention message was scored.
    SentimentScored {
        text: &'a str,
        score: Option<f64>,
        bucket: SentimentBucket,
    },
    /// A generative backend failed; placeholder text was returned instead.
    GenerationFailed {
        provider: &'a str,
        error: &'a GenerateError,
    },
}

impl AgentEvent<'_> {
    /// `true` for events describing input the racer refused.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AgentEvent::StageRejected { .. } | AgentEvent::ResultRejected { .. }
        )
    }
}

/// Handler for agent events.
///
/// The default implementation ignores everything.
///
/// # Example
///
/// ```ignore
/// struct Warnings;
///
/// impl EventHandler for Warnings {
///     fn on_event(&self, event: &AgentEvent<'_>) {
///         if event.is_rejection() {
///             eprintln!("{event:?}");
///         }
///     }
/// }
/// ```
pub trait EventHandler: Send + Sync {
    fn on_event(&self, event: &AgentEvent<'_>) {
        let _ = event;
    }
}

/// A handler that does nothing.
pub struct NoopHandler;
impl EventHandler for NoopHandler {}

impl<T: EventHandler + ?Sized> EventHandler for std::sync::Arc<T> {
    fn on_event(&self, event: &AgentEvent<'_>) {
        (**self).on_event(event);
    }
}

/// An event handler that delegates to multiple inner handlers.
///
/// Events are dispatched to all handlers in registration order.
///
/// ```ignore
/// let handler = CompositeEventHandler::new()
///     .with(LoggingHandler)
///     .with(my_counter);
/// ```
pub struct CompositeEventHandler {
    handlers: Vec<Box<dyn EventHandler>>,
}

impl CompositeEventHandler {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Add a handler to the chain.
    pub fn with(mut self, handler: impl EventHandler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }
}

impl Default for CompositeEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for CompositeEventHandler {
    fn on_event(&self, event: &AgentEvent<'_>) {
        for handler in &self.handlers {
            handler.on_event(event);
        }
    }
}

/// Adapts an observing closure into an [`EventHandler`].
///
/// ```ignore
/// let handler = EventObserver::new(|event| {
///     if let AgentEvent::StageChanged { to, .. } = event {
///         println!("now in {to}");
///     }
/// });
/// ```
pub struct EventObserver<F>(F)
where
    F: Fn(&AgentEvent<'_>) + Send + Sync;

impl<F> EventObserver<F>
where
    F: Fn(&AgentEvent<'_>) + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> EventHandler for EventObserver<F>
where
    F: Fn(&AgentEvent<'_>) + Send + Sync,
{
    fn on_event(&self, event: &AgentEvent<'_>) {
        (self.0)(event);
    }
}

/// An event handler that logs events via `tracing`.
///
/// Rejected input is logged at `warn`, state changes at `info`, and the rest
/// at `debug`.
pub struct LoggingHandler;

impl EventHandler for LoggingHandler {
    fn on_event(&self, event: &AgentEvent<'_>) {
        match event {
            AgentEvent::StageChanged { from, to } => {
                info!("Stage changed: {} -> {}", from.name(), to.name());
            }
            AgentEvent::StageRejected { input } => {
                warn!(
                    "Invalid stage input: '{input}'. Please use formats like FP1, Q2, Race, \
                     Practice, Qualifying."
                );
            }
            AgentEvent::ResultRecorded { result } => {
                info!("Result recorded: {result}");
            }
            AgentEvent::ResultRejected { input } => {
                warn!("Could not parse result: '{input}'. Try P1..P20, DNF, podium, or win.");
            }
            AgentEvent::RaceNameChanged { name } => {
                info!("Current race name set to: {name}");
            }
            AgentEvent::CategorySelected {
                requested,
                resolved,
            } => {
                if requested == resolved {
                    debug!("Using template category {resolved}");
                } else {
                    debug!("No templates for {requested}, falling back to {resolved}");
                }
            }
            AgentEvent::SentimentScored {
                text,
                score,
                bucket,
            } => {
                let preview: String = text.chars().take(80).collect();
                match score {
                    Some(s) => debug!("Sentiment {s:.3} ({bucket}) for '{preview}'"),
                    None => debug!("Sentiment unavailable, treating '{preview}' as {bucket}"),
                }
            }
            AgentEvent::GenerationFailed { provider, error } => {
                warn!("{provider} generation failed: {error}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn composite_dispatches_to_every_handler_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let a = seen.clone();
        let b = seen.clone();
        let handler = CompositeEventHandler::new()
            .with(EventObserver::new(move |_| a.lock().unwrap().push("a")))
            .with(NoopHandler)
            .with(EventObserver::new(move |_| b.lock().unwrap().push("b")));

        handler.on_event(&AgentEvent::RaceNameChanged { name: "MonzaGP" });
        assert_eq!(*seen.lock().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn rejection_events_are_flagged() {
        assert!(AgentEvent::StageRejected { input: "banana" }.is_rejection());
        assert!(AgentEvent::ResultRejected { input: "p99" }.is_rejection());
        assert!(
            !AgentEvent::StageChanged {
                from: Stage::Fp1,
                to: Stage::Q1
            }
            .is_rejection()
        );
    }

    #[test]
    fn logging_handler_accepts_every_variant() {
        let err = GenerateError::EmptyCandidate;
        let events = [
            AgentEvent::StageChanged {
                from: Stage::Fp1,
                to: Stage::Race,
            },
            AgentEvent::StageRejected { input: "banana" },
            AgentEvent::ResultRecorded {
                result: RaceResult::Dnf,
            },
            AgentEvent::ResultRejected { input: "meh" },
            AgentEvent::RaceNameChanged { name: "MonzaGP" },
            AgentEvent::CategorySelected {
                requested: "x",
                resolved: "practice_1",
            },
            AgentEvent::SentimentScored {
                text: "nice",
                score: None,
                bucket: SentimentBucket::Neutral,
            },
            AgentEvent::GenerationFailed {
                provider: "Gemini",
                error: &err,
            },
        ];
        for event in &events {
            LoggingHandler.on_event(event);
        }
    }
}
