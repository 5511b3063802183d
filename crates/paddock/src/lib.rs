//! Social-media persona simulator for a Formula 1 racer.
//!
//! `paddock` tracks a small amount of race-weekend context (stage, last
//! result, racer/team identity, race name) and turns it into posts, fan
//! replies, and mentions. The core is deterministic classification and
//! template selection:
//!
//! - [`race`] — free text → [`Stage`](race::Stage) / [`RaceResult`](race::RaceResult).
//! - [`compose`] — (stage, result) → category key → template → rendered text,
//!   plus the sentiment gate for replies and mentions.
//! - [`templates`] — the static response catalog.
//! - [`generate`] — the [`TextGenerator`](generate::TextGenerator) strategies:
//!   templates, the hosted Gemini API, or a local model server.
//! - [`agent`] — the [`Racer`](agent::Racer) shell, the simulated action
//!   sink, and the event hook.
//! - [`command`] — the interactive line protocol.
//!
//! Nothing is ever published anywhere. Actions go to an
//! [`ActionSink`](agent::ActionSink), which by default only logs them.
//!
//! # Getting started
//!
//! ```
//! use std::sync::Arc;
//! use paddock::prelude::*;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let events: Arc<dyn EventHandler> = Arc::new(LoggingHandler);
//!     let generator = TemplateGenerator::with_seed(7).with_event_handler(events.clone());
//!
//!     let mut racer = Racer::new(Box::new(generator)).with_event_handler(events);
//!     racer.update_stage("race");
//!     racer.record_result("p1");
//!
//!     println!("{}", racer.post().await);
//!     println!("{}", racer.reply("Incredible drive!").await);
//!     println!("{}", racer.mention("crew", "Great job by {mention}!").await);
//! }
//! ```

pub mod agent;
pub mod command;
pub mod compose;
pub mod generate;
pub mod prelude;
pub mod race;
pub mod templates;

pub const DEFAULT_RACER_NAME: &str = "Go Mifune";
pub const DEFAULT_TEAM_NAME: &str = "Mach 5";
pub const DEFAULT_RACE_NAME: &str = "SilverstoneGP";
