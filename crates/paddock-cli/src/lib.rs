//! Interactive terminal for the `paddock` racer persona.
//!
//! The binary reads one command per line, drives a
//! [`Racer`](paddock::agent::Racer), and prints what it posts. The pieces are
//! exposed for reuse and testing:
//!
//! - [`config::Cli`] — flags, environment fallbacks, generator construction.
//! - [`logging::init_tracing`] — subscriber setup.
//! - [`repl`] — prompt rendering, command dispatch, and the input loop.
//!
//! ```sh
//! # Template backend with a fixed seed
//! paddock --seed 7
//!
//! # Gemini (reads GOOGLE_API_KEY from the environment or .env)
//! paddock --text-generator gemini
//! ```

pub mod config;
pub mod logging;
pub mod repl;

pub use config::{BackendKind, Cli, LogFormat};
pub use logging::init_tracing;
pub use repl::{Exit, Flow, dispatch, handle_line, prompt_line, run, run_session, state_report};
