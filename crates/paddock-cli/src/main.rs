//! Simulated social-media persona for a Formula 1 racer.
//!
//! # Examples
//!
//! ```sh
//! paddock --racer-name "Racer X" --race-name MonzaGP
//! paddock --text-generator local --model-name llama3.2:1b
//! paddock --log-config logger.conf --log-format json
//! ```

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use paddock::agent::{EventHandler, LoggingHandler, Racer};
use paddock::templates::catalog::CATALOG_VERSION;
use paddock_cli::{Cli, init_tracing, repl};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_config.as_deref(), cli.log_format)
        .context("failed to install the log subscriber")?;

    let events: Arc<dyn EventHandler> = Arc::new(LoggingHandler);

    let generator = cli
        .build_generator(events.clone())
        .context("failed to set up the text generator")?;
    info!(
        generator = generator.name(),
        seed = ?cli.seed,
        catalog_version = CATALOG_VERSION,
        "text generator ready"
    );

    let racer = Racer::new(generator)
        .with_context(cli.initial_context())
        .with_event_handler(events);

    repl::run(racer).await
}
