//! Command-line configuration.
//!
//! [`Cli`] captures every startup setting and converts it into library types
//! via [`build_generator`](Cli::build_generator) and
//! [`initial_context`](Cli::initial_context). Values can come from flags,
//! the environment, or a `.env` file loaded before parsing.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use paddock::agent::{AgentContext, EventHandler};
use paddock::generate::gemini::DEFAULT_GEMINI_MODEL;
use paddock::generate::local::{DEFAULT_LOCAL_MODEL, DEFAULT_LOCAL_URL};
use paddock::generate::{
    GeminiClient, GenerateError, LocalModelClient, ModelGenerator, TemplateGenerator,
    TextGenerator,
};
use paddock::{DEFAULT_RACE_NAME, DEFAULT_RACER_NAME, DEFAULT_TEAM_NAME};

/// Which text generator backs the racer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendKind {
    /// Static templates with sentiment-gated replies.
    Basic,
    /// Google Gemini over HTTP. Needs `GOOGLE_API_KEY`.
    Gemini,
    /// A local model server speaking the Ollama generate API.
    #[value(alias = "transformer")]
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Simulated social-media persona for a Formula 1 racer.
#[derive(Debug, Parser)]
#[command(name = "paddock", version)]
pub struct Cli {
    /// Text generator used for posts, replies and mentions.
    #[arg(long, value_enum, default_value_t = BackendKind::Basic)]
    pub text_generator: BackendKind,

    /// Model served by the local backend.
    #[arg(long, default_value = DEFAULT_LOCAL_MODEL)]
    pub model_name: String,

    /// Gemini model identifier.
    #[arg(long, default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    /// Base URL of the local model server.
    #[arg(long, env = "PADDOCK_LOCAL_URL", default_value = DEFAULT_LOCAL_URL)]
    pub local_url: String,

    /// API key for the Gemini backend.
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub google_api_key: Option<String>,

    #[arg(long, default_value = DEFAULT_RACER_NAME)]
    pub racer_name: String,

    #[arg(long, default_value = DEFAULT_TEAM_NAME)]
    pub team_name: String,

    /// Race the session starts in. Change it later with `racename`.
    #[arg(long, default_value = DEFAULT_RACE_NAME)]
    pub race_name: String,

    /// Seed for template selection. Random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// File of log filter directives, one per line. Overrides `--log-level`.
    #[arg(long, env = "PADDOCK_LOG_CONFIG")]
    pub log_config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Build the configured text generator.
    ///
    /// Fails only when a model backend cannot be constructed: a missing
    /// Gemini key or an HTTP client that will not build.
    pub fn build_generator(
        &self,
        events: Arc<dyn EventHandler>,
    ) -> Result<Box<dyn TextGenerator>, GenerateError> {
        Ok(match self.text_generator {
            BackendKind::Basic => {
                let generator = match self.seed {
                    Some(seed) => TemplateGenerator::with_seed(seed),
                    None => TemplateGenerator::new(),
                };
                Box::new(generator.with_event_handler(events))
            }
            BackendKind::Gemini => {
                let key = self.google_api_key.clone().unwrap_or_default();
                let client = GeminiClient::new(key)?.with_model(self.gemini_model.as_str());
                Box::new(ModelGenerator::new(client).with_event_handler(events))
            }
            BackendKind::Local => {
                let client =
                    LocalModelClient::new(self.local_url.as_str(), self.model_name.as_str())?;
                Box::new(ModelGenerator::new(client).with_event_handler(events))
            }
        })
    }

    /// Starting context: identity and race name from flags, stage `FP1`, no result.
    pub fn initial_context(&self) -> AgentContext {
        AgentContext::new(self.racer_name.trim(), self.team_name.trim())
            .with_race_name(self.race_name.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paddock::agent::NoopHandler;
    use paddock::race::Stage;

    fn parse(args: &[&str]) -> Cli {
        let mut cli = Cli::try_parse_from(std::iter::once("paddock").chain(args.iter().copied()))
            .unwrap();
        // The host environment may carry a real key.
        cli.google_api_key = None;
        cli
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.text_generator, BackendKind::Basic);
        assert_eq!(cli.racer_name, "Go Mifune");
        assert_eq!(cli.team_name, "Mach 5");
        assert_eq!(cli.race_name, "SilverstoneGP");
        assert_eq!(cli.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(cli.model_name, DEFAULT_LOCAL_MODEL);
        assert_eq!(cli.log_level, "info");
        assert_eq!(cli.log_format, LogFormat::Text);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn log_config_path() {
        let cli = parse(&["--log-config", "logger.conf", "--log-format", "json"]);
        assert_eq!(cli.log_config, Some(PathBuf::from("logger.conf")));
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn backend_names() {
        assert_eq!(parse(&["--text-generator", "gemini"]).text_generator, BackendKind::Gemini);
        assert_eq!(parse(&["--text-generator", "local"]).text_generator, BackendKind::Local);
        assert_eq!(
            parse(&["--text-generator", "transformer"]).text_generator,
            BackendKind::Local
        );
        assert!(Cli::try_parse_from(["paddock", "--text-generator", "gpt"]).is_err());
    }

    #[test]
    fn initial_context_uses_flags() {
        let cli = parse(&["--racer-name", "Racer X", "--team-name", "Shooting Star", "--race-name", "MonzaGP"]);
        let ctx = cli.initial_context();
        assert_eq!(ctx.racer_name, "Racer X");
        assert_eq!(ctx.team_name, "Shooting Star");
        assert_eq!(ctx.race_name, "MonzaGP");
        assert_eq!(ctx.stage, Stage::Fp1);
        assert_eq!(ctx.last_result, None);
    }

    #[test]
    fn basic_backend_builds() {
        let cli = parse(&["--seed", "3"]);
        let generator = cli.build_generator(Arc::new(NoopHandler)).unwrap();
        assert_eq!(generator.name(), "template");
    }

    #[test]
    fn gemini_without_key_is_an_error() {
        let cli = parse(&["--text-generator", "gemini"]);
        let err = cli.build_generator(Arc::new(NoopHandler)).err().unwrap();
        assert!(matches!(err, GenerateError::MissingCredential { .. }));
    }
}
