//! Text generation strategies.
//!
//! Every backend implements [`TextGenerator`] and is chosen once at startup:
//!
//! - [`TemplateGenerator`] — canned templates plus the sentiment gate.
//! - [`ModelGenerator`] over a [`LanguageModel`]:
//!   - [`GeminiClient`] — the hosted Google Gemini API.
//!   - [`LocalModelClient`] — a model served over an Ollama-compatible
//!     `/api/generate` endpoint.
//!
//! Generation never fails from the caller's point of view. Model backends
//! turn provider errors into placeholder text (see
//! [`GenerateError::placeholder`]).

pub mod error;
pub mod gemini;
pub mod local;
pub mod model;
pub mod prompt;
pub mod template;

use std::future::Future;
use std::pin::Pin;

use crate::agent::context::AgentContext;

pub use error::GenerateError;
pub use gemini::GeminiClient;
pub use local::LocalModelClient;
pub use model::{GenerationParams, LanguageModel, ModelFuture, ModelGenerator, ParamsProfile};
pub use template::TemplateGenerator;

/// Boxed future returned by [`TextGenerator`] methods.
pub type GenerateFuture<'a> = Pin<Box<dyn Future<Output = String> + Send + 'a>>;

/// A source of posts, replies, and mentions.
///
/// Implementations must be `Send + Sync` so a single generator can be shared
/// behind a `Box<dyn TextGenerator>`.
///
/// # Example
///
/// ```ignore
/// struct Shouty;
///
/// impl TextGenerator for Shouty {
///     fn name(&self) -> &str { "shouty" }
///
///     fn generate_post<'a>(&'a self, ctx: &'a AgentContext) -> GenerateFuture<'a> {
///         Box::pin(async move { format!("{} IS IN {}!", ctx.racer_name, ctx.stage.name()) })
///     }
///     // ...
/// }
/// ```
pub trait TextGenerator: Send + Sync {
    /// Human-readable backend name, used in logs.
    fn name(&self) -> &str;

    fn generate_post<'a>(&'a self, ctx: &'a AgentContext) -> GenerateFuture<'a>;

    fn generate_reply<'a>(&'a self, ctx: &'a AgentContext, comment: &'a str)
    -> GenerateFuture<'a>;

    /// A post that mentions `entity`, built around `message`.
    fn generate_mention<'a>(
        &'a self,
        ctx: &'a AgentContext,
        entity: &'a str,
        message: &'a str,
    ) -> GenerateFuture<'a>;
}

impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn generate_post<'a>(&'a self, ctx: &'a AgentContext) -> GenerateFuture<'a> {
        (**self).generate_post(ctx)
    }

    fn generate_reply<'a>(
        &'a self,
        ctx: &'a AgentContext,
        comment: &'a str,
    ) -> GenerateFuture<'a> {
        (**self).generate_reply(ctx, comment)
    }

    fn generate_mention<'a>(
        &'a self,
        ctx: &'a AgentContext,
        entity: &'a str,
        message: &'a str,
    ) -> GenerateFuture<'a> {
        (**self).generate_mention(ctx, entity, message)
    }
}
