//! Template-backed generator.

use std::sync::{Arc, Mutex, PoisonError};

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{GenerateFuture, TextGenerator};
use crate::agent::context::AgentContext;
use crate::agent::events::{AgentEvent, EventHandler, NoopHandler};
use crate::compose::{
    Selection, SentimentBucket, SentimentScorer, VaderScorer, select_mention, select_post,
    select_reply,
};
use crate::templates::TemplateTable;

/// Picks canned templates at random and fills in the context.
///
/// Replies and mentions are routed through a [`SentimentScorer`] first. With
/// a fixed seed the sequence of outputs is reproducible.
pub struct TemplateGenerator {
    table: &'static TemplateTable,
    rng: Mutex<StdRng>,
    scorer: Box<dyn SentimentScorer>,
    events: Arc<dyn EventHandler>,
}

impl Default for TemplateGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateGenerator {
    /// Built-in catalog, VADER scorer, entropy-seeded randomness.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Like [`new`](Self::new) but reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            table: TemplateTable::builtin(),
            rng: Mutex::new(rng),
            scorer: Box::new(VaderScorer),
            events: Arc::new(NoopHandler),
        }
    }

    pub fn with_scorer(mut self, scorer: impl SentimentScorer + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    pub fn with_event_handler(mut self, events: Arc<dyn EventHandler>) -> Self {
        self.events = events;
        self
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }

    fn bucket(&self, text: &str) -> SentimentBucket {
        let score = self.scorer.compound(text);
        let bucket = SentimentBucket::from_score(score);
        self.events.on_event(&AgentEvent::SentimentScored {
            text,
            score,
            bucket,
        });
        bucket
    }

    fn report(&self, selection: Selection) -> String {
        self.events.on_event(&AgentEvent::CategorySelected {
            requested: &selection.requested,
            resolved: selection.resolved,
        });
        selection.text
    }

    /// Synchronous form of [`TextGenerator::generate_post`].
    pub fn post_text(&self, ctx: &AgentContext) -> String {
        let selection = self.with_rng(|rng| select_post(ctx, self.table, rng));
        self.report(selection)
    }

    /// Synchronous form of [`TextGenerator::generate_reply`].
    pub fn reply_text(&self, ctx: &AgentContext, comment: &str) -> String {
        let bucket = self.bucket(comment);
        let selection = self.with_rng(|rng| select_reply(ctx, bucket, self.table, rng));
        self.report(selection)
    }

    /// Synchronous form of [`TextGenerator::generate_mention`].
    pub fn mention_text(&self, ctx: &AgentContext, entity: &str, message: &str) -> String {
        let bucket = self.bucket(message);
        let selection =
            self.with_rng(|rng| select_mention(ctx, bucket, entity, message, self.table, rng));
        self.report(selection)
    }
}

impl TextGenerator for TemplateGenerator {
    fn name(&self) -> &str {
        "template"
    }

    fn generate_post<'a>(&'a self, ctx: &'a AgentContext) -> GenerateFuture<'a> {
        Box::pin(std::future::ready(self.post_text(ctx)))
    }

    fn generate_reply<'a>(
        &'a self,
        ctx: &'a AgentContext,
        comment: &'a str,
    ) -> GenerateFuture<'a> {
        Box::pin(std::future::ready(self.reply_text(ctx, comment)))
    }

    fn generate_mention<'a>(
        &'a self,
        ctx: &'a AgentContext,
        entity: &'a str,
        message: &'a str,
    ) -> GenerateFuture<'a> {
        Box::pin(std::future::ready(self.mention_text(ctx, entity, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::events::EventObserver;
    use crate::compose::selector::post_placeholders;
    use crate::compose::{UnavailableScorer, category_key};
    use crate::race::{RaceResult, Stage};
    use crate::templates::render;

    #[test]
    fn seeded_generators_agree() {
        let ctx = AgentContext::default().with_stage(Stage::Q3).with_result(RaceResult::Top5);
        let a = TemplateGenerator::with_seed(99);
        let b = TemplateGenerator::with_seed(99);
        let first: Vec<_> = (0..10).map(|_| a.post_text(&ctx)).collect();
        let second: Vec<_> = (0..10).map(|_| b.post_text(&ctx)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn unseeded_posts_come_from_the_resolved_category() {
        let generator = TemplateGenerator::new();
        let table = TemplateTable::builtin();
        let results = [
            None,
            RaceResult::position(1),
            RaceResult::position(3),
            RaceResult::position(12),
            Some(RaceResult::Dnf),
            Some(RaceResult::Top3),
            Some(RaceResult::Top5),
        ];

        for stage in Stage::ALL {
            for result in results {
                let mut ctx = AgentContext::default().with_stage(stage);
                ctx.last_result = result;

                let lookup = table.lookup(&category_key(stage, result));
                let values = post_placeholders(&ctx);
                let values: Vec<(&str, &str)> =
                    values.iter().map(|(k, v)| (*k, v.as_str())).collect();
                let candidates: Vec<String> =
                    lookup.templates.iter().map(|t| render(t, &values)).collect();

                for _ in 0..8 {
                    let post = generator.post_text(&ctx);
                    assert!(!post.is_empty(), "{stage:?} {result:?}");
                    assert!(
                        candidates.contains(&post),
                        "{stage:?} {result:?} from {}: {post}",
                        lookup.key
                    );
                }
            }
        }
    }

    #[test]
    fn positive_comment_gets_positive_reply() {
        let generator = TemplateGenerator::with_seed(1);
        let ctx = AgentContext::default();
        let reply = generator.reply_text(&ctx, "Amazing drive, love it!");
        let positives = TemplateTable::builtin().get("reply_positive").unwrap();
        let body = reply.strip_prefix("Go Mifune replies: ").unwrap();
        let values = [("team_name", "Mach 5"), ("race_name", "SilverstoneGP")];
        assert!(
            positives
                .iter()
                .any(|t| render(t, &values) == body),
            "{reply}"
        );
    }

    #[test]
    fn unavailable_scorer_means_neutral_replies() {
        let generator = TemplateGenerator::with_seed(1).with_scorer(UnavailableScorer);
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let generator = generator.with_event_handler(Arc::new(EventObserver::new(move |e| {
            if let AgentEvent::CategorySelected { resolved, .. } = e {
                sink.lock().unwrap().push(resolved.to_string());
            }
        })));
        generator.reply_text(&AgentContext::default(), "Amazing drive, love it!");
        assert_eq!(*events.lock().unwrap(), ["reply_neutral"]);
    }

    #[test]
    fn mention_reports_sentiment() {
        let scored = Arc::new(Mutex::new(None));
        let sink = scored.clone();
        let observer = EventObserver::new(move |e| {
            if let AgentEvent::SentimentScored { bucket, .. } = e {
                *sink.lock().unwrap() = Some(*bucket);
            }
        });
        let generator = TemplateGenerator::with_seed(5).with_event_handler(Arc::new(observer));
        let text = generator.mention_text(&AgentContext::default(), "crew", "What a terrible day");
        assert_eq!(text, "What a terrible day But still a huge shoutout to @crew!");
        assert_eq!(*scored.lock().unwrap(), Some(SentimentBucket::Negative));
    }

    #[tokio::test]
    async fn async_interface_matches_sync_output() {
        let ctx = AgentContext::default().with_stage(Stage::Race).with_result(RaceResult::Dnf);
        let a = TemplateGenerator::with_seed(3);
        let b = TemplateGenerator::with_seed(3);
        assert_eq!(a.generate_post(&ctx).await, b.post_text(&ctx));
    }
}
