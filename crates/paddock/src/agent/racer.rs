//! The racer persona: context, generator, and the simulated action surface.

use std::sync::Arc;

use super::actions::{Action, ActionSink, DEFAULT_COMMENTER, DEFAULT_LIKE_AUTHOR, SimulatedActions};
use super::context::AgentContext;
use super::events::{AgentEvent, EventHandler, NoopHandler};
use crate::generate::TextGenerator;
use crate::race::{RaceResult, Stage, parse_result, parse_stage};

/// Entity mentioned when the caller gives an empty one.
pub const DEFAULT_MENTION_ENTITY: &str = "team";

/// Base message for a mention when the caller gives none.
pub const DEFAULT_MENTION_MESSAGE: &str = "Great job by {mention}!";

/// A racer that posts, replies, mentions and likes.
///
/// State changes are synchronous and never fail: unparseable input leaves the
/// context untouched and is reported as a rejection event. Text generation is
/// async because model backends make network calls.
///
/// # Example
///
/// ```ignore
/// let mut racer = Racer::new(Box::new(TemplateGenerator::with_seed(7)))
///     .with_event_handler(Arc::new(LoggingHandler));
///
/// racer.update_stage("race");
/// racer.record_result("p1");
/// let post = racer.post().await;
/// ```
pub struct Racer {
    context: AgentContext,
    generator: Box<dyn TextGenerator>,
    actions: Box<dyn ActionSink>,
    events: Arc<dyn EventHandler>,
}

impl Racer {
    /// Default identity, simulated actions, no event handler.
    pub fn new(generator: Box<dyn TextGenerator>) -> Self {
        Self {
            context: AgentContext::default(),
            generator,
            actions: Box::new(SimulatedActions),
            events: Arc::new(NoopHandler),
        }
    }

    pub fn with_context(mut self, context: AgentContext) -> Self {
        self.context = context;
        self
    }

    pub fn with_actions(mut self, actions: impl ActionSink + 'static) -> Self {
        self.actions = Box::new(actions);
        self
    }

    pub fn with_event_handler(mut self, events: Arc<dyn EventHandler>) -> Self {
        self.events = events;
        self
    }

    pub fn context(&self) -> &AgentContext {
        &self.context
    }

    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    // ── State transitions ──

    /// Parse `input` as a stage and switch to it.
    ///
    /// Returns the new stage, or `None` (state unchanged) when the input is
    /// not a recognised stage.
    pub fn update_stage(&mut self, input: &str) -> Option<Stage> {
        match parse_stage(input) {
            Some(stage) => {
                self.set_stage(stage);
                Some(stage)
            }
            None => {
                self.events
                    .on_event(&AgentEvent::StageRejected { input: input.trim() });
                None
            }
        }
    }

    pub fn set_stage(&mut self, stage: Stage) {
        let from = self.context.stage;
        self.context.stage = stage;
        self.events
            .on_event(&AgentEvent::StageChanged { from, to: stage });
    }

    /// Parse `input` as a result and record it.
    ///
    /// Returns the recorded result, or `None` (state unchanged) when the input
    /// is not a recognised result.
    pub fn record_result(&mut self, input: &str) -> Option<RaceResult> {
        match parse_result(input) {
            Some(result) => {
                self.context.last_result = Some(result);
                self.events.on_event(&AgentEvent::ResultRecorded { result });
                Some(result)
            }
            None => {
                self.events
                    .on_event(&AgentEvent::ResultRejected { input: input.trim() });
                None
            }
        }
    }

    pub fn set_race_name(&mut self, name: &str) {
        self.context.race_name = name.trim().to_string();
        self.events.on_event(&AgentEvent::RaceNameChanged {
            name: &self.context.race_name,
        });
    }

    // ── Actions ──

    /// Generate and post a status update for the current context.
    pub async fn post(&self) -> String {
        let text = self.generator.generate_post(&self.context).await;
        self.actions.perform(&Action::Post { text: text.clone() });
        text
    }

    /// Generate and post a reply to a fan comment.
    pub async fn reply(&self, comment: &str) -> String {
        let text = self.generator.generate_reply(&self.context, comment).await;
        self.actions.perform(&Action::Reply {
            text: text.clone(),
            comment: comment.to_string(),
            commenter: DEFAULT_COMMENTER.to_string(),
        });
        text
    }

    /// Generate and post a shout-out to `entity` built around `message`.
    ///
    /// An empty entity becomes [`DEFAULT_MENTION_ENTITY`].
    pub async fn mention(&self, entity: &str, message: &str) -> String {
        let entity = match entity.trim() {
            "" => DEFAULT_MENTION_ENTITY,
            e => e,
        };
        let text = self
            .generator
            .generate_mention(&self.context, entity, message)
            .await;
        self.actions.perform(&Action::Mention {
            entity: entity.to_string(),
            text: text.clone(),
        });
        text
    }

    /// Like a post. The author defaults to [`DEFAULT_LIKE_AUTHOR`].
    pub fn like(&self, content: &str, author: Option<&str>) {
        self.actions.perform(&Action::Like {
            content: content.to_string(),
            author: author.unwrap_or(DEFAULT_LIKE_AUTHOR).to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::actions::RecordingActions;
    use crate::agent::events::EventObserver;
    use crate::generate::TemplateGenerator;
    use std::sync::Mutex;

    fn racer() -> (Racer, Arc<RecordingActions>, Arc<Mutex<Vec<String>>>) {
        let actions = Arc::new(RecordingActions::new());
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        let observer = EventObserver::new(move |e| sink.lock().unwrap().push(format!("{e:?}")));
        let racer = Racer::new(Box::new(TemplateGenerator::with_seed(11)))
            .with_actions(actions.clone())
            .with_event_handler(Arc::new(observer));
        (racer, actions, log)
    }

    #[test]
    fn bad_stage_leaves_state_and_reports() {
        let (mut racer, _, log) = racer();
        racer.update_stage("q2");
        let before = racer.context().clone();

        assert_eq!(racer.update_stage("banana"), None);
        assert_eq!(racer.context(), &before);
        let log = log.lock().unwrap();
        assert!(log.last().unwrap().starts_with("StageRejected"));
    }

    #[test]
    fn bad_result_leaves_state_and_reports() {
        let (mut racer, _, log) = racer();
        racer.record_result("p4");
        assert_eq!(racer.record_result("p99"), None);
        assert_eq!(racer.context().last_result, RaceResult::position(4));
        assert!(log.lock().unwrap().last().unwrap().starts_with("ResultRejected"));
    }

    #[test]
    fn transitions_are_unconditional() {
        let (mut racer, _, _) = racer();
        assert_eq!(racer.update_stage("race"), Some(Stage::Race));
        assert_eq!(racer.update_stage("fp1"), Some(Stage::Fp1));
        racer.record_result("dnf");
        racer.record_result("win");
        assert_eq!(racer.context().last_result, RaceResult::position(1));
        racer.set_race_name("  MonzaGP ");
        assert_eq!(racer.context().race_name, "MonzaGP");
    }

    #[tokio::test]
    async fn actions_reach_the_sink() {
        let (mut racer, actions, _) = racer();
        racer.update_stage("race");
        racer.record_result("p1");

        let post = racer.post().await;
        assert!(post.contains("#TeamMach 5"));
        let reply = racer.reply("Fantastic drive!").await;
        assert!(reply.starts_with("Go Mifune replies: "));
        let mention = racer.mention("", "Great job by {mention}!").await;
        assert!(mention.starts_with("Great job by @team!"));
        assert!(mention.ends_with("#TeamMach 5 #Winner"));
        racer.like("\"Well done team\"", None);

        let recorded = actions.actions();
        let kinds: Vec<_> = recorded.iter().map(Action::kind).collect();
        assert_eq!(kinds, ["post", "reply", "mention", "like"]);
        assert_eq!(
            recorded[3],
            Action::Like {
                content: "\"Well done team\"".into(),
                author: "Trixie".into(),
            }
        );
        assert_eq!(
            recorded[2],
            Action::Mention {
                entity: "team".into(),
                text: mention,
            }
        );
    }
}
