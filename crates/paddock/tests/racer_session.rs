//! End-to-end tests for a racer session.
//!
//! These drive a [`Racer`] through the public API only: stage and result
//! updates from free text, then posts, replies, mentions and likes through a
//! recording action sink.

use std::sync::{Arc, Mutex};

use paddock::agent::{
    Action, AgentContext, AgentEvent, EventHandler, EventObserver, Racer, RecordingActions,
};
use paddock::generate::{
    GenerateError, GenerationParams, LanguageModel, ModelFuture, ModelGenerator, ParamsProfile,
    TemplateGenerator,
};
use paddock::race::{RaceResult, Stage};

/// Collects a short description of every event.
#[derive(Clone, Default)]
struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    fn observer(&self) -> Arc<dyn EventHandler> {
        let log = self.0.clone();
        Arc::new(EventObserver::new(move |event: &AgentEvent<'_>| {
            let line = match event {
                AgentEvent::CategorySelected { resolved, .. } => format!("category {resolved}"),
                AgentEvent::StageRejected { input } => format!("stage rejected {input}"),
                AgentEvent::ResultRejected { input } => format!("result rejected {input}"),
                AgentEvent::GenerationFailed { provider, .. } => format!("failed {provider}"),
                other => format!("{other:?}"),
            };
            log.lock().unwrap().push(line);
        }))
    }

    fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    fn last_category(&self) -> Option<String> {
        self.entries()
            .into_iter()
            .rev()
            .find_map(|e| e.strip_prefix("category ").map(str::to_string))
    }
}

fn template_racer(seed: u64, log: &EventLog) -> (Racer, Arc<RecordingActions>) {
    let actions = Arc::new(RecordingActions::new());
    let generator = TemplateGenerator::with_seed(seed).with_event_handler(log.observer());
    let racer = Racer::new(Box::new(generator))
        .with_actions(actions.clone())
        .with_event_handler(log.observer());
    (racer, actions)
}

#[tokio::test]
async fn race_win_posts_from_the_win_category() {
    let log = EventLog::default();
    let (mut racer, actions) = template_racer(1, &log);

    racer.update_stage("Grand Prix");
    racer.record_result("P1");
    let post = racer.post().await;

    assert_eq!(log.last_category().as_deref(), Some("win"));
    assert!(post.contains("#TeamMach 5"), "{post}");
    assert!(post.contains("SilverstoneGP"), "{post}");
    assert_eq!(actions.actions(), vec![Action::Post { text: post }]);
}

#[tokio::test]
async fn qualifying_without_result_uses_a_good_spot() {
    let log = EventLog::default();
    let (mut racer, _) = template_racer(2, &log);

    racer.update_stage("Q2");
    let post = racer.post().await;

    assert_eq!(log.last_category().as_deref(), Some("qualifying_2"));
    assert!(post.contains("a good spot"), "{post}");
}

#[tokio::test]
async fn race_without_result_falls_back_to_practice() {
    let log = EventLog::default();
    let (mut racer, _) = template_racer(3, &log);

    racer.update_stage("race");
    racer.post().await;

    assert_eq!(log.last_category().as_deref(), Some("practice_1"));
}

#[test]
fn rejected_input_keeps_state() {
    let log = EventLog::default();
    let (mut racer, _) = template_racer(4, &log);
    racer.update_stage("fp3");
    racer.record_result("p7");
    let before = racer.context().clone();

    assert_eq!(racer.update_stage("banana"), None);
    assert_eq!(racer.record_result("p21"), None);

    assert_eq!(racer.context(), &before);
    let entries = log.entries();
    assert!(entries.contains(&"stage rejected banana".to_string()));
    assert!(entries.contains(&"result rejected p21".to_string()));
}

#[tokio::test]
async fn same_seed_same_session() {
    async fn session(seed: u64) -> Vec<String> {
        let (mut racer, _) = template_racer(seed, &EventLog::default());
        let mut out = Vec::new();
        for stage in ["fp1", "fp2", "q1", "q3", "race"] {
            racer.update_stage(stage);
            out.push(racer.post().await);
        }
        racer.record_result("dnf");
        out.push(racer.post().await);
        out.push(racer.reply("What a terrible, awful strategy").await);
        out.push(racer.mention("Sponsor", "Great race thanks to {mention}!").await);
        out
    }

    assert_eq!(session(42).await, session(42).await);
}

#[tokio::test]
async fn replies_and_mentions_carry_identity() {
    let log = EventLog::default();
    let (racer, _) = template_racer(5, &log);
    let racer = racer.with_context(
        AgentContext::new("Racer X", "Shooting Star")
            .with_stage(Stage::Race)
            .with_result(RaceResult::position(1).unwrap()),
    );

    let reply = racer.reply("Brilliant drive, so happy for you!").await;
    assert!(reply.starts_with("Racer X replies: "), "{reply}");
    assert_eq!(log.last_category().as_deref(), Some("reply_positive"));

    let mention = racer.mention("Pit Crew", "Great job by {mention}!").await;
    assert!(mention.starts_with("Great job by @Pit Crew!"), "{mention}");
    assert!(mention.ends_with(" #TeamShooting Star #Winner"), "{mention}");
}

#[tokio::test]
async fn mention_without_win_has_no_winner_tag() {
    let log = EventLog::default();
    let (mut racer, _) = template_racer(6, &log);
    racer.update_stage("race");
    racer.record_result("p4");

    let mention = racer.mention("crew", "Thanks {mention}").await;
    assert!(!mention.contains("#Winner"), "{mention}");
}

#[test]
fn likes_default_the_author() {
    let (racer, actions) = template_racer(7, &EventLog::default());
    racer.like("Great overtake", None);
    racer.like("Good fight", Some("Max"));

    assert_eq!(
        actions.actions(),
        vec![
            Action::Like {
                content: "Great overtake".into(),
                author: "Trixie".into(),
            },
            Action::Like {
                content: "Good fight".into(),
                author: "Max".into(),
            },
        ]
    );
}

/// A model that is always down.
struct Offline;

impl LanguageModel for Offline {
    fn provider(&self) -> &str {
        "Offline"
    }

    fn default_params(&self) -> ParamsProfile {
        ParamsProfile::HOSTED
    }

    fn complete<'a>(&'a self, _prompt: &'a str, _params: &'a GenerationParams) -> ModelFuture<'a> {
        Box::pin(async {
            Err::<String, _>(GenerateError::Status {
                status: 503,
                body: "unavailable".into(),
            })
        })
    }
}

#[tokio::test]
async fn failed_generation_posts_a_placeholder() {
    let log = EventLog::default();
    let actions = Arc::new(RecordingActions::new());
    let generator = ModelGenerator::new(Offline).with_event_handler(log.observer());
    let racer = Racer::new(Box::new(generator)).with_actions(actions.clone());

    let post = racer.post().await;

    assert_eq!(post, "An error occurred while trying to generate text with Offline.");
    assert!(log.entries().contains(&"failed Offline".to_string()));
    assert_eq!(racer.generator_name(), "Offline");
    assert_eq!(actions.actions().len(), 1);
}
