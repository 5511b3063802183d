//! The simulated social-media surface.
//!
//! Nothing here talks to a real platform. [`SimulatedActions`] records each
//! action in the log so a session can be replayed from its trace output.

use tracing::{debug, info};

/// Default author of liked posts when none is given.
pub const DEFAULT_LIKE_AUTHOR: &str = "Trixie";

/// Default commenter a reply is addressed to.
pub const DEFAULT_COMMENTER: &str = "Trixie";

/// An outward-facing action the racer took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Post {
        text: String,
    },
    Reply {
        text: String,
        comment: String,
        commenter: String,
    },
    Like {
        content: String,
        author: String,
    },
    Mention {
        entity: String,
        text: String,
    },
}

impl Action {
    /// Short lowercase label, e.g. `"reply"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Post { .. } => "post",
            Action::Reply { .. } => "reply",
            Action::Like { .. } => "like",
            Action::Mention { .. } => "mention",
        }
    }
}

/// Receives finished actions.
pub trait ActionSink: Send + Sync {
    fn perform(&self, action: &Action);
}

/// Logs every action and publishes nothing.
///
/// Posts, replies and mentions are logged at `debug`; likes at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedActions;

impl ActionSink for SimulatedActions {
    fn perform(&self, action: &Action) {
        match action {
            Action::Post { text } => {
                debug!("Action: Posting new status update");
                debug!("Agent Post: \"{text}\"");
            }
            Action::Reply {
                text,
                comment,
                commenter,
            } => {
                debug!("Action: Replying to {commenter}'s comment ('{comment}')");
                debug!("Agent Reply: \"{text}\"");
            }
            Action::Like { content, author } => {
                info!("Action: Liking post from {author}: {content}");
            }
            Action::Mention { entity, text } => {
                debug!("Action: Mentioning {entity} in a post");
                debug!("Agent Post with Mention: \"{text}\"");
            }
        }
    }
}

/// Keeps every action in memory. Useful in tests and for replaying a session.
#[derive(Debug, Default)]
pub struct RecordingActions {
    actions: std::sync::Mutex<Vec<Action>>,
}

impl RecordingActions {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of everything performed so far, oldest first.
    pub fn actions(&self) -> Vec<Action> {
        self.actions
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl ActionSink for RecordingActions {
    fn perform(&self, action: &Action) {
        let mut actions = self
            .actions
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        actions.push(action.clone());
    }
}

impl<T: ActionSink + ?Sized> ActionSink for std::sync::Arc<T> {
    fn perform(&self, action: &Action) {
        (**self).perform(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_keeps_order() {
        let sink = RecordingActions::new();
        sink.perform(&Action::Post { text: "one".into() });
        sink.perform(&Action::Like {
            content: "two".into(),
            author: DEFAULT_LIKE_AUTHOR.into(),
        });
        let kinds: Vec<_> = sink.actions().iter().map(Action::kind).collect();
        assert_eq!(kinds, ["post", "like"]);
    }

    #[test]
    fn simulated_sink_accepts_everything() {
        let sink = SimulatedActions;
        sink.perform(&Action::Reply {
            text: "thanks".into(),
            comment: "go go".into(),
            commenter: DEFAULT_COMMENTER.into(),
        });
        sink.perform(&Action::Mention {
            entity: "crew".into(),
            text: "Shoutout to @crew!".into(),
        });
    }
}
