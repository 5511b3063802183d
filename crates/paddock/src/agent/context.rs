//! The racer's mutable situation: where in the weekend we are and how it went.

use crate::race::{RaceResult, Stage};
use crate::{DEFAULT_RACE_NAME, DEFAULT_RACER_NAME, DEFAULT_TEAM_NAME};

/// Shown in place of a result in qualifying posts when none is recorded.
pub const NO_RESULT_DETAIL: &str = "a good spot";

/// Everything a generator needs to know about the racer right now.
///
/// Only the latest values are kept. `stage` is always set; `last_result` stays
/// `None` until a result parses successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentContext {
    pub stage: Stage,
    pub last_result: Option<RaceResult>,
    pub racer_name: String,
    pub team_name: String,
    pub race_name: String,
}

impl Default for AgentContext {
    fn default() -> Self {
        Self::new(DEFAULT_RACER_NAME, DEFAULT_TEAM_NAME)
    }
}

impl AgentContext {
    pub fn new(racer_name: impl Into<String>, team_name: impl Into<String>) -> Self {
        Self {
            stage: Stage::default(),
            last_result: None,
            racer_name: racer_name.into(),
            team_name: team_name.into(),
            race_name: DEFAULT_RACE_NAME.to_string(),
        }
    }

    pub fn with_race_name(mut self, race_name: impl Into<String>) -> Self {
        self.race_name = race_name.into();
        self
    }

    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stage = stage;
        self
    }

    pub fn with_result(mut self, result: RaceResult) -> Self {
        self.last_result = Some(result);
        self
    }

    /// The recorded result's display string, or [`NO_RESULT_DETAIL`].
    pub fn result_detail(&self) -> String {
        self.last_result
            .map(RaceResult::display_name)
            .unwrap_or_else(|| NO_RESULT_DETAIL.to_string())
    }

    /// `true` once the Grand Prix itself has been won.
    pub fn is_race_win(&self) -> bool {
        self.stage == Stage::Race && self.last_result.is_some_and(RaceResult::is_win)
    }
}
