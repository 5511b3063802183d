//! Persona prompt builder for the model-backed generators.
//!
//! [`PersonaPrompt`] assembles the racer's persona and current situation
//! line by line, then closes with a task instruction chosen by scenario.

use crate::agent::context::AgentContext;
use crate::race::{RaceResult, Stage};

/// Builder for a persona prompt.
///
/// Lines are joined with single newlines. Empty lines (from `line_opt` with
/// `None`) are skipped. The task is separated from the persona by a blank
/// line.
///
/// ```
/// use paddock::agent::AgentContext;
/// use paddock::generate::prompt::PersonaPrompt;
///
/// let prompt = PersonaPrompt::for_context(&AgentContext::default())
///     .task("Say hi to the fans.");
///
/// assert!(prompt.starts_with("You are Go Mifune"));
/// assert!(prompt.contains("Current Stage: Free Practice 1."));
/// assert!(prompt.ends_with("Your Task: Say hi to the fans."));
/// ```
pub struct PersonaPrompt {
    lines: Vec<String>,
}

impl PersonaPrompt {
    /// Start from a bare preamble line.
    pub fn new(preamble: impl Into<String>) -> Self {
        Self {
            lines: vec![preamble.into()],
        }
    }

    /// Persona, race event, stage, and (if any) the most recent result.
    pub fn for_context(ctx: &AgentContext) -> Self {
        Self::new(format!(
            "You are {}, a charismatic and highly skilled Formula 1 racer for the {} team.",
            ctx.racer_name, ctx.team_name
        ))
        .line(
            "Your social media persona is engaging, passionate, and authentic. You often \
             share insights, express emotions clearly, and interact positively with fans.",
        )
        .line(format!("Current Race Event: {}.", ctx.race_name))
        .line(format!("Current Stage: {}.", ctx.stage.display_name()))
        .line_opt(
            ctx.last_result
                .map(|r| format!("Most Recent Result: {r}.")),
        )
    }

    /// Append a line. Skipped if empty.
    pub fn line(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.lines.push(text);
        }
        self
    }

    /// Append a line only if `text` is `Some`.
    pub fn line_opt(self, text: Option<impl Into<String>>) -> Self {
        match text {
            Some(t) => self.line(t),
            None => self,
        }
    }

    /// Finish the prompt with the task instruction.
    pub fn task(self, instruction: &str) -> String {
        format!("{}\n\nYour Task: {instruction}", self.lines.join("\n"))
    }
}

/// Instruction for a status update, tuned to the situation.
pub fn post_instruction(ctx: &AgentContext) -> String {
    match (ctx.stage, ctx.last_result) {
        (Stage::Race, Some(r)) if r.is_win() => format!(
            "Craft an ecstatic and thankful social media post celebrating your P1 victory. \
             Highlight the team's effort ({}) and the thrill of the win. Use F1-style hashtags.",
            ctx.team_name
        ),
        (Stage::Race, Some(RaceResult::Dnf)) => {
            "Compose a social media post reflecting disappointment about a DNF, but also \
             showing resilience and determination to bounce back. Include hashtags like \
             #NeverGiveUp."
                .to_string()
        }
        (stage, _) if stage.is_practice() => format!(
            "Write a focused social media post about the current {} session, mentioning car \
             feel or data gathering. Include relevant hashtags.",
            stage.display_name()
        ),
        _ => "Create a general social media update suitable for an F1 racer, reflecting the \
              current context. Include appropriate hashtags."
            .to_string(),
    }
}

/// Instruction for answering a fan.
pub fn reply_instruction(comment: &str) -> String {
    format!(
        "A fan, @trixie, commented: {comment}. Write a short, appreciative, and cool reply. \
         Keep it brief, friendly, and authentic. Acknowledge their sentiment if appropriate. \
         Do not dwell on negativity. Always use F1 enthusiasm and character."
    )
}

/// Instruction for a post that shouts out `entity`.
pub fn mention_instruction(entity: &str, message: &str) -> String {
    format!(
        "Create a social media post that incorporates this idea: '{message}'. Make sure to \
         prominently feature and praise '{entity}' using an @{entity} like on Twitter. Use \
         relevant F1-style hashtags. You can give them a shout out."
    )
}

pub fn post_prompt(ctx: &AgentContext) -> String {
    PersonaPrompt::for_context(ctx).task(&post_instruction(ctx))
}

pub fn reply_prompt(ctx: &AgentContext, comment: &str) -> String {
    PersonaPrompt::for_context(ctx).task(&reply_instruction(comment))
}

pub fn mention_prompt(ctx: &AgentContext, entity: &str, message: &str) -> String {
    PersonaPrompt::for_context(ctx).task(&mention_instruction(entity, message))
}
