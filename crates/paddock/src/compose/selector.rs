//! Category-key derivation and template selection.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::agent::context::AgentContext;
use crate::compose::sentiment::SentimentBucket;
use crate::race::{RaceResult, Stage};
use crate::templates::{TemplateTable, keys, render};

/// Derive the catalog key for a post from the stage and the last result.
///
/// Race-day posts use the bare outcome (`"win"`, `"dnf"`, ...). Practice and
/// qualifying posts use `"{kind}_{n}"` plus the outcome suffix when a result
/// is recorded. A race with no result falls back to [`keys::PRACTICE_1`].
pub fn category_key(stage: Stage, result: Option<RaceResult>) -> String {
    let suffix = result.map(|r| r.outcome().suffix()).unwrap_or("");

    match (stage, stage.session_number()) {
        (Stage::Race, _) => match suffix.strip_prefix('_') {
            Some(outcome) => outcome.to_string(),
            None => keys::PRACTICE_1.to_string(),
        },
        (_, Some(n)) if stage.is_qualifying() => {
            format!("{}_{n}{suffix}", keys::QUALIFYING_PREFIX)
        }
        (_, Some(n)) => format!("{}_{n}{suffix}", keys::PRACTICE_PREFIX),
        (_, None) => keys::PRACTICE_1.to_string(),
    }
}

/// A rendered template and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The key derived from the context.
    pub requested: String,
    /// The key that served the template. Differs from `requested` on fallback.
    pub resolved: &'static str,
    pub text: String,
}

/// Placeholder values for post templates.
pub fn post_placeholders(ctx: &AgentContext) -> Vec<(&'static str, String)> {
    vec![
        ("team_name", ctx.team_name.clone()),
        ("race_name", ctx.race_name.clone()),
        ("racer_name", ctx.racer_name.clone()),
        ("stage", ctx.stage.display_name().to_string()),
        ("stage_abbr", ctx.stage.abbreviation().to_string()),
        ("result_detail", ctx.result_detail()),
    ]
}

fn as_pairs<'a>(owned: &'a [(&'static str, String)]) -> Vec<(&'a str, &'a str)> {
    owned.iter().map(|(k, v)| (*k, v.as_str())).collect()
}

fn pick<R: Rng + ?Sized>(templates: &'static [&'static str], rng: &mut R) -> &'static str {
    templates.choose(rng).copied().unwrap_or_default()
}

/// Pick and render a status-update post for the current context.
pub fn select_post<R: Rng + ?Sized>(
    ctx: &AgentContext,
    table: &TemplateTable,
    rng: &mut R,
) -> Selection {
    let requested = category_key(ctx.stage, ctx.last_result);
    let lookup = table.lookup(&requested);
    let template = pick(lookup.templates, rng);
    let values = post_placeholders(ctx);

    Selection {
        requested,
        resolved: lookup.key,
        text: render(template, &as_pairs(&values)),
    }
}

/// Pick and render a fan reply for the given sentiment bucket.
///
/// The text is prefixed with `"{racer_name} replies: "`.
pub fn select_reply<R: Rng + ?Sized>(
    ctx: &AgentContext,
    bucket: SentimentBucket,
    table: &TemplateTable,
    rng: &mut R,
) -> Selection {
    let requested = bucket.reply_key();
    let lookup = table.lookup(requested);
    let template = pick(lookup.templates, rng);
    let values = post_placeholders(ctx);
    let body = render(template, &as_pairs(&values));

    Selection {
        requested: requested.to_string(),
        resolved: lookup.key,
        text: format!("{} replies: {body}", ctx.racer_name),
    }
}

/// Compose a post that mentions `entity`.
///
/// A `{mention}` token in `message` becomes `@entity`. After a Grand Prix win
/// the winner tag is appended.
pub fn select_mention<R: Rng + ?Sized>(
    ctx: &AgentContext,
    bucket: SentimentBucket,
    entity: &str,
    message: &str,
    table: &TemplateTable,
    rng: &mut R,
) -> Selection {
    let handle = format!("@{entity}");
    let message = render(message, &[("mention", handle.as_str())]);

    let requested = bucket.mention_key();
    let lookup = table.lookup(requested);
    let template = pick(lookup.templates, rng);
    let mut text = render(template, &[("message", message.as_str()), ("entity", entity)]);

    if ctx.is_race_win()
        && let Some(tag) = table.get(keys::MENTION_WINNER_TAG)
    {
        text.push_str(&render(pick(tag, rng), &[("team_name", ctx.team_name.as_str())]));
    }

    Selection {
        requested: requested.to_string(),
        resolved: lookup.key,
        text,
    }
}
