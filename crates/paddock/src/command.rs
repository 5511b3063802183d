//! The interactive line protocol.
//!
//! One command per line: a case-insensitive command word followed by an
//! optional argument string. [`parse_command`] turns a line into a
//! [`Command`]; driving the [`Racer`](crate::agent::Racer) is left to the
//! caller.

use thiserror::Error;

use crate::agent::racer::DEFAULT_MENTION_MESSAGE;

pub const HELP: &str = "\
Available commands:
  help                          - Show this help message.
  quit / q                      - Exit the interactive mode.
  state                         - Show current agent state and race name.
  stage <new_stage>             - Update agent's current race stage (Example: FP1, Q2, Race).
  result <new_result>           - Record agent's last race result (Example: P1, P5, DNF).
  racename <new_race_name>      - Set the current race name (Example: MonzaGP).
  post                          - Agent generates and 'posts' a status update based on current context.
  reply <fan_comment_text>      - Agent generates a 'reply' to the given fan comment.
  mention <entity> [message]    - Agent 'posts' mentioning an entity. Message is optional (defaults to 'Great job by {mention}!').
                                  Example: mention MyMechanic
                                  Example: mention Sponsor Great race thanks to {mention}!
  like <post_content> [author]  - Agent 'likes' a post. Author is optional (defaults to 'Trixie').
                                  Example: like \"Well done team\"
                                  Example: like \"Good fight\" Max
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    State,
    Stage(String),
    Result(String),
    RaceName(String),
    Post,
    Reply(String),
    Mention { entity: String, message: String },
    Like {
        content: String,
        author: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}. Type 'help' for available commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    MissingArgument(&'static str),
}

/// Parse one input line.
///
/// Returns `None` for blank lines.
pub fn parse_command(line: &str) -> Option<Result<Command, CommandError>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, args) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let word = word.to_lowercase();

    let required = |usage: &'static str| {
        if args.is_empty() {
            Err(CommandError::MissingArgument(usage))
        } else {
            Ok(args.to_string())
        }
    };

    Some(match word.as_str() {
        "help" => Ok(Command::Help),
        "quit" | "q" => Ok(Command::Quit),
        "state" => Ok(Command::State),
        "post" => Ok(Command::Post),
        "stage" => required("stage <new_stage>").map(Command::Stage),
        "result" => required("result <new_result>").map(Command::Result),
        "racename" => required("racename <new_race_name>").map(Command::RaceName),
        "reply" => required("reply <fan_comment_text>").map(Command::Reply),
        "mention" => {
            required("mention <entity_to_mention> [base_message]").map(|args| parse_mention(&args))
        }
        "like" => required("like <post_content> [author]").map(|args| parse_like(&args)),
        _ => Err(CommandError::Unknown(word)),
    })
}

fn parse_mention(args: &str) -> Command {
    let (entity, message) = match args.split_once(char::is_whitespace) {
        Some((entity, rest)) if !rest.trim().is_empty() => (entity, rest.trim()),
        Some((entity, _)) => (entity, DEFAULT_MENTION_MESSAGE),
        None => (args, DEFAULT_MENTION_MESSAGE),
    };
    Command::Mention {
        entity: entity.to_string(),
        message: message.to_string(),
    }
}

/// `"quoted content" author` or bare content.
fn parse_like(args: &str) -> Command {
    let quoted = args
        .strip_prefix('"')
        .and_then(|rest| rest.split_once('"'));

    let (content, author) = match quoted {
        Some((content, rest)) => {
            let author = rest.trim();
            (content, (!author.is_empty()).then(|| author.to_string()))
        }
        None => (args, None),
    };
    Command::Like {
        content: content.to_string(),
        author,
    }
}
