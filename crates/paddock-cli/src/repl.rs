//! The interactive loop.
//!
//! [`run`] reads stdin line by line until `quit`, EOF or Ctrl-C; the loop
//! itself is [`run_session`], generic over input, output and the interrupt
//! signal. Each line goes through [`handle_line`], which parses it and hands
//! the command to [`dispatch`]. Output meant for the user is written to the
//! supplied writer; warnings and state changes go through `tracing`.

use std::future::Future;
use std::io::{self, Write};

use paddock::agent::{AgentContext, Racer};
use paddock::command::{Command, HELP, parse_command};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The input prompt, e.g. `(Q2, Res: P5, Race: MonzaGP) > `.
pub fn prompt_line(ctx: &AgentContext) -> String {
    let result = ctx
        .last_result
        .map(|r| r.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    format!(
        "({}, Res: {result}, Race: {}) > ",
        ctx.stage.name(),
        ctx.race_name
    )
}

/// Multi-line summary printed by the `state` command.
pub fn state_report(ctx: &AgentContext) -> String {
    let result = ctx
        .last_result
        .map(|r| r.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    format!(
        "  Current Stage: {} ({})\n  Last Result:   {result}\n  Racer Name:    {}\n  Team Name:     {}\n  Current Race:  {}\n",
        ctx.stage.display_name(),
        ctx.stage.name(),
        ctx.racer_name,
        ctx.team_name,
        ctx.race_name,
    )
}

/// Execute one parsed command against the racer.
pub async fn dispatch<W: Write>(
    racer: &mut Racer,
    command: Command,
    out: &mut W,
) -> io::Result<Flow> {
    match command {
        Command::Help => out.write_all(HELP.as_bytes())?,
        Command::Quit => {
            info!("Exiting interactive mode.");
            return Ok(Flow::Quit);
        }
        Command::State => out.write_all(state_report(racer.context()).as_bytes())?,
        Command::Stage(input) => {
            racer.update_stage(&input);
        }
        Command::Result(input) => {
            racer.record_result(&input);
        }
        Command::RaceName(name) => racer.set_race_name(&name),
        Command::Post => {
            let text = racer.post().await;
            writeln!(out, "Agent posted: {text}")?;
        }
        Command::Reply(comment) => {
            let text = racer.reply(&comment).await;
            writeln!(out, "Agent replied: {text}")?;
        }
        Command::Mention { entity, message } => {
            let text = racer.mention(&entity, &message).await;
            writeln!(out, "Agent posted with mention: {text}")?;
        }
        Command::Like { content, author } => racer.like(&content, author.as_deref()),
    }
    Ok(Flow::Continue)
}

/// Parse and execute one input line. Blank lines and bad commands continue
/// the loop; the latter are logged as warnings.
pub async fn handle_line<W: Write>(racer: &mut Racer, line: &str, out: &mut W) -> io::Result<Flow> {
    match parse_command(line) {
        None => Ok(Flow::Continue),
        Some(Err(e)) => {
            warn!("{e}");
            Ok(Flow::Continue)
        }
        Some(Ok(command)) => dispatch(racer, command, out).await,
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Quit,
    EndOfInput,
    Interrupted,
}

/// Drive `racer` from `input` until `quit`, end of input, or `interrupt`
/// completes.
///
/// `interrupt` is raced against both reading a line and executing it, so a
/// long generation call is abandoned as soon as it fires.
pub async fn run_session<R, W, F>(
    racer: &mut Racer,
    input: R,
    out: &mut W,
    interrupt: F,
) -> io::Result<Exit>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    F: Future,
{
    let mut lines = input.lines();
    tokio::pin!(interrupt);

    loop {
        write!(out, "{}", prompt_line(racer.context()))?;
        out.flush()?;

        let line = tokio::select! {
            line = lines.next_line() => Some(line?),
            _ = &mut interrupt => None,
        };
        let line = match line {
            Some(Some(line)) => line,
            Some(None) => {
                writeln!(out)?;
                info!("Exiting interactive mode (EOF).");
                return Ok(Exit::EndOfInput);
            }
            None => return interrupted(out),
        };

        let flow = tokio::select! {
            flow = handle_line(racer, &line, out) => Some(flow),
            _ = &mut interrupt => None,
        };
        match flow {
            Some(flow) => {
                if flow? == Flow::Quit {
                    return Ok(Exit::Quit);
                }
            }
            None => return interrupted(out),
        }
    }
}

fn interrupted<W: Write>(out: &mut W) -> io::Result<Exit> {
    writeln!(out)?;
    info!("Exiting interactive mode (interrupt).");
    Ok(Exit::Interrupted)
}

/// Run the interactive loop on stdin/stdout, ending on Ctrl-C.
pub async fn run(mut racer: Racer) -> anyhow::Result<()> {
    info!(
        generator = racer.generator_name(),
        "Paddock interactive mode. Type 'help' for commands, 'quit' to exit."
    );
    let mut stdout = io::stdout();
    stdout.write_all(HELP.as_bytes())?;

    let input = BufReader::new(tokio::io::stdin());
    let exit = run_session(&mut racer, input, &mut stdout, tokio::signal::ctrl_c()).await?;
    debug!(?exit, "session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use paddock::agent::{Action, AgentEvent, EventObserver, RecordingActions};
    use paddock::generate::{GenerateFuture, TemplateGenerator, TextGenerator};
    use paddock::race::{RaceResult, Stage};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    struct Session {
        racer: Racer,
        actions: Arc<RecordingActions>,
        rejections: Arc<Mutex<Vec<String>>>,
        out: Vec<u8>,
    }

    impl Session {
        fn new() -> Self {
            let actions = Arc::new(RecordingActions::new());
            let rejections = Arc::new(Mutex::new(Vec::new()));
            let sink = rejections.clone();
            let observer = EventObserver::new(move |event: &AgentEvent<'_>| {
                if event.is_rejection() {
                    sink.lock().unwrap().push(format!("{event:?}"));
                }
            });
            let racer = Racer::new(Box::new(TemplateGenerator::with_seed(5)))
                .with_actions(actions.clone())
                .with_event_handler(Arc::new(observer));
            Self {
                racer,
                actions,
                rejections,
                out: Vec::new(),
            }
        }

        async fn send(&mut self, line: &str) -> Flow {
            handle_line(&mut self.racer, line, &mut self.out).await.unwrap()
        }

        fn output(&self) -> String {
            String::from_utf8(self.out.clone()).unwrap()
        }
    }

    #[test]
    fn prompt_shows_stage_result_and_race() {
        let ctx = AgentContext::default();
        assert_eq!(prompt_line(&ctx), "(FP1, Res: N/A, Race: SilverstoneGP) > ");

        let ctx = ctx
            .with_stage(Stage::Race)
            .with_result(RaceResult::position(5).unwrap())
            .with_race_name("MonzaGP");
        assert_eq!(prompt_line(&ctx), "(RACE, Res: P5, Race: MonzaGP) > ");
    }

    #[test]
    fn state_report_lists_everything() {
        let ctx = AgentContext::default().with_stage(Stage::Q2);
        let report = state_report(&ctx);
        assert!(report.contains("Current Stage: Qualifying 2 (Q2)"));
        assert!(report.contains("Last Result:   N/A"));
        assert!(report.contains("Racer Name:    Go Mifune"));
        assert!(report.contains("Team Name:     Mach 5"));
        assert!(report.contains("Current Race:  SilverstoneGP"));
    }

    #[tokio::test]
    async fn bad_stage_changes_nothing() {
        let mut session = Session::new();
        session.send("stage q2").await;
        let before = session.racer.context().clone();

        assert_eq!(session.send("stage banana").await, Flow::Continue);
        assert_eq!(session.racer.context(), &before);
        let rejections = session.rejections.lock().unwrap();
        assert_eq!(rejections.len(), 1);
        assert!(rejections[0].contains("banana"));
    }

    #[tokio::test]
    async fn unknown_and_blank_lines_continue() {
        let mut session = Session::new();
        let before = session.racer.context().clone();
        assert_eq!(session.send("dance").await, Flow::Continue);
        assert_eq!(session.send("   ").await, Flow::Continue);
        assert_eq!(session.send("reply").await, Flow::Continue);
        assert_eq!(session.racer.context(), &before);
        assert!(session.output().is_empty());
        assert!(session.actions.actions().is_empty());
    }

    #[tokio::test]
    async fn quit_stops_the_loop() {
        let mut session = Session::new();
        assert_eq!(session.send("QUIT").await, Flow::Quit);
        assert_eq!(session.send("q").await, Flow::Quit);
    }

    #[tokio::test]
    async fn race_weekend_session() {
        let mut session = Session::new();
        session.send("racename MonzaGP").await;
        session.send("stage race").await;
        session.send("result p1").await;
        session.send("post").await;
        session.send("reply Amazing drive, well done!").await;
        session.send("mention crew").await;
        session.send(r#"like "Good fight" Max"#).await;
        session.send("state").await;

        let output = session.output();
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("Agent posted: "));
        assert!(lines[0].contains("MonzaGP"));
        assert!(lines[1].starts_with("Agent replied: Go Mifune replies: "));
        assert!(lines[2].starts_with("Agent posted with mention: Great job by @crew!"));
        assert!(lines[2].ends_with("#TeamMach 5 #Winner"));
        assert!(output.contains("Current Stage: The Grand Prix (Race) (RACE)"));
        assert!(output.contains("Last Result:   P1"));

        let actions = session.actions.actions();
        assert_eq!(
            actions.last(),
            Some(&Action::Like {
                content: "Good fight".into(),
                author: "Max".into(),
            })
        );
    }

    /// A backend whose calls never complete.
    struct Stalled;

    impl TextGenerator for Stalled {
        fn name(&self) -> &str {
            "stalled"
        }

        fn generate_post<'a>(&'a self, _ctx: &'a AgentContext) -> GenerateFuture<'a> {
            Box::pin(std::future::pending::<String>())
        }

        fn generate_reply<'a>(
            &'a self,
            _ctx: &'a AgentContext,
            _comment: &'a str,
        ) -> GenerateFuture<'a> {
            Box::pin(std::future::pending::<String>())
        }

        fn generate_mention<'a>(
            &'a self,
            _ctx: &'a AgentContext,
            _entity: &'a str,
            _message: &'a str,
        ) -> GenerateFuture<'a> {
            Box::pin(std::future::pending::<String>())
        }
    }

    #[tokio::test]
    async fn interrupt_abandons_a_stalled_generation() {
        let mut racer = Racer::new(Box::new(Stalled));
        let mut out = Vec::new();
        let input: &[u8] = b"post\nstate\n";
        let interrupt = tokio::time::sleep(Duration::from_millis(50));

        let exit = tokio::time::timeout(
            Duration::from_secs(5),
            run_session(&mut racer, input, &mut out, interrupt),
        )
        .await
        .expect("session should end on interrupt")
        .unwrap();

        assert_eq!(exit, Exit::Interrupted);
        let output = String::from_utf8(out).unwrap();
        assert!(!output.contains("Agent posted"), "{output}");
        assert!(!output.contains("Current Stage"), "{output}");
    }

    #[tokio::test]
    async fn end_of_input_ends_the_session() {
        let mut racer = Racer::new(Box::new(TemplateGenerator::with_seed(1)));
        let mut out = Vec::new();
        let input: &[u8] = b"stage q2\nresult p5\n";

        let exit = run_session(&mut racer, input, &mut out, std::future::pending::<()>())
            .await
            .unwrap();

        assert_eq!(exit, Exit::EndOfInput);
        assert_eq!(racer.context().stage, Stage::Q2);
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("(FP1, Res: N/A, Race: SilverstoneGP) > "));
        assert!(output.contains("(Q2, Res: P5, Race: SilverstoneGP) > "));
    }

    #[tokio::test]
    async fn quit_stops_before_later_lines() {
        let mut racer = Racer::new(Box::new(TemplateGenerator::with_seed(1)));
        let mut out = Vec::new();
        let input: &[u8] = b"quit\npost\n";

        let exit = run_session(&mut racer, input, &mut out, std::future::pending::<()>())
            .await
            .unwrap();

        assert_eq!(exit, Exit::Quit);
        assert!(!String::from_utf8(out).unwrap().contains("Agent posted"));
    }
}
