//! Interactive practice session.
//!
//! Input is read line by line. A submission ends once the pending text holds a
//! `;` outside quotes and comments, or with a blank line; lines starting with
//! `:` are session commands when no query is pending.

use crate::cli::args::{GlobalArgs, PlayArgs};
use crate::exit_codes::SUCCESS;
use sqlquiz_core::attempts::Session;
use sqlquiz_core::compare::Outcome;
use sqlquiz_core::execute::is_terminated;
use sqlquiz_core::questions::Group;
use sqlquiz_core::report::{hints_block, render_table, verdict_line};
use sqlquiz_core::Quiz;
use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  :next / :prev      move to the next / previous question
  :goto <ID>         jump to a question
  :hint              show the reference query
  :order [on|off]    enforce row order when comparing (no argument toggles)
  :list              list the questions in this session
  :help              this text
  :quit              end the session
End a query with `;` or an empty line to submit it.
";

pub fn run(global: &GlobalArgs, args: PlayArgs) -> anyhow::Result<i32> {
    let quiz = super::load_quiz(global)?;
    let opts = PlayOptions {
        group: args.group.map(Into::into),
        start: args.start,
        enforce_order: args.enforce_order,
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(&quiz, stdin.lock(), stdout.lock(), opts)?;
    Ok(SUCCESS)
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PlayOptions {
    pub group: Option<Group>,
    pub start: Option<String>,
    pub enforce_order: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Summary {
    pub submissions: usize,
    pub solved: BTreeSet<String>,
}

#[derive(Debug, PartialEq, Eq)]
enum Cmd {
    Next,
    Prev,
    Goto(String),
    Hint,
    Order(Option<bool>),
    List,
    Help,
    Quit,
    Unknown(String),
}

fn parse_cmd(line: &str) -> Cmd {
    let mut parts = line.trim_start_matches(':').split_whitespace();
    let name = parts.next().unwrap_or("").to_ascii_lowercase();
    let arg = parts.next();
    match (name.as_str(), arg) {
        ("next" | "n", _) => Cmd::Next,
        ("prev" | "p", _) => Cmd::Prev,
        ("goto" | "g", Some(id)) => Cmd::Goto(id.to_string()),
        ("hint", _) => Cmd::Hint,
        ("order", None) => Cmd::Order(None),
        ("order", Some("on")) => Cmd::Order(Some(true)),
        ("order", Some("off")) => Cmd::Order(Some(false)),
        ("list" | "l", _) => Cmd::List,
        ("help" | "h" | "?", _) => Cmd::Help,
        ("quit" | "q" | "exit", _) => Cmd::Quit,
        _ => Cmd::Unknown(line.trim().to_string()),
    }
}

struct PlayState<'a> {
    quiz: &'a Quiz,
    ids: Vec<String>,
    idx: usize,
    enforce_order: bool,
    session: Session,
    summary: Summary,
}

impl PlayState<'_> {
    fn current(&self) -> &str {
        &self.ids[self.idx]
    }

    fn move_to<W: Write>(&mut self, idx: usize, out: &mut W) -> io::Result<()> {
        self.idx = idx;
        let id = self.ids[idx].clone();
        self.session.select(&id);
        self.print_question(out)
    }

    fn print_question<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if let Ok(q) = self.quiz.question(self.current()) {
            writeln!(out)?;
            writeln!(out, "{}: {}", q.id, q.title)?;
            writeln!(out, "{}", q.prompt)?;
        }
        Ok(())
    }

    fn command<W: Write>(&mut self, cmd: Cmd, out: &mut W) -> io::Result<bool> {
        match cmd {
            Cmd::Next if self.idx + 1 < self.ids.len() => self.move_to(self.idx + 1, out)?,
            Cmd::Next => writeln!(out, "Already at the last question.")?,
            Cmd::Prev if self.idx > 0 => self.move_to(self.idx - 1, out)?,
            Cmd::Prev => writeln!(out, "Already at the first question.")?,
            Cmd::Goto(id) => match self.ids.iter().position(|q| q.eq_ignore_ascii_case(&id)) {
                Some(i) => self.move_to(i, out)?,
                None => writeln!(out, "No question {id} in this session.")?,
            },
            Cmd::Hint => {
                if let Ok(q) = self.quiz.question(self.current()) {
                    writeln!(out, "Reference query: {}", q.reference)?;
                }
            }
            Cmd::Order(v) => {
                self.enforce_order = v.unwrap_or(!self.enforce_order);
                let state = if self.enforce_order { "on" } else { "off" };
                writeln!(out, "Enforce order: {state}")?;
            }
            Cmd::List => {
                for (i, id) in self.ids.iter().enumerate() {
                    let marker = if i == self.idx { ">" } else { " " };
                    let done = if self.summary.solved.contains(id) {
                        " ✓"
                    } else {
                        ""
                    };
                    if let Ok(q) = self.quiz.question(id) {
                        writeln!(out, "{marker} {}{done}", q.label())?;
                    }
                }
            }
            Cmd::Help => write!(out, "{HELP}")?,
            Cmd::Quit => return Ok(false),
            Cmd::Unknown(c) => writeln!(out, "Unknown command {c} (type :help)")?,
        }
        Ok(true)
    }

    fn submit<W: Write>(&mut self, sql: &str, out: &mut W) -> io::Result<()> {
        let id = self.current().to_string();
        self.summary.submissions += 1;
        let result = self
            .quiz
            .submit(&mut self.session, &id, sql, self.enforce_order);
        let s = match result {
            Ok(s) => s,
            Err(e) => {
                writeln!(out, "{e}")?;
                return Ok(());
            }
        };

        let limit = self.quiz.config().display.result_rows;
        write!(out, "{}", render_table(&s.result, limit))?;
        writeln!(out, "Rows returned: {}", s.result.len())?;
        writeln!(out, "{}", verdict_line(&s.verdict))?;

        match s.verdict.outcome {
            Outcome::Correct => {
                self.summary.solved.insert(id);
                writeln!(out, "Type :next for the next question.")?;
            }
            Outcome::Incorrect => {
                if let Some(st) = s.attempts {
                    writeln!(out, "Failed attempts on {id}: {}", st.failed)?;
                }
                write!(out, "{}", hints_block())?;
                if let Some(reference) = &s.revealed_reference {
                    writeln!(out, "Reference answer: {reference}")?;
                }
            }
            Outcome::Unverifiable => {}
        }
        Ok(())
    }
}

pub(crate) fn play<R: BufRead, W: Write>(
    quiz: &Quiz,
    input: R,
    mut out: W,
    opts: PlayOptions,
) -> anyhow::Result<Summary> {
    let questions = match opts.group {
        Some(g) => quiz.bank().in_group(g),
        None => quiz.bank().all().iter().collect(),
    };
    let ids: Vec<String> = questions.iter().map(|q| q.id.clone()).collect();
    if ids.is_empty() {
        anyhow::bail!("no questions to play");
    }
    let idx = match &opts.start {
        Some(start) => ids
            .iter()
            .position(|id| id.eq_ignore_ascii_case(start.trim()))
            .ok_or_else(|| anyhow::anyhow!("no question {start} in this session"))?,
        None => 0,
    };

    let mut state = PlayState {
        quiz,
        ids,
        idx,
        enforce_order: opts.enforce_order,
        session: quiz.new_session(),
        summary: Summary::default(),
    };
    writeln!(
        out,
        "SQL practice: {} question(s). Type :help for commands.",
        state.ids.len()
    )?;
    state.move_to(idx, &mut out)?;

    let mut buffer = String::new();
    write!(out, "sql> ")?;
    out.flush()?;
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();

        if buffer.is_empty() && trimmed.starts_with(':') {
            if !state.command(parse_cmd(trimmed), &mut out)? {
                break;
            }
        } else if trimmed.is_empty() {
            if !buffer.is_empty() {
                state.submit(&std::mem::take(&mut buffer), &mut out)?;
            }
        } else {
            buffer.push_str(&line);
            buffer.push('\n');
            if is_terminated(&buffer) {
                state.submit(&std::mem::take(&mut buffer), &mut out)?;
            }
        }

        let prompt = if buffer.is_empty() { "sql> " } else { "...> " };
        write!(out, "{prompt}")?;
        out.flush()?;
    }
    if !buffer.trim().is_empty() {
        state.submit(&buffer, &mut out)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Solved {} question(s) in {} submission(s).",
        state.summary.solved.len(),
        state.summary.submissions
    )?;
    tracing::debug!(
        solved = state.summary.solved.len(),
        submissions = state.summary.submissions,
        "session finished"
    );
    Ok(state.summary)
}
