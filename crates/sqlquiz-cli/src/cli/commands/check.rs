use crate::cli::args::{CheckArgs, GlobalArgs, OutputFormat};
use crate::exit_codes;
use sqlquiz_core::report::{self, CheckReport, ErrorReport};
use sqlquiz_core::{Outcome, Quiz, Submission};

pub fn run(global: &GlobalArgs, args: CheckArgs) -> anyhow::Result<i32> {
    let quiz = super::load_quiz(global)?;
    let sql = args.source.read()?;

    match quiz.check(&args.id, &sql, args.enforce_order) {
        Ok(submission) => {
            match args.format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        report::json::to_pretty(&CheckReport::from_submission(&submission))?
                    )
                }
                OutputFormat::Text => print!("{}", render_text(&quiz, &submission)),
            }
            Ok(exit_codes::for_outcome(submission.verdict.outcome))
        }
        Err(e) => {
            match args.format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        report::json::to_pretty(&ErrorReport::new(Some(&args.id), &e))?
                    )
                }
                OutputFormat::Text => eprintln!("{e}"),
            }
            Ok(exit_codes::for_error(&e))
        }
    }
}

pub(crate) fn render_text(quiz: &Quiz, s: &Submission) -> String {
    let limit = quiz.config().display.result_rows;
    let mut out = format!("Your query result (first {limit} rows):\n");
    out.push_str(&report::render_table(&s.result, limit));
    out.push_str(&format!("Rows returned: {}\n\n", s.result.len()));
    out.push_str(&report::verdict_line(&s.verdict));
    out.push('\n');

    if s.verdict.outcome == Outcome::Incorrect {
        if let Ok(Ok(reference)) = quiz.reference(&s.question_id) {
            out.push_str("\nReference full result:\n");
            out.push_str(&report::render_table(reference, reference.len()));
        }
        out.push('\n');
        out.push_str(&report::hints_block());
    }
    out
}
