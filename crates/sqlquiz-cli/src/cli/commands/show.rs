use crate::cli::args::{GlobalArgs, ShowArgs};
use crate::exit_codes::{self, SUCCESS};
use sqlquiz_core::report::render_table;
use sqlquiz_core::Quiz;

pub fn run(global: &GlobalArgs, args: ShowArgs) -> anyhow::Result<i32> {
    let quiz = super::load_quiz(global)?;
    match render(&quiz, &args.id, args.reference) {
        Ok(out) => {
            print!("{out}");
            Ok(SUCCESS)
        }
        Err(e) => {
            eprintln!("{e}");
            Ok(exit_codes::for_error(&e))
        }
    }
}

pub(crate) fn render(
    quiz: &Quiz,
    id: &str,
    with_reference: bool,
) -> Result<String, sqlquiz_core::QuizError> {
    let q = quiz.question(id)?;
    let mut out = format!("{}: {}\n", q.id, q.title);
    if let Some(group) = q.group() {
        out.push_str(&format!("Group: {group}\n"));
    }
    if q.enforce_order {
        out.push_str("Row order is enforced for this question.\n");
    }
    out.push('\n');
    out.push_str(&q.prompt);
    out.push_str("\n\n");

    if with_reference {
        out.push_str(&format!("Reference query:\n  {}\n\n", q.reference));
    }

    let rows = quiz.config().display.reference_preview_rows;
    match quiz.reference(&q.id)? {
        Ok(rs) => {
            out.push_str(&format!("Reference output (first {rows} rows):\n"));
            out.push_str(&render_table(rs, rows));
        }
        Err(e) => out.push_str(&format!("Error preparing reference: {e}\n")),
    }
    Ok(out)
}
