use crate::cli::args::{GlobalArgs, ListArgs};
use crate::exit_codes::SUCCESS;
use sqlquiz_core::questions::{Group, QuestionBank};

pub fn run(global: &GlobalArgs, args: ListArgs) -> anyhow::Result<i32> {
    let quiz = super::load_quiz(global)?;
    print!("{}", render(quiz.bank(), args.group.map(Into::into)));
    Ok(SUCCESS)
}

pub(crate) fn render(bank: &QuestionBank, only: Option<Group>) -> String {
    let mut out = String::new();
    for group in Group::ALL {
        if only.is_some_and(|g| g != group) {
            continue;
        }
        let questions = bank.in_group(group);
        if questions.is_empty() {
            continue;
        }
        out.push_str(&format!("{}\n", group.label()));
        for q in questions {
            out.push_str(&format!("  {}\n", q.label()));
        }
    }
    let ungrouped: Vec<_> = bank.all().iter().filter(|q| q.group().is_none()).collect();
    if only.is_none() && !ungrouped.is_empty() {
        out.push_str("Other\n");
        for q in ungrouped {
            out.push_str(&format!("  {}\n", q.label()));
        }
    }
    out
}
