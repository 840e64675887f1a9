//! Process exit codes for `check` and `run`. Part of the CLI contract.

pub const SUCCESS: i32 = 0;
pub const INCORRECT: i32 = 1; // Result differs from the reference
pub const INTERNAL_ERROR: i32 = 2; // Config, fixture or I/O failure
pub const REJECTED: i32 = 3; // Query failed the admission filter
pub const QUERY_ERROR: i32 = 4; // Engine rejected the query
pub const UNVERIFIABLE: i32 = 5; // Reference query itself failed

use sqlquiz_core::{Outcome, QuizError};

pub fn for_outcome(outcome: Outcome) -> i32 {
    match outcome {
        Outcome::Correct => SUCCESS,
        Outcome::Incorrect => INCORRECT,
        Outcome::Unverifiable => UNVERIFIABLE,
    }
}

pub fn for_error(err: &QuizError) -> i32 {
    match err {
        QuizError::AdmissionRejected(_) => REJECTED,
        QuizError::QueryExecution(_) => QUERY_ERROR,
        QuizError::UnknownQuestion(_) | QuizError::Fixture(_) => INTERNAL_ERROR,
    }
}
