//! End-to-end checks of the answer checker against the seeded school dataset.

use sqlquiz_core::admission::RejectReason;
use sqlquiz_core::compare::{Outcome, ORDERING_MESSAGE};
use sqlquiz_core::config::QuizConfig;
use sqlquiz_core::model::Value;
use sqlquiz_core::questions::Question;
use sqlquiz_core::{FixtureStore, Quiz, QuizError};

fn quiz() -> Quiz {
    Quiz::setup(QuizConfig::default()).expect("quiz setup")
}

fn question(id: &str, reference: &str, enforce_order: bool) -> Question {
    Question {
        id: id.to_string(),
        title: id.to_string(),
        prompt: "test".to_string(),
        reference: reference.to_string(),
        enforce_order,
        group: None,
    }
}

fn custom(questions: Vec<Question>) -> Quiz {
    let cfg = QuizConfig {
        questions: Some(questions),
        ..QuizConfig::default()
    };
    Quiz::new(FixtureStore::seeded().unwrap(), cfg)
}

#[test]
fn names_and_cities_matches_reference() {
    let quiz = quiz();
    let s = quiz
        .check("E1", "SELECT name, city FROM Students;", false)
        .unwrap();
    assert_eq!(s.verdict.outcome, Outcome::Correct);
    assert_eq!(s.result.columns, vec!["name", "city"]);

    let mut pairs: Vec<(String, String)> = s
        .result
        .rows
        .iter()
        .map(|r| match r.values() {
            [Value::Text(n), Value::Text(c)] => (n.clone(), c.clone()),
            other => panic!("unexpected row {other:?}"),
        })
        .collect();
    pairs.sort();
    let expected = [
        ("Aarav", "Mumbai"),
        ("Anaya", "Pune"),
        ("Kabir", "Delhi"),
        ("Maya", "Mumbai"),
        ("Neha", "Pune"),
        ("Riya", "Delhi"),
        ("Rohit", "Delhi"),
        ("Zara", "Chennai"),
    ];
    let expected: Vec<(String, String)> = expected
        .iter()
        .map(|(n, c)| (n.to_string(), c.to_string()))
        .collect();
    assert_eq!(pairs, expected);
}

#[test]
fn drop_table_is_rejected_before_execution() {
    let quiz = quiz();
    match quiz.check("E1", "DROP TABLE Students;", false) {
        Err(QuizError::AdmissionRejected(r)) => assert_eq!(r.reason, RejectReason::NotSelect),
        other => panic!("expected rejection, got {other:?}"),
    }
    // The table is still there.
    let s = quiz.check("E1", "SELECT name, city FROM Students", false);
    assert!(s.unwrap().verdict.is_correct());
}

#[test]
fn malformed_reference_is_unverifiable() {
    let quiz = custom(vec![question("X1", "SELEC name FROM Students", false)]);
    let mut session = quiz.new_session();
    let s = quiz
        .submit(&mut session, "X1", "SELECT name FROM Students", false)
        .unwrap();
    assert_eq!(s.verdict.outcome, Outcome::Unverifiable);
    assert!(s.verdict.message.starts_with("Reference query failed:"));
    assert!(s.attempts.is_none());
    assert_eq!(session.count("X1"), 0);
}

#[test]
fn order_sensitivity_is_per_submission() {
    let reference = "SELECT name FROM Students ORDER BY marks DESC";
    let quiz = custom(vec![question("O1", reference, false)]);
    let reversed = "SELECT name FROM Students ORDER BY marks ASC";

    let s = quiz.check("O1", reversed, false).unwrap();
    assert!(s.verdict.is_correct());

    let v = quiz.check("O1", reversed, true).unwrap().verdict;
    assert_eq!(v.outcome, Outcome::Incorrect);
    assert!(v.extra.is_empty() && v.missing.is_empty());
    assert_eq!(v.message, ORDERING_MESSAGE);
}

#[test]
fn question_can_require_order() {
    let reference = "SELECT name FROM Students ORDER BY marks DESC";
    let quiz = custom(vec![question("O2", reference, true)]);
    let reversed = "SELECT name FROM Students ORDER BY marks ASC";

    let v = quiz.check("O2", reversed, false).unwrap().verdict;
    assert_eq!(v.outcome, Outcome::Incorrect);
    let v = quiz.check("O2", reference, false).unwrap().verdict;
    assert!(v.is_correct());
}

#[test]
fn wrong_filter_reports_bounded_examples() {
    let quiz = quiz();
    let sql = "SELECT name, marks FROM Students WHERE marks > 60";
    let v = quiz.check("E3", sql, false).unwrap().verdict;
    assert_eq!(v.outcome, Outcome::Incorrect);
    assert!(v.missing.is_empty());
    let mut extra: Vec<String> = v.extra.iter().map(|r| r.to_string()).collect();
    extra.sort();
    assert_eq!(extra, vec!["('Maya', 75)", "('Neha', 70)"]);
}

#[test]
fn null_marks_survive_comparison() {
    let quiz = quiz();
    let sql = "SELECT * FROM Students WHERE city = 'Pune' OR city = 'Mumbai'";
    let s = quiz.check("E10", sql, false).unwrap();
    assert!(s.verdict.is_correct(), "{}", s.verdict.message);
    assert!(s.result.rows.iter().any(|r| r.values()[3] == Value::Null));
}

#[test]
fn average_questions_compare_reals() {
    let quiz = quiz();
    let s = quiz
        .check(
            "A1",
            "SELECT city, AVG(marks) FROM Students GROUP BY city HAVING AVG(marks) > 80",
            false,
        )
        .unwrap();
    assert!(s.verdict.is_correct(), "{}", s.verdict.message);
}

#[test]
fn three_misses_then_reveal_on_fourth() {
    let quiz = quiz();
    let mut session = quiz.new_session();
    let wrong = "SELECT name FROM Students";
    for n in 1..=3 {
        let s = quiz.submit(&mut session, "M9", wrong, false).unwrap();
        assert_eq!(s.attempts.unwrap().failed, n);
        assert!(s.revealed_reference.is_none());
    }
    let s = quiz.submit(&mut session, "M9", wrong, false).unwrap();
    assert!(s.attempts.unwrap().reveal);
    assert!(s.revealed_reference.is_some());

    let s = quiz
        .submit(
            &mut session,
            "M9",
            "SELECT name, marks FROM Students ORDER BY marks DESC LIMIT 1",
            false,
        )
        .unwrap();
    assert!(s.verdict.is_correct());
    assert_eq!(session.count("M9"), 0);
}

#[test]
fn switching_questions_mid_session() {
    let quiz = quiz();
    let mut session = quiz.new_session();
    quiz.submit(&mut session, "E1", "SELECT name FROM Students", false)
        .unwrap();
    quiz.submit(&mut session, "E1", "SELECT city FROM Students", false)
        .unwrap();
    quiz.submit(&mut session, "E2", "SELECT 1", false).unwrap();
    assert_eq!(session.count("E2"), 1);
    assert_eq!(session.count("E1"), 2);
}

#[test]
fn attempt_policy_from_config_drives_reveal_and_reset() {
    let raw = r#"
version: 1
attempts:
  reveal_threshold: 2
  reset_after_reveal: true
  per_question: false
"#;
    let quiz = Quiz::setup(QuizConfig::from_yaml_str(raw).unwrap()).unwrap();
    let mut session = quiz.new_session();
    let wrong = "SELECT name FROM Students";

    let s = quiz.submit(&mut session, "E1", wrong, false).unwrap();
    assert_eq!(s.attempts.unwrap().failed, 1);
    assert!(s.revealed_reference.is_none());

    // Second miss reveals, then the counter starts over.
    let s = quiz.submit(&mut session, "E1", wrong, false).unwrap();
    let status = s.attempts.unwrap();
    assert!(status.reveal);
    assert_eq!(status.failed, 0);
    assert_eq!(
        s.revealed_reference.as_deref(),
        Some("SELECT name, city FROM Students;")
    );
    assert_eq!(session.count("E1"), 0);

    let s = quiz.submit(&mut session, "E1", wrong, false).unwrap();
    assert_eq!(s.attempts.unwrap().failed, 1);
    assert!(s.revealed_reference.is_none());

    // One shared counter: moving on drops what E1 had.
    quiz.submit(&mut session, "E2", wrong, false).unwrap();
    assert_eq!(session.count("E2"), 1);
    assert_eq!(session.count("E1"), 0);
}
