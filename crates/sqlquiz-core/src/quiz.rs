//! Answer checker: admission, execution and comparison for one submission.

use crate::admission::{AdmissionFilter, KeywordDenylist};
use crate::attempts::{AttemptStatus, Session};
use crate::compare::{compare_results, Outcome, Verdict};
use crate::config::QuizConfig;
use crate::errors::QuizError;
use crate::execute::execute;
use crate::fixture::FixtureStore;
use crate::model::ResultSet;
use crate::questions::{Question, QuestionBank};
use crate::reference::{ReferenceResult, References};
use serde::Serialize;

/// Outcome of checking one admitted and executed submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub question_id: String,
    pub verdict: Verdict,
    /// The user's own result.
    pub result: ResultSet,
    /// Attempt bookkeeping, present when checked inside a session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempts: Option<AttemptStatus>,
    /// Reference query, present once the reveal threshold is reached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revealed_reference: Option<String>,
}

pub struct Quiz {
    store: FixtureStore,
    bank: QuestionBank,
    references: References,
    filter: Box<dyn AdmissionFilter>,
    config: QuizConfig,
}

impl Quiz {
    /// Seed the fixture store and precompute every reference result.
    pub fn setup(config: QuizConfig) -> Result<Self, QuizError> {
        let store = FixtureStore::seeded()?;
        Ok(Self::new(store, config))
    }

    pub fn new(store: FixtureStore, config: QuizConfig) -> Self {
        let bank = config.question_bank();
        let references = References::precompute(&store, &bank);
        Self {
            store,
            bank,
            references,
            filter: Box::new(KeywordDenylist),
            config,
        }
    }

    pub fn with_filter(mut self, filter: Box<dyn AdmissionFilter>) -> Self {
        self.filter = filter;
        self
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn question(&self, id: &str) -> Result<&Question, QuizError> {
        self.bank.get(id)
    }

    pub fn reference(&self, id: &str) -> Result<&ReferenceResult, QuizError> {
        let q = self.bank.get(id)?;
        self.references
            .get(&q.id)
            .ok_or_else(|| QuizError::UnknownQuestion(q.id.clone()))
    }

    pub fn new_session(&self) -> Session {
        Session::new(self.config.attempts)
    }

    /// Admit and execute a query without comparing it to anything.
    pub fn run_query(&self, sql: &str) -> Result<ResultSet, QuizError> {
        self.filter.admit(sql)?;
        execute(&self.store, sql)
    }

    /// Stateless check of one submission. Row order is enforced when either
    /// the caller asks for it or the question requires it.
    pub fn check(
        &self,
        question_id: &str,
        sql: &str,
        enforce_order: bool,
    ) -> Result<Submission, QuizError> {
        let question = self.bank.get(question_id)?;
        let reference = self.reference(&question.id)?;
        let result = self.run_query(sql)?;
        let opts = self
            .config
            .compare_options(enforce_order || question.enforce_order);
        let verdict = compare_results(&result, reference, &opts);
        tracing::debug!(
            question = %question.id,
            outcome = verdict.outcome.as_str(),
            rows = result.len(),
            "submission checked"
        );
        Ok(Submission {
            question_id: question.id.clone(),
            verdict,
            result,
            attempts: None,
            revealed_reference: None,
        })
    }

    /// Check a submission and update the session's attempt counter.
    ///
    /// Rejected or failing queries and unverifiable verdicts leave the
    /// counter untouched.
    pub fn submit(
        &self,
        session: &mut Session,
        question_id: &str,
        sql: &str,
        enforce_order: bool,
    ) -> Result<Submission, QuizError> {
        let question = self.bank.get(question_id)?;
        session.select(&question.id);

        let mut submission = self.check(&question.id, sql, enforce_order)?;
        let status = match submission.verdict.outcome {
            Outcome::Correct => Some(session.record_correct(&question.id)),
            Outcome::Incorrect => Some(session.record_incorrect(&question.id)),
            Outcome::Unverifiable => None,
        };
        if let Some(st) = status {
            if st.reveal {
                submission.revealed_reference = Some(question.reference.clone());
            }
        }
        submission.attempts = status;
        Ok(submission)
    }
}
