//! Reference results, computed once from each question's canonical query.

use crate::errors::QuizError;
use crate::execute::execute;
use crate::fixture::FixtureStore;
use crate::model::ResultSet;
use crate::questions::QuestionBank;
use std::collections::HashMap;

/// Either the expected rows or the error the reference query produced.
pub type ReferenceResult = Result<ResultSet, String>;

#[derive(Debug, Clone, Default)]
pub struct References {
    by_id: HashMap<String, ReferenceResult>,
}

impl References {
    /// Run every reference query once. Failures are recorded, not raised.
    pub fn precompute(store: &FixtureStore, bank: &QuestionBank) -> Self {
        let mut by_id = HashMap::with_capacity(bank.len());
        for q in bank.all() {
            let result = execute(store, &q.reference).map_err(|e| match e {
                QuizError::QueryExecution(msg) => msg,
                other => other.to_string(),
            });
            if let Err(msg) = &result {
                tracing::warn!(question = %q.id, error = %msg, "reference query failed");
            }
            by_id.insert(q.id.to_ascii_uppercase(), result);
        }
        let failed = by_id.values().filter(|r| r.is_err()).count();
        tracing::info!(
            questions = by_id.len(),
            failed,
            "reference results precomputed"
        );
        Self { by_id }
    }

    pub fn get(&self, question_id: &str) -> Option<&ReferenceResult> {
        self.by_id.get(&question_id.trim().to_ascii_uppercase())
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
