//! Per-session attempt tracking and answer reveal.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_REVEAL_THRESHOLD: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AttemptPolicy {
    /// Failed attempts after which the reference query is revealed.
    pub reveal_threshold: u32,
    /// Start counting from zero again once the answer has been revealed.
    pub reset_after_reveal: bool,
    /// Keep one counter per question instead of a single session counter.
    pub per_question: bool,
}

impl Default for AttemptPolicy {
    fn default() -> Self {
        Self {
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reset_after_reveal: false,
            per_question: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttemptCounter {
    failed: u32,
}

impl AttemptCounter {
    pub fn count(&self) -> u32 {
        self.failed
    }

    pub fn increment(&mut self) -> u32 {
        self.failed = self.failed.saturating_add(1);
        self.failed
    }

    pub fn reset(&mut self) {
        self.failed = 0;
    }
}

/// State after recording one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttemptStatus {
    /// Failed attempts so far, after any post-reveal reset.
    pub failed: u32,
    /// The reference answer should be shown now.
    pub reveal: bool,
}

/// Session-scoped quiz state. Owned by exactly one user session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    policy: AttemptPolicy,
    current: Option<String>,
    counters: HashMap<String, AttemptCounter>,
}

fn key(id: &str) -> String {
    id.trim().to_ascii_uppercase()
}

impl Session {
    pub fn new(policy: AttemptPolicy) -> Self {
        Self {
            policy,
            current: None,
            counters: HashMap::new(),
        }
    }

    pub fn policy(&self) -> &AttemptPolicy {
        &self.policy
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Switch to `question_id`. Switching to a different question starts its
    /// counter at zero; other questions keep theirs when counted per question.
    /// Re-selecting the current question is a no-op.
    pub fn select(&mut self, question_id: &str) {
        let id = key(question_id);
        if self.current.as_deref() == Some(id.as_str()) {
            return;
        }
        if !self.policy.per_question {
            self.counters.clear();
        }
        self.counters.insert(id.clone(), AttemptCounter::default());
        tracing::debug!(question = %id, "question selected");
        self.current = Some(id);
    }

    pub fn count(&self, question_id: &str) -> u32 {
        self.counters
            .get(&key(question_id))
            .map(AttemptCounter::count)
            .unwrap_or(0)
    }

    pub fn record_correct(&mut self, question_id: &str) -> AttemptStatus {
        self.select(question_id);
        let counter = self.counters.entry(key(question_id)).or_default();
        counter.reset();
        AttemptStatus {
            failed: 0,
            reveal: false,
        }
    }

    pub fn record_incorrect(&mut self, question_id: &str) -> AttemptStatus {
        self.select(question_id);
        let threshold = self.policy.reveal_threshold;
        let reset_after_reveal = self.policy.reset_after_reveal;
        let counter = self.counters.entry(key(question_id)).or_default();
        let failed = counter.increment();
        let reveal = failed >= threshold;
        if reveal && reset_after_reveal {
            counter.reset();
        }
        if reveal {
            tracing::debug!(question = %question_id, failed, "reveal threshold reached");
        }
        AttemptStatus {
            failed: counter.count(),
            reveal,
        }
    }
}
