//! Question records and the bank that holds them.

mod builtin;

use crate::errors::QuizError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use builtin::builtin_questions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    Easy,
    Advanced,
    Mock,
}

impl Group {
    pub const ALL: [Group; 3] = [Group::Easy, Group::Advanced, Group::Mock];

    pub fn label(&self) -> &'static str {
        match self {
            Group::Easy => "Easy",
            Group::Advanced => "Advanced",
            Group::Mock => "Mock Test",
        }
    }

    /// Group implied by a built-in id prefix (`E`, `A`, `M`).
    pub fn from_id(id: &str) -> Option<Group> {
        match id.chars().next()?.to_ascii_uppercase() {
            'E' => Some(Group::Easy),
            'A' => Some(Group::Advanced),
            'M' => Some(Group::Mock),
            _ => None,
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable question record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Question {
    pub id: String,
    pub title: String,
    pub prompt: String,
    /// Canonical answer query; its output is the reference result.
    pub reference: String,
    #[serde(default)]
    pub enforce_order: bool,
    #[serde(default)]
    pub group: Option<Group>,
}

impl Question {
    pub fn group(&self) -> Option<Group> {
        self.group.or_else(|| Group::from_id(&self.id))
    }

    pub fn label(&self) -> String {
        format!("{} - {}", self.id, self.title)
    }
}

#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn builtin() -> Self {
        Self {
            questions: builtin_questions(),
        }
    }

    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn all(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn in_group(&self, group: Group) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| q.group() == Some(group))
            .collect()
    }

    /// Case-insensitive lookup by id.
    pub fn get(&self, id: &str) -> Result<&Question, QuizError> {
        let id = id.trim();
        self.questions
            .iter()
            .find(|q| q.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| QuizError::UnknownQuestion(id.to_string()))
    }
}
