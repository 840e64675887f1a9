use crate::attempts::AttemptPolicy;
use crate::compare::{CompareOptions, UnorderedPolicy, DEFAULT_DIFF_EXAMPLES};
use crate::errors::ConfigError;
use crate::questions::{Question, QuestionBank};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

pub const SUPPORTED_CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct QuizConfig {
    pub version: u32,
    #[serde(default)]
    pub attempts: AttemptPolicy,
    #[serde(default)]
    pub compare: CompareConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    /// Replaces the built-in question bank when present.
    #[serde(default)]
    pub questions: Option<Vec<Question>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareConfig {
    pub unordered: UnorderedPolicy,
    pub diff_examples: usize,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            unordered: UnorderedPolicy::Set,
            diff_examples: DEFAULT_DIFF_EXAMPLES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub reference_preview_rows: usize,
    pub result_rows: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            reference_preview_rows: 10,
            result_rows: 20,
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            version: SUPPORTED_CONFIG_VERSION,
            attempts: AttemptPolicy::default(),
            compare: CompareConfig::default(),
            display: DisplayConfig::default(),
            questions: None,
        }
    }
}

impl QuizConfig {
    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        let cfg: QuizConfig =
            serde_yaml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != SUPPORTED_CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                supported: SUPPORTED_CONFIG_VERSION,
            });
        }
        if self.attempts.reveal_threshold == 0 {
            return Err(ConfigError::Invalid(
                "attempts.reveal_threshold must be at least 1".into(),
            ));
        }
        if self.compare.diff_examples == 0 {
            return Err(ConfigError::Invalid(
                "compare.diff_examples must be at least 1".into(),
            ));
        }
        if let Some(questions) = &self.questions {
            if questions.is_empty() {
                return Err(ConfigError::Invalid("config has no questions".into()));
            }
            let mut seen = HashSet::new();
            for q in questions {
                if q.id.trim().is_empty() {
                    return Err(ConfigError::Invalid("question id must not be empty".into()));
                }
                if q.reference.trim().is_empty() {
                    return Err(ConfigError::Invalid(format!(
                        "question {} has an empty reference query",
                        q.id
                    )));
                }
                if !seen.insert(q.id.trim().to_ascii_uppercase()) {
                    return Err(ConfigError::Invalid(format!(
                        "duplicate question id: {}",
                        q.id
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn question_bank(&self) -> QuestionBank {
        match &self.questions {
            Some(qs) => QuestionBank::new(qs.clone()),
            None => QuestionBank::builtin(),
        }
    }

    pub fn compare_options(&self, enforce_order: bool) -> CompareOptions {
        CompareOptions {
            enforce_order,
            unordered: self.compare.unordered,
            diff_examples: self.compare.diff_examples,
        }
    }
}

pub fn load_config(path: &Path) -> Result<QuizConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;
    let cfg = QuizConfig::from_yaml_str(&raw)?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::Group;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = QuizConfig::from_yaml_str("version: 1\n").unwrap();
        assert_eq!(cfg, QuizConfig::default());
        assert_eq!(cfg.question_bank().len(), 32);
    }

    #[test]
    fn full_config_round_trips_fields() {
        let cfg = QuizConfig::from_yaml_str(
            r#"
version: 1
attempts:
  reveal_threshold: 2
  reset_after_reveal: true
compare:
  unordered: multiset
  diff_examples: 3
display:
  result_rows: 5
questions:
  - id: X1
    title: Everyone
    prompt: List every student.
    reference: SELECT name FROM Students ORDER BY name;
    enforce_order: true
    group: advanced
"#,
        )
        .unwrap();
        assert_eq!(cfg.attempts.reveal_threshold, 2);
        assert!(cfg.attempts.reset_after_reveal);
        assert!(cfg.attempts.per_question);
        assert_eq!(cfg.compare.unordered, UnorderedPolicy::Multiset);
        assert_eq!(cfg.display.result_rows, 5);
        assert_eq!(cfg.display.reference_preview_rows, 10);

        let bank = cfg.question_bank();
        assert_eq!(bank.len(), 1);
        let q = bank.get("x1").unwrap();
        assert!(q.enforce_order);
        assert_eq!(q.group(), Some(Group::Advanced));

        let opts = cfg.compare_options(false);
        assert_eq!(opts.diff_examples, 3);
        assert_eq!(opts.unordered, UnorderedPolicy::Multiset);
    }

    #[test]
    fn rejects_unsupported_version() {
        let err = QuizConfig::from_yaml_str("version: 2\n").unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnsupportedVersion {
                found: 2,
                supported: 1
            }
        );
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = QuizConfig::from_yaml_str("version: 1\nretries: 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_zero_threshold() {
        let err = QuizConfig::from_yaml_str("version: 1\nattempts:\n  reveal_threshold: 0\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_duplicate_question_ids() {
        let raw = r#"
version: 1
questions:
  - { id: Q1, title: a, prompt: a, reference: SELECT 1 }
  - { id: q1, title: b, prompt: b, reference: SELECT 2 }
"#;
        let err = QuizConfig::from_yaml_str(raw).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid("duplicate question id: q1".into())
        );
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sqlquiz.yaml");
        std::fs::write(&path, "version: 1\ndisplay:\n  result_rows: 3\n").unwrap();
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.display.result_rows, 3);
    }
}
