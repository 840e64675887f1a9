use crate::errors::QuizError;
use crate::model::{ResultSet, Row};
use crate::quiz::Submission;
use serde::Serialize;

/// Machine-readable result of one `check` invocation.
#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    pub question_id: &'a str,
    pub verdict: &'static str,
    pub message: String,
    pub extra: &'a [Row],
    pub missing: &'a [Row],
    pub columns: &'a [String],
    pub rows: &'a [Row],
    pub row_count: usize,
}

impl<'a> CheckReport<'a> {
    pub fn from_submission(s: &'a Submission) -> Self {
        Self {
            question_id: &s.question_id,
            verdict: s.verdict.outcome.as_str(),
            message: s.verdict.message.trim_end().to_string(),
            extra: &s.verdict.extra,
            missing: &s.verdict.missing,
            columns: &s.result.columns,
            rows: &s.result.rows,
            row_count: s.result.len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorReport<'a> {
    pub question_id: Option<&'a str>,
    pub error: &'static str,
    pub message: String,
}

impl<'a> ErrorReport<'a> {
    pub fn new(question_id: Option<&'a str>, err: &QuizError) -> Self {
        Self {
            question_id,
            error: err.code(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RowsReport<'a> {
    pub columns: &'a [String],
    pub rows: &'a [Row],
    pub row_count: usize,
}

impl<'a> RowsReport<'a> {
    pub fn new(rs: &'a ResultSet) -> Self {
        Self {
            columns: &rs.columns,
            rows: &rs.rows,
            row_count: rs.len(),
        }
    }
}

pub fn to_pretty<T: Serialize>(report: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Verdict;
    use crate::model::Value;

    #[test]
    fn check_report_shape() {
        let s = Submission {
            question_id: "E5".into(),
            verdict: Verdict::correct(),
            result: ResultSet::new(vec!["total".into()], vec![Row(vec![Value::Integer(8)])]),
            attempts: None,
            revealed_reference: None,
        };
        let v = serde_json::to_value(CheckReport::from_submission(&s)).unwrap();
        assert_eq!(v["question_id"], "E5");
        assert_eq!(v["verdict"], "correct");
        assert_eq!(v["rows"], serde_json::json!([[8]]));
        assert_eq!(v["row_count"], 1);
        assert_eq!(v["extra"], serde_json::json!([]));
    }

    #[test]
    fn error_report_carries_code() {
        let err = QuizError::QueryExecution("no such table: X".into());
        let v = serde_json::to_value(ErrorReport::new(Some("E1"), &err)).unwrap();
        assert_eq!(v["error"], "query_execution_error");
        assert_eq!(v["message"], "SQL error: no such table: X");
    }

    #[test]
    fn null_serializes_as_json_null() {
        let rs = ResultSet::new(vec!["m".into()], vec![Row(vec![Value::Null])]);
        let v = serde_json::to_value(RowsReport::new(&rs)).unwrap();
        assert_eq!(v["rows"], serde_json::json!([[null]]));
    }
}
