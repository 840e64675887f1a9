//! Admission filter: decides whether a submitted query may run at all.
//!
//! The shipped filter is a keyword denylist over the raw text. It is not a SQL
//! parser: a denylisted word inside a string literal or alias is rejected too.
//! Callers depend on [`AdmissionFilter`] only, so a parser-backed check can be
//! swapped in later.

use thiserror::Error;

/// Message shown to the user for every rejection.
pub const REJECTION_MESSAGE: &str = "Only single SELECT queries are allowed. No DML/DDL.";

/// Mutating or administrative statement keywords. The trailing space is part
/// of each entry.
pub const FORBIDDEN: &[&str] = &[
    "INSERT ",
    "UPDATE ",
    "DELETE ",
    "DROP ",
    "TRUNCATE ",
    "ALTER ",
    "CREATE ",
    "ATTACH ",
    "DETACH ",
    "PRAGMA ",
    "REINDEX ",
    "REPLACE ",
    "EXECUTE ",
    "MERGE ",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    NotSelect,
    ForbiddenKeyword(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", REJECTION_MESSAGE)]
pub struct AdmissionRejected {
    pub reason: RejectReason,
}

pub trait AdmissionFilter {
    fn admit(&self, query: &str) -> Result<(), AdmissionRejected>;

    fn is_allowed(&self, query: &str) -> bool {
        self.admit(query).is_ok()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordDenylist;

impl AdmissionFilter for KeywordDenylist {
    fn admit(&self, query: &str) -> Result<(), AdmissionRejected> {
        let q = query.trim().to_lowercase();
        if !q.starts_with("select") {
            tracing::debug!(reason = "not_select", "query rejected at admission");
            return Err(AdmissionRejected {
                reason: RejectReason::NotSelect,
            });
        }

        let up = query.to_uppercase();
        if let Some(kw) = FORBIDDEN.iter().find(|kw| up.contains(*kw)) {
            tracing::debug!(keyword = kw.trim_end(), "query rejected at admission");
            return Err(AdmissionRejected {
                reason: RejectReason::ForbiddenKeyword(kw),
            });
        }

        Ok(())
    }
}

/// Convenience predicate using the default denylist.
pub fn is_select_only(query: &str) -> bool {
    KeywordDenylist.is_allowed(query)
}
