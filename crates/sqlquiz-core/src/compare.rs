//! Result comparator: decides whether a submitted result matches the
//! reference and explains the difference when it does not.

use crate::model::{ResultSet, Row, RowKey};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub const CORRECT_MESSAGE: &str = "Correct — your result matches the reference.";
pub const ORDERING_MESSAGE: &str = "Result differs from expected (may be ordering or formatting).";
pub const DEFAULT_DIFF_EXAMPLES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Correct,
    Incorrect,
    Unverifiable,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Correct => "correct",
            Outcome::Incorrect => "incorrect",
            Outcome::Unverifiable => "unverifiable",
        }
    }
}

/// How rows are matched when order is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnorderedPolicy {
    /// Duplicate rows collapse; only membership matters.
    #[default]
    Set,
    /// Duplicate counts must agree too.
    Multiset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareOptions {
    pub enforce_order: bool,
    pub unordered: UnorderedPolicy,
    pub diff_examples: usize,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            enforce_order: false,
            unordered: UnorderedPolicy::Set,
            diff_examples: DEFAULT_DIFF_EXAMPLES,
        }
    }
}

impl CompareOptions {
    pub fn ordered(mut self, enforce_order: bool) -> Self {
        self.enforce_order = enforce_order;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub outcome: Outcome,
    pub message: String,
    /// User rows absent from the reference (bounded).
    pub extra: Vec<Row>,
    /// Reference rows absent from the user result (bounded).
    pub missing: Vec<Row>,
}

impl Verdict {
    pub fn correct() -> Self {
        Self {
            outcome: Outcome::Correct,
            message: CORRECT_MESSAGE.to_string(),
            extra: Vec::new(),
            missing: Vec::new(),
        }
    }

    pub fn unverifiable(reference_error: &str) -> Self {
        Self {
            outcome: Outcome::Unverifiable,
            message: format!("Reference query failed: {reference_error}"),
            extra: Vec::new(),
            missing: Vec::new(),
        }
    }

    pub fn is_correct(&self) -> bool {
        self.outcome == Outcome::Correct
    }
}

/// Compare against a precomputed reference, which may itself have failed.
pub fn compare_results(
    user: &ResultSet,
    reference: &Result<ResultSet, String>,
    opts: &CompareOptions,
) -> Verdict {
    match reference {
        Ok(reference) => compare(user, reference, opts),
        Err(e) => Verdict::unverifiable(e),
    }
}

pub fn compare(user: &ResultSet, reference: &ResultSet, opts: &CompareOptions) -> Verdict {
    let uk = user.keys();
    let rk = reference.keys();

    let equal = if opts.enforce_order {
        uk == rk
    } else {
        match opts.unordered {
            UnorderedPolicy::Set => as_set(&uk) == as_set(&rk),
            UnorderedPolicy::Multiset => counts(&uk) == counts(&rk),
        }
    };
    if equal {
        return Verdict::correct();
    }

    let (extra, missing) = match (opts.enforce_order, opts.unordered) {
        (false, UnorderedPolicy::Multiset) => (
            surplus(&user.rows, &uk, &rk, opts.diff_examples),
            surplus(&reference.rows, &rk, &uk, opts.diff_examples),
        ),
        _ => (
            absent(&user.rows, &uk, &rk, opts.diff_examples),
            absent(&reference.rows, &rk, &uk, opts.diff_examples),
        ),
    };

    let mut message = String::new();
    if !extra.is_empty() {
        message.push_str(&format!(
            "Rows in your result but NOT expected (examples up to {}): {}\n",
            opts.diff_examples,
            render_rows(&extra)
        ));
    }
    if !missing.is_empty() {
        message.push_str(&format!(
            "Rows expected but NOT in your result (examples up to {}): {}\n",
            opts.diff_examples,
            render_rows(&missing)
        ));
    }
    if message.is_empty() {
        message = ORDERING_MESSAGE.to_string();
    }

    Verdict {
        outcome: Outcome::Incorrect,
        message,
        extra,
        missing,
    }
}

fn as_set(keys: &[RowKey]) -> HashSet<&RowKey> {
    keys.iter().collect()
}

fn counts(keys: &[RowKey]) -> HashMap<&RowKey, usize> {
    let mut m = HashMap::new();
    for k in keys {
        *m.entry(k).or_insert(0) += 1;
    }
    m
}

/// Rows of `rows` whose key does not occur in `other` at all. Duplicates are
/// kept.
fn absent(rows: &[Row], keys: &[RowKey], other: &[RowKey], limit: usize) -> Vec<Row> {
    let other = as_set(other);
    rows.iter()
        .zip(keys)
        .filter(|(_, k)| !other.contains(k))
        .map(|(r, _)| r.clone())
        .take(limit)
        .collect()
}

/// Rows of `rows` beyond the number of times their key occurs in `other`.
fn surplus(rows: &[Row], keys: &[RowKey], other: &[RowKey], limit: usize) -> Vec<Row> {
    let mut budget = counts(other);
    let mut out = Vec::new();
    for (row, key) in rows.iter().zip(keys) {
        match budget.get_mut(key) {
            Some(n) if *n > 0 => *n -= 1,
            _ => out.push(row.clone()),
        }
    }
    out.truncate(limit);
    out
}

pub fn render_rows(rows: &[Row]) -> String {
    let inner: Vec<String> = rows.iter().map(ToString::to_string).collect();
    format!("[{}]", inner.join(", "))
}
