use crate::compare::{Outcome, Verdict};
use crate::model::{ResultSet, Row, Value};

/// Guidance printed after an incorrect answer.
pub const HINTS: &[&str] = &[
    "Check column order and names (the reference columns must match).",
    "Check `WHERE` conditions and `GROUP BY`/`HAVING` logic.",
    "Use `ORDER BY` if the question expects a certain order and you enabled enforced order.",
    "If your DB dialect differs (Postgres vs SQLite), adjust functions (`RIGHT` -> `SUBSTR(..., -3)`, `ILIKE` -> `LOWER(...) LIKE`).",
];

fn cell(v: &Value) -> String {
    match v {
        Value::Text(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render at most `limit` rows as a plain aligned table.
#[must_use]
pub fn render_table(rs: &ResultSet, limit: usize) -> String {
    let rows: Vec<Vec<String>> = rs
        .head(limit)
        .iter()
        .map(|r: &Row| r.values().iter().map(cell).collect())
        .collect();

    let mut widths: Vec<usize> = rs.columns.iter().map(|c| c.chars().count()).collect();
    for r in &rows {
        for (i, c) in r.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(c.chars().count());
            }
        }
    }

    let line = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{c:<w$}"))
            .collect();
        format!("| {} |", padded.join(" | "))
    };
    let rule = format!(
        "+{}+",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&line(&rs.columns));
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    for r in &rows {
        out.push_str(&line(r));
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    if rs.len() > rows.len() {
        out.push_str(&format!("... {} more row(s)\n", rs.len() - rows.len()));
    }
    out
}

#[must_use]
pub fn verdict_line(verdict: &Verdict) -> String {
    let tag = match verdict.outcome {
        Outcome::Correct => "✅ correct",
        Outcome::Incorrect => "❌ incorrect",
        Outcome::Unverifiable => "⚠️  unverifiable",
    };
    format!("{tag}: {}", verdict.message.trim_end())
}

#[must_use]
pub fn hints_block() -> String {
    let mut out = String::from("Hints:\n");
    for h in HINTS {
        out.push_str("  - ");
        out.push_str(h);
        out.push('\n');
    }
    out
}
