use crate::errors::QuizError;
use crate::fixture::FixtureStore;
use crate::model::{ResultSet, Row, Value};
use rusqlite::types::ValueRef;

pub const MULTIPLE_STATEMENTS: &str = "You can only execute one statement at a time.";

/// Run an already admitted query and materialize its output.
///
/// Engine failures are returned verbatim as [`QuizError::QueryExecution`].
pub fn execute(store: &FixtureStore, sql: &str) -> Result<ResultSet, QuizError> {
    if has_trailing_statement(sql) {
        return Err(QuizError::QueryExecution(MULTIPLE_STATEMENTS.to_string()));
    }

    let conn = store.connection();
    let mut stmt = conn.prepare(sql).map_err(engine_err)?;
    if !stmt.readonly() {
        return Err(QuizError::QueryExecution(
            "attempt to write a readonly database".to_string(),
        ));
    }

    let columns: Vec<String> = stmt
        .column_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    let width = columns.len();

    let mut rows = stmt.query([]).map_err(engine_err)?;
    let mut out = Vec::new();
    while let Some(row) = rows.next().map_err(engine_err)? {
        let mut cells = Vec::with_capacity(width);
        for i in 0..width {
            cells.push(to_value(row.get_ref(i).map_err(engine_err)?));
        }
        out.push(Row(cells));
    }

    tracing::debug!(columns = width, rows = out.len(), "query executed");
    Ok(ResultSet::new(columns, out))
}

fn to_value(v: ValueRef<'_>) -> Value {
    match v {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(f) => Value::Real(f),
        ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Value::Blob(b.to_vec()),
    }
}

fn engine_err(e: rusqlite::Error) -> QuizError {
    QuizError::QueryExecution(e.to_string())
}

#[derive(Clone, Copy, PartialEq)]
enum Scan {
    Code,
    Quoted(char),
    LineComment,
    BlockComment,
}

struct ScanEnd {
    state: Scan,
    terminated: bool,
    trailing: bool,
}

/// Walk `sql` outside quotes and comments, noting the first `;` and whether
/// anything but whitespace, comments or `;` follows it.
fn scan(sql: &str) -> ScanEnd {
    let mut state = Scan::Code;
    let mut terminated = false;
    let mut trailing = false;
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            Scan::Quoted(close) => {
                if c == close {
                    state = Scan::Code;
                }
            }
            Scan::LineComment => {
                if c == '\n' {
                    state = Scan::Code;
                }
            }
            Scan::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = Scan::Code;
                }
            }
            Scan::Code => match c {
                '-' if chars.peek() == Some(&'-') => {
                    chars.next();
                    state = Scan::LineComment;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    state = Scan::BlockComment;
                }
                ';' => terminated = true,
                c if c.is_whitespace() => {}
                _ if terminated => {
                    trailing = true;
                    break;
                }
                '\'' | '"' | '`' => state = Scan::Quoted(c),
                '[' => state = Scan::Quoted(']'),
                _ => {}
            },
        }
    }
    ScanEnd {
        state,
        terminated,
        trailing,
    }
}

fn has_trailing_statement(sql: &str) -> bool {
    scan(sql).trailing
}

/// True once `sql` holds a `;` outside quotes and comments and does not end
/// inside an open quote. A `-- comment` after the terminator is allowed.
pub fn is_terminated(sql: &str) -> bool {
    let end = scan(sql);
    end.terminated && !matches!(end.state, Scan::Quoted(_))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> FixtureStore {
        FixtureStore::seeded().unwrap()
    }

    #[test]
    fn returns_columns_in_projection_order() {
        let rs = execute(
            &store(),
            "SELECT city, name FROM Students WHERE student_id = 1",
        )
        .unwrap();
        assert_eq!(rs.columns, vec!["city", "name"]);
        assert_eq!(
            rs.rows,
            vec![Row(vec![Value::from("Delhi"), Value::from("Riya")])]
        );
    }

    #[test]
    fn aliases_become_column_names() {
        let rs = execute(&store(), "SELECT COUNT(*) AS total_students FROM Students;").unwrap();
        assert_eq!(rs.columns, vec!["total_students"]);
        assert_eq!(rs.rows, vec![Row(vec![Value::Integer(8)])]);
    }

    #[test]
    fn nulls_and_reals_are_preserved() {
        let rs = execute(
            &store(),
            "SELECT marks, AVG(age) FROM Students WHERE name = 'Anaya'",
        )
        .unwrap();
        assert_eq!(rs.rows[0].0[0], Value::Null);
        assert_eq!(rs.rows[0].0[1], Value::Real(21.0));
    }

    #[test]
    fn unknown_table_surfaces_engine_message() {
        let err = execute(&store(), "SELECT * FROM Teachers").unwrap_err();
        match err {
            QuizError::QueryExecution(msg) => assert!(msg.contains("no such table: Teachers")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn syntax_error_is_execution_error() {
        let err = execute(&store(), "SELECT FROM WHERE").unwrap_err();
        assert!(matches!(err, QuizError::QueryExecution(_)));
    }

    #[test]
    fn second_statement_is_refused() {
        let err = execute(&store(), "SELECT 1; SELECT 2;").unwrap_err();
        assert_eq!(
            err,
            QuizError::QueryExecution(MULTIPLE_STATEMENTS.to_string())
        );
    }

    #[test]
    fn trailing_terminators_and_comments_are_fine() {
        assert!(!has_trailing_statement("SELECT 1;"));
        assert!(!has_trailing_statement("SELECT 1;;  \n"));
        assert!(!has_trailing_statement("SELECT 1; -- done"));
        assert!(!has_trailing_statement("SELECT 1; /* done */"));
        assert!(!has_trailing_statement("SELECT ';x' AS s"));
        assert!(!has_trailing_statement("SELECT 1 -- ; SELECT 2"));
        assert!(has_trailing_statement("SELECT 1; x"));
        assert!(has_trailing_statement("SELECT 'a;'; SELECT 2"));
    }

    #[test]
    fn termination_ignores_quotes_and_comments() {
        assert!(is_terminated("SELECT name FROM Students;"));
        assert!(is_terminated("SELECT name FROM Students; -- mine"));
        assert!(is_terminated("SELECT name\nFROM Students; /* done */"));
        assert!(!is_terminated("SELECT name FROM Students"));
        assert!(!is_terminated("SELECT name FROM Students -- no end;"));
        assert!(!is_terminated("SELECT 'a;\nb"));
        assert!(is_terminated("SELECT 'a;\nb';"));
        assert!(is_terminated("SELECT 1; SELECT 2"));
    }

    #[test]
    fn writes_are_refused_even_if_admitted_elsewhere() {
        let err = execute(&store(), "DELETE FROM Students").unwrap_err();
        assert!(matches!(err, QuizError::QueryExecution(_)));
        let rs = execute(&store(), "SELECT COUNT(*) FROM Students").unwrap();
        assert_eq!(rs.rows[0].0[0], Value::Integer(8));
    }
}
