//! FixtureStore: the in-memory sample database every query runs against.
//!
//! Seeded once by an explicit call, then switched to `query_only` so all
//! later access is read-only.

pub mod schema;

use crate::errors::QuizError;
use rusqlite::{params, Connection};

pub struct FixtureStore {
    conn: Connection,
}

impl FixtureStore {
    /// Build the school dataset (Students, Courses, Enrollments).
    pub fn seeded() -> Result<Self, QuizError> {
        let conn = Connection::open_in_memory().map_err(fixture_err)?;
        seed_school(&conn).map_err(fixture_err)?;
        let store = Self::finish(conn)?;
        tracing::info!(
            students = schema::STUDENTS.len(),
            courses = schema::COURSES.len(),
            enrollments = schema::ENROLLMENTS.len(),
            "fixture store seeded"
        );
        Ok(store)
    }

    #[cfg(test)]
    fn from_script(script: &str) -> Result<Self, QuizError> {
        let conn = Connection::open_in_memory().map_err(fixture_err)?;
        conn.execute_batch(script).map_err(fixture_err)?;
        Self::finish(conn)
    }

    fn finish(conn: Connection) -> Result<Self, QuizError> {
        conn.pragma_update(None, "query_only", true)
            .map_err(fixture_err)?;
        Ok(Self { conn })
    }

    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn seed_school(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(schema::DDL)?;

    let mut stmt =
        conn.prepare("INSERT INTO Students (name, city, marks, age) VALUES (?1, ?2, ?3, ?4)")?;
    for (name, city, marks, age) in schema::STUDENTS {
        stmt.execute(params![name, city, marks, age])?;
    }

    let mut stmt = conn.prepare("INSERT INTO Courses (course_name, instructor) VALUES (?1, ?2)")?;
    for (course, instructor) in schema::COURSES {
        stmt.execute(params![course, instructor])?;
    }

    let mut stmt =
        conn.prepare("INSERT INTO Enrollments (student_id, course_id, grade) VALUES (?1, ?2, ?3)")?;
    for (student_id, course_id, grade) in schema::ENROLLMENTS {
        stmt.execute(params![student_id, course_id, grade])?;
    }
    Ok(())
}

fn fixture_err(e: rusqlite::Error) -> QuizError {
    QuizError::Fixture(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(store: &FixtureStore, table: &str) -> i64 {
        store
            .connection()
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0))
            .unwrap()
    }

    #[test]
    fn seeds_all_tables() {
        let store = FixtureStore::seeded().unwrap();
        assert_eq!(count(&store, "Students"), 8);
        assert_eq!(count(&store, "Courses"), 4);
        assert_eq!(count(&store, "Enrollments"), 8);
    }

    #[test]
    fn anaya_has_null_marks() {
        let store = FixtureStore::seeded().unwrap();
        let marks: Option<i64> = store
            .connection()
            .query_row("SELECT marks FROM Students WHERE name = 'Anaya'", [], |r| r.get(0))
            .unwrap();
        assert_eq!(marks, None);
    }

    #[test]
    fn store_is_read_only_after_seeding() {
        let store = FixtureStore::seeded().unwrap();
        let err = store
            .connection()
            .execute("DELETE FROM Students", [])
            .unwrap_err();
        assert!(err.to_string().contains("readonly"), "got: {err}");
        assert_eq!(count(&store, "Students"), 8);
    }

    #[test]
    fn broken_script_is_a_fixture_error() {
        let err = FixtureStore::from_script("CREATE TABLE (").err().unwrap();
        assert!(matches!(err, QuizError::Fixture(_)));
    }
}
