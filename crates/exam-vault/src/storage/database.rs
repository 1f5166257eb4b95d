//! SQLite database for question records

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::providers::QuestionStore;
use crate::types::QuestionRecord;

/// SQLite-based question store
#[derive(Clone)]
pub struct SqliteQuestionStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteQuestionStore {
    /// Create or open the database at the given path
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)
            .map_err(|e| Error::Internal(format!("Failed to open database: {}", e)))?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };

        db.migrate()?;
        Ok(db)
    }

    /// Create an in-memory database (for testing)
    #[cfg(test)]
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::Internal(format!("Failed to open in-memory database: {}", e)))?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };

        db.migrate()?;
        Ok(db)
    }

    /// Create the schema if it does not exist yet
    fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock();

        conn.execute_batch(
            r#"
            PRAGMA journal_mode=WAL;
            PRAGMA synchronous=NORMAL;
        "#,
        )
        .map_err(|e| Error::Internal(format!("Failed to set pragmas: {}", e)))?;

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS questions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                course_code TEXT NOT NULL,
                exam TEXT NOT NULL,
                questions_path TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_questions_course ON questions(course_code);
            CREATE INDEX IF NOT EXISTS idx_questions_course_exam ON questions(course_code, exam);
        "#,
        )
        .map_err(|e| Error::Internal(format!("Failed to run migrations: {}", e)))?;

        tracing::info!("Database migrations complete");
        Ok(())
    }

    // ==================== Sync Operations ====================

    /// Insert a question record
    pub fn insert_record(&self, record: &QuestionRecord) -> Result<()> {
        let conn = self.conn.lock();

        conn.execute(
            "INSERT INTO questions (course_code, exam, questions_path, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                record.course_code,
                record.exam,
                record.questions_path,
                Utc::now().to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    /// List distinct course codes
    pub fn list_courses(&self) -> Result<Vec<String>> {
        let conn = self.conn.lock();

        let mut stmt = conn.prepare("SELECT DISTINCT course_code FROM questions")?;
        let courses = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;

        Ok(courses)
    }

    /// List distinct exams for a course
    pub fn list_exams(&self, course_code: &str) -> Result<Vec<String>> {
        let conn = self.conn.lock();

        let mut stmt = conn.prepare("SELECT DISTINCT exam FROM questions WHERE course_code = ?1")?;
        let exams = stmt
            .query_map(params![course_code], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;

        Ok(exams)
    }

    /// Find records for a course and exam
    pub fn find_records(
        &self,
        course_code: &str,
        exam: &str,
        limit: Option<usize>,
    ) -> Result<Vec<QuestionRecord>> {
        let conn = self.conn.lock();

        // SQLite treats a negative LIMIT as unbounded
        let limit = limit.map(|l| l as i64).unwrap_or(-1);

        let mut stmt = conn.prepare(
            "SELECT course_code, exam, questions_path FROM questions
             WHERE course_code = ?1 AND exam = ?2
             ORDER BY id
             LIMIT ?3",
        )?;
        let records = stmt
            .query_map(params![course_code, exam, limit], row_to_question)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(records)
    }

    /// Total number of records
    pub fn count(&self) -> Result<usize> {
        let conn = self.conn.lock();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn row_to_question(row: &rusqlite::Row) -> rusqlite::Result<QuestionRecord> {
    Ok(QuestionRecord {
        course_code: row.get(0)?,
        exam: row.get(1)?,
        questions_path: row.get(2)?,
    })
}

/// Run a blocking database call off the async executor
async fn blocking<T, F>(store: &SqliteQuestionStore, f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&SqliteQuestionStore) -> Result<T> + Send + 'static,
{
    let store = store.clone();
    tokio::task::spawn_blocking(move || f(&store))
        .await
        .map_err(|e| Error::Internal(format!("Task join error: {}", e)))?
}

#[async_trait]
impl QuestionStore for SqliteQuestionStore {
    async fn insert(&self, record: &QuestionRecord) -> Result<()> {
        let record = record.clone();
        blocking(self, move |db| db.insert_record(&record)).await
    }

    async fn distinct_courses(&self) -> Result<Vec<String>> {
        blocking(self, |db| db.list_courses()).await
    }

    async fn distinct_exams(&self, course_code: &str) -> Result<Vec<String>> {
        let course_code = course_code.to_string();
        blocking(self, move |db| db.list_exams(&course_code)).await
    }

    async fn find(
        &self,
        course_code: &str,
        exam: &str,
        limit: Option<usize>,
    ) -> Result<Vec<QuestionRecord>> {
        let course_code = course_code.to_string();
        let exam = exam.to_string();
        blocking(self, move |db| db.find_records(&course_code, &exam, limit)).await
    }

    async fn health_check(&self) -> Result<bool> {
        blocking(self, |db| db.count().map(|_| true)).await
    }

    fn name(&self) -> &str {
        "sqlite"
    }
}
