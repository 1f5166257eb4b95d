//! Question store provider trait

use async_trait::async_trait;

use crate::error::Result;
use crate::types::QuestionRecord;

/// Trait for the collection holding question records
///
/// Implementations:
/// - `SqliteQuestionStore`: embedded SQLite database
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Insert one record
    async fn insert(&self, record: &QuestionRecord) -> Result<()>;

    /// Distinct course codes across all records
    async fn distinct_courses(&self) -> Result<Vec<String>>;

    /// Distinct exams among records of one course
    async fn distinct_exams(&self, course_code: &str) -> Result<Vec<String>>;

    /// Records matching course and exam exactly, at most `limit` when given
    async fn find(
        &self,
        course_code: &str,
        exam: &str,
        limit: Option<usize>,
    ) -> Result<Vec<QuestionRecord>>;

    /// Check if the store is reachable
    async fn health_check(&self) -> Result<bool>;

    /// Get provider name for logging
    fn name(&self) -> &str;
}
