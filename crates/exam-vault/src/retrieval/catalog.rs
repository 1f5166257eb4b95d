//! Course, exam and question listings

use crate::error::{Error, Result};
use crate::providers::QuestionStore;
use crate::types::QuestionRecord;

/// Distinct course codes
pub async fn list_courses(store: &dyn QuestionStore) -> Result<Vec<String>> {
    store.distinct_courses().await
}

/// Distinct exams recorded for a course; order is not meaningful
pub async fn list_exams(store: &dyn QuestionStore, course_code: &str) -> Result<Vec<String>> {
    store.distinct_exams(course_code).await
}

/// All records for a course and exam, or `NotFound` when there are none
pub async fn list_questions(
    store: &dyn QuestionStore,
    course_code: &str,
    exam: &str,
) -> Result<Vec<QuestionRecord>> {
    let questions = store.find(course_code, exam, None).await?;
    if questions.is_empty() {
        return Err(Error::not_found("No questions found"));
    }
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SqliteQuestionStore;

    fn store_with(records: &[(&str, &str, &str)]) -> SqliteQuestionStore {
        let db = SqliteQuestionStore::in_memory().unwrap();
        for (course, exam, file) in records {
            db.insert_record(&QuestionRecord::new(
                *course,
                *exam,
                format!("/static/{}/{}/{}", course, exam, file),
            ))
            .unwrap();
        }
        db
    }

    #[tokio::test]
    async fn test_exams_are_a_set() {
        let db = store_with(&[
            ("CS101", "A", "1.pdf"),
            ("CS101", "A", "2.pdf"),
            ("CS101", "B", "3.pdf"),
        ]);

        let mut exams = list_exams(&db, "CS101").await.unwrap();
        exams.sort();
        assert_eq!(exams, vec!["A".to_string(), "B".to_string()]);
    }

    #[tokio::test]
    async fn test_exams_for_unknown_course() {
        let db = store_with(&[("CS101", "A", "1.pdf")]);
        assert!(list_exams(&db, "MA201").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_questions_not_found() {
        let db = store_with(&[("CS101", "A", "1.pdf")]);
        let err = list_questions(&db, "CS101", "B").await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_questions_returns_all_matches() {
        let db = store_with(&[
            ("CS101", "A", "1.pdf"),
            ("CS101", "A", "2.pdf"),
            ("CS101", "A", "3.pdf"),
            ("CS101", "B", "4.pdf"),
        ]);

        let questions = list_questions(&db, "CS101", "A").await.unwrap();
        assert_eq!(questions.len(), 3);
        assert!(questions.iter().all(|q| q.course_code == "CS101" && q.exam == "A"));
    }

    #[tokio::test]
    async fn test_courses() {
        let db = store_with(&[("CS101", "A", "1.pdf"), ("CS101", "B", "2.pdf")]);
        assert_eq!(list_courses(&db).await.unwrap(), vec!["CS101".to_string()]);
    }
}
