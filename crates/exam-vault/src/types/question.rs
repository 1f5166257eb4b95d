//! Question record, the only persisted entity

use serde::{Deserialize, Serialize};

/// Prefix every public question path starts with
pub const PUBLIC_PREFIX: &str = "/static";

/// One uploaded exam paper: course/exam keys plus the public URL of the PDF
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    /// Course identifier as supplied by the uploader
    pub course_code: String,
    /// Exam identifier as supplied by the uploader
    pub exam: String,
    /// Public URL of the stored PDF, always under `/static/`
    pub questions_path: String,
}

impl QuestionRecord {
    /// Create a new record
    pub fn new(
        course_code: impl Into<String>,
        exam: impl Into<String>,
        questions_path: impl Into<String>,
    ) -> Self {
        Self {
            course_code: course_code.into(),
            exam: exam.into(),
            questions_path: questions_path.into(),
        }
    }

    /// Whether the path points into the public static tree
    pub fn has_public_path(&self) -> bool {
        self.questions_path.starts_with(PUBLIC_PREFIX)
            && self.questions_path[PUBLIC_PREFIX.len()..].starts_with('/')
    }
}
