//! Response payloads for the HTTP API

use serde::{Deserialize, Serialize};

use super::QuestionRecord;

/// Response for a successful upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    /// Public URL of the stored PDF
    pub path: String,
}

impl UploadResponse {
    pub fn success(path: impl Into<String>) -> Self {
        Self {
            message: "Upload successful".to_string(),
            path: path.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoursesResponse {
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamsResponse {
    pub exams: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<QuestionRecord>,
}

/// Response for `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Model output, verbatim
    pub response: String,
}
