//! Request types

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Body of `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The student's question
    pub query: String,
    /// Optional course to pull context from
    #[serde(default)]
    pub course: Option<String>,
    /// Optional exam to pull context from (needs `course` as well)
    #[serde(default)]
    pub exam: Option<String>,
}

impl ChatRequest {
    /// Course and exam, when both are present and non-empty
    pub fn context_keys(&self) -> Option<(&str, &str)> {
        match (self.course.as_deref(), self.exam.as_deref()) {
            (Some(course), Some(exam)) if !course.is_empty() && !exam.is_empty() => {
                Some((course, exam))
            }
            _ => None,
        }
    }
}

/// A parsed upload form
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Course identifier (unsanitized)
    pub course: String,
    /// Exam identifier (unsanitized)
    pub exam: String,
    /// Client-supplied filename, possibly with directory components
    pub filename: Option<String>,
    /// Declared media type of the file part
    pub content_type: Option<String>,
    /// File content
    pub data: Bytes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_optional_fields() {
        let req: ChatRequest = serde_json::from_str(r#"{"query": "What is a B-tree?"}"#).unwrap();
        assert_eq!(req.query, "What is a B-tree?");
        assert!(req.context_keys().is_none());
    }

    #[test]
    fn test_context_keys_need_both() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"query": "q", "course": "CS101"}"#).unwrap();
        assert!(req.context_keys().is_none());

        let req: ChatRequest =
            serde_json::from_str(r#"{"query": "q", "course": "CS101", "exam": ""}"#).unwrap();
        assert!(req.context_keys().is_none());

        let req: ChatRequest =
            serde_json::from_str(r#"{"query": "q", "course": "CS101", "exam": "Final"}"#).unwrap();
        assert_eq!(req.context_keys(), Some(("CS101", "Final")));
    }
}
