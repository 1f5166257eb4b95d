//! Core types for the exam vault

pub mod question;
pub mod request;
pub mod response;

pub use question::QuestionRecord;
pub use request::{ChatRequest, UploadRequest};
pub use response::{ChatResponse, CoursesResponse, ExamsResponse, QuestionsResponse, UploadResponse};
