//! exam-vault: exam paper upload, catalog browsing and AI tutor chat
//!
//! Students upload PDFs tagged by course and exam, browse what has been
//! uploaded, and ask a tutor model questions with optional course context.

pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod providers;
pub mod retrieval;
pub mod server;
pub mod storage;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use types::{ChatRequest, QuestionRecord};
