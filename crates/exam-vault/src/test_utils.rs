//! Test doubles for the provider traits

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::providers::{LlmProvider, QuestionStore};
use crate::types::QuestionRecord;

/// LLM that answers with a canned reply and remembers every prompt
pub struct RecordingLlm {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl RecordingLlm {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl LlmProvider for RecordingLlm {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().push(prompt.to_string());
        Ok(self.reply.clone())
    }

    fn name(&self) -> &str {
        "recording"
    }

    fn model(&self) -> &str {
        "canned"
    }
}

/// LLM that always fails
pub struct FailingLlm;

#[async_trait]
impl LlmProvider for FailingLlm {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Err(Error::ai_service("upstream rejected key sk-test-123"))
    }

    fn name(&self) -> &str {
        "failing"
    }

    fn model(&self) -> &str {
        "none"
    }
}

/// Store whose inserts always fail; reads return nothing
pub struct FailingStore;

#[async_trait]
impl QuestionStore for FailingStore {
    async fn insert(&self, _record: &QuestionRecord) -> Result<()> {
        Err(Error::internal("simulated insert failure"))
    }

    async fn distinct_courses(&self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    async fn distinct_exams(&self, _course_code: &str) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    async fn find(
        &self,
        _course_code: &str,
        _exam: &str,
        _limit: Option<usize>,
    ) -> Result<Vec<QuestionRecord>> {
        Ok(Vec::new())
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(false)
    }

    fn name(&self) -> &str {
        "failing"
    }
}
