//! Tutor chat flow

use crate::error::{Error, Result};
use crate::providers::{LlmProvider, QuestionStore};
use crate::types::ChatRequest;

use super::prompt::PromptBuilder;

/// Most records pulled into a chat context
pub const MAX_CONTEXT_RECORDS: usize = 5;

/// Build the prompt for a chat request, pulling course context when both
/// course and exam are given.
pub async fn assemble_prompt(store: &dyn QuestionStore, request: &ChatRequest) -> Result<String> {
    let context = match request.context_keys() {
        Some((course, exam)) => {
            let records = store.find(course, exam, Some(MAX_CONTEXT_RECORDS)).await?;
            tracing::debug!(
                "Chat context for {}/{}: {} record(s)",
                course,
                exam,
                records.len()
            );
            PromptBuilder::build_context(&records)?
        }
        None => String::new(),
    };

    Ok(PromptBuilder::build_chat_prompt(&request.query, &context))
}

/// Answer a chat request. Provider failures are logged and collapsed into a
/// generic AI service error.
pub async fn answer_query(
    store: &dyn QuestionStore,
    llm: &dyn LlmProvider,
    request: &ChatRequest,
) -> Result<String> {
    let prompt = assemble_prompt(store, request).await?;

    match llm.generate(&prompt).await {
        Ok(text) => Ok(text),
        Err(e) => {
            tracing::error!("Error calling {} ({}): {}", llm.name(), llm.model(), e);
            Err(Error::ai_service(e.to_string()))
        }
    }
}
