//! Prompt templates for the tutor chat

use crate::error::Result;
use crate::types::QuestionRecord;

/// Sentence introducing the serialized course records
pub const CONTEXT_INTRO: &str = "Use the following information from the course material as context:\n";

/// Prompt builder for tutor chat
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the context block from matching records; empty when there are none
    pub fn build_context(records: &[QuestionRecord]) -> Result<String> {
        if records.is_empty() {
            return Ok(String::new());
        }

        let mut context = String::from(CONTEXT_INTRO);
        context.push_str(&serde_json::to_string(records)?);
        Ok(context)
    }

    /// Build the full tutor prompt
    pub fn build_chat_prompt(query: &str, context: &str) -> String {
        format!(
            r#"You are a friendly and helpful AI tutor.
Your goal is to answer student questions based on the provided context.
If the context is empty or doesn't contain the answer, use your general knowledge but mention that the topic might not be in the specified course material.

{context}

Now, please answer this student's question: "{query}"
"#,
            context = context,
            query = query
        )
    }
}
