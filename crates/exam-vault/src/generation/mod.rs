//! Chat answer generation: context retrieval, prompt templating, LLM dispatch

pub mod chat;
pub mod prompt;

pub use chat::{answer_query, assemble_prompt, MAX_CONTEXT_RECORDS};
pub use prompt::PromptBuilder;
