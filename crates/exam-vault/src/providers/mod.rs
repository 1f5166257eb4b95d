//! Provider abstractions for the question store and the language model
//!
//! Handlers only see these traits, so the SQLite store and the Gemini client
//! can be swapped (or faked in tests) without touching the routes.

pub mod gemini;
pub mod llm;
pub mod question_store;

pub use gemini::GeminiClient;
pub use llm::LlmProvider;
pub use question_store::QuestionStore;
