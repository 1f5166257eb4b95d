//! Application state for the exam vault server

use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::Result;
use crate::providers::{GeminiClient, LlmProvider, QuestionStore};
use crate::storage::{BlobStore, SqliteQuestionStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: AppConfig,
    /// PDF blob tree served under /static
    blobs: BlobStore,
    /// Question record store (SQLite by default)
    questions: Arc<dyn QuestionStore>,
    /// LLM provider for chat (Gemini by default)
    llm: Arc<dyn LlmProvider>,
}

impl AppState {
    /// Create application state from configuration.
    ///
    /// Fails when the API key is missing, before anything is created on disk.
    pub fn new(config: AppConfig) -> Result<Self> {
        tracing::info!("Initializing exam vault state...");

        let llm = Arc::new(GeminiClient::new(&config.llm)?);
        tracing::info!("LLM provider initialized ({} / {})", llm.name(), llm.model());

        let blobs = BlobStore::new(&config.storage.static_dir)?;
        tracing::info!("Blob storage at {}", blobs.root().display());

        let questions = Arc::new(SqliteQuestionStore::new(&config.storage.database_path)?);
        tracing::info!(
            "Question store initialized ({})",
            config.storage.database_path.display()
        );

        Ok(Self::from_parts(config, blobs, questions, llm))
    }

    /// Assemble state from already constructed parts
    pub fn from_parts(
        config: AppConfig,
        blobs: BlobStore,
        questions: Arc<dyn QuestionStore>,
        llm: Arc<dyn LlmProvider>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                blobs,
                questions,
                llm,
            }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get blob storage
    pub fn blobs(&self) -> &BlobStore {
        &self.inner.blobs
    }

    /// Get the question store
    pub fn questions(&self) -> &dyn QuestionStore {
        self.inner.questions.as_ref()
    }

    /// Get the LLM provider
    pub fn llm(&self) -> &dyn LlmProvider {
        self.inner.llm.as_ref()
    }

    /// Check if the server can serve requests
    pub async fn is_ready(&self) -> bool {
        match self.inner.questions.health_check().await {
            Ok(healthy) => healthy,
            Err(e) => {
                tracing::warn!("Question store health check failed: {}", e);
                false
            }
        }
    }
}
