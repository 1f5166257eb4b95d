//! Exam vault server binary
//!
//! Run with: cargo run -p exam-vault --bin exam-vault-server

use exam_vault::{config::AppConfig, server::ExamVaultServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; real environment variables still apply
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "exam_vault=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - Static dir: {}", config.storage.static_dir.display());
    tracing::info!("  - Database: {}", config.storage.database_path.display());
    tracing::info!("  - LLM model: {}", config.llm.model);

    // Missing API key is fatal here
    let server = ExamVaultServer::new(config)?;

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("\nEndpoints:");
    println!("  POST /upload_question                - Upload an exam PDF");
    println!("  GET  /get_courses                    - List courses");
    println!("  GET  /get_exams/:course              - List exams of a course");
    println!("  GET  /get_questions/:course/:exam    - List uploaded papers");
    println!("  POST /chat                           - Ask the AI tutor");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
