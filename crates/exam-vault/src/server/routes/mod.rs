//! API routes for the exam vault server

pub mod catalog;
pub mod chat;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        // Upload - with larger body limit for PDFs
        .route(
            "/upload_question",
            post(upload::upload_question).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        // Catalog
        .route("/get_courses", get(catalog::get_courses))
        .route("/get_exams/:course_code", get(catalog::get_exams))
        .route("/get_questions/:course_code/:exam", get(catalog::get_questions))
        // Tutor chat
        .route("/chat", post(chat::handle_chat))
}
