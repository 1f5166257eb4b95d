//! Exam paper upload endpoint

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};

use crate::error::{Error, Result};
use crate::ingestion;
use crate::server::state::AppState;
use crate::types::{UploadRequest, UploadResponse};

/// POST /upload_question - Multipart form with `course`, `exam` and `pdf`
pub async fn upload_question(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let request = read_upload_form(multipart).await?;

    let record = ingestion::ingest_question(state.blobs(), state.questions(), request).await?;

    Ok(Json(UploadResponse::success(record.questions_path)))
}

/// Collect the three form fields; unknown fields are ignored
async fn read_upload_form(mut multipart: Multipart) -> Result<UploadRequest> {
    let mut course = None;
    let mut exam = None;
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| form_error("multipart field", e))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "course" => {
                course = Some(field.text().await.map_err(|e| form_error("course", e))?);
            }
            "exam" => {
                exam = Some(field.text().await.map_err(|e| form_error("exam", e))?);
            }
            "pdf" => {
                let filename = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await.map_err(|e| form_error("file", e))?;
                file = Some((filename, content_type, data));
            }
            other => {
                tracing::debug!("Ignoring unexpected form field '{}'", other);
            }
        }
    }

    let course = course.ok_or_else(|| Error::BadRequest("Missing form field: course".to_string()))?;
    let exam = exam.ok_or_else(|| Error::BadRequest("Missing form field: exam".to_string()))?;
    let (filename, content_type, data) =
        file.ok_or_else(|| Error::BadRequest("Missing form field: pdf".to_string()))?;

    Ok(UploadRequest {
        course,
        exam,
        filename,
        content_type,
        data,
    })
}

/// Map a multipart read failure, keeping 413 for oversized bodies
fn form_error(part: &str, e: MultipartError) -> Error {
    let message = format!("Failed to read {}: {}", part, e.body_text());
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        Error::PayloadTooLarge(message)
    } else {
        Error::BadRequest(message)
    }
}
