//! Exam paper upload flow

use crate::error::{Error, Result};
use crate::providers::QuestionStore;
use crate::storage::BlobStore;
use crate::types::{QuestionRecord, UploadRequest};

/// The only accepted media type
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Store an uploaded paper and record it.
///
/// Nothing touches the disk until the media type and identifiers are valid.
/// If the record insert fails, the written file is removed again (best
/// effort) and a persistence failure is returned.
pub async fn ingest_question(
    blobs: &BlobStore,
    store: &dyn QuestionStore,
    request: UploadRequest,
) -> Result<QuestionRecord> {
    if request.content_type.as_deref() != Some(PDF_MEDIA_TYPE) {
        tracing::warn!("Rejected upload with media type {:?}", request.content_type);
        return Err(Error::InvalidMediaType);
    }

    let safe_course = BlobStore::sanitize_segment("course", &request.course)?;
    let safe_exam = BlobStore::sanitize_segment("exam", &request.exam)?;

    let stored = blobs
        .store(&safe_course, &safe_exam, request.filename.as_deref(), &request.data)
        .await?;

    let record = QuestionRecord::new(request.course, request.exam, stored.public_url);

    if let Err(e) = store.insert(&record).await {
        tracing::error!(
            "Insert into {} failed for {}, removing file: {}",
            store.name(),
            record.questions_path,
            e
        );
        blobs.remove(&stored.path).await;
        return Err(Error::persistence(e));
    }

    tracing::info!(
        "Stored {} for {}/{} ({} bytes)",
        record.questions_path,
        record.course_code,
        record.exam,
        request.data.len()
    );

    Ok(record)
}
