//! Upload ingestion: validate, store the PDF, record it

pub mod upload;

pub use upload::{ingest_question, PDF_MEDIA_TYPE};
