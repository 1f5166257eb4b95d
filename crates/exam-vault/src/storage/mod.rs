//! Storage module for uploaded papers and their records
//!
//! Provides the on-disk blob tree and the SQLite question store.

mod blob;
mod database;

pub use blob::{BlobStore, StoredBlob, DISAMBIGUATOR_LEN};
pub use database::SqliteQuestionStore;
