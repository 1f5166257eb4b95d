//! Filesystem blob storage for uploaded exam papers
//!
//! Files live under `<root>/<course>/<exam>/<8 hex>_<original name>` and are
//! published under `/static/...` by the HTTP server.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::path::{Component, Path, PathBuf};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::types::question::PUBLIC_PREFIX;

/// Name used when the client supplies no usable filename
const FALLBACK_FILENAME: &str = "upload.pdf";

/// Length of the random filename prefix
pub const DISAMBIGUATOR_LEN: usize = 8;

/// Characters escaped inside a single URL path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A file written to blob storage
#[derive(Debug, Clone)]
pub struct StoredBlob {
    /// Absolute (or root-relative) filesystem path
    pub path: PathBuf,
    /// Public URL, e.g. `/static/CS101/Midterm/0a1b2c3d_notes.pdf`
    pub public_url: String,
}

/// Blob store rooted at the static directory
#[derive(Debug, Clone)]
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    /// Create a blob store, creating the root directory if needed
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Root of the blob tree
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Turn a client identifier into a single safe folder name.
    ///
    /// Path separators become underscores and surrounding whitespace is
    /// trimmed. Empty results and `.`/`..` are rejected.
    pub fn sanitize_segment(field: &'static str, value: &str) -> Result<String> {
        let cleaned = value.replace(['/', '\\'], "_").trim().to_string();

        if cleaned.is_empty() || cleaned == "." || cleaned == ".." {
            return Err(Error::InvalidIdentifier {
                field,
                value: value.to_string(),
            });
        }

        Ok(cleaned)
    }

    /// Base name of a client filename, ignoring both `/` and `\` directories
    pub fn base_filename(original: Option<&str>) -> String {
        original
            .and_then(|name| name.rsplit(['/', '\\']).next())
            .map(str::trim)
            .filter(|name| !name.is_empty() && *name != "." && *name != "..")
            .unwrap_or(FALLBACK_FILENAME)
            .to_string()
    }

    /// Random 8-hex-character disambiguator
    pub fn disambiguator() -> String {
        let mut hex = Uuid::new_v4().simple().to_string();
        hex.truncate(DISAMBIGUATOR_LEN);
        hex
    }

    /// Write a PDF for the given (already sanitized) course and exam
    pub async fn store(
        &self,
        course: &str,
        exam: &str,
        original_filename: Option<&str>,
        data: &[u8],
    ) -> Result<StoredBlob> {
        let folder = self.root.join(course).join(exam);
        tokio::fs::create_dir_all(&folder).await?;

        let filename = format!(
            "{}_{}",
            Self::disambiguator(),
            Self::base_filename(original_filename)
        );
        let path = folder.join(filename);

        tokio::fs::write(&path, data).await?;

        let public_url = self.public_url(&path)?;
        Ok(StoredBlob { path, public_url })
    }

    /// Best-effort removal of a stored file
    pub async fn remove(&self, path: &Path) {
        if let Err(e) = tokio::fs::remove_file(path).await {
            tracing::warn!("Failed to clean up {}: {}", path.display(), e);
        }
    }

    /// Public `/static/...` URL for a path inside the root, always with `/`
    /// and with each segment percent-encoded
    pub fn public_url(&self, path: &Path) -> Result<String> {
        let relative = path.strip_prefix(&self.root).map_err(|_| {
            Error::internal(format!("{} is outside the blob root", path.display()))
        })?;

        let mut url = PUBLIC_PREFIX.to_string();
        for component in relative.components() {
            match component {
                Component::Normal(part) => {
                    url.push('/');
                    url.extend(utf8_percent_encode(&part.to_string_lossy(), SEGMENT));
                }
                _ => {
                    return Err(Error::internal(format!(
                        "Unexpected path component in {}",
                        path.display()
                    )))
                }
            }
        }

        Ok(url)
    }

    /// Filesystem path for a public URL, if it names something inside the root
    pub fn resolve_public_url(&self, url: &str) -> Option<PathBuf> {
        let rest = url.strip_prefix(PUBLIC_PREFIX)?.strip_prefix('/')?;

        let mut path = self.root.clone();
        for raw in rest.split('/') {
            let segment = percent_decode_str(raw).decode_utf8().ok()?;
            if segment.is_empty()
                || segment == "."
                || segment == ".."
                || segment.contains(['/', '\\'])
            {
                return None;
            }
            path.push(&*segment);
        }
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_disambiguated(filename: &str, original: &str) -> bool {
        let Some((prefix, rest)) = filename.split_once('_') else {
            return false;
        };
        prefix.len() == DISAMBIGUATOR_LEN
            && prefix.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
            && rest == original
    }

    #[test]
    fn test_sanitize_segment() {
        assert_eq!(BlobStore::sanitize_segment("course", " CS101 ").unwrap(), "CS101");
        assert_eq!(BlobStore::sanitize_segment("course", "CS/101").unwrap(), "CS_101");
        assert_eq!(BlobStore::sanitize_segment("exam", "a\\b").unwrap(), "a_b");
        assert_eq!(BlobStore::sanitize_segment("exam", "../etc").unwrap(), ".._etc");
    }

    #[test]
    fn test_sanitize_rejects_dot_segments() {
        for bad in ["", "   ", ".", "..", " .. "] {
            let err = BlobStore::sanitize_segment("course", bad).unwrap_err();
            assert!(matches!(err, Error::InvalidIdentifier { field: "course", .. }));
        }
    }

    #[test]
    fn test_base_filename() {
        assert_eq!(BlobStore::base_filename(Some("notes.pdf")), "notes.pdf");
        assert_eq!(BlobStore::base_filename(Some("/tmp/x/notes.pdf")), "notes.pdf");
        assert_eq!(BlobStore::base_filename(Some("C:\\Users\\me\\notes.pdf")), "notes.pdf");
        assert_eq!(BlobStore::base_filename(Some("../..")), FALLBACK_FILENAME);
        assert_eq!(BlobStore::base_filename(Some("dir/")), FALLBACK_FILENAME);
        assert_eq!(BlobStore::base_filename(None), FALLBACK_FILENAME);
    }

    #[test]
    fn test_disambiguator_format() {
        let token = BlobStore::disambiguator();
        assert_eq!(token.len(), DISAMBIGUATOR_LEN);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn test_store_layout_and_content() {
        let dir = tempfile::tempdir().unwrap();
        let blobs = BlobStore::new(dir.path()).unwrap();

        let stored = blobs
            .store("CS101", "Midterm", Some("notes.pdf"), b"%PDF-1.4 test")
            .await
            .unwrap();

        let filename = stored.path.file_name().unwrap().to_str().unwrap();
        assert!(is_disambiguated(filename, "notes.pdf"));
        assert_eq!(stored.public_url, format!("/static/CS101/Midterm/{}", filename));

        let resolved = blobs.resolve_public_url(&stored.public_url).unwrap();
        assert_eq!(std::fs::read(resolved).unwrap(), b"%PDF-1.4 test");
    }

    #[tokio::test]
    async fn test_same_name_does_not_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let blobs = BlobStore::new(dir.path()).unwrap();

        let first = blobs.store("CS101", "Final", Some("paper.pdf"), b"first").await.unwrap();
        let second = blobs.store("CS101", "Final", Some("paper.pdf"), b"second").await.unwrap();

        assert_ne!(first.path, second.path);
        assert_eq!(std::fs::read(&first.path).unwrap(), b"first");
        assert_eq!(std::fs::read(&second.path).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_remove_is_best_effort() {
        let dir = tempfile::tempdir().unwrap();
        let blobs = BlobStore::new(dir.path()).unwrap();

        let stored = blobs.store("CS101", "Final", Some("paper.pdf"), b"x").await.unwrap();
        blobs.remove(&stored.path).await;
        assert!(!stored.path.exists());

        // Second removal only logs
        blobs.remove(&stored.path).await;
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let blobs = BlobStore { root: PathBuf::from("/srv/static") };
        assert!(blobs.resolve_public_url("/static/../secret").is_none());
        assert!(blobs.resolve_public_url("/other/a.pdf").is_none());
        assert!(blobs.resolve_public_url("/staticx/a.pdf").is_none());
        assert_eq!(
            blobs.resolve_public_url("/static/a/b/c.pdf"),
            Some(PathBuf::from("/srv/static/a/b/c.pdf"))
        );
    }

    #[tokio::test]
    async fn test_public_url_escapes_reserved_characters() {
        let dir = tempfile::tempdir().unwrap();
        let blobs = BlobStore::new(dir.path()).unwrap();

        let stored = blobs
            .store("CS 101", "Mid#1", Some("Q#1 50%?.pdf"), b"%PDF")
            .await
            .unwrap();

        let filename = stored.path.file_name().unwrap().to_str().unwrap();
        assert!(is_disambiguated(filename, "Q#1 50%?.pdf"));
        let (prefix, _) = filename.split_once('_').unwrap();
        assert_eq!(
            stored.public_url,
            format!("/static/CS%20101/Mid%231/{}_Q%231%2050%25%3F.pdf", prefix)
        );
        assert_eq!(blobs.resolve_public_url(&stored.public_url).unwrap(), stored.path);
    }

    #[test]
    fn test_resolve_rejects_encoded_traversal() {
        let blobs = BlobStore { root: PathBuf::from("/srv/static") };
        assert!(blobs.resolve_public_url("/static/%2E%2E/secret").is_none());
        assert!(blobs.resolve_public_url("/static/a%2Fb.pdf").is_none());
    }

    #[test]
    fn test_public_url_outside_root() {
        let blobs = BlobStore { root: PathBuf::from("/srv/static") };
        assert!(blobs.public_url(Path::new("/etc/passwd")).is_err());
    }
}
