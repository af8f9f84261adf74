use bytes::Bytes;
use std::path::PathBuf;
use uuid::Uuid;

/// A file received at the transport boundary.
///
/// Built by the handler from the multipart field so nothing downstream
/// touches the transport machinery.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content: Bytes,
}

/// On-disk copy of an upload, stored as `<uuid>_<filename>`.
///
/// The UUID prefix keeps paths unique per request, so concurrent
/// uploads of the same filename never collide. Artifacts are never
/// mutated or deleted.
#[derive(Debug, Clone)]
pub struct StoredArtifact {
    pub id: Uuid,
    pub path: PathBuf,
    pub size: u64,
}
