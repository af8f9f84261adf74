use crate::models::{StoredArtifact, UploadedFile};
use std::io;
use std::path::PathBuf;
use tokio::fs;
use tracing::info;
use uuid::Uuid;

/// Local-disk artifact store.
///
/// Each stored file gets a fresh v4 UUID prefix, so uploads never
/// contend over a path and no locking is needed.
pub struct LocalStorageService {
    root: PathBuf,
}

impl LocalStorageService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Persists an uploaded file under `<root>/<uuid>_<filename>`.
    ///
    /// The root directory is created on first use; creation is
    /// idempotent. Filesystem errors propagate to the caller, no retry.
    pub async fn store(&self, upload: &UploadedFile) -> io::Result<StoredArtifact> {
        fs::create_dir_all(&self.root).await?;

        let id = Uuid::new_v4();
        let path = self.root.join(format!("{}_{}", id, upload.filename));
        fs::write(&path, &upload.content).await?;

        info!(
            "💾 Stored {} ({} bytes)",
            path.display(),
            upload.content.len()
        );

        Ok(StoredArtifact {
            id,
            path,
            size: upload.content.len() as u64,
        })
    }

    /// Reads a stored artifact back as raw bytes.
    pub async fn read(&self, artifact: &StoredArtifact) -> io::Result<Vec<u8>> {
        fs::read(&artifact.path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn upload(filename: &str, content: &str) -> UploadedFile {
        UploadedFile {
            filename: filename.to_string(),
            content: Bytes::copy_from_slice(content.as_bytes()),
        }
    }

    #[tokio::test]
    async fn test_store_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorageService::new(dir.path());

        let artifact = storage.store(&upload("main.c", "int x;")).await.unwrap();

        assert!(artifact.path.exists());
        assert_eq!(artifact.size, 6);
        assert_eq!(storage.read(&artifact).await.unwrap(), b"int x;");
    }

    #[tokio::test]
    async fn test_same_filename_never_collides() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorageService::new(dir.path());

        let first = storage.store(&upload("dup.c", "a")).await.unwrap();
        let second = storage.store(&upload("dup.c", "b")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_ne!(first.path, second.path);
        assert!(first.path.exists());
        assert!(second.path.exists());

        for artifact in [&first, &second] {
            let name = artifact.path.file_name().unwrap().to_str().unwrap();
            assert!(name.ends_with("_dup.c"));
            assert!(name.starts_with(&artifact.id.to_string()));
        }
    }

    #[tokio::test]
    async fn test_store_creates_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("uploads");
        let storage = LocalStorageService::new(&nested);

        let artifact = storage.store(&upload("a.c", "")).await.unwrap();
        assert!(nested.is_dir());
        assert!(artifact.path.exists());
    }

    #[tokio::test]
    async fn test_store_propagates_filesystem_errors() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the upload root should be
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let storage = LocalStorageService::new(blocker.join("uploads"));
        let result = storage.store(&upload("a.c", "int x;")).await;

        assert!(result.is_err());
    }
}
