//! Disk-backed upload store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use scribe_core::error::StorageError;
use scribe_core::ports::FileStorage;

/// Extensions accepted for cover images.
const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Stores uploaded images on the local filesystem.
///
/// Each file gets a fresh `{uuid}.{ext}` name, so concurrent uploads never
/// collide and no locking is needed. Replaced files are left in place.
pub struct DiskStorage {
    root: PathBuf,
    max_bytes: usize,
}

impl DiskStorage {
    pub fn new(root: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self {
            root: root.into(),
            max_bytes,
        }
    }
}

#[async_trait]
impl FileStorage for DiskStorage {
    async fn save(&self, original_name: &str, data: Vec<u8>) -> Result<String, StorageError> {
        let ext = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .ok_or_else(|| StorageError::Rejected("file has no extension".to_owned()))?;

        if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(StorageError::Rejected(format!(
                "unsupported image type '{}', allowed: {}",
                ext,
                ALLOWED_EXTENSIONS.join(", ")
            )));
        }
        if data.is_empty() {
            return Err(StorageError::Rejected("file is empty".to_owned()));
        }
        if data.len() > self.max_bytes {
            return Err(StorageError::Rejected(format!(
                "file exceeds the {} byte limit",
                self.max_bytes
            )));
        }

        let filename = format!("{}.{}", Uuid::new_v4(), ext);

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;
        tokio::fs::write(self.root.join(&filename), &data)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        tracing::debug!(file = %filename, bytes = data.len(), "stored uploaded image");
        Ok(filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("scribe-storage-{}-{}", tag, std::process::id()))
    }

    #[tokio::test]
    async fn save_writes_file_with_generated_name() {
        let root = temp_root("save");
        let store = DiskStorage::new(root.clone(), 1024);

        let name = store.save("cover.PNG", vec![1, 2, 3]).await.unwrap();

        assert!(name.ends_with(".png"));
        assert_ne!(name, "cover.PNG");
        let written = tokio::fs::read(root.join(&name)).await.unwrap();
        assert_eq!(written, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn rejects_non_image_extension() {
        let store = DiskStorage::new(temp_root("ext"), 1024);

        let err = store.save("script.exe", vec![1]).await.unwrap_err();
        assert!(matches!(err, StorageError::Rejected(_)));
    }

    #[tokio::test]
    async fn rejects_oversized_file() {
        let store = DiskStorage::new(temp_root("size"), 4);

        let err = store.save("big.jpg", vec![0; 5]).await.unwrap_err();
        assert!(matches!(err, StorageError::Rejected(_)));
    }

    #[tokio::test]
    async fn rejects_empty_file() {
        let store = DiskStorage::new(temp_root("empty"), 1024);

        let err = store.save("blank.png", Vec::new()).await.unwrap_err();
        assert!(matches!(err, StorageError::Rejected(_)));
    }
}
