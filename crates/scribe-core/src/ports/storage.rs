use async_trait::async_trait;

use crate::error::StorageError;

/// Upload file store. Persists the bytes of an uploaded file and yields the
/// generated filename under which it was stored.
///
/// Filenames are uniquely generated per upload, so callers never need to
/// coordinate access to the underlying directory.
#[async_trait]
pub trait FileStorage: Send + Sync {
    async fn save(&self, original_name: &str, data: Vec<u8>) -> Result<String, StorageError>;
}
