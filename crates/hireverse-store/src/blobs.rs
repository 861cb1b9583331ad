//! Blob store contract for uploaded images (profile photos, company logos).
//! Unrelated to ranking; kept behind the same trait seam as the problem
//! repository so the UI layer never touches a vendor SDK directly.

use async_trait::async_trait;
use hireverse_common::Result;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Upload-only object storage: hand over bytes, get back a stable URL.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn upload(&self, bytes: &[u8], name: &str) -> Result<String>;
}

/// In-memory blob store. URLs are content-addressed so re-uploading identical
/// bytes under the same name yields the same URL.
pub struct MemoryBlobStore {
    objects: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn contains(&self, url: &str) -> bool {
        self.objects.read().await.contains_key(url)
    }
}

impl Default for MemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn upload(&self, bytes: &[u8], name: &str) -> Result<String> {
        let digest = Sha256::digest(bytes);
        let url = format!("memory://blobs/{}/{}", hex::encode(digest), name);

        self.objects
            .write()
            .await
            .insert(url.clone(), bytes.to_vec());
        debug!(%url, size = bytes.len(), "uploaded blob");
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_returns_stable_url() {
        tokio_test::block_on(async {
            let store = MemoryBlobStore::new();
            let first = store.upload(b"avatar bytes", "avatar.png").await.unwrap();
            let second = store.upload(b"avatar bytes", "avatar.png").await.unwrap();

            assert_eq!(first, second);
            assert!(store.contains(&first).await);
            assert_eq!(store.len().await, 1);
        });
    }

    #[test]
    fn test_distinct_content_distinct_url() {
        tokio_test::block_on(async {
            let store = MemoryBlobStore::new();
            let a = store.upload(b"one", "logo.png").await.unwrap();
            let b = store.upload(b"two", "logo.png").await.unwrap();
            assert_ne!(a, b);
            assert_eq!(store.len().await, 2);
        });
    }
}
