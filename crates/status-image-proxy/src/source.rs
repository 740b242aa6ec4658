//! Upstream image source seam

use async_trait::async_trait;
use status_blob_store::CacheKey;
use status_image_client::StatusImageClient;

/// Somewhere to fetch a status image from on a cache miss
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn fetch(&self, key: &CacheKey) -> status_image_client::Result<Vec<u8>>;
}

#[async_trait]
impl ImageSource for StatusImageClient {
    async fn fetch(&self, key: &CacheKey) -> status_image_client::Result<Vec<u8>> {
        self.fetch_image(key.as_str()).await
    }
}
