//! Read-through lookup: local store, then upstream, then persist

use crate::source::ImageSource;
use status_blob_store::{BlobStore, CacheKey};
use tracing::{debug, warn};

/// Outcome of a read-through lookup
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup {
    /// Served from the local store
    Hit(Vec<u8>),
    /// Fetched from upstream and written to the local store
    FetchedAndCached(Vec<u8>),
    /// Neither the store nor upstream had an image
    Miss,
}

/// Look `key` up locally, falling back to `source` and persisting what it
/// returns.
///
/// Upstream failures of any kind collapse into `Lookup::Miss`. Local I/O
/// failures, including a failed write of fetched bytes, are returned as
/// errors.
pub async fn read_through(
    store: &BlobStore,
    source: &dyn ImageSource,
    key: &CacheKey,
) -> status_blob_store::Result<Lookup> {
    if let Some(data) = store.get(key).await? {
        return Ok(Lookup::Hit(data));
    }

    let data = match source.fetch(key).await {
        Ok(data) => data,
        Err(e) => {
            warn!(code = %key, error = %e, "Upstream fetch failed");
            return Ok(Lookup::Miss);
        }
    };

    store.put(key, &data).await?;
    debug!(code = %key, size = data.len(), "Cached upstream image");

    Ok(Lookup::FetchedAndCached(data))
}
