//! Directory-backed blob store keyed by HTTP status code
//!
//! Every entry lives at `<cache-dir>/<code>.jpg`. There is no in-memory
//! index: the filesystem is queried directly on each call.

mod error;
mod key;
mod store;

pub use error::{Result, StoreError};
pub use key::CacheKey;
pub use store::BlobStore;
