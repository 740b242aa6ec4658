//! Status Image Proxy Library
//!
//! Serves `GET`, `PUT` and `DELETE` on `/<code>` against a directory-backed
//! cache, filling misses from a remote status image provider.

pub mod config;
pub mod error;
pub mod read_through;
pub mod server;
pub mod source;

pub use config::ProxyConfig;
pub use error::{ProxyError, Result};
pub use read_through::{read_through, Lookup};
pub use server::{create_router, start_server, AppState, SharedState};
pub use source::ImageSource;
