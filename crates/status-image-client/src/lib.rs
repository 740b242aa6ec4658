//! Status image provider client
//!
//! Fetches the canonical image for an HTTP status code from a remote
//! provider. The provider is expected to serve `GET <base>/<code>` with the
//! image bytes and a 2xx status.

pub mod client;
pub mod error;

pub use client::StatusImageClient;
pub use error::{ClientError, Result};
