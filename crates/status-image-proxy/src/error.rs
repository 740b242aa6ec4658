//! Error types for the status image proxy

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use status_blob_store::{CacheKey, StoreError};
use std::fmt;

#[derive(Debug)]
pub enum ProxyError {
    /// Request path is not a bare status code
    BadRequest,
    NotFound(CacheKey),
    MethodNotAllowed,
    Store(StoreError),
    Io(Box<std::io::Error>),
    /// Any other failure while handling a request, including panics
    Internal(String),
    Config(String),
}

impl fmt::Display for ProxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProxyError::BadRequest => write!(f, "Path must contain only a status code"),
            ProxyError::NotFound(key) => write!(f, "No image found for status code {}", key),
            ProxyError::MethodNotAllowed => write!(f, "Method not allowed"),
            ProxyError::Store(err) => write!(f, "{}", err),
            ProxyError::Io(err) => write!(f, "{}", err),
            ProxyError::Internal(msg) => write!(f, "{}", msg),
            ProxyError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ProxyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProxyError::Store(err) => Some(err),
            ProxyError::Io(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::BadRequest => StatusCode::BAD_REQUEST,
            ProxyError::NotFound(_) => StatusCode::NOT_FOUND,
            ProxyError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ProxyError::Store(_)
            | ProxyError::Io(_)
            | ProxyError::Internal(_)
            | ProxyError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, self.to_string()).into_response()
    }
}

impl From<StoreError> for ProxyError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidKey(_) => ProxyError::BadRequest,
            err => ProxyError::Store(err),
        }
    }
}

impl From<std::io::Error> for ProxyError {
    fn from(err: std::io::Error) -> Self {
        ProxyError::Io(Box::new(err))
    }
}

impl From<tracing_subscriber::filter::ParseError> for ProxyError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        ProxyError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProxyError>;
