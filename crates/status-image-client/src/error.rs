//! Error types for the status image client

use std::fmt;

#[derive(Debug)]
pub enum ClientError {
    Http(Box<reqwest::Error>),
    /// The provider answered with a non-success status
    Status(u16),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Http(err) => write!(f, "HTTP error: {}", err),
            ClientError::Status(status) => write!(f, "Provider returned status {}", status),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Http(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
