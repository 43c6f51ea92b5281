/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced while building or executing API requests
#[derive(Debug, Error)]
pub enum AppError {
    /// Network level failure (connection refused, timeout, TLS, ...)
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with a non-success status code
    #[error("unexpected status {status}: {body}")]
    Status {
        /// Status code returned by the server
        status: StatusCode,
        /// Raw response body, empty when it could not be read
        body: String,
    },
    /// JSON (de)serialization failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// A header name or value could not be used
    #[error("invalid header: {0}")]
    InvalidHeader(String),
    /// Input rejected before reaching the network
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Status code of the response carried by this error, if any
    ///
    /// Only errors created from an actual HTTP response carry a status;
    /// network failures and local errors return `None`.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the error carries a `401 Unauthorized` response
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

impl From<reqwest::header::InvalidHeaderName> for AppError {
    fn from(e: reqwest::header::InvalidHeaderName) -> Self {
        AppError::InvalidHeader(e.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderValue> for AppError {
    fn from(e: reqwest::header::InvalidHeaderValue) -> Self {
        AppError::InvalidHeader(e.to_string())
    }
}
