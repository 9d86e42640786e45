//! Spot API transport error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{method} {path}: {status} {code}: {message}")]
    Response {
        method: String,
        path: String,
        status: u16,
        code: String,
        message: String,
    },

    #[error("invalid Spot API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("{0}: response contained no items")]
    EmptyResponse(String),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;
