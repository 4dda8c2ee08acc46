//! Resource abstraction for the sentence API
//!
//! This module defines the trait every sentence client implements along with
//! its error and response types.

use crate::models::{ErrorBody, Sentence, SentenceId, SentenceList};
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use thiserror::Error;

/// Error types for client operations
#[derive(Debug, Error)]
pub enum ClientError {
    /// Failure reported by the HTTP transport, kept as is
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Request failed with status {status}: {body}")]
    Status {
        status: StatusCode,
        headers: HeaderMap,
        body: String,
    },

    /// A success response whose body did not match the expected record
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ClientError {
    /// Status code of the failed response, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Transport(e) => e.status(),
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Decode(_) | ClientError::InvalidBaseUrl(_) => None,
        }
    }

    /// Decode the server's `{"error": ...}` body of a failed response
    pub fn error_body(&self) -> Option<ErrorBody> {
        match self {
            ClientError::Status { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }
}

/// A successful response with its decoded body
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

/// CRUD operations on the sentence resource
#[async_trait]
pub trait SentenceApi: Send + Sync {
    /// List every sentence
    async fn find_all(&self) -> Result<ApiResponse<SentenceList>, ClientError>;

    /// Fetch one sentence
    async fn find(&self, id: i64) -> Result<ApiResponse<Sentence>, ClientError>;

    /// Create a sentence holding `value`
    async fn create(&self, value: &str) -> Result<ApiResponse<SentenceId>, ClientError>;

    /// Replace the value of sentence `id`
    async fn update(&self, id: i64, value: &str) -> Result<ApiResponse<SentenceId>, ClientError>;

    /// Delete sentence `id`
    ///
    /// `data` is `None` when the server answers with an empty body.
    async fn destroy(&self, id: i64) -> Result<ApiResponse<Option<SentenceId>>, ClientError>;
}
