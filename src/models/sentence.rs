//! Sentence resource data models
//!
//! Request and response bodies exchanged with the `/api/sentences` endpoints.

use serde::{Deserialize, Serialize};

/// Request body for create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentencePayload {
    pub value: String,
}

impl SentencePayload {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A stored sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub id: i64,
    pub value: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Response body of `GET /api/sentences`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceList {
    pub records: Vec<Sentence>,
}

/// Response body of create, update and delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceId {
    pub id: i64,
}

/// Error body returned by the server for rejected requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
