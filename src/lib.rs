//! Sentence API client
//!
//! An async client for a REST backend exposing a single `sentence` resource
//! under `/api/sentences`. Outside production every request carries basic-auth
//! credentials; in production none are sent.
//!
//! ```rust,no_run
//! use sentence_client::{Config, Environment, SentenceApi, SentenceClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::new("http://localhost:8080", Environment::Development);
//! let client = SentenceClient::new(&config)?;
//!
//! let created = client.create("hello").await?.into_data();
//! let sentence = client.find(created.id).await?.into_data();
//! println!("{}: {}", sentence.id, sentence.value);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod models;

pub use crate::core::client::SentenceClient;
pub use crate::core::config::Config;
pub use crate::core::request::{BasicAuth, Environment, RequestConfig};
pub use crate::core::resource::{ApiResponse, ClientError, SentenceApi};
pub use crate::models::{ErrorBody, Sentence, SentenceId, SentenceList, SentencePayload};
