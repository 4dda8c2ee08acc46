//! Data models for the sentence API

pub mod sentence;

pub use sentence::{ErrorBody, Sentence, SentenceId, SentenceList, SentencePayload};
