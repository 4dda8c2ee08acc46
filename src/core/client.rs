//! Sentence API client
//!
//! This module provides the async HTTP client for the `/api/sentences`
//! endpoints. Resource methods build the endpoint URL and hand off to a small
//! set of verb helpers which attach the per-request config and forward to
//! `reqwest`. Transport failures are returned as reqwest reports them; a
//! non-success status keeps the response's status, headers and body.

use crate::core::config::Config;
use crate::core::constants::path;
use crate::core::request::{BasicAuth, Environment, RequestConfig, request_config};
use crate::core::resource::{ApiResponse, ClientError, SentenceApi};
use crate::models::{Sentence, SentenceId, SentenceList, SentencePayload};
use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::time::Duration;
use tracing::debug;

/// Client for the sentence resource
#[derive(Debug, Clone)]
pub struct SentenceClient {
    client: Client,
    base_url: String,
    environment: Environment,
    credentials: BasicAuth,
}

impl SentenceClient {
    /// Create a new client from `config`
    ///
    /// A request timeout is set only when the configuration names one.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidBaseUrl` if the base URL does not parse and
    /// `ClientError::Transport` if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Self::with_http_client(builder.build()?, config)
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_http_client(client: Client, config: &Config) -> Result<Self, ClientError> {
        Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            environment: config.environment.clone(),
            credentials: config.credentials.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// URL of the sentence collection
    pub fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, path::SENTENCES)
    }

    /// URL of a single sentence; `id` is inserted as is
    pub fn member_url(&self, id: impl Display) -> String {
        format!("{}{}/{}", self.base_url, path::SENTENCES, id)
    }

    /// Request configuration for the next call, rebuilt every time
    fn request_config(&self) -> RequestConfig {
        request_config(&self.environment, &self.credentials)
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<ApiResponse<T>, ClientError> {
        self.request(Method::GET, url, None::<&()>).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        data: &B,
    ) -> Result<ApiResponse<T>, ClientError> {
        self.request(Method::PUT, url, Some(data)).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        data: &B,
    ) -> Result<ApiResponse<T>, ClientError> {
        self.request(Method::POST, url, Some(data)).await
    }

    /// DELETE never sends a body.
    async fn delete<T: DeserializeOwned>(&self, url: &str) -> Result<ApiResponse<T>, ClientError> {
        self.request(Method::DELETE, url, None::<&()>).await
    }

    /// Internal method to send a request and decode the response body
    async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, ClientError> {
        let config = self.request_config();

        debug!(
            method = %method,
            url,
            authenticated = config.auth.is_some(),
            "Sending request"
        );

        let mut req_builder = self.client.request(method, url);

        if let Some(auth) = config.auth {
            req_builder = req_builder.basic_auth(auth.username, Some(auth.password));
        }

        if let Some(body) = body {
            req_builder = req_builder.json(body);
        }

        let response = req_builder.send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status,
                headers,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        // An empty body decodes as JSON null, so `Option` records accept it.
        let data = if bytes.is_empty() {
            serde_json::from_slice::<T>(b"null")?
        } else {
            serde_json::from_slice::<T>(&bytes)?
        };

        Ok(ApiResponse {
            status,
            headers,
            data,
        })
    }
}

#[async_trait]
impl SentenceApi for SentenceClient {
    async fn find_all(&self) -> Result<ApiResponse<SentenceList>, ClientError> {
        self.get(&self.collection_url()).await
    }

    async fn find(&self, id: i64) -> Result<ApiResponse<Sentence>, ClientError> {
        self.get(&self.member_url(id)).await
    }

    async fn create(&self, value: &str) -> Result<ApiResponse<SentenceId>, ClientError> {
        self.post(&self.collection_url(), &SentencePayload::new(value)).await
    }

    async fn update(&self, id: i64, value: &str) -> Result<ApiResponse<SentenceId>, ClientError> {
        self.put(&self.member_url(id), &SentencePayload::new(value)).await
    }

    async fn destroy(&self, id: i64) -> Result<ApiResponse<Option<SentenceId>>, ClientError> {
        self.delete(&self.member_url(id)).await
    }
}
