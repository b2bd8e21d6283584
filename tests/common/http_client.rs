//! HTTP client helpers for tests.

use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    pub async fn home(&self) -> Result<HomeResponse, TestClientError> {
        let resp = self.client.get(self.url("/")).send().await?;
        Self::parse(resp).await
    }

    pub async fn health(&self) -> Result<HealthResponse, TestClientError> {
        let resp = self.client.get(self.url("/healthz")).send().await?;
        Self::parse(resp).await
    }

    pub async fn similarity(
        &self,
        main_word: &str,
        guess_word: &str,
    ) -> Result<SimilarityResponse, TestClientError> {
        self.similarity_raw(serde_json::json!({
            "main_word": main_word,
            "guess_word": guess_word,
        }))
        .await
    }

    /// Posts an arbitrary JSON body to `/similarity`.
    pub async fn similarity_raw(
        &self,
        body: serde_json::Value,
    ) -> Result<SimilarityResponse, TestClientError> {
        let resp = self
            .client
            .post(self.url("/similarity"))
            .json(&body)
            .send()
            .await?;
        Self::parse(resp).await
    }

    async fn parse<T: serde::de::DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, TestClientError> {
        match resp.status().as_u16() {
            200 => Ok(resp.json().await?),
            status @ 400..=499 => {
                let detail = Self::detail(resp).await;
                Err(TestClientError::ClientError(status, detail))
            }
            status => {
                let detail = Self::detail(resp).await;
                Err(TestClientError::UnexpectedStatus(status, detail))
            }
        }
    }

    async fn detail(resp: reqwest::Response) -> String {
        let body = resp.text().await.unwrap_or_default();
        serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.detail)
            .unwrap_or(body)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HomeResponse {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimilarityResponse {
    pub similarity_percentage: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0} - Detail: {1}")]
    UnexpectedStatus(u16, String),

    #[error("Client error: {0} - Detail: {1}")]
    ClientError(u16, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_url_building() {
        let client = TestClient::new("http://localhost:8000");
        assert_eq!(client.url("/similarity"), "http://localhost:8000/similarity");
        assert_eq!(client.url("healthz"), "http://localhost:8000/healthz");
        assert_eq!(client.url("/"), "http://localhost:8000/");
    }
}
