use crate::models::{Candidate, Decision, DecisionResponse, Pet, PetId};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the match backend
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{endpoint} returned {status}")]
    Status { endpoint: String, status: StatusCode },

    #[error("Decision rejected by server: {0}")]
    Rejected(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// The backend endpoints the review workflow depends on
///
/// Implemented over HTTP by [`HttpMatchService`]; tests substitute in-memory versions.
pub trait MatchService: Send + Sync {
    fn pet_details(&self, pet_id: &PetId) -> impl Future<Output = Result<Pet, ServiceError>> + Send;

    fn accepted_matches(
        &self,
        pet_id: &PetId,
    ) -> impl Future<Output = Result<Vec<Pet>, ServiceError>> + Send;

    fn potential_matches(
        &self,
        pet_id: &PetId,
    ) -> impl Future<Output = Result<Vec<Candidate>, ServiceError>> + Send;

    /// Record a decision. `Ok` only when the server reports success.
    fn decide(
        &self,
        pet_id: &PetId,
        candidate_id: &PetId,
        decision: Decision,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send;
}

/// JSON-over-HTTP client for the match backend
pub struct HttpMatchService {
    base_url: String,
    client: Client,
}

impl HttpMatchService {
    /// Create a new client rooted at `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ServiceError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ServiceError::InvalidBaseUrl(base_url));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str, segments: &[&PetId]) -> String {
        let mut url = format!("{}/{}", self.base_url, endpoint);
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment.as_str()));
        }
        url
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        segments: &[&PetId],
    ) -> Result<T, ServiceError> {
        let url = self.url(endpoint, segments);
        let request_id = uuid::Uuid::new_v4();

        tracing::debug!("{} {} (request {})", method, url, request_id);

        let response = self
            .client
            .request(method, &url)
            .header("Accept", "application/json")
            .header("X-Request-Id", request_id.to_string())
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("{} failed (request {}): {} - {}", endpoint, request_id, status, body);
            return Err(ServiceError::Status {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        let bytes = response.bytes().await?;

        serde_json::from_slice(&bytes)
            .map_err(|e| ServiceError::InvalidResponse(format!("Failed to parse {} response: {}", endpoint, e)))
    }
}

impl MatchService for HttpMatchService {
    async fn pet_details(&self, pet_id: &PetId) -> Result<Pet, ServiceError> {
        self.send_json(Method::GET, "get_pet_details", &[pet_id]).await
    }

    async fn accepted_matches(&self, pet_id: &PetId) -> Result<Vec<Pet>, ServiceError> {
        let matches: Vec<Pet> = self.send_json(Method::GET, "get_accepted_matches", &[pet_id]).await?;
        tracing::debug!("Fetched {} accepted matches for pet {}", matches.len(), pet_id);
        Ok(matches)
    }

    async fn potential_matches(&self, pet_id: &PetId) -> Result<Vec<Candidate>, ServiceError> {
        let candidates: Vec<Candidate> =
            self.send_json(Method::GET, "get_potential_matches", &[pet_id]).await?;
        tracing::debug!("Fetched {} candidates for pet {}", candidates.len(), pet_id);
        Ok(candidates)
    }

    async fn decide(
        &self,
        pet_id: &PetId,
        candidate_id: &PetId,
        decision: Decision,
    ) -> Result<(), ServiceError> {
        let response: DecisionResponse = self
            .send_json(Method::POST, decision.endpoint(), &[pet_id, candidate_id])
            .await?;

        if response.is_success() {
            tracing::debug!("Recorded {}: {} -> {}", decision, pet_id, candidate_id);
            Ok(())
        } else {
            let reason = response
                .message
                .unwrap_or_else(|| format!("status {}", String::from(response.status)));
            Err(ServiceError::Rejected(reason))
        }
    }
}
