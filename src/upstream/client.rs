//! Client for the remote records search API.

use std::time::Duration;

use crate::config::UpstreamConfig;
use crate::upstream::types::{SearchRequest, SearchResponse, UpstreamError, UpstreamResult};

/// Thin wrapper around a pooled HTTP client bound to one search endpoint.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct RecordsClient {
    http: reqwest::Client,
    search_url: String,
}

impl RecordsClient {
    /// Build a client from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(UpstreamError::Transport)?;

        Ok(Self {
            http,
            search_url: config.search_url.clone(),
        })
    }

    /// POST a search and decode the record envelope.
    ///
    /// Exactly one attempt; failures are terminal for the caller's request.
    pub async fn search(&self, request: &SearchRequest) -> UpstreamResult<SearchResponse> {
        tracing::debug!(
            url = %self.search_url,
            count = request.count,
            sort_by = request.sort_by,
            sort_direction = request.sort_direction,
            "Searching records"
        );

        let response = self
            .http
            .post(&self.search_url)
            .json(request)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        response.json().await.map_err(UpstreamError::Decode)
    }
}
