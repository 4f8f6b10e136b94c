//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the listing handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Drive the listing flow: resolve query → upstream search → project
//!   summaries → encode → respond
//! - Observability (metrics, correlation IDs)

use std::time::{Duration, Instant};

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{GatewayConfig, QueryDefaults};
use crate::encode;
use crate::http::request::{ListingQuery, RequestIdLayer, X_REQUEST_ID};
use crate::http::response::ApiError;
use crate::observability::metrics;
use crate::records::RecordSummary;
use crate::upstream::{RecordsClient, UpstreamResult};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub defaults: QueryDefaults,
    pub client: RecordsClient,
}

/// HTTP server for the record gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> UpstreamResult<Self> {
        let client = RecordsClient::new(&config.upstream)?;

        let state = AppState {
            defaults: config.defaults.clone(),
            client,
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/", any(listing_handler))
            .route("/{*path}", any(listing_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Main listing handler.
///
/// Resolves query parameters, forwards the search upstream, and encodes
/// the returned records in the requested format. Mounted on every path;
/// deployed clients hit the listing endpoint under assorted routes.
async fn listing_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListingQuery>,
) -> Response {
    let start = Instant::now();
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let listing = match query.resolve(&state.defaults) {
        Ok(listing) => listing,
        Err(err) => {
            tracing::warn!(request_id = %request_id, error = %err, "Rejected listing request");
            metrics::record_request(400, "none", start);
            return err.into_response();
        }
    };

    tracing::debug!(
        request_id = %request_id,
        count = listing.count,
        sort_by = %listing.sort_by,
        sort_direction = %listing.sort_direction,
        format = %listing.format,
        "Fetching records"
    );

    let search = match state.client.search(&listing.to_search_request()).await {
        Ok(response) => response,
        Err(err) => {
            tracing::error!(request_id = %request_id, error = %err, "Upstream search failed");
            metrics::record_request(500, listing.format.as_str(), start);
            return ApiError::from(err).into_response();
        }
    };

    let summaries: Vec<RecordSummary> = search
        .records
        .into_iter()
        .map(|record| record.into_summary())
        .collect();

    tracing::debug!(
        request_id = %request_id,
        records = summaries.len(),
        "Encoding records"
    );

    let payload = encode::encode(&summaries, listing.format);
    metrics::record_request(200, listing.format.as_str(), start);
    payload.into_response()
}
