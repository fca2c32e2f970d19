//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (CORS headers, request ID, tracing, metrics)
//! - Bind server to listener
//! - Stop accepting on shutdown and drain in-flight requests

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ProxyConfig;
use crate::gallery::GalleryService;
use crate::http::middleware::{cors, track_requests};
use crate::http::request::{make_request_span, propagate_request_id_layer, set_request_id_layer};
use crate::http::{health, images};
use crate::lifecycle::shutdown;
use crate::upstream::FlickrClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub gallery: GalleryService,
    pub config: Arc<ProxyConfig>,
}

impl AppState {
    /// Build state from validated configuration.
    pub fn from_config(config: ProxyConfig) -> Result<Self, url::ParseError> {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Build state around a caller-supplied HTTP client.
    pub fn with_http_client(
        config: ProxyConfig,
        http: reqwest::Client,
    ) -> Result<Self, url::ParseError> {
        let client = FlickrClient::with_http_client(http, &config.upstream)?;
        let gallery = GalleryService::new(client, config.upstream.per_page);
        Ok(Self {
            gallery,
            config: Arc::new(config),
        })
    }
}

/// HTTP server for the proxy.
pub struct HttpServer {
    router: Router,
    config: Arc<ProxyConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Result<Self, url::ParseError> {
        Ok(Self::from_state(AppState::from_config(config)?))
    }

    /// Create a server from prepared state.
    pub fn from_state(state: AppState) -> Self {
        let config = state.config.clone();
        Self {
            router: build_router(state),
            config,
        }
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }
}

/// Routes served under the API prefix.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/images", get(images::search_images))
        .route("/images/{id}/details/", get(images::image_details))
        .route("/images/{id}/details", get(images::image_details))
}

/// Build the Axum router with all middleware layers.
///
/// The CORS layers are outermost, so headers land on every response,
/// including fallbacks and errors.
pub fn build_router(state: AppState) -> Router {
    let prefix = state.config.api.path_prefix.trim_end_matches('/').to_string();
    let router = if prefix.is_empty() {
        Router::new().merge(api_routes())
    } else {
        Router::new().nest(&prefix, api_routes())
    };

    router
        .route("/health", get(health::health))
        .fallback(health::not_found)
        .with_state(state)
        .layer(middleware::from_fn(track_requests))
        .layer(propagate_request_id_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_request_span)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(set_request_id_layer())
        .layer(cors::allow_headers())
        .layer(cors::allow_any_origin())
}
