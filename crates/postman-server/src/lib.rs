//! HTTP exposure of a generated Postman collection.
//!
//! The document is serialized exactly once, when the router is built;
//! request handling hands out the precomputed bytes and never touches the
//! collection again. CORS is wide open for `GET` so browser tooling can
//! import the collection straight from the running server.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod error;

use std::net::SocketAddr;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, header};
use axum::response::IntoResponse;
use axum::routing::get;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

use gateway_postman_collection::Collection;

pub use error::{Result, ServeError};

/// Shared state for the collection route.
#[derive(Debug, Clone)]
struct AppState {
    /// The document, encoded once at router construction
    body: Bytes,
}

/// Builds a router that serves the collection document on `GET /`.
///
/// # Errors
///
/// Returns [`ServeError::Encode`] when the document cannot be serialized.
pub fn router(collection: &Collection) -> Result<Router> {
    let body = Bytes::from(serde_json::to_vec(collection)?);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Ok(Router::new()
        .route("/", get(collection_handler))
        .layer(cors)
        .with_state(AppState { body }))
}

/// Starts serving the collection on `addr`.
///
/// Returns the server task handle together with the address the listener
/// actually bound. Requesting port 0 picks a free port; tests use the
/// returned address to reach it.
///
/// # Errors
///
/// Returns [`ServeError::Encode`] when the document cannot be serialized,
/// or [`ServeError::Bind`] when the listener cannot be bound.
pub async fn serve_on(
    addr: SocketAddr,
    collection: &Collection,
) -> Result<(JoinHandle<()>, SocketAddr)> {
    let app = router(collection)?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;
    let local_addr = listener
        .local_addr()
        .map_err(|source| ServeError::Bind { addr, source })?;

    tracing::info!("Collection server listening on http://{}", local_addr);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Collection server error: {}", e);
        }
    });

    Ok((handle, local_addr))
}

/// Handler for the collection document.
#[allow(clippy::unused_async)] // axum requires handler functions to be async
async fn collection_handler(State(state): State<AppState>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], state.body)
}
