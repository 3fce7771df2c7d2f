//! The standalone HTTP server.
//!
//! Axum only provides the socket handling here. All requests go through one
//! fallback handler that passes method, path, and query straight to
//! [`Services::dispatch`], so the routing rules (including the 404 and
//! preflight behavior) are exactly the same as on Lambda.

use axum::{
    body::Body,
    extract::{Query, State},
    http::{Method, Uri},
    response::Response,
    Router,
};
use lambda_runtime::tracing;
use tokio::net::TcpListener;

use crate::{config::ServerConfig, SearchQuery, Services};

pub fn router(svcs: Services) -> Router {
    Router::new().fallback(handle).with_state(svcs)
}

// The query is taken as raw pairs so that a repeated key narrows on its first
// value, like the proxy-event Lambda, instead of being rejected.
async fn handle(
    State(svcs): State<Services>,
    method: Method,
    uri: Uri,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let query = SearchQuery::from_pairs(pairs);

    svcs.dispatch(&method, uri.path(), &query)
        .into_http()
        .map(Body::from)
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(svcs: Services, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("server is running on {}", listener.local_addr()?);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }

        tracing::info!("shutting down");
    };

    axum::serve(listener, router(svcs))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
