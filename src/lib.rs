//! A small resource-directory lookup service.
//!
//! The service exposes a fixed list of support resources (hotlines, shelters,
//! crisis lines, and so on) through a tiny JSON API:
//!
//! - `GET /health` reports liveness;
//! - `GET /api/resources` lists resources, optionally filtered with the
//!   `location` and `category` query parameters;
//! - `OPTIONS` on any path answers CORS preflights.
//!
//! This library crate implements all of that once. It is then compiled into
//! several executables: `resource-directory`, a standalone HTTP server;
//! `resource-directory-proxyevent`, which speaks AWS API Gateway's "proxy
//! event" protocol through `lambda_http`; `resource-directory-bare`, a plain
//! JSON-in, JSON-out Lambda; and `resource-directory-oneshot`, which handles a
//! single event given on the command line, for local testing.

use chrono::{SecondsFormat, Utc};
use lambda_http::http::{Method, StatusCode};
use lambda_runtime::tracing;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

pub mod catalog;
pub mod config;
pub mod error;
pub mod event;
pub mod response;
pub mod search;
pub mod server;

pub use catalog::{Catalog, Category, Resource};
pub use error::ServiceError;
pub use response::ApiResponse;
pub use search::SearchQuery;

pub const HEALTH_PATH: &str = "/health";
pub const RESOURCES_PATH: &str = "/api/resources";

/// Set up `tracing` output. `RUST_LOG` overrides the default `info` level.
///
/// On Lambda, CloudWatch timestamps every line already, so we leave the time
/// out there.
pub fn init_logging(with_time: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // don't print the module name
        .compact();

    if with_time {
        builder.init();
    } else {
        builder.without_time().init();
    }
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    timestamp: String,
}

#[derive(Serialize)]
struct Items<'a> {
    items: Vec<&'a Resource>,
}

/// The state shared by every request: just a reference to the catalog.
#[derive(Clone, Copy, Debug)]
pub struct Services {
    catalog: &'static Catalog,
}

impl Services {
    /// Services backed by the built-in catalog.
    pub fn init() -> Self {
        Self::with_catalog(Catalog::builtin())
    }

    pub fn with_catalog(catalog: &'static Catalog) -> Self {
        Services { catalog }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// Handle one API request.
    ///
    /// This never fails: unknown routes become 404s and internal faults
    /// become generic 500s, with the details going to the log.
    pub fn dispatch(&self, method: &Method, path: &str, query: &SearchQuery) -> ApiResponse {
        let resp = match self.route(method, path, query) {
            Ok(r) => r,

            Err(e @ ServiceError::RouteNotFound { .. }) => ApiResponse::from_error(&e),

            Err(e) => {
                tracing::error!(%method, path, "request failed: {e}");
                ApiResponse::from_error(&e)
            }
        };

        tracing::info!(%method, path, status = resp.status.as_u16(), "handled request");
        resp
    }

    fn route(
        &self,
        method: &Method,
        path: &str,
        query: &SearchQuery,
    ) -> Result<ApiResponse, ServiceError> {
        if *method == Method::GET && path == HEALTH_PATH {
            return ApiResponse::json(
                StatusCode::OK,
                &Health {
                    status: "OK",
                    timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                },
            );
        }

        if *method == Method::GET && path == RESOURCES_PATH {
            let items = self.catalog.search(query);
            return ApiResponse::json(StatusCode::OK, &Items { items });
        }

        if *method == Method::OPTIONS {
            return Ok(ApiResponse::empty());
        }

        Err(ServiceError::RouteNotFound {
            method: method.clone(),
            path: path.to_owned(),
        })
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::init()
    }
}
