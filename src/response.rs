//! Transport-neutral API responses.
//!
//! Every adapter (the standalone server, the proxy-event Lambda, the bare
//! Lambda) turns one of these into its own response type, so the status,
//! headers, and body are identical no matter how the request came in.

use lambda_http::http::{self, StatusCode};
use serde::Serialize;

use crate::error::ServiceError;

/// Headers attached to every response.
pub static RESPONSE_HEADERS: [(&str, &str); 4] = [
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Headers", "Content-Type"),
    ("Access-Control-Allow-Methods", "OPTIONS,POST,GET"),
];

#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn json<T: Serialize>(status: StatusCode, value: &T) -> Result<Self, ServiceError> {
        Ok(ApiResponse {
            status,
            body: serde_json::to_string(value)?,
        })
    }

    pub fn empty() -> Self {
        ApiResponse {
            status: StatusCode::OK,
            body: String::new(),
        }
    }

    /// Build the response for a failed request. This can't fail itself: if
    /// even the error body won't encode, we fall back to a fixed string.
    pub fn from_error(err: &ServiceError) -> Self {
        let body = serde_json::to_string(&err.public_body()).unwrap_or_else(|_| {
            r#"{"error":"Internal Server Error","message":"An unexpected error occurred"}"#
                .to_owned()
        });

        ApiResponse {
            status: err.status(),
            body,
        }
    }

    pub fn headers(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        RESPONSE_HEADERS.iter().copied()
    }

    /// Convert into a plain `http` response; adapters map the body type.
    pub fn into_http(self) -> http::Response<String> {
        let mut builder = http::Response::builder().status(self.status);

        for (name, value) in RESPONSE_HEADERS {
            builder = builder.header(name, value);
        }

        builder
            .body(self.body)
            .expect("constant response headers are valid")
    }
}
