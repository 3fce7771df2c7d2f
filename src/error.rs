use lambda_http::http::{Method, StatusCode};
use serde::Serialize;
use thiserror::Error;

/// Failures that can happen while handling one API request.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Route {method} {path} not found")]
    RouteNotFound { method: Method, path: String },

    #[error("failed to encode response body: {0}")]
    Encoding(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
pub(crate) struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The body that callers get to see. Internal faults are reported
    /// generically.
    pub(crate) fn public_body(&self) -> ErrorBody {
        match self {
            ServiceError::RouteNotFound { .. } => ErrorBody {
                error: "Not Found",
                message: self.to_string(),
            },
            ServiceError::Encoding(_) => internal_error_body(),
        }
    }
}

pub(crate) fn internal_error_body() -> ErrorBody {
    ErrorBody {
        error: "Internal Server Error",
        message: "An unexpected error occurred".to_owned(),
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name} value `{value}`: {source}")]
    InvalidNumber {
        name: &'static str,
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("invalid {name} value `{value}`: {source}")]
    InvalidAddress {
        name: &'static str,
        value: String,
        source: std::net::AddrParseError,
    },
}
