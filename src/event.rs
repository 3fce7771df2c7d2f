//! API Gateway "proxy events", in both of the forms our Lambdas receive them.
//!
//! The bare Lambda gets the raw event document. We only model the handful of
//! fields we use; everything else in the event (headers, request context,
//! body, ...) is ignored, since none of our routes look at it.
//!
//! The proxy-event Lambda gets the same event already converted into an HTTP
//! request by `lambda_http`.

use lambda_http::{http::Method, Body, Request, RequestExt, Response};
use lambda_runtime::Error;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::{ApiResponse, SearchQuery, Services};

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyEvent {
    pub http_method: String,
    pub path: String,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResult {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl ProxyEvent {
    fn query(&self) -> SearchQuery {
        let get = |key: &str| {
            self.query_string_parameters
                .as_ref()
                .and_then(|params| params.get(key).cloned())
        };

        SearchQuery {
            location: get("location"),
            category: get("category"),
        }
    }
}

impl From<ApiResponse> for ProxyResult {
    fn from(resp: ApiResponse) -> Self {
        ProxyResult {
            status_code: resp.status.as_u16(),
            headers: resp
                .headers()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
            body: resp.body,
        }
    }
}

impl Services {
    /// Handle a proxy event document.
    ///
    /// An unparseable `httpMethod` means the event itself is broken, so it's
    /// reported as an invocation error rather than an HTTP response.
    pub fn handle_event(&self, event: ProxyEvent) -> Result<ProxyResult, Error> {
        let method: Method = event
            .http_method
            .parse()
            .map_err(|_| -> Error { format!("invalid httpMethod `{}`", event.http_method).into() })?;

        let query = event.query();
        Ok(self.dispatch(&method, &event.path, &query).into())
    }

    /// Handle a request as delivered by `lambda_http`.
    ///
    /// For REST API events, `lambda_http` puts the stage name in front of the
    /// URI path (`/prod/api/resources`). We route on the gateway's own path
    /// instead, which is what the client asked for.
    pub fn handle_request(&self, req: &Request) -> Response<Body> {
        let path = match req.raw_http_path() {
            "" => req.uri().path(),
            raw => raw,
        };

        let params = req.query_string_parameters();
        let query = SearchQuery {
            location: params.first("location").map(str::to_owned),
            category: params.first("category").map(str::to_owned),
        };

        self.dispatch(req.method(), path, &query)
            .into_http()
            .map(Body::from)
    }
}
