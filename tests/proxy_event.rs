//! The `lambda_http` adapter, fed real API Gateway REST proxy events.

use lambda_http::{http::StatusCode, request::from_str, Body, Response};
use serde_json::{json, Value};

use resource_directory::Services;

fn rest_event(method: &str, path: &str, query: Value) -> String {
    json!({
        "resource": "/{proxy+}",
        "path": path,
        "httpMethod": method,
        "headers": {
            "Host": "abc123.execute-api.us-east-1.amazonaws.com",
            "X-Forwarded-Proto": "https"
        },
        "queryStringParameters": query,
        "pathParameters": { "proxy": path.trim_start_matches('/') },
        "stageVariables": {},
        "requestContext": {
            "accountId": "123456789012",
            "resourceId": "us4z18",
            "stage": "prod",
            "requestId": "41b45ea3-70b5-11e6-b7bd-69b5aaebc7d9",
            "identity": { "sourceIp": "192.168.100.1" },
            "resourcePath": "/{proxy+}",
            "httpMethod": method,
            "apiId": "abc123"
        },
        "body": null,
        "isBase64Encoded": false
    })
    .to_string()
}

fn handle(method: &str, path: &str, query: Value) -> Response<Body> {
    let req = from_str(&rest_event(method, path, query)).unwrap();
    Services::init().handle_request(&req)
}

fn json_body(resp: &Response<Body>) -> Value {
    match resp.body() {
        Body::Text(text) => serde_json::from_str(text).unwrap(),
        other => panic!("expected a text body, got {other:?}"),
    }
}

#[test]
fn stage_is_not_part_of_the_route() {
    let req = from_str(&rest_event("GET", "/api/resources", json!({ "location": "New York" })))
        .unwrap();
    assert_eq!(req.uri().path(), "/prod/api/resources");

    let resp = Services::init().handle_request(&req);
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(&resp);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], 3);
}

#[test]
fn health() {
    let resp = handle("GET", "/health", json!({}));
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(&resp)["status"], "OK");
}

#[test]
fn both_filters() {
    let resp = handle(
        "GET",
        "/api/resources",
        json!({ "location": "National", "category": "domestic-violence" }),
    );
    let body = json_body(&resp);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], 1);
}

#[test]
fn headers_on_every_response() {
    let resp = handle("GET", "/health", json!({}));
    let h = resp.headers();
    assert_eq!(h["content-type"], "application/json");
    assert_eq!(h["access-control-allow-origin"], "*");
    assert_eq!(h["access-control-allow-headers"], "Content-Type");
    assert_eq!(h["access-control-allow-methods"], "OPTIONS,POST,GET");
}

#[test]
fn unknown_route_names_the_gateway_path() {
    let resp = handle("GET", "/unknown-route", json!({}));
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(&resp)["message"],
        "Route GET /unknown-route not found"
    );
}

#[test]
fn preflight() {
    let resp = handle("OPTIONS", "/api/resources", json!({}));
    assert_eq!(resp.status(), StatusCode::OK);
    match resp.body() {
        Body::Text(text) => assert!(text.is_empty()),
        Body::Empty => {}
        other => panic!("unexpected body {other:?}"),
    }
}
