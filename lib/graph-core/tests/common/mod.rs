#![allow(dead_code, missing_docs, clippy::expect_used)]

use std::net::SocketAddr;

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::RawQuery;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use rstest::fixture;
use serde_json::{Value, json};
use tokio::task::JoinHandle;
use tracing::info;

pub fn init_tracing() {
    // should be run once, fail otherwise, we skip that error
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Fake Microsoft Graph service listening on a random port.
#[derive(Debug)]
pub struct FakeGraph {
    pub addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl FakeGraph {
    pub fn base_url(&self) -> String {
        format!("http://{}/v1.0", self.addr)
    }
}

impl Drop for FakeGraph {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[fixture]
pub async fn fake_graph() -> FakeGraph {
    init_tracing();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("a free port");
    let addr = listener.local_addr().expect("a local address");
    info!(%addr, "launching fake graph");

    let handle = tokio::spawn(async move {
        axum::serve(listener, router()).await.expect("server running");
    });
    FakeGraph { addr, handle }
}

fn router() -> Router {
    Router::new()
        .route("/v1.0/solutions/bookingCurrencies", get(list_currencies))
        .route("/v1.0/solutions/bookingCurrencies/$count", get(count_currencies))
        .route("/v1.0/solutions/bookingBusinesses", post(create_business))
        .route("/v1.0/solutions/bookingBusinesses/missing", get(missing_business))
        .route("/v1.0/solutions/virtualEvents", delete(|| async { StatusCode::NO_CONTENT }))
        .route("/v1.0/solutions/unavailable", get(unavailable))
}

fn header_value(headers: &HeaderMap, name: &str) -> Value {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map_or(Value::Null, |value| Value::String(value.to_owned()))
}

async fn list_currencies(headers: HeaderMap, RawQuery(query): RawQuery) -> impl IntoResponse {
    Json(json!({
        "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#solutions/bookingCurrencies",
        "value": [
            { "id": "USD", "symbol": "$" },
            { "id": "EUR", "symbol": "€" }
        ],
        "echo": {
            "authorization": header_value(&headers, "authorization"),
            "sdkVersion": header_value(&headers, "sdkversion"),
            "clientRequestId": header_value(&headers, "client-request-id"),
            "accept": header_value(&headers, "accept"),
            "query": query,
        }
    }))
}

async fn count_currencies(headers: HeaderMap) -> impl IntoResponse {
    let accept = header_value(&headers, "accept");
    if accept != json!("text/plain;q=0.9") {
        return (StatusCode::NOT_ACCEPTABLE, [(header::CONTENT_TYPE, "text/plain")], "unexpected accept".to_owned());
    }
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/plain; charset=utf-8")], "2".to_owned())
}

async fn create_business(headers: HeaderMap, body: Bytes) -> impl IntoResponse {
    let mut business: Value = serde_json::from_slice(&body).expect("a JSON body");
    business["id"] = json!("Contoso@contoso.onmicrosoft.com");
    business["contentType"] = header_value(&headers, "content-type");
    (StatusCode::CREATED, Json(business))
}

async fn missing_business() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        [("request-id", "0f3c2a5e-5a1d-4c1b-9a5e-8d7f6e5d4c3b")],
        Json(json!({
            "error": {
                "code": "ErrorItemNotFound",
                "message": "The specified object was not found in the store.",
                "innerError": {
                    "date": "2024-05-02T10:00:00",
                    "request-id": "0f3c2a5e-5a1d-4c1b-9a5e-8d7f6e5d4c3b",
                    "client-request-id": "1b7e0d2c-3f4a-4e5b-8c6d-7e8f9a0b1c2d"
                }
            }
        })),
    )
}

async fn unavailable() -> impl IntoResponse {
    (StatusCode::SERVICE_UNAVAILABLE, [(header::CONTENT_TYPE, "text/html")], "<h1>Service Unavailable</h1>")
}
