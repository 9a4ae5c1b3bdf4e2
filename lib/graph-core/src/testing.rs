//! Test support.
//!
//! [`MockRequestAdapter`] replays queued responses and records the requests it receives,
//! so request builders can be tested without a server.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use http::StatusCode;
use serde_json::json;

use crate::adapter::{BoxFuture, GraphError, NativeResponse, RequestAdapter};
use crate::request::{BASE_URL_KEY, RequestInformation, TemplateValue};

/// Request adapter answering with queued responses.
///
/// Requests are answered in order. Once the queue is empty, requests get a `404` with an
/// OData error body.
///
/// ```rust
/// use graph_core::adapter::{ErrorMappings, NativeResponse, RequestAdapterExt};
/// use graph_core::request::RequestInformation;
/// use graph_core::testing::MockRequestAdapter;
/// use http::{Method, StatusCode};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), graph_core::GraphError> {
/// let adapter = MockRequestAdapter::new().with_response(NativeResponse::new(StatusCode::NO_CONTENT));
///
/// let request = RequestInformation::new(Method::DELETE, "{+baseurl}/solutions/virtualEvents");
/// adapter.send_no_content(request, &ErrorMappings::odata()).await?;
///
/// let uri = adapter.last_uri().expect("a request");
/// assert_eq!(uri, "https://graph.microsoft.com/v1.0/solutions/virtualEvents");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MockRequestAdapter {
    base_url: String,
    responses: Mutex<VecDeque<NativeResponse>>,
    requests: Mutex<Vec<RequestInformation>>,
}

impl Default for MockRequestAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRequestAdapter {
    /// Creates an adapter for the global Microsoft Graph endpoint.
    pub fn new() -> Self {
        Self {
            base_url: "https://graph.microsoft.com/v1.0".to_owned(),
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Queues a response.
    #[must_use]
    pub fn with_response(self, response: NativeResponse) -> Self {
        self.push_response(response);
        self
    }

    /// Queues a response.
    pub fn push_response(&self, response: NativeResponse) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
    }

    /// Returns the received requests, in order.
    pub fn requests(&self) -> Vec<RequestInformation> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the last received request.
    pub fn last_request(&self) -> Option<RequestInformation> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Returns the URL of the last received request.
    pub fn last_uri(&self) -> Option<String> {
        self.last_request()
            .and_then(|request| request.uri().ok())
            .map(String::from)
    }
}

impl RequestAdapter for MockRequestAdapter {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn execute(&self, mut request: RequestInformation) -> BoxFuture<'_, Result<NativeResponse, GraphError>> {
        request
            .path_parameters
            .insert(BASE_URL_KEY.to_owned(), TemplateValue::from(self.base_url.as_str()));
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        let response = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| {
                NativeResponse::new(StatusCode::NOT_FOUND).with_json(&json!({
                    "error": {
                        "code": "MockResponseMissing",
                        "message": "No response queued in the mock adapter"
                    }
                }))
            });
        Box::pin(async move { Ok(response) })
    }
}
