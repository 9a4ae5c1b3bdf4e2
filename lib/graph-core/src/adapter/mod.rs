//! Execution of requests.
//!
//! Request builders depend on the [`RequestAdapter`] trait only. [`GraphAdapter`] is the
//! reqwest implementation used in production, and
//! [`MockRequestAdapter`](crate::testing::MockRequestAdapter) replays canned responses in tests.
//!
//! The typed operations (`send`, `send_no_content`, `send_primitive`, `send_bytes`)
//! come from [`RequestAdapterExt`], available on every adapter.

use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use http::{HeaderMap, HeaderValue, StatusCode, header};

use crate::request::RequestInformation;

mod builder;
mod error;
mod graph;
mod send;
mod status;

pub use self::builder::{ApiVersion, GraphAdapterBuilder, NationalCloud};
pub use self::error::GraphError;
pub use self::graph::GraphAdapter;
pub use self::send::RequestAdapterExt;
pub use self::status::{ErrorFactory, ErrorMappings, InvalidStatusCodePattern, StatusCodePattern};

/// Boxed future returned by object safe traits.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Executes the requests built by the request builders.
///
/// Implementations perform a single HTTP exchange: no retry, no redirect handling
/// beyond what the transport does by itself. Failed statuses are not errors at this
/// level, they are mapped by [`RequestAdapterExt`].
///
/// Dropping the returned future cancels the exchange.
pub trait RequestAdapter: Debug + Send + Sync {
    /// Returns the base URL bound to the `{+baseurl}` template variable.
    fn base_url(&self) -> &str;

    /// Executes a request and collects the response.
    fn execute(&self, request: RequestInformation) -> BoxFuture<'_, Result<NativeResponse, GraphError>>;
}

/// A response fully read from the transport.
#[derive(Debug, Clone)]
pub struct NativeResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body, empty when none was sent.
    pub body: Bytes,
}

impl NativeResponse {
    /// Creates a response without headers nor body.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, name: header::HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Sets a JSON body.
    #[must_use]
    pub fn with_json(self, body: &serde_json::Value) -> Self {
        self.with_body(body.to_string(), "application/json; charset=utf-8")
    }

    /// Sets a body with its content type.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Bytes>, content_type: &'static str) -> Self {
        self.headers
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        self.body = body.into();
        self
    }

    /// Returns the primary content type, lowercased and without parameters.
    pub fn content_type(&self) -> Option<String> {
        let value = self.headers.get(header::CONTENT_TYPE)?.to_str().ok()?;
        let primary = value.split(';').next().unwrap_or(value).trim();
        (!primary.is_empty()).then(|| primary.to_ascii_lowercase())
    }
}
