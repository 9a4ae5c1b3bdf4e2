use std::fmt;

use http::HeaderMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The uniform error body returned by Microsoft Graph.
///
/// ```json
/// {
///   "error": {
///     "code": "ErrorItemNotFound",
///     "message": "The specified object was not found in the store.",
///     "innerError": { "request-id": "...", "date": "..." }
///   }
/// }
/// ```
///
/// The status code and headers of the response are attached once decoded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ODataError {
    /// The main error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<MainError>,

    /// Properties not described by the error schema.
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,

    #[serde(skip)]
    status_code: u16,

    #[serde(skip)]
    response_headers: HeaderMap,
}

impl ODataError {
    /// Creates an error with a main error code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: Some(MainError {
                code: code.into(),
                message: message.into(),
                ..MainError::default()
            }),
            ..Self::default()
        }
    }

    /// Decodes an error body.
    ///
    /// # Errors
    ///
    /// Fails when the body is not a JSON object matching the error schema.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Attaches the status code and headers of the failed response.
    #[must_use]
    pub fn with_response(mut self, status_code: u16, response_headers: HeaderMap) -> Self {
        self.status_code = status_code;
        self.response_headers = response_headers;
        self
    }

    /// Returns the HTTP status code of the failed response.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Returns the headers of the failed response.
    pub fn response_headers(&self) -> &HeaderMap {
        &self.response_headers
    }

    /// Returns the main error code, such as `ErrorItemNotFound`.
    pub fn code(&self) -> Option<&str> {
        self.error.as_ref().map(|error| error.code.as_str())
    }

    /// Returns the main error message.
    pub fn message(&self) -> Option<&str> {
        self.error.as_ref().map(|error| error.message.as_str())
    }

    /// Returns the `request-id` reported by the service, useful for support cases.
    pub fn request_id(&self) -> Option<&str> {
        self.error
            .as_ref()
            .and_then(|error| error.inner_error.as_ref())
            .and_then(|inner| inner.request_id.as_deref())
    }
}

impl fmt::Display for ODataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(error) => write!(
                f,
                "{}: {} (status {})",
                error.code, error.message, self.status_code
            ),
            None => write!(
                f,
                "error status code received from the API (status {})",
                self.status_code
            ),
        }
    }
}

impl std::error::Error for ODataError {}

/// Main error of an [`ODataError`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainError {
    /// Service defined error code.
    #[serde(default)]
    pub code: String,
    /// Human readable message.
    #[serde(default)]
    pub message: String,
    /// Target of the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Nested errors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetails>,
    /// Diagnostic information of the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_error: Option<InnerError>,
}

/// Detail of a [`MainError`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Service defined error code.
    #[serde(default)]
    pub code: String,
    /// Human readable message.
    #[serde(default)]
    pub message: String,
    /// Target of the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Diagnostic information attached by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InnerError {
    /// Request id of the failed request.
    #[serde(rename = "request-id", default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Client request id sent with the failed request.
    #[serde(rename = "client-request-id", default, skip_serializing_if = "Option::is_none")]
    pub client_request_id: Option<String>,
    /// Date of the failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Other diagnostic properties.
    #[serde(flatten)]
    pub additional_data: Map<String, Value>,
}

/// Failure reported for a response that could not be mapped to a typed error.
#[derive(Debug, Clone, PartialEq, derive_more::Error, derive_more::Display)]
#[display("{message}")]
pub struct ApiError {
    message: String,
    status_code: u16,
    response_headers: HeaderMap,
}

impl ApiError {
    /// Creates an error for a failed response.
    pub fn new(message: impl Into<String>, status_code: u16, response_headers: HeaderMap) -> Self {
        Self {
            message: message.into(),
            status_code,
            response_headers,
        }
    }

    /// Returns the description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the HTTP status code of the failed response.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Returns the headers of the failed response.
    pub fn response_headers(&self) -> &HeaderMap {
        &self.response_headers
    }
}
