use crate::auth::AuthenticationError;
use crate::model::{ApiError, ModelError, ODataError};
use crate::request::UriTemplateError;

#[cfg(feature = "oauth2")]
use crate::auth::oauth2::OAuth2Error;

/// Errors returned by the request builders and the adapter.
///
/// Two families of errors exist:
/// - local errors, raised before or while exchanging with the service (URL building,
///   serialization, transport, authentication)
/// - remote errors, decoded from a failed response: [`GraphError::OData`] and [`GraphError::Api`]
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum GraphError {
    /// HTTP client error from the underlying reqwest library.
    ///
    /// Occurs when network requests fail, timeouts occur, or connection issues arise.
    Reqwest(reqwest::Error),

    /// URL parsing error when computing the request URL.
    Url(url::ParseError),

    /// The URL template of the request could not be expanded.
    UriTemplate(UriTemplateError),

    /// Invalid HTTP header name.
    InvalidHeaderName(http::header::InvalidHeaderName),

    /// Invalid HTTP header value.
    InvalidHeaderValue(http::header::InvalidHeaderValue),

    /// Request body serialization error.
    Serialization(serde_json::Error),

    /// JSON response deserialization failure.
    ///
    /// Occurs when the response body cannot be parsed as the expected JSON structure.
    #[display("Failed to deserialize JSON at '{path}': {error}\n{body}")]
    #[from(skip)]
    Json {
        /// The JSON path where the error occurred.
        path: String,
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The response body that failed to parse, truncated.
        body: String,
    },

    /// The response content type cannot be decoded into the requested value.
    #[display("Unsupported response content type '{content_type}' for {expected}")]
    #[from(skip)]
    UnsupportedContentType {
        /// The primary content type of the response.
        content_type: String,
        /// What the caller asked for.
        expected: &'static str,
    },

    /// A `text/plain` response could not be parsed as the requested primitive.
    #[display("Cannot parse '{value}' as {expected}: {message}")]
    #[from(skip)]
    Primitive {
        /// The response text.
        value: String,
        /// The requested type.
        expected: &'static str,
        /// The parse error.
        message: String,
    },

    /// A model property holds an unexpected value.
    Model(ModelError),

    /// The authentication provider could not authenticate the request.
    Authentication(AuthenticationError),

    /// OAuth2 token acquisition failed.
    #[cfg(feature = "oauth2")]
    #[from(skip)]
    OAuth2(OAuth2Error),

    /// The service answered with an OData error body.
    OData(Box<ODataError>),

    /// The service answered with a failure status that has no decodable error body.
    Api(ApiError),
}

impl GraphError {
    /// Returns the HTTP status of remote errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::OData(error) => Some(error.status_code()),
            Self::Api(error) => Some(error.status_code()),
            _ => None,
        }
    }

    /// Returns the decoded OData error, if any.
    pub fn as_odata(&self) -> Option<&ODataError> {
        match self {
            Self::OData(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(feature = "oauth2")]
impl From<OAuth2Error> for GraphError {
    fn from(value: OAuth2Error) -> Self {
        Self::OAuth2(value)
    }
}

impl From<ODataError> for GraphError {
    fn from(value: ODataError) -> Self {
        Self::OData(Box::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_status_of_remote_errors() {
        let error = GraphError::Api(ApiError::new(
            "The server returned an unexpected status code and no error factory is registered for this code: 418",
            418,
            http::HeaderMap::new(),
        ));

        assert_eq!(error.status_code(), Some(418));
        assert!(error.as_odata().is_none());
    }

    #[test]
    fn should_not_expose_status_of_local_errors() {
        let error = GraphError::from(url::ParseError::RelativeUrlWithoutBase);

        assert_eq!(error.status_code(), None);
        insta::assert_snapshot!(error, @"relative URL without a base");
    }
}
