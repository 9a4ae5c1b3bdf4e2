use std::fmt;

/// Errors of the client credentials flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OAuth2Error {
    /// The token endpoint URL is invalid.
    InvalidTokenEndpoint {
        /// The invalid URL.
        url: String,
        /// Why the URL is invalid.
        reason: String,
    },

    /// The token endpoint refused to issue a token.
    TokenAcquisitionFailed {
        /// Description of the failure.
        reason: String,
    },

    /// The HTTP client of the token requests cannot be created.
    HttpClient {
        /// Description of the failure.
        reason: String,
    },

    /// Configuration error.
    ConfigurationError {
        /// Description of the configuration issue.
        reason: String,
    },
}

impl std::error::Error for OAuth2Error {}

impl fmt::Display for OAuth2Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTokenEndpoint { url, reason } => {
                write!(f, "Invalid token endpoint URL '{url}': {reason}")
            }
            Self::TokenAcquisitionFailed { reason } => {
                write!(f, "Token acquisition failed: {reason}")
            }
            Self::HttpClient { reason } => {
                write!(f, "Cannot create the OAuth2 HTTP client: {reason}")
            }
            Self::ConfigurationError { reason } => {
                write!(f, "OAuth2 configuration error: {reason}")
            }
        }
    }
}
