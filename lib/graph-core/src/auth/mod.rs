//! Authentication of requests.
//!
//! The adapter calls an [`AuthenticationProvider`] before sending each request.
//! [`BaseBearerTokenAuthenticationProvider`] adds an `Authorization: Bearer` header with
//! the token of an [`AccessTokenProvider`]:
//! - [`StaticTokenProvider`] for a token acquired elsewhere
//! - `ClientCredentialsConfig`, with the `oauth2` feature, for the client credentials flow
//!   of the Microsoft identity platform

use std::fmt::Debug;

use url::Url;

use crate::adapter::BoxFuture;
use crate::request::RequestInformation;

mod bearer;
mod hosts;
#[cfg(feature = "oauth2")]
pub mod oauth2;
mod secure;

pub use self::bearer::{BaseBearerTokenAuthenticationProvider, StaticTokenProvider};
pub use self::hosts::{AllowedHostsValidator, GRAPH_HOSTS};
pub use self::secure::SecureString;

/// Errors raised while authenticating a request.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error, derive_more::Display)]
pub enum AuthenticationError {
    /// Bearer token contains invalid characters for HTTP headers.
    #[display("Bearer token contains invalid characters")]
    InvalidBearerToken,

    /// The request URL cannot be computed.
    #[display("Cannot compute the request URL: {message}")]
    InvalidUrl {
        /// Description of the failure.
        message: String,
    },

    /// Tokens are only sent over https, except to localhost.
    #[display("Only https URLs can receive a bearer token, got '{url}'")]
    InsecureScheme {
        /// The rejected URL.
        url: String,
    },

    /// The token provider could not acquire a token.
    #[display("Cannot acquire an access token: {message}")]
    TokenAcquisition {
        /// Description of the failure.
        message: String,
    },
}

/// Authenticates requests before they are sent.
pub trait AuthenticationProvider: Debug + Send + Sync {
    /// Adds the authentication of the request, usually an `Authorization` header.
    ///
    /// `claims` carries the claims challenge of a Continuous Access Evaluation response,
    /// forcing a new token.
    fn authenticate_request<'a>(
        &'a self,
        request: &'a mut RequestInformation,
        claims: Option<&'a str>,
    ) -> BoxFuture<'a, Result<(), AuthenticationError>>;
}

/// Provider leaving requests untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousAuthenticationProvider;

impl AuthenticationProvider for AnonymousAuthenticationProvider {
    fn authenticate_request<'a>(
        &'a self,
        _request: &'a mut RequestInformation,
        _claims: Option<&'a str>,
    ) -> BoxFuture<'a, Result<(), AuthenticationError>> {
        Box::pin(async { Ok(()) })
    }
}

/// Acquires access tokens for a URL.
pub trait AccessTokenProvider: Debug + Send + Sync {
    /// Returns a token for the URL, or `None` when the URL must not receive one.
    fn get_authorization_token<'a>(
        &'a self,
        url: &'a Url,
        claims: Option<&'a str>,
    ) -> BoxFuture<'a, Result<Option<SecureString>, AuthenticationError>>;

    /// Returns the hosts allowed to receive the tokens.
    fn allowed_hosts(&self) -> &AllowedHostsValidator;
}
