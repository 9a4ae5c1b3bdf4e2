use http::HeaderValue;
use http::header::AUTHORIZATION;
use tracing::debug;
use url::Url;

use super::{
    AccessTokenProvider, AllowedHostsValidator, AuthenticationError, AuthenticationProvider,
    SecureString,
};
use crate::adapter::BoxFuture;
use crate::request::RequestInformation;

const LOCALHOSTS: [&str; 3] = ["localhost", "127.0.0.1", "[::1]"];

/// Provider adding `Authorization: Bearer <token>` to requests.
///
/// Requests already carrying an `Authorization` header are left untouched, unless a
/// claims challenge asks for a new token.
#[derive(Debug, Clone)]
pub struct BaseBearerTokenAuthenticationProvider<P> {
    provider: P,
}

impl<P> BaseBearerTokenAuthenticationProvider<P>
where
    P: AccessTokenProvider,
{
    /// Creates the provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns the token provider.
    pub fn access_token_provider(&self) -> &P {
        &self.provider
    }

    async fn authenticate(
        &self,
        request: &mut RequestInformation,
        claims: Option<&str>,
    ) -> Result<(), AuthenticationError> {
        if request.headers.contains(AUTHORIZATION.as_str()) {
            if claims.is_none() {
                return Ok(());
            }
            request.headers.remove(AUTHORIZATION.as_str());
        }

        let url = request
            .uri()
            .map_err(|err| AuthenticationError::InvalidUrl {
                message: err.to_string(),
            })?;
        let Some(token) = self.provider.get_authorization_token(&url, claims).await? else {
            debug!(host = ?url.host_str(), "no token for this host");
            return Ok(());
        };

        let value = SecureString::new(format!("Bearer {}", token.as_str()));
        HeaderValue::from_str(value.as_str())
            .map_err(|_| AuthenticationError::InvalidBearerToken)?;
        request.headers.add(AUTHORIZATION, value.as_str());
        Ok(())
    }
}

impl<P> AuthenticationProvider for BaseBearerTokenAuthenticationProvider<P>
where
    P: AccessTokenProvider,
{
    fn authenticate_request<'a>(
        &'a self,
        request: &'a mut RequestInformation,
        claims: Option<&'a str>,
    ) -> BoxFuture<'a, Result<(), AuthenticationError>> {
        Box::pin(self.authenticate(request, claims))
    }
}

/// Checks if a URL may receive a token.
///
/// Returns `false` for hosts outside the allow list.
///
/// # Errors
///
/// Fails for plain http URLs, except to localhost.
pub(crate) fn is_token_allowed(
    url: &Url,
    allowed_hosts: &AllowedHostsValidator,
) -> Result<bool, AuthenticationError> {
    if !allowed_hosts.is_url_allowed(url) {
        return Ok(false);
    }
    let is_localhost = url
        .host_str()
        .is_some_and(|host| LOCALHOSTS.contains(&host));
    if url.scheme() != "https" && !is_localhost {
        return Err(AuthenticationError::InsecureScheme {
            url: url.to_string(),
        });
    }
    Ok(true)
}

/// Token provider returning a token acquired elsewhere.
///
/// By default the token is only sent to the Microsoft Graph hosts.
///
/// ```rust
/// use graph_core::auth::{BaseBearerTokenAuthenticationProvider, StaticTokenProvider};
///
/// let provider = StaticTokenProvider::new(std::env::var("GRAPH_TOKEN").unwrap_or_default());
/// let authentication = BaseBearerTokenAuthenticationProvider::new(provider);
/// ```
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: SecureString,
    allowed_hosts: AllowedHostsValidator,
}

impl StaticTokenProvider {
    /// Creates a provider for the Microsoft Graph hosts.
    pub fn new(token: impl Into<SecureString>) -> Self {
        Self {
            token: token.into(),
            allowed_hosts: AllowedHostsValidator::graph(),
        }
    }

    /// Replaces the hosts receiving the token.
    #[must_use]
    pub fn with_allowed_hosts(mut self, allowed_hosts: AllowedHostsValidator) -> Self {
        self.allowed_hosts = allowed_hosts;
        self
    }
}

impl AccessTokenProvider for StaticTokenProvider {
    fn get_authorization_token<'a>(
        &'a self,
        url: &'a Url,
        _claims: Option<&'a str>,
    ) -> BoxFuture<'a, Result<Option<SecureString>, AuthenticationError>> {
        Box::pin(async move {
            let token = is_token_allowed(url, &self.allowed_hosts)?.then(|| self.token.clone());
            Ok(token)
        })
    }

    fn allowed_hosts(&self) -> &AllowedHostsValidator {
        &self.allowed_hosts
    }
}
