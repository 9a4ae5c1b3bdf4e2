use std::fmt;
use std::time::Duration;

use url::Url;

use super::error::OAuth2Error;
use super::token::TokenCache;
use crate::auth::{AllowedHostsValidator, SecureString};

/// Authority of the global Microsoft identity platform.
pub const DEFAULT_AUTHORITY: &str = "https://login.microsoftonline.com";

/// Scope granting the application permissions configured for Microsoft Graph.
pub const DEFAULT_SCOPE: &str = "https://graph.microsoft.com/.default";

/// Default threshold for token refresh (60 seconds before expiry).
const DEFAULT_REFRESH_THRESHOLD: Duration = Duration::from_secs(60);

/// Client credentials of an application registered in Microsoft Entra ID.
///
/// Tokens are cached and shared by clones of the configuration; a new token is requested
/// when the cached one expires within the refresh threshold.
#[derive(Clone)]
pub struct ClientCredentialsConfig {
    pub(super) client_id: String,
    pub(super) client_secret: SecureString,
    pub(super) token_url: Url,
    pub(super) scopes: Vec<String>,
    pub(super) refresh_threshold: Duration,
    pub(super) allowed_hosts: AllowedHostsValidator,
    pub(super) http_client: oauth2::reqwest::Client,
    pub(super) token_cache: TokenCache,
}

impl ClientCredentialsConfig {
    /// Creates a builder for a tenant and an application.
    pub fn builder(
        tenant_id: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<SecureString>,
    ) -> ClientCredentialsConfigBuilder {
        ClientCredentialsConfigBuilder {
            tenant_id: tenant_id.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            authority: DEFAULT_AUTHORITY.to_owned(),
            scopes: Vec::new(),
            refresh_threshold: DEFAULT_REFRESH_THRESHOLD,
            allowed_hosts: AllowedHostsValidator::graph(),
        }
    }

    /// Returns the token endpoint.
    pub fn token_url(&self) -> &Url {
        &self.token_url
    }

    /// Returns the requested scopes.
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }
}

impl fmt::Debug for ClientCredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentialsConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("token_url", &self.token_url)
            .field("scopes", &self.scopes)
            .field("refresh_threshold", &self.refresh_threshold)
            .field("allowed_hosts", &self.allowed_hosts)
            .finish_non_exhaustive()
    }
}

/// Builder of [`ClientCredentialsConfig`].
#[derive(Clone)]
pub struct ClientCredentialsConfigBuilder {
    tenant_id: String,
    client_id: String,
    client_secret: SecureString,
    authority: String,
    scopes: Vec<String>,
    refresh_threshold: Duration,
    allowed_hosts: AllowedHostsValidator,
}

impl ClientCredentialsConfigBuilder {
    /// Sets the authority, such as `https://login.microsoftonline.us` for US Government clouds.
    #[must_use]
    pub fn with_authority(mut self, authority: impl Into<String>) -> Self {
        self.authority = authority.into();
        self
    }

    /// Adds a scope, [`DEFAULT_SCOPE`] is used when none is added.
    #[must_use]
    pub fn add_scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }

    /// Adds multiple scopes.
    #[must_use]
    pub fn add_scopes(mut self, scopes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.scopes.extend(scopes.into_iter().map(Into::into));
        self
    }

    /// Sets the refresh threshold (how long before expiry to refresh).
    #[must_use]
    pub fn with_refresh_threshold(mut self, threshold: Duration) -> Self {
        self.refresh_threshold = threshold;
        self
    }

    /// Replaces the hosts receiving the tokens, the Microsoft Graph hosts by default.
    #[must_use]
    pub fn with_allowed_hosts(mut self, allowed_hosts: AllowedHostsValidator) -> Self {
        self.allowed_hosts = allowed_hosts;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Fails when a credential is empty or the token endpoint is not a valid URL.
    pub fn build(self) -> Result<ClientCredentialsConfig, OAuth2Error> {
        for (name, value) in [
            ("tenant id", self.tenant_id.as_str()),
            ("client id", self.client_id.as_str()),
            ("client secret", self.client_secret.as_str()),
        ] {
            if value.trim().is_empty() {
                return Err(OAuth2Error::ConfigurationError {
                    reason: format!("the {name} is required"),
                });
            }
        }

        let token_url = format!(
            "{}/{}/oauth2/v2.0/token",
            self.authority.trim_end_matches('/'),
            self.tenant_id
        );
        let token_url = Url::parse(&token_url).map_err(|err| OAuth2Error::InvalidTokenEndpoint {
            url: token_url.clone(),
            reason: err.to_string(),
        })?;

        // Redirects would leak the client secret to another host.
        let http_client = oauth2::reqwest::ClientBuilder::new()
            .redirect(oauth2::reqwest::redirect::Policy::none())
            .build()
            .map_err(|err| OAuth2Error::HttpClient {
                reason: err.to_string(),
            })?;

        let scopes = if self.scopes.is_empty() {
            vec![DEFAULT_SCOPE.to_owned()]
        } else {
            self.scopes
        };

        Ok(ClientCredentialsConfig {
            client_id: self.client_id,
            client_secret: self.client_secret,
            token_url,
            scopes,
            refresh_threshold: self.refresh_threshold,
            allowed_hosts: self.allowed_hosts,
            http_client,
            token_cache: TokenCache::new(),
        })
    }
}

impl fmt::Debug for ClientCredentialsConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentialsConfigBuilder")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("authority", &self.authority)
            .field("scopes", &self.scopes)
            .finish_non_exhaustive()
    }
}
