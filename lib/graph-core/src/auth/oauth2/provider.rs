use oauth2::basic::BasicClient;
use oauth2::{AuthType, ClientId, ClientSecret, Scope, TokenResponse, TokenUrl};
use tracing::debug;
use url::Url;

use super::config::ClientCredentialsConfig;
use super::error::OAuth2Error;
use super::token::OAuth2Token;
use crate::adapter::BoxFuture;
use crate::auth::bearer::is_token_allowed;
use crate::auth::{AccessTokenProvider, AllowedHostsValidator, AuthenticationError, SecureString};

impl ClientCredentialsConfig {
    /// Gets a valid token, requesting a new one when the cached one is about to expire.
    ///
    /// # Errors
    ///
    /// Fails when the token endpoint refuses the credentials or cannot be reached.
    pub async fn get_valid_token(&self) -> Result<OAuth2Token, OAuth2Error> {
        if let Some(token) = self.token_cache.get(self.refresh_threshold).await {
            return Ok(token);
        }
        self.acquire_token().await
    }

    /// Requests a new token and caches it.
    ///
    /// # Errors
    ///
    /// Fails when the token endpoint refuses the credentials or cannot be reached.
    pub async fn acquire_token(&self) -> Result<OAuth2Token, OAuth2Error> {
        let client = BasicClient::new(ClientId::new(self.client_id.clone()))
            .set_client_secret(ClientSecret::new(self.client_secret.as_str().to_owned()))
            .set_auth_type(AuthType::RequestBody)
            .set_token_uri(TokenUrl::from_url(self.token_url.clone()));

        let request = self
            .scopes
            .iter()
            .fold(client.exchange_client_credentials(), |request, scope| {
                request.add_scope(Scope::new(scope.clone()))
            });

        debug!(token_url = %self.token_url, "acquiring access token");
        let response = request
            .request_async(&self.http_client)
            .await
            .map_err(|err| OAuth2Error::TokenAcquisitionFailed {
                reason: err.to_string(),
            })?;

        let access_token = response.access_token().secret().clone();
        let token = match response.expires_in() {
            Some(expires_in) => OAuth2Token::with_expiry(access_token, expires_in),
            None => OAuth2Token::new(access_token),
        };
        self.token_cache.set(token.clone()).await;

        Ok(token)
    }

    async fn token_for(
        &self,
        url: &Url,
        claims: Option<&str>,
    ) -> Result<Option<SecureString>, AuthenticationError> {
        if !is_token_allowed(url, &self.allowed_hosts)? {
            return Ok(None);
        }
        // A claims challenge revokes the cached token.
        if claims.is_some() {
            self.token_cache.clear().await;
        }
        let token = self
            .get_valid_token()
            .await
            .map_err(|err| AuthenticationError::TokenAcquisition {
                message: err.to_string(),
            })?;
        Ok(Some(token.access_token()))
    }
}

impl AccessTokenProvider for ClientCredentialsConfig {
    fn get_authorization_token<'a>(
        &'a self,
        url: &'a Url,
        claims: Option<&'a str>,
    ) -> BoxFuture<'a, Result<Option<SecureString>, AuthenticationError>> {
        Box::pin(self.token_for(url, claims))
    }

    fn allowed_hosts(&self) -> &AllowedHostsValidator {
        &self.allowed_hosts
    }
}
