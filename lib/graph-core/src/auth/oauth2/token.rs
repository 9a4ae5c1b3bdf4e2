use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::auth::SecureString;

/// An access token with its expiry.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct OAuth2Token {
    access_token: String,
    #[zeroize(skip)]
    expires_at: Option<Instant>,
}

impl OAuth2Token {
    /// Creates a token without known expiry.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at: None,
        }
    }

    /// Creates a token expiring after `expires_in`.
    pub fn with_expiry(access_token: impl Into<String>, expires_in: Duration) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at: Some(Instant::now() + expires_in),
        }
    }

    /// Returns the access token.
    pub fn access_token(&self) -> SecureString {
        SecureString::new(self.access_token.as_str())
    }

    /// Checks if the token is expired, never for tokens without expiry.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Instant::now() >= exp)
    }

    /// Checks if the token expires within `threshold`.
    pub fn should_refresh(&self, threshold: Duration) -> bool {
        self.expires_at
            .is_some_and(|exp| Instant::now() + threshold >= exp)
    }
}

impl fmt::Debug for OAuth2Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuth2Token")
            .field("access_token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Token shared by the concurrent requests of an adapter.
#[derive(Debug, Clone, Default)]
pub struct TokenCache {
    inner: Arc<RwLock<Option<OAuth2Token>>>,
}

impl TokenCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached token unless it expires within `threshold`.
    pub async fn get(&self, threshold: Duration) -> Option<OAuth2Token> {
        let guard = self.inner.read().await;
        guard
            .as_ref()
            .filter(|token| !token.should_refresh(threshold))
            .cloned()
    }

    /// Stores a new token.
    pub async fn set(&self, token: OAuth2Token) {
        let mut guard = self.inner.write().await;
        *guard = Some(token);
    }

    /// Drops the cached token.
    pub async fn clear(&self) {
        let mut guard = self.inner.write().await;
        *guard = None;
    }
}
