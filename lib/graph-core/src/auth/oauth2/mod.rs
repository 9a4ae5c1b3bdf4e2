//! Client credentials flow of the Microsoft identity platform.
//!
//! This module is only available when the `oauth2` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! graph-core = { version = "...", features = ["oauth2"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use graph_core::auth::BaseBearerTokenAuthenticationProvider;
//! use graph_core::auth::oauth2::ClientCredentialsConfig;
//! use graph_core::GraphAdapter;
//!
//! let credentials = ClientCredentialsConfig::builder(tenant_id, client_id, client_secret)
//!     .build()?;
//!
//! let adapter = GraphAdapter::builder()
//!     .with_authentication(BaseBearerTokenAuthenticationProvider::new(credentials))
//!     .build()?;
//! ```

mod config;
mod error;
mod provider;
mod token;

pub use self::config::{
    ClientCredentialsConfig, ClientCredentialsConfigBuilder, DEFAULT_AUTHORITY, DEFAULT_SCOPE,
};
pub use self::error::OAuth2Error;
pub use self::token::{OAuth2Token, TokenCache};
