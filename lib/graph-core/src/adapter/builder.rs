use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use super::{GraphAdapter, GraphError};
use crate::auth::{AnonymousAuthenticationProvider, AuthenticationProvider};
use crate::request::RequestHeaders;

/// Timeout of requests sent by the default HTTP client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(100);

/// Header identifying the library in the service telemetry.
pub const SDK_VERSION_HEADER: &str = "SdkVersion";

const SDK_VERSION: &str = concat!("graph-rust-core/", env!("CARGO_PKG_VERSION"));

/// Microsoft Graph deployments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NationalCloud {
    /// Global service.
    #[default]
    Global,
    /// US Government L4.
    UsGovL4,
    /// US Government L5 (DOD).
    UsGovL5,
    /// Microsoft Graph China operated by 21Vianet.
    China,
}

impl NationalCloud {
    /// Returns the root URL of the deployment, without version.
    pub fn root_url(self) -> &'static str {
        match self {
            Self::Global => "https://graph.microsoft.com",
            Self::UsGovL4 => "https://graph.microsoft.us",
            Self::UsGovL5 => "https://dod-graph.microsoft.us",
            Self::China => "https://microsoftgraph.chinacloudapi.cn",
        }
    }
}

/// Versions of the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiVersion {
    /// Generally available endpoints, `v1.0`.
    #[default]
    V1,
    /// Preview endpoints, `beta`.
    Beta,
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => f.write_str("v1.0"),
            Self::Beta => f.write_str("beta"),
        }
    }
}

/// Builder of [`GraphAdapter`].
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
///
/// use graph_core::adapter::{ApiVersion, GraphAdapterBuilder};
/// use graph_core::RequestAdapter;
///
/// let adapter = GraphAdapterBuilder::default()
///     .with_api_version(ApiVersion::Beta)
///     .with_timeout(Duration::from_secs(30))
///     .with_default_header("Prefer", "odata.maxpagesize=50")
///     .build()?;
///
/// assert_eq!(adapter.base_url(), "https://graph.microsoft.com/beta");
/// # Ok::<(), graph_core::GraphError>(())
/// ```
#[derive(Default)]
pub struct GraphAdapterBuilder {
    base_url: Option<Url>,
    national_cloud: NationalCloud,
    api_version: ApiVersion,
    client: Option<reqwest::Client>,
    timeout: Option<Duration>,
    authentication: Option<Arc<dyn AuthenticationProvider>>,
    default_headers: RequestHeaders,
}

impl fmt::Debug for GraphAdapterBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphAdapterBuilder")
            .field("base_url", &self.base_url)
            .field("national_cloud", &self.national_cloud)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

impl GraphAdapterBuilder {
    /// Sets the base URL, overriding the national cloud and the API version.
    ///
    /// # Errors
    ///
    /// Fails when the URL is not absolute.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, GraphError> {
        let url = Url::parse(base_url)?;
        if url.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
        }
        self.base_url = Some(url);
        Ok(self)
    }

    /// Sets the national cloud.
    #[must_use]
    pub fn with_national_cloud(mut self, national_cloud: NationalCloud) -> Self {
        self.national_cloud = national_cloud;
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn with_api_version(mut self, api_version: ApiVersion) -> Self {
        self.api_version = api_version;
        self
    }

    /// Uses a preconfigured HTTP client.
    ///
    /// The timeout of the builder is ignored, the client keeps its own.
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Sets the timeout of the default HTTP client.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the authentication provider, anonymous by default.
    #[must_use]
    pub fn with_authentication(mut self, provider: impl AuthenticationProvider + 'static) -> Self {
        self.authentication = Some(Arc::new(provider));
        self
    }

    /// Adds a header sent with every request that does not set it.
    #[must_use]
    pub fn with_default_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.default_headers.add(name, value);
        self
    }

    /// Builds the adapter.
    ///
    /// # Errors
    ///
    /// Fails when the HTTP client cannot be created.
    pub fn build(self) -> Result<GraphAdapter, GraphError> {
        let base_url = match self.base_url {
            Some(url) => url.as_str().trim_end_matches('/').to_owned(),
            None => format!("{}/{}", self.national_cloud.root_url(), self.api_version),
        };

        let client = match self.client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
                .build()?,
        };

        let mut default_headers = self.default_headers;
        default_headers.try_add(SDK_VERSION_HEADER, SDK_VERSION);

        let authentication = self
            .authentication
            .unwrap_or_else(|| Arc::new(AnonymousAuthenticationProvider));

        Ok(GraphAdapter::new(
            client,
            base_url,
            authentication,
            default_headers,
        ))
    }
}
