//! # Graph Solutions
//!
//! Typed request builders and models for the `/solutions` resources of Microsoft Graph:
//! Microsoft 365 Backup Storage, Microsoft Bookings and Teams virtual events.
//!
//! Requests start from a [`GraphServiceClient`] and follow the URL structure of the API.
//! Each builder exposes the verbs its resource supports and a `to_*_request_information`
//! method describing the request without sending it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use graph_core::auth::{BaseBearerTokenAuthenticationProvider, StaticTokenProvider};
//! use graph_core::{CollectionQueryParameters, GraphAdapter, RequestConfiguration};
//! use graph_solutions::GraphServiceClient;
//! use graph_solutions::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let token = StaticTokenProvider::new("eyJ0eXAi...");
//! let adapter = GraphAdapter::builder()
//!     .with_authentication(BaseBearerTokenAuthenticationProvider::new(token))
//!     .build()?;
//! let client = GraphServiceClient::new(adapter);
//!
//! let query = CollectionQueryParameters::default().select(["id", "displayName"]).top(10);
//! let businesses = client
//!     .solutions()
//!     .booking_businesses()
//!     .get(Some(RequestConfiguration::new().with_query(query)))
//!     .await?
//!     .unwrap_or_default();
//!
//! for business in &businesses.value {
//!     println!("{:?}: {:?}", business.id()?, business.display_name()?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Updates
//!
//! Models record the properties set since they were received, and `patch` only sends
//! those:
//!
//! ```rust,no_run
//! # use graph_solutions::GraphServiceClient;
//! # async fn run(client: GraphServiceClient) -> Result<(), Box<dyn std::error::Error>> {
//! let business = client.solutions().booking_businesses().by_id("Contoso@contoso.com");
//! let mut current = business.get(None).await?.unwrap_or_default();
//! current.set_phone("206-555-0100")?;
//! business.patch(&current, None).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use graph_core::request::BASE_URL_KEY;
use graph_core::{BaseRequestBuilder, CollectionResponse, PageIterator, RequestAdapter};
use serde::de::DeserializeOwned;

pub mod builders;
pub mod models;
pub mod solutions;

pub use self::builders::{
    ActionRequestBuilder, CountRequestBuilder, EntityCollectionRequestBuilder,
    EntityRequestBuilder, FunctionRequestBuilder, NoContentActionRequestBuilder,
};

/// Property traits of the models, for inherited properties such as `id`.
pub mod prelude {
    pub use crate::models::{
        EntityProperties, IdentityProperties, ProtectionPolicyProperties, ProtectionRuleProperties,
        ProtectionUnitProperties, RestoreArtifactProperties, RestoreSessionProperties,
        VirtualEventProperties, VirtualEventRegistrationConfigurationProperties,
        VirtualEventRegistrationQuestionProperties,
    };
    pub use graph_core::Parsable;
}

/// Entry point of the requests.
///
/// Cloning the client is cheap, the adapter is shared.
#[derive(Debug, Clone)]
pub struct GraphServiceClient {
    base: BaseRequestBuilder,
}

impl GraphServiceClient {
    /// Creates a client sending requests through an adapter.
    pub fn new(adapter: impl RequestAdapter + 'static) -> Self {
        Self::with_adapter(Arc::new(adapter))
    }

    /// Creates a client sharing an adapter.
    pub fn with_adapter(adapter: Arc<dyn RequestAdapter>) -> Self {
        let base_url = adapter.base_url().to_owned();
        let base = BaseRequestBuilder::root(adapter).with_parameter(BASE_URL_KEY, base_url);
        Self { base }
    }

    /// Returns the adapter sending the requests.
    pub fn adapter(&self) -> &Arc<dyn RequestAdapter> {
        self.base.adapter()
    }

    /// `/solutions`
    pub fn solutions(&self) -> EntityRequestBuilder<models::SolutionsRoot> {
        EntityRequestBuilder::at(&self.base, "solutions")
    }

    /// Iterates over the pages of a collection, starting from a received page.
    pub fn page_iterator<T>(&self, first_page: CollectionResponse<T>) -> PageIterator<T>
    where
        T: DeserializeOwned + Send,
    {
        PageIterator::new(Arc::clone(self.adapter()), first_page)
    }
}
