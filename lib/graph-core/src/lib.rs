//! # Graph Core
//!
//! Request abstractions shared by the typed Microsoft Graph request builders.
//!
//! The crate is split along the life of a request:
//!
//! - [`request`]: URI templates, OData query parameters, headers and the
//!   [`RequestInformation`] describing one HTTP exchange
//! - [`adapter`]: the [`RequestAdapter`] seam, the reqwest backed [`GraphAdapter`]
//!   and the mapping of failed responses to [`GraphError`]
//! - [`auth`]: authentication providers adding bearer tokens to requests
//! - [`model`]: backing-store models, polymorphic unions and the OData error body
//! - [`page`]: iteration over `@odata.nextLink` paged collections
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use graph_core::adapter::{ErrorMappings, RequestAdapterExt};
//! use graph_core::auth::{BaseBearerTokenAuthenticationProvider, StaticTokenProvider};
//! use graph_core::request::RequestInformation;
//! use graph_core::GraphAdapter;
//! use http::Method;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let token = StaticTokenProvider::new("eyJ0eXAi...");
//! let adapter = GraphAdapter::builder()
//!     .with_authentication(BaseBearerTokenAuthenticationProvider::new(token))
//!     .build()?;
//!
//! let mut request = RequestInformation::new(Method::GET, "{+baseurl}/solutions/bookingCurrencies");
//! request.headers.try_add("Accept", "application/json");
//!
//! let currencies: Option<serde_json::Value> = adapter
//!     .send(request, &ErrorMappings::odata())
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every fallible operation returns [`GraphError`]. Failed HTTP exchanges surface as
//! [`GraphError::OData`] when the body decodes as an OData error and as
//! [`GraphError::Api`] otherwise; both carry the status code and response headers.

pub mod adapter;
pub mod auth;
pub mod model;
pub mod page;
pub mod request;
pub mod testing;

pub use self::adapter::{GraphAdapter, GraphAdapterBuilder, GraphError, RequestAdapter};
pub use self::model::{BackingStore, CollectionResponse, ModelError, ODataError, Parsable};
pub use self::page::PageIterator;
pub use self::request::{
    BaseRequestBuilder, CollectionQueryParameters, CountQueryParameters, EntityQueryParameters,
    NoQueryParameters, QueryParameters, RequestConfiguration, RequestHeaders, RequestInformation,
};

// Used by the model declaration macros.
#[doc(hidden)]
pub use serde as __serde;
