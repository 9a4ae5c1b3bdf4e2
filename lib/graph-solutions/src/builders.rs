//! Generic request builders.
//!
//! Every resource of the API is one of a few shapes: a collection, an entity, the
//! `$count` of a collection, an action or a function. The builders below implement
//! these shapes once; the navigation methods of [`crate::solutions`] bind them to
//! the paths and models of each resource.

use std::fmt;
use std::marker::PhantomData;

use graph_core::adapter::{ErrorMappings, GraphError, RequestAdapterExt};
use graph_core::request::TemplateValue;
use graph_core::{
    BaseRequestBuilder, CollectionQueryParameters, CollectionResponse, CountQueryParameters,
    EntityQueryParameters, NoQueryParameters, Parsable, QueryParameters, RequestConfiguration,
    RequestInformation,
};
use http::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Accept header of `$count` requests.
const COUNT_ACCEPT: &str = "text/plain;q=0.9";

macro_rules! builder_boilerplate {
    ($name:ident < $($param:ident),+ >) => {
        impl<$($param),+> Clone for $name<$($param),+> {
            fn clone(&self) -> Self {
                Self {
                    base: self.base.clone(),
                    marker: PhantomData,
                }
            }
        }

        impl<$($param),+> fmt::Debug for $name<$($param),+> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("url_template", &self.base.url_template())
                    .field("path_parameters", &self.base.path_parameters())
                    .finish_non_exhaustive()
            }
        }

        impl<$($param),+> $name<$($param),+> {
            /// Wraps a base builder addressing the resource.
            pub fn new(base: BaseRequestBuilder) -> Self {
                Self {
                    base,
                    marker: PhantomData,
                }
            }

            /// Returns the underlying base builder.
            pub fn base(&self) -> &BaseRequestBuilder {
                &self.base
            }

            /// Returns a builder for an absolute URL, such as an `@odata.nextLink`.
            #[must_use]
            pub fn with_url(&self, raw_url: impl Into<String>) -> Self {
                Self::new(self.base.with_url(raw_url))
            }
        }
    };
}

/// Builder of a collection of entities, such as `/solutions/bookingBusinesses`.
pub struct EntityCollectionRequestBuilder<M, Q = CollectionQueryParameters> {
    base: BaseRequestBuilder,
    marker: PhantomData<fn() -> (M, Q)>,
}

builder_boilerplate!(EntityCollectionRequestBuilder<M, Q>);

impl<M, Q> EntityCollectionRequestBuilder<M, Q>
where
    M: Parsable,
    Q: QueryParameters,
{
    /// Navigates from a parent resource to the collection segment.
    pub fn at(parent: &BaseRequestBuilder, segment: &str) -> Self {
        Self::new(parent.navigate(segment, Q::TEMPLATE))
    }

    /// Addresses an item of the collection by its key.
    pub fn by_id(&self, id: impl Into<String>) -> EntityRequestBuilder<M> {
        EntityRequestBuilder::new(self.base.navigate_with_parameter(
            &M::id_parameter(),
            TemplateValue::Text(id.into()),
            EntityQueryParameters::TEMPLATE,
        ))
    }

    /// Addresses the number of items of the collection.
    pub fn count(&self) -> CountRequestBuilder {
        CountRequestBuilder::new(self.base.navigate("$count", CountQueryParameters::TEMPLATE))
    }

    /// Lists a page of the collection.
    ///
    /// # Errors
    ///
    /// Fails on local errors or when the service answers with a failure.
    pub async fn get(
        &self,
        config: Option<RequestConfiguration<Q>>,
    ) -> Result<Option<CollectionResponse<M>>, GraphError> {
        let request = self.to_get_request_information(config);
        self.base
            .adapter()
            .send(request, &ErrorMappings::odata())
            .await
    }

    /// Creates an item of the collection, sending every property of `body`.
    ///
    /// # Errors
    ///
    /// Fails on local errors or when the service answers with a failure.
    pub async fn post(
        &self,
        body: &M,
        config: Option<RequestConfiguration>,
    ) -> Result<Option<M>, GraphError> {
        let request = self.to_post_request_information(body, config)?;
        self.base
            .adapter()
            .send(request, &ErrorMappings::odata())
            .await
    }

    /// Describes the `GET` request without sending it.
    pub fn to_get_request_information(&self, config: Option<RequestConfiguration<Q>>) -> RequestInformation {
        self.base.request_information(Method::GET, config)
    }

    /// Describes the `POST` request without sending it.
    ///
    /// # Errors
    ///
    /// Fails when the body cannot be serialized.
    pub fn to_post_request_information(
        &self,
        body: &M,
        config: Option<RequestConfiguration>,
    ) -> Result<RequestInformation, GraphError> {
        let mut request = self.base.request_information(Method::POST, config);
        request.set_content_from_parsable(body, false)?;
        Ok(request)
    }
}

/// Builder of a single entity, such as `/solutions/bookingBusinesses/{id}`.
pub struct EntityRequestBuilder<M> {
    base: BaseRequestBuilder,
    marker: PhantomData<fn() -> M>,
}

builder_boilerplate!(EntityRequestBuilder<M>);

impl<M> EntityRequestBuilder<M>
where
    M: Parsable,
{
    /// Navigates from a parent resource to a single-valued segment.
    pub fn at(parent: &BaseRequestBuilder, segment: &str) -> Self {
        Self::new(parent.navigate(segment, EntityQueryParameters::TEMPLATE))
    }

    /// Reads the entity.
    ///
    /// # Errors
    ///
    /// Fails on local errors or when the service answers with a failure.
    pub async fn get(
        &self,
        config: Option<RequestConfiguration<EntityQueryParameters>>,
    ) -> Result<Option<M>, GraphError> {
        let request = self.to_get_request_information(config);
        self.base
            .adapter()
            .send(request, &ErrorMappings::odata())
            .await
    }

    /// Updates the entity with the properties changed since it was received.
    ///
    /// # Errors
    ///
    /// Fails on local errors or when the service answers with a failure.
    pub async fn patch(
        &self,
        body: &M,
        config: Option<RequestConfiguration>,
    ) -> Result<Option<M>, GraphError> {
        let request = self.to_patch_request_information(body, config)?;
        self.base
            .adapter()
            .send(request, &ErrorMappings::odata())
            .await
    }

    /// Deletes the entity.
    ///
    /// # Errors
    ///
    /// Fails on local errors or when the service answers with a failure.
    pub async fn delete(&self, config: Option<RequestConfiguration>) -> Result<(), GraphError> {
        let request = self.to_delete_request_information(config);
        self.base
            .adapter()
            .send_no_content(request, &ErrorMappings::odata())
            .await
    }

    /// Describes the `GET` request without sending it.
    pub fn to_get_request_information(
        &self,
        config: Option<RequestConfiguration<EntityQueryParameters>>,
    ) -> RequestInformation {
        self.base.request_information(Method::GET, config)
    }

    /// Describes the `PATCH` request without sending it.
    ///
    /// # Errors
    ///
    /// Fails when the body cannot be serialized.
    pub fn to_patch_request_information(
        &self,
        body: &M,
        config: Option<RequestConfiguration>,
    ) -> Result<RequestInformation, GraphError> {
        let mut request = self.base.request_information(Method::PATCH, config);
        request.set_content_from_parsable(body, true)?;
        Ok(request)
    }

    /// Describes the `DELETE` request without sending it.
    pub fn to_delete_request_information(&self, config: Option<RequestConfiguration>) -> RequestInformation {
        self.base.request_information(Method::DELETE, config)
    }
}

/// Builder of the `$count` of a collection.
#[derive(Debug, Clone)]
pub struct CountRequestBuilder {
    base: BaseRequestBuilder,
}

impl CountRequestBuilder {
    /// Wraps a base builder addressing the `$count` segment.
    pub fn new(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    /// Counts the items of the collection.
    ///
    /// # Errors
    ///
    /// Fails on local errors or when the service answers with a failure.
    pub async fn get(
        &self,
        config: Option<RequestConfiguration<CountQueryParameters>>,
    ) -> Result<Option<i32>, GraphError> {
        let request = self.to_get_request_information(config);
        self.base
            .adapter()
            .send_primitive(request, &ErrorMappings::odata())
            .await
    }

    /// Describes the `GET` request without sending it.
    pub fn to_get_request_information(
        &self,
        config: Option<RequestConfiguration<CountQueryParameters>>,
    ) -> RequestInformation {
        let mut request = RequestInformation::with_path_parameters(
            Method::GET,
            self.base.url_template(),
            self.base.path_parameters().clone(),
        );
        request.configure(config);
        request.headers.try_add(http::header::ACCEPT, COUNT_ACCEPT);
        request
    }
}

/// Builder of an OData action answering with a value, such as `restorePoints/search`.
///
/// `B` is the request body, `()` for actions without parameters.
pub struct ActionRequestBuilder<B, R> {
    base: BaseRequestBuilder,
    marker: PhantomData<fn(B) -> R>,
}

builder_boilerplate!(ActionRequestBuilder<B, R>);

impl<B, R> ActionRequestBuilder<B, R>
where
    B: Serialize + Sync,
    R: DeserializeOwned + Send,
{
    /// Navigates from a parent resource to the action segment.
    pub fn at(parent: &BaseRequestBuilder, segment: &str) -> Self {
        Self::new(parent.navigate(segment, NoQueryParameters::TEMPLATE))
    }

    /// Invokes the action.
    ///
    /// # Errors
    ///
    /// Fails on local errors or when the service answers with a failure.
    pub async fn post(&self, body: &B, config: Option<RequestConfiguration>) -> Result<Option<R>, GraphError> {
        let request = self.to_post_request_information(body, config)?;
        self.base
            .adapter()
            .send(request, &ErrorMappings::odata())
            .await
    }

    /// Describes the `POST` request without sending it.
    ///
    /// # Errors
    ///
    /// Fails when the body cannot be serialized.
    pub fn to_post_request_information(
        &self,
        body: &B,
        config: Option<RequestConfiguration>,
    ) -> Result<RequestInformation, GraphError> {
        let mut request = self.base.request_information(Method::POST, config);
        request.set_content_from_json(body)?;
        Ok(request)
    }
}

impl<R> ActionRequestBuilder<(), R>
where
    R: DeserializeOwned + Send,
{
    /// Invokes an action without parameters.
    ///
    /// # Errors
    ///
    /// Fails on local errors or when the service answers with a failure.
    pub async fn invoke(&self, config: Option<RequestConfiguration>) -> Result<Option<R>, GraphError> {
        self.post(&(), config).await
    }
}

/// Builder of an OData action answering `204 No Content`, such as `publish`.
pub struct NoContentActionRequestBuilder<B> {
    base: BaseRequestBuilder,
    marker: PhantomData<fn(B)>,
}

builder_boilerplate!(NoContentActionRequestBuilder<B>);

impl<B> NoContentActionRequestBuilder<B>
where
    B: Serialize + Sync,
{
    /// Navigates from a parent resource to the action segment.
    pub fn at(parent: &BaseRequestBuilder, segment: &str) -> Self {
        Self::new(parent.navigate(segment, NoQueryParameters::TEMPLATE))
    }

    /// Invokes the action.
    ///
    /// # Errors
    ///
    /// Fails on local errors or when the service answers with a failure.
    pub async fn post(&self, body: &B, config: Option<RequestConfiguration>) -> Result<(), GraphError> {
        let request = self.to_post_request_information(body, config)?;
        self.base
            .adapter()
            .send_no_content(request, &ErrorMappings::odata())
            .await
    }

    /// Describes the `POST` request without sending it.
    ///
    /// # Errors
    ///
    /// Fails when the body cannot be serialized.
    pub fn to_post_request_information(
        &self,
        body: &B,
        config: Option<RequestConfiguration>,
    ) -> Result<RequestInformation, GraphError> {
        let mut request = self.base.request_information(Method::POST, config);
        request.set_content_from_json(body)?;
        Ok(request)
    }
}

impl NoContentActionRequestBuilder<()> {
    /// Invokes an action without parameters.
    ///
    /// # Errors
    ///
    /// Fails on local errors or when the service answers with a failure.
    pub async fn invoke(&self, config: Option<RequestConfiguration>) -> Result<(), GraphError> {
        self.post(&(), config).await
    }
}

/// Builder of an OData function, parameters inlined in the path such as
/// `getByUserRole(role='{role}')`.
pub struct FunctionRequestBuilder<R, Q = NoQueryParameters> {
    base: BaseRequestBuilder,
    marker: PhantomData<fn() -> (R, Q)>,
}

builder_boilerplate!(FunctionRequestBuilder<R, Q>);

impl<R, Q> FunctionRequestBuilder<R, Q>
where
    R: DeserializeOwned + Send,
    Q: QueryParameters,
{
    /// Navigates from a parent resource to the function segment, binding its parameters.
    pub fn at<'a>(
        parent: &BaseRequestBuilder,
        segment: &str,
        parameters: impl IntoIterator<Item = (&'a str, String)>,
    ) -> Self {
        let base = parameters
            .into_iter()
            .fold(parent.navigate(segment, Q::TEMPLATE), |base, (name, value)| {
                base.with_parameter(name, value)
            });
        Self::new(base)
    }

    /// Calls the function.
    ///
    /// # Errors
    ///
    /// Fails on local errors or when the service answers with a failure.
    pub async fn get(&self, config: Option<RequestConfiguration<Q>>) -> Result<Option<R>, GraphError> {
        let request = self.to_get_request_information(config);
        self.base
            .adapter()
            .send(request, &ErrorMappings::odata())
            .await
    }

    /// Describes the `GET` request without sending it.
    pub fn to_get_request_information(&self, config: Option<RequestConfiguration<Q>>) -> RequestInformation {
        self.base.request_information(Method::GET, config)
    }
}
