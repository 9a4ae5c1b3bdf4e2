//! Description of the HTTP requests emitted by the request builders.
//!
//! A request builder never talks to the network itself: it fills a
//! [`RequestInformation`] (method, URL template, parameters, headers, body and options)
//! and hands it to a [`RequestAdapter`](crate::RequestAdapter).

use bytes::Bytes;
use http::Method;
use indexmap::IndexMap;
use serde::Serialize;
use url::Url;

use crate::adapter::GraphError;
use crate::model::Parsable;

mod builder;
mod headers;
mod options;
mod query;
pub mod uri_template;

pub use self::builder::BaseRequestBuilder;
pub use self::headers::RequestHeaders;
pub use self::options::{RequestOptions, RequestTimeout};
pub use self::query::{
    COUNT, CollectionQueryParameters, CountQueryParameters, EXPAND, EntityQueryParameters, FILTER,
    NoQueryParameters, ORDERBY, QueryParameters, SEARCH, SELECT, SKIP, TOP,
};
pub use self::uri_template::{TemplateValue, UriTemplateError};

/// Path parameter holding an absolute URL that replaces the template.
pub const RAW_URL_KEY: &str = "request-raw-url";

/// Path parameter bound to the adapter base URL.
pub const BASE_URL_KEY: &str = "baseurl";

/// Headers, options and query parameters applied to one request.
///
/// # Example
///
/// ```rust
/// use graph_core::{CollectionQueryParameters, RequestConfiguration};
///
/// let config = RequestConfiguration::new()
///     .with_header("ConsistencyLevel", "eventual")
///     .with_query(CollectionQueryParameters::default().count(true).search("\"displayName:Contoso\""));
/// assert!(config.query_parameters.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct RequestConfiguration<Q = NoQueryParameters> {
    /// Headers added to the request.
    pub headers: RequestHeaders,
    /// Options read by the adapter.
    pub options: RequestOptions,
    /// Query parameters, when the endpoint accepts some.
    pub query_parameters: Option<Q>,
}

impl<Q> Default for RequestConfiguration<Q> {
    fn default() -> Self {
        Self {
            headers: RequestHeaders::default(),
            options: RequestOptions::default(),
            query_parameters: None,
        }
    }
}

impl<Q> RequestConfiguration<Q> {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the query parameters.
    #[must_use]
    pub fn with_query(mut self, query: Q) -> Self {
        self.query_parameters = Some(query);
        self
    }

    /// Adds a request header.
    #[must_use]
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers.add(name, value);
        self
    }

    /// Adds a request option.
    #[must_use]
    pub fn with_option<T>(mut self, option: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        self.options.add(option);
        self
    }
}

/// Everything needed to execute one HTTP request.
#[derive(Debug, Clone)]
pub struct RequestInformation {
    /// HTTP method.
    pub method: Method,
    /// RFC 6570 URL template.
    pub url_template: String,
    /// Variables bound to the path expressions of the template.
    pub path_parameters: IndexMap<String, TemplateValue>,
    /// Variables bound to the query expressions of the template.
    pub query_parameters: IndexMap<String, TemplateValue>,
    /// Request headers.
    pub headers: RequestHeaders,
    /// Request body.
    pub content: Option<Bytes>,
    /// Options read by the adapter.
    pub options: RequestOptions,
}

impl RequestInformation {
    /// Creates a request for a URL template without parameters.
    pub fn new(method: Method, url_template: impl Into<String>) -> Self {
        Self::with_path_parameters(method, url_template, IndexMap::new())
    }

    /// Creates a request for a URL template and its path parameters.
    pub fn with_path_parameters(
        method: Method,
        url_template: impl Into<String>,
        path_parameters: IndexMap<String, TemplateValue>,
    ) -> Self {
        Self {
            method,
            url_template: url_template.into(),
            path_parameters,
            query_parameters: IndexMap::new(),
            headers: RequestHeaders::default(),
            content: None,
            options: RequestOptions::default(),
        }
    }

    /// Computes the request URL.
    ///
    /// A [`RAW_URL_KEY`] path parameter takes precedence over the template.
    ///
    /// # Errors
    ///
    /// Fails when the template cannot be expanded or does not produce an absolute URL.
    pub fn uri(&self) -> Result<Url, GraphError> {
        if let Some(TemplateValue::Text(raw_url)) = self.path_parameters.get(RAW_URL_KEY) {
            return Ok(Url::parse(raw_url)?);
        }

        let mut variables = self.path_parameters.clone();
        variables.extend(
            self.query_parameters
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        );
        let expanded = uri_template::expand(&self.url_template, &variables)?;
        Ok(Url::parse(&expanded)?)
    }

    /// Replaces the template with an absolute URL.
    pub fn set_uri(&mut self, uri: &Url) {
        self.url_template.clear();
        self.path_parameters.clear();
        self.query_parameters.clear();
        self.path_parameters
            .insert(RAW_URL_KEY.to_owned(), TemplateValue::from(uri.as_str()));
    }

    /// Binds the values of typed query parameters.
    pub fn add_query_parameters<Q: QueryParameters>(&mut self, query: &Q) {
        query.write_to(&mut self.query_parameters);
    }

    /// Applies the headers, options and query parameters of a request configuration.
    pub fn configure<Q: QueryParameters>(&mut self, config: Option<RequestConfiguration<Q>>) {
        let Some(config) = config else {
            return;
        };
        self.headers.add_all(&config.headers);
        self.options.extend(config.options);
        if let Some(query) = &config.query_parameters {
            self.add_query_parameters(query);
        }
    }

    /// Serializes the body as JSON.
    ///
    /// Bodies serializing to `null`, like the unit type of parameterless actions,
    /// leave the request without content.
    ///
    /// # Errors
    ///
    /// Fails when the body cannot be serialized.
    pub fn set_content_from_json<T>(&mut self, body: &T) -> Result<(), GraphError>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(body)?;
        if value.is_null() {
            return Ok(());
        }
        self.content = Some(Bytes::from(serde_json::to_vec(&value)?));
        self.headers
            .try_add(http::header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref());
        Ok(())
    }

    /// Serializes a backed model as JSON.
    ///
    /// With `changed_only`, only the properties set since the model was received are sent,
    /// which is what `PATCH` expects.
    ///
    /// # Errors
    ///
    /// Fails when the body cannot be serialized.
    pub fn set_content_from_parsable<T: Parsable>(
        &mut self,
        body: &T,
        changed_only: bool,
    ) -> Result<(), GraphError> {
        if changed_only {
            let changes = serde_json::Value::Object(body.backing_store().changed_values());
            self.set_content_from_json(&changes)
        } else {
            self.set_content_from_json(body)
        }
    }

    /// Sets a raw body with its content type.
    pub fn set_stream_content(&mut self, content: impl Into<Bytes>, content_type: &str) {
        self.content = Some(content.into());
        self.headers.remove(http::header::CONTENT_TYPE.as_str());
        self.headers.add(http::header::CONTENT_TYPE, content_type);
    }
}
