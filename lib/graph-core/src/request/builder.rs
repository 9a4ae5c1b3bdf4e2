use std::fmt;
use std::sync::Arc;

use http::Method;
use indexmap::IndexMap;

use super::{
    QueryParameters, RAW_URL_KEY, RequestConfiguration, RequestInformation, TemplateValue,
};
use crate::adapter::RequestAdapter;

/// State shared by every typed request builder.
///
/// A builder addresses one resource: it owns the path template of that resource,
/// the query expression of its requests and the path parameters collected while
/// navigating from the service root. Navigating clones the parameters, so builders
/// are cheap values that can be kept and reused.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use graph_core::testing::MockRequestAdapter;
/// use graph_core::{BaseRequestBuilder, EntityQueryParameters, QueryParameters};
///
/// let adapter = Arc::new(MockRequestAdapter::new());
/// let businesses = BaseRequestBuilder::root(adapter)
///     .navigate("solutions", "")
///     .navigate("bookingBusinesses", "");
/// let business = businesses.navigate_with_parameter(
///     "bookingBusiness%2Did",
///     "contoso@contoso.com",
///     EntityQueryParameters::TEMPLATE,
/// );
///
/// assert_eq!(
///     business.url_template(),
///     "{+baseurl}/solutions/bookingBusinesses/{bookingBusiness%2Did}{?%24expand,%24select}"
/// );
/// ```
#[derive(Clone)]
pub struct BaseRequestBuilder {
    adapter: Arc<dyn RequestAdapter>,
    path_template: String,
    url_template: String,
    path_parameters: IndexMap<String, TemplateValue>,
}

impl fmt::Debug for BaseRequestBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseRequestBuilder")
            .field("url_template", &self.url_template)
            .field("path_parameters", &self.path_parameters)
            .finish_non_exhaustive()
    }
}

impl BaseRequestBuilder {
    /// Creates the builder of the service root, `{+baseurl}`.
    pub fn root(adapter: Arc<dyn RequestAdapter>) -> Self {
        Self {
            adapter,
            path_template: "{+baseurl}".to_owned(),
            url_template: "{+baseurl}".to_owned(),
            path_parameters: IndexMap::new(),
        }
    }

    /// Creates a builder targeting an absolute URL, such as an `@odata.nextLink`.
    ///
    /// The URL only replaces the target of the requests of this builder. Its path
    /// parameters are kept, so navigating from it addresses the children of the
    /// templated resource, not segments appended to the URL.
    #[must_use]
    pub fn with_url(&self, raw_url: impl Into<String>) -> Self {
        let mut path_parameters = self.path_parameters.clone();
        path_parameters.insert(RAW_URL_KEY.to_owned(), TemplateValue::Text(raw_url.into()));
        Self {
            adapter: Arc::clone(&self.adapter),
            path_template: self.path_template.clone(),
            url_template: self.url_template.clone(),
            path_parameters,
        }
    }

    /// Navigates to a child path segment.
    ///
    /// `query_template` is the query expression of the requests sent to the child.
    #[must_use]
    pub fn navigate(&self, segment: &str, query_template: &str) -> Self {
        let path_template = [self.path_template.as_str(), "/", segment].concat();
        let url_template = [path_template.as_str(), query_template].concat();
        let mut path_parameters = self.path_parameters.clone();
        path_parameters.shift_remove(RAW_URL_KEY);
        Self {
            adapter: Arc::clone(&self.adapter),
            path_template,
            url_template,
            path_parameters,
        }
    }

    /// Navigates to a child segment made of a single path variable, such as an entity key.
    #[must_use]
    pub fn navigate_with_parameter(
        &self,
        name: &str,
        value: impl Into<TemplateValue>,
        query_template: &str,
    ) -> Self {
        self.navigate(&["{", name, "}"].concat(), query_template)
            .with_parameter(name, value)
    }

    /// Binds a path variable used by the segments of this builder.
    #[must_use]
    pub fn with_parameter(mut self, name: &str, value: impl Into<TemplateValue>) -> Self {
        self.path_parameters.insert(name.to_owned(), value.into());
        self
    }

    /// Returns the adapter executing the requests.
    pub fn adapter(&self) -> &Arc<dyn RequestAdapter> {
        &self.adapter
    }

    /// Returns the URL template of the requests, including the query expression.
    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    /// Returns the path template of the addressed resource.
    pub fn path_template(&self) -> &str {
        &self.path_template
    }

    /// Returns the path variables collected while navigating.
    pub fn path_parameters(&self) -> &IndexMap<String, TemplateValue> {
        &self.path_parameters
    }

    /// Creates the information of a request sent to this resource.
    ///
    /// The configuration is applied first, then `Accept: application/json` is added
    /// unless the configuration chose another representation.
    pub fn request_information<Q: QueryParameters>(
        &self,
        method: Method,
        config: Option<RequestConfiguration<Q>>,
    ) -> RequestInformation {
        let mut request = RequestInformation::with_path_parameters(
            method,
            self.url_template.clone(),
            self.path_parameters.clone(),
        );
        request.configure(config);
        request
            .headers
            .try_add(http::header::ACCEPT, mime::APPLICATION_JSON.as_ref());
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{BASE_URL_KEY, CollectionQueryParameters, NoQueryParameters};
    use crate::testing::MockRequestAdapter;

    fn solutions() -> BaseRequestBuilder {
        BaseRequestBuilder::root(Arc::new(MockRequestAdapter::new())).navigate("solutions", "")
    }

    #[test]
    fn should_chain_navigation_and_parameters() {
        let builder = solutions()
            .navigate("virtualEvents", "")
            .navigate("webinars", "")
            .navigate_with_parameter("virtualEventWebinar%2Did", "webinar-1", "")
            .navigate("registrations", CollectionQueryParameters::TEMPLATE);

        insta::assert_debug_snapshot!(builder, @r#"
        BaseRequestBuilder {
            url_template: "{+baseurl}/solutions/virtualEvents/webinars/{virtualEventWebinar%2Did}/registrations{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
            path_parameters: {
                "virtualEventWebinar%2Did": Text(
                    "webinar-1",
                ),
            },
            ..
        }
        "#);
    }

    #[test]
    fn should_add_accept_header() {
        let request = solutions().request_information::<NoQueryParameters>(Method::GET, None);

        assert!(
            request
                .headers
                .get("accept")
                .is_some_and(|values| values.contains("application/json"))
        );
    }

    #[test]
    fn should_keep_configured_accept_header() {
        let config = RequestConfiguration::<NoQueryParameters>::new()
            .with_header("Accept", "text/plain");

        let request = solutions().request_information(Method::GET, Some(config));

        assert_eq!(
            request.headers.get("accept").map(|values| values.len()),
            Some(1)
        );
    }

    #[test]
    fn should_target_raw_url() {
        let builder = solutions().with_url("https://graph.microsoft.com/v1.0/solutions?$skiptoken=abc");

        let request = builder.request_information::<NoQueryParameters>(Method::GET, None);

        assert_eq!(
            request.uri().expect("valid uri").as_str(),
            "https://graph.microsoft.com/v1.0/solutions?$skiptoken=abc"
        );
    }

    #[test]
    fn should_navigate_from_raw_url_through_template() {
        let webinar = solutions()
            .with_parameter(BASE_URL_KEY, "https://graph.microsoft.com/v1.0")
            .navigate("virtualEvents", "")
            .navigate("webinars", "")
            .navigate_with_parameter("virtualEventWebinar%2Did", "webinar-1", "")
            .with_url("https://graph.microsoft.com/v1.0/solutions/virtualEvents/webinars/webinar-1?$select=id");

        let sessions = webinar.navigate("sessions", "");
        let request = sessions.request_information::<NoQueryParameters>(Method::GET, None);

        assert!(!sessions.path_parameters().contains_key(RAW_URL_KEY));
        assert_eq!(
            request.uri().expect("valid uri").as_str(),
            "https://graph.microsoft.com/v1.0/solutions/virtualEvents/webinars/webinar-1/sessions"
        );
    }
}
