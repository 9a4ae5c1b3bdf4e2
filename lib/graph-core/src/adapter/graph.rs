use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::{Instrument, debug, debug_span};

use super::{BoxFuture, GraphAdapterBuilder, GraphError, NativeResponse, RequestAdapter};
use crate::auth::AuthenticationProvider;
use crate::request::{BASE_URL_KEY, RequestHeaders, RequestInformation, RequestTimeout, TemplateValue};

/// Header correlating a request with the service logs.
pub const CLIENT_REQUEST_ID: &str = "client-request-id";

static QUERY_EXPRESSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\?[^}]*\}").expect("a valid regex"));

/// Request adapter sending requests to Microsoft Graph with reqwest.
///
/// Each request is authenticated, completed with the default headers and a
/// `client-request-id`, then sent once.
///
/// ```rust,no_run
/// use graph_core::GraphAdapter;
/// use graph_core::adapter::NationalCloud;
///
/// let adapter = GraphAdapter::builder()
///     .with_national_cloud(NationalCloud::UsGovL4)
///     .build()?;
/// # Ok::<(), graph_core::GraphError>(())
/// ```
#[derive(Clone)]
pub struct GraphAdapter {
    client: reqwest::Client,
    base_url: String,
    authentication: Arc<dyn AuthenticationProvider>,
    default_headers: RequestHeaders,
}

impl fmt::Debug for GraphAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphAdapter")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

impl GraphAdapter {
    /// Creates a builder with the Microsoft Graph defaults.
    pub fn builder() -> GraphAdapterBuilder {
        GraphAdapterBuilder::default()
    }

    pub(super) fn new(
        client: reqwest::Client,
        base_url: String,
        authentication: Arc<dyn AuthenticationProvider>,
        default_headers: RequestHeaders,
    ) -> Self {
        Self {
            client,
            base_url,
            authentication,
            default_headers,
        }
    }

    async fn send_once(&self, mut request: RequestInformation) -> Result<NativeResponse, GraphError> {
        request
            .path_parameters
            .insert(BASE_URL_KEY.to_owned(), TemplateValue::from(self.base_url.as_str()));
        self.authentication
            .authenticate_request(&mut request, None)
            .await?;

        for (name, values) in self.default_headers.iter() {
            if !request.headers.contains(name) {
                for value in values {
                    request.headers.add(name, value.as_str());
                }
            }
        }
        request
            .headers
            .try_add(CLIENT_REQUEST_ID, uuid::Uuid::new_v4().to_string());

        let native = to_native_request(&request)?;
        debug!(?native, "sending...");
        let response = self.client.execute(native).await?;

        let status = response.status();
        let headers = response.headers().clone();
        debug!(%status, ?headers, "...receiving");
        let body = response.bytes().await?;

        Ok(NativeResponse {
            status,
            headers,
            body,
        })
    }
}

impl RequestAdapter for GraphAdapter {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn execute(&self, request: RequestInformation) -> BoxFuture<'_, Result<NativeResponse, GraphError>> {
        let span = debug_span!(
            "graph_request",
            method = %request.method,
            template = %QUERY_EXPRESSION.replace(&request.url_template, ""),
        );
        Box::pin(self.send_once(request).instrument(span))
    }
}

fn to_native_request(request: &RequestInformation) -> Result<reqwest::Request, GraphError> {
    let url = request.uri()?;
    let mut native = reqwest::Request::new(request.method.clone(), url);
    *native.headers_mut() = request.headers.to_header_map()?;
    if let Some(content) = &request.content {
        *native.body_mut() = Some(reqwest::Body::from(content.clone()));
    }
    if let Some(RequestTimeout(timeout)) = request.options.get::<RequestTimeout>() {
        *native.timeout_mut() = Some(*timeout);
    }
    Ok(native)
}

#[cfg(test)]
mod tests {
    use http::Method;

    use super::*;
    use crate::auth::{AnonymousAuthenticationProvider, BaseBearerTokenAuthenticationProvider, StaticTokenProvider};

    fn adapter() -> GraphAdapter {
        GraphAdapter::builder()
            .with_authentication(AnonymousAuthenticationProvider)
            .with_timeout(std::time::Duration::from_secs(5))
            .build()
            .expect("a valid adapter")
    }

    #[test]
    fn should_expand_base_url_and_body() {
        let adapter = adapter();
        let mut request = RequestInformation::new(Method::POST, "{+baseurl}/solutions/bookingBusinesses");
        request
            .path_parameters
            .insert(BASE_URL_KEY.to_owned(), TemplateValue::from(adapter.base_url()));
        request
            .set_content_from_json(&serde_json::json!({ "displayName": "Contoso" }))
            .expect("serializable");
        request.options.add(RequestTimeout(std::time::Duration::from_secs(1)));

        let native = to_native_request(&request).expect("a valid request");

        assert_eq!(native.url().as_str(), "https://graph.microsoft.com/v1.0/solutions/bookingBusinesses");
        assert_eq!(native.method(), Method::POST);
        assert_eq!(native.timeout(), Some(&std::time::Duration::from_secs(1)));
        assert_eq!(
            native.headers().get(http::header::CONTENT_TYPE).map(http::HeaderValue::as_bytes),
            Some(b"application/json".as_slice())
        );
    }

    #[tokio::test]
    async fn should_hide_bearer_token_from_debug_output() {
        let provider = BaseBearerTokenAuthenticationProvider::new(StaticTokenProvider::new("super-secret-token"));
        let mut request = RequestInformation::new(Method::GET, "{+baseurl}/solutions");
        request.path_parameters.insert(
            BASE_URL_KEY.to_owned(),
            TemplateValue::from("https://graph.microsoft.com/v1.0"),
        );
        provider
            .authenticate_request(&mut request, None)
            .await
            .expect("an authenticated request");

        let native = to_native_request(&request).expect("a valid request");

        let output = format!("{native:?}");
        assert!(!output.contains("super-secret-token"), "{output}");
        assert!(native.headers().contains_key(http::header::AUTHORIZATION));
    }

    #[test]
    fn should_strip_query_expression_from_span_name() {
        let template = "{+baseurl}/solutions/virtualEvents/webinars{?%24count,%24top}";

        let name = QUERY_EXPRESSION.replace(template, "");

        assert_eq!(name, "{+baseurl}/solutions/virtualEvents/webinars");
    }

    #[test]
    fn should_hide_authentication_in_debug() {
        let debug = format!("{:?}", adapter());

        insta::assert_snapshot!(debug, @r#"GraphAdapter { base_url: "https://graph.microsoft.com/v1.0", default_headers: RequestHeaders { headers: {"sdkversion": {"graph-rust-core/0.1.0"}} }, .. }"#);
    }
}
