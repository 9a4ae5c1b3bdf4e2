//! Iteration over paged collections.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use http::Method;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::adapter::{ErrorMappings, GraphError, RequestAdapter, RequestAdapterExt};
use crate::model::CollectionResponse;
use crate::request::{RequestHeaders, RequestInformation, RequestOptions};

/// Walks the pages of a collection by following `@odata.nextLink`.
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use graph_core::{CollectionResponse, GraphAdapter, PageIterator};
///
/// # async fn run(adapter: Arc<GraphAdapter>, first_page: CollectionResponse<serde_json::Value>) -> Result<(), graph_core::GraphError> {
/// let mut pages = PageIterator::new(adapter, first_page);
/// let mut names = Vec::new();
/// pages
///     .iterate(|business| {
///         names.push(business["displayName"].to_string());
///         names.len() < 100
///     })
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct PageIterator<T> {
    adapter: Arc<dyn RequestAdapter>,
    items: VecDeque<T>,
    first_page: bool,
    next_link: Option<String>,
    delta_link: Option<String>,
    headers: RequestHeaders,
    options: RequestOptions,
}

impl<T> fmt::Debug for PageIterator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageIterator")
            .field("pending_items", &self.items.len())
            .field("next_link", &self.next_link)
            .field("delta_link", &self.delta_link)
            .finish_non_exhaustive()
    }
}

impl<T> PageIterator<T>
where
    T: DeserializeOwned + Send,
{
    /// Creates an iterator starting with an already received page.
    pub fn new(adapter: Arc<dyn RequestAdapter>, first_page: CollectionResponse<T>) -> Self {
        Self {
            adapter,
            items: first_page.value.into(),
            first_page: true,
            next_link: first_page.next_link,
            delta_link: first_page.delta_link,
            headers: RequestHeaders::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets headers sent when requesting the next pages, such as `Prefer: odata.maxpagesize`.
    #[must_use]
    pub fn with_headers(mut self, headers: RequestHeaders) -> Self {
        self.headers = headers;
        self
    }

    /// Sets options of the requests of the next pages.
    #[must_use]
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the link of the next page, if any.
    pub fn next_link(&self) -> Option<&str> {
        self.next_link.as_deref()
    }

    /// Returns the delta link, available once the last page of a delta query is received.
    pub fn delta_link(&self) -> Option<&str> {
        self.delta_link.as_deref()
    }

    /// Returns the items not yet visited of the current page, then the items of the
    /// following pages, one page per call.
    ///
    /// Returns `None` once every page was returned.
    ///
    /// # Errors
    ///
    /// Fails when the next page cannot be fetched.
    pub async fn next_page(&mut self) -> Result<Option<Vec<T>>, GraphError> {
        if self.first_page || !self.items.is_empty() {
            self.first_page = false;
            return Ok(Some(self.items.drain(..).collect()));
        }
        if self.fetch_next_page().await? {
            Ok(Some(self.items.drain(..).collect()))
        } else {
            Ok(None)
        }
    }

    /// Visits every item, fetching the pages as needed.
    ///
    /// The callback returns `false` to pause; a later call resumes with the next item.
    /// Returns `true` once every item was visited.
    ///
    /// # Errors
    ///
    /// Fails when a page cannot be fetched.
    pub async fn iterate<F>(&mut self, mut callback: F) -> Result<bool, GraphError>
    where
        F: FnMut(T) -> bool + Send,
    {
        loop {
            self.first_page = false;
            while let Some(item) = self.items.pop_front() {
                if !callback(item) {
                    return Ok(false);
                }
            }
            if !self.fetch_next_page().await? {
                return Ok(true);
            }
        }
    }

    async fn fetch_next_page(&mut self) -> Result<bool, GraphError> {
        let Some(next_link) = self.next_link.take() else {
            return Ok(false);
        };
        debug!(%next_link, "fetching next page");

        let mut request = RequestInformation::new(Method::GET, "");
        request.set_uri(&Url::parse(&next_link)?);
        request.headers.add_all(&self.headers);
        request.options.extend(self.options.clone());
        request
            .headers
            .try_add(http::header::ACCEPT, mime::APPLICATION_JSON.as_ref());

        let page: Option<CollectionResponse<T>> = self
            .adapter
            .send(request, &ErrorMappings::odata())
            .await?;
        let page = page.unwrap_or_default();

        self.items.extend(page.value);
        self.next_link = page.next_link;
        self.delta_link = page.delta_link;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::adapter::NativeResponse;
    use crate::testing::MockRequestAdapter;

    fn first_page() -> CollectionResponse<i32> {
        CollectionResponse {
            value: vec![1, 2],
            next_link: Some("https://graph.microsoft.com/v1.0/solutions/bookingCurrencies?$skiptoken=2".to_owned()),
            ..CollectionResponse::default()
        }
    }

    fn adapter() -> Arc<MockRequestAdapter> {
        Arc::new(
            MockRequestAdapter::new()
                .with_response(NativeResponse::new(StatusCode::OK).with_json(&json!({
                    "value": [3, 4],
                    "@odata.nextLink": "https://graph.microsoft.com/v1.0/solutions/bookingCurrencies?$skiptoken=4"
                })))
                .with_response(NativeResponse::new(StatusCode::OK).with_json(&json!({
                    "value": [5],
                    "@odata.deltaLink": "https://graph.microsoft.com/v1.0/solutions/bookingCurrencies?$deltatoken=5"
                }))),
        )
    }

    #[tokio::test]
    async fn should_return_pages_in_order() {
        let mock = adapter();
        let mut pages = PageIterator::new(mock.clone(), first_page());

        let mut result = Vec::new();
        while let Some(page) = pages.next_page().await.expect("a page") {
            result.push(page);
        }

        assert_eq!(result, vec![vec![1, 2], vec![3, 4], vec![5]]);
        assert_eq!(
            pages.delta_link(),
            Some("https://graph.microsoft.com/v1.0/solutions/bookingCurrencies?$deltatoken=5")
        );
        assert_eq!(mock.requests().len(), 2);
    }

    #[tokio::test]
    async fn should_pause_and_resume_iteration() {
        let mock = adapter();
        let mut pages = PageIterator::new(mock.clone(), first_page());
        let mut visited = Vec::new();

        let completed = pages
            .iterate(|item| {
                visited.push(item);
                item != 3
            })
            .await
            .expect("pages");
        assert!(!completed);
        assert_eq!(visited, vec![1, 2, 3]);

        let completed = pages
            .iterate(|item| {
                visited.push(item);
                true
            })
            .await
            .expect("pages");
        assert!(completed);
        assert_eq!(visited, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn should_send_configured_headers() {
        let mock = adapter();
        let mut headers = RequestHeaders::new();
        headers.add("Prefer", "odata.maxpagesize=2");
        let mut pages = PageIterator::new(mock.clone(), first_page()).with_headers(headers);

        pages.iterate(|_| true).await.expect("pages");

        for request in mock.requests() {
            assert!(request.headers.contains("prefer"));
            assert_eq!(request.method, Method::GET);
        }
        assert_eq!(
            mock.requests().first().and_then(|request| request.uri().ok()).map(String::from).as_deref(),
            Some("https://graph.microsoft.com/v1.0/solutions/bookingCurrencies?$skiptoken=2")
        );
    }

    #[tokio::test]
    async fn should_propagate_page_errors() {
        let mock = Arc::new(MockRequestAdapter::new().with_response(
            NativeResponse::new(StatusCode::TOO_MANY_REQUESTS).with_json(&json!({
                "error": { "code": "TooManyRequests", "message": "Slow down" }
            })),
        ));
        let mut pages = PageIterator::new(mock, first_page());

        let error = pages.iterate(|_| true).await.expect_err("throttled");

        assert_eq!(error.status_code(), Some(429));
    }
}
