use std::any::type_name;
use std::future::Future;
use std::str::FromStr;

use bytes::Bytes;
use http::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{ErrorMappings, GraphError, NativeResponse, RequestAdapter};
use crate::model::ApiError;
use crate::request::RequestInformation;

/// Maximum length of a response body reported in decoding errors.
const BODY_MAX_LENGTH: usize = 1024;

/// Typed operations over a [`RequestAdapter`].
///
/// Every operation executes the request, turns failed statuses into errors through the
/// [`ErrorMappings`] and decodes the body. A `204 No Content` response, an empty body or
/// a response without content type decodes to `None`.
pub trait RequestAdapterExt: RequestAdapter {
    /// Executes the request and decodes a JSON body.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, failed statuses and undecodable bodies.
    fn send<T>(
        &self,
        request: RequestInformation,
        error_mappings: &ErrorMappings,
    ) -> impl Future<Output = Result<Option<T>, GraphError>> + Send
    where
        T: DeserializeOwned + Send,
    {
        async move {
            let response = self.execute(request).await?;
            throw_if_failed(&response, error_mappings)?;
            if has_no_content(&response) {
                return Ok(None);
            }
            expect_json(&response, type_name::<T>())?;
            decode_json(&response).map(Some)
        }
    }

    /// Executes the request, ignoring any response body.
    ///
    /// # Errors
    ///
    /// Fails on transport errors and failed statuses.
    fn send_no_content(
        &self,
        request: RequestInformation,
        error_mappings: &ErrorMappings,
    ) -> impl Future<Output = Result<(), GraphError>> + Send {
        async move {
            let response = self.execute(request).await?;
            throw_if_failed(&response, error_mappings)
        }
    }

    /// Executes the request and decodes a scalar body, JSON or `text/plain`.
    ///
    /// `$count` endpoints answer with a `text/plain` number for instance.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, failed statuses and undecodable bodies.
    fn send_primitive<T>(
        &self,
        request: RequestInformation,
        error_mappings: &ErrorMappings,
    ) -> impl Future<Output = Result<Option<T>, GraphError>> + Send
    where
        T: DeserializeOwned + FromStr + Send,
        T::Err: std::fmt::Display,
    {
        async move {
            let response = self.execute(request).await?;
            throw_if_failed(&response, error_mappings)?;
            if has_no_content(&response) {
                return Ok(None);
            }
            if response.content_type().as_deref() == Some(mime::TEXT_PLAIN.essence_str()) {
                return parse_text(&response).map(Some);
            }
            expect_json(&response, type_name::<T>())?;
            decode_json(&response).map(Some)
        }
    }

    /// Executes the request and returns the raw body.
    ///
    /// # Errors
    ///
    /// Fails on transport errors and failed statuses.
    fn send_bytes(
        &self,
        request: RequestInformation,
        error_mappings: &ErrorMappings,
    ) -> impl Future<Output = Result<Option<Bytes>, GraphError>> + Send {
        async move {
            let response = self.execute(request).await?;
            throw_if_failed(&response, error_mappings)?;
            if response.status == StatusCode::NO_CONTENT || response.body.is_empty() {
                return Ok(None);
            }
            Ok(Some(response.body))
        }
    }
}

impl<A> RequestAdapterExt for A where A: RequestAdapter + ?Sized {}

fn has_no_content(response: &NativeResponse) -> bool {
    response.status == StatusCode::NO_CONTENT
        || response.body.is_empty()
        || response.content_type().is_none()
}

/// Maps a failed status to the error registered for it.
fn throw_if_failed(
    response: &NativeResponse,
    error_mappings: &ErrorMappings,
) -> Result<(), GraphError> {
    let status = response.status.as_u16();
    if status < 400 {
        return Ok(());
    }
    let headers = response.headers.clone();

    let Some(factory) = error_mappings.find(status) else {
        return Err(ApiError::new(
            format!("The server returned an unexpected status code and no error factory is registered for this code: {status}"),
            status,
            headers,
        )
        .into());
    };

    if response.body.is_empty() {
        return Err(ApiError::new(
            format!("The server returned an unexpected status code with no response body: {status}"),
            status,
            headers,
        )
        .into());
    }

    match factory(&response.body) {
        Ok(error) => {
            debug!(status, code = ?error.code(), "error response decoded");
            Err(error.with_response(status, headers).into())
        }
        Err(error) => {
            warn!(status, %error, body = %truncate_body(&response.body), "cannot decode error response");
            Err(ApiError::new(
                format!("The server returned an unexpected status code but the error could not be deserialized: {status}"),
                status,
                headers,
            )
            .into())
        }
    }
}

fn expect_json(response: &NativeResponse, expected: &'static str) -> Result<(), GraphError> {
    match response.content_type() {
        Some(content_type)
            if content_type == mime::APPLICATION_JSON.essence_str()
                || content_type.ends_with("+json") =>
        {
            Ok(())
        }
        content_type => Err(GraphError::UnsupportedContentType {
            content_type: content_type.unwrap_or_default(),
            expected,
        }),
    }
}

fn decode_json<T: DeserializeOwned>(response: &NativeResponse) -> Result<T, GraphError> {
    let deserializer = &mut serde_json::Deserializer::from_slice(&response.body);
    serde_path_to_error::deserialize(deserializer).map_err(|err| GraphError::Json {
        path: err.path().to_string(),
        error: err.into_inner(),
        body: truncate_body(&response.body),
    })
}

fn parse_text<T>(response: &NativeResponse) -> Result<T, GraphError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let text = String::from_utf8_lossy(&response.body);
    let text = text.trim();
    text.parse().map_err(|err: T::Err| GraphError::Primitive {
        value: text.to_owned(),
        expected: type_name::<T>(),
        message: err.to_string(),
    })
}

fn truncate_body(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.len() > BODY_MAX_LENGTH {
        let end = (0..=BODY_MAX_LENGTH)
            .rev()
            .find(|index| text.is_char_boundary(*index))
            .unwrap_or_default();
        format!("{}... (truncated)", text.get(..end).unwrap_or_default())
    } else {
        text.into_owned()
    }
}
