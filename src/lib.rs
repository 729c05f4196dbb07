#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod bigint;
pub mod client;
pub mod error;
pub(crate) mod serde_helpers;
pub mod types;

use reqwest::{Request, header::HeaderMap};
use serde::Serialize;
use serde_json::Value;

use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Trait for converting request types to URL query parameters.
///
/// This trait is automatically implemented for all types that implement [`Serialize`].
/// It uses [`serde_html_form`] to serialize the struct fields into a query string.
/// Fields holding `None` are dropped before serialization; present-but-empty
/// strings are preserved.
pub trait ToQueryParams: Serialize {
    /// Converts the request to a URL query string.
    ///
    /// Returns an empty string if no parameters are set, otherwise returns
    /// a string starting with `?` followed by URL-encoded key-value pairs.
    fn query_params(&self) -> String {
        let params = serde_html_form::to_string(self)
            .inspect_err(|e| {
                #[cfg(feature = "tracing")]
                tracing::error!("Unable to convert to URL-encoded string {e:?}");
                #[cfg(not(feature = "tracing"))]
                let _: &serde_html_form::ser::Error = e;
            })
            .unwrap_or_default();

        if params.is_empty() {
            String::new()
        } else {
            format!("?{params}")
        }
    }
}

impl<T: Serialize> ToQueryParams for T {}

/// Performs a single GET exchange and returns the decoded body together with
/// the response headers.
///
/// Exactly one network call per invocation; no retries, no caching. A non-2xx
/// status produces a [`error::Status`] error carrying the raw body text, an
/// unparsable 2xx body produces a decode error, and connection-level failures
/// surface the underlying [`reqwest::Error`] as a transport error.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
async fn request_value(client: &reqwest::Client, request: Request) -> Result<(Value, HeaderMap)> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    let response = client.execute(request).await?;
    let status_code = response.status();
    let headers = response.headers().clone();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    let body = response.text().await?;

    if !status_code.is_success() {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            method = %method,
            path = %path,
            body = %body,
            "API request failed"
        );

        return Err(Error::status(status_code, method, path, body));
    }

    let value = serde_json::from_str(&body)?;
    Ok((value, headers))
}

#[cfg(test)]
mod tests {
    use bon::Builder;
    use serde::Serialize;
    use serde_with::skip_serializing_none;

    use super::ToQueryParams as _;

    #[skip_serializing_none]
    #[derive(Debug, Builder, Default, Serialize)]
    struct Params {
        #[builder(into)]
        start: Option<String>,
        limit: Option<u32>,
        verbose: Option<bool>,
    }

    #[test]
    fn absent_params_are_dropped() {
        let params = Params::builder().limit(10).build();
        assert_eq!(params.query_params(), "?limit=10");
    }

    #[test]
    fn empty_param_set_has_no_question_mark() {
        let params = Params::default();
        assert_eq!(params.query_params(), "");
    }

    #[test]
    fn present_but_empty_values_are_preserved() {
        let params = Params::builder().start("").build();
        assert_eq!(params.query_params(), "?start=");
    }

    #[test]
    fn scalars_stringify_conventionally() {
        let params = Params::builder()
            .start("2023-01-01")
            .limit(5)
            .verbose(false)
            .build();
        assert_eq!(
            params.query_params(),
            "?start=2023-01-01&limit=5&verbose=false"
        );
    }

    #[test]
    fn values_are_url_encoded() {
        let params = Params::builder().start("a b&c").build();
        assert_eq!(params.query_params(), "?start=a+b%26c");
    }
}
