#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod client;
pub mod error;
pub(crate) mod serde_helpers;
pub mod types;

pub use client::Client;

use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Trait for converting request types to URL query strings.
///
/// Implementors provide an ordered list of key/value pairs; the pairs are
/// URL-encoded with [`serde_html_form`], so filter values containing `&`,
/// `=` or non-ASCII characters cannot malform the query string.
pub(crate) trait ToQueryParams {
    /// The query pairs in the order they must appear on the wire.
    fn query_pairs(&self) -> Vec<(String, String)>;

    /// Converts the request to a URL query string.
    ///
    /// Returns an empty string if no pairs are set, otherwise a string
    /// starting with `?` followed by URL-encoded key-value pairs.
    fn query_params(&self) -> String {
        let params = serde_html_form::to_string(self.query_pairs())
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

/// Executes a single HTTP exchange.
///
/// The status code is recorded for diagnostics but never branches control
/// flow: the server signals an absent resource through the body shape
/// (`null` or `{}`), which the per-operation adapters normalize. Only a
/// transport-level failure surfaces as an error.
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
pub(crate) async fn execute(
    client: &reqwest::Client,
    request: reqwest::Request,
) -> Result<reqwest::Response> {
    let response = client.execute(request).await?;

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", response.status().as_u16());

    Ok(response)
}
