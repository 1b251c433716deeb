//! Client for the personal-data REST resource.
//!
//! This module provides an HTTP client for a json-server style REST API
//! exposing a single collection at `/personal-data`, with offset pagination
//! (`_page`/`_limit`), like-match filtering (`<field>_like`) and single-key
//! sorting (`_sort`/`_order`).
//!
//! ## Endpoints consumed
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | List page | GET | `/personal-data?_page=P&_limit=L[&<field>_like=V]*&_sort=K&_order=asc\|desc` |
//! | Get one | GET | `/personal-data/{id}` |
//! | Create | POST | `/personal-data` |
//! | Update | PATCH | `/personal-data/{id}` |
//! | Delete | DELETE | `/personal-data/{id}` |
//! | Row index lookup | GET | `/personal-data?_sort=firstname&_order=asc` |
//!
//! List responses carry the collection-wide match count in the
//! `x-total-count` header.
//!
//! # Example
//!
//! ```no_run
//! use personal_data_client::Client;
//! use personal_data_client::types::{Filter, request::ListRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default();
//!
//! let request = ListRequest::builder()
//!     .page(1)
//!     .limit(10)
//!     .filters(vec![Filter::builder().field("firstname").value("Jo").build()])
//!     .build();
//!
//! let page = client.list(&request).await?;
//! println!("{} of {:?} records", page.items.len(), page.total_count);
//! # Ok(())
//! # }
//! ```

use async_stream::try_stream;
use futures::Stream;
use reqwest::{
    Client as ReqwestClient, Method,
    header::{HeaderMap, HeaderValue},
};
use serde_json::Value;
use url::Url;
use uuid::Uuid;

use crate::error::Error;
use crate::serde_helpers::deserialize_with_warnings;
use crate::types::request::ListRequest;
use crate::types::response::{PaginatedPersonalData, PersonalData};
use crate::types::{Filter, Sort};
use crate::{Result, ToQueryParams as _};

const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// HTTP client for the personal-data resource.
///
/// Each operation performs exactly one request/response exchange. The client
/// holds no mutable state beyond the configured base URL, so it is cheap to
/// clone and safe to share; it does not retry, enforce timeouts, or sequence
/// calls for the caller.
///
/// # API Base URL
///
/// The default endpoint is `http://localhost:3000`, the json-server default.
///
/// # Example
///
/// ```no_run
/// use personal_data_client::Client;
///
/// // Create client with default endpoint
/// let client = Client::default();
///
/// // Or with a custom endpoint
/// let client = Client::new("https://api.example.com").unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    client: ReqwestClient,
}

impl Default for Client {
    fn default() -> Self {
        Client::new("http://localhost:3000").expect("Client with default endpoint should succeed")
    }
}

impl Client {
    /// Creates a new client with a custom host URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be
    /// created.
    pub fn new(host: &str) -> Result<Client> {
        let mut headers = HeaderMap::new();

        headers.insert("User-Agent", HeaderValue::from_static("personal_data_client"));
        headers.insert("Accept", HeaderValue::from_static("*/*"));
        headers.insert("Connection", HeaderValue::from_static("keep-alive"));
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let client = ReqwestClient::builder().default_headers(headers).build()?;

        Ok(Self {
            host: Url::parse(host)?,
            client,
        })
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Retrieves one page of records.
    ///
    /// `page` and `limit` are forwarded verbatim; the server defines the
    /// behavior for out-of-range values. Filters apply conjunctively in
    /// input order. A `null` body yields an empty page and a missing
    /// `x-total-count` header yields `total_count = None` (see
    /// [`PaginatedPersonalData::from_parts`]).
    ///
    /// # Errors
    ///
    /// Returns an error only when the HTTP exchange itself fails or the body
    /// is not valid JSON; status codes are not inspected.
    pub async fn list(&self, request: &ListRequest) -> Result<PaginatedPersonalData> {
        let query = request.query_params();
        let request = self
            .client
            .request(Method::GET, format!("{}personal-data{query}", self.host))
            .build()?;
        let response = crate::execute(&self.client, request).await?;

        let total_count = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);
        let body = response.json::<Value>().await?;

        PaginatedPersonalData::from_parts(body, total_count.as_deref())
    }

    /// Retrieves a single record by id.
    ///
    /// A `null` body normalizes to the empty record: a missing record and an
    /// empty one are indistinguishable to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP exchange fails.
    pub async fn get_by_id(&self, id: &str) -> Result<PersonalData> {
        let request = self
            .client
            .request(Method::GET, format!("{}personal-data/{id}", self.host))
            .build()?;
        let response = crate::execute(&self.client, request).await?;
        let body = response.json::<Value>().await?;

        Ok(deserialize_with_warnings::<Option<PersonalData>>(body)?.unwrap_or_default())
    }

    /// Creates a record, assigning it an id when it carries none.
    ///
    /// Identifier assignment is client-side: when `record.id` is unset, a
    /// fresh v4 UUID is written into the record before the request is sent.
    /// A caller-supplied id is kept verbatim. Returns the id used either
    /// way. The server's response body is not parsed.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP exchange fails.
    pub async fn create(&self, record: &mut PersonalData) -> Result<String> {
        let id = match &record.id {
            Some(id) => id.clone(),
            None => {
                let id = Uuid::new_v4().to_string();
                record.id = Some(id.clone());
                id
            }
        };

        let request = self
            .client
            .request(Method::POST, format!("{}personal-data", self.host))
            .json(record)
            .build()?;
        crate::execute(&self.client, request).await?;

        Ok(id)
    }

    /// Sends a partial update keyed by `record.id`.
    ///
    /// The body is passed through unmodified, so the caller decides between
    /// a sparse patch and a full record.
    ///
    /// # Errors
    ///
    /// Returns a [`Validation`](crate::error::Kind::Validation) error when
    /// the record carries no id, or an error when the HTTP exchange fails.
    pub async fn update(&self, record: &PersonalData) -> Result<()> {
        let id = record
            .id
            .as_deref()
            .ok_or_else(|| Error::validation("update requires a record with an id"))?;

        let request = self
            .client
            .request(Method::PATCH, format!("{}personal-data/{id}", self.host))
            .json(record)
            .build()?;
        crate::execute(&self.client, request).await?;

        Ok(())
    }

    /// Deletes the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP exchange fails.
    pub async fn remove(&self, id: &str) -> Result<()> {
        let request = self
            .client
            .request(Method::DELETE, format!("{}personal-data/{id}", self.host))
            .build()?;
        crate::execute(&self.client, request).await?;

        Ok(())
    }

    /// Finds the position of a record within the firstname-ascending view.
    ///
    /// Fetches the FULL collection (no pagination) and scans for the first
    /// matching id, so the cost is O(collection size); callers should not
    /// assume bounded latency on large datasets. Returns `None` when the id
    /// is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP exchange fails.
    pub async fn row_index_of_id(&self, id: &str) -> Result<Option<usize>> {
        let query = Sort::default().query_params();
        let request = self
            .client
            .request(Method::GET, format!("{}personal-data{query}", self.host))
            .build()?;
        let response = crate::execute(&self.client, request).await?;
        let body = response.json::<Value>().await?;

        let records =
            deserialize_with_warnings::<Option<Vec<PersonalData>>>(body)?.unwrap_or_default();

        Ok(records
            .iter()
            .position(|record| record.id.as_deref() == Some(id)))
    }

    /// Returns a stream over all matching records, one page at a time.
    ///
    /// Pages are fetched with the given `filters` and `sort`, `limit`
    /// records per request, starting at page 1. The stream ends when a page
    /// comes back with fewer items than requested.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use futures::StreamExt as _;
    /// use personal_data_client::Client;
    /// use personal_data_client::types::Sort;
    /// use tokio::pin;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::default();
    /// let stream = client.stream_records(Vec::new(), Sort::default(), 100);
    /// pin!(stream);
    ///
    /// while let Some(record) = stream.next().await {
    ///     println!("{:?}", record?.firstname);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn stream_records(
        &self,
        filters: Vec<Filter>,
        sort: Sort,
        limit: u32,
    ) -> impl Stream<Item = Result<PersonalData>> + '_ {
        let limit = if limit == 0 {
            #[cfg(feature = "tracing")]
            tracing::warn!("Supplied a zero page size, defaulting to 1");

            1
        } else {
            limit
        };

        try_stream! {
            let mut page = 1;

            loop {
                let request = ListRequest::builder()
                    .page(page)
                    .limit(limit)
                    .filters(filters.clone())
                    .sort(sort.clone())
                    .build();
                let result = self.list(&request).await?;
                let count = result.items.len();

                for item in result.items {
                    yield item;
                }

                // A short page is the last page
                if u32::try_from(count).is_ok_and(|count| count < limit) {
                    break;
                }

                page += 1;
            }
        }
    }
}
