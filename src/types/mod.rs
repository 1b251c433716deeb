//! Types for the personal-data resource.
//!
//! This module contains all types used by the client, organized into:
//!
//! - **Common types**: [`Filter`], [`Sort`] and [`SortOrder`], shared between
//!   requests and the client's collection operations.
//!
//! - **Request types**: builder-pattern structs for the list endpoint
//!   (e.g., [`request::ListRequest`]).
//!
//! - **Response types**: structs representing server responses
//!   (e.g., [`response::PersonalData`], [`response::PaginatedPersonalData`]).
//!
//! # Request Building
//!
//! All request types use the builder pattern via the [`bon`](https://docs.rs/bon) crate:
//!
//! ```
//! use personal_data_client::types::{Filter, Sort, SortOrder, request::ListRequest};
//!
//! let request = ListRequest::builder()
//!     .page(2)
//!     .limit(10)
//!     .filters(vec![Filter::builder().field("firstname").value("Jo").build()])
//!     .sort(Sort::builder().key("age").order(SortOrder::Descending).build())
//!     .build();
//! ```

use bon::Builder;

use crate::ToQueryParams;

pub mod request;
pub mod response;

/// A substring (like-match) constraint on one field of the resource.
///
/// Multiple filters on one request combine conjunctively; the server applies
/// them as `<field>_like=<value>` query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[non_exhaustive]
pub struct Filter {
    /// The record field the match applies to.
    #[builder(into)]
    pub field: String,
    /// The substring to match.
    #[builder(into)]
    pub value: String,
}

/// Direction of a [`Sort`], mapped to the wire values `asc`/`desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
#[non_exhaustive]
pub enum SortOrder {
    #[default]
    #[strum(serialize = "asc")]
    Ascending,
    #[strum(serialize = "desc")]
    Descending,
}

/// The single active sort of a collection request.
///
/// The default sorts by `firstname` ascending, matching the order the UI
/// presents records in.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[non_exhaustive]
pub struct Sort {
    /// The record field to sort by.
    #[builder(into)]
    pub key: String,
    #[builder(default)]
    pub order: SortOrder,
}

impl Default for Sort {
    fn default() -> Self {
        Sort {
            key: "firstname".to_owned(),
            order: SortOrder::Ascending,
        }
    }
}

impl ToQueryParams for Sort {
    fn query_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("_sort".to_owned(), self.key.clone()),
            ("_order".to_owned(), self.order.to_string()),
        ]
    }
}
