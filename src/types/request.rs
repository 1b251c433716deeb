#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;

use crate::ToQueryParams;
use crate::types::{Filter, Sort};

/// Parameters for one page of the collection.
///
/// `page` and `limit` are passed through verbatim; the server defines the
/// behavior for out-of-range values. Query pairs are emitted in a fixed
/// order: `_page`, `_limit`, one `<field>_like` pair per filter (input order
/// preserved, no deduplication), then `_sort`/`_order`.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[non_exhaustive]
pub struct ListRequest {
    /// 1-based page number.
    pub page: u32,
    /// Maximum number of records per page.
    pub limit: u32,
    #[builder(default)]
    pub filters: Vec<Filter>,
    #[builder(default)]
    pub sort: Sort,
}

impl ToQueryParams for ListRequest {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(4 + self.filters.len());
        pairs.push(("_page".to_owned(), self.page.to_string()));
        pairs.push(("_limit".to_owned(), self.limit.to_string()));
        for filter in &self.filters {
            pairs.push((format!("{}_like", filter.field), filter.value.clone()));
        }
        pairs.extend(self.sort.query_pairs());
        pairs
    }
}
