use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use crate::serde_helpers::deserialize_with_warnings;

/// One record of the personal-data resource.
///
/// Only `id` (the identity) and `firstname` (the default sort key) are
/// modeled explicitly; the resource is otherwise schemaless and any further
/// fields round-trip through `extra`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PersonalData {
    #[builder(into)]
    pub id: Option<String>,
    #[builder(into)]
    pub firstname: Option<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub extra: Map<String, Value>,
}

/// One page of records plus the collection-wide match count.
///
/// `total_count` is sourced from the `x-total-count` response header and is
/// independent of `items.len()`; it is `None` when the server omits the
/// header or sends a non-numeric value, never defaulted to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct PaginatedPersonalData {
    pub items: Vec<PersonalData>,
    pub total_count: Option<u64>,
}

impl PaginatedPersonalData {
    /// Assembles a page from the raw response parts.
    ///
    /// This is the single normalization boundary for list responses: a
    /// `null` body becomes an empty page, and a missing or unparseable
    /// `x-total-count` header becomes `None`.
    pub fn from_parts(body: Value, total_count: Option<&str>) -> crate::Result<Self> {
        let items =
            deserialize_with_warnings::<Option<Vec<PersonalData>>>(body)?.unwrap_or_default();
        let total_count = total_count.and_then(|raw| raw.trim().parse().ok());

        Ok(Self { items, total_count })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn null_body_normalizes_to_empty_page() {
        let page = PaginatedPersonalData::from_parts(Value::Null, Some("42"))
            .expect("null body should normalize");

        assert!(page.items.is_empty(), "null body should yield no items");
        assert_eq!(page.total_count, Some(42));
    }

    #[test]
    fn missing_total_count_header_yields_none() {
        let page = PaginatedPersonalData::from_parts(json!([{"id": "a1"}]), None)
            .expect("body should deserialize");

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_count, None);
    }

    #[test]
    fn non_numeric_total_count_yields_none() {
        let page = PaginatedPersonalData::from_parts(json!([]), Some("not-a-number"))
            .expect("body should deserialize");

        assert_eq!(page.total_count, None);
    }

    #[test]
    fn unknown_fields_land_in_extra() {
        let record: PersonalData =
            serde_json::from_value(json!({"id": "a1", "firstname": "Ann", "age": 33}))
                .expect("record should deserialize");

        assert_eq!(record.id.as_deref(), Some("a1"));
        assert_eq!(record.firstname.as_deref(), Some("Ann"));
        assert_eq!(record.extra.get("age"), Some(&json!(33)));
    }

    #[test]
    fn sparse_record_serializes_without_null_fields() {
        let record = PersonalData::builder().firstname("Ann").build();

        assert_eq!(
            serde_json::to_value(&record).expect("record should serialize"),
            json!({"firstname": "Ann"})
        );
    }
}
