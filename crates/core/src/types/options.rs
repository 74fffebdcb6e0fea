//! Query parameters accepted by the carts endpoints.
//!
//! Options serialize to flat key/value pairs suitable for a URL query string.
//! Unset fields produce no parameter at all.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// Options for fetching a single cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartOptions {
    /// Restrict the response to these fields (sent as `fields=a,b,c`).
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_comma_list"
    )]
    pub fields: Option<Vec<String>>,
}

impl CartOptions {
    /// Options selecting only the given fields.
    #[must_use]
    pub fn with_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: Some(fields.into_iter().map(Into::into).collect()),
        }
    }
}

/// Options for listing carts.
///
/// Cursor-based pagination is not supported; `limit` only caps the size of
/// the single page returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartListOptions {
    /// Maximum number of carts to return (Shopify caps this at 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_comma_list"
    )]
    pub fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
}

#[allow(clippy::ref_option)] // signature dictated by serde's serialize_with
fn serialize_comma_list<S: Serializer>(
    values: &Option<Vec<String>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match values {
        Some(values) => serializer.serialize_str(&values.join(",")),
        None => serializer.serialize_none(),
    }
}
