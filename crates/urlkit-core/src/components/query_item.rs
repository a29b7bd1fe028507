//! A single `name=value` query pair.

use serde::Serialize;

use super::encode::{decode_query_component, encode_query_component};

/// One query pair. A `None` value serializes as the bare name (`?flag`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryItem {
    pub name: String,
    pub value: Option<String>,
}

impl QueryItem {
    pub fn new(name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            value: value.map(Into::into),
        }
    }

    /// Item with a value.
    pub fn pair(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Parses `name=value` (first `=` splits). Both halves are percent-decoded.
    pub fn parse_encoded(part: &str) -> Self {
        match part.split_once('=') {
            Some((name, value)) => Self {
                name: decode_query_component(name),
                value: Some(decode_query_component(value)),
            },
            None => Self {
                name: decode_query_component(part),
                value: None,
            },
        }
    }

    pub fn to_encoded(&self) -> String {
        let name = encode_query_component(&self.name);
        match &self.value {
            Some(v) => format!("{name}={}", encode_query_component(v)),
            None => name,
        }
    }
}

impl std::fmt::Display for QueryItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(v) => write!(f, "{}={}", self.name, v),
            None => f.write_str(&self.name),
        }
    }
}

/// Splits an encoded query string into items. Empty segments (`a=1&&b=2`) are skipped.
pub fn parse_query(query: &str) -> Vec<QueryItem> {
    parse_query_keeping_encoding(query)
        .into_iter()
        .map(|(item, _)| item)
        .collect()
}

/// Like [`parse_query`], but pairs each item with its segment exactly as received.
pub(crate) fn parse_query_keeping_encoding(query: &str) -> Vec<(QueryItem, String)> {
    query
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| (QueryItem::parse_encoded(part), part.to_string()))
        .collect()
}

/// Joins items with `&`, encoding every name and value.
pub fn serialize_query(items: &[QueryItem]) -> String {
    items
        .iter()
        .map(QueryItem::to_encoded)
        .collect::<Vec<_>>()
        .join("&")
}
