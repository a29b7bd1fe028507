//! Query-component builder.
//!
//! `UrlComponents` splits a URL into everything-but-the-query and a list of
//! decoded query items, so callers can append raw names and values and get a
//! correctly percent-encoded URL back.

mod encode;
mod query_item;

pub use encode::{decode_query_component, encode_query_component};
pub use query_item::{parse_query, serialize_query, QueryItem};

use query_item::parse_query_keeping_encoding;

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlComponents {
    /// The URL with its query removed.
    url: Url,
    /// `None` = no query at all; `Some(empty)` = a bare `?`.
    query_items: Option<Vec<QueryItem>>,
    /// Items parsed from the source URL with their original encoded segment.
    /// An item still equal to its source entry is written back verbatim.
    source_query: Vec<(QueryItem, String)>,
}

impl UrlComponents {
    pub fn parse(input: &str) -> Option<Self> {
        match Url::parse(input) {
            Ok(url) => Some(Self::from_url(&url)),
            Err(e) => {
                tracing::debug!("not a URL: {input:?} ({e})");
                None
            }
        }
    }

    pub fn from_url(url: &Url) -> Self {
        let source_query = url.query().map(parse_query_keeping_encoding);
        let query_items = source_query
            .as_ref()
            .map(|parsed| parsed.iter().map(|(item, _)| item.clone()).collect());
        let mut url = url.clone();
        url.set_query(None);
        Self {
            url,
            query_items,
            source_query: source_query.unwrap_or_default(),
        }
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    pub fn host(&self) -> Option<&str> {
        self.url.host_str()
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Replaces the path; `url` percent-encodes characters not allowed there.
    pub fn set_path(&mut self, path: &str) {
        self.url.set_path(path);
    }

    pub fn fragment(&self) -> Option<&str> {
        self.url.fragment()
    }

    pub fn set_fragment(&mut self, fragment: Option<&str>) {
        self.url.set_fragment(fragment);
    }

    pub fn query_items(&self) -> Option<&[QueryItem]> {
        self.query_items.as_deref()
    }

    /// Replaces the whole query; every item is encoded afresh.
    pub fn set_query_items(&mut self, items: Option<Vec<QueryItem>>) {
        self.source_query.clear();
        self.query_items = items;
    }

    /// Appends one item, starting a query if the URL had none.
    pub fn append_query_item(&mut self, item: QueryItem) {
        tracing::trace!("append query item {item}");
        self.query_items.get_or_insert_with(Vec::new).push(item);
    }

    /// Items taken unchanged from the source URL keep their original
    /// encoding; appended or edited items are encoded.
    pub fn percent_encoded_query(&self) -> Option<String> {
        let items = self.query_items.as_deref()?;
        let parts: Vec<String> = items
            .iter()
            .enumerate()
            .map(|(i, item)| match self.source_query.get(i) {
                Some((source, encoded)) if source == item => encoded.clone(),
                _ => item.to_encoded(),
            })
            .collect();
        Some(parts.join("&"))
    }

    /// Decoded query string, for display.
    pub fn query(&self) -> Option<String> {
        self.query_items.as_ref().map(|items| {
            items
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("&")
        })
    }

    /// Assembles the full URL with the encoded query.
    pub fn to_url(&self) -> Url {
        let mut url = self.url.clone();
        let query = self.percent_encoded_query();
        url.set_query(query.as_deref());
        url
    }

    pub fn string(&self) -> String {
        self.to_url().into()
    }

    /// The assembled URL, re-parsed from [`UrlComponents::string`].
    pub fn url(&self) -> Option<Url> {
        Url::parse(&self.string()).ok()
    }
}

impl std::fmt::Display for UrlComponents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_url().as_str())
    }
}
