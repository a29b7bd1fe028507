//! URL construction and inspection.
//!
//! Wraps `url::Url` with the one thing it does not keep: the base a relative
//! reference was resolved against. Parse failures surface as `None`.

mod path;

pub use path::{last_path_component, path_components};

use serde::Serialize;
use url::Url;

/// An absolute URL, optionally remembering the base it was resolved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRef {
    url: Url,
    base: Option<Url>,
    relative: Option<String>,
}

/// Snapshot of a URL's accessors, suitable for printing or JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlSummary {
    pub absolute_string: String,
    pub scheme: String,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
    pub base_url: Option<String>,
    pub last_path_component: Option<String>,
}

impl UrlRef {
    /// Parses an absolute URL string.
    pub fn parse(input: &str) -> Option<Self> {
        match Url::parse(input) {
            Ok(url) => Some(Self::from(url)),
            Err(e) => {
                tracing::debug!("not a URL: {input:?} ({e})");
                None
            }
        }
    }

    /// Resolves `input` against `base`. Without a base this is [`UrlRef::parse`].
    ///
    /// `"search"` relative to `https://itunes.apple.com` becomes
    /// `https://itunes.apple.com/search`, and `base_url()` reports the base.
    pub fn parse_relative(input: &str, base: Option<&UrlRef>) -> Option<Self> {
        let Some(base) = base else {
            return Self::parse(input);
        };
        match base.url.join(input) {
            Ok(url) => Some(Self {
                url,
                base: Some(base.url.clone()),
                relative: Some(input.to_string()),
            }),
            Err(e) => {
                tracing::debug!("cannot resolve {input:?} against {} ({e})", base.url);
                None
            }
        }
    }

    pub fn as_url(&self) -> &Url {
        &self.url
    }

    pub fn absolute_string(&self) -> &str {
        self.url.as_str()
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    pub fn host(&self) -> Option<&str> {
        self.url.host_str()
    }

    /// Explicit port only; default ports for the scheme are omitted.
    pub fn port(&self) -> Option<u16> {
        self.url.port()
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Query without the leading `?`, still percent-encoded.
    pub fn query(&self) -> Option<&str> {
        self.url.query()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.url.fragment()
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base.as_ref()
    }

    /// The reference as given to [`UrlRef::parse_relative`], if it had a base.
    pub fn relative_string(&self) -> Option<&str> {
        self.relative.as_deref()
    }

    pub fn last_path_component(&self) -> Option<String> {
        last_path_component(&self.url)
    }

    pub fn path_components(&self) -> Vec<String> {
        path_components(&self.url)
    }

    pub fn summary(&self) -> UrlSummary {
        UrlSummary {
            absolute_string: self.absolute_string().to_string(),
            scheme: self.scheme().to_string(),
            host: self.host().map(str::to_string),
            port: self.port(),
            path: self.path().to_string(),
            query: self.query().map(str::to_string),
            fragment: self.fragment().map(str::to_string),
            base_url: self.base.as_ref().map(|b| b.to_string()),
            last_path_component: self.last_path_component(),
        }
    }
}

impl From<Url> for UrlRef {
    fn from(url: Url) -> Self {
        Self {
            url,
            base: None,
            relative: None,
        }
    }
}

impl std::fmt::Display for UrlRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.absolute_string())
    }
}
