//! Session configuration: network access rules, timeouts, cookies and cache.

use std::collections::BTreeMap;
use std::time::Duration;

use super::cache::{UrlCache, DEFAULT_MEMORY_CAPACITY};
use crate::config::UrlkitConfig;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_RESOURCE_TIMEOUT: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Interfaces treated as cellular/metered unless configured otherwise.
pub const DEFAULT_CELLULAR_INTERFACES: &[&str] = &["wwan0"];

pub(crate) fn default_cellular_interfaces() -> Vec<String> {
    DEFAULT_CELLULAR_INTERFACES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationKind {
    /// Persistent cookies, credentials and disk cache.
    Default,
    /// Nothing written to disk.
    Ephemeral,
}

impl std::fmt::Display for ConfigurationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationKind::Default => f.write_str("default"),
            ConfigurationKind::Ephemeral => f.write_str("ephemeral"),
        }
    }
}

/// Options applied to every request a [`super::Session`] makes.
///
/// Fields are public: a configuration is a plain value that callers build,
/// tweak, and then hand to `Session::new`, which keeps its own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfiguration {
    pub kind: ConfigurationKind,
    /// When false, requests bound to an interface listed in
    /// `cellular_interfaces` are refused.
    pub allows_cellular_access: bool,
    /// Interface names considered cellular/metered.
    pub cellular_interfaces: Vec<String>,
    /// Bind outgoing connections to this interface (curl `CURLOPT_INTERFACE`).
    pub network_interface: Option<String>,
    pub timeout_interval_for_request: Duration,
    pub timeout_interval_for_resource: Duration,
    pub follow_redirects: bool,
    /// Extra headers sent with every request.
    pub http_additional_headers: BTreeMap<String, String>,
    /// Accept and send cookies during the session's lifetime.
    pub http_should_set_cookies: bool,
    /// Descriptive only: sessions keep cookies in memory and never write a cookie jar.
    pub persists_cookies: bool,
    /// Descriptive only: no credential storage is consulted or written.
    pub persists_credentials: bool,
    pub url_cache: Option<UrlCache>,
}

impl SessionConfiguration {
    /// Ephemeral configuration: cookies and credentials live only in memory
    /// and the cache has no disk capacity.
    pub fn ephemeral() -> Self {
        Self {
            kind: ConfigurationKind::Ephemeral,
            persists_cookies: false,
            persists_credentials: false,
            url_cache: Some(UrlCache::memory_only(DEFAULT_MEMORY_CAPACITY)),
            ..Self::default()
        }
    }

    pub fn for_kind(kind: ConfigurationKind) -> Self {
        match kind {
            ConfigurationKind::Default => Self::default(),
            ConfigurationKind::Ephemeral => Self::ephemeral(),
        }
    }

    /// Builds a configuration of `kind` with defaults taken from the config file.
    ///
    /// A `[cache]` section overrides the cache of a default configuration. For
    /// ephemeral configurations only its memory capacity is used.
    pub fn from_config(cfg: &UrlkitConfig, kind: ConfigurationKind) -> Self {
        let mut conf = Self::for_kind(kind);
        conf.allows_cellular_access = cfg.allows_cellular_access;
        conf.cellular_interfaces = cfg.cellular_interfaces.clone();
        conf.network_interface = cfg.network_interface.clone();
        conf.timeout_interval_for_request = Duration::from_secs(cfg.request_timeout_secs);
        conf.timeout_interval_for_resource = Duration::from_secs(cfg.resource_timeout_secs);
        conf.follow_redirects = cfg.follow_redirects;
        if let Some(ua) = &cfg.user_agent {
            conf.http_additional_headers
                .insert("User-Agent".to_string(), ua.clone());
        }
        if let Some(cache) = &cfg.cache {
            conf.url_cache = Some(match kind {
                ConfigurationKind::Default => UrlCache::from(cache),
                ConfigurationKind::Ephemeral => UrlCache::memory_only(cache.memory_capacity),
            });
        }
        conf
    }

    /// True if this configuration would refuse to use `interface`.
    pub fn denies_interface(&self, interface: &str) -> bool {
        !self.allows_cellular_access && self.cellular_interfaces.iter().any(|c| c == interface)
    }

    /// Label/value pairs for display.
    pub fn describe(&self) -> Vec<(&'static str, String)> {
        let cache = |f: fn(&UrlCache) -> u64| {
            self.url_cache
                .as_ref()
                .map(|c| f(c).to_string())
                .unwrap_or_else(|| "nil".to_string())
        };
        vec![
            ("kind", self.kind.to_string()),
            ("allows_cellular_access", self.allows_cellular_access.to_string()),
            (
                "network_interface",
                self.network_interface.clone().unwrap_or_else(|| "nil".to_string()),
            ),
            (
                "timeout_interval_for_request",
                format!("{}s", self.timeout_interval_for_request.as_secs()),
            ),
            (
                "timeout_interval_for_resource",
                format!("{}s", self.timeout_interval_for_resource.as_secs()),
            ),
            ("follow_redirects", self.follow_redirects.to_string()),
            ("http_should_set_cookies", self.http_should_set_cookies.to_string()),
            ("persists_cookies", self.persists_cookies.to_string()),
            ("persists_credentials", self.persists_credentials.to_string()),
            ("url_cache.memory_capacity", cache(UrlCache::memory_capacity)),
            ("url_cache.disk_capacity", cache(UrlCache::disk_capacity)),
        ]
    }
}

impl Default for SessionConfiguration {
    fn default() -> Self {
        Self {
            kind: ConfigurationKind::Default,
            allows_cellular_access: true,
            cellular_interfaces: default_cellular_interfaces(),
            network_interface: None,
            timeout_interval_for_request: DEFAULT_REQUEST_TIMEOUT,
            timeout_interval_for_resource: DEFAULT_RESOURCE_TIMEOUT,
            follow_redirects: true,
            http_additional_headers: BTreeMap::new(),
            http_should_set_cookies: true,
            persists_cookies: true,
            persists_credentials: true,
            url_cache: Some(UrlCache::default()),
        }
    }
}
