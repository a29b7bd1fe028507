//! HTTP sessions.
//!
//! A `Session` owns a private copy of its `SessionConfiguration` and applies
//! it to a fresh libcurl handle for each request. Requests are blocking; call
//! from `spawn_blocking` if used from async code.

mod cache;
mod configuration;
mod response;

pub use cache::{UrlCache, DEFAULT_DISK_CAPACITY, DEFAULT_MEMORY_CAPACITY};
pub use configuration::{ConfigurationKind, SessionConfiguration, DEFAULT_CELLULAR_INTERFACES};
pub use response::{DataResponse, HeadResponse};

use std::str;
use std::sync::OnceLock;

use crate::error::SessionError;
use crate::url_model::UrlRef;

static SHARED: OnceLock<Session> = OnceLock::new();

#[derive(Debug)]
pub struct Session {
    configuration: SessionConfiguration,
}

impl Session {
    /// Process-wide session with the default configuration.
    pub fn shared() -> &'static Session {
        SHARED.get_or_init(|| Session::new(SessionConfiguration::default()))
    }

    pub fn new(configuration: SessionConfiguration) -> Self {
        tracing::debug!(
            kind = %configuration.kind,
            allows_cellular_access = configuration.allows_cellular_access,
            "session created"
        );
        Self { configuration }
    }

    /// A copy of the configuration. Changing the copy does not affect the session.
    pub fn configuration(&self) -> SessionConfiguration {
        self.configuration.clone()
    }

    /// Fails if the session is bound to a cellular interface it may not use.
    pub fn check_network_access(&self) -> Result<(), SessionError> {
        match &self.configuration.network_interface {
            Some(iface) if self.configuration.denies_interface(iface) => {
                tracing::warn!("refusing request on cellular interface {iface}");
                Err(SessionError::CellularAccessDenied {
                    interface: iface.clone(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Performs a HEAD request. Non-2xx statuses are returned, not errors.
    pub fn head(&self, url: &str) -> Result<HeadResponse, SessionError> {
        let (head, _) = self.perform(url, false)?;
        Ok(head)
    }

    /// Performs a GET request and collects the body in memory.
    pub fn get(&self, url: &str) -> Result<DataResponse, SessionError> {
        let (head, body) = self.perform(url, true)?;
        Ok(DataResponse { head, body })
    }

    fn perform(&self, url: &str, with_body: bool) -> Result<(HeadResponse, Vec<u8>), SessionError> {
        let target = UrlRef::parse(url).ok_or_else(|| SessionError::InvalidUrl(url.to_string()))?;
        if !matches!(target.scheme(), "http" | "https") {
            return Err(SessionError::InvalidUrl(url.to_string()));
        }
        self.check_network_access()?;

        let mut easy = self.configured_handle(target.absolute_string())?;
        easy.nobody(!with_body)?;

        let mut header_lines: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    header_lines.push(s.trim_end().to_string());
                }
                true
            })?;
            if with_body {
                transfer.write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })?;
            }
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        let final_url = easy
            .effective_url()?
            .unwrap_or(target.absolute_string())
            .to_string();
        let method = if with_body { "GET" } else { "HEAD" };
        tracing::debug!(url = %final_url, status, bytes = body.len(), method, "request finished");

        let head = HeadResponse {
            url: final_url,
            status,
            headers: response::parse_header_lines(&header_lines),
        };
        Ok((head, body))
    }

    fn configured_handle(&self, url: &str) -> Result<curl::easy::Easy, SessionError> {
        let conf = &self.configuration;
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(conf.follow_redirects)?;
        easy.connect_timeout(conf.timeout_interval_for_request)?;
        // Idle timeout: abort if under 1 byte/s for the request interval.
        easy.low_speed_limit(1)?;
        easy.low_speed_time(conf.timeout_interval_for_request)?;
        easy.timeout(conf.timeout_interval_for_resource)?;

        if let Some(iface) = &conf.network_interface {
            easy.interface(iface)?;
        }
        if conf.http_should_set_cookies {
            // Empty file name enables the in-memory cookie engine.
            easy.cookie_file("")?;
        }

        if !conf.http_additional_headers.is_empty() {
            let mut list = curl::easy::List::new();
            for (name, value) in &conf.http_additional_headers {
                let name = name.trim();
                if name.is_empty() || name.contains(|c: char| c == ':' || c.is_whitespace()) {
                    return Err(SessionError::InvalidHeader(name.to_string()));
                }
                list.append(&format!("{}: {}", name, value.trim()))?;
            }
            easy.http_headers(list)?;
        }

        Ok(easy)
    }
}
