//! Error type for session operations.
//!
//! URL parsing itself reports failure as `None`; only work that touches the
//! transport can fail with a `SessionError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The string could not be parsed as an absolute URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The session may not use a cellular/metered interface and is bound to one.
    #[error("cellular access is disabled for this session (interface {interface})")]
    CellularAccessDenied { interface: String },

    /// libcurl reported an error (timeout, DNS, connection refused...).
    #[error(transparent)]
    Transfer(#[from] curl::Error),

    /// A configured additional header is not a valid `Name: value` pair.
    #[error("invalid header name {0:?}")]
    InvalidHeader(String),
}
