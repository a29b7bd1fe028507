//! Responses and raw header-line parsing.

use serde::Serialize;

/// Status and headers of a HEAD request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadResponse {
    /// Final URL after redirects.
    pub url: String,
    pub status: u32,
    /// Header pairs of the final response, in received order.
    pub headers: Vec<(String, String)>,
}

impl HeadResponse {
    /// First header with this name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn content_length(&self) -> Option<u64> {
        self.header("content-length")?.parse().ok()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A GET response with its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataResponse {
    pub head: HeadResponse,
    pub body: Vec<u8>,
}

/// Parses collected header lines into `(name, value)` pairs.
///
/// With redirects followed, curl reports one block per response; each status
/// line (`HTTP/...`) starts a new block and only the last block is kept.
pub(crate) fn parse_header_lines(lines: &[String]) -> Vec<(String, String)> {
    let mut headers = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            headers.clear();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }

    headers
}
