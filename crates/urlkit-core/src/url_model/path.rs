//! Path segment helpers.

use url::Url;

/// Decoded, non-empty path segments of `url`.
pub fn path_components(url: &Url) -> Vec<String> {
    url.path_segments()
        .map(|segments| {
            segments
                .filter(|s| !s.is_empty())
                .map(|s| {
                    percent_encoding::percent_decode_str(s)
                        .decode_utf8_lossy()
                        .into_owned()
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Last decoded path segment, or `None` for the root path and cannot-be-a-base URLs.
pub fn last_path_component(url: &Url) -> Option<String> {
    path_components(url).pop()
}
