//! `urlkit inspect <url> [--base <url>]` – print URL components.

use anyhow::{anyhow, Result};
use urlkit_core::url_model::UrlRef;

fn or_nil(v: Option<impl ToString>) -> String {
    v.map(|v| v.to_string()).unwrap_or_else(|| "nil".to_string())
}

pub fn run_inspect(url: &str, base: Option<&str>, json: bool) -> Result<()> {
    let base = match base {
        Some(b) => Some(UrlRef::parse(b).ok_or_else(|| anyhow!("invalid base URL: {b}"))?),
        None => None,
    };
    let parsed = UrlRef::parse_relative(url, base.as_ref())
        .ok_or_else(|| anyhow!("invalid URL: {url}"))?;
    let summary = parsed.summary();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{:<20} {}", "absolute_string", summary.absolute_string);
    println!("{:<20} {}", "scheme", summary.scheme);
    println!("{:<20} {}", "host", or_nil(summary.host));
    println!("{:<20} {}", "port", or_nil(summary.port));
    println!("{:<20} {}", "path", summary.path);
    println!("{:<20} {}", "query", or_nil(summary.query));
    println!("{:<20} {}", "fragment", or_nil(summary.fragment));
    println!("{:<20} {}", "base_url", or_nil(summary.base_url));
    println!(
        "{:<20} {}",
        "last_path_component",
        or_nil(summary.last_path_component)
    );
    Ok(())
}
