//! `urlkit compose <url> -q name=value...` – build a percent-encoded query.

use anyhow::{anyhow, Result};
use urlkit_core::components::{QueryItem, UrlComponents};

/// `NAME=VALUE` becomes a pair; `NAME` alone has no value. Nothing is decoded.
pub fn parse_query_arg(arg: &str) -> QueryItem {
    match arg.split_once('=') {
        Some((name, value)) => QueryItem::pair(name, value),
        None => QueryItem::new(arg, None::<String>),
    }
}

pub fn run_compose(url: &str, query: &[String], json: bool) -> Result<()> {
    let mut components =
        UrlComponents::parse(url).ok_or_else(|| anyhow!("invalid URL: {url}"))?;
    for arg in query {
        components.append_query_item(parse_query_arg(arg));
    }

    let items = components.query_items().unwrap_or_default();
    if json {
        let out = serde_json::json!({
            "string": components.string(),
            "percent_encoded_query": components.percent_encoded_query(),
            "query_items": items,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", components.string());
    for item in items {
        match &item.value {
            Some(v) => println!("  {} = {}", item.name, v),
            None => println!("  {}", item.name),
        }
    }
    Ok(())
}
