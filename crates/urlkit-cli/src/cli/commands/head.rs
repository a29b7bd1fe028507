//! `urlkit head <url>` – HEAD request through a configured session.

use anyhow::{Context, Result};
use urlkit_core::config::UrlkitConfig;
use urlkit_core::session::Session;

use super::SessionArgs;

pub async fn run_head(cfg: &UrlkitConfig, url: &str, args: &SessionArgs) -> Result<()> {
    let session = Session::new(args.configuration(cfg));
    let head = tokio::task::spawn_blocking({
        let url = url.to_string();
        move || session.head(&url)
    })
    .await
    .context("head task join")?
    .with_context(|| format!("HEAD {url}"))?;

    println!("{} {}", head.status, head.url);
    for (name, value) in &head.headers {
        println!("{}: {}", name, value);
    }
    Ok(())
}
