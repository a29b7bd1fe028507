//! `urlkit session` – show the effective session configuration.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use urlkit_core::config::UrlkitConfig;
use urlkit_core::session::{ConfigurationKind, SessionConfiguration, UrlCache};

/// Flags shared by commands that build a session.
#[derive(Debug, Clone, Default, Args)]
pub struct SessionArgs {
    /// Use an ephemeral configuration (no persistent cookies, credentials or disk cache).
    #[arg(long)]
    pub ephemeral: bool,
    /// Disallow cellular/metered interfaces.
    #[arg(long)]
    pub no_cellular: bool,
    /// Bind to this network interface.
    #[arg(long, value_name = "IFACE")]
    pub interface: Option<String>,
    /// Cache memory capacity in bytes.
    #[arg(long, value_name = "BYTES")]
    pub memory_capacity: Option<u64>,
    /// Cache disk capacity in bytes.
    #[arg(long, value_name = "BYTES")]
    pub disk_capacity: Option<u64>,
    /// Cache directory.
    #[arg(long, value_name = "DIR")]
    pub disk_path: Option<PathBuf>,
}

impl SessionArgs {
    /// Config-file defaults, then command-line overrides.
    pub fn configuration(&self, cfg: &UrlkitConfig) -> SessionConfiguration {
        let kind = if self.ephemeral {
            ConfigurationKind::Ephemeral
        } else {
            ConfigurationKind::Default
        };
        let mut conf = SessionConfiguration::from_config(cfg, kind);
        if self.no_cellular {
            conf.allows_cellular_access = false;
        }
        if let Some(iface) = &self.interface {
            conf.network_interface = Some(iface.clone());
        }
        if self.memory_capacity.is_some() || self.disk_capacity.is_some() || self.disk_path.is_some()
        {
            let current = conf.url_cache.take().unwrap_or_default();
            conf.url_cache = Some(UrlCache::new(
                self.memory_capacity.unwrap_or(current.memory_capacity()),
                self.disk_capacity.unwrap_or(current.disk_capacity()),
                self.disk_path
                    .clone()
                    .or_else(|| current.disk_path().map(PathBuf::from)),
            ));
        }
        conf
    }
}

pub fn run_session(cfg: &UrlkitConfig, args: &SessionArgs) -> Result<()> {
    let conf = args.configuration(cfg);
    for (label, value) in conf.describe() {
        println!("{:<32} {}", label, value);
    }
    Ok(())
}
