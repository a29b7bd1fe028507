use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Cache capacities for new sessions (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// In-memory cache capacity in bytes.
    pub memory_capacity: u64,
    /// On-disk cache capacity in bytes (0 = no disk storage).
    pub disk_capacity: u64,
    /// Directory for the on-disk cache; None = library default location.
    #[serde(default)]
    pub disk_path: Option<PathBuf>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            memory_capacity: crate::session::DEFAULT_MEMORY_CAPACITY,
            disk_capacity: crate::session::DEFAULT_DISK_CAPACITY,
            disk_path: None,
        }
    }
}

/// Global configuration loaded from `~/.config/urlkit/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlkitConfig {
    /// Whether default sessions may use cellular/metered interfaces.
    pub allows_cellular_access: bool,
    /// Idle timeout for a single request, in seconds.
    pub request_timeout_secs: u64,
    /// Upper bound for a whole transfer, in seconds.
    pub resource_timeout_secs: u64,
    /// Follow 3xx redirects.
    pub follow_redirects: bool,
    /// Optional `User-Agent` header sent by sessions.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Interface names treated as cellular/metered (e.g. "wwan0").
    #[serde(default)]
    pub cellular_interfaces: Vec<String>,
    /// Optional interface to bind outgoing connections to.
    #[serde(default)]
    pub network_interface: Option<String>,
    /// Optional cache capacities; if missing, built-in defaults are used.
    #[serde(default)]
    pub cache: Option<CacheConfig>,
}

impl Default for UrlkitConfig {
    fn default() -> Self {
        Self {
            allows_cellular_access: true,
            request_timeout_secs: 60,
            resource_timeout_secs: 7 * 24 * 60 * 60,
            follow_redirects: true,
            user_agent: None,
            cellular_interfaces: crate::session::DEFAULT_CELLULAR_INTERFACES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            network_interface: None,
            cache: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlkit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlkitConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlkitConfig::default();
        write_to(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<UrlkitConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: UrlkitConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Write configuration as pretty TOML, creating parent directories.
pub fn write_to(path: &Path, cfg: &UrlkitConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("write config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = UrlkitConfig::default();
        assert!(cfg.allows_cellular_access);
        assert_eq!(cfg.request_timeout_secs, 60);
        assert_eq!(cfg.resource_timeout_secs, 604_800);
        assert!(cfg.follow_redirects);
        assert!(cfg.cache.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UrlkitConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UrlkitConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.allows_cellular_access, cfg.allows_cellular_access);
        assert_eq!(parsed.request_timeout_secs, cfg.request_timeout_secs);
        assert_eq!(parsed.cellular_interfaces, cfg.cellular_interfaces);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            allows_cellular_access = false
            request_timeout_secs = 10
            resource_timeout_secs = 120
            follow_redirects = false
            user_agent = "urlkit-test/1.0"
        "#;
        let cfg: UrlkitConfig = toml::from_str(toml).unwrap();
        assert!(!cfg.allows_cellular_access);
        assert_eq!(cfg.request_timeout_secs, 10);
        assert_eq!(cfg.resource_timeout_secs, 120);
        assert!(!cfg.follow_redirects);
        assert_eq!(cfg.user_agent.as_deref(), Some("urlkit-test/1.0"));
        assert!(cfg.cellular_interfaces.is_empty());
        assert!(cfg.network_interface.is_none());
    }

    #[test]
    fn config_toml_cache_section() {
        let toml = r#"
            allows_cellular_access = true
            request_timeout_secs = 60
            resource_timeout_secs = 60
            follow_redirects = true
            cellular_interfaces = ["wwan0", "rmnet0"]

            [cache]
            memory_capacity = 512_000
            disk_capacity = 0
        "#;
        let cfg: UrlkitConfig = toml::from_str(toml).unwrap();
        let cache = cfg.cache.as_ref().unwrap();
        assert_eq!(cache.memory_capacity, 512_000);
        assert_eq!(cache.disk_capacity, 0);
        assert!(cache.disk_path.is_none());
        assert_eq!(cfg.cellular_interfaces, vec!["wwan0", "rmnet0"]);
    }

    #[test]
    fn write_then_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = UrlkitConfig::default();
        cfg.allows_cellular_access = false;
        cfg.cache = Some(CacheConfig {
            memory_capacity: 1024,
            disk_capacity: 4096,
            disk_path: Some(PathBuf::from("/tmp/urlkit-cache")),
        });
        write_to(&path, &cfg).unwrap();
        let loaded = load_from(&path).unwrap();
        assert!(!loaded.allows_cellular_access);
        assert_eq!(loaded.cache, cfg.cache);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from(&dir.path().join("absent.toml")).is_err());
    }
}
