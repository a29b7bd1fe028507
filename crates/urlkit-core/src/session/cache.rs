//! Cache capacity descriptor attached to a session configuration.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::CacheConfig;

/// Default in-memory capacity: 512 000 bytes.
pub const DEFAULT_MEMORY_CAPACITY: u64 = 512_000;
/// Default on-disk capacity: 10 000 000 bytes.
pub const DEFAULT_DISK_CAPACITY: u64 = 10_000_000;

/// Memory and disk limits for a response cache. Capacities are independent;
/// a disk capacity of zero means nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlCache {
    memory_capacity: u64,
    disk_capacity: u64,
    disk_path: Option<PathBuf>,
}

impl UrlCache {
    pub fn new(memory_capacity: u64, disk_capacity: u64, disk_path: Option<PathBuf>) -> Self {
        Self {
            memory_capacity,
            disk_capacity,
            disk_path,
        }
    }

    /// Memory-only cache used by ephemeral configurations.
    pub fn memory_only(memory_capacity: u64) -> Self {
        Self::new(memory_capacity, 0, None)
    }

    pub fn memory_capacity(&self) -> u64 {
        self.memory_capacity
    }

    pub fn set_memory_capacity(&mut self, bytes: u64) {
        self.memory_capacity = bytes;
    }

    pub fn disk_capacity(&self) -> u64 {
        self.disk_capacity
    }

    pub fn set_disk_capacity(&mut self, bytes: u64) {
        self.disk_capacity = bytes;
    }

    pub fn disk_path(&self) -> Option<&Path> {
        self.disk_path.as_deref()
    }

    pub fn is_persistent(&self) -> bool {
        self.disk_capacity > 0
    }
}

impl Default for UrlCache {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_CAPACITY, DEFAULT_DISK_CAPACITY, None)
    }
}

impl From<&CacheConfig> for UrlCache {
    fn from(cfg: &CacheConfig) -> Self {
        Self::new(cfg.memory_capacity, cfg.disk_capacity, cfg.disk_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacities() {
        let cache = UrlCache::default();
        assert_eq!(cache.memory_capacity(), 512_000);
        assert_eq!(cache.disk_capacity(), 10_000_000);
        assert!(cache.disk_path().is_none());
        assert!(cache.is_persistent());
    }

    #[test]
    fn capacities_are_independent() {
        let mut cache = UrlCache::memory_only(DEFAULT_MEMORY_CAPACITY);
        assert!(!cache.is_persistent());
        cache.set_disk_capacity(1_000);
        assert_eq!(cache.memory_capacity(), DEFAULT_MEMORY_CAPACITY);
        assert!(cache.is_persistent());
        cache.set_memory_capacity(0);
        assert_eq!(cache.disk_capacity(), 1_000);
    }

    #[test]
    fn from_cache_config() {
        let cfg = CacheConfig {
            memory_capacity: 1,
            disk_capacity: 2,
            disk_path: Some(PathBuf::from("/var/cache/urlkit")),
        };
        let cache = UrlCache::from(&cfg);
        assert_eq!(cache.memory_capacity(), 1);
        assert_eq!(cache.disk_capacity(), 2);
        assert_eq!(cache.disk_path(), Some(Path::new("/var/cache/urlkit")));
    }
}
