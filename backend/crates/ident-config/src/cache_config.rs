use crate::{ConfigError, ConfigErrorResult, DEFAULT_CACHE_SWEEP_THRESHOLD};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Purge expired refresh tokens once the cache holds more keys than this
    pub sweep_threshold: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            sweep_threshold: DEFAULT_CACHE_SWEEP_THRESHOLD,
        }
    }
}

impl CacheConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.sweep_threshold < 1 {
            return Err(ConfigError::cache("cache.sweep_threshold must be at least 1"));
        }

        Ok(())
    }
}
