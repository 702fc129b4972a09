//! Cache configuration

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Capacity used when none is configured
pub const DEFAULT_CAPACITY: usize = 10;

/// Construction parameters for a cache
///
/// Derives serde so hosts can embed it in their own config files;
/// missing fields fall back to [`CacheConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of live entries
    pub capacity: usize,
}

impl CacheConfig {
    /// Create a config with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Reject configurations no cache can be built from
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidCapacity(self.capacity));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_zero_capacity() {
        let config = CacheConfig::new(0);
        assert_eq!(config.validate(), Err(Error::InvalidCapacity(0)));
    }

    #[test]
    fn test_config_from_json() {
        let config: CacheConfig = serde_json::from_str(r#"{"capacity": 256}"#).unwrap();
        assert_eq!(config, CacheConfig::new(256));

        // Missing fields use the default
        let config: CacheConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn test_config_to_json() {
        let json = serde_json::to_string(&CacheConfig::new(3)).unwrap();
        assert_eq!(json, r#"{"capacity":3}"#);
    }
}
