use serde::Deserialize;

/// Sizing for pooled backends. Single-connection backends ignore it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Maximum number of physical connections
    pub max_size: usize,

    /// Connections opened as soon as the pool is created
    pub min_idle: usize,
}

impl PoolConfig {
    pub fn new() -> Self {
        Self {
            max_size: 5,
            min_idle: 1,
        }
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new()
    }
}
