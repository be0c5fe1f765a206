//! Configuration for replyscan
//!
//! Centralized configuration with sensible defaults.

/// Configuration for a [`Binder`](crate::Binder) and its spec cache
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Cache Configuration
    // -------------------------------------------------------------------------
    /// Initial number of struct types the spec cache has room for
    pub cache_capacity: usize,

    // -------------------------------------------------------------------------
    // Compiler Configuration
    // -------------------------------------------------------------------------
    /// Deepest level of embedded structs the field-spec compiler descends into.
    /// Top-level fields are at depth 0.
    pub max_embed_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: 64,
            max_embed_depth: 32,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the initial spec cache capacity
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.config.cache_capacity = capacity;
        self
    }

    /// Set the maximum embedding depth
    pub fn max_embed_depth(mut self, depth: usize) -> Self {
        self.config.max_embed_depth = depth;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
