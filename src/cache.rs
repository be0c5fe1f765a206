//! Spec Cache
//!
//! Memoizes compiled [`StructSpec`]s per struct type.
//!
//! ## Concurrency
//! - Lookups take a shared read lock (many concurrent readers)
//! - A miss takes the write lock, re-checks for a racer's result, then
//!   compiles and inserts
//! - Entries are never evicted or recompiled; a type's layout is fixed for
//!   the life of the process

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::Config;
use crate::error::Result;
use crate::record::Record;
use crate::spec::{compile, StructSpec};

/// Cache of compiled struct specs, keyed by type
pub struct SpecCache {
    config: Config,

    /// Compiled specs; only grows
    specs: RwLock<HashMap<TypeId, Arc<StructSpec>>>,
}

impl SpecCache {
    /// Create an empty cache
    pub fn new(config: Config) -> Self {
        let specs = HashMap::with_capacity(config.cache_capacity);
        Self {
            config,
            specs: RwLock::new(specs),
        }
    }

    /// Get the spec for `T`, compiling it on first use
    ///
    /// Compilation failures (unsupported tags, excessive embedding) are
    /// returned and nothing is cached.
    pub fn get_or_compile<T: Record>(&self) -> Result<Arc<StructSpec>> {
        let key = TypeId::of::<T>();

        if let Some(spec) = self.specs.read().get(&key) {
            tracing::trace!("Spec cache hit for {}", T::layout().type_name);
            return Ok(Arc::clone(spec));
        }

        let mut specs = self.specs.write();
        if let Some(spec) = specs.get(&key) {
            return Ok(Arc::clone(spec));
        }

        let layout = T::layout();
        let spec = Arc::new(compile(layout, &self.config)?);
        tracing::debug!(
            "Compiled spec for {}: {} bindable fields",
            layout.type_name,
            spec.len()
        );
        specs.insert(key, Arc::clone(&spec));

        Ok(spec)
    }

    /// Get the spec for `T` if it has already been compiled
    pub fn get<T: Record>(&self) -> Option<Arc<StructSpec>> {
        self.specs.read().get(&TypeId::of::<T>()).cloned()
    }

    /// Number of cached specs
    pub fn len(&self) -> usize {
        self.specs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.read().is_empty()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for SpecCache {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
