//! Loaded-Key Cache
//!
//! Process-wide record of which images already completed their fade-in
//! once, so a remount of the same image skips the animation. The set
//! only ever grows; membership is advisory, not proof the image is
//! still in the DOM.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Mutex, OnceLock, PoisonError};

/// Opaque identifier for one logical image across remounts
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CacheKey {
    fn from(s: &str) -> Self {
        CacheKey(s.to_string())
    }
}

impl From<String> for CacheKey {
    fn from(s: String) -> Self {
        CacheKey(s)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Monotonic set of keys that finished loading
///
/// Usually used through [`LoadedImageCache::global`], but tests and
/// embedders can construct scoped instances.
#[derive(Debug, Default)]
pub struct LoadedImageCache {
    keys: Mutex<HashSet<String>>,
}

static GLOBAL_CACHE: OnceLock<LoadedImageCache> = OnceLock::new();

impl LoadedImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-level default instance
    pub fn global() -> &'static LoadedImageCache {
        GLOBAL_CACHE.get_or_init(LoadedImageCache::new)
    }

    /// Idempotent insert; no-op when the key is absent
    pub fn mark_loaded(&self, key: Option<&CacheKey>) {
        if let Some(key) = key {
            self.keys
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(key.as_str().to_string());
        }
    }

    /// Pure membership test; monotonic (once true, always true)
    pub fn has_loaded(&self, key: &CacheKey) -> bool {
        self.keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(key.as_str())
    }

    pub fn len(&self) -> usize {
        self.keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
