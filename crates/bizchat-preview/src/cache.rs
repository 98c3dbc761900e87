// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use lru::LruCache;
use tracing::trace;

use crate::names::clean_business_name;
use crate::{BusinessPreview, PreviewLookup};

/// Default lifetime of a cached preview.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);
/// Default number of cached previews.
pub const DEFAULT_CAPACITY: usize = 100;

/// Wraps a lookup with an LRU cache of hits.
///
/// Keys are the cleaned, lowercased query.  Misses are not cached so a
/// business added to the backing store shows up on the next lookup.  A zero
/// TTL disables caching.
pub struct CachedLookup<L> {
    inner: L,
    ttl: Duration,
    cache: Mutex<LruCache<String, (Instant, BusinessPreview)>>,
}

impl<L: PreviewLookup> CachedLookup<L> {
    pub fn new(inner: L) -> Self {
        Self::with_limits(inner, DEFAULT_CAPACITY, DEFAULT_TTL)
    }

    pub fn with_limits(inner: L, capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self { inner, ttl, cache: Mutex::new(LruCache::new(capacity)) }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    pub fn clear(&self) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.clear();
        }
    }

    fn cached(&self, key: &str) -> Option<BusinessPreview> {
        let mut cache = self.cache.lock().ok()?;
        let (stored, preview) = cache.get(key)?;
        if stored.elapsed() < self.ttl {
            return Some(preview.clone());
        }
        cache.pop(key);
        None
    }
}

impl<L: PreviewLookup> PreviewLookup for CachedLookup<L> {
    fn lookup(&self, name: &str) -> Option<BusinessPreview> {
        let key = clean_business_name(name).to_lowercase();
        if let Some(hit) = self.cached(&key) {
            trace!(name = %key, "preview cache hit");
            return Some(hit);
        }

        let preview = self.inner.lookup(name)?;
        if let Ok(mut cache) = self.cache.lock() {
            cache.put(key, (Instant::now(), preview.clone()));
        }
        Some(preview)
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
