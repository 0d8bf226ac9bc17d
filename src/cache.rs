//! Least-recently-used cache with a time-to-live.
//!
//! An entry is dropped when it has not been accessed for `ttl`, or when the
//! cache grows past `item_limit` and it is the least recently accessed entry.
//! `has`, `get` and `set` all count as an access.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::trace;

use crate::error::Result;
use crate::parser::{config::ParserConfig, Document, SsmlParser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheOptions {
    /// Time to live, measured from the last access
    pub ttl: Duration,
    /// Maximum number of entries kept
    pub item_limit: usize,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            item_limit: 128,
        }
    }
}

#[derive(Debug)]
struct Entry<V> {
    value: V,
    last_access: Instant,
    /// Monotonic access counter; the smallest value is evicted first
    tick: u64,
}

#[derive(Debug)]
struct CacheState<V> {
    entries: HashMap<String, Entry<V>>,
    ticks: u64,
}

impl<V> CacheState<V> {
    fn next_tick(&mut self) -> u64 {
        self.ticks += 1;
        self.ticks
    }

    /// Refresh `key` if it is live, drop it if it expired
    fn touch(&mut self, key: &str, now: Instant, ttl: Duration) -> Option<&mut Entry<V>> {
        let expired = self
            .entries
            .get(key)
            .is_some_and(|entry| now.saturating_duration_since(entry.last_access) >= ttl);
        if expired {
            trace!(key = %key, "cache entry expired");
            self.entries.remove(key);
            return None;
        }

        let tick = self.next_tick();
        let entry = self.entries.get_mut(key)?;
        entry.last_access = now;
        entry.tick = tick;
        Some(entry)
    }

    fn evict_least_recent(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.tick)
            .map(|(key, _)| key.clone());
        if let Some(key) = oldest {
            trace!(key = %key, "evicting least recently used entry");
            self.entries.remove(&key);
        }
    }
}

/// Thread-safe LRU cache keyed by strings
#[derive(Debug)]
pub struct LruCache<V> {
    options: CacheOptions,
    state: Mutex<CacheState<V>>,
}

impl<V: Clone> LruCache<V> {
    pub fn new(options: CacheOptions) -> Self {
        Self {
            options,
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
                ticks: 0,
            }),
        }
    }

    pub fn options(&self) -> CacheOptions {
        self.options
    }

    pub fn has(&self, key: &str) -> bool {
        self.has_at(key, Instant::now())
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    pub fn set(&self, key: impl Into<String>, value: V) {
        self.set_at(key.into(), value, Instant::now());
    }

    pub fn remove(&self, key: &str) -> Option<V> {
        self.state.lock().entries.remove(key).map(|entry| entry.value)
    }

    pub fn clear(&self) {
        self.state.lock().entries.clear();
    }

    /// Number of stored entries, including ones that expired but were not
    /// accessed since
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn has_at(&self, key: &str, now: Instant) -> bool {
        self.state.lock().touch(key, now, self.options.ttl).is_some()
    }

    fn get_at(&self, key: &str, now: Instant) -> Option<V> {
        self.state
            .lock()
            .touch(key, now, self.options.ttl)
            .map(|entry| entry.value.clone())
    }

    fn set_at(&self, key: String, value: V, now: Instant) {
        let ttl = self.options.ttl;
        let mut state = self.state.lock();

        state
            .entries
            .retain(|_, entry| now.saturating_duration_since(entry.last_access) < ttl);

        let tick = state.next_tick();
        state.entries.insert(
            key,
            Entry {
                value,
                last_access: now,
                tick,
            },
        );

        while state.entries.len() > self.options.item_limit {
            state.evict_least_recent();
        }
    }
}

/// Memoizes parsed documents by their source text.
///
/// Failed parses are not cached.
#[derive(Debug)]
pub struct DocumentCache {
    cache: LruCache<Document>,
    config: ParserConfig,
}

impl DocumentCache {
    pub fn new(options: CacheOptions) -> Self {
        Self::with_config(options, ParserConfig::default())
    }

    pub fn with_config(options: CacheOptions, config: ParserConfig) -> Self {
        Self {
            cache: LruCache::new(options),
            config,
        }
    }

    /// Return the cached document for `input`, parsing it on a miss
    pub fn parse(&self, input: &str) -> Result<Document> {
        if let Some(document) = self.cache.get(input) {
            trace!("document cache hit");
            return Ok(document);
        }

        let document = SsmlParser::with_config(input, self.config.clone())?.parse()?;
        self.cache.set(input, document.clone());
        Ok(document)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&self) {
        self.cache.clear();
    }
}
