//! Bounded memory of answers already shown in a session
//!
//! Entries are evicted least-recently-used once the capacity is reached
//! and ignored once they are older than the time-to-live.

use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use lru::LruCache;

/// Per-session cache of emitted answers
#[derive(Debug)]
pub struct ResponseCache {
    /// `None` when the capacity is zero
    entries: Option<LruCache<String, Instant>>,
    ttl: Option<Duration>,
}

impl ResponseCache {
    /// A capacity of zero disables the cache
    pub fn new(capacity: usize, ttl: Option<Duration>) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(LruCache::new),
            ttl,
        }
    }

    /// Whether `text` was remembered and has not expired
    pub fn seen(&mut self, text: &str) -> bool {
        self.seen_at(text, Instant::now())
    }

    /// Remember `text`, refreshing its age if already present
    pub fn remember(&mut self, text: &str) {
        self.remember_at(text, Instant::now());
    }

    pub(crate) fn seen_at(&mut self, text: &str, now: Instant) -> bool {
        let ttl = self.ttl;
        let Some(entries) = self.entries.as_mut() else {
            return false;
        };
        let expired = match entries.get(text) {
            None => return false,
            Some(stored) => ttl.is_some_and(|ttl| now.saturating_duration_since(*stored) > ttl),
        };
        if expired {
            entries.pop(text);
            return false;
        }
        true
    }

    pub(crate) fn remember_at(&mut self, text: &str, now: Instant) {
        if let Some(entries) = self.entries.as_mut() {
            entries.put(text.to_string(), now);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, |e| e.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.entries.as_ref().map_or(0, |e| e.cap().get())
    }

    pub fn clear(&mut self) {
        if let Some(entries) = self.entries.as_mut() {
            entries.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remember_and_seen() {
        let mut cache = ResponseCache::new(4, None);
        assert!(!cache.seen("rest and fluids"));
        cache.remember("rest and fluids");
        assert!(cache.seen("rest and fluids"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_capacity_is_bounded() {
        let mut cache = ResponseCache::new(2, None);
        cache.remember("a");
        cache.remember("b");
        cache.remember("c");
        assert_eq!(cache.len(), 2);
        assert!(!cache.seen("a"));
        assert!(cache.seen("b"));
        assert!(cache.seen("c"));
    }

    #[test]
    fn test_lookup_refreshes_recency() {
        let mut cache = ResponseCache::new(2, None);
        cache.remember("a");
        cache.remember("b");
        assert!(cache.seen("a"));
        cache.remember("c");
        assert!(cache.seen("a"));
        assert!(!cache.seen("b"));
    }

    #[test]
    fn test_entries_expire() {
        let mut cache = ResponseCache::new(8, Some(Duration::from_secs(60)));
        let start = Instant::now();
        cache.remember_at("answer", start);

        assert!(cache.seen_at("answer", start + Duration::from_secs(30)));
        assert!(!cache.seen_at("answer", start + Duration::from_secs(61)));
        // Expired entries are dropped on lookup
        assert!(cache.is_empty());
    }

    #[test]
    fn test_zero_capacity_disables() {
        let mut cache = ResponseCache::new(0, None);
        cache.remember("anything");
        assert!(!cache.seen("anything"));
        assert_eq!(cache.capacity(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cache = ResponseCache::new(3, None);
        cache.remember("x");
        cache.clear();
        assert!(!cache.seen("x"));
        assert_eq!(cache.capacity(), 3);
    }
}
