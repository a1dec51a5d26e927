//! TTL Cache - Key to (value, expiry) map with a caller-supplied clock
//!
//! Expiry is checked on read: an entry at or past its deadline is evicted
//! and reported absent. Not synchronized; wrap it for shared use.

use chrono::{DateTime, TimeDelta, Utc};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: DateTime<Utc>,
}

impl<V> CacheEntry<V> {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// In-process cache with per-entry time-to-live
#[derive(Debug, Clone)]
pub struct TtlCache<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
}

impl<K: Eq + Hash, V> TtlCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert or replace, returning the previous live value
    pub fn insert(&mut self, key: K, value: V, ttl: TimeDelta, now: DateTime<Utc>) -> Option<V> {
        let entry = CacheEntry {
            value,
            expires_at: now + ttl,
        };
        self.entries
            .insert(key, entry)
            .filter(|prev| !prev.is_expired(now))
            .map(|prev| prev.value)
    }

    pub fn get<Q>(&mut self, key: &Q, now: DateTime<Utc>) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.evict_if_expired(key, now) {
            return None;
        }
        self.entries.get(key).map(|e| &e.value)
    }

    /// Live value for in-place update; the deadline is left untouched
    pub fn get_mut<Q>(&mut self, key: &Q, now: DateTime<Utc>) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.evict_if_expired(key, now) {
            return None;
        }
        self.entries.get_mut(key).map(|e| &mut e.value)
    }

    /// Remove and return a live value
    pub fn take<Q>(&mut self, key: &Q, now: DateTime<Utc>) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries
            .remove(key)
            .filter(|e| !e.is_expired(now))
            .map(|e| e.value)
    }

    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(key).is_some()
    }

    /// Drop every expired entry, returning how many went
    pub fn purge_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, e| !e.is_expired(now));
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Stored entries, expired ones included until read or purged
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_if_expired<Q>(&mut self, key: &Q, now: DateTime<Utc>) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let expired = self
            .entries
            .get(key)
            .is_some_and(|e| e.is_expired(now));
        if expired {
            self.entries.remove(key);
        }
        expired
    }
}

impl<K: Eq + Hash, V> Default for TtlCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
