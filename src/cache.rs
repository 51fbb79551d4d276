// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! A small bounded cache that remembers the most recently inserted entries.

use log::debug;
use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 50;

/// Fixed-capacity map keyed by `u64`.
///
/// Entries are ordered by insertion, newest first. Inserting an existing key
/// replaces its value and moves it to the front; once `capacity` is
/// exceeded the oldest entry is evicted. Lookups do not change the order.
///
/// ```
/// use polykit::MruCache;
///
/// let mut cache = MruCache::new(2);
/// cache.insert(1, "one");
/// cache.insert(2, "two");
/// cache.insert(3, "three");
/// assert_eq!(cache.get(1), None);
/// assert_eq!(cache.keys().collect::<Vec<_>>(), [3, 2]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MruCache<V> {
    entries: VecDeque<(u64, V)>,
    capacity: usize,
}

impl<V> Default for MruCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<V> MruCache<V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    fn index_of(&self, key: u64) -> Option<usize> {
        self.entries.iter().position(|(k, _)| *k == key)
    }
    pub fn get(&self, key: u64) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| value)
    }
    pub fn contains_key(&self, key: u64) -> bool {
        self.index_of(key).is_some()
    }
    /// returns the previous value stored under `key`, if any
    pub fn insert(&mut self, key: u64, value: V) -> Option<V> {
        let previous = self
            .index_of(key)
            .and_then(|index| self.entries.remove(index))
            .map(|(_, value)| value);
        self.entries.push_front((key, value));
        while self.entries.len() > self.capacity {
            if let Some((evicted, _)) = self.entries.pop_back() {
                debug!("cache full, evicting {}", evicted);
            }
        }
        previous
    }
    pub fn clear(&mut self) {
        self.entries.clear();
    }
    /// newest first
    pub fn keys(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }
    pub fn iter(&self) -> impl Iterator<Item = (u64, &V)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }
}
