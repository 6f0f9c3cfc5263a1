use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::types::identifiers::RegionId;

/// Default bound for the income-dataset cache. Region datasets run several
/// hundred KB to low MB, and traffic clusters around a handful of regions
/// per deployment lifetime, so a small bound captures most hits.
pub const DEFAULT_REGION_CAPACITY: usize = 5;

/// Default bound for the geometry cache.
pub const DEFAULT_GEOMETRY_CAPACITY: usize = 5;

#[derive(Debug)]
struct CacheEntry<V> {
    value: Arc<V>,
    loaded_at: DateTime<Utc>, // informational only
}

/// Bounded region-keyed cache with insertion-order eviction.
///
/// When an insert exceeds the capacity, the least-recently-*inserted* entry
/// is evicted — reads do not refresh an entry's position, so eviction order
/// is fixed at load time. Absent lookups are not recorded; every miss
/// re-attempts the load at the call site.
///
/// The cache itself is single-threaded; the engine wraps each instance in a
/// `Mutex` so the insert/evict sequence stays a single-writer discipline.
#[derive(Debug)]
pub struct RegionCache<V> {
    capacity: usize,
    entries: HashMap<RegionId, CacheEntry<V>>,
    order: VecDeque<RegionId>,
}

impl<V> RegionCache<V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
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

    pub fn contains(&self, id: &RegionId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &RegionId) -> Option<Arc<V>> {
        self.entries.get(id).map(|entry| Arc::clone(&entry.value))
    }

    /// When the entry was inserted. Informational; not used for eviction.
    pub fn loaded_at(&self, id: &RegionId) -> Option<DateTime<Utc>> {
        self.entries.get(id).map(|entry| entry.loaded_at)
    }

    /// Insert a freshly loaded value and return a shared handle to it.
    ///
    /// Re-inserting a resident key replaces its value (last writer wins
    /// under a concurrent double-load) but keeps its original queue
    /// position. A zero-capacity cache retains nothing.
    pub fn insert(&mut self, id: RegionId, value: V) -> Arc<V> {
        let value = Arc::new(value);
        if self.capacity == 0 {
            return value;
        }

        let entry = CacheEntry {
            value: Arc::clone(&value),
            loaded_at: Utc::now(),
        };
        if self.entries.insert(id.clone(), entry).is_none() {
            self.order.push_back(id);
            if self.order.len() > self.capacity {
                if let Some(evicted) = self.order.pop_front() {
                    self.entries.remove(&evicted);
                    debug!(region = evicted.as_str(), "evicted region dataset");
                }
            }
        }
        value
    }
}
