//! LRU (Least Recently Used) list
//!
//! Nodes live in a single arena and link to each other by slot index.
//! Slots 0 and 1 hold the head and tail sentinels, so linking and
//! unlinking never special-case the ends of the list.

use std::collections::HashMap;
use std::hash::Hash;
use ahash::RandomState;
use tracing::trace;

use crate::error::{Error, Result};

const HEAD: usize = 0;
const TAIL: usize = 1;

/// Upper bound on slots reserved up front; the arena grows past it on demand
const PREALLOC_LIMIT: usize = 1024;

/// Arena slot in the recency list
///
/// `entry` is `None` for the sentinels and for slots on the free list.
struct Node<K, V> {
    entry: Option<(K, V)>,
    prev: usize,
    next: usize,
}

impl<K, V> Node<K, V> {
    fn sentinel() -> Self {
        Self {
            entry: None,
            prev: HEAD,
            next: TAIL,
        }
    }
}

/// LRU list with fixed capacity
///
/// Not synchronized; [`crate::ThreadSafeLru`] wraps it in a mutex.
pub struct LruList<K, V> {
    map: HashMap<K, usize, RandomState>,
    nodes: Vec<Node<K, V>>,
    free_list: Vec<usize>,
    capacity: usize,
}

impl<K, V> LruList<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new LRU list with the given capacity
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }

        // Two sentinels plus one transient slot while a put overflows
        let reserve = capacity.min(PREALLOC_LIMIT).saturating_add(1);
        let mut nodes = Vec::with_capacity(reserve + 2);
        nodes.push(Node::sentinel());
        nodes.push(Node::sentinel());

        Ok(Self {
            map: HashMap::with_capacity_and_hasher(reserve, RandomState::new()),
            nodes,
            free_list: Vec::new(),
            capacity,
        })
    }

    /// Get a value and mark it most recently used
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let idx = *self.map.get(key)?;
        self.move_to_front(idx);
        self.nodes[idx].entry.as_ref().map(|(_, value)| value)
    }

    /// Get a value without touching recency order
    pub fn peek(&self, key: &K) -> Option<&V> {
        let idx = *self.map.get(key)?;
        self.nodes[idx].entry.as_ref().map(|(_, value)| value)
    }

    /// Membership test; does not touch recency order
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Insert or update a key-value pair
    ///
    /// Returns the entry evicted to make room, if any. At most one entry
    /// is evicted per call.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&idx) = self.map.get(&key) {
            if let Some((_, slot)) = &mut self.nodes[idx].entry {
                *slot = value;
            }
            self.move_to_front(idx);
            return None;
        }

        let idx = self.alloc_node(key.clone(), value);
        self.link_front(idx);
        self.map.insert(key, idx);

        if self.map.len() > self.capacity {
            self.evict_lru()
        } else {
            None
        }
    }

    /// Remove a key from the list
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.map.remove(key)?;
        self.unlink(idx);
        self.free_node(idx).map(|(_, value)| value)
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Maximum number of live entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry, keeping the sentinels
    pub fn clear(&mut self) {
        self.map.clear();
        self.nodes.truncate(2);
        self.nodes[HEAD].next = TAIL;
        self.nodes[TAIL].prev = HEAD;
        self.free_list.clear();
    }

    /// Iterate entries from most to least recently used
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            nodes: &self.nodes,
            cur: self.nodes[HEAD].next,
            remaining: self.map.len(),
        }
    }

    /// Walk the list and verify it agrees with the index
    ///
    /// Checks that links are symmetric, that every list node is indexed
    /// under its own key, and that the walk visits exactly `len` nodes.
    pub fn check_integrity(&self) -> bool {
        if self.map.len() > self.capacity {
            return false;
        }

        let mut seen = 0;
        let mut prev = HEAD;
        let mut cur = self.nodes[HEAD].next;

        while cur != TAIL {
            if seen == self.map.len() {
                return false;
            }
            let Some(node) = self.nodes.get(cur) else {
                return false;
            };
            if node.prev != prev {
                return false;
            }
            match &node.entry {
                Some((key, _)) if self.map.get(key) == Some(&cur) => {}
                _ => return false,
            }
            seen += 1;
            prev = cur;
            cur = node.next;
        }

        self.nodes[TAIL].prev == prev && seen == self.map.len()
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.nodes[HEAD].next == idx {
            return; // Already at front
        }
        self.unlink(idx);
        self.link_front(idx);
    }

    fn unlink(&mut self, idx: usize) {
        debug_assert!(idx != HEAD && idx != TAIL, "sentinels are never unlinked");

        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
    }

    fn link_front(&mut self, idx: usize) {
        let first = self.nodes[HEAD].next;

        self.nodes[idx].prev = HEAD;
        self.nodes[idx].next = first;
        self.nodes[first].prev = idx;
        self.nodes[HEAD].next = idx;
    }

    fn evict_lru(&mut self) -> Option<(K, V)> {
        if self.map.is_empty() {
            return None;
        }

        let lru = self.nodes[TAIL].prev;
        if lru == HEAD {
            return None;
        }

        self.unlink(lru);
        let (key, value) = self.free_node(lru)?;
        self.map.remove(&key);
        trace!(slot = lru, "evicted least recently used entry");

        Some((key, value))
    }

    fn alloc_node(&mut self, key: K, value: V) -> usize {
        if let Some(idx) = self.free_list.pop() {
            self.nodes[idx].entry = Some((key, value));
            idx
        } else {
            let idx = self.nodes.len();
            self.nodes.push(Node {
                entry: Some((key, value)),
                prev: HEAD,
                next: TAIL,
            });
            idx
        }
    }

    fn free_node(&mut self, idx: usize) -> Option<(K, V)> {
        let entry = self.nodes[idx].entry.take();
        self.free_list.push(idx);
        entry
    }
}

/// Iterator over list entries in recency order, most recent first
pub struct Iter<'a, K, V> {
    nodes: &'a [Node<K, V>],
    cur: usize,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.cur == TAIL {
            return None;
        }
        let node = &self.nodes[self.cur];
        self.cur = node.next;
        self.remaining -= 1;
        node.entry.as_ref().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
