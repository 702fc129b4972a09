//! # tslru
//!
//! Fixed-capacity, thread-safe LRU cache with hit/miss statistics.
//!
//! ## Architecture
//! - **Index**: AHash map from key to arena slot (O(1))
//! - **LRU List**: Doubly-linked list over an arena with head/tail sentinels (O(1))
//! - **Locking**: One mutex over index, list and counters
//!
//! ```
//! use tslru::ThreadSafeLru;
//!
//! let cache = ThreadSafeLru::new(2)?;
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a")?;
//! cache.put("c", 3); // evicts "b"
//!
//! assert!(!cache.contains(&"b"));
//! assert!(cache.get(&"b").unwrap_err().is_not_found());
//! assert_eq!(cache.hit_miss_stats(), (1, 1));
//! # Ok::<(), tslru::Error>(())
//! ```

#![warn(missing_docs)]

mod cache;
mod config;
mod error;
mod lru;
mod stats;

pub use cache::ThreadSafeLru;
pub use config::{CacheConfig, DEFAULT_CAPACITY};
pub use error::{Error, Result};
pub use lru::{Iter, LruList};
pub use stats::CacheStats;
