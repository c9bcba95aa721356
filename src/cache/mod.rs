//! Content-addressed translation cache, one JSON file per entry.

mod store;

pub use store::{CacheRecord, CacheStats, CacheStore, cache_key};
