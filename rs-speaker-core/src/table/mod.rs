//! Storage layer of the speaker identification system.
//!
//! This module provides:
//! - A single hash bucket (`BucketList`)
//! - A chaining hash table with full-rehash growth (`HashTable`)
//! - Its tuning parameters (`HashTableConfig`)
//! - The default-valued count store capability (`CountStore`) and a
//!   standard-library backed alternative (`DefaultMap`)

/// Ordered list of entries sharing a hash bucket.
///
/// Not exposed, only the hash table manipulates buckets.
mod bucket;

/// Tuning parameters of the hash table.
pub mod config;

/// Open-chaining hash table with dynamic resizing.
pub mod hashtable;

/// Default-valued map capability shared by both storage backends.
pub mod store;
