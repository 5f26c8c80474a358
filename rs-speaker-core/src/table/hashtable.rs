use std::fmt;
use std::iter;

use log::debug;

use super::bucket::BucketList;
use super::config::HashTableConfig;
use crate::error::TableError;

/// Polynomial constant of the Horner hash.
pub const P_CONSTANT: u128 = 37;

/// Computes the bucket index of `key` for a table of `capacity` buckets.
///
/// The hash is the Horner polynomial `val = P * val + code_point(c)` over the
/// characters of `key`, taken modulo `capacity`. The reduction is applied at
/// every step, which yields the same index as reducing the unbounded value
/// once while staying within 128-bit arithmetic.
///
/// `capacity` must be non-zero.
pub fn polynomial_hash(key: &str, capacity: usize) -> usize {
	let modulus = capacity as u128;
	let mut val: u128 = 0;
	for c in key.chars() {
		val = (P_CONSTANT * val + c as u128) % modulus;
	}
	val as usize
}

/// Open-chaining hash table from `String` keys to integer values.
///
/// The table is an owned array of `BucketList`s. When inserting a new key
/// pushes `size / capacity` above the load factor, the whole bucket array is
/// replaced by a larger one and every entry is rehashed in a single pass.
///
/// # Responsibilities
/// - Route `set`, `get` and `delete` to the bucket selected by `polynomial_hash`
/// - Return the configured default value for absent keys
/// - Grow the bucket array when the load factor is exceeded
///
/// # Invariants
/// - `size` equals the number of entries across all buckets
/// - `buckets.len() == capacity`
/// - After any growth event, `size / capacity <= load_factor`
///
/// Iteration is deliberately not supported, see `iter`.
pub struct HashTable {
	buckets: Vec<BucketList>,
	capacity: usize,
	size: usize,
	config: HashTableConfig,
}

impl HashTable {
	/// Creates an empty table from `config`.
	///
	/// # Errors
	/// Returns `TableError::InvalidConfig` if `config` does not validate.
	pub fn new(config: HashTableConfig) -> Result<Self, TableError> {
		config.validate()?;
		Ok(Self {
			buckets: Self::empty_buckets(config.capacity),
			capacity: config.capacity,
			size: 0,
			config,
		})
	}

	fn empty_buckets(capacity: usize) -> Vec<BucketList> {
		let mut buckets = Vec::with_capacity(capacity);
		buckets.resize_with(capacity, BucketList::new);
		buckets
	}

	fn bucket_index(&self, key: &str) -> usize {
		polynomial_hash(key, self.capacity)
	}

	/// Current number of buckets.
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Number of distinct keys stored. O(1).
	pub fn size(&self) -> usize {
		self.size
	}

	/// True if no key is stored.
	pub fn is_empty(&self) -> bool {
		self.size == 0
	}

	/// Configuration the table was created with.
	pub fn config(&self) -> &HashTableConfig {
		&self.config
	}

	/// Sets the value of `key`.
	///
	/// - If the key exists, its value is overwritten in place (size unchanged).
	/// - Otherwise a new entry is appended to its bucket and the table may grow.
	pub fn set(&mut self, key: &str, value: i64) {
		let index = self.bucket_index(key);
		if let Some(entry) = self.buckets[index].find_mut(key) {
			entry.value = value;
			return;
		}

		self.buckets[index].append(key.to_owned(), value);
		self.size += 1;

		if self.load() > self.config.load_factor {
			self.grow();
		}
	}

	/// Returns the value of `key`, or the configured default value if absent.
	pub fn get(&self, key: &str) -> i64 {
		self.buckets[self.bucket_index(key)]
			.find(key)
			.map_or(self.config.default_value, |entry| entry.value)
	}

	/// True if `key` is stored, regardless of its value.
	pub fn contains_key(&self, key: &str) -> bool {
		self.buckets[self.bucket_index(key)].contains(key)
	}

	/// Removes `key` from the table.
	///
	/// # Errors
	/// Returns `TableError::KeyNotFound` if the key is not stored; the table
	/// is left untouched in that case.
	pub fn delete(&mut self, key: &str) -> Result<i64, TableError> {
		let index = self.bucket_index(key);
		let entry = self.buckets[index].delete(key)?;
		self.size -= 1;
		Ok(entry.value)
	}

	/// Iteration over the table is not supported.
	///
	/// # Errors
	/// Always returns `TableError::Unsupported`.
	pub fn iter(&self) -> Result<iter::Empty<(&str, i64)>, TableError> {
		Err(TableError::Unsupported("iteration"))
	}

	fn load(&self) -> f64 {
		self.size as f64 / self.capacity as f64
	}

	/// Replaces the bucket array by a larger one and rehashes every entry.
	///
	/// The capacity is grown as many times as needed to bring the load back
	/// under the threshold, then entries are migrated in one pass.
	fn grow(&mut self) {
		let old_capacity = self.capacity;
		let mut capacity = self.config.grow(old_capacity);
		while self.size as f64 / capacity as f64 > self.config.load_factor {
			capacity = self.config.grow(capacity);
		}

		let old_buckets = std::mem::replace(&mut self.buckets, Self::empty_buckets(capacity));
		self.capacity = capacity;
		for bucket in old_buckets {
			for entry in bucket.into_entries() {
				let index = self.bucket_index(&entry.key);
				self.buckets[index].append(entry.key, entry.value);
			}
		}

		debug!(
			"hash table grown from {} to {} buckets ({} entries, longest chain {})",
			old_capacity,
			capacity,
			self.size,
			self.buckets.iter().map(BucketList::len).max().unwrap_or(0)
		);
	}
}

impl fmt::Debug for HashTable {
	/// Lists every entry in bucket order, ex. `{"ab": 2, "b": 1}`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map()
			.entries(self.buckets.iter().flat_map(|bucket| bucket.iter().map(|entry| (&entry.key, &entry.value))))
			.finish()
	}
}
