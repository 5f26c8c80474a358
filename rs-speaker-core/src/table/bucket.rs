use crate::error::TableError;

/// A key/value pair stored in a bucket.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Entry {
	pub(crate) key: String,
	pub(crate) value: i64,
}

/// Ordered sequence of entries sharing one hash bucket.
///
/// Entries keep their insertion order, which is also the order used when
/// the table migrates them into a grown bucket array.
///
/// # Invariants
/// - At most one entry per key (callers only `append` after a failed `find`)
#[derive(Clone, Debug, Default)]
pub(crate) struct BucketList {
	entries: Vec<Entry>,
}

impl BucketList {
	/// Creates an empty bucket.
	pub(crate) fn new() -> Self {
		Self { entries: Vec::new() }
	}

	/// Appends an entry at the end of the bucket.
	///
	/// No duplicate check is performed.
	pub(crate) fn append(&mut self, key: String, value: i64) {
		self.entries.push(Entry { key, value });
	}

	/// Returns the entry stored under `key`, if any. O(n) scan.
	pub(crate) fn find(&self, key: &str) -> Option<&Entry> {
		self.entries.iter().find(|entry| entry.key == key)
	}

	/// Mutable variant of `find`, used to overwrite a value in place.
	pub(crate) fn find_mut(&mut self, key: &str) -> Option<&mut Entry> {
		self.entries.iter_mut().find(|entry| entry.key == key)
	}

	pub(crate) fn contains(&self, key: &str) -> bool {
		self.find(key).is_some()
	}

	/// Removes the entry stored under `key` and returns it.
	///
	/// The relative order of the remaining entries is preserved.
	///
	/// # Errors
	/// Returns `TableError::KeyNotFound` if no entry matches.
	pub(crate) fn delete(&mut self, key: &str) -> Result<Entry, TableError> {
		match self.entries.iter().position(|entry| entry.key == key) {
			Some(index) => Ok(self.entries.remove(index)),
			None => Err(TableError::KeyNotFound(key.to_owned())),
		}
	}

	pub(crate) fn len(&self) -> usize {
		self.entries.len()
	}

	pub(crate) fn iter(&self) -> impl Iterator<Item = &Entry> {
		self.entries.iter()
	}

	/// Consumes the bucket, yielding its entries in order.
	pub(crate) fn into_entries(self) -> impl Iterator<Item = Entry> {
		self.entries.into_iter()
	}
}
