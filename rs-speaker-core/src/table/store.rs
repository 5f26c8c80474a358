use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::config::HashTableConfig;
use super::hashtable::HashTable;
use crate::error::TableError;

/// Storage backend selector of the Markov model.
///
/// Parsed from the driver strings `"hashtable"` and `"dict"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
	/// The custom chaining `HashTable`.
	HashTable,
	/// The standard-library backed `DefaultMap`.
	Dict,
}

impl Backend {
	/// Creates an empty store of this kind.
	///
	/// `config` is only used in full by the hash table; the map backend
	/// only takes its default value.
	///
	/// # Errors
	/// Returns `TableError::InvalidConfig` if `config` does not validate.
	pub fn make_store(self, config: HashTableConfig) -> Result<Box<dyn CountStore>, TableError> {
		match self {
			Backend::HashTable => Ok(Box::new(HashTable::new(config)?)),
			Backend::Dict => Ok(Box::new(DefaultMap::new(config.default_value))),
		}
	}
}

impl FromStr for Backend {
	type Err = TableError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"hashtable" => Ok(Backend::HashTable),
			"dict" => Ok(Backend::Dict),
			other => Err(TableError::InvalidConfig(format!(
				"backend must either be 'hashtable' or 'dict', got '{other}'"
			))),
		}
	}
}

impl fmt::Display for Backend {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Backend::HashTable => f.write_str("hashtable"),
			Backend::Dict => f.write_str("dict"),
		}
	}
}

/// Default-valued map from string keys to integer counts.
///
/// This is the capability the Markov model is written against; both the
/// custom `HashTable` and the standard-library backed `DefaultMap` provide it
/// with identical semantics.
///
/// # Contract
/// - `get` never fails, absent keys yield the store's default value
/// - `set` inserts or overwrites
/// - `delete` of an absent key fails with `TableError::KeyNotFound`
/// - `size` counts distinct stored keys
pub trait CountStore: fmt::Debug {
	/// Returns the value of `key`, or the default value if absent.
	fn get(&self, key: &str) -> i64;

	/// Inserts `key` or overwrites its value.
	fn set(&mut self, key: &str, value: i64);

	/// Removes `key`, failing with `TableError::KeyNotFound` if absent.
	fn delete(&mut self, key: &str) -> Result<i64, TableError>;

	/// Number of distinct keys stored.
	fn size(&self) -> usize;

	/// Adds one to the value stored under `key` (starting from the default value).
	fn increment(&mut self, key: &str) {
		let value = self.get(key);
		self.set(key, value + 1);
	}
}

impl CountStore for HashTable {
	fn get(&self, key: &str) -> i64 {
		HashTable::get(self, key)
	}

	fn set(&mut self, key: &str, value: i64) {
		HashTable::set(self, key, value)
	}

	fn delete(&mut self, key: &str) -> Result<i64, TableError> {
		HashTable::delete(self, key)
	}

	fn size(&self) -> usize {
		HashTable::size(self)
	}
}

/// `std::collections::HashMap` with a default value for missing keys.
///
/// Alternate backend of the Markov model, behaviorally interchangeable with
/// `HashTable`.
#[derive(Clone, Debug, Default)]
pub struct DefaultMap {
	values: HashMap<String, i64>,
	default_value: i64,
}

impl DefaultMap {
	/// Creates an empty map returning `default_value` for absent keys.
	pub fn new(default_value: i64) -> Self {
		Self { values: HashMap::new(), default_value }
	}
}

impl CountStore for DefaultMap {
	fn get(&self, key: &str) -> i64 {
		self.values.get(key).copied().unwrap_or(self.default_value)
	}

	fn set(&mut self, key: &str, value: i64) {
		match self.values.get_mut(key) {
			Some(existing) => *existing = value,
			None => {
				self.values.insert(key.to_owned(), value);
			}
		}
	}

	fn delete(&mut self, key: &str) -> Result<i64, TableError> {
		self.values.remove(key).ok_or_else(|| TableError::KeyNotFound(key.to_owned()))
	}

	fn size(&self) -> usize {
		self.values.len()
	}

	fn increment(&mut self, key: &str) {
		match self.values.get_mut(key) {
			Some(value) => *value += 1,
			None => {
				self.values.insert(key.to_owned(), self.default_value + 1);
			}
		}
	}
}
