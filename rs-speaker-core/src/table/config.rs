use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Number of buckets of a freshly created table.
pub const DEFAULT_CAPACITY: usize = 57;
/// Value returned for absent keys.
pub const DEFAULT_VALUE: i64 = 0;
/// `size / capacity` ratio above which the table grows.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.5;
/// Multiplier applied to the capacity on growth.
pub const DEFAULT_GROWTH_FACTOR: f64 = 2.0;

/// Tuning parameters of a `HashTable`.
///
/// Passed explicitly to the table constructor, every table owns its copy.
///
/// # Invariants (checked by `validate`)
/// - `capacity >= 1`
/// - `load_factor` is finite and `> 0`
/// - `growth_factor` is finite and `> 1`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct HashTableConfig {
	/// Initial number of buckets.
	pub capacity: usize,
	/// Value returned by `get` for keys never set.
	pub default_value: i64,
	/// Growth threshold on `size / capacity`.
	pub load_factor: f64,
	/// Multiplicative factor applied to `capacity` on growth.
	pub growth_factor: f64,
}

impl Default for HashTableConfig {
	fn default() -> Self {
		Self {
			capacity: DEFAULT_CAPACITY,
			default_value: DEFAULT_VALUE,
			load_factor: DEFAULT_LOAD_FACTOR,
			growth_factor: DEFAULT_GROWTH_FACTOR,
		}
	}
}

impl HashTableConfig {
	/// Checks the configuration invariants.
	///
	/// # Errors
	/// Returns `TableError::InvalidConfig` describing the first violated invariant.
	pub fn validate(&self) -> Result<(), TableError> {
		if self.capacity == 0 {
			return Err(TableError::InvalidConfig("capacity must be >= 1".to_owned()));
		}
		if !self.load_factor.is_finite() || self.load_factor <= 0.0 {
			return Err(TableError::InvalidConfig(format!(
				"load factor must be > 0, got {}",
				self.load_factor
			)));
		}
		if !self.growth_factor.is_finite() || self.growth_factor <= 1.0 {
			return Err(TableError::InvalidConfig(format!(
				"growth factor must be > 1, got {}",
				self.growth_factor
			)));
		}
		Ok(())
	}

	/// Returns the capacity following `capacity` after one growth step.
	///
	/// Always strictly greater than `capacity` so repeated growth terminates.
	pub(crate) fn grow(&self, capacity: usize) -> usize {
		let grown = (capacity as f64 * self.growth_factor).ceil() as usize;
		grown.max(capacity + 1)
	}
}
