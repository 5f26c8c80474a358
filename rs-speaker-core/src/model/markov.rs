use std::collections::HashSet;

use log::{debug, trace};

use super::window::{split_prefix, windows};
use crate::error::{ModelError, TableError};
use crate::table::config::HashTableConfig;
use crate::table::store::{Backend, CountStore};

/// Fixed-order character Markov model.
///
/// The model counts, for every offset of its training text, the circular
/// window of `k + 1` characters and its `k` character prefix. Both counts
/// live in the same `CountStore`.
///
/// # Responsibilities
/// - Train once on a text at construction
/// - Score arbitrary strings with Laplace (add-one) smoothing
///
/// # Invariants
/// - The count store is never mutated after construction
/// - The count of a prefix equals the sum of the counts of the windows extending it
/// - `unique_chars` holds every character of the training text
#[derive(Debug)]
pub struct MarkovModel {
	/// Order of the model (length of the conditioning prefix).
	k: usize,
	/// Training text.
	text: String,
	/// Frequencies of the `k` and `k + 1` character sequences.
	table: Box<dyn CountStore>,
	/// Alphabet of the training text.
	unique_chars: HashSet<char>,
}

impl MarkovModel {
	/// Trains a model of order `k` on `text`, using `backend` with the
	/// default table configuration.
	pub fn new(k: usize, text: &str, backend: Backend) -> Result<Self, ModelError> {
		Self::with_config(k, text, backend, HashTableConfig::default())
	}

	/// Trains a model of order `k` on `text`, using `backend` built from `config`.
	///
	/// Frequencies of unseen sequences must read as zero, so `config.default_value`
	/// has to be `0`.
	///
	/// # Errors
	/// Returns `ModelError::Table` if `config` is rejected by the backend or
	/// carries a non-zero default value.
	pub fn with_config(k: usize, text: &str, backend: Backend, config: HashTableConfig) -> Result<Self, ModelError> {
		if config.default_value != 0 {
			return Err(TableError::InvalidConfig(format!(
				"frequency tables need a default value of 0, got {}",
				config.default_value
			))
			.into());
		}
		let store = backend.make_store(config)?;
		Self::with_store(k, text, store)
	}

	/// Trains a model of order `k` on `text` into the given store.
	///
	/// # Errors
	/// Returns `ModelError::Table` if the store already holds counts or does
	/// not report `0` for absent keys.
	pub fn with_store(k: usize, text: &str, table: Box<dyn CountStore>) -> Result<Self, ModelError> {
		if table.size() != 0 {
			return Err(TableError::InvalidConfig(format!(
				"frequency store must start empty, holds {} keys",
				table.size()
			))
			.into());
		}
		if table.get("") != 0 {
			return Err(TableError::InvalidConfig("frequency store must default to 0".to_owned()).into());
		}

		let mut model = Self {
			k,
			text: text.to_owned(),
			table,
			unique_chars: HashSet::new(),
		};
		model.train();
		Ok(model)
	}

	fn train(&mut self) {
		let chars: Vec<char> = self.text.chars().collect();

		for window in windows(&chars, self.k) {
			let (prefix, full) = split_prefix(&window, self.k);
			self.table.increment(prefix);
			self.table.increment(full);
		}
		self.unique_chars.extend(chars.iter().copied());

		debug!(
			"trained order {} model on {} characters: {} unique characters, {} stored sequences",
			self.k,
			chars.len(),
			self.unique_chars.len(),
			self.table.size()
		);
	}

	/// Order of the model (length of the conditioning prefix).
	pub fn order(&self) -> usize {
		self.k
	}

	/// Training text.
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Number of distinct characters in the training text.
	pub fn unique_chars(&self) -> usize {
		self.unique_chars.len()
	}

	/// Stored frequency of `sequence` (0 if never observed).
	pub fn frequency(&self, sequence: &str) -> i64 {
		self.table.get(sequence)
	}

	/// Returns the log-probability of `query` under this model.
	///
	/// For every offset of `query`, the circular `k + 1` window `w` and its
	/// prefix `p` contribute `ln((freq(w) + 1) / (freq(p) + U))` where `U`
	/// is the number of unique training characters. The sum is **not**
	/// normalized by the length of `query`; an empty query scores `0.0`.
	///
	/// # Errors
	/// Returns `ModelError::UntrainedModel` if the model was trained on an
	/// empty text (no alphabet to smooth over).
	pub fn log_probability(&self, query: &str) -> Result<f64, ModelError> {
		let alphabet = self.unique_chars.len();
		if alphabet == 0 {
			return Err(ModelError::UntrainedModel);
		}

		let chars: Vec<char> = query.chars().collect();
		let mut likelihood = 0.0;
		for window in windows(&chars, self.k) {
			let (prefix, full) = split_prefix(&window, self.k);
			let freq_k = self.table.get(prefix);
			let freq_k1 = self.table.get(full);
			likelihood += ((freq_k1 + 1) as f64 / (freq_k + alphabet as i64) as f64).ln();
		}

		trace!("order {} log-probability over {} characters: {}", self.k, chars.len(), likelihood);
		Ok(likelihood)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::table::store::DefaultMap;

	const BACKENDS: [Backend; 2] = [Backend::HashTable, Backend::Dict];

	#[test]
	fn test_training_counts() {
		for backend in BACKENDS {
			let model = MarkovModel::new(2, "abc", backend).unwrap();
			// windows: "abc", "bca", "cab"
			assert_eq!(model.frequency("abc"), 1);
			assert_eq!(model.frequency("bca"), 1);
			assert_eq!(model.frequency("cab"), 1);
			assert_eq!(model.frequency("ab"), 1);
			assert_eq!(model.frequency("ca"), 1);
			assert_eq!(model.frequency("ac"), 0);
			assert_eq!(model.unique_chars(), 3);
			assert_eq!(model.order(), 2);
			assert_eq!(model.text(), "abc");
		}
	}

	#[test]
	fn test_prefix_count_is_sum_of_extensions() {
		let model = MarkovModel::new(1, "abracadabra", Backend::HashTable).unwrap();
		let a_total: i64 = ['a', 'b', 'c', 'd', 'r']
			.iter()
			.map(|c| model.frequency(&format!("a{c}")))
			.sum();
		assert_eq!(model.frequency("a"), 5);
		assert_eq!(a_total, 5);
	}

	#[test]
	fn test_order_zero() {
		let model = MarkovModel::new(0, "aab", Backend::Dict).unwrap();
		assert_eq!(model.frequency(""), 3);
		assert_eq!(model.frequency("a"), 2);

		// ln(3/5) + ln(3/5)
		let lp = model.log_probability("aa").unwrap();
		assert!((lp - 2.0 * (3.0f64 / 5.0).ln()).abs() < 1e-12);
	}

	#[test]
	fn test_log_probability_formula() {
		let model = MarkovModel::new(1, "abab", Backend::HashTable).unwrap();
		// "ab": freq("ab") = 2, freq("a") = 2, U = 2 → ln(3/4)
		// "ba": freq("ba") = 2, freq("b") = 2 → ln(3/4)
		let lp = model.log_probability("ab").unwrap();
		assert!((lp - 2.0 * (0.75f64).ln()).abs() < 1e-12);

		// "zz": unseen → ln(1/2)
		let lp = model.log_probability("z").unwrap();
		assert!((lp - (0.5f64).ln()).abs() < 1e-12);
	}

	#[test]
	fn test_empty_query_scores_zero() {
		let model = MarkovModel::new(1, "abab", Backend::HashTable).unwrap();
		assert_eq!(model.log_probability(""), Ok(0.0));
	}

	#[test]
	fn test_untrained_model() {
		let model = MarkovModel::new(2, "", Backend::HashTable).unwrap();
		assert_eq!(model.unique_chars(), 0);
		assert_eq!(model.frequency(""), 0);
		assert_eq!(model.log_probability("abc"), Err(ModelError::UntrainedModel));
	}

	#[test]
	fn test_non_zero_default_value_is_rejected() {
		for default_value in [-5, -1, 3] {
			let config = HashTableConfig { default_value, ..Default::default() };
			for backend in BACKENDS {
				assert!(matches!(
					MarkovModel::with_config(1, "abc", backend, config),
					Err(ModelError::Table(TableError::InvalidConfig(_)))
				));
			}
		}
	}

	#[test]
	fn test_with_store_requires_empty_store() {
		let mut store = DefaultMap::new(0);
		store.set("ab", 4);
		assert!(matches!(
			MarkovModel::with_store(1, "abc", Box::new(store)),
			Err(ModelError::Table(TableError::InvalidConfig(_)))
		));

		assert!(matches!(
			MarkovModel::with_store(1, "abc", Box::new(DefaultMap::new(2))),
			Err(ModelError::Table(TableError::InvalidConfig(_)))
		));

		let model = MarkovModel::with_store(1, "abc", Box::new(DefaultMap::new(0))).unwrap();
		assert_eq!(model.frequency("ab"), 1);
		assert_eq!(model.frequency("a"), 1);
	}

	#[test]
	fn test_invalid_config() {
		let config = HashTableConfig { load_factor: -1.0, ..Default::default() };
		assert!(matches!(
			MarkovModel::with_config(1, "abc", Backend::HashTable, config),
			Err(ModelError::Table(_))
		));
	}
}
