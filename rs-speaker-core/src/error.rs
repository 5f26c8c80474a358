use thiserror::Error;

/// Errors raised by the count stores.
///
/// Lookups never fail: a missing key yields the configured default value.
/// Only deletion, iteration and configuration can go wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
	/// Deleting a key that is not stored.
	#[error("key not found: {0:?}")]
	KeyNotFound(String),

	/// Permanently unsupported capability (ex. iteration over the hash table).
	#[error("{0} not implemented")]
	Unsupported(&'static str),

	/// Rejected `HashTableConfig`.
	#[error("invalid hash table configuration: {0}")]
	InvalidConfig(String),
}

/// Errors raised while training or querying a Markov model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
	/// The model was trained on an empty text and has no alphabet to smooth over.
	#[error("model was trained on an empty text")]
	UntrainedModel,

	/// The query text is empty, its log-probability cannot be normalized.
	#[error("query text is empty")]
	EmptyQuery,

	#[error(transparent)]
	Table(#[from] TableError),
}
