//! Character-level Markov speaker identification library.
//!
//! This crate provides:
//! - A from-scratch chaining hash table with dynamic resizing
//! - A default-valued count store abstraction with two interchangeable backends
//! - Fixed-order character Markov models with Laplace smoothing
//! - Speaker identification comparing two reference texts against a third one
//!
//! File handling is limited to the small helpers in `io`; everything else
//! runs purely in memory on the calling thread.

/// Chaining hash table, bucket lists, configuration and count stores.
pub mod table;

/// Markov models, circular window extraction and speaker identification.
pub mod model;

/// Error types shared by the table and the model layers.
pub mod error;

/// I/O utilities (text loading, path helpers).
pub mod io;

pub use error::{ModelError, TableError};
pub use model::markov::MarkovModel;
pub use model::speaker::{identify_speaker, identify_speaker_with_config, Speaker, SpeakerReport};
pub use table::config::HashTableConfig;
pub use table::hashtable::HashTable;
pub use table::store::{Backend, CountStore, DefaultMap};
