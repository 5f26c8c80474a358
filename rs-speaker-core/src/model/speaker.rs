use std::fmt;

use log::debug;
use serde::Serialize;

use super::markov::MarkovModel;
use crate::error::ModelError;
use crate::table::config::HashTableConfig;
use crate::table::store::Backend;

/// Reference speaker judged the most likely author of a text.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
	A,
	B,
}

impl fmt::Display for Speaker {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Speaker::A => f.write_str("A"),
			Speaker::B => f.write_str("B"),
		}
	}
}

/// Outcome of `identify_speaker`.
///
/// Both probabilities are normalized by the character count of the query.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct SpeakerReport {
	/// Normalized log-probability of the query under speaker A's model.
	pub speaker_a: f64,
	/// Normalized log-probability of the query under speaker B's model.
	pub speaker_b: f64,
	/// Most likely speaker, B on ties.
	pub conclusion: Speaker,
}

/// Decides which speaker more likely uttered `query`.
///
/// Trains one order `k` model per reference text on `backend` (default table
/// configuration), scores `query` under both and normalizes each score by the
/// number of characters of `query`. Speaker A wins only if its normalized
/// score is strictly greater; ties go to B.
///
/// # Errors
/// - `ModelError::EmptyQuery` if `query` is empty
/// - `ModelError::UntrainedModel` if a reference text is empty
pub fn identify_speaker(
	speech_a: &str,
	speech_b: &str,
	query: &str,
	k: usize,
	backend: Backend,
) -> Result<SpeakerReport, ModelError> {
	identify_speaker_with_config(speech_a, speech_b, query, k, backend, HashTableConfig::default())
}

/// `identify_speaker` with an explicit table configuration.
///
/// # Errors
/// Same as `identify_speaker`, plus `ModelError::Table` if `config` is rejected
/// (including a non-zero default value).
pub fn identify_speaker_with_config(
	speech_a: &str,
	speech_b: &str,
	query: &str,
	k: usize,
	backend: Backend,
	config: HashTableConfig,
) -> Result<SpeakerReport, ModelError> {
	let length = query.chars().count();
	if length == 0 {
		return Err(ModelError::EmptyQuery);
	}

	let model_a = MarkovModel::with_config(k, speech_a, backend, config)?;
	let model_b = MarkovModel::with_config(k, speech_b, backend, config)?;

	let speaker_a = model_a.log_probability(query)? / length as f64;
	let speaker_b = model_b.log_probability(query)? / length as f64;

	let conclusion = if speaker_a > speaker_b { Speaker::A } else { Speaker::B };
	debug!("order {} on {}: A = {}, B = {} → {}", k, backend, speaker_a, speaker_b, conclusion);

	Ok(SpeakerReport { speaker_a, speaker_b, conclusion })
}
