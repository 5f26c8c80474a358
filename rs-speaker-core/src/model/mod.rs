//! Top-level module for the Markov speaker identification system.
//!
//! This module provides:
//! - Circular character windows (`window`)
//! - Fixed-order character Markov models (`MarkovModel`)
//! - Speaker identification over two reference models (`identify_speaker`)

/// Circularly wrapped fixed-length windows over a text.
///
/// Shared by training and scoring so both read the exact same n-grams.
pub mod window;

/// Fixed-order (`k >= 0`) character Markov model.
///
/// Handles training over a text, frequency lookups and
/// Laplace-smoothed log-probability queries.
pub mod markov;

/// Comparison of two speakers' models against an unidentified text.
pub mod speaker;
