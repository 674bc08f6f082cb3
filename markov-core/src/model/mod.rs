//! Word-level Markov chain model.
//!
//! This module provides:
//! - The fixed-length sliding window (`Prefix`)
//! - The prefix-to-suffixes table (`StateTable`) and its builder (`ChainBuilder`)
//! - Single-pass uniform sampling (`sampler`)
//! - The generation state machine (`Generator`)
//! - Run parameters (`GenerationConfig`)

/// Builds a `StateTable` from a stream of words.
///
/// Owns the table and the live prefix during construction, then hands the
/// finished table over with the closing sentinel recorded.
pub mod chain_builder;

/// Generation run parameters (word budget, random seed).
pub mod config;

/// Iterator-based generation over a finished table.
///
/// Tracks the current prefix, the remaining budget and the terminal state
/// that ended the run.
pub mod generator;

/// Fixed-length word window used as table key and sliding context.
pub mod prefix;

/// Reservoir sampling of size one.
pub mod sampler;

/// Mapping from prefixes to the words observed after them.
pub mod state_table;
