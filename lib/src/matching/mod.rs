//! # Matching algorithms
//!
//! The `matching` module defines a `MatchingAlgorithm` trait, its
//! Hopcroft-Karp implementation, the `Matching` result and the
//! minimum vertex cover derived from a maximum matching.

mod algorithm;
mod cover;
mod hopcroft_karp;
#[cfg(test)]
mod kuhn;
mod matching;

pub use algorithm::MatchingAlgorithm;
pub use cover::minimum_vertex_cover;
pub use hopcroft_karp::HopcroftKarp;
pub use matching::Matching;
