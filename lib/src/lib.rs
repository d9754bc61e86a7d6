//! # Maximum Cardinality Bipartite Matching
//!
//! bimatch computes a maximum cardinality matching of a bipartite graph with
//! the Hopcroft-Karp algorithm in O(E * sqrt(V)). The result is a map from
//! every matched vertex to its partner, in both directions.
//!
//! ```
//! use bimatch::{graph, hopcroft_karp_matching};
//!
//! let g = graph![(1, 2), (2, 3), (3, 4)];
//! let matching = hopcroft_karp_matching(&g).unwrap();
//! assert_eq!(matching.size(), 2);
//! assert_eq!(matching.partner(4), Some(3));
//! ```

#[macro_use]
extern crate serde_derive;
extern crate serde;
#[macro_use]
extern crate log;
#[cfg(test)]
#[macro_use]
extern crate lazy_static;

#[macro_use]
pub mod graph;
pub mod bipartition;
pub mod error;
pub mod matching;
pub mod solver;

pub use crate::bipartition::{Bipartition, Side};
pub use crate::error::{Error, InvalidInput, Result};
pub use crate::graph::{AdjacencyGraph, Graph, GraphBuilder, VertexId};
pub use crate::matching::{minimum_vertex_cover, HopcroftKarp, Matching, MatchingAlgorithm};
pub use crate::solver::{hopcroft_karp_matching, maximum_matching, Algorithm, MatchingConfig};
