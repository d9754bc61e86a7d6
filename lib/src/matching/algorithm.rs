use crate::bipartition::Bipartition;
use crate::graph::Graph;

/// The base trait for any bipartite matching algorithm
pub trait MatchingAlgorithm {
  /// Returns the mate of every vertex, indexed by dense vertex index.
  /// The result is symmetric: `mates[u] == Some(v)` iff `mates[v] == Some(u)`.
  ///
  /// # Arguments
  ///
  /// * `graph` - The graph to match, never modified
  /// * `partition` - A valid bipartition of `graph`. Searches are rooted at its `Left` side
  ///
  /// # Panics
  ///
  /// If `partition` was built for another graph, i.e.
  /// `partition.len() != graph.vertex_count()`. Use `Bipartition::check_fits`
  /// when the pairing is not known to hold.
  fn solve<G: Graph>(&self, graph: &G, partition: &Bipartition) -> Vec<Option<usize>>;
}
