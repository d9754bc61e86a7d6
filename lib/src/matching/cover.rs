//! # Minimum vertex cover
//!
//! By König's theorem, a maximum matching of a bipartite graph yields a
//! vertex cover of the same size.
use crate::bipartition::Bipartition;
use crate::error::Result;
use crate::graph::{Graph, VertexId};
use crate::matching::Matching;
use std::collections::{BTreeSet, VecDeque};

/// Returns a minimum vertex cover of `graph`, given a maximum `matching`.
///
/// Let Z be the vertices reachable from free left vertices by alternating
/// paths. The cover is the left vertices outside Z plus the right vertices in Z.
/// With a matching that is not maximum the result is still a set of vertices,
/// but not necessarily a cover.
///
/// Fails with `PartitionMismatch` if `partition` was built for another graph,
/// and with `UnknownVertex` if `matching` names a vertex outside `graph`.
pub fn minimum_vertex_cover<G: Graph>(
  graph: &G,
  partition: &Bipartition,
  matching: &Matching,
) -> Result<BTreeSet<VertexId>> {
  partition.check_fits(graph)?;
  let mates = matching.to_mates(graph)?;
  let mut reached = vec![false; graph.vertex_count()];
  let mut queue: VecDeque<usize> = partition.left().filter(|u| mates[*u].is_none()).collect();
  for u in &queue {
    reached[*u] = true;
  }
  while let Some(u) = queue.pop_front() {
    for &v in graph.neighbors(u) {
      // left to right over non-matching edges only
      if mates[u] == Some(v) || reached[v] {
        continue;
      }
      reached[v] = true;
      if let Some(w) = mates[v] {
        if !reached[w] {
          reached[w] = true;
          queue.push_back(w);
        }
      }
    }
  }
  let cover = graph
    .vertices()
    .filter(|&u| partition.is_left(u) != reached[u])
    .map(|u| graph.vertex_id(u))
    .collect();
  Ok(cover)
}
