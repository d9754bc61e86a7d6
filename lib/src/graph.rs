//! # Graph interface and an adjacency list implementation
//!
//! Matching code addresses vertices by a dense index in `0..vertex_count()`
//! and only translates to the caller's `VertexId` when building results.
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;

/// Opaque vertex identifier chosen by the caller
pub type VertexId = u64;

/// The read-only view of an undirected graph needed by the matching algorithms
pub trait Graph {
  /// Returns the number of vertices
  fn vertex_count(&self) -> usize;

  /// Returns the number of distinct undirected edges
  fn edge_count(&self) -> usize;

  /// Returns the dense indices adjacent to the vertex at `index`
  fn neighbors(&self, index: usize) -> &[usize];

  /// Returns the caller's identifier for the vertex at `index`
  fn vertex_id(&self, index: usize) -> VertexId;

  /// Returns the dense index of `id`, if `id` is part of the graph
  fn vertex_index(&self, id: VertexId) -> Option<usize>;

  /// Returns the range of dense vertex indices
  fn vertices(&self) -> Range<usize> {
    0..self.vertex_count()
  }
}

/// AdjacencyGraph is an undirected graph stored as one neighbor list per vertex
#[derive(Debug, Default, Clone)]
pub struct AdjacencyGraph {
  ids: Vec<VertexId>,
  index: BTreeMap<VertexId, usize>,
  adjacency: Vec<Vec<usize>>,
  edge_count: usize,
}

#[derive(Debug, Default, Clone)]
pub struct GraphBuilder {
  pub vertices: BTreeSet<VertexId>,
  pub edges: BTreeSet<(VertexId, VertexId)>,
}

impl GraphBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds a vertex, which may stay isolated
  pub fn vertex(mut self, id: VertexId) -> Self {
    self.vertices.insert(id);
    Self {
      vertices: self.vertices,
      edges: self.edges,
    }
  }

  /// Adds the undirected edge `{u, v}`, and both endpoints
  pub fn edge(mut self, u: VertexId, v: VertexId) -> Self {
    self.vertices.insert(u);
    self.vertices.insert(v);
    // (u, v) and (v, u) are the same edge
    self.edges.insert((std::cmp::min(u, v), std::cmp::max(u, v)));
    Self {
      vertices: self.vertices,
      edges: self.edges,
    }
  }

  pub fn build(self) -> AdjacencyGraph {
    let ids: Vec<VertexId> = self.vertices.into_iter().collect();
    let index: BTreeMap<VertexId, usize> = ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();
    let mut adjacency = vec![Vec::new(); ids.len()];
    for (u, v) in &self.edges {
      let ui = index[u];
      let vi = index[v];
      adjacency[ui].push(vi);
      if ui != vi {
        adjacency[vi].push(ui);
      }
    }
    AdjacencyGraph {
      ids,
      index,
      adjacency,
      edge_count: self.edges.len(),
    }
  }
}

impl AdjacencyGraph {
  /// Returns a graph containing exactly the endpoints of `edges`
  pub fn from_edges(edges: &[(VertexId, VertexId)]) -> Self {
    edges
      .iter()
      .fold(GraphBuilder::new(), |builder, (u, v)| builder.edge(*u, *v))
      .build()
  }

  /// Returns true if `{u, v}` is an edge
  pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
    match (self.vertex_index(u), self.vertex_index(v)) {
      (Some(ui), Some(vi)) => self.adjacency[ui].contains(&vi),
      _ => false,
    }
  }

  pub fn is_empty(&self) -> bool {
    self.ids.is_empty()
  }
}

impl Graph for AdjacencyGraph {
  fn vertex_count(&self) -> usize {
    self.ids.len()
  }

  fn edge_count(&self) -> usize {
    self.edge_count
  }

  fn neighbors(&self, index: usize) -> &[usize] {
    &self.adjacency[index]
  }

  fn vertex_id(&self, index: usize) -> VertexId {
    self.ids[index]
  }

  fn vertex_index(&self, id: VertexId) -> Option<usize> {
    self.index.get(&id).copied()
  }
}

/// Builds an `AdjacencyGraph` from a list of `(u, v)` edges
#[macro_export]
macro_rules! graph {
  ($(($u:expr, $v:expr)),* $(,)?) => {
    $crate::graph::GraphBuilder::new()$(.edge($u, $v))*.build()
  };
}
