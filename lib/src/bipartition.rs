//! # Bipartitions
//!
//! A `Bipartition` assigns each vertex of a graph to one of two sides such
//! that every edge joins the two sides. Matching searches are rooted at the
//! `Left` side.
use crate::error::{InvalidInput, Result};
use crate::graph::{Graph, VertexId};
use std::collections::{HashSet, VecDeque};

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Side {
  Left,
  Right,
}

impl Side {
  pub fn opposite(self) -> Self {
    match self {
      Self::Left => Self::Right,
      Self::Right => Self::Left,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bipartition {
  sides: Vec<Side>,
}

impl Bipartition {
  /// Returns a 2-coloring of `graph`, or `None` if the graph is not bipartite.
  /// In each connected component, the vertex with the lowest index is `Left`.
  pub fn compute<G: Graph>(graph: &G) -> Option<Self> {
    let mut sides: Vec<Option<Side>> = vec![None; graph.vertex_count()];
    let mut queue = VecDeque::new();
    for root in graph.vertices() {
      if sides[root].is_some() {
        continue;
      }
      sides[root] = Some(Side::Left);
      queue.push_back(root);
      while let Some(u) = queue.pop_front() {
        let side = sides[u]?;
        for &v in graph.neighbors(u) {
          match sides[v] {
            None => {
              sides[v] = Some(side.opposite());
              queue.push_back(v);
            }
            Some(other) if other == side => {
              trace!(
                "odd cycle through edge ({}, {})",
                graph.vertex_id(u),
                graph.vertex_id(v)
              );
              return None;
            }
            Some(_) => {}
          }
        }
      }
    }
    Some(Self {
      sides: sides.into_iter().flatten().collect(),
    })
  }

  /// Returns the bipartition with `left` on the `Left` side and every other
  /// vertex on the `Right` side, after checking that no edge stays within a side
  pub fn from_left<G, I>(graph: &G, left: I) -> Result<Self>
  where
    G: Graph,
    I: IntoIterator<Item = VertexId>,
  {
    let mut sides = vec![Side::Right; graph.vertex_count()];
    for id in left {
      let index = graph
        .vertex_index(id)
        .ok_or(InvalidInput::UnknownVertex(id))?;
      sides[index] = Side::Left;
    }
    for u in graph.vertices() {
      for &v in graph.neighbors(u) {
        if sides[u] == sides[v] {
          let (a, b) = (graph.vertex_id(u), graph.vertex_id(v));
          trace!("edge ({}, {}) does not cross the supplied partition", a, b);
          return Err(InvalidInput::SameSideEdge(a, b).into());
        }
      }
    }
    Ok(Self { sides })
  }

  /// Checks that the partition has one side per vertex of `graph`
  pub fn check_fits<G: Graph>(&self, graph: &G) -> Result<()> {
    if self.sides.len() != graph.vertex_count() {
      return Err(
        InvalidInput::PartitionMismatch {
          expected: graph.vertex_count(),
          got: self.sides.len(),
        }
        .into(),
      );
    }
    Ok(())
  }

  pub fn side(&self, index: usize) -> Side {
    self.sides[index]
  }

  pub fn is_left(&self, index: usize) -> bool {
    self.sides[index] == Side::Left
  }

  /// Returns the indices of the `Left` vertices in ascending order
  pub fn left<'a>(&'a self) -> impl Iterator<Item = usize> + 'a {
    self.indices_on(Side::Left)
  }

  /// Returns the indices of the `Right` vertices in ascending order
  pub fn right<'a>(&'a self) -> impl Iterator<Item = usize> + 'a {
    self.indices_on(Side::Right)
  }

  pub fn left_count(&self) -> usize {
    self.left().count()
  }

  pub fn right_count(&self) -> usize {
    self.right().count()
  }

  /// No matching can have more edges than this
  pub fn smaller_side_count(&self) -> usize {
    std::cmp::min(self.left_count(), self.right_count())
  }

  pub fn len(&self) -> usize {
    self.sides.len()
  }

  pub fn is_empty(&self) -> bool {
    self.sides.is_empty()
  }

  /// Returns the ids of the `Left` vertices
  pub fn left_ids<G: Graph>(&self, graph: &G) -> HashSet<VertexId> {
    self.left().map(|i| graph.vertex_id(i)).collect()
  }

  fn indices_on<'a>(&'a self, side: Side) -> impl Iterator<Item = usize> + 'a {
    self
      .sides
      .iter()
      .enumerate()
      .filter(move |(_, s)| **s == side)
      .map(|(i, _)| i)
  }
}
