use crate::bipartition::Bipartition;
use crate::error::{InvalidInput, Result};
use crate::graph::{Graph, VertexId};
use crate::matching::hopcroft_karp;
use std::collections::BTreeMap;
use std::ops::Deref;

/// A Matching maps each matched vertex to its partner.
/// Both directions of every matched pair are present, unmatched vertices are absent.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matching {
  pairs: BTreeMap<VertexId, VertexId>,
}

impl Matching {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns the matching described by `mates`, a dense-index mate table of `graph`
  pub fn from_mates<G: Graph>(graph: &G, mates: &[Option<usize>]) -> Self {
    let pairs = mates
      .iter()
      .enumerate()
      .filter_map(|(u, m)| m.map(|v| (graph.vertex_id(u), graph.vertex_id(v))))
      .collect();
    Self { pairs }
  }

  /// Returns the matching made of `pairs`, each inserted in both directions
  #[cfg(test)]
  pub(crate) fn from_pairs(pairs: &[(VertexId, VertexId)]) -> Self {
    let mut m = Self::new();
    for (u, v) in pairs {
      m.pairs.insert(*u, *v);
      m.pairs.insert(*v, *u);
    }
    m
  }

  /// Returns the dense-index mate table of `graph` for this matching
  pub fn to_mates<G: Graph>(&self, graph: &G) -> Result<Vec<Option<usize>>> {
    let mut mates = vec![None; graph.vertex_count()];
    for (u, v) in &self.pairs {
      let ui = graph
        .vertex_index(*u)
        .ok_or(InvalidInput::UnknownVertex(*u))?;
      let vi = graph
        .vertex_index(*v)
        .ok_or(InvalidInput::UnknownVertex(*v))?;
      mates[ui] = Some(vi);
    }
    Ok(mates)
  }

  /// Returns the number of matched edges
  pub fn size(&self) -> usize {
    self.pairs.len() / 2
  }

  pub fn partner(&self, id: VertexId) -> Option<VertexId> {
    self.pairs.get(&id).copied()
  }

  pub fn is_matched(&self, id: VertexId) -> bool {
    self.pairs.contains_key(&id)
  }

  /// Returns each matched edge once, as `(u, v)` with `u < v`
  pub fn edges<'a>(&'a self) -> impl Iterator<Item = (VertexId, VertexId)> + 'a {
    self
      .pairs
      .iter()
      .filter(|(u, v)| u < v)
      .map(|(u, v)| (*u, *v))
  }

  /// Returns true if the matching is symmetric and every pair is an edge of `graph`
  pub fn is_valid<G: Graph>(&self, graph: &G) -> bool {
    self.pairs.iter().all(|(u, v)| {
      if u == v || self.partner(*v) != Some(*u) {
        return false;
      }
      match (graph.vertex_index(*u), graph.vertex_index(*v)) {
        (Some(ui), Some(vi)) => graph.neighbors(ui).contains(&vi),
        _ => false,
      }
    })
  }

  /// Returns true if the matching is valid and no augmenting path exists,
  /// which makes it a maximum matching. Always false when `partition` was
  /// built for another graph.
  pub fn is_maximum<G: Graph>(&self, graph: &G, partition: &Bipartition) -> bool {
    if !self.is_valid(graph) || partition.check_fits(graph).is_err() {
      return false;
    }
    match self.to_mates(graph) {
      Ok(mates) => !hopcroft_karp::has_augmenting_path(graph, partition, mates),
      Err(_) => false,
    }
  }
}

impl Deref for Matching {
  type Target = BTreeMap<VertexId, VertexId>;

  fn deref(&self) -> &Self::Target {
    &self.pairs
  }
}
