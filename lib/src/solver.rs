//! # Maximum matching entry points and configuration
use crate::bipartition::Bipartition;
use crate::error::{InvalidInput, Result};
use crate::graph::{Graph, VertexId};
use crate::matching::{HopcroftKarp, Matching, MatchingAlgorithm};

/// The available maximum matching algorithms, all of which require a bipartite graph
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
  HopcroftKarp,
}

impl Default for Algorithm {
  fn default() -> Self {
    Self::HopcroftKarp
  }
}

/// Options for `maximum_matching`
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchingConfig {
  /// The algorithm to run
  #[serde(default)]
  pub algorithm: Algorithm,
  /// The vertices of one side of the graph. When absent, the sides are
  /// computed by 2-coloring, which picks the side of each connected
  /// component on its own.
  #[serde(default)]
  pub top: Option<Vec<VertexId>>,
}

impl MatchingConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_top<I: IntoIterator<Item = VertexId>>(top: I) -> Self {
    Self {
      top: Some(top.into_iter().collect()),
      ..Self::default()
    }
  }
}

/// Returns a maximum cardinality matching of `graph`
///
/// # Errors
///
/// Fails with `InvalidInput` if `graph` is not bipartite, or if `config.top`
/// names an unknown vertex or does not split the graph into two sides.
pub fn maximum_matching<G: Graph>(graph: &G, config: &MatchingConfig) -> Result<Matching> {
  let partition = match &config.top {
    Some(top) => Bipartition::from_left(graph, top.iter().copied())?,
    // Every algorithm here is only defined for bipartite graphs
    None => match Bipartition::compute(graph) {
      Some(partition) => partition,
      None => {
        debug!("{:?} needs a bipartite graph", config.algorithm);
        return Err(InvalidInput::NotBipartite.into());
      }
    },
  };
  debug!(
    "matching {} vertices, {} edges ({} left, {} right) with {:?}",
    graph.vertex_count(),
    graph.edge_count(),
    partition.left_count(),
    partition.right_count(),
    config.algorithm
  );
  let mates = match config.algorithm {
    Algorithm::HopcroftKarp => HopcroftKarp::new().solve(graph, &partition),
  };
  Ok(Matching::from_mates(graph, &mates))
}

/// Returns a maximum cardinality matching of `graph` using Hopcroft-Karp
pub fn hopcroft_karp_matching<G: Graph>(graph: &G) -> Result<Matching> {
  maximum_matching(graph, &MatchingConfig::default())
}

#[cfg(test)]
mod tests {
  use crate::bipartition::Bipartition;
  use crate::error::*;
  use crate::graph::*;
  use crate::matching::*;
  use crate::solver::*;
  use rand::prelude::*;
  use rand::rngs::SmallRng;

  lazy_static! {
    /// Random graphs on ids 0..40 with edges only between even and odd ids
    static ref RANDOM_GRAPHS: Vec<AdjacencyGraph> = {
      let mut rng = SmallRng::seed_from_u64(2024);
      (0..30)
        .map(|_| {
          let n = rng.gen_range(2, 40);
          let m = rng.gen_range(0, 3 * n);
          let mut builder = GraphBuilder::new();
          for _ in 0..m {
            let u = rng.gen_range(0, n) & !1;
            let v = rng.gen_range(0, n) | 1;
            builder = builder.edge(u, v);
          }
          builder.build()
        })
        .collect()
    };
  }

  fn check(g: &AdjacencyGraph) -> Matching {
    let _ = env_logger::try_init();
    hopcroft_karp_matching(g).expect("bipartite")
  }

  #[test]
  fn empty_graph_has_empty_matching() {
    assert!(check(&graph![]).is_empty());
    let isolated = GraphBuilder::new().vertex(1).vertex(2).vertex(3).build();
    assert!(check(&isolated).is_empty());
  }

  #[test]
  fn triangle_is_invalid_input() {
    let g = graph![(1, 2), (2, 3), (3, 1)];
    let err = hopcroft_karp_matching(&g).unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(err, Error::InvalidInput(InvalidInput::NotBipartite));
  }

  #[test]
  fn path_of_six() {
    let g = graph![(1, 2), (2, 3), (3, 4), (4, 5), (5, 6)];
    let m = check(&g);
    assert_eq!(m.size(), 3);
    assert_eq!(m.len(), 6);
    assert_eq!(m.partner(1), Some(2));
    assert_eq!(m.partner(2), Some(1));
    assert_eq!(m.partner(3), Some(4));
    assert_eq!(m.partner(4), Some(3));
    assert_eq!(m.partner(5), Some(6));
    assert_eq!(m.partner(6), Some(5));
  }

  #[test]
  fn star_pairs_center_with_one_leaf() {
    let g = graph![(1, 2), (1, 3), (1, 4)];
    let m = check(&g);
    assert_eq!(m.size(), 1);
    let leaf = m.partner(1).expect("center is matched");
    assert!([2, 3, 4].contains(&leaf));
    assert_eq!(m.partner(leaf), Some(1));
  }

  #[test]
  fn top_vertices_choose_the_roots() {
    // Disconnected: 2-coloring would put 1 and 3 on the left
    let g = graph![(1, 2), (3, 4), (3, 5)];
    let config = MatchingConfig::with_top(vec![2, 4, 5]);
    let m = maximum_matching(&g, &config).unwrap();
    assert_eq!(m.size(), 2);
    assert_eq!(m.partner(2), Some(1));
    assert_eq!(m.partner(4), Some(3));
    assert!(!m.is_matched(5));
  }

  #[test]
  fn bad_top_vertices_are_invalid_input() {
    let g = graph![(1, 2), (2, 3)];
    assert_eq!(
      maximum_matching(&g, &MatchingConfig::with_top(vec![1])),
      Err(Error::InvalidInput(InvalidInput::SameSideEdge(2, 3)))
    );
    assert_eq!(
      maximum_matching(&g, &MatchingConfig::with_top(vec![9])),
      Err(Error::InvalidInput(InvalidInput::UnknownVertex(9)))
    );
  }

  #[test]
  fn config_deserializes_with_defaults() {
    let config: MatchingConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, MatchingConfig::new());
    assert_eq!(config.algorithm, Algorithm::HopcroftKarp);
    let config: MatchingConfig =
      serde_json::from_str(r#"{"algorithm": "hopcroft_karp", "top": [1, 3]}"#).unwrap();
    assert_eq!(config, MatchingConfig::with_top(vec![1, 3]));
    assert!(serde_json::from_str::<MatchingConfig>(r#"{"algorithm": "blossom"}"#).is_err());
  }

  #[test]
  fn random_matchings_hold_their_properties() {
    for g in RANDOM_GRAPHS.iter() {
      let m = check(g);
      let partition = Bipartition::compute(g).unwrap();
      // symmetry and validity
      assert!(m.is_valid(g));
      for (u, v) in m.iter() {
        assert_eq!(m.partner(*v), Some(*u));
        assert!(g.has_edge(*u, *v));
      }
      assert!(m.size() <= partition.smaller_side_count());
      assert_eq!(m.edges().count(), m.size());
      // maximality
      assert!(m.is_maximum(g, &partition));
      // König: a cover as large as the matching touching every edge
      let cover = minimum_vertex_cover(g, &partition, &m).unwrap();
      assert_eq!(cover.len(), m.size());
      for u in g.vertices() {
        for &v in g.neighbors(u) {
          assert!(cover.contains(&g.vertex_id(u)) || cover.contains(&g.vertex_id(v)));
        }
      }
    }
  }
}
