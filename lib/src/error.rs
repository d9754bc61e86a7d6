//! # Errors
//!
use crate::graph::VertexId;
use std::error;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Error {
  /// The input cannot be handled by the selected algorithm.
  /// Reported before any matching work begins.
  InvalidInput(InvalidInput),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidInput {
  /// No 2-coloring of the graph exists
  NotBipartite,
  /// A vertex id that is not part of the graph
  UnknownVertex(VertexId),
  /// An edge whose endpoints were placed on the same side of a partition
  SameSideEdge(VertexId, VertexId),
  /// A partition built for a graph with a different number of vertices
  PartitionMismatch { expected: usize, got: usize },
}

impl Error {
  pub fn is_invalid_input(&self) -> bool {
    match self {
      Self::InvalidInput(_) => true,
    }
  }
}

impl From<InvalidInput> for Error {
  fn from(kind: InvalidInput) -> Self {
    Self::InvalidInput(kind)
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidInput(kind) => write!(f, "invalid input: {}", kind),
    }
  }
}

impl fmt::Display for InvalidInput {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::NotBipartite => write!(f, "graph is not bipartite"),
      Self::UnknownVertex(id) => write!(f, "vertex {} is not in the graph", id),
      Self::SameSideEdge(u, v) => write!(f, "edge ({}, {}) joins two vertices on the same side", u, v),
      Self::PartitionMismatch { expected, got } => write!(
        f,
        "partition covers {} vertices but the graph has {}",
        got, expected
      ),
    }
  }
}

impl error::Error for Error {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    None
  }
}
