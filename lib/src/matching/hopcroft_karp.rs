//! # Maximum bipartite matching implementation
//!
//! Hopcroft-Karp: each phase layers the graph by alternating-path distance
//! from the free left vertices (BFS), then augments along a maximal set of
//! vertex-disjoint shortest augmenting paths (DFS). The loop stops once a
//! layering phase finds no augmenting path.

// - https://en.wikipedia.org/wiki/Hopcroft%E2%80%93Karp_algorithm
// - http://olympiad.cs.uct.ac.za/presentations/camp2_2017/bipartitematching-robin.pdf

use crate::bipartition::Bipartition;
use crate::graph::Graph;
use crate::matching::MatchingAlgorithm;
use std::collections::VecDeque;

/// Distance of a vertex that no layering phase reached, or that the
/// augmentation phase has exhausted
const INFINITE: usize = usize::MAX;

/// HopcroftKarp finds a maximum cardinality matching in O(E * sqrt(V))
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize)]
pub struct HopcroftKarp;

impl HopcroftKarp {
    pub fn new() -> Self {
        Self
    }
}

impl MatchingAlgorithm for HopcroftKarp {
    fn solve<G: Graph>(&self, graph: &G, partition: &Bipartition) -> Vec<Option<usize>> {
        let mut search = Search::new(graph, partition, vec![None; graph.vertex_count()]);
        let mut phase = 0;
        while search.layer() {
            phase += 1;
            // The matching changes during the pass, so snapshot the roots first
            let roots = search.free_left();
            let mut augmented = 0;
            for root in roots {
                if search.augment(root) {
                    augmented += 1;
                }
            }
            debug!(
                "phase {}: {} augmenting paths of length {}",
                phase,
                augmented,
                2 * search.free_distance - 1
            );
            debug_assert!(search.is_symmetric());
        }
        let size = search.mates.iter().filter(|m| m.is_some()).count() / 2;
        debug!("maximum matching of size {} after {} phases", size, phase);
        search.mates
    }
}

/// Returns true if some augmenting path exists relative to `mates`
pub(crate) fn has_augmenting_path<G: Graph>(
    graph: &G,
    partition: &Bipartition,
    mates: Vec<Option<usize>>,
) -> bool {
    Search::new(graph, partition, mates).layer()
}

/// The state shared by the layering and augmentation phases.
/// `mates` lives across phases; `distance`, `queue` and `stack` are
/// scratch space rebuilt by every phase.
struct Search<'a, G: Graph> {
    graph: &'a G,
    partition: &'a Bipartition,
    mates: Vec<Option<usize>>,
    /// Layer of each left vertex; right vertices stay INFINITE
    distance: Vec<usize>,
    /// Layer of the free-vertex sentinel: the length of the shortest
    /// augmenting path counted in left-to-left steps, plus one
    free_distance: usize,
    queue: VecDeque<usize>,
    /// DFS frames of (left vertex, index of the next neighbor to try)
    stack: Vec<(usize, usize)>,
}

impl<'a, G: Graph> Search<'a, G> {
    fn new(graph: &'a G, partition: &'a Bipartition, mates: Vec<Option<usize>>) -> Self {
        assert_eq!(mates.len(), graph.vertex_count());
        assert_eq!(partition.len(), graph.vertex_count());
        Self {
            graph,
            partition,
            mates,
            distance: vec![INFINITE; graph.vertex_count()],
            free_distance: INFINITE,
            queue: VecDeque::with_capacity(graph.vertex_count()),
            stack: Vec::new(),
        }
    }

    fn free_left(&self) -> Vec<usize> {
        self.partition
            .left()
            .filter(|u| self.mates[*u].is_none())
            .collect()
    }

    /// Distance of the vertex a neighbor is matched with, where an
    /// unmatched neighbor leads to the free sentinel
    #[inline(always)]
    fn distance_through(&self, v: usize) -> usize {
        match self.mates[v] {
            Some(w) => self.distance[w],
            None => self.free_distance,
        }
    }

    /// Layering phase. Labels every left vertex with its BFS depth in the
    /// alternating forest rooted at the free left vertices and returns true
    /// if an augmenting path exists.
    fn layer(&mut self) -> bool {
        let graph = self.graph;
        let partition = self.partition;
        self.queue.clear();
        for d in self.distance.iter_mut() {
            *d = INFINITE;
        }
        self.free_distance = INFINITE;
        for u in partition.left() {
            if self.mates[u].is_none() {
                self.distance[u] = 0;
                self.queue.push_back(u);
            }
        }
        while let Some(u) = self.queue.pop_front() {
            // Nothing deeper than the shortest augmenting path is useful
            if self.distance[u] >= self.free_distance {
                continue;
            }
            let next = self.distance[u] + 1;
            for &v in graph.neighbors(u) {
                match self.mates[v] {
                    None => {
                        if self.free_distance == INFINITE {
                            self.free_distance = next;
                        }
                    }
                    Some(w) => {
                        if self.distance[w] == INFINITE {
                            self.distance[w] = next;
                            self.queue.push_back(w);
                        }
                    }
                }
            }
        }
        self.free_distance != INFINITE
    }

    /// Augmentation phase for one free left vertex. Walks only edges that
    /// lead exactly one layer deeper, marks dead ends INFINITE so no later
    /// walk in this phase revisits them, and flips the whole path on success.
    fn augment(&mut self, root: usize) -> bool {
        let graph = self.graph;
        self.stack.clear();
        self.stack.push((root, 0));
        while let Some(&(u, cursor)) = self.stack.last() {
            let next = self.distance[u] + 1;
            let neighbors = graph.neighbors(u);
            let step = neighbors[cursor..]
                .iter()
                .position(|&v| self.distance_through(v) == next)
                .map(|offset| cursor + offset);
            match step {
                Some(i) => {
                    let top = self.stack.len() - 1;
                    self.stack[top].1 = i + 1;
                    match self.mates[neighbors[i]] {
                        None => {
                            self.flip_stack();
                            return true;
                        }
                        Some(w) => self.stack.push((w, 0)),
                    }
                }
                None => {
                    self.distance[u] = INFINITE;
                    self.stack.pop();
                }
            }
        }
        false
    }

    /// Matches every frame's vertex with the neighbor it last stepped through
    fn flip_stack(&mut self) {
        let graph = self.graph;
        for &(u, cursor) in &self.stack {
            let v = graph.neighbors(u)[cursor - 1];
            self.mates[u] = Some(v);
            self.mates[v] = Some(u);
        }
    }

    fn is_symmetric(&self) -> bool {
        self.mates
            .iter()
            .enumerate()
            .all(|(u, m)| m.map_or(true, |v| self.mates[v] == Some(u)))
    }
}
