//! Simple augmenting path matching, one DFS per left vertex.
//! O(V * E), used to cross-check Hopcroft-Karp in tests.
//! Based on the "Alternate Approach" from
//! http://olympiad.cs.uct.ac.za/presentations/camp2_2017/bipartitematching-robin.pdf

use crate::bipartition::Bipartition;
use crate::graph::Graph;

/// Returns the size of the maximum matching of `graph`
pub fn maximum_matching_size<G: Graph>(graph: &G, partition: &Bipartition) -> usize {
    let mut match_count = 0;
    let mut seen = vec![false; graph.vertex_count()];
    let mut matches: Vec<Option<usize>> = vec![None; graph.vertex_count()];
    for u in partition.left() {
        // reset right vertices seen
        for s in seen.iter_mut() {
            *s = false;
        }
        if recursive_find_match(graph, u, &mut seen, &mut matches) {
            match_count += 1;
        }
    }
    match_count
}

fn recursive_find_match<G: Graph>(
    graph: &G,
    u: usize,
    seen: &mut Vec<bool>,
    matches: &mut Vec<Option<usize>>,
) -> bool {
    for &v in graph.neighbors(u) {
        if seen[v] {
            continue;
        }
        seen[v] = true;
        // Is v free OR can the left vertex holding v move elsewhere
        let available = match matches[v] {
            None => true,
            Some(other) => recursive_find_match(graph, other, seen, matches),
        };
        if available {
            matches[v] = Some(u);
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use crate::bipartition::Bipartition;
    use crate::matching::kuhn::*;

    #[test]
    fn crown_has_perfect_matching() {
        // Complete bipartite K3,3 minus a perfect matching
        let g = graph![(1, 5), (1, 6), (2, 4), (2, 6), (3, 4), (3, 5)];
        let partition = Bipartition::compute(&g).unwrap();
        assert_eq!(maximum_matching_size(&g, &partition), 3);
    }
}
