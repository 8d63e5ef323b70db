/// Summary counts over a [`KinshipGraph`], used by the `inspect` command.
use serde::Serialize;

use crate::graph::KinshipGraph;
use crate::graph::ancestry::ancestor_distances;

/// Shape of a family graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GraphStats {
    /// Distinct people.
    pub people: usize,
    /// Distinct parent → child links.
    pub parent_edges: usize,
    /// Pairs whose spouse pointers reference each other.
    pub spouse_pairs: usize,
    /// Spouse pointers not returned by the other person (left behind by a
    /// later spouse row).
    pub one_sided_spouses: usize,
    /// People with no recorded parents.
    pub roots: usize,
    /// People with no recorded children.
    pub leaves: usize,
    /// Largest minimal ancestor distance over all people.
    pub deepest_generation: u32,
}

/// Computes [`GraphStats`] for `graph`.
pub fn graph_stats(graph: &KinshipGraph) -> GraphStats {
    let mut stats = GraphStats {
        people: graph.person_count(),
        parent_edges: graph.parent_edge_count(),
        ..GraphStats::default()
    };

    let mut mutual_pointers = 0usize;
    for idx in graph.node_indices() {
        if graph.parents(idx).is_empty() {
            stats.roots += 1;
        }
        if graph.children(idx).is_empty() {
            stats.leaves += 1;
        }
        if let Some(spouse) = graph.spouse(idx) {
            if graph.spouse(spouse) == Some(idx) {
                mutual_pointers += 1;
            } else {
                stats.one_sided_spouses += 1;
            }
        }

        let depth = ancestor_distances(graph, idx)
            .iter()
            .map(|entry| entry.distance)
            .max()
            .unwrap_or(0);
        stats.deepest_generation = stats.deepest_generation.max(depth);
    }
    stats.spouse_pairs = mutual_pointers / 2;

    stats
}
