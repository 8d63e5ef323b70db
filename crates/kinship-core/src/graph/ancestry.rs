/// Ancestor enumeration and common-ancestor search.
///
/// Ancestors are found with a layered BFS over parent edges. BFS visits each
/// ancestor first at its minimal generational distance, so every ancestor
/// appears once, cycles in bad data terminate naturally, and the cost is
/// linear in the number of reachable parent links. A person reachable through
/// several lines (pedigree collapse) is reported at the nearest one.
use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::stable_graph::NodeIndex;

use crate::graph::KinshipGraph;
use crate::graph::queries::QueryError;

/// An ancestor and its generational distance (parent hops) from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AncestorEntry {
    /// The ancestor's node.
    pub ancestor: NodeIndex,
    /// Minimal number of parent hops from the start person.
    pub distance: u32,
}

/// A person reachable through parent edges from both queried people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommonAncestor {
    /// The shared ancestor's node.
    pub ancestor: NodeIndex,
    /// Distance from the first person (`d1`).
    pub distance_a: u32,
    /// Distance from the second person (`d2`).
    pub distance_b: u32,
}

impl CommonAncestor {
    /// `d1 + d2`, the selection key for the closest shared ancestor.
    pub fn total(&self) -> u32 {
        self.distance_a + self.distance_b
    }
}

/// Returns `start` at distance 0 followed by every ancestor at its minimal
/// distance, in BFS discovery order (parents visited in input order).
pub fn ancestor_distances(graph: &KinshipGraph, start: NodeIndex) -> Vec<AncestorEntry> {
    let mut result = vec![AncestorEntry {
        ancestor: start,
        distance: 0,
    }];
    let mut visited: HashSet<NodeIndex> = HashSet::from([start]);
    let mut queue: VecDeque<(NodeIndex, u32)> = VecDeque::from([(start, 0)]);

    while let Some((current, distance)) = queue.pop_front() {
        for parent in graph.parents(current) {
            if visited.insert(parent) {
                result.push(AncestorEntry {
                    ancestor: parent,
                    distance: distance + 1,
                });
                queue.push_back((parent, distance + 1));
            }
        }
    }

    result
}

/// Returns the proper ancestors (distance ≥ 1) of the person with id `id`.
///
/// # Errors
///
/// Returns [`QueryError::PersonNotFound`] if `id` is not in the graph.
pub fn ancestors_of(graph: &KinshipGraph, id: &str) -> Result<Vec<AncestorEntry>, QueryError> {
    let start = graph
        .node_index(id)
        .ok_or_else(|| QueryError::PersonNotFound(id.to_owned()))?;
    Ok(ancestor_distances(graph, start)
        .into_iter()
        .filter(|entry| entry.distance > 0)
        .collect())
}

/// Returns every shared ancestor of `a` and `b`, each person counting as
/// their own ancestor at distance 0.
///
/// Sorted by `d1 + d2`; ties keep `a`'s discovery order, so the first element
/// is the closest common ancestor. Empty when the two share no ancestry.
pub fn common_ancestors(graph: &KinshipGraph, a: NodeIndex, b: NodeIndex) -> Vec<CommonAncestor> {
    let from_b: HashMap<NodeIndex, u32> = ancestor_distances(graph, b)
        .into_iter()
        .map(|entry| (entry.ancestor, entry.distance))
        .collect();

    let mut shared: Vec<CommonAncestor> = ancestor_distances(graph, a)
        .into_iter()
        .filter_map(|entry| {
            from_b.get(&entry.ancestor).map(|&distance_b| CommonAncestor {
                ancestor: entry.ancestor,
                distance_a: entry.distance,
                distance_b,
            })
        })
        .collect();

    shared.sort_by_key(CommonAncestor::total);
    shared
}
