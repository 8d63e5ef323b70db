/// Graph queries over the undirected family view: shortest path and the
/// "spouse's family" neighbourhood used for in-law tagging.
///
/// Both treat parent, child and spouse links as undirected connections.
/// Neither is used for term derivation; classification works on ancestry
/// distances only (see [`crate::graph::ancestry`]).
use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::stable_graph::NodeIndex;

use crate::graph::KinshipGraph;

// ---------------------------------------------------------------------------
// QueryError
// ---------------------------------------------------------------------------

/// Errors that can occur during graph queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A person id supplied to a query does not exist in the graph.
    PersonNotFound(String),
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::PersonNotFound(id) => write!(f, "person not found: {id:?}"),
        }
    }
}

impl std::error::Error for QueryError {}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// One-step neighbours in the undirected view: parents, then children, then
/// the spouse pointer.
fn connections(graph: &KinshipGraph, node: NodeIndex) -> Vec<NodeIndex> {
    let mut result = graph.parents(node);
    result.extend(graph.children(node));
    result.extend(graph.spouse(node));
    result
}

// ---------------------------------------------------------------------------
// shortest_path
// ---------------------------------------------------------------------------

/// Returns the first shortest path from `from` to `to`, inclusive of both.
///
/// BFS over parent, child and spouse links, expanding neighbours in the order
/// parents → children → spouse, so ties resolve towards ancestry. Returns
/// `None` if the two people are not connected; `from == to` yields a
/// single-element path.
///
/// # Errors
///
/// Returns [`QueryError::PersonNotFound`] if either id is not in the graph.
pub fn shortest_path(
    graph: &KinshipGraph,
    from: &str,
    to: &str,
) -> Result<Option<Vec<NodeIndex>>, QueryError> {
    let from_idx = graph
        .node_index(from)
        .ok_or_else(|| QueryError::PersonNotFound(from.to_owned()))?;
    let to_idx = graph
        .node_index(to)
        .ok_or_else(|| QueryError::PersonNotFound(to.to_owned()))?;

    if from_idx == to_idx {
        return Ok(Some(vec![from_idx]));
    }

    // BFS with predecessor tracking.
    let mut visited: HashSet<NodeIndex> = HashSet::from([from_idx]);
    let mut predecessor: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut queue: VecDeque<NodeIndex> = VecDeque::from([from_idx]);

    'bfs: while let Some(current) = queue.pop_front() {
        for neighbour in connections(graph, current) {
            if visited.insert(neighbour) {
                predecessor.insert(neighbour, current);
                if neighbour == to_idx {
                    break 'bfs;
                }
                queue.push_back(neighbour);
            }
        }
    }

    if !visited.contains(&to_idx) {
        return Ok(None);
    }

    let mut path = vec![to_idx];
    let mut current = to_idx;
    while let Some(&prev) = predecessor.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();

    Ok(Some(path))
}

// ---------------------------------------------------------------------------
// blood_relatives_of
// ---------------------------------------------------------------------------

/// Returns the family reachable from `start` for in-law purposes.
///
/// Walks parent and child links (undirected) from `start` and collects, for
/// every person reached, their parents, children and spouse. `start` itself
/// is included only when some other person links back to it.
pub fn blood_relatives_of(graph: &KinshipGraph, start: NodeIndex) -> HashSet<NodeIndex> {
    let mut expanded: HashSet<NodeIndex> = HashSet::from([start]);
    let mut queue: VecDeque<NodeIndex> = VecDeque::from([start]);
    let mut relatives: HashSet<NodeIndex> = HashSet::new();

    while let Some(current) = queue.pop_front() {
        relatives.extend(graph.spouse(current));
        for next in graph
            .parents(current)
            .into_iter()
            .chain(graph.children(current))
        {
            relatives.insert(next);
            if expanded.insert(next) {
                queue.push_back(next);
            }
        }
    }

    relatives
}

#[cfg(test)]
mod tests;
