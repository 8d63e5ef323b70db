/// Ancestry cycle detection.
///
/// Bad data can record someone as their own ancestor. Classification copes
/// with that (ancestor BFS never revisits a node), but the cycles are still
/// worth reporting so the data can be fixed.
///
/// # Algorithm Overview
///
/// Kahn's algorithm peels away every person whose parents have all been
/// peeled. Whatever remains sits on, or downstream of, a parent → child
/// cycle. A DFS restricted to the remaining people then extracts individual
/// cycles. Iteration follows node insertion order and input edge order, so
/// the output is deterministic for a given input.
use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::stable_graph::NodeIndex;
use tracing::{instrument, warn};

use crate::graph::KinshipGraph;

/// Returns every parent → child cycle found in `graph`.
///
/// Each cycle lists its people in parent → child order without repeating the
/// first one, so a self-parent row yields a one-element cycle. Returns an
/// empty `Vec` when the ancestry is acyclic.
#[instrument(skip_all, fields(people = graph.person_count()))]
pub fn detect_ancestry_cycles(graph: &KinshipGraph) -> Vec<Vec<NodeIndex>> {
    let order: Vec<NodeIndex> = graph.node_indices().collect();

    let mut in_degree: HashMap<NodeIndex, usize> = order
        .iter()
        .map(|&idx| (idx, graph.parents(idx).len()))
        .collect();

    let mut queue: VecDeque<NodeIndex> = order
        .iter()
        .copied()
        .filter(|idx| in_degree.get(idx) == Some(&0))
        .collect();

    let mut consumed: usize = 0;
    while let Some(node) = queue.pop_front() {
        consumed += 1;
        for child in graph.children(node) {
            if let Some(deg) = in_degree.get_mut(&child) {
                *deg = deg.saturating_sub(1);
                if *deg == 0 {
                    queue.push_back(child);
                }
            }
        }
    }

    if consumed == order.len() {
        return Vec::new();
    }

    let remaining: Vec<NodeIndex> = order
        .into_iter()
        .filter(|idx| in_degree.get(idx).is_some_and(|&deg| deg > 0))
        .collect();

    let cycles = extract_cycles(graph, &remaining);
    warn!(cycles = cycles.len(), "ancestry contains cycles");
    cycles
}

// ---------------------------------------------------------------------------
// Internal: individual cycle extraction
// ---------------------------------------------------------------------------

/// Iterative DFS over the people left behind by Kahn's pass. A child already
/// on the current path closes a cycle.
fn extract_cycles(graph: &KinshipGraph, remaining: &[NodeIndex]) -> Vec<Vec<NodeIndex>> {
    let candidates: HashSet<NodeIndex> = remaining.iter().copied().collect();
    let successors = |node: NodeIndex| -> Vec<NodeIndex> {
        graph
            .children(node)
            .into_iter()
            .filter(|c| candidates.contains(c))
            .collect()
    };

    let mut cycles: Vec<Vec<NodeIndex>> = Vec::new();
    let mut finished: HashSet<NodeIndex> = HashSet::new();

    for &start in remaining {
        if finished.contains(&start) {
            continue;
        }

        let mut path: Vec<NodeIndex> = vec![start];
        let mut on_path: HashSet<NodeIndex> = HashSet::from([start]);
        // (node, successors, next successor position)
        let mut stack: Vec<(NodeIndex, Vec<NodeIndex>, usize)> =
            vec![(start, successors(start), 0)];

        while let Some((node, children, next)) = stack.last_mut() {
            let node = *node;
            let Some(&child) = children.get(*next) else {
                stack.pop();
                path.pop();
                on_path.remove(&node);
                finished.insert(node);
                continue;
            };
            *next += 1;

            if on_path.contains(&child) {
                if let Some(pos) = path.iter().position(|&n| n == child) {
                    cycles.push(path[pos..].to_vec());
                }
                continue;
            }
            if finished.contains(&child) {
                continue;
            }

            path.push(child);
            on_path.insert(child);
            stack.push((child, successors(child), 0));
        }
    }

    cycles
}
