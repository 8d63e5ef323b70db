#![allow(clippy::expect_used)]

use petgraph::stable_graph::NodeIndex;

use super::*;
use crate::graph::KinshipGraph;
use crate::newtypes::PersonId;
use crate::test_helpers::{family, sample_family};

/// Resolve an id to a [`NodeIndex`], panicking if missing (test helper).
fn idx(graph: &KinshipGraph, id: &str) -> NodeIndex {
    graph.node_index(id).expect("person must exist")
}

fn path_ids(graph: &KinshipGraph, path: &[NodeIndex]) -> Vec<String> {
    path.iter()
        .filter_map(|&n| graph.id(n).map(PersonId::to_string))
        .collect()
}

// ---------------------------------------------------------------------------
// shortest_path
// ---------------------------------------------------------------------------

#[test]
fn shortest_path_parent_chain() {
    let g = sample_family();
    let path = shortest_path(&g, "gg1", "ak")
        .expect("both exist")
        .expect("connected");
    assert_eq!(path_ids(&g, &path), vec!["gg1", "g1", "p1", "a", "ak"]);
}

#[test]
fn shortest_path_endpoints_are_inclusive() {
    let g = sample_family();
    let path = shortest_path(&g, "g1", "c")
        .expect("both exist")
        .expect("connected");
    assert_eq!(path.first().copied(), Some(idx(&g, "g1")));
    assert_eq!(path.last().copied(), Some(idx(&g, "c")));
    assert_eq!(path.len(), 3);
}

#[test]
fn shortest_path_uses_spouse_links() {
    let g = sample_family();
    let path = shortest_path(&g, "inlaw", "c")
        .expect("both exist")
        .expect("connected through marriage");
    assert_eq!(path_ids(&g, &path), vec!["inlaw", "p2", "c"]);
}

#[test]
fn shortest_path_prefers_parents_on_ties() {
    // x and y share both parents; the first recorded parent is taken.
    let g = family(&["m", "f", "x", "y"], &[("m", "x"), ("f", "x"), ("m", "y"), ("f", "y")], &[]);
    let path = shortest_path(&g, "x", "y")
        .expect("both exist")
        .expect("connected");
    assert_eq!(path_ids(&g, &path), vec!["x", "m", "y"]);
}

#[test]
fn shortest_path_self_is_single_node() {
    let g = sample_family();
    let path = shortest_path(&g, "a", "a")
        .expect("exists")
        .expect("trivial path");
    assert_eq!(path, vec![idx(&g, "a")]);
}

#[test]
fn shortest_path_disconnected_is_none() {
    let g = sample_family();
    assert_eq!(shortest_path(&g, "a", "loner").expect("both exist"), None);
}

#[test]
fn shortest_path_unknown_person_is_error() {
    let g = sample_family();
    assert_eq!(
        shortest_path(&g, "a", "ghost"),
        Err(QueryError::PersonNotFound("ghost".to_owned()))
    );
    assert_eq!(
        shortest_path(&g, "ghost", "a"),
        Err(QueryError::PersonNotFound("ghost".to_owned()))
    );
}

#[test]
fn shortest_path_survives_cycles() {
    let g = family(&["a", "b", "c", "d"], &[("a", "b"), ("b", "c"), ("c", "a")], &[]);
    assert_eq!(shortest_path(&g, "a", "d").expect("both exist"), None);
    let path = shortest_path(&g, "a", "c")
        .expect("both exist")
        .expect("connected");
    assert_eq!(path.len(), 2, "c is a's parent in the loop");
}

// ---------------------------------------------------------------------------
// blood_relatives_of
// ---------------------------------------------------------------------------

#[test]
fn relatives_cover_whole_parent_child_component() {
    let g = sample_family();
    let relatives = blood_relatives_of(&g, idx(&g, "p2"));
    for id in ["g1", "g2", "gg1", "p1", "a", "c", "ck", "q1", "r1", "half", "other"] {
        assert!(relatives.contains(&idx(&g, id)), "missing {id}");
    }
    assert!(!relatives.contains(&idx(&g, "loner")));
}

#[test]
fn relatives_include_spouses_of_reached_people() {
    let g = sample_family();
    let relatives = blood_relatives_of(&g, idx(&g, "c"));
    assert!(relatives.contains(&idx(&g, "inlaw")), "spouse of p2");
    assert!(relatives.contains(&idx(&g, "sp1")), "spouse and co-parent of p1");
}

#[test]
fn isolated_person_has_only_spouse() {
    let g = family(&["solo", "partner"], &[], &[("solo", "partner")]);
    let relatives = blood_relatives_of(&g, idx(&g, "solo"));
    assert_eq!(relatives, std::collections::HashSet::from([idx(&g, "partner")]));
}

#[test]
fn query_error_display_names_id() {
    let e = QueryError::PersonNotFound("p-7".to_owned());
    assert!(e.to_string().contains("p-7"));
}
