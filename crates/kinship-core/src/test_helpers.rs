//! Shared test helper functions for constructing fixtures.
//!
//! Compiled only in test builds. Integration tests under
//! `crates/kinship-core/tests/` define their own local helpers because they
//! link against the non-test library build.
#![allow(clippy::expect_used)]

use crate::enums::{RelationshipType, RelationshipTypeTag};
use crate::graph::{KinshipGraph, build_graph};
use crate::newtypes::PersonId;
use crate::structures::{PersonRecord, RelationshipEdge};

/// Creates a [`PersonId`], panicking on blank input.
pub fn pid(s: &str) -> PersonId {
    PersonId::try_from(s).expect("valid PersonId")
}

/// A person whose first name equals its id.
pub fn person(id: &str) -> PersonRecord {
    PersonRecord::new(pid(id)).with_first_name(id)
}

/// `parent` is a parent of `child`.
pub fn parent_edge(parent: &str, child: &str) -> RelationshipEdge {
    RelationshipEdge::parent(pid(parent), pid(child))
}

/// `child` is a child of `parent`, expressed as a `child` row.
pub fn child_edge(child: &str, parent: &str) -> RelationshipEdge {
    RelationshipEdge::new(pid(child), pid(parent), RelationshipType::Child)
}

/// `a` and `b` are married.
pub fn spouse_edge(a: &str, b: &str) -> RelationshipEdge {
    RelationshipEdge::spouse(pid(a), pid(b))
}

/// A row with an arbitrary raw type string.
pub fn edge_of_type(a: &str, b: &str, raw: &str) -> RelationshipEdge {
    RelationshipEdge {
        person1_id: Some(pid(a)),
        person2_id: Some(pid(b)),
        relationship_type: Some(RelationshipTypeTag::parse(raw)),
    }
}

/// Builds a graph from people ids and `(parent, child)` / `(a, b)` pairs.
pub fn family(ids: &[&str], parents: &[(&str, &str)], spouses: &[(&str, &str)]) -> KinshipGraph {
    let people: Vec<PersonRecord> = ids.iter().map(|id| person(id)).collect();
    let mut edges: Vec<RelationshipEdge> = parents
        .iter()
        .map(|(p, c)| parent_edge(p, c))
        .collect();
    edges.extend(spouses.iter().map(|(a, b)| spouse_edge(a, b)));
    build_graph(&people, &edges)
}

/// Three generations plus in-laws, used across classifier tests.
///
/// ```text
///                 gg1 ─┬─ gg2
///                      │
///          ┌───────────┴──────────┐
///     g1 ─┬─ g2                  g3
///         │                       │
///    ┌────┴────┐                  │
///   p1 = sp1   p2 (aunt)         q1
///    │         │                  │
///  ┌─┴──┐      │                  │
///  a   sib     c (cousin)        r1
///  │           │
///  ak          ck
/// ```
///
/// - `a`, `sib`: full siblings (children of `p1` and `sp1`).
/// - `half`: child of `p1` and `other` only.
/// - `inlaw`: spouse of `p2`, no ancestors recorded.
/// - `loner`: no edges.
pub fn sample_family() -> KinshipGraph {
    family(
        &[
            "gg1", "gg2", "g1", "g2", "g3", "p1", "sp1", "p2", "inlaw", "a", "sib", "half",
            "other", "c", "ak", "ck", "q1", "r1", "loner",
        ],
        &[
            ("gg1", "g1"),
            ("gg2", "g1"),
            ("gg1", "g3"),
            ("gg2", "g3"),
            ("g1", "p1"),
            ("g2", "p1"),
            ("g1", "p2"),
            ("g2", "p2"),
            ("p1", "a"),
            ("sp1", "a"),
            ("p1", "sib"),
            ("sp1", "sib"),
            ("p1", "half"),
            ("other", "half"),
            ("p2", "c"),
            ("a", "ak"),
            ("c", "ck"),
            ("g3", "q1"),
            ("q1", "r1"),
        ],
        &[("g1", "g2"), ("p1", "sp1"), ("p2", "inlaw")],
    )
}
