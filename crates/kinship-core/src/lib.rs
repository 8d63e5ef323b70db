#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod classify;
pub mod completion;
pub mod context;
pub mod enums;
pub mod family;
pub mod graph;
pub mod newtypes;
pub mod structures;
pub mod terms;

#[cfg(test)]
mod test_helpers;

pub use classify::{
    DIRECT_RULES, DISTANCE_RULES, DirectRule, DistanceRule, classify, classify_nodes, derive_term,
    direct_term, shared_parent_count,
};
pub use completion::{SuggestedEdge, suggest_coparent_edges};
pub use context::{
    CONTEXT_RULES, ContextRule, RelationshipContext, RelationshipResult, classify_all,
    classify_nodes_with_context, classify_with_context,
};
pub use enums::{RelationshipType, RelationshipTypeTag};
pub use family::{FamilyFile, FamilyParseError, parse_family};
pub use graph::{
    AncestorEntry, BuildDiagnostic, CommonAncestor, GraphStats, KinshipGraph, ParentEdge,
    PersonNode, QueryError, ancestor_distances, ancestors_of, blood_relatives_of, build_graph,
    build_graph_with_diagnostics, common_ancestors, detect_ancestry_cycles, graph_stats,
    shortest_path,
};
pub use newtypes::{NewtypeError, PersonId};
pub use structures::{PersonRecord, RelationshipEdge};
pub use terms::{KinshipTerm, ordinal};

/// Returns the current version of the kinship-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }
}
