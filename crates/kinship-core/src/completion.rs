/// Co-parent completion.
///
/// Source data often records a child against one parent only, even when that
/// parent's spouse is the other parent. [`suggest_coparent_edges`] lists the
/// missing `parent` rows without touching the graph.
use serde::Serialize;
use tracing::{debug, instrument};

use crate::graph::KinshipGraph;
use crate::newtypes::PersonId;
use crate::structures::RelationshipEdge;

/// A `parent` row that looks missing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SuggestedEdge {
    /// Spouse of the recorded parent; the suggested new parent.
    pub parent: PersonId,
    /// The child.
    pub child: PersonId,
    /// The recorded parent whose spouse prompted the suggestion.
    pub via: PersonId,
}

impl SuggestedEdge {
    /// The suggestion as a `parent` relationship row.
    pub fn to_relationship_edge(&self) -> RelationshipEdge {
        RelationshipEdge::parent(self.parent.clone(), self.child.clone())
    }
}

/// Suggests `spouse → child` parent rows for every recorded `parent → child`
/// link whose parent has a spouse not yet recorded as that child's parent.
///
/// Suggestions follow parent-link input order and are deduplicated. A spouse
/// pointer naming the child itself never yields a suggestion.
#[instrument(skip_all, fields(parent_links = graph.parent_edge_count()))]
pub fn suggest_coparent_edges(graph: &KinshipGraph) -> Vec<SuggestedEdge> {
    let g = graph.graph();
    let mut links: Vec<_> = g.edge_indices().collect();
    links.sort_unstable();

    let mut suggestions: Vec<SuggestedEdge> = Vec::new();
    for link in links {
        let Some((parent, child)) = g.edge_endpoints(link) else {
            continue;
        };
        let Some(spouse) = graph.spouse(parent) else {
            continue;
        };
        if spouse == child || graph.is_parent_of(spouse, child) {
            continue;
        }
        let (Some(spouse_id), Some(child_id), Some(via)) =
            (graph.id(spouse), graph.id(child), graph.id(parent))
        else {
            continue;
        };
        if suggestions
            .iter()
            .any(|s| &s.parent == spouse_id && &s.child == child_id)
        {
            continue;
        }
        debug!(parent = %spouse_id, child = %child_id, via = %via, "co-parent link missing");
        suggestions.push(SuggestedEdge {
            parent: spouse_id.clone(),
            child: child_id.clone(),
            via: via.clone(),
        });
    }
    suggestions
}
