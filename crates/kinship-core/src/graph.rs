/// Kinship graph construction using `petgraph`.
///
/// Wraps a `StableDiGraph` whose nodes are people and whose edges are
/// parent → child links. Spouse links are single-valued and live on the node
/// weight rather than as edges, mirroring the "at most one spouse" model of
/// the source data.
///
/// # Two-Pass Construction
///
/// [`build_graph_with_diagnostics`] runs two passes:
/// 1. **Person pass**: inserts one node per distinct canonical id. A repeated
///    id overwrites the earlier record's data but keeps its position. Rows
///    with a blank id are skipped.
/// 2. **Relationship pass**: resolves both endpoints and applies the edge.
///    Rows with a blank or unknown endpoint, or a missing or unsupported
///    type, are skipped.
///
/// Nothing in either pass is fatal; every skipped or overwritten row becomes
/// a [`BuildDiagnostic`] and a `debug` log line.
///
/// # Invariants
///
/// - `children(p)` contains `c` iff `parents(c)` contains `p`: both are views
///   of the same directed edge.
/// - A parent → child pair is stored at most once.
/// - Neighbour lists come back in input order.
/// - The graph is never mutated after construction.
use std::collections::HashMap;
use std::fmt;

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use tracing::{debug, info, instrument};

use crate::enums::{RelationshipType, RelationshipTypeTag};
use crate::newtypes::PersonId;
use crate::structures::{PersonRecord, RelationshipEdge};

pub mod ancestry;
pub mod cycles;
pub mod queries;
pub mod stats;

pub use ancestry::{
    AncestorEntry, CommonAncestor, ancestor_distances, ancestors_of, common_ancestors,
};
pub use cycles::detect_ancestry_cycles;
pub use queries::{QueryError, blood_relatives_of, shortest_path};
pub use stats::{GraphStats, graph_stats};

// ---------------------------------------------------------------------------
// Weight types
// ---------------------------------------------------------------------------

/// Weight stored on each person node.
#[derive(Debug, Clone)]
pub struct PersonNode {
    /// Canonical identifier.
    pub id: PersonId,
    /// Index into [`KinshipGraph::records`].
    pub data_index: usize,
    /// Spouse pointer. Last spouse row processed for this person wins.
    pub spouse: Option<NodeIndex>,
}

/// Weight stored on each parent → child edge.
#[derive(Debug, Clone, Copy)]
pub struct ParentEdge {
    /// Index of the relationship row that produced this edge.
    pub data_index: usize,
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// A non-fatal observation made while building the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildDiagnostic {
    /// A person row has a blank or missing id.
    MissingPersonId {
        /// Position of the row in the person input.
        row_index: usize,
    },
    /// A relationship row names a person that is not in the person set.
    UnknownPerson {
        /// Position of the row in the relationship input.
        edge_index: usize,
        /// The unresolved identifier; `None` when the cell was blank.
        person_id: Option<PersonId>,
    },
    /// A relationship row has a type other than parent, child or spouse.
    UnsupportedType {
        /// Position of the row in the relationship input.
        edge_index: usize,
        /// The raw type value; `None` when the cell was blank.
        value: Option<String>,
    },
    /// A parent row repeats a parent → child pair already recorded.
    DuplicateParentEdge {
        /// Position of the repeated row.
        edge_index: usize,
    },
    /// Two person rows share an identifier; the later one replaced the earlier.
    DuplicatePerson {
        /// The repeated identifier.
        person_id: PersonId,
    },
    /// A spouse row replaced an earlier, different spouse pointer.
    SpouseOverwritten {
        /// Position of the overwriting row.
        edge_index: usize,
        /// The person whose pointer changed.
        person_id: PersonId,
        /// The spouse that was replaced.
        previous: PersonId,
    },
}

impl fmt::Display for BuildDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPersonId { row_index } => {
                write!(f, "person #{row_index}: missing id, row skipped")
            }
            Self::UnknownPerson {
                edge_index,
                person_id: Some(person_id),
            } => write!(
                f,
                "relationship #{edge_index}: unknown person {:?}, row skipped",
                person_id.as_str()
            ),
            Self::UnknownPerson {
                edge_index,
                person_id: None,
            } => write!(f, "relationship #{edge_index}: missing person id, row skipped"),
            Self::UnsupportedType {
                edge_index,
                value: Some(value),
            } => write!(
                f,
                "relationship #{edge_index}: unsupported type {value:?}, row skipped"
            ),
            Self::UnsupportedType {
                edge_index,
                value: None,
            } => write!(f, "relationship #{edge_index}: missing type, row skipped"),
            Self::DuplicateParentEdge { edge_index } => {
                write!(f, "relationship #{edge_index}: duplicate parent link ignored")
            }
            Self::DuplicatePerson { person_id } => write!(
                f,
                "person {:?} listed more than once; last row kept",
                person_id.as_str()
            ),
            Self::SpouseOverwritten {
                edge_index,
                person_id,
                previous,
            } => write!(
                f,
                "relationship #{edge_index}: spouse of {:?} changed from {:?}",
                person_id.as_str(),
                previous.as_str()
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// KinshipGraph
// ---------------------------------------------------------------------------

/// A family graph: people linked by parent → child edges and spouse pointers.
///
/// Owns every [`PersonRecord`] for its lifetime. Construct with
/// [`build_graph`] or [`build_graph_with_diagnostics`].
#[derive(Debug, Clone)]
pub struct KinshipGraph {
    graph: StableDiGraph<PersonNode, ParentEdge>,
    id_to_index: HashMap<String, NodeIndex>,
    records: Vec<PersonRecord>,
}

impl KinshipGraph {
    /// Number of distinct people.
    pub fn person_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct parent → child links.
    pub fn parent_edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Looks up the node for a canonical id string.
    ///
    /// The argument is trimmed before lookup, matching [`PersonId`]
    /// canonicalisation.
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.id_to_index.get(id.trim()).copied()
    }

    /// Returns the node weight for `idx`.
    pub fn node(&self, idx: NodeIndex) -> Option<&PersonNode> {
        self.graph.node_weight(idx)
    }

    /// Returns the canonical id for `idx`.
    pub fn id(&self, idx: NodeIndex) -> Option<&PersonId> {
        self.graph.node_weight(idx).map(|n| &n.id)
    }

    /// Returns the person record for `idx`.
    pub fn person(&self, idx: NodeIndex) -> Option<&PersonRecord> {
        self.graph
            .node_weight(idx)
            .and_then(|n| self.records.get(n.data_index))
    }

    /// Returns the person record for an id string.
    pub fn person_by_id(&self, id: &str) -> Option<&PersonRecord> {
        self.node_index(id).and_then(|idx| self.person(idx))
    }

    /// All person records, one per distinct id, in first-seen order.
    pub fn records(&self) -> &[PersonRecord] {
        &self.records
    }

    /// Iterates node indices in first-seen order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Parents of `idx`, in input order.
    pub fn parents(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut edges: Vec<(EdgeIndex, NodeIndex)> = self
            .graph
            .edges_directed(idx, petgraph::Direction::Incoming)
            .map(|e| (e.id(), e.source()))
            .collect();
        edges.sort_unstable_by_key(|&(edge, _)| edge);
        edges.into_iter().map(|(_, node)| node).collect()
    }

    /// Children of `idx`, in input order.
    pub fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut edges: Vec<(EdgeIndex, NodeIndex)> = self
            .graph
            .edges_directed(idx, petgraph::Direction::Outgoing)
            .map(|e| (e.id(), e.target()))
            .collect();
        edges.sort_unstable_by_key(|&(edge, _)| edge);
        edges.into_iter().map(|(_, node)| node).collect()
    }

    /// Returns `true` if `parent` → `child` is recorded.
    pub fn is_parent_of(&self, parent: NodeIndex, child: NodeIndex) -> bool {
        self.graph.find_edge(parent, child).is_some()
    }

    /// Spouse pointer of `idx`.
    pub fn spouse(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.graph.node_weight(idx).and_then(|n| n.spouse)
    }

    /// Returns a reference to the underlying [`StableDiGraph`].
    pub fn graph(&self) -> &StableDiGraph<PersonNode, ParentEdge> {
        &self.graph
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

/// Builds a [`KinshipGraph`], discarding diagnostics.
pub fn build_graph(people: &[PersonRecord], edges: &[RelationshipEdge]) -> KinshipGraph {
    build_graph_with_diagnostics(people, edges).0
}

/// Builds a [`KinshipGraph`] and reports every skipped or overwritten row.
///
/// Construction is O(P + E). Inputs are not modified; records are cloned
/// into the graph.
#[instrument(skip_all, fields(people = people.len(), relationships = edges.len()))]
pub fn build_graph_with_diagnostics(
    people: &[PersonRecord],
    edges: &[RelationshipEdge],
) -> (KinshipGraph, Vec<BuildDiagnostic>) {
    let mut graph: StableDiGraph<PersonNode, ParentEdge> =
        StableDiGraph::with_capacity(people.len(), edges.len());
    let mut id_to_index: HashMap<String, NodeIndex> = HashMap::with_capacity(people.len());
    let mut records: Vec<PersonRecord> = Vec::with_capacity(people.len());
    let mut diagnostics: Vec<BuildDiagnostic> = Vec::new();

    // Pass 1: people.
    for (row_index, person) in people.iter().enumerate() {
        let Some(id) = &person.id else {
            debug!(row_index, "person row without id");
            diagnostics.push(BuildDiagnostic::MissingPersonId { row_index });
            continue;
        };
        if let Some(&existing) = id_to_index.get(id.as_str()) {
            if let Some(slot) = graph
                .node_weight(existing)
                .and_then(|n| records.get_mut(n.data_index))
            {
                *slot = person.clone();
            }
            debug!(person_id = %id, "duplicate person row replaces earlier row");
            diagnostics.push(BuildDiagnostic::DuplicatePerson {
                person_id: id.clone(),
            });
            continue;
        }

        let idx = graph.add_node(PersonNode {
            id: id.clone(),
            data_index: records.len(),
            spouse: None,
        });
        records.push(person.clone());
        id_to_index.insert(id.as_str().to_owned(), idx);
    }

    // Pass 2: relationships.
    for (edge_index, edge) in edges.iter().enumerate() {
        let resolve = |id: &Option<PersonId>| {
            id.as_ref()
                .and_then(|id| id_to_index.get(id.as_str()).copied())
        };

        let (p1, p2) = match (resolve(&edge.person1_id), resolve(&edge.person2_id)) {
            (Some(a), Some(b)) => (a, b),
            (a, b) => {
                for (resolved, id) in [(a, &edge.person1_id), (b, &edge.person2_id)] {
                    if resolved.is_none() {
                        debug!(
                            edge_index,
                            person_id = id.as_deref().unwrap_or_default(),
                            "relationship references unknown person"
                        );
                        diagnostics.push(BuildDiagnostic::UnknownPerson {
                            edge_index,
                            person_id: id.clone(),
                        });
                    }
                }
                continue;
            }
        };

        match &edge.relationship_type {
            Some(RelationshipTypeTag::Known(RelationshipType::Parent)) => {
                link_parent(&mut graph, p1, p2, edge_index, &mut diagnostics);
            }
            Some(RelationshipTypeTag::Known(RelationshipType::Child)) => {
                link_parent(&mut graph, p2, p1, edge_index, &mut diagnostics);
            }
            Some(RelationshipTypeTag::Known(RelationshipType::Spouse)) => {
                link_spouses(&mut graph, p1, p2, edge_index, &mut diagnostics);
            }
            Some(RelationshipTypeTag::Other(value)) => {
                debug!(edge_index, value = %value, "unsupported relationship type");
                diagnostics.push(BuildDiagnostic::UnsupportedType {
                    edge_index,
                    value: Some(value.clone()),
                });
            }
            None => {
                debug!(edge_index, "relationship row without type");
                diagnostics.push(BuildDiagnostic::UnsupportedType {
                    edge_index,
                    value: None,
                });
            }
        }
    }

    info!(
        people = graph.node_count(),
        parent_links = graph.edge_count(),
        diagnostics = diagnostics.len(),
        "kinship graph built"
    );

    (
        KinshipGraph {
            graph,
            id_to_index,
            records,
        },
        diagnostics,
    )
}

fn link_parent(
    graph: &mut StableDiGraph<PersonNode, ParentEdge>,
    parent: NodeIndex,
    child: NodeIndex,
    edge_index: usize,
    diagnostics: &mut Vec<BuildDiagnostic>,
) {
    if graph.find_edge(parent, child).is_some() {
        debug!(edge_index, "duplicate parent link");
        diagnostics.push(BuildDiagnostic::DuplicateParentEdge { edge_index });
        return;
    }
    graph.add_edge(parent, child, ParentEdge { data_index: edge_index });
}

fn link_spouses(
    graph: &mut StableDiGraph<PersonNode, ParentEdge>,
    a: NodeIndex,
    b: NodeIndex,
    edge_index: usize,
    diagnostics: &mut Vec<BuildDiagnostic>,
) {
    for (person, spouse) in [(a, b), (b, a)] {
        let previous = graph.node_weight(person).and_then(|n| n.spouse);
        if let Some(prev) = previous.filter(|&p| p != spouse) {
            let person_id = graph.node_weight(person).map(|n| n.id.clone());
            let previous_id = graph.node_weight(prev).map(|n| n.id.clone());
            if let (Some(person_id), Some(previous)) = (person_id, previous_id) {
                debug!(
                    edge_index,
                    person_id = %person_id,
                    previous = %previous,
                    "spouse pointer overwritten"
                );
                diagnostics.push(BuildDiagnostic::SpouseOverwritten {
                    edge_index,
                    person_id,
                    previous,
                });
            }
        }
        if let Some(weight) = graph.node_weight_mut(person) {
            weight.spouse = Some(spouse);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
