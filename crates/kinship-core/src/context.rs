/// Context tagging on top of [`classify`](crate::classify::classify).
///
/// A [`RelationshipResult`] pairs the kinship term with at most one
/// context tag and a one-line description such as
/// `"Ada is Ben's sibling (half)"`.
use std::fmt;

use petgraph::stable_graph::NodeIndex;
use serde::{Serialize, Serializer};

use crate::classify::{classify_nodes, shared_parent_count};
use crate::graph::queries::blood_relatives_of;
use crate::graph::{KinshipGraph, QueryError};
use crate::newtypes::PersonId;
use crate::terms::KinshipTerm;

// ---------------------------------------------------------------------------
// RelationshipContext
// ---------------------------------------------------------------------------

/// Qualifier attached to a kinship term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RelationshipContext {
    /// No qualifier.
    #[default]
    None,
    /// Related only through a spouse's family.
    InLaw,
    /// Step relationship. Never produced: the input carries no marriage
    /// timeline to infer it from.
    Step,
    /// Siblings sharing exactly one of two recorded parents.
    Half,
}

impl RelationshipContext {
    /// Suffix appended to the term, including its leading space.
    pub fn suffix(&self) -> &'static str {
        match self {
            RelationshipContext::None => "",
            RelationshipContext::InLaw => " (in-law)",
            RelationshipContext::Step => " (step)",
            RelationshipContext::Half => " (half)",
        }
    }
}

impl fmt::Display for RelationshipContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl Serialize for RelationshipContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.suffix())
    }
}

// ---------------------------------------------------------------------------
// Context rules
// ---------------------------------------------------------------------------

/// A context check on a classified pair.
#[derive(Debug, Clone, Copy)]
pub struct ContextRule {
    /// Rule name, for logs and tests.
    pub name: &'static str,
    /// Returns `true` when the context applies to `(a, b)` with the given
    /// term.
    pub applies: fn(&KinshipGraph, NodeIndex, NodeIndex, KinshipTerm) -> bool,
    /// Context produced when the rule applies.
    pub context: RelationshipContext,
}

/// In-law: no blood link at all, and one of the two belongs to the other's
/// spouse's family.
fn is_in_law(graph: &KinshipGraph, a: NodeIndex, b: NodeIndex, term: KinshipTerm) -> bool {
    if term != KinshipTerm::NotRelated {
        return false;
    }
    let in_family_of_spouse = |person: NodeIndex, other: NodeIndex| {
        graph
            .spouse(person)
            .is_some_and(|spouse| blood_relatives_of(graph, spouse).contains(&other))
    };
    in_family_of_spouse(a, b) || in_family_of_spouse(b, a)
}

fn is_step(_: &KinshipGraph, _: NodeIndex, _: NodeIndex, _: KinshipTerm) -> bool {
    false
}

/// Half: exactly one shared parent, with two recorded parents on either side.
/// Applies whatever the term, `spouse` included.
fn is_half(graph: &KinshipGraph, a: NodeIndex, b: NodeIndex, _: KinshipTerm) -> bool {
    shared_parent_count(graph, a, b) == 1
        && (graph.parents(a).len() == 2 || graph.parents(b).len() == 2)
}

/// Context checks in precedence order; the first that applies wins.
pub const CONTEXT_RULES: &[ContextRule] = &[
    ContextRule {
        name: "in-law",
        applies: is_in_law,
        context: RelationshipContext::InLaw,
    },
    ContextRule {
        name: "step",
        applies: is_step,
        context: RelationshipContext::Step,
    },
    ContextRule {
        name: "half",
        applies: is_half,
        context: RelationshipContext::Half,
    },
];

// ---------------------------------------------------------------------------
// RelationshipResult
// ---------------------------------------------------------------------------

/// A classified pair with its context and description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipResult {
    /// The kinship term.
    pub term: KinshipTerm,
    /// Context qualifier, rendered as its suffix.
    pub context: RelationshipContext,
    /// `"{A} is {B}'s {term}{context}"`, first character capitalised.
    /// Empty when either person is unknown.
    pub description: String,
}

impl RelationshipResult {
    fn unknown() -> Self {
        Self {
            term: KinshipTerm::Unknown,
            context: RelationshipContext::None,
            description: String::new(),
        }
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn describe(
    graph: &KinshipGraph,
    a: NodeIndex,
    b: NodeIndex,
    term: KinshipTerm,
    context: RelationshipContext,
) -> String {
    let name = |idx: NodeIndex| {
        graph
            .person(idx)
            .map(|p| p.display_name().to_owned())
            .unwrap_or_default()
    };
    capitalize_first(&format!("{} is {}'s {term}{context}", name(a), name(b)))
}

/// Classifies `a` against `b` on resolved nodes and attaches context.
pub fn classify_nodes_with_context(
    graph: &KinshipGraph,
    a: NodeIndex,
    b: NodeIndex,
) -> RelationshipResult {
    let term = classify_nodes(graph, a, b);
    let context = if a == b {
        RelationshipContext::None
    } else {
        CONTEXT_RULES
            .iter()
            .find(|rule| (rule.applies)(graph, a, b, term))
            .map_or(RelationshipContext::None, |rule| rule.context)
    };
    RelationshipResult {
        term,
        context,
        description: describe(graph, a, b, term, context),
    }
}

/// Classifies the person with id `a` against the person with id `b` and
/// attaches a context tag and description.
///
/// Unknown ids give [`KinshipTerm::Unknown`] with no context and an empty
/// description, including when both ids are the same unknown id.
pub fn classify_with_context(graph: &KinshipGraph, a: &str, b: &str) -> RelationshipResult {
    match (graph.node_index(a), graph.node_index(b)) {
        (Some(ia), Some(ib)) => classify_nodes_with_context(graph, ia, ib),
        _ => RelationshipResult::unknown(),
    }
}

/// Classifies the person with id `id` against every other person, in
/// person-record order.
///
/// # Errors
///
/// Returns [`QueryError::PersonNotFound`] if `id` is not in the graph.
pub fn classify_all(
    graph: &KinshipGraph,
    id: &str,
) -> Result<Vec<(PersonId, RelationshipResult)>, QueryError> {
    let start = graph
        .node_index(id)
        .ok_or_else(|| QueryError::PersonNotFound(id.to_owned()))?;
    Ok(graph
        .node_indices()
        .filter(|&other| other != start)
        .filter_map(|other| {
            let result = classify_nodes_with_context(graph, start, other);
            graph.id(other).map(|other_id| (other_id.clone(), result))
        })
        .collect())
}
