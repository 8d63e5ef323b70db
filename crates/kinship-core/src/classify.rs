/// Relationship classification.
///
/// Classification runs in a fixed order:
///
/// 1. Identical ids are [`KinshipTerm::SelfPerson`].
/// 2. Ids missing from the graph are [`KinshipTerm::Unknown`].
/// 3. [`DIRECT_RULES`] check the two people's own links (spouse, parent,
///    child, shared parent). A match short-circuits ancestry search.
/// 4. The closest common ancestor (minimal `d1 + d2`) is found; none means
///    [`KinshipTerm::NotRelated`].
/// 5. [`DISTANCE_RULES`] map `(d1, d2)` to a term. First match wins.
///
/// Both rule tables are plain data so their precedence can be read and
/// tested entry by entry.
use petgraph::stable_graph::NodeIndex;
use tracing::trace;

use crate::graph::KinshipGraph;
use crate::graph::ancestry::common_ancestors;
use crate::terms::KinshipTerm;

// ---------------------------------------------------------------------------
// Direct rules
// ---------------------------------------------------------------------------

/// A check on the two people's own links.
#[derive(Debug, Clone, Copy)]
pub struct DirectRule {
    /// Rule name, for logs and tests.
    pub name: &'static str,
    /// Returns `true` when the rule applies to `(a, b)`.
    pub applies: fn(&KinshipGraph, NodeIndex, NodeIndex) -> bool,
    /// Term produced when the rule applies.
    pub term: KinshipTerm,
}

fn is_spouse(graph: &KinshipGraph, a: NodeIndex, b: NodeIndex) -> bool {
    graph.spouse(a) == Some(b) || graph.spouse(b) == Some(a)
}

fn is_parent(graph: &KinshipGraph, a: NodeIndex, b: NodeIndex) -> bool {
    graph.is_parent_of(a, b)
}

fn is_child(graph: &KinshipGraph, a: NodeIndex, b: NodeIndex) -> bool {
    graph.is_parent_of(b, a)
}

fn is_sibling(graph: &KinshipGraph, a: NodeIndex, b: NodeIndex) -> bool {
    shared_parent_count(graph, a, b) > 0
}

/// Direct-link checks in precedence order.
pub const DIRECT_RULES: &[DirectRule] = &[
    DirectRule {
        name: "spouse",
        applies: is_spouse,
        term: KinshipTerm::Spouse,
    },
    DirectRule {
        name: "parent",
        applies: is_parent,
        term: KinshipTerm::Parent,
    },
    DirectRule {
        name: "child",
        applies: is_child,
        term: KinshipTerm::Child,
    },
    DirectRule {
        name: "sibling",
        applies: is_sibling,
        term: KinshipTerm::Sibling,
    },
];

/// Number of parents `a` and `b` have in common.
pub fn shared_parent_count(graph: &KinshipGraph, a: NodeIndex, b: NodeIndex) -> usize {
    let parents_b = graph.parents(b);
    graph
        .parents(a)
        .iter()
        .filter(|p| parents_b.contains(p))
        .count()
}

/// Returns the term of the first direct rule that applies, if any.
pub fn direct_term(graph: &KinshipGraph, a: NodeIndex, b: NodeIndex) -> Option<KinshipTerm> {
    DIRECT_RULES
        .iter()
        .find(|rule| (rule.applies)(graph, a, b))
        .map(|rule| rule.term)
}

// ---------------------------------------------------------------------------
// Distance rules
// ---------------------------------------------------------------------------

/// A mapping from a `(d1, d2)` pattern to a term.
///
/// `d1` is A's distance to the closest common ancestor, `d2` is B's.
#[derive(Debug, Clone, Copy)]
pub struct DistanceRule {
    /// Rule name, for logs and tests.
    pub name: &'static str,
    /// Returns `true` when the rule covers `(d1, d2)`.
    pub matches: fn(u32, u32) -> bool,
    /// Builds the term for `(d1, d2)`. Only called when `matches` held.
    pub term: fn(u32, u32) -> KinshipTerm,
}

fn a_is_ancestor(d1: u32, d2: u32) -> bool {
    d1 == 0 && d2 > 0
}

fn b_is_ancestor(d1: u32, d2: u32) -> bool {
    d2 == 0 && d1 > 0
}

fn a_is_sibling_of_distant_ancestor(d1: u32, d2: u32) -> bool {
    d1 == 1 && d2 > 2
}

fn b_is_sibling_of_distant_ancestor(d1: u32, d2: u32) -> bool {
    d2 == 1 && d1 > 2
}

fn a_is_aunt_uncle(d1: u32, d2: u32) -> bool {
    d1 == 1 && d2 == 2
}

fn a_is_niece_nephew(d1: u32, d2: u32) -> bool {
    d1 == 2 && d2 == 1
}

fn same_generation_cousins(d1: u32, d2: u32) -> bool {
    d1 == d2 && d1 >= 2
}

fn removed_cousins(d1: u32, d2: u32) -> bool {
    d1 != d2 && d1.min(d2) >= 2
}

fn always(_: u32, _: u32) -> bool {
    true
}

fn ancestor_by_d2(_: u32, d2: u32) -> KinshipTerm {
    KinshipTerm::Ancestor {
        generations: d2.saturating_sub(1),
    }
}

fn descendant_by_d1(d1: u32, _: u32) -> KinshipTerm {
    KinshipTerm::Descendant {
        generations: d1.saturating_sub(1),
    }
}

fn aunt_uncle(_: u32, _: u32) -> KinshipTerm {
    KinshipTerm::AuntUncle
}

fn niece_nephew(_: u32, _: u32) -> KinshipTerm {
    KinshipTerm::NieceNephew
}

fn cousin(d1: u32, _: u32) -> KinshipTerm {
    KinshipTerm::Cousin { degree: d1 - 1 }
}

fn removed_cousin(d1: u32, d2: u32) -> KinshipTerm {
    KinshipTerm::RemovedCousin {
        degree: d1.min(d2) - 1,
        removal: d1.abs_diff(d2),
    }
}

fn distant_relative(_: u32, _: u32) -> KinshipTerm {
    KinshipTerm::DistantRelative
}

/// Distance patterns in precedence order. The last entry always matches.
///
/// A sibling of a distant ancestor (`d1 == 1, d2 > 2`) is named with the
/// ancestor-style term for `d2 - 1`; its mirror uses the descendant-style
/// term for `d1 - 1`.
pub const DISTANCE_RULES: &[DistanceRule] = &[
    DistanceRule {
        name: "direct ancestor",
        matches: a_is_ancestor,
        term: ancestor_by_d2,
    },
    DistanceRule {
        name: "direct descendant",
        matches: b_is_ancestor,
        term: descendant_by_d1,
    },
    DistanceRule {
        name: "sibling of ancestor",
        matches: a_is_sibling_of_distant_ancestor,
        term: ancestor_by_d2,
    },
    DistanceRule {
        name: "descendant of sibling",
        matches: b_is_sibling_of_distant_ancestor,
        term: descendant_by_d1,
    },
    DistanceRule {
        name: "aunt/uncle",
        matches: a_is_aunt_uncle,
        term: aunt_uncle,
    },
    DistanceRule {
        name: "niece/nephew",
        matches: a_is_niece_nephew,
        term: niece_nephew,
    },
    DistanceRule {
        name: "cousin",
        matches: same_generation_cousins,
        term: cousin,
    },
    DistanceRule {
        name: "removed cousin",
        matches: removed_cousins,
        term: removed_cousin,
    },
    DistanceRule {
        name: "distant relative",
        matches: always,
        term: distant_relative,
    },
];

/// Maps the distances to the closest common ancestor onto a term.
pub fn derive_term(d1: u32, d2: u32) -> KinshipTerm {
    DISTANCE_RULES
        .iter()
        .find(|rule| (rule.matches)(d1, d2))
        .map_or(KinshipTerm::DistantRelative, |rule| {
            trace!(d1, d2, rule = rule.name, "distance rule matched");
            (rule.term)(d1, d2)
        })
}

// ---------------------------------------------------------------------------
// classify
// ---------------------------------------------------------------------------

/// Classifies how the person with id `a` relates to the person with id `b`
/// ("A is B's ...").
///
/// Never fails: unknown ids yield [`KinshipTerm::Unknown`], unconnected
/// people [`KinshipTerm::NotRelated`]. Identical ids are
/// [`KinshipTerm::SelfPerson`] even if the id is not in the graph.
pub fn classify(graph: &KinshipGraph, a: &str, b: &str) -> KinshipTerm {
    if a.trim() == b.trim() {
        return KinshipTerm::SelfPerson;
    }
    match (graph.node_index(a), graph.node_index(b)) {
        (Some(ia), Some(ib)) => classify_nodes(graph, ia, ib),
        _ => KinshipTerm::Unknown,
    }
}

/// [`classify`] on resolved nodes.
pub fn classify_nodes(graph: &KinshipGraph, a: NodeIndex, b: NodeIndex) -> KinshipTerm {
    if a == b {
        return KinshipTerm::SelfPerson;
    }
    if let Some(term) = direct_term(graph, a, b) {
        return term;
    }
    match common_ancestors(graph, a, b).first() {
        Some(closest) => derive_term(closest.distance_a, closest.distance_b),
        None => KinshipTerm::NotRelated,
    }
}
