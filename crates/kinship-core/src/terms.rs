/// The closed vocabulary of kinship terms.
///
/// Each [`KinshipTerm`] renders (via `Display`) and serializes as its
/// human-readable label, e.g. `"great-grandparent"` or
/// `"2nd cousin 1x removed"`.
use std::fmt;

use serde::{Serialize, Serializer};

/// A kinship term relating person A to person B ("A is B's ...").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KinshipTerm {
    /// A and B are the same person.
    SelfPerson,
    /// A spouse pointer links the two.
    Spouse,
    /// A is B's parent.
    Parent,
    /// A is B's child.
    Child,
    /// A and B share at least one parent.
    Sibling,
    /// A is B's ancestor `generations` levels above a parent
    /// (1 = grandparent, 2 = great-grandparent, ...).
    Ancestor {
        /// Generations above parent.
        generations: u32,
    },
    /// A is B's descendant `generations` levels below a child
    /// (1 = grandchild, 2 = great-grandchild, ...).
    Descendant {
        /// Generations below child.
        generations: u32,
    },
    /// A is a sibling of B's parent.
    AuntUncle,
    /// A is a child of B's sibling.
    NieceNephew,
    /// Same-generation cousins (1 = first cousin).
    Cousin {
        /// Cousin degree.
        degree: u32,
    },
    /// Cousins at unequal distance from their closest common ancestor.
    RemovedCousin {
        /// Cousin degree, taken from the nearer side.
        degree: u32,
        /// Generational offset between the two.
        removal: u32,
    },
    /// No shared ancestor and no direct link.
    NotRelated,
    /// At least one of the two ids is not in the graph.
    Unknown,
    /// Shared ancestry that no naming rule covers.
    DistantRelative,
}

/// Ordinal label for `n`.
///
/// 1 through 3 come from an explicit table; anything larger uses a plain
/// `th` suffix, so 21 renders as `"21th"`.
pub fn ordinal(n: u32) -> String {
    match n {
        1 => "1st".to_owned(),
        2 => "2nd".to_owned(),
        3 => "3rd".to_owned(),
        _ => format!("{n}th"),
    }
}

fn write_generational(
    f: &mut fmt::Formatter<'_>,
    generations: u32,
    base: &str,
    grand: &str,
) -> fmt::Result {
    if generations == 0 {
        return f.write_str(base);
    }
    for _ in 1..generations {
        f.write_str("great-")?;
    }
    f.write_str(grand)
}

fn write_cousin_degree(f: &mut fmt::Formatter<'_>, degree: u32) -> fmt::Result {
    if degree <= 1 {
        f.write_str("cousin")
    } else {
        write!(f, "{} cousin", ordinal(degree))
    }
}

impl fmt::Display for KinshipTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            KinshipTerm::SelfPerson => f.write_str("self"),
            KinshipTerm::Spouse => f.write_str("spouse"),
            KinshipTerm::Parent => f.write_str("parent"),
            KinshipTerm::Child => f.write_str("child"),
            KinshipTerm::Sibling => f.write_str("sibling"),
            KinshipTerm::Ancestor { generations } => {
                write_generational(f, generations, "parent", "grandparent")
            }
            KinshipTerm::Descendant { generations } => {
                write_generational(f, generations, "child", "grandchild")
            }
            KinshipTerm::AuntUncle => f.write_str("aunt/uncle"),
            KinshipTerm::NieceNephew => f.write_str("niece/nephew"),
            KinshipTerm::Cousin { degree } => write_cousin_degree(f, degree),
            KinshipTerm::RemovedCousin { degree, removal } => {
                write_cousin_degree(f, degree)?;
                write!(f, " {removal}x removed")
            }
            KinshipTerm::NotRelated => f.write_str("not related"),
            KinshipTerm::Unknown => f.write_str("unknown"),
            KinshipTerm::DistantRelative => f.write_str("distant relative"),
        }
    }
}

impl Serialize for KinshipTerm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
