/// Relationship edge types accepted from the data-loading layer.
///
/// Upstream rows spell the type freely (`"Parent"`, `" spouse "`, `"CHILD"`),
/// so parsing is case-insensitive and trims whitespace. Unrecognised values
/// are preserved in [`RelationshipTypeTag::Other`] rather than rejected; the
/// graph builder skips them and reports a diagnostic.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The three relationship types the kinship graph understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    /// `person1` is a parent of `person2`.
    Parent,
    /// `person1` is a child of `person2` (sugar for a reversed `Parent`).
    Child,
    /// `person1` and `person2` are married; symmetric.
    Spouse,
}

impl RelationshipType {
    /// Returns the lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            RelationshipType::Parent => "parent",
            RelationshipType::Child => "child",
            RelationshipType::Spouse => "spouse",
        }
    }
}

impl FromStr for RelationshipType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "parent" => Ok(RelationshipType::Parent),
            "child" => Ok(RelationshipType::Child),
            "spouse" => Ok(RelationshipType::Spouse),
            other => Err(other.to_owned()),
        }
    }
}

/// The type field on a relationship row: a known [`RelationshipType`] or the
/// raw string of anything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RelationshipTypeTag {
    /// A relationship type recognised by the builder.
    Known(RelationshipType),
    /// Any other value, kept verbatim (after trimming).
    Other(String),
}

impl RelationshipTypeTag {
    /// Parses a raw type string, case-insensitively.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<RelationshipType>() {
            Ok(known) => RelationshipTypeTag::Known(known),
            Err(_) => RelationshipTypeTag::Other(raw.trim().to_owned()),
        }
    }

    /// Returns the string representation of the tag.
    pub fn as_str(&self) -> &str {
        match self {
            RelationshipTypeTag::Known(t) => t.as_str(),
            RelationshipTypeTag::Other(s) => s.as_str(),
        }
    }

    /// Returns the known type, if any.
    pub fn known(&self) -> Option<RelationshipType> {
        match self {
            RelationshipTypeTag::Known(t) => Some(*t),
            RelationshipTypeTag::Other(_) => None,
        }
    }
}

impl From<RelationshipType> for RelationshipTypeTag {
    fn from(t: RelationshipType) -> Self {
        RelationshipTypeTag::Known(t)
    }
}

impl fmt::Display for RelationshipTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RelationshipTypeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RelationshipTypeTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(RelationshipTypeTag::parse(&raw))
    }
}
