/// Person and relationship row types.
///
/// These are the flat records the data-loading collaborator hands to
/// [`crate::graph::build_graph`]. Field aliases accept the column headers of
/// the family spreadsheets the data is usually exported from (`ID`,
/// `First_Name`, `Person1_ID`, `Relationship_Type`, ...), so an export can be
/// converted to JSON row-by-row without renaming keys.
///
/// Display fields are opaque to the classifier. Any column not declared here
/// lands in `extra` and round-trips unchanged.
///
/// Id and type cells are optional on read. A blank or missing cell is kept as
/// `None` and the graph builder skips the row with a diagnostic.
use serde::{Deserialize, Serialize};

use crate::enums::{RelationshipType, RelationshipTypeTag};
use crate::newtypes::{PersonId, deserialize_optional_person_id};

/// One person row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Unique identifier, compared as a canonical string. `None` when the
    /// cell was blank.
    #[serde(
        default,
        alias = "ID",
        alias = "Id",
        deserialize_with = "deserialize_optional_person_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<PersonId>,

    /// Given name, used when rendering relationship descriptions.
    #[serde(
        default,
        alias = "First_Name",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_name: Option<String>,

    /// Family name.
    #[serde(default, alias = "Last_Name", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Every other column.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PersonRecord {
    /// Creates a record with only an identifier.
    pub fn new(id: PersonId) -> Self {
        Self {
            id: Some(id),
            first_name: None,
            last_name: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Sets the given name.
    #[must_use]
    pub fn with_first_name(mut self, name: impl Into<String>) -> Self {
        self.first_name = Some(name.into());
        self
    }

    /// Sets the family name.
    #[must_use]
    pub fn with_last_name(mut self, name: impl Into<String>) -> Self {
        self.last_name = Some(name.into());
        self
    }

    /// The name shown in descriptions: the first name when present and
    /// non-blank, otherwise the identifier.
    pub fn display_name(&self) -> &str {
        match self.first_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            Some(_) | None => self.id.as_deref().unwrap_or_default(),
        }
    }

    /// First and last name joined by a space, skipping blanks; falls back to
    /// the identifier.
    pub fn full_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            self.id.as_deref().unwrap_or_default().to_owned()
        } else {
            parts.join(" ")
        }
    }
}

/// One relationship row: `(person1, person2, type)`.
///
/// `parent` means person1 is a parent of person2; `child` reverses the roles;
/// `spouse` is symmetric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipEdge {
    /// First endpoint.
    #[serde(
        default,
        alias = "Person1_ID",
        alias = "person1",
        deserialize_with = "deserialize_optional_person_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub person1_id: Option<PersonId>,

    /// Second endpoint.
    #[serde(
        default,
        alias = "Person2_ID",
        alias = "person2",
        deserialize_with = "deserialize_optional_person_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub person2_id: Option<PersonId>,

    /// Edge type, case-insensitive on input.
    #[serde(
        default,
        rename = "type",
        alias = "relationship_type",
        alias = "Relationship_Type",
        skip_serializing_if = "Option::is_none"
    )]
    pub relationship_type: Option<RelationshipTypeTag>,
}

impl RelationshipEdge {
    /// Creates an edge of a known type.
    pub fn new(person1_id: PersonId, person2_id: PersonId, kind: RelationshipType) -> Self {
        Self {
            person1_id: Some(person1_id),
            person2_id: Some(person2_id),
            relationship_type: Some(RelationshipTypeTag::Known(kind)),
        }
    }

    /// `parent` is a parent of `child`.
    pub fn parent(parent: PersonId, child: PersonId) -> Self {
        Self::new(parent, child, RelationshipType::Parent)
    }

    /// `a` and `b` are married.
    pub fn spouse(a: PersonId, b: PersonId) -> Self {
        Self::new(a, b, RelationshipType::Spouse)
    }
}
