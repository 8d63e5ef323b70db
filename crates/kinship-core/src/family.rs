/// The family document: people plus relationship rows.
///
/// [`FamilyFile`] is what the CLI reads from disk or stdin. It carries no
/// graph structure of its own; [`crate::graph::build_graph`] turns it into a
/// [`crate::graph::KinshipGraph`].
///
/// ```json
/// {
///   "people": [{"id": "1", "first_name": "Basilia"}, {"id": 2, "first_name": "Tomasa"}],
///   "relationships": [{"person1_id": "1", "person2_id": "2", "type": "parent"}]
/// }
/// ```
///
/// Both arrays default to empty. Unknown top-level keys are kept in `extra`.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::structures::{PersonRecord, RelationshipEdge};

/// Top-level family document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilyFile {
    /// Person rows, in source order.
    #[serde(default, alias = "People")]
    pub people: Vec<PersonRecord>,

    /// Relationship rows, in source order.
    #[serde(default, alias = "Relationship", alias = "Relationships")]
    pub relationships: Vec<RelationshipEdge>,

    /// Any other top-level keys.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Error returned by [`parse_family`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FamilyParseError {
    /// The input is not a valid family document.
    Json {
        /// 1-based line of the failure.
        line: usize,
        /// 1-based column of the failure.
        column: usize,
        /// Message from the JSON parser.
        detail: String,
    },
}

impl fmt::Display for FamilyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json {
                line,
                column,
                detail,
            } => write!(f, "invalid family file at line {line}, column {column}: {detail}"),
        }
    }
}

impl std::error::Error for FamilyParseError {}

/// Parses a JSON family document.
///
/// # Errors
///
/// Returns [`FamilyParseError::Json`] when the input is malformed JSON or a
/// cell has an impossible shape, such as an array where an id belongs.
/// Blank or missing ids and types are not errors; the graph builder skips
/// those rows.
pub fn parse_family(input: &str) -> Result<FamilyFile, FamilyParseError> {
    serde_json::from_str(input).map_err(|e| FamilyParseError::Json {
        line: e.line(),
        column: e.column(),
        detail: e.to_string(),
    })
}
