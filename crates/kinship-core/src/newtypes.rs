/// Validated identifier newtypes.
///
/// Person identifiers arrive from upstream exports in mixed shapes: most rows
/// carry a string, some spreadsheet exports carry a bare number. [`PersonId`]
/// normalises both into one canonical string so that `"12"`, `12` and `12.0`
/// all index the same person. Row fields read ids through
/// [`deserialize_optional_person_id`], which maps blank cells to `None`.
use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Error returned when a string fails newtype validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewtypeError {
    /// The input did not match the expected format.
    InvalidFormat {
        /// Name of the type that rejected the input.
        type_name: &'static str,
        /// A human-readable description of the expected format.
        expected: &'static str,
        /// The input that was rejected.
        got: String,
    },
}

impl fmt::Display for NewtypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat {
                type_name,
                expected,
                got,
            } => write!(f, "invalid {type_name}: expected {expected}, got {got:?}"),
        }
    }
}

impl std::error::Error for NewtypeError {}

// ---------------------------------------------------------------------------
// PersonId
// ---------------------------------------------------------------------------

/// Canonical person identifier: a non-empty, whitespace-trimmed string.
///
/// Identifiers are opaque; two ids are the same person iff their canonical
/// strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(String);

impl PersonId {
    /// Returns the canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_float(v: f64) -> Result<Self, NewtypeError> {
        if !v.is_finite() {
            return Err(NewtypeError::InvalidFormat {
                type_name: "PersonId",
                expected: "finite number",
                got: v.to_string(),
            });
        }
        // Spreadsheet exports render integral ids as `12.0`.
        if v.fract() == 0.0 {
            Ok(Self(format!("{v:.0}")))
        } else {
            Ok(Self(v.to_string()))
        }
    }
}

impl TryFrom<&str> for PersonId {
    type Error = NewtypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Err(NewtypeError::InvalidFormat {
                type_name: "PersonId",
                expected: "non-empty string or number",
                got: s.to_owned(),
            })
        } else {
            Ok(Self(trimmed.to_owned()))
        }
    }
}

impl From<u64> for PersonId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl From<i64> for PersonId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl Deref for PersonId {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PersonId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for PersonId {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PersonId {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        struct PersonIdVisitor;

        impl de::Visitor<'_> for PersonIdVisitor {
            type Value = PersonId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a person identifier (string or number)")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                PersonId::try_from(v).map_err(de::Error::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(PersonId::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(PersonId::from(v))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                PersonId::from_float(v).map_err(de::Error::custom)
            }
        }

        d.deserialize_any(PersonIdVisitor)
    }
}

/// Reads an id cell that may be blank.
///
/// `null`, a blank string and (with `#[serde(default)]`) a missing key all
/// give `None`, so one bad row never rejects the whole document. Use with
/// `#[serde(deserialize_with = "deserialize_optional_person_id")]`.
///
/// # Errors
///
/// Fails only on values that cannot be an id at all, such as arrays.
pub fn deserialize_optional_person_id<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<PersonId>, D::Error> {
    struct OptionalPersonIdVisitor;

    impl<'de> de::Visitor<'de> for OptionalPersonIdVisitor {
        type Value = Option<PersonId>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a person identifier, blank string or null")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<Self::Value, D2::Error> {
            d.deserialize_any(self)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(PersonId::try_from(v).ok())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(PersonId::from(v)))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(PersonId::from(v)))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            PersonId::from_float(v).map(Some).map_err(de::Error::custom)
        }
    }

    d.deserialize_option(OptionalPersonIdVisitor)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
