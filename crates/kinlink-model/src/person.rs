//! Person records at each stage of the pipeline.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// One data row exactly as read from the source table.
///
/// Arity is not guaranteed until the record has been validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord(Vec<String>);

impl RawRecord {
    pub fn new(fields: Vec<String>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pick the fields at `indices`, in that order.
    ///
    /// Fails with [`ModelError::MalformedRecord`] when any index is out of range.
    pub fn project<const N: usize>(&self, indices: [usize; N]) -> Result<[String; N]> {
        let required = indices.iter().max().map_or(0, |max| max + 1);
        if self.0.len() < required {
            return Err(ModelError::MalformedRecord {
                fields: self.0.len(),
                required,
            });
        }
        Ok(indices.map(|idx| self.0[idx].clone()))
    }
}

impl From<Vec<String>> for RawRecord {
    fn from(fields: Vec<String>) -> Self {
        Self(fields)
    }
}

impl<const N: usize> From<[&str; N]> for RawRecord {
    fn from(fields: [&str; N]) -> Self {
        Self(fields.iter().map(|field| (*field).to_string()).collect())
    }
}

/// A validated `(first_name, last_name)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonKey {
    pub first_name: String,
    pub last_name: String,
}

impl PersonKey {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// The `"First Last"` reporting identity of this person.
    pub fn display_name(&self) -> DisplayName {
        DisplayName(format!("{} {}", self.first_name, self.last_name))
    }
}

/// `"First Last"` string used as both key and value in a [`RelationMap`].
///
/// Distinct [`PersonKey`]s may render to the same display name; that is
/// accepted input and the names are not disambiguated.
///
/// [`RelationMap`]: crate::RelationMap
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DisplayName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for DisplayName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for DisplayName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_joins_with_single_space() {
        let key = PersonKey::new("Mary Ann", "Smith-Jones");
        assert_eq!(key.display_name().as_str(), "Mary Ann Smith-Jones");
    }

    #[test]
    fn project_picks_fields_in_order() {
        let record = RawRecord::from(["a", "b", "c", "d"]);
        let [first, last] = record.project([3, 0]).unwrap();
        assert_eq!(first, "d");
        assert_eq!(last, "a");
    }

    #[test]
    fn project_rejects_short_record() {
        let record = RawRecord::from(["Ann", "Lee"]);
        let err = record.project([0, 1, 9]).unwrap_err();
        assert_eq!(
            err,
            ModelError::MalformedRecord {
                fields: 2,
                required: 10
            }
        );
        assert_eq!(
            err.to_string(),
            "malformed record: 2 fields, at least 10 required"
        );
    }
}
