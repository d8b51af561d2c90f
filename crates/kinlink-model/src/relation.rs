//! Symmetric adjacency of related people.

use indexmap::IndexMap;
use serde::Serialize;

use crate::person::DisplayName;

/// Mapping from a [`DisplayName`] to the names it is related to.
///
/// Iteration follows key insertion order; each value list keeps the order in
/// which relations were appended. Two maps are equal only when their entries
/// match in that order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct RelationMap {
    entries: IndexMap<DisplayName, Vec<DisplayName>>,
}

impl RelationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value list for `name`, inserting an empty one at the end if absent.
    pub fn entry_or_default(&mut self, name: &DisplayName) -> &mut Vec<DisplayName> {
        self.entries.entry(name.clone()).or_default()
    }

    pub fn get(&self, name: &str) -> Option<&[DisplayName]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// True when `other` appears in the value list of `name`.
    pub fn is_related(&self, name: &str, other: &str) -> bool {
        self.get(name)
            .is_some_and(|related| related.iter().any(|candidate| candidate.as_str() == other))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DisplayName, &[DisplayName])> {
        self.entries
            .iter()
            .map(|(name, related)| (name, related.as_slice()))
    }

    /// Drop every key whose value list is empty, keeping the order of the rest.
    ///
    /// Returns the number of keys removed.
    pub fn prune_empty(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, related| !related.is_empty());
        before - self.entries.len()
    }
}

impl PartialEq for RelationMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for RelationMap {}

impl<'a> IntoIterator for &'a RelationMap {
    type Item = (&'a DisplayName, &'a [DisplayName]);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
