//! [`Metadata`]: the top-level label → value mapping attached to a transaction.

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::MetadataValue;

/// Transaction metadata: an unordered mapping from `u64` labels to values.
///
/// Iteration is in ascending label order, which is also the canonical
/// order of the top-level map on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Metadata {
    entries: BTreeMap<u64, MetadataValue>,
}

impl Metadata {
    pub fn new(entries: BTreeMap<u64, MetadataValue>) -> Self {
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, label: u64) -> Option<&MetadataValue> {
        self.entries.get(&label)
    }

    pub fn insert(&mut self, label: u64, value: MetadataValue) -> Option<MetadataValue> {
        self.entries.insert(label, value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, u64, MetadataValue> {
        self.entries.iter()
    }

    pub fn as_map(&self) -> &BTreeMap<u64, MetadataValue> {
        &self.entries
    }

    pub fn into_map(self) -> BTreeMap<u64, MetadataValue> {
        self.entries
    }

    /// Combine two metadata sets.
    ///
    /// Labels present on only one side pass through unchanged; `resolve` is
    /// called with `(left, right)` only for labels present on both.
    pub fn merge_with<F>(self, other: Metadata, mut resolve: F) -> Metadata
    where
        F: FnMut(MetadataValue, MetadataValue) -> MetadataValue,
    {
        let mut entries = self.entries;
        for (label, right) in other.entries {
            let value = match entries.remove(&label) {
                Some(left) => resolve(left, right),
                None => right,
            };
            entries.insert(label, value);
        }
        Metadata { entries }
    }

    /// Left-biased union: on a label collision the value from `self` wins.
    pub fn union(self, other: Metadata) -> Metadata {
        self.merge_with(other, |left, _| left)
    }
}

impl From<BTreeMap<u64, MetadataValue>> for Metadata {
    fn from(entries: BTreeMap<u64, MetadataValue>) -> Self {
        Self::new(entries)
    }
}

impl FromIterator<(u64, MetadataValue)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (u64, MetadataValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(u64, MetadataValue)> for Metadata {
    fn extend<I: IntoIterator<Item = (u64, MetadataValue)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for Metadata {
    type Item = (u64, MetadataValue);
    type IntoIter = btree_map::IntoIter<u64, MetadataValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Metadata {
    type Item = (&'a u64, &'a MetadataValue);
    type IntoIter = btree_map::Iter<'a, u64, MetadataValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
