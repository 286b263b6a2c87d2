use super::ids::CapabilityId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The capabilities chosen in one wizard session. Membership only.
///
/// Only the resolver changes a selection; it always hands back a new value
/// so a rejected toggle cannot leave a half-applied set behind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeSet<CapabilityId>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Members in ID order.
    pub fn iter(&self) -> impl Iterator<Item = &CapabilityId> {
        self.0.iter()
    }

    pub(crate) fn with(&self, id: CapabilityId) -> Self {
        let mut next = self.0.clone();
        next.insert(id);
        Self(next)
    }

    pub(crate) fn without(&self, id: &str) -> Self {
        let mut next = self.0.clone();
        next.remove(id);
        Self(next)
    }
}

impl<C: Into<CapabilityId>> FromIterator<C> for Selection {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a CapabilityId;
    type IntoIter = std::collections::btree_set::Iter<'a, CapabilityId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
