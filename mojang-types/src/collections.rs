//! Ordered result collections.
//!
//! Both collections are append-only: items go in through `add` and are only
//! ever reordered afterwards. Sorts work in place and hand back `&mut Self`
//! so calls can be chained.

use crate::models::{NameHistoryEntry, ServiceStatus};
use serde::Serialize;
use tracing::trace;

/// Statuses of the Mojang services, in the order the status host listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ServiceStatusCollection {
    items: Vec<ServiceStatus>,
}

impl ServiceStatusCollection {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, item: ServiceStatus) {
        self.items.push(item);
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ServiceStatus> {
        self.items.iter()
    }

    /// Look up a service by its exact name.
    pub fn get(&self, name: &str) -> Option<&ServiceStatus> {
        self.items.iter().find(|s| s.name() == name)
    }

    /// Byte-wise lexicographic sort on the service name.
    pub fn sort_by_name(&mut self, descending: bool) -> &mut Self {
        trace!(descending, count = self.items.len(), "sorting services by name");
        if descending {
            self.items.sort_by(|a, b| b.name().cmp(a.name()));
        } else {
            self.items.sort_by(|a, b| a.name().cmp(b.name()));
        }
        self
    }

    /// Sort on severity: green, then yellow, then red.
    ///
    /// Entries whose status is not one of the three known values keep their
    /// exact position; only the slots holding known statuses are reordered
    /// among themselves. Descending reverses the whole ascending result.
    pub fn sort_by_status(&mut self, descending: bool) -> &mut Self {
        trace!(descending, count = self.items.len(), "sorting services by status");

        let mut ranked: Vec<ServiceStatus> = self
            .items
            .iter()
            .filter(|s| s.level().is_some())
            .cloned()
            .collect();
        ranked.sort_by_key(ServiceStatus::level);

        for (slot, item) in self
            .items
            .iter_mut()
            .filter(|s| s.level().is_some())
            .zip(ranked)
        {
            *slot = item;
        }

        if descending {
            self.items.reverse();
        }
        self
    }
}

impl<'a> IntoIterator for &'a ServiceStatusCollection {
    type Item = &'a ServiceStatus;
    type IntoIter = std::slice::Iter<'a, ServiceStatus>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for ServiceStatusCollection {
    type Item = ServiceStatus;
    type IntoIter = std::vec::IntoIter<ServiceStatus>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl Extend<ServiceStatus> for ServiceStatusCollection {
    fn extend<I: IntoIterator<Item = ServiceStatus>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl FromIterator<ServiceStatus> for ServiceStatusCollection {
    fn from_iter<I: IntoIterator<Item = ServiceStatus>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Names an account has gone by, in the order the remote returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NameHistoryCollection {
    items: Vec<NameHistoryEntry>,
}

impl NameHistoryCollection {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, item: NameHistoryEntry) {
        self.items.push(item);
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NameHistoryEntry> {
        self.items.iter()
    }

    /// The entry with the latest change time, i.e. the current name.
    pub fn current(&self) -> Option<&NameHistoryEntry> {
        self.items.iter().max_by_key(|e| e.changed_to_at())
    }

    /// Sort on the change timestamp. Descending puts the most recent name
    /// first and the original name (no timestamp) last.
    ///
    /// Entries with equal timestamps compare equal. The sort is stable, so
    /// such ties keep their insertion order.
    pub fn sort_by_changed_to_at(&mut self, descending: bool) -> &mut Self {
        trace!(descending, count = self.items.len(), "sorting name history");
        if descending {
            self.items
                .sort_by(|a, b| b.changed_to_at().cmp(&a.changed_to_at()));
        } else {
            self.items
                .sort_by(|a, b| a.changed_to_at().cmp(&b.changed_to_at()));
        }
        self
    }
}

impl<'a> IntoIterator for &'a NameHistoryCollection {
    type Item = &'a NameHistoryEntry;
    type IntoIter = std::slice::Iter<'a, NameHistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for NameHistoryCollection {
    type Item = NameHistoryEntry;
    type IntoIter = std::vec::IntoIter<NameHistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl Extend<NameHistoryEntry> for NameHistoryCollection {
    fn extend<I: IntoIterator<Item = NameHistoryEntry>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl FromIterator<NameHistoryEntry> for NameHistoryCollection {
    fn from_iter<I: IntoIterator<Item = NameHistoryEntry>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
