//! Queue store implementation.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::api::ReviewApi;
use crate::model::{MessageId, UnverifiedItem};

/// What the queue currently has to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueStatus {
    /// The initial load has not settled yet.
    Loading,
    /// Nothing left to review. Also the state after a failed load.
    Empty,
    /// This many items remain.
    Populated(usize),
}

/// Unresolved items plus their transient UI projections.
#[derive(Debug, Clone, Default)]
pub struct QueueStore {
    items: Vec<UnverifiedItem>,
    expanded: HashSet<MessageId>,
    removing: Option<MessageId>,
    loading: bool,
}

impl QueueStore {
    /// Create an empty store that is not loading.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a snapshot.
    ///
    /// Duplicate ids are dropped, keeping the first occurrence.
    #[must_use]
    pub fn with_items(items: Vec<UnverifiedItem>) -> Self {
        let mut store = Self::new();
        store.replace(items);
        store
    }

    /// Mark the start of a load.
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Settle a load with the service's answer.
    ///
    /// Success replaces the whole queue. Failure leaves an empty queue.
    /// Either way the loading flag is cleared.
    pub fn finish_load<E: std::fmt::Display>(&mut self, result: Result<Vec<UnverifiedItem>, E>) {
        match result {
            Ok(items) => {
                self.replace(items);
                info!(count = self.items.len(), "Loaded unverified queue");
            }
            Err(e) => {
                warn!(error = %e, "Failed to load unverified queue");
                self.replace(Vec::new());
            }
        }
        self.loading = false;
    }

    /// Fetch the queue from the review service and replace the snapshot.
    ///
    /// Returns the number of items now held.
    pub async fn load<A: ReviewApi + ?Sized>(&mut self, api: &A) -> usize {
        self.begin_load();
        let result = api.fetch_unverified_queue().await;
        self.finish_load(result);
        self.items.len()
    }

    fn replace(&mut self, items: Vec<UnverifiedItem>) {
        let mut seen = HashSet::with_capacity(items.len());
        self.items = items
            .into_iter()
            .filter(|item| {
                let fresh = seen.insert(item.id.clone());
                if !fresh {
                    warn!(id = %item.id, "Dropping duplicate item from queue snapshot");
                }
                fresh
            })
            .collect();
        self.expanded.clear();
        self.removing = None;
    }

    /// Flip whether an item's full text is shown.
    ///
    /// Ids not in the queue are ignored. Returns the new membership.
    pub fn toggle_expand(&mut self, id: &MessageId) -> bool {
        if !self.contains(id) {
            debug!(%id, "Ignoring expand toggle for unknown item");
            return false;
        }
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.clone());
            true
        }
    }

    /// Claim the removal slot for an item.
    ///
    /// Refused (returns `false`) while another removal is in progress or when
    /// the id is not in the queue.
    pub fn begin_removal(&mut self, id: &MessageId) -> bool {
        if let Some(current) = &self.removing {
            debug!(%id, removing = %current, "Removal slot busy");
            return false;
        }
        if !self.contains(id) {
            debug!(%id, "Ignoring removal of unknown item");
            return false;
        }
        self.removing = Some(id.clone());
        true
    }

    /// Drop an item whose removal was started and free the slot.
    ///
    /// Refused (returns `false`) unless `id` holds the removal slot.
    pub fn complete_removal(&mut self, id: &MessageId) -> bool {
        if self.removing.as_ref() != Some(id) {
            debug!(%id, "Ignoring completion of a removal that was not started");
            return false;
        }
        self.items.retain(|item| &item.id != id);
        self.expanded.remove(id);
        self.removing = None;
        true
    }

    /// Items still awaiting review, in load order.
    #[must_use]
    pub fn items(&self) -> &[UnverifiedItem] {
        &self.items
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: &MessageId) -> Option<&UnverifiedItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Check whether an item is still queued.
    #[must_use]
    pub fn contains(&self, id: &MessageId) -> bool {
        self.get(id).is_some()
    }

    /// Check whether an item's full text is shown.
    #[must_use]
    pub fn is_expanded(&self, id: &MessageId) -> bool {
        self.expanded.contains(id)
    }

    /// Item holding the removal slot, if any.
    #[must_use]
    pub const fn removing(&self) -> Option<&MessageId> {
        self.removing.as_ref()
    }

    /// Check whether a load is in progress.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Number of queued items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether no items are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current display condition. Loading wins over emptiness.
    #[must_use]
    pub fn status(&self) -> QueueStatus {
        if self.loading {
            QueueStatus::Loading
        } else if self.items.is_empty() {
            QueueStatus::Empty
        } else {
            QueueStatus::Populated(self.items.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InferredLabel;

    fn item(id: &str) -> UnverifiedItem {
        UnverifiedItem::new(id, format!("message {id}"), InferredLabel::Known("Shop X".into()))
    }

    fn id(s: &str) -> MessageId {
        MessageId::new(s)
    }

    #[test]
    fn test_new_store_is_empty_not_loading() {
        let store = QueueStore::new();
        assert_eq!(store.status(), QueueStatus::Empty);
        assert!(!store.is_loading());
    }

    #[test]
    fn test_load_lifecycle() {
        let mut store = QueueStore::new();
        store.begin_load();
        assert_eq!(store.status(), QueueStatus::Loading);

        store.finish_load::<String>(Ok(vec![item("a"), item("b")]));
        assert_eq!(store.status(), QueueStatus::Populated(2));
        assert!(!store.is_loading());
    }

    #[test]
    fn test_failed_load_yields_empty_queue() {
        let mut store = QueueStore::with_items(vec![item("a")]);
        store.begin_load();
        store.finish_load::<&str>(Err("connection refused"));

        assert!(store.is_empty());
        assert!(!store.is_loading());
        assert_eq!(store.status(), QueueStatus::Empty);
    }

    #[test]
    fn test_load_replaces_and_resets_projections() {
        let mut store = QueueStore::with_items(vec![item("a"), item("b")]);
        store.toggle_expand(&id("a"));
        assert!(store.begin_removal(&id("b")));

        store.finish_load::<String>(Ok(vec![item("a"), item("c")]));

        let ids: Vec<_> = store.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert!(!store.is_expanded(&id("a")));
        assert_eq!(store.removing(), None);
    }

    #[test]
    fn test_duplicate_ids_are_dropped() {
        let mut first = item("a");
        first.text = "first".into();
        let mut second = item("a");
        second.text = "second".into();

        let store = QueueStore::with_items(vec![first, item("b"), second]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&id("a")).map(|i| i.text.as_str()), Some("first"));
    }

    #[test]
    fn test_toggle_expand_twice_restores() {
        let mut store = QueueStore::with_items(vec![item("a")]);

        assert!(store.toggle_expand(&id("a")));
        assert!(store.is_expanded(&id("a")));
        assert!(!store.toggle_expand(&id("a")));
        assert!(!store.is_expanded(&id("a")));
    }

    #[test]
    fn test_toggle_expand_ignores_stale_id() {
        let mut store = QueueStore::with_items(vec![item("a")]);
        assert!(!store.toggle_expand(&id("gone")));
        assert!(!store.is_expanded(&id("gone")));
    }

    #[test]
    fn test_single_removal_slot() {
        let mut store = QueueStore::with_items(vec![item("a"), item("b")]);

        assert!(store.begin_removal(&id("a")));
        assert!(!store.begin_removal(&id("b")));
        assert_eq!(store.removing(), Some(&id("a")));

        assert!(store.complete_removal(&id("a")));
        assert_eq!(store.removing(), None);
        assert!(store.begin_removal(&id("b")));
    }

    #[test]
    fn test_complete_removal_requires_matching_begin() {
        let mut store = QueueStore::with_items(vec![item("a"), item("b")]);

        assert!(!store.complete_removal(&id("a")));
        assert!(store.begin_removal(&id("a")));
        assert!(!store.complete_removal(&id("b")));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_removing_last_item_reports_empty() {
        let mut store = QueueStore::with_items(vec![item("a")]);
        store.toggle_expand(&id("a"));

        store.begin_removal(&id("a"));
        assert_eq!(store.status(), QueueStatus::Populated(1));
        store.complete_removal(&id("a"));

        assert_eq!(store.status(), QueueStatus::Empty);
        assert!(!store.is_expanded(&id("a")));
    }

    #[test]
    fn test_begin_removal_of_unknown_item() {
        let mut store = QueueStore::with_items(vec![item("a")]);
        assert!(!store.begin_removal(&id("zzz")));
        assert_eq!(store.removing(), None);
    }
}
