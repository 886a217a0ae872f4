//! Resolution state machine.

use std::collections::{HashMap, VecDeque};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::model::{ConfirmationRequest, Decision, InferredLabel, MessageId};
use crate::queue::QueueStore;

/// Where an item is in its resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    /// No decision yet; accept and reject are available.
    Unresolved,
    /// The correction dialog is open for this item.
    AwaitingCorrection,
    /// A confirmation call is in flight.
    Confirming,
    /// Confirmed, waiting for the removal slot.
    AwaitingRemoval,
    /// Holding the removal slot.
    Removing,
}

impl ItemStatus {
    /// Lowercase name used in logs and errors.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unresolved => "unresolved",
            Self::AwaitingCorrection => "awaiting correction",
            Self::Confirming => "confirming",
            Self::AwaitingRemoval => "awaiting removal",
            Self::Removing => "removing",
        }
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reviewer actions the controller refuses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// The id is not in the queue.
    #[error("No queued item with id {0}")]
    UnknownItem(MessageId),

    /// The item already has an operation pending.
    #[error("Item {id} is {status}")]
    ItemBusy {
        /// Item the action targeted.
        id: MessageId,
        /// Its current status.
        status: ItemStatus,
    },

    /// A correction was confirmed with no dialog open.
    #[error("No item is selected for correction")]
    NoSelection,

    /// The single correction slot is waiting on the service.
    #[error("Correction for {0} is still being confirmed")]
    CorrectionInFlight(MessageId),

    /// The corrected label was empty.
    #[error("Corrected label cannot be blank")]
    BlankLabel,
}

/// The item the correction dialog is open for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Selected item.
    pub id: MessageId,
    /// Its inferred label, shown in the dialog.
    pub current_inference: InferredLabel,
}

/// Drives reviewer decisions through confirmation and removal.
///
/// Holds only resolution bookkeeping. The queue itself lives in the
/// [`QueueStore`] passed to each call.
#[derive(Debug, Default)]
pub struct ResolutionController {
    /// Confirmations sent and not yet answered.
    in_flight: HashMap<MessageId, ConfirmationRequest>,
    /// Dialog selection, `Some` while the dialog is open.
    selection: Option<Selection>,
    /// Correction sent from the dialog and not yet answered.
    correction_in_flight: Option<MessageId>,
    /// Confirmed items waiting for the store's removal slot.
    removal_backlog: VecDeque<MessageId>,
}

impl ResolutionController {
    /// Create a controller with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status of an item.
    #[must_use]
    pub fn status(&self, store: &QueueStore, id: &MessageId) -> ItemStatus {
        if store.removing() == Some(id) {
            ItemStatus::Removing
        } else if self.removal_backlog.contains(id) {
            ItemStatus::AwaitingRemoval
        } else if self.in_flight.contains_key(id) {
            ItemStatus::Confirming
        } else if self.selection.as_ref().is_some_and(|s| &s.id == id) {
            ItemStatus::AwaitingCorrection
        } else {
            ItemStatus::Unresolved
        }
    }

    /// Check whether accept/reject should be offered for an item.
    #[must_use]
    pub fn is_actionable(&self, store: &QueueStore, id: &MessageId) -> bool {
        store.contains(id) && self.status(store, id) == ItemStatus::Unresolved
    }

    /// Item the correction dialog is open for.
    #[must_use]
    pub const fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Check whether the correction dialog is open.
    #[must_use]
    pub const fn is_dialog_open(&self) -> bool {
        self.selection.is_some()
    }

    /// Number of confirmation calls awaiting an answer.
    #[must_use]
    pub fn pending_confirmations(&self) -> usize {
        self.in_flight.len()
    }

    fn ensure_unresolved(&self, store: &QueueStore, id: &MessageId) -> Result<(), ResolutionError> {
        match self.status(store, id) {
            ItemStatus::Unresolved => Ok(()),
            status => Err(ResolutionError::ItemBusy {
                id: id.clone(),
                status,
            }),
        }
    }

    /// Ratify an item's inferred label.
    ///
    /// Returns the confirmation to send. An `Unknown` inference is sent as
    /// the empty string.
    ///
    /// # Errors
    ///
    /// Refuses unknown ids and items that are not `Unresolved`.
    pub fn accept(
        &mut self,
        store: &QueueStore,
        id: &MessageId,
    ) -> Result<ConfirmationRequest, ResolutionError> {
        let item = store
            .get(id)
            .ok_or_else(|| ResolutionError::UnknownItem(id.clone()))?;
        self.ensure_unresolved(store, id)?;

        let request = ConfirmationRequest {
            id: id.clone(),
            label: item.inferred_label.confirmation_value().to_string(),
            decision: Decision::Accepted,
        };
        self.in_flight.insert(id.clone(), request.clone());
        debug!(%id, label = %request.label, "Accepting inferred label");
        Ok(request)
    }

    /// Open the correction dialog for an item.
    ///
    /// Re-requesting the selected item is a no-op. While the dialog is open
    /// for another item that selection is replaced.
    ///
    /// # Errors
    ///
    /// Refused while a correction is being confirmed, for unknown ids, and
    /// for items that are not `Unresolved`.
    pub fn request_correction(
        &mut self,
        store: &QueueStore,
        id: &MessageId,
    ) -> Result<&Selection, ResolutionError> {
        if let Some(busy) = &self.correction_in_flight {
            return Err(ResolutionError::CorrectionInFlight(busy.clone()));
        }
        let item = store
            .get(id)
            .ok_or_else(|| ResolutionError::UnknownItem(id.clone()))?;

        let already_selected = self.selection.as_ref().is_some_and(|s| &s.id == id);
        if !already_selected {
            self.ensure_unresolved(store, id)?;
            if let Some(previous) = &self.selection {
                debug!(previous = %previous.id, %id, "Replacing correction selection");
            }
            self.selection = Some(Selection {
                id: id.clone(),
                current_inference: item.inferred_label.clone(),
            });
        }

        self.selection.as_ref().ok_or(ResolutionError::NoSelection)
    }

    /// Close the correction dialog without resolving anything.
    pub fn cancel_correction(&mut self) -> Option<Selection> {
        let cancelled = self.selection.take();
        if let Some(selection) = &cancelled {
            debug!(id = %selection.id, "Correction cancelled");
        }
        cancelled
    }

    /// Confirm the dialog with a corrected label.
    ///
    /// Closes the dialog and clears the selection, then returns the
    /// confirmation to send. A blank label keeps the dialog open.
    ///
    /// # Errors
    ///
    /// Returns `NoSelection` with no dialog open, `BlankLabel` for an empty
    /// label, and `UnknownItem` if the selected item has left the queue.
    pub fn confirm_correction(
        &mut self,
        store: &QueueStore,
        label: &str,
    ) -> Result<ConfirmationRequest, ResolutionError> {
        if self.selection.is_none() {
            return Err(ResolutionError::NoSelection);
        }
        let label = label.trim();
        if label.is_empty() {
            return Err(ResolutionError::BlankLabel);
        }
        let selection = self.selection.take().ok_or(ResolutionError::NoSelection)?;
        if !store.contains(&selection.id) {
            return Err(ResolutionError::UnknownItem(selection.id));
        }

        let request = ConfirmationRequest {
            id: selection.id.clone(),
            label: label.to_string(),
            decision: Decision::Corrected,
        };
        self.in_flight.insert(selection.id.clone(), request.clone());
        self.correction_in_flight = Some(selection.id);
        debug!(id = %request.id, label = %request.label, "Sending corrected label");
        Ok(request)
    }

    /// Apply the service's answer to a confirmation.
    ///
    /// On success the item is queued for removal. If the removal slot was
    /// free its removal begins immediately and its id is returned; the caller
    /// waits the settle delay and then calls [`Self::finish_removal`]. On
    /// failure the item simply becomes `Unresolved` again.
    pub fn finish_confirmation<E: std::fmt::Display>(
        &mut self,
        store: &mut QueueStore,
        request: &ConfirmationRequest,
        result: Result<(), E>,
    ) -> Option<MessageId> {
        let id = &request.id;
        if self.in_flight.remove(id).is_none() {
            debug!(%id, "Ignoring answer for a confirmation that is not pending");
            return None;
        }
        if self.correction_in_flight.as_ref() == Some(id) {
            self.correction_in_flight = None;
        }

        if let Err(e) = result {
            warn!(
                %id,
                decision = request.decision.as_str(),
                error = %e,
                "Confirmation failed, item stays in queue"
            );
            return None;
        }

        if !store.contains(id) {
            debug!(%id, "Confirmed item is no longer queued");
            return None;
        }
        self.removal_backlog.push_back(id.clone());
        self.start_next_removal(store)
    }

    /// Finish a removal whose settle delay has elapsed.
    ///
    /// Returns the next confirmed item whose removal started, if any.
    pub fn finish_removal(&mut self, store: &mut QueueStore, id: &MessageId) -> Option<MessageId> {
        if store.complete_removal(id) {
            info!(%id, remaining = store.len(), "Removed resolved item");
        }
        self.start_next_removal(store)
    }

    fn start_next_removal(&mut self, store: &mut QueueStore) -> Option<MessageId> {
        if store.removing().is_some() {
            return None;
        }
        while let Some(next) = self.removal_backlog.pop_front() {
            if store.begin_removal(&next) {
                return Some(next);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UnverifiedItem;

    fn id(s: &str) -> MessageId {
        MessageId::new(s)
    }

    fn store() -> QueueStore {
        QueueStore::with_items(vec![
            UnverifiedItem::new("a", "short", InferredLabel::Known("Shop X".into())),
            UnverifiedItem::new("b", "other", InferredLabel::Unknown),
        ])
    }

    #[test]
    fn test_accept_builds_request_from_inference() {
        let store = store();
        let mut controller = ResolutionController::new();

        let request = controller.accept(&store, &id("a")).unwrap();
        assert_eq!(request.label, "Shop X");
        assert_eq!(request.decision, Decision::Accepted);
        assert_eq!(controller.status(&store, &id("a")), ItemStatus::Confirming);
        assert!(!controller.is_actionable(&store, &id("a")));
    }

    #[test]
    fn test_accept_unknown_sends_empty_label() {
        let store = store();
        let mut controller = ResolutionController::new();

        let request = controller.accept(&store, &id("b")).unwrap();
        assert_eq!(request.label, "");
    }

    #[test]
    fn test_second_action_while_confirming_is_refused() {
        let store = store();
        let mut controller = ResolutionController::new();
        controller.accept(&store, &id("a")).unwrap();

        assert_eq!(
            controller.accept(&store, &id("a")),
            Err(ResolutionError::ItemBusy {
                id: id("a"),
                status: ItemStatus::Confirming
            })
        );
        assert!(matches!(
            controller.request_correction(&store, &id("a")),
            Err(ResolutionError::ItemBusy { .. })
        ));
        assert_eq!(controller.pending_confirmations(), 1);
    }

    #[test]
    fn test_accept_unknown_id() {
        let store = store();
        let mut controller = ResolutionController::new();
        assert_eq!(
            controller.accept(&store, &id("zzz")),
            Err(ResolutionError::UnknownItem(id("zzz")))
        );
    }

    #[test]
    fn test_distinct_items_confirm_independently() {
        let store = store();
        let mut controller = ResolutionController::new();

        controller.accept(&store, &id("a")).unwrap();
        controller.accept(&store, &id("b")).unwrap();
        assert_eq!(controller.pending_confirmations(), 2);
    }

    #[test]
    fn test_failed_accept_returns_to_unresolved() {
        let mut store = store();
        let mut controller = ResolutionController::new();
        let before = store.items().to_vec();

        let request = controller.accept(&store, &id("a")).unwrap();
        let next = controller.finish_confirmation(&mut store, &request, Err("boom"));

        assert_eq!(next, None);
        assert_eq!(store.items(), before.as_slice());
        assert_eq!(store.removing(), None);
        assert_eq!(controller.status(&store, &id("a")), ItemStatus::Unresolved);
    }

    #[test]
    fn test_successful_accept_drives_removal() {
        let mut store = store();
        let mut controller = ResolutionController::new();

        let request = controller.accept(&store, &id("a")).unwrap();
        let removing = controller.finish_confirmation::<String>(&mut store, &request, Ok(()));

        assert_eq!(removing, Some(id("a")));
        assert_eq!(controller.status(&store, &id("a")), ItemStatus::Removing);

        assert_eq!(controller.finish_removal(&mut store, &id("a")), None);
        assert!(!store.contains(&id("a")));
    }

    #[test]
    fn test_removals_wait_for_the_slot() {
        let mut store = store();
        let mut controller = ResolutionController::new();

        let first = controller.accept(&store, &id("a")).unwrap();
        let second = controller.accept(&store, &id("b")).unwrap();

        assert_eq!(
            controller.finish_confirmation::<String>(&mut store, &first, Ok(())),
            Some(id("a"))
        );
        assert_eq!(
            controller.finish_confirmation::<String>(&mut store, &second, Ok(())),
            None
        );
        assert_eq!(controller.status(&store, &id("b")), ItemStatus::AwaitingRemoval);
        assert_eq!(store.removing(), Some(&id("a")));

        assert_eq!(controller.finish_removal(&mut store, &id("a")), Some(id("b")));
        assert_eq!(controller.finish_removal(&mut store, &id("b")), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_correction_flow() {
        let mut store = store();
        let mut controller = ResolutionController::new();

        let selection = controller.request_correction(&store, &id("b")).unwrap();
        assert_eq!(selection.current_inference, InferredLabel::Unknown);
        assert!(controller.is_dialog_open());
        assert_eq!(controller.status(&store, &id("b")), ItemStatus::AwaitingCorrection);

        let request = controller.confirm_correction(&store, "  Shop Y ").unwrap();
        assert_eq!(request.label, "Shop Y");
        assert_eq!(request.decision, Decision::Corrected);
        assert!(!controller.is_dialog_open());
        assert_eq!(controller.selection(), None);

        let removing = controller.finish_confirmation::<String>(&mut store, &request, Ok(()));
        assert_eq!(removing, Some(id("b")));
        controller.finish_removal(&mut store, &id("b"));
        assert!(!store.contains(&id("b")));
    }

    #[test]
    fn test_failed_correction_clears_selection() {
        let mut store = store();
        let mut controller = ResolutionController::new();

        controller.request_correction(&store, &id("a")).unwrap();
        let request = controller.confirm_correction(&store, "Shop Y").unwrap();
        controller.finish_confirmation(&mut store, &request, Err("rejected"));

        assert!(store.contains(&id("a")));
        assert_eq!(controller.selection(), None);
        assert_eq!(controller.status(&store, &id("a")), ItemStatus::Unresolved);
        assert!(controller.request_correction(&store, &id("a")).is_ok());
    }

    #[test]
    fn test_cancel_correction() {
        let store = store();
        let mut controller = ResolutionController::new();

        controller.request_correction(&store, &id("a")).unwrap();
        let cancelled = controller.cancel_correction();

        assert_eq!(cancelled.map(|s| s.id), Some(id("a")));
        assert!(!controller.is_dialog_open());
        assert!(controller.is_actionable(&store, &id("a")));
        assert_eq!(controller.cancel_correction(), None);
    }

    #[test]
    fn test_confirm_without_selection() {
        let store = store();
        let mut controller = ResolutionController::new();
        assert_eq!(
            controller.confirm_correction(&store, "Shop Y"),
            Err(ResolutionError::NoSelection)
        );
    }

    #[test]
    fn test_blank_label_keeps_dialog_open() {
        let store = store();
        let mut controller = ResolutionController::new();
        controller.request_correction(&store, &id("a")).unwrap();

        assert_eq!(
            controller.confirm_correction(&store, "   "),
            Err(ResolutionError::BlankLabel)
        );
        assert!(controller.is_dialog_open());
        assert_eq!(controller.pending_confirmations(), 0);
    }

    #[test]
    fn test_correction_request_refused_while_correction_in_flight() {
        let store = store();
        let mut controller = ResolutionController::new();

        controller.request_correction(&store, &id("a")).unwrap();
        controller.confirm_correction(&store, "Shop Y").unwrap();

        assert_eq!(
            controller.request_correction(&store, &id("b")),
            Err(ResolutionError::CorrectionInFlight(id("a")))
        );
        assert_eq!(controller.selection(), None);
    }

    #[test]
    fn test_open_dialog_selection_is_replaced() {
        let store = store();
        let mut controller = ResolutionController::new();

        controller.request_correction(&store, &id("a")).unwrap();
        controller.request_correction(&store, &id("a")).unwrap();
        let selection = controller.request_correction(&store, &id("b")).unwrap();

        assert_eq!(selection.id, id("b"));
        assert_eq!(controller.status(&store, &id("a")), ItemStatus::Unresolved);
    }

    #[test]
    fn test_accept_refused_while_dialog_open_for_item() {
        let store = store();
        let mut controller = ResolutionController::new();
        controller.request_correction(&store, &id("a")).unwrap();

        assert!(matches!(
            controller.accept(&store, &id("a")),
            Err(ResolutionError::ItemBusy {
                status: ItemStatus::AwaitingCorrection,
                ..
            })
        ));
        assert!(controller.accept(&store, &id("b")).is_ok());
    }

    #[test]
    fn test_stale_answer_is_ignored() {
        let mut store = store();
        let mut controller = ResolutionController::new();
        let request = ConfirmationRequest {
            id: id("a"),
            label: "Shop X".into(),
            decision: Decision::Accepted,
        };

        assert_eq!(
            controller.finish_confirmation::<String>(&mut store, &request, Ok(())),
            None
        );
        assert!(store.contains(&id("a")));
    }
}
