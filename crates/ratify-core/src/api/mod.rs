//! Review service contract.
//!
//! The core consumes exactly two remote operations: fetching the full queue
//! of unverified messages and confirming a final label for one of them.
//! Confirmation is not idempotent on the service side, so callers issue it
//! at most once per reviewer decision and never retry.

mod http;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::Result;
use crate::model::{ConfirmationRequest, MessageId, UnverifiedItem};

pub use http::HttpReviewApi;

/// Remote operations the review queue depends on.
#[async_trait]
pub trait ReviewApi: Send + Sync {
    /// Fetch every message still awaiting review.
    async fn fetch_unverified_queue(&self) -> Result<Vec<UnverifiedItem>>;

    /// Persist the final label for a message.
    async fn confirm_label(&self, id: &MessageId, label: &str) -> Result<()>;
}

/// Send one confirmation and log its outcome.
///
/// Failures are reported here and handed back unchanged; there is no retry.
///
/// # Errors
///
/// Returns whatever the review service reported.
pub async fn confirm<A: ReviewApi + ?Sized>(api: &A, request: &ConfirmationRequest) -> Result<()> {
    match api.confirm_label(&request.id, &request.label).await {
        Ok(()) => {
            info!(
                id = %request.id,
                label = %request.label,
                decision = request.decision.as_str(),
                "Confirmed message label"
            );
            Ok(())
        }
        Err(e) => {
            warn!(
                id = %request.id,
                decision = request.decision.as_str(),
                error = %e,
                "Failed to confirm message label"
            );
            Err(e)
        }
    }
}
