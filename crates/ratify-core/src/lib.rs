//! # ratify-core
//!
//! Core logic for the `Ratify` review queue.
//!
//! A reviewer works through a queue of messages whose classification was
//! inferred automatically. For each one they either ratify the inferred label
//! or supply a corrected one. Either way exactly one confirmation call is sent
//! to the remote service, and the item leaves the queue once that call
//! succeeds.
//!
//! This crate provides:
//! - **Domain model**: unverified items and their inferred labels
//! - **Queue store**: the loaded snapshot plus the expand/removal projections
//! - **Resolution controller**: the per-item accept/correct state machine
//! - **Review API**: the remote contract and its HTTP implementation
//! - **Configuration**: API endpoint, settle delay and theme
//!
//! ## Example
//!
//! ```ignore
//! use ratify_core::{HttpReviewApi, QueueStore, ResolutionController, ReviewConfig, confirm};
//!
//! let config = ReviewConfig::load().await?;
//! let api = HttpReviewApi::new(&config.api_base_url)?;
//!
//! let mut store = QueueStore::new();
//! store.load(&api).await;
//!
//! let mut controller = ResolutionController::new();
//! if let Some(item) = store.items().first() {
//!     let request = controller.accept(&store, &item.id.clone())?;
//!     let outcome = confirm(&api, &request).await;
//!     if let Some(id) = controller.finish_confirmation(&mut store, &request, outcome) {
//!         tokio::time::sleep(config.settle_delay()).await;
//!         controller.finish_removal(&mut store, &id);
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod api;
pub mod config;
mod error;
pub mod model;
pub mod queue;
pub mod resolution;

pub use api::{HttpReviewApi, ReviewApi, confirm};
pub use config::{ReviewConfig, ThemePreference};
pub use error::{Error, Result};
pub use model::{
    ConfirmationRequest, Decision, EXPAND_THRESHOLD, InferredLabel, MessageId, UnverifiedItem,
    UnverifiedMessage,
};
pub use queue::{QueueStatus, QueueStore};
pub use resolution::{ItemStatus, ResolutionController, ResolutionError, Selection};
