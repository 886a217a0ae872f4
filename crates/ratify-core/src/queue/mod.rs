//! Queue store - the single source of truth for unresolved items.
//!
//! Holds the snapshot loaded from the review service together with two
//! transient projections keyed by item id:
//! - **expanded**: items whose full text is shown
//! - **removing**: the one item currently in its exit animation
//!
//! Items only ever leave the store through `complete_removal`, after their
//! confirmation has succeeded.

mod store;

pub use store::{QueueStatus, QueueStore};
