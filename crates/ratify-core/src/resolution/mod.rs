//! Resolution controller - turns reviewer decisions into confirmations.
//!
//! Per item:
//!
//! ```text
//! Unresolved --accept--------------> Confirming(inferred)
//! Unresolved --request_correction--> AwaitingCorrection
//! AwaitingCorrection --cancel------> Unresolved
//! AwaitingCorrection --confirm-----> Confirming(corrected)
//! Confirming --failure-------------> Unresolved
//! Confirming --success-------------> AwaitingRemoval -> Removing -> gone
//! ```
//!
//! Any action on an item that is not `Unresolved` is refused, never queued.

mod controller;

pub use controller::{ItemStatus, ResolutionController, ResolutionError, Selection};
