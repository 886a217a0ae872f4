//! View components for the application.

mod correction;
mod header;
mod queue;

pub use correction::view_correction_dialog;
pub use header::view_header;
pub use queue::view_queue;
