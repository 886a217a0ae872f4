//! UI-side state that is not part of the review core.

mod correction;

pub use correction::CorrectionState;
