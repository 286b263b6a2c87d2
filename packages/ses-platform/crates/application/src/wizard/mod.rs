//! The five-step environment creation flow.
//!
//! ```text
//! ProjectDetails -> CapabilitySelection -> EnablerReview -> ResourceSpec -> ReviewAndSubmit
//! ```
//!
//! Moves are strictly one step at a time. Every edit of the draft recomputes
//! the derived enablers and the cost estimate before it returns.

pub mod draft;
pub mod machine;
pub mod step;

pub use draft::{DerivedState, DraftConfiguration};
pub use machine::Wizard;
pub use step::{WizardState, WizardStep};
