//! Otto curriculum content
//!
//! The static display data behind the manufacturing-cell pages and the
//! assessment flow, plus the feedback payload types. Everything here is
//! hard-coded; there is no persistence.

pub mod catalog;
pub mod feedback;

pub use catalog::{ManufacturingStage, Question, StageStatus};
pub use feedback::Feedback;
