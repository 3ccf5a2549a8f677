#![forbid(unsafe_code)]

pub mod controller;
pub mod model;
pub mod progress;
pub mod state;

pub use controller::{ChecklistIntent, ParseIntentError, Transition, UnchangedReason};
pub use progress::{Progress, global_progress, stage_progress, task_progress};
pub use state::ChecklistState;
