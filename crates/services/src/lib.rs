#![forbid(unsafe_code)]

pub mod checklist_service;
pub mod error;
pub mod progress;

pub use checklist_service::ChecklistService;
pub use error::ChecklistServiceError;
pub use progress::{ProgressReport, StageProgressItem};
