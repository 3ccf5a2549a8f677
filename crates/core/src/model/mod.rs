mod catalog;
mod ids;
mod stage;
mod task;

pub use catalog::{Catalog, CatalogError};
pub use ids::{ParseIdError, StageId, StepId, TaskId};
pub use stage::{Section, SectionDetails, Stage};
pub use task::{Step, Task, TemplateExample};
