use guide_core::model::{Catalog, StageId};
use guide_core::{ChecklistState, Progress, global_progress, stage_progress};

/// Progress of one stage, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageProgressItem {
    pub stage_id: StageId,
    pub title: String,
    pub progress: Progress,
}

/// Aggregated view of checklist progress, useful for UI and reporting.
///
/// Presentation-agnostic: no pre-formatted strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressReport {
    pub global: Progress,
    pub stages: Vec<StageProgressItem>,
}

impl ProgressReport {
    #[must_use]
    pub fn build(catalog: &Catalog, state: &ChecklistState) -> Self {
        let completed = state.completed_steps();
        Self {
            global: global_progress(catalog, completed),
            stages: catalog
                .stages()
                .iter()
                .map(|stage| StageProgressItem {
                    stage_id: stage.id().clone(),
                    title: stage.title().to_owned(),
                    progress: stage_progress(stage, completed),
                })
                .collect(),
        }
    }

    /// Stages whose every step is done.
    pub fn completed_stages(&self) -> impl Iterator<Item = &StageProgressItem> {
        self.stages.iter().filter(|item| item.progress.is_complete())
    }
}
