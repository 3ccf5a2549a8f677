use guide_core::model::{Catalog, StageId};
use guide_core::{ChecklistState, stage_progress};
use serde::Serialize;

/// UI-ready representation of a stage in the stage selector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StageTabVm {
    pub id: StageId,
    pub title: String,
    pub progress: u8,
    pub is_selected: bool,
    pub is_complete: bool,
}

/// Map every catalog stage, in order, into selector-friendly view models.
#[must_use]
pub fn map_stage_tabs(catalog: &Catalog, state: &ChecklistState) -> Vec<StageTabVm> {
    catalog
        .stages()
        .iter()
        .map(|stage| {
            let progress = stage_progress(stage, state.completed_steps());
            StageTabVm {
                id: stage.id().clone(),
                title: stage.title().to_owned(),
                progress: progress.percentage,
                is_selected: stage.id() == state.selected_stage(),
                is_complete: progress.is_complete(),
            }
        })
        .collect()
}
