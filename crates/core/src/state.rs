use std::collections::BTreeSet;

use crate::model::{Catalog, StageId, StepId, TaskId};

/// Immutable snapshot of the interaction state of one checklist view.
///
/// Fields are only reachable through read accessors. Every change goes
/// through the operations in `controller`, each of which returns a new
/// snapshot and leaves `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistState {
    pub(crate) selected_stage: StageId,
    pub(crate) completed_steps: BTreeSet<StepId>,
    pub(crate) expanded_tasks: BTreeSet<TaskId>,
    pub(crate) open_template: Option<StepId>,
    pub(crate) open_section: Option<usize>,
}

impl ChecklistState {
    /// Default state for a fresh view: first stage selected, nothing done,
    /// nothing expanded or open.
    #[must_use]
    pub fn initial(catalog: &Catalog) -> Self {
        Self {
            selected_stage: catalog.first_stage().id().clone(),
            completed_steps: BTreeSet::new(),
            expanded_tasks: BTreeSet::new(),
            open_template: None,
            open_section: None,
        }
    }

    /// Default state with a preferred starting stage.
    ///
    /// Falls back to the first stage when `stage` is not in the catalog.
    #[must_use]
    pub fn starting_at(catalog: &Catalog, stage: &StageId) -> Self {
        let mut state = Self::initial(catalog);
        if catalog.contains_stage(stage) {
            state.selected_stage = stage.clone();
        }
        state
    }

    #[must_use]
    pub fn selected_stage(&self) -> &StageId {
        &self.selected_stage
    }

    #[must_use]
    pub fn completed_steps(&self) -> &BTreeSet<StepId> {
        &self.completed_steps
    }

    #[must_use]
    pub fn expanded_tasks(&self) -> &BTreeSet<TaskId> {
        &self.expanded_tasks
    }

    #[must_use]
    pub fn open_template(&self) -> Option<&StepId> {
        self.open_template.as_ref()
    }

    #[must_use]
    pub fn open_section(&self) -> Option<usize> {
        self.open_section
    }

    #[must_use]
    pub fn is_step_completed(&self, id: &StepId) -> bool {
        self.completed_steps.contains(id)
    }

    #[must_use]
    pub fn is_task_expanded(&self, id: &TaskId) -> bool {
        self.expanded_tasks.contains(id)
    }

    #[must_use]
    pub fn is_template_open(&self, id: &StepId) -> bool {
        self.open_template.as_ref() == Some(id)
    }

    #[must_use]
    pub fn is_section_open(&self, index: usize) -> bool {
        self.open_section == Some(index)
    }
}
