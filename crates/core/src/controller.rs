//! Interaction operations over `ChecklistState`.
//!
//! Every operation borrows the current snapshot and returns the next one.
//! Invalid input (ids absent from the catalog, out-of-range section indexes)
//! is absorbed: the returned snapshot equals the input.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::{Catalog, ParseIdError, StageId, StepId, TaskId};
use crate::state::ChecklistState;

/// A request to run one of the five interaction operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChecklistIntent {
    ToggleStep(StepId),
    ToggleTask(TaskId),
    SelectStage(StageId),
    ToggleTemplate(StepId),
    ToggleSection(usize),
}

/// Why an operation left the state as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UnchangedReason {
    #[error("unknown step id: {0}")]
    UnknownStep(StepId),

    #[error("unknown task id: {0}")]
    UnknownTask(TaskId),

    #[error("unknown stage id: {0}")]
    UnknownStage(StageId),

    #[error("stage {stage} has no section at index {index}")]
    UnknownSection { stage: StageId, index: usize },

    #[error("stage {0} is already selected")]
    AlreadySelected(StageId),
}

/// Outcome of applying an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Changed,
    Unchanged(UnchangedReason),
}

impl Transition {
    #[must_use]
    pub fn is_changed(&self) -> bool {
        matches!(self, Transition::Changed)
    }
}

fn settle(
    current: &ChecklistState,
    next: Result<ChecklistState, UnchangedReason>,
) -> (ChecklistState, Transition) {
    match next {
        Ok(state) => (state, Transition::Changed),
        Err(reason) => (current.clone(), Transition::Unchanged(reason)),
    }
}

impl ChecklistState {
    fn try_toggle_step(&self, catalog: &Catalog, id: &StepId) -> Result<Self, UnchangedReason> {
        if !catalog.contains_step(id) {
            return Err(UnchangedReason::UnknownStep(id.clone()));
        }
        let mut next = self.clone();
        if !next.completed_steps.remove(id) {
            next.completed_steps.insert(id.clone());
        }
        Ok(next)
    }

    fn try_toggle_task(&self, catalog: &Catalog, id: &TaskId) -> Result<Self, UnchangedReason> {
        if !catalog.contains_task(id) {
            return Err(UnchangedReason::UnknownTask(id.clone()));
        }
        let mut next = self.clone();
        if !next.expanded_tasks.remove(id) {
            next.expanded_tasks.insert(id.clone());
        }
        Ok(next)
    }

    fn try_select_stage(&self, catalog: &Catalog, id: &StageId) -> Result<Self, UnchangedReason> {
        if !catalog.contains_stage(id) {
            return Err(UnchangedReason::UnknownStage(id.clone()));
        }
        if &self.selected_stage == id {
            return Err(UnchangedReason::AlreadySelected(id.clone()));
        }
        let mut next = self.clone();
        next.selected_stage = id.clone();
        // Section indexes are scoped to the stage they were opened in.
        next.open_section = None;
        Ok(next)
    }

    fn try_toggle_template(&self, catalog: &Catalog, id: &StepId) -> Result<Self, UnchangedReason> {
        if !catalog.contains_step(id) {
            return Err(UnchangedReason::UnknownStep(id.clone()));
        }
        let mut next = self.clone();
        next.open_template = if self.is_template_open(id) {
            None
        } else {
            Some(id.clone())
        };
        Ok(next)
    }

    fn try_toggle_section(&self, catalog: &Catalog, index: usize) -> Result<Self, UnchangedReason> {
        let section_count = catalog
            .stage(&self.selected_stage)
            .map_or(0, |stage| stage.sections().len());
        if index >= section_count {
            return Err(UnchangedReason::UnknownSection {
                stage: self.selected_stage.clone(),
                index,
            });
        }
        let mut next = self.clone();
        next.open_section = if self.is_section_open(index) {
            None
        } else {
            Some(index)
        };
        Ok(next)
    }

    /// Mark a step done, or undo it if it was already done.
    #[must_use]
    pub fn toggle_step_completion(&self, catalog: &Catalog, id: &StepId) -> Self {
        settle(self, self.try_toggle_step(catalog, id)).0
    }

    /// Expand a task, or collapse it if it was expanded.
    #[must_use]
    pub fn toggle_task_expansion(&self, catalog: &Catalog, id: &TaskId) -> Self {
        settle(self, self.try_toggle_task(catalog, id)).0
    }

    /// Select a stage. Unknown stages are rejected; reselecting is a no-op.
    #[must_use]
    pub fn select_stage(&self, catalog: &Catalog, id: &StageId) -> Self {
        settle(self, self.try_select_stage(catalog, id)).0
    }

    /// Open a step's template, closing any other; closes it if already open.
    #[must_use]
    pub fn toggle_template_visibility(&self, catalog: &Catalog, id: &StepId) -> Self {
        settle(self, self.try_toggle_template(catalog, id)).0
    }

    /// Open a section of the selected stage, closing any other; closes it if
    /// already open.
    #[must_use]
    pub fn toggle_section_visibility(&self, catalog: &Catalog, index: usize) -> Self {
        settle(self, self.try_toggle_section(catalog, index)).0
    }

    /// Apply an intent and report whether it changed anything.
    #[must_use]
    pub fn apply(&self, catalog: &Catalog, intent: &ChecklistIntent) -> (Self, Transition) {
        let next = match intent {
            ChecklistIntent::ToggleStep(id) => self.try_toggle_step(catalog, id),
            ChecklistIntent::ToggleTask(id) => self.try_toggle_task(catalog, id),
            ChecklistIntent::SelectStage(id) => self.try_select_stage(catalog, id),
            ChecklistIntent::ToggleTemplate(id) => self.try_toggle_template(catalog, id),
            ChecklistIntent::ToggleSection(index) => self.try_toggle_section(catalog, *index),
        };
        settle(self, next)
    }
}

//
// ─── TEXT FORM ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseIntentError {
    #[error("expected <action>:<target>, got {0:?}")]
    MissingTarget(String),

    #[error("unknown action {0:?}")]
    UnknownAction(String),

    #[error(transparent)]
    InvalidId(#[from] ParseIdError),

    #[error("invalid section index {0:?}")]
    InvalidIndex(String),
}

impl FromStr for ChecklistIntent {
    type Err = ParseIntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (action, target) = s
            .split_once(':')
            .ok_or_else(|| ParseIntentError::MissingTarget(s.to_owned()))?;
        match action.trim() {
            "toggle-step" => Ok(Self::ToggleStep(target.parse()?)),
            "toggle-task" => Ok(Self::ToggleTask(target.parse()?)),
            "select-stage" => Ok(Self::SelectStage(target.parse()?)),
            "toggle-template" => Ok(Self::ToggleTemplate(target.parse()?)),
            "toggle-section" => target
                .trim()
                .parse()
                .map(Self::ToggleSection)
                .map_err(|_| ParseIntentError::InvalidIndex(target.to_owned())),
            other => Err(ParseIntentError::UnknownAction(other.to_owned())),
        }
    }
}

impl fmt::Display for ChecklistIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToggleStep(id) => write!(f, "toggle-step:{id}"),
            Self::ToggleTask(id) => write!(f, "toggle-task:{id}"),
            Self::SelectStage(id) => write!(f, "select-stage:{id}"),
            Self::ToggleTemplate(id) => write!(f, "toggle-template:{id}"),
            Self::ToggleSection(index) => write!(f, "toggle-section:{index}"),
        }
    }
}
